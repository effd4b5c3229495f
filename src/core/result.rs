use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::cluster::Cluster;
use super::property_map::PropertyMap;
use crate::errors::EngineWarning;

/// Symmetric property×property co-occurrence matrix and per-property
/// frequency vector.
///
/// Invariant: `count(a, b) <= min(freq(a), freq(b))` for all `a`, `b`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CoOccurrenceMatrix {
    freq: std::collections::BTreeMap<String, usize>,
    co: std::collections::BTreeMap<String, std::collections::BTreeMap<String, usize>>,
}

impl CoOccurrenceMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_occurrence(&mut self, property: &str) {
        *self.freq.entry(property.to_string()).or_insert(0) += 1;
    }

    pub fn record_pair(&mut self, a: &str, b: &str) {
        *self
            .co
            .entry(a.to_string())
            .or_default()
            .entry(b.to_string())
            .or_insert(0) += 1;
        *self
            .co
            .entry(b.to_string())
            .or_default()
            .entry(a.to_string())
            .or_insert(0) += 1;
    }

    pub fn freq(&self, property: &str) -> usize {
        self.freq.get(property).copied().unwrap_or(0)
    }

    pub fn co(&self, a: &str, b: &str) -> usize {
        self.co
            .get(a)
            .and_then(|row| row.get(b))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of co-occurrence counts between `property` and every other
    /// property (used by the cluster cohesion denominator).
    pub fn co_total(&self, property: &str) -> usize {
        self.co
            .get(property)
            .map(|row| row.values().sum())
            .unwrap_or(0)
    }

    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.freq.keys().map(|s| s.as_str())
    }

    pub fn property_count(&self) -> usize {
        self.freq.len()
    }
}

/// A correlation/independence summary for one property pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairStatistic {
    pub a: String,
    pub b: String,
    pub jaccard: f64,
    pub chi_square: f64,
    pub mutual_information: f64,
    pub p_value: f64,
    /// `jaccard >= config.pair_correlation_threshold`.
    pub strongly_correlated: bool,
    /// `p_value < config.significance_alpha`.
    pub significant: bool,
}

/// Mean/median/stddev/quartile/outlier summary for a property's numeric
/// values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumericDistribution {
    pub mean: f64,
    pub median: f64,
    pub stddev: f64,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub outliers: Vec<f64>,
}

/// Output of the Statistical Analyzer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternAnalysis {
    pub pair_stats: Vec<PairStatistic>,
    pub numeric_distributions: std::collections::BTreeMap<String, NumericDistribution>,
    pub value_entropy: std::collections::BTreeMap<String, f64>,
    pub non_standard_values: std::collections::BTreeMap<String, BTreeSet<String>>,
}

/// The four-way classification a BEM selector name falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BemClassification {
    Block,
    Element,
    Modifier,
    ElementModifier,
    Unclassified,
}

/// A parsed, classified selector plus the dependencies its values reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BemComponent {
    pub name: String,
    pub block: Option<String>,
    pub element: Option<String>,
    pub modifier: Option<String>,
    pub classification: BemClassification,
    pub styles: PropertyMap,
    pub dependencies: BTreeSet<String>,
}

/// The relationship kinds the BEM analyzer emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BemRelationshipKind {
    Parent,
    Modifier,
    ElementModifier,
    Variant,
    Extension,
    Composition,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BemRelationship {
    pub source: String,
    pub target: String,
    pub kind: BemRelationshipKind,
    pub confidence: f64,
}

/// Output of `bem_analyze`: the naming subsystem run on its own, independent
/// of clustering and statistics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BemAnalysis {
    pub components: Vec<BemComponent>,
    /// Adjacency list keyed by relationship source name; parent pointers are
    /// never reified, so component names are the stable keys.
    pub relationships: std::collections::BTreeMap<String, Vec<BemRelationship>>,
    pub suggestions: Vec<Suggestion>,
}

/// The taxonomy of refactoring suggestions, declared in the tie-break order
/// suggestion ranking uses: utility, variable, mixin, shared, BEM structure,
/// relationship, naming, common-pattern. `#[derive(PartialOrd, Ord)]` ranks
/// variants by declaration order, which makes that tie-break a one-line
/// `kind.cmp(other)` comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SuggestionKind {
    Utility,
    Variable,
    Mixin,
    Shared,
    BemStructure,
    Relationship,
    Naming,
    CommonPattern,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub description: String,
    pub affected: BTreeSet<String>,
    pub confidence: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DuplicationGroup {
    pub property: String,
    pub value: String,
    pub occurrences: usize,
}

/// Summary counts and scores from the Metrics Aggregator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetrics {
    pub total_rules: usize,
    pub total_properties: usize,
    pub most_used: Vec<(String, usize)>,
    pub least_used: Vec<(String, usize)>,
    pub average_rule_complexity: f64,
    pub average_specificity: f64,
    pub maintainability_index: f64,
    pub duplication_ratio: f64,
    pub duplication_groups: Vec<DuplicationGroup>,
}

/// One operation's aggregate timing, in seconds. Durations are stored as
/// seconds rather than `std::time::Duration` so the result serializes
/// without a custom impl.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationTiming {
    pub count: u64,
    pub total_seconds: f64,
    pub mean_seconds: f64,
}

pub type PerformanceReport = std::collections::BTreeMap<String, OperationTiming>;

/// The full output of a single `analyze()` call. Owned by the caller;
/// nothing inside it is retained by the engine after it returns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub patterns: PatternAnalysis,
    pub clusters: Vec<Cluster>,
    pub bem: BemAnalysis,
    pub suggestions: Vec<Suggestion>,
    pub metrics: AnalysisMetrics,
    pub performance: PerformanceReport,
    /// Non-fatal `InvariantViolation`s collected during this analysis,
    /// each logged with full context.
    pub warnings: Vec<EngineWarning>,
}
