use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::clusters::jaccard;
use crate::core::{AnalysisConfig, CoOccurrenceMatrix, FrequentSet, NumericDistribution, PairStatistic, PatternAnalysis, Rule};
use crate::observability::PerformanceTracker;

static NUMERIC_WITH_UNIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?(px|%|rem|em|vh|vw)?$").unwrap());
static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());
static RGB_TUPLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgba?\(\s*[\d.]+%?\s*,\s*[\d.]+%?\s*,\s*[\d.]+%?\s*(,\s*[\d.]+\s*)?\)$").unwrap()
});
static NAMED_KEYWORDS: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    [
        "flex", "inline-flex", "grid", "inline-grid", "block", "inline-block", "inline", "none",
        "contents", "table", "static", "relative", "absolute", "fixed", "sticky", "normal",
        "bold", "bolder", "lighter",
    ]
    .into_iter()
    .collect()
});

/// Extracts the leading numeric magnitude from a value like `"12px"` or
/// `"1.5rem"`. Ignores the unit: distributions are computed over
/// magnitudes regardless of unit.
fn parse_numeric(value: &str) -> Option<f64> {
    if !NUMERIC_WITH_UNIT.is_match(value) {
        return None;
    }
    let numeric_prefix: String = value
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    numeric_prefix.parse::<f64>().ok()
}

fn is_recognized_pattern(value: &str) -> bool {
    NUMERIC_WITH_UNIT.is_match(value)
        || HEX_COLOR.is_match(value)
        || RGB_TUPLE.is_match(value)
        || NAMED_KEYWORDS.contains(value)
}

/// Quartile via linear interpolation on a sorted sample.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }
    let index = (sorted.len() - 1) as f64 * p;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let fraction = index - lower as f64;
        sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
    }
}

fn numeric_distribution(mut values: Vec<f64>) -> NumericDistribution {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let stddev = variance.sqrt();
    let q1 = quantile(&values, 0.25);
    let q2 = quantile(&values, 0.5);
    let q3 = quantile(&values, 0.75);
    let iqr = q3 - q1;
    let lower_fence = q1 - 1.5 * iqr;
    let upper_fence = q3 + 1.5 * iqr;
    let outliers = values
        .iter()
        .copied()
        .filter(|v| *v < lower_fence || *v > upper_fence)
        .collect();

    NumericDistribution {
        mean,
        median: q2,
        stddev,
        q1,
        q2,
        q3,
        outliers,
    }
}

/// Shannon entropy, in bits, of the empirical value distribution for one
/// property. A single distinct value (including a single rule) yields
/// entropy `0.0`.
fn value_entropy(values: &[&str]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(*value).or_insert(0) += 1;
    }
    let total = values.len() as f64;
    -counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * p.log2()
        })
        .sum::<f64>()
}

/// Abramowitz & Stegun 7.1.26 approximation of the error function (max
/// absolute error ~1.5e-7), used to derive the chi-square(df=1) CDF without
/// pulling in a dedicated statistics crate.
fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;
    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();
    sign * y
}

/// `1 - CDF(chi^2, df=1)` evaluated at `chi_square`.
fn chi_square_p_value(chi_square: f64) -> f64 {
    if chi_square <= 0.0 {
        return 1.0;
    }
    (1.0 - erf((chi_square / 2.0).sqrt())).clamp(0.0, 1.0)
}

/// Chi-square and mutual-information statistics for the 2x2 contingency of
/// "rule contains a" vs "rule contains b".
fn pair_statistic(
    a: &str,
    b: &str,
    total_rules: usize,
    matrix: &CoOccurrenceMatrix,
    config: &AnalysisConfig,
) -> PairStatistic {
    let n = total_rules as f64;
    let n11 = matrix.co(a, b) as f64;
    let n10 = matrix.freq(a) as f64 - n11;
    let n01 = matrix.freq(b) as f64 - n11;
    let n00 = n - n11 - n10 - n01;

    let row1 = n11 + n10;
    let row0 = n01 + n00;
    let col1 = n11 + n01;
    let col0 = n10 + n00;

    let cells = [(n11, row1, col1), (n10, row1, col0), (n01, row0, col1), (n00, row0, col0)];

    let mut chi_square = 0.0;
    for (observed, row_total, col_total) in cells {
        let expected = row_total * col_total / n;
        if expected > 0.0 {
            chi_square += (observed - expected).powi(2) / expected;
        }
    }

    let mut mutual_information = 0.0;
    for (joint, row_total, col_total) in cells {
        if joint > 0.0 && n > 0.0 {
            let p_joint = joint / n;
            let p_row = row_total / n;
            let p_col = col_total / n;
            if p_row > 0.0 && p_col > 0.0 {
                mutual_information += p_joint * (p_joint / (p_row * p_col)).log2();
            }
        }
    }

    let jaccard = jaccard(a, b, matrix);
    let p_value = chi_square_p_value(chi_square);

    PairStatistic {
        a: a.to_string(),
        b: b.to_string(),
        jaccard,
        chi_square,
        mutual_information,
        p_value,
        strongly_correlated: jaccard >= config.pair_correlation_threshold,
        significant: p_value < config.significance_alpha,
    }
}

/// Computes correlations for every property pair participating in a
/// detected pattern (any mined frequent set of size >= 2) plus per-property
/// numeric distributions, value entropy, and non-standard-value flags.
pub fn analyze_statistics(
    rules: &[&Rule],
    frequent_sets: &[FrequentSet],
    matrix: &CoOccurrenceMatrix,
    config: &AnalysisConfig,
    tracker: &PerformanceTracker,
) -> PatternAnalysis {
    let _span = tracker.span("statistics.analyze_statistics");

    let mut pairs: BTreeSet<(String, String)> = BTreeSet::new();
    for set in frequent_sets {
        if set.properties.len() < 2 {
            continue;
        }
        let members: Vec<&String> = set.properties.iter().collect();
        for i in 0..members.len() {
            for j in (i + 1)..members.len() {
                pairs.insert((members[i].clone(), members[j].clone()));
            }
        }
    }

    let pair_stats = pairs
        .iter()
        .map(|(a, b)| pair_statistic(a, b, rules.len(), matrix, config))
        .collect();

    let mut values_by_property: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for rule in rules {
        for (property, value) in rule.properties.iter() {
            values_by_property.entry(property).or_default().push(value);
        }
    }

    let mut numeric_distributions = BTreeMap::new();
    let mut value_entropies = BTreeMap::new();
    let mut non_standard_values = BTreeMap::new();

    for (property, values) in &values_by_property {
        let numeric: Vec<f64> = values.iter().filter_map(|v| parse_numeric(v)).collect();
        if !numeric.is_empty() {
            numeric_distributions.insert(property.to_string(), numeric_distribution(numeric));
        }

        value_entropies.insert(property.to_string(), value_entropy(values));

        let non_standard: BTreeSet<String> = values
            .iter()
            .filter(|v| !is_recognized_pattern(v))
            .map(|v| v.to_string())
            .collect();
        if !non_standard.is_empty() {
            non_standard_values.insert(property.to_string(), non_standard);
        }
    }

    PatternAnalysis {
        pair_stats,
        numeric_distributions,
        value_entropy: value_entropies,
        non_standard_values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_distribution_matches_seed_case() {
        let dist = numeric_distribution(vec![10.0, 20.0, 30.0, 40.0, 50.0]);
        assert!((dist.mean - 30.0).abs() < 1e-9);
        assert!((dist.median - 30.0).abs() < 1e-9);
        assert!((dist.stddev - 14.142135).abs() < 1e-4);
        assert!((dist.q1 - 20.0).abs() < 1e-9);
        assert!((dist.q3 - 40.0).abs() < 1e-9);
        assert!(dist.outliers.is_empty());
    }

    #[test]
    fn single_value_entropy_is_zero() {
        assert_eq!(value_entropy(&["1rem"]), 0.0);
    }

    #[test]
    fn independent_properties_have_near_zero_chi_square() {
        // 100 rules; a and b each present with marginal probability 0.5,
        // independent (joint probability 0.25).
        let mut matrix = CoOccurrenceMatrix::new();
        for i in 0..100 {
            let has_a = i % 2 == 0;
            let has_b = (i / 2) % 2 == 0;
            if has_a {
                matrix.record_occurrence("a");
            }
            if has_b {
                matrix.record_occurrence("b");
            }
            if has_a && has_b {
                matrix.record_pair("a", "b");
            }
        }
        let config = AnalysisConfig::default();
        let stat = pair_statistic("a", "b", 100, &matrix, &config);
        assert!(stat.chi_square < 0.5, "chi_square = {}", stat.chi_square);
        assert!(stat.p_value > 0.7, "p_value = {}", stat.p_value);
        assert!(!stat.significant);
    }

    #[test]
    fn strongly_correlated_and_significant_flags_follow_config_thresholds() {
        // a and b always co-occur across 10 rules: jaccard = 1.0, and the
        // pair is maximally dependent, so both derived flags should be set
        // under the default thresholds.
        let mut matrix = CoOccurrenceMatrix::new();
        for _ in 0..10 {
            matrix.record_occurrence("a");
            matrix.record_occurrence("b");
            matrix.record_pair("a", "b");
        }
        let config = AnalysisConfig::default();
        let stat = pair_statistic("a", "b", 10, &matrix, &config);
        assert!((stat.jaccard - 1.0).abs() < 1e-9);
        assert!(stat.strongly_correlated);
        assert!(stat.significant);

        let strict = AnalysisConfig {
            pair_correlation_threshold: 1.1,
            significance_alpha: 0.0,
            ..AnalysisConfig::default()
        };
        let stat = pair_statistic("a", "b", 10, &matrix, &strict);
        assert!(!stat.strongly_correlated);
        assert!(!stat.significant);
    }

    #[test]
    fn hex_and_rgb_values_are_recognized() {
        assert!(is_recognized_pattern("#fff"));
        assert!(is_recognized_pattern("#aabbcc"));
        assert!(is_recognized_pattern("rgba(0, 0, 0, 0.5)"));
        assert!(is_recognized_pattern("flex"));
        assert!(!is_recognized_pattern("totally-custom-token"));
    }
}
