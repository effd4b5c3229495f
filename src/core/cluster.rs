use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A property set whose support meets the configured minimum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequentSet {
    pub properties: BTreeSet<String>,
    pub support: usize,
}

impl FrequentSet {
    pub fn new(properties: BTreeSet<String>, support: usize) -> Self {
        Self { properties, support }
    }
}

/// A frequent set plus the values observed for it and a recursive
/// decomposition of the remaining properties of its matching rules into
/// child clusters.
///
/// Invariant: for any descendant `D` of `self`, `self.properties` and
/// `D.properties` are disjoint — a cluster partitions its rules' residual
/// properties into children.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: u64,
    pub properties: BTreeSet<String>,
    pub values: Vec<String>,
    pub children: Vec<Cluster>,
    pub cohesion: f64,
    pub support: usize,
}

impl Cluster {
    /// All properties claimed by this cluster and, transitively, its
    /// children. Used to enforce and test the disjointness invariant.
    pub fn all_properties(&self) -> BTreeSet<String> {
        let mut all = self.properties.clone();
        for child in &self.children {
            all.extend(child.all_properties());
        }
        all
    }
}
