use crate::core::{CoOccurrenceMatrix, Rule};

/// Builds `freq` and `co` from the rule set. For each rule and each
/// unordered property pair within it, increments both `co[a][b]` and
/// `co[b][a]`; for each property, increments `freq[p]`.
pub fn build_cooccurrence(rules: &[&Rule]) -> CoOccurrenceMatrix {
    let mut matrix = CoOccurrenceMatrix::new();

    for rule in rules {
        let properties: Vec<&str> = rule.properties.keys().collect();

        for property in &properties {
            matrix.record_occurrence(property);
        }

        for i in 0..properties.len() {
            for j in (i + 1)..properties.len() {
                matrix.record_pair(properties[i], properties[j]);
            }
        }
    }

    matrix
}
