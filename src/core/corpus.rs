use serde::{Deserialize, Serialize};

use super::property_map::PropertyMap;

/// A single named style rule: a selector and its ordered property set.
///
/// A rule with no properties is valid — it participates in no co-occurrence
/// but is still counted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub selector: String,
    pub properties: PropertyMap,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            properties: PropertyMap::new(),
        }
    }

    pub fn with_properties(selector: impl Into<String>, properties: PropertyMap) -> Self {
        Self {
            selector: selector.into(),
            properties,
        }
    }
}

/// The ordered sequence of rules a single analysis runs over.
///
/// Non-empty iff any analysis is meaningful; an empty corpus yields an
/// empty `AnalysisResult` with no error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleCorpus {
    pub rules: Vec<Rule>,
}

impl StyleCorpus {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl std::ops::Deref for StyleCorpus {
    type Target = [Rule];

    fn deref(&self) -> &Self::Target {
        &self.rules
    }
}

impl FromIterator<Rule> for StyleCorpus {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        StyleCorpus {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StyleCorpus {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
