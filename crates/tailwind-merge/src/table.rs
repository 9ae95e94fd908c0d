use std::collections::HashMap;

use crate::classifier::{Classifier, GroupId};

/// A classifier backed by a lookup table of named groups.
///
/// Each group lists exact class names and class-name prefixes. An exact
/// match beats any prefix; among prefixes the longest wins. A prefix only
/// matches when something follows it, so the prefix `btn-size-` matches
/// `btn-size-lg` but not `btn-size-`.
#[derive(Clone, Debug, Default)]
pub struct TableClassifier {
    exact: HashMap<String, String>,
    prefixes: Vec<(String, String)>,
    overrides: HashMap<String, Vec<String>>,
}

impl TableClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_class(&mut self, group: impl Into<String>, class: impl Into<String>) {
        self.exact.insert(class.into(), group.into());
    }

    pub fn insert_prefix(&mut self, group: impl Into<String>, prefix: impl Into<String>) {
        let prefix = prefix.into();
        let group = group.into();
        match self.prefixes.iter_mut().find(|(existing, _)| *existing == prefix) {
            Some(entry) => entry.1 = group,
            None => self.prefixes.push((prefix, group)),
        }
        // Longest prefix first so the first match is the most specific one
        self.prefixes
            .sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    }

    /// Declares that a later class of `group` removes earlier classes of `overridden`.
    pub fn insert_override(&mut self, group: impl Into<String>, overridden: impl Into<String>) {
        self.overrides
            .entry(group.into())
            .or_default()
            .push(overridden.into());
    }

    pub fn with_classes<I, S>(mut self, group: &str, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for class in classes {
            self.insert_class(group, class);
        }
        self
    }

    pub fn with_prefixes<I, S>(mut self, group: &str, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for prefix in prefixes {
            self.insert_prefix(group, prefix);
        }
        self
    }

    pub fn with_overrides<I, S>(mut self, group: &str, overridden: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for other in overridden {
            self.insert_override(group, other);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.prefixes.is_empty()
    }
}

impl Classifier for TableClassifier {
    fn classify<'a>(&'a self, class: &'a str) -> Option<GroupId<'a>> {
        if let Some(group) = self.exact.get(class) {
            return Some(GroupId::Custom(group));
        }
        self.prefixes
            .iter()
            .find(|(prefix, _)| class.len() > prefix.len() && class.starts_with(prefix.as_str()))
            .map(|(_, group)| GroupId::Custom(group))
    }

    fn conflicts<'a>(&'a self, group: &GroupId<'a>) -> Vec<GroupId<'a>> {
        let GroupId::Custom(name) = group else {
            return Vec::new();
        };
        self.overrides
            .get(*name)
            .map(|overridden| {
                overridden
                    .iter()
                    .map(|other| GroupId::Custom(other.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }
}
