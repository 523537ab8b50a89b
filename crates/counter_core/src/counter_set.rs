use std::collections::btree_set;
use std::collections::BTreeSet;

/// Distinct counter-type names, compared exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CounterTypeSet {
    names: BTreeSet<String>,
}

impl CounterTypeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the name was not present yet.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.names.iter()
    }

    /// Set union; order of merging never matters.
    pub fn merge(&mut self, other: CounterTypeSet) {
        if self.names.len() < other.names.len() {
            let smaller = std::mem::replace(&mut self.names, other.names);
            self.names.extend(smaller);
        } else {
            self.names.extend(other.names);
        }
    }

    pub fn union(mut self, other: CounterTypeSet) -> CounterTypeSet {
        self.merge(other);
        self
    }

    /// Names in output order: case-insensitive, exact byte order on ties.
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_by_cached_key(|name| (name.to_lowercase(), name.to_string()));
        names
    }
}

impl<S: Into<String>> Extend<S> for CounterTypeSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> FromIterator<S> for CounterTypeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for CounterTypeSet {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

impl<'a> IntoIterator for &'a CounterTypeSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
