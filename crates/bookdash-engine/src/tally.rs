use std::collections::HashMap;

/// Occurrence counter that remembers first-appearance order.
///
/// Ranking a tally is a stable sort on the count, so equal counts keep the
/// order in which their keys were first seen.
#[derive(Debug, Default)]
pub(crate) struct Tally<'a> {
    index: HashMap<&'a str, usize>,
    entries: Vec<(&'a str, usize)>,
}

impl<'a> Tally<'a> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, key: &'a str) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Entries in first-appearance order
    pub(crate) fn entries(&self) -> &[(&'a str, usize)] {
        &self.entries
    }

    /// Entries sorted by count descending, ties in first-appearance order
    pub(crate) fn into_ranked(mut self) -> Vec<(&'a str, usize)> {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries
    }

    pub(crate) fn into_map(self) -> HashMap<String, usize> {
        self.entries
            .into_iter()
            .map(|(key, count)| (key.to_string(), count))
            .collect()
    }
}

impl<'a> FromIterator<&'a str> for Tally<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}
