// src/analysis/counter.rs
use indexmap::IndexMap;

/// Frequency table that remembers the order values were first seen
#[derive(Debug, Default)]
pub struct FrequencyCounter {
    counts: IndexMap<String, usize>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: &str) {
        match self.counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.to_string(), 1);
            }
        }
    }

    /// Top `n` entries by descending count; equal counts keep first-seen order
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = self
            .counts
            .iter()
            .map(|(value, &count)| (value.clone(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyCounter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counter = Self::new();
        for value in iter {
            counter.add(value.as_ref());
        }
        counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_each_distinct_value_once() {
        let counter: FrequencyCounter = ["a", "b", "a", "c", "a"].into_iter().collect();
        assert_eq!(
            counter.most_common(usize::MAX),
            vec![
                ("a".to_string(), 3),
                ("b".to_string(), 1),
                ("c".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_later_value_overtakes_earlier_one() {
        let counter: FrequencyCounter = ["sql", "excel", "excel"].into_iter().collect();
        assert_eq!(
            counter.most_common(2),
            vec![("excel".to_string(), 2), ("sql".to_string(), 1)]
        );
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let counter: FrequencyCounter = ["pune", "delhi", "mumbai", "delhi", "pune", "goa"]
            .into_iter()
            .collect();
        assert_eq!(
            counter.most_common(10),
            vec![
                ("pune".to_string(), 2),
                ("delhi".to_string(), 2),
                ("mumbai".to_string(), 1),
                ("goa".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_most_common_truncates() {
        let counter: FrequencyCounter = ["x", "y", "y"].into_iter().collect();
        assert_eq!(counter.most_common(1), vec![("y".to_string(), 2)]);
        assert!(counter.most_common(0).is_empty());
    }

    #[test]
    fn test_empty_counter() {
        let counter = FrequencyCounter::new();
        assert!(counter.most_common(5).is_empty());
    }
}
