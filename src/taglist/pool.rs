//! Allowed-value pool for closed-vocabulary mode

/// Values still selectable, in vocabulary order
///
/// Values removed by a commit come back at the front when their item is
/// deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedPool {
    values: Vec<String>,
}

impl AllowedPool {
    /// Create a pool holding the full vocabulary
    #[must_use]
    pub fn new(vocabulary: Vec<String>) -> Self {
        Self { values: vocabulary }
    }

    /// Whether `value` can currently be selected
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Remove every copy of `value`
    pub fn remove(&mut self, value: &str) {
        self.values.retain(|v| v != value);
    }

    /// Put `value` back as the first candidate
    pub fn restore(&mut self, value: String) {
        self.values.insert(0, value);
    }

    /// Iterate remaining values in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Number of remaining values
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the pool is exhausted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remaining values as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.values
    }
}
