//! Seed data adapter
//!
//! Turns the two kinds of initial data a tag list accepts into a [`Seed`]:
//!
//! - **Vocabulary**: a closed list of selectable values, some of them
//!   pre-selected. Produces a closed-vocabulary tag list.
//! - **Serialized values**: a JSON array of strings typed earlier by the
//!   user. Produces a free-form tag list. Unparseable input means "no
//!   initial values".

use crate::taglist::Mode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while reading seed data
///
/// Never surfaced by [`Seed::from_serialized`], which recovers to an
/// empty list.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The serialized value list could not be parsed
    #[error("Malformed seed data: {0}")]
    MalformedSeedData(#[from] serde_json::Error),
}

/// One entry of a closed vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Selectable value
    pub value: String,
    /// Whether the value starts out committed
    #[serde(default)]
    pub selected: bool,
}

impl VocabularyEntry {
    /// An entry that is not pre-selected
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            selected: false,
        }
    }

    /// A pre-selected entry
    #[must_use]
    pub fn selected(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            selected: true,
        }
    }
}

/// Initial data for a tag list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    /// Closed vocabulary with optional pre-selections
    Vocabulary(Vec<VocabularyEntry>),
    /// Free-form initial values
    Values(Vec<String>),
}

impl Default for Seed {
    fn default() -> Self {
        Self::Values(Vec::new())
    }
}

impl Seed {
    /// Parse a serialized (JSON array) value list
    ///
    /// # Errors
    ///
    /// Returns `SeedError::MalformedSeedData` if `raw` is not a JSON array
    /// of strings.
    pub fn try_from_serialized(raw: &str) -> Result<Self, SeedError> {
        let values: Vec<String> = serde_json::from_str(raw)?;
        Ok(Self::Values(values))
    }

    /// Parse a serialized value list, treating malformed input as empty
    #[must_use]
    pub fn from_serialized(raw: &str) -> Self {
        Self::try_from_serialized(raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unparseable initial values");
            Self::Values(Vec::new())
        })
    }

    /// Parse a comma-separated vocabulary; a trailing `*` pre-selects an entry
    ///
    /// Blank entries are skipped.
    ///
    /// ```
    /// use taglist::seed::{Seed, VocabularyEntry};
    ///
    /// let seed = Seed::from_vocabulary_spec("red*, green");
    /// assert_eq!(
    ///     seed,
    ///     Seed::Vocabulary(vec![
    ///         VocabularyEntry::selected("red"),
    ///         VocabularyEntry::new("green"),
    ///     ])
    /// );
    /// ```
    #[must_use]
    pub fn from_vocabulary_spec(spec: &str) -> Self {
        let entries = spec
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_suffix('*') {
                Some(value) => VocabularyEntry::selected(value.trim_end()),
                None => VocabularyEntry::new(s),
            })
            .collect();
        Self::Vocabulary(entries)
    }

    /// Mode implied by this seed
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Vocabulary(_) => Mode::ClosedVocabulary,
            Self::Values(_) => Mode::FreeForm,
        }
    }

    /// Full vocabulary, empty in free-form mode
    #[must_use]
    pub fn vocabulary(&self) -> Vec<String> {
        match self {
            Self::Vocabulary(entries) => entries.iter().map(|e| e.value.clone()).collect(),
            Self::Values(_) => Vec::new(),
        }
    }

    /// Values to commit at construction, in order
    #[must_use]
    pub fn initial_values(&self) -> Vec<String> {
        match self {
            Self::Vocabulary(entries) => entries
                .iter()
                .filter(|e| e.selected)
                .map(|e| e.value.clone())
                .collect(),
            Self::Values(values) => values.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_values() {
        let seed = Seed::from_serialized(r#"["a@example.com", "b@example.com"]"#);
        assert_eq!(seed.mode(), Mode::FreeForm);
        assert_eq!(seed.initial_values(), vec!["a@example.com", "b@example.com"]);
        assert!(seed.vocabulary().is_empty());
    }

    #[test]
    fn test_malformed_serialized_values_fall_back_to_empty() {
        for raw in ["", "not json", r#"{"a": 1}"#, "[1, 2]", r#"["a""#] {
            assert_eq!(Seed::from_serialized(raw), Seed::Values(Vec::new()), "{raw}");
        }
    }

    #[test]
    fn test_malformed_serialized_values_error_kind() {
        let err = Seed::try_from_serialized("nope").unwrap_err();
        assert!(matches!(err, SeedError::MalformedSeedData(_)));
        assert!(err.to_string().starts_with("Malformed seed data"));
    }

    #[test]
    fn test_vocabulary_seed() {
        let seed = Seed::Vocabulary(vec![
            VocabularyEntry::new("red"),
            VocabularyEntry::selected("green"),
            VocabularyEntry::new("blue"),
        ]);
        assert_eq!(seed.mode(), Mode::ClosedVocabulary);
        assert_eq!(seed.vocabulary(), vec!["red", "green", "blue"]);
        assert_eq!(seed.initial_values(), vec!["green"]);
    }

    #[test]
    fn test_vocabulary_spec_skips_blanks() {
        let seed = Seed::from_vocabulary_spec(" a ,, b* ,");
        assert_eq!(seed.vocabulary(), vec!["a", "b"]);
        assert_eq!(seed.initial_values(), vec!["b"]);
    }
}
