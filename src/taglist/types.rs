//! Value types shared by the tag list controller

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle identifying a committed item within one controller
///
/// Handles are never reused, so two items with the same value (when
/// duplicates are allowed) are still told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A committed token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub(crate) id: ItemId,
    pub(crate) value: String,
}

impl Item {
    /// Handle of this item
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// The item's value
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Operating mode, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Only values from a predefined vocabulary may be committed
    ClosedVocabulary,
    /// Any typed value may be committed
    FreeForm,
}

/// Behavior switches for a tag list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TagListConfig {
    /// Disable duplicate rejection and allowed-value pool bookkeeping
    #[serde(default)]
    pub allow_duplicates: bool,
    /// Maximum number of items, 0 for unbounded
    #[serde(default)]
    pub max_items: usize,
    /// Accept reorders reported by a reorder provider
    #[serde(default)]
    pub reorder_enabled: bool,
}

impl TagListConfig {
    /// Allow or forbid duplicate values
    #[must_use]
    pub const fn with_allow_duplicates(mut self, allow: bool) -> Self {
        self.allow_duplicates = allow;
        self
    }

    /// Cap the number of items (0 = unbounded)
    #[must_use]
    pub const fn with_max_items(mut self, max: usize) -> Self {
        self.max_items = max;
        self
    }

    /// Enable or disable reordering
    #[must_use]
    pub const fn with_reorder(mut self, enabled: bool) -> Self {
        self.reorder_enabled = enabled;
        self
    }
}

/// Why a candidate value was not committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Value already present and duplicates are not allowed
    DuplicateNotAllowed,
    /// The item store is at `max_items`
    MaxItemsReached,
    /// Value is not in the allowed-value pool (closed vocabulary only)
    NotAllowed,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::DuplicateNotAllowed => "duplicate not allowed",
            Self::MaxItemsReached => "maximum number of items reached",
            Self::NotAllowed => "value not allowed",
        };
        f.write_str(text)
    }
}

/// Outcome of a commit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitResult {
    /// Value was appended as a new item
    Committed(ItemId),
    /// Value was rejected; state is unchanged
    Rejected(RejectReason),
}

impl CommitResult {
    /// Whether the value was committed
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

/// One value or a sequence of values for [`super::TagList::add_values`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueList(Vec<String>);

impl ValueList {
    /// Consume into the inner values
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for ValueList {
    fn from(value: &str) -> Self {
        Self(vec![value.to_string()])
    }
}

impl From<String> for ValueList {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl From<Vec<String>> for ValueList {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<Vec<&str>> for ValueList {
    fn from(values: Vec<&str>) -> Self {
        Self(values.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for ValueList {
    fn from(values: &[&str]) -> Self {
        Self(values.iter().map(|v| (*v).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ValueList {
    fn from(values: [&str; N]) -> Self {
        Self(values.iter().map(|v| (*v).to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_list_from_single_and_many() {
        assert_eq!(ValueList::from("a").into_inner(), vec!["a"]);
        assert_eq!(ValueList::from(["a", "b"]).into_inner(), vec!["a", "b"]);
        assert_eq!(
            ValueList::from(vec!["x".to_string()]).into_inner(),
            vec!["x"]
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = TagListConfig::default();
        assert!(!config.allow_duplicates);
        assert_eq!(config.max_items, 0);
        assert!(!config.reorder_enabled);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: TagListConfig = toml::from_str("max_items = 3").unwrap();
        assert_eq!(config.max_items, 3);
        assert!(!config.allow_duplicates);
    }
}
