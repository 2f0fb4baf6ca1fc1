//! Option definitions - static ingredient/component data.
//!
//! An `OptionDef` is one selectable entry in a game's catalog: a cathode
//! chemistry, a microbe, a functional group. It belongs to exactly one
//! slot and never changes during a session.

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, AttributeValue, Attributes};
use crate::core::SlotId;

/// Stable identity of an option, such as `"lacto"` or `"lfp"`.
///
/// Exact-match requirements compare against this identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OptionId(pub String);

impl OptionId {
    /// Create a new option ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OptionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for OptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static option definition.
///
/// ## Example
///
/// ```
/// use lab_rules::core::SlotId;
/// use lab_rules::options::OptionDef;
///
/// let lfp = OptionDef::new("lfp", "LFP (Lithium Iron Phosphate)", SlotId::new(0))
///     .with_cost(100)
///     .with_attr("energy", 5i32)
///     .with_attr("safety", 9i32);
///
/// assert_eq!(lfp.get_int("safety", 0), 9);
/// assert_eq!(lfp.cost, 100);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDef {
    /// Unique identifier within the game.
    pub id: OptionId,

    /// Display name.
    pub name: String,

    /// Slot (category) this option is picked into.
    pub slot: SlotId,

    /// Price paid when a build containing this option is submitted.
    #[serde(default)]
    pub cost: i64,

    /// Game-specific attributes.
    #[serde(default)]
    pub attributes: Attributes,

    /// Short description shown next to the option.
    #[serde(default)]
    pub blurb: String,

    /// Longer educational note.
    #[serde(default)]
    pub fact: String,
}

impl OptionDef {
    /// Create a new option definition.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, slot: SlotId) -> Self {
        Self {
            id: OptionId::new(id),
            name: name.into(),
            slot,
            cost: 0,
            attributes: Attributes::default(),
            blurb: String::new(),
            fact: String::new(),
        }
    }

    /// Set the cost.
    #[must_use]
    pub fn with_cost(mut self, cost: i64) -> Self {
        self.cost = cost;
        self
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Set the short description.
    #[must_use]
    pub fn with_blurb(mut self, blurb: impl Into<String>) -> Self {
        self.blurb = blurb.into();
        self
    }

    /// Set the educational note.
    #[must_use]
    pub fn with_fact(mut self, fact: impl Into<String>) -> Self {
        self.fact = fact.into();
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(&AttributeKey::new(key))
    }

    /// Get an integer attribute with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get_attr(key)
            .and_then(|v| v.as_int())
            .unwrap_or(default)
    }

    /// Get a text attribute.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get_attr(key).and_then(|v| v.as_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_id() {
        let id = OptionId::new("lacto");
        assert_eq!(id.as_str(), "lacto");
        assert_eq!(format!("{}", id), "lacto");
        assert_eq!(id, OptionId::from("lacto"));
    }

    #[test]
    fn test_option_def_builder() {
        let opt = OptionDef::new("lacto", "Lactobacillus", SlotId::new(1))
            .with_attr("optimal_temp", 40i32)
            .with_attr("tolerance", 10i32)
            .with_attr("kind", "bacteria")
            .with_blurb("The 'Sour' bacteria.");

        assert_eq!(opt.name, "Lactobacillus");
        assert_eq!(opt.slot, SlotId::new(1));
        assert_eq!(opt.get_int("optimal_temp", 0), 40);
        assert_eq!(opt.get_int("missing", -1), -1);
        assert_eq!(opt.get_text("kind"), Some("bacteria"));
        assert_eq!(opt.cost, 0);
    }

    #[test]
    fn test_option_def_json_defaults() {
        let json = r#"{"id":"salt","name":"Salt (NaCl)","slot":2}"#;
        let opt: OptionDef = serde_json::from_str(json).unwrap();

        assert_eq!(opt.id, OptionId::new("salt"));
        assert_eq!(opt.cost, 0);
        assert!(opt.attributes.is_empty());
        assert!(opt.fact.is_empty());
    }
}
