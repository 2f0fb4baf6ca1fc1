//! Option registry for definition lookup.
//!
//! The `OptionRegistry` stores every option of one game in declaration
//! order (the order a presentation layer lists them in) and indexes them
//! by `OptionId` for O(1) lookup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{OptionDef, OptionId};
use crate::core::SlotId;
use crate::error::LabError;

/// Registry of option definitions.
///
/// ## Example
///
/// ```
/// use lab_rules::core::SlotId;
/// use lab_rules::options::{OptionDef, OptionId, OptionRegistry};
///
/// let mut registry = OptionRegistry::new();
/// registry
///     .register(OptionDef::new("graphite", "Graphite", SlotId::new(2)).with_cost(50))
///     .unwrap();
///
/// let found = registry.get(&OptionId::new("graphite")).unwrap();
/// assert_eq!(found.cost, 50);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<OptionDef>", into = "Vec<OptionDef>")]
pub struct OptionRegistry {
    options: Vec<OptionDef>,
    index: FxHashMap<OptionId, usize>,
}

impl OptionRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an option definition.
    ///
    /// Fails if an option with the same ID already exists.
    pub fn register(&mut self, option: OptionDef) -> Result<(), LabError> {
        if self.index.contains_key(&option.id) {
            return Err(LabError::DuplicateOption(option.id));
        }
        self.index.insert(option.id.clone(), self.options.len());
        self.options.push(option);
        Ok(())
    }

    /// Register several options at once.
    pub fn register_all(
        &mut self,
        options: impl IntoIterator<Item = OptionDef>,
    ) -> Result<(), LabError> {
        for option in options {
            self.register(option)?;
        }
        Ok(())
    }

    /// Get an option definition by ID.
    #[must_use]
    pub fn get(&self, id: &OptionId) -> Option<&OptionDef> {
        self.index.get(id).map(|&i| &self.options[i])
    }

    /// Check if an option ID is registered.
    #[must_use]
    pub fn contains(&self, id: &OptionId) -> bool {
        self.index.contains_key(id)
    }

    /// Get the number of registered options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate over all options in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionDef> {
        self.options.iter()
    }

    /// Options belonging to one slot, in declaration order.
    pub fn in_slot(&self, slot: SlotId) -> impl Iterator<Item = &OptionDef> {
        self.options.iter().filter(move |o| o.slot == slot)
    }

    /// Find options matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &OptionDef>
    where
        F: Fn(&OptionDef) -> bool,
    {
        self.options.iter().filter(move |o| predicate(o))
    }
}

impl TryFrom<Vec<OptionDef>> for OptionRegistry {
    type Error = LabError;

    fn try_from(options: Vec<OptionDef>) -> Result<Self, Self::Error> {
        let mut registry = Self::new();
        registry.register_all(options)?;
        Ok(registry)
    }
}

impl From<OptionRegistry> for Vec<OptionDef> {
    fn from(registry: OptionRegistry) -> Self {
        registry.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_slot_registry() -> OptionRegistry {
        let mut registry = OptionRegistry::new();
        registry
            .register_all([
                OptionDef::new("lco", "LCO", SlotId::new(0)).with_cost(300),
                OptionDef::new("lfp", "LFP", SlotId::new(0)).with_cost(100),
                OptionDef::new("liquid", "Liquid Organic", SlotId::new(1)).with_cost(50),
            ])
            .unwrap();
        registry
    }

    #[test]
    fn test_register_and_get() {
        let registry = two_slot_registry();

        let found = registry.get(&OptionId::new("lfp"));
        assert_eq!(found.map(|o| o.cost), Some(100));
        assert!(registry.get(&OptionId::new("nmc")).is_none());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = two_slot_registry();
        let err = registry
            .register(OptionDef::new("lco", "Another LCO", SlotId::new(0)))
            .unwrap_err();
        assert!(matches!(err, LabError::DuplicateOption(id) if id.as_str() == "lco"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_in_slot_keeps_declaration_order() {
        let registry = two_slot_registry();
        let cathodes: Vec<_> = registry.in_slot(SlotId::new(0)).map(|o| o.id.as_str()).collect();
        assert_eq!(cathodes, vec!["lco", "lfp"]);
    }

    #[test]
    fn test_find_with_predicate() {
        let registry = two_slot_registry();
        let cheap: Vec<_> = registry.find(|o| o.cost <= 100).collect();
        assert_eq!(cheap.len(), 2);
    }

    #[test]
    fn test_json_rejects_duplicates() {
        let json = r#"[{"id":"a","name":"A","slot":0},{"id":"a","name":"B","slot":0}]"#;
        let result: Result<OptionRegistry, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_json_roundtrip_preserves_order() {
        let registry = two_slot_registry();
        let json = serde_json::to_string(&registry).unwrap();
        let back: OptionRegistry = serde_json::from_str(&json).unwrap();
        let ids: Vec<_> = back.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["lco", "lfp", "liquid"]);
        assert!(back.contains(&OptionId::new("liquid")));
    }
}
