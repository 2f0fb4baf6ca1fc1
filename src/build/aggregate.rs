//! Summed attribute values of a build.
//!
//! Every `Int` attribute of every picked option is added up per key,
//! together with option costs (under [`COST`]) and dial settings. Summation
//! makes the aggregate independent of pick order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::picks::Build;
use crate::options::{AttributeKey, OptionRegistry};

/// Reserved aggregate key for the summed option cost.
pub const COST: &str = "cost";

/// Aggregated numeric view of a build.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    values: FxHashMap<AttributeKey, i64>,
    option_count: usize,
}

impl Aggregate {
    /// Aggregate a build against the registry its options come from.
    ///
    /// Options missing from the registry contribute nothing; builds are
    /// validated before they are aggregated for scoring.
    #[must_use]
    pub fn collect(build: &Build, registry: &OptionRegistry) -> Self {
        let mut values: FxHashMap<AttributeKey, i64> = FxHashMap::default();
        let mut option_count = 0;

        for pick in build.picks() {
            let Some(option) = registry.get(&pick.option) else {
                continue;
            };
            option_count += 1;
            add(&mut values, AttributeKey::new(COST), option.cost);
            for (key, value) in &option.attributes {
                if let Some(v) = value.as_int() {
                    add(&mut values, key.clone(), v);
                }
            }
        }

        for (key, value) in build.dials() {
            add(&mut values, key.clone(), value);
        }

        Self {
            values,
            option_count,
        }
    }

    /// Aggregated value for a key. Keys nothing contributed to read as zero.
    #[must_use]
    pub fn get(&self, key: &AttributeKey) -> i64 {
        self.values.get(key).copied().unwrap_or(0)
    }

    /// Summed cost of all options.
    #[must_use]
    pub fn cost(&self) -> i64 {
        self.get(&AttributeKey::new(COST))
    }

    /// Number of options that contributed.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.option_count
    }

    /// Iterate over every aggregated key.
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeKey, i64)> {
        self.values.iter().map(|(k, v)| (k, *v))
    }
}

/// Sums saturate at the `i64` bounds.
fn add(values: &mut FxHashMap<AttributeKey, i64>, key: AttributeKey, value: i64) {
    let slot = values.entry(key).or_insert(0);
    *slot = slot.saturating_add(value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SlotId;
    use crate::options::OptionDef;

    fn registry() -> OptionRegistry {
        let mut registry = OptionRegistry::new();
        registry
            .register_all([
                OptionDef::new("nmc", "NMC", SlotId::new(0))
                    .with_cost(200)
                    .with_attr("energy", 8i32)
                    .with_attr("safety", 5i32),
                OptionDef::new("liquid", "Liquid Organic", SlotId::new(1))
                    .with_cost(50)
                    .with_attr("energy", 5i32)
                    .with_attr("safety", 4i32)
                    .with_attr("phase", "liquid"),
                OptionDef::new("graphite", "Graphite", SlotId::new(2))
                    .with_cost(50)
                    .with_attr("energy", 5i32)
                    .with_attr("safety", 7i32),
            ])
            .unwrap();
        registry
    }

    #[test]
    fn test_sums_per_key() {
        let build = Build::new()
            .with_pick(SlotId::new(0), "nmc")
            .with_pick(SlotId::new(1), "liquid")
            .with_pick(SlotId::new(2), "graphite");
        let agg = Aggregate::collect(&build, &registry());

        assert_eq!(agg.get(&"energy".into()), 18);
        assert_eq!(agg.get(&"safety".into()), 16);
        assert_eq!(agg.cost(), 300);
        assert_eq!(agg.option_count(), 3);
        // text attributes are not summed
        assert_eq!(agg.get(&"phase".into()), 0);
    }

    #[test]
    fn test_order_independent() {
        let forward = Build::new()
            .with_pick(SlotId::new(0), "nmc")
            .with_pick(SlotId::new(2), "graphite");
        let backward = Build::new()
            .with_pick(SlotId::new(2), "graphite")
            .with_pick(SlotId::new(0), "nmc");

        let registry = registry();
        assert_eq!(
            Aggregate::collect(&forward, &registry),
            Aggregate::collect(&backward, &registry)
        );
    }

    #[test]
    fn test_dials_join_aggregate() {
        let build = Build::new()
            .with_pick(SlotId::new(0), "nmc")
            .with_dial("temp", 40)
            .with_dial("energy", 1);
        let agg = Aggregate::collect(&build, &registry());

        assert_eq!(agg.get(&"temp".into()), 40);
        assert_eq!(agg.get(&"energy".into()), 9);
    }

    #[test]
    fn test_unknown_options_skipped() {
        let build = Build::new().with_pick(SlotId::new(0), "unobtainium");
        let agg = Aggregate::collect(&build, &registry());
        assert_eq!(agg.option_count(), 0);
        assert_eq!(agg.cost(), 0);
    }
}
