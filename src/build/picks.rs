//! The player's current combination of options and dial settings.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::SlotId;
use crate::options::{AttributeKey, OptionId};

/// One option placed into one slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pick {
    /// Slot the option occupies.
    pub slot: SlotId,
    /// The chosen option.
    pub option: OptionId,
}

impl Pick {
    /// Create a new pick.
    pub fn new(slot: SlotId, option: impl Into<OptionId>) -> Self {
        Self {
            slot,
            option: option.into(),
        }
    }
}

/// A player's build for one attempt.
///
/// Builds hold at most a handful of picks, so they live inline in a
/// `SmallVec`. Pick order is kept for display only: every evaluation over
/// a build is order-independent.
///
/// ## Example
///
/// ```
/// use lab_rules::build::Build;
/// use lab_rules::core::SlotId;
///
/// let build = Build::new()
///     .with_pick(SlotId::new(0), "milk")
///     .with_pick(SlotId::new(1), "lacto")
///     .with_dial("temp", 40);
///
/// assert_eq!(build.len(), 2);
/// assert_eq!(build.dial(&"temp".into()), Some(40));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    picks: SmallVec<[Pick; 5]>,
    dials: FxHashMap<AttributeKey, i64>,
}

impl Build {
    /// Create an empty build.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pick (builder pattern). Does not replace existing picks.
    #[must_use]
    pub fn with_pick(mut self, slot: SlotId, option: impl Into<OptionId>) -> Self {
        self.picks.push(Pick::new(slot, option));
        self
    }

    /// Set a dial (builder pattern).
    #[must_use]
    pub fn with_dial(mut self, key: impl Into<AttributeKey>, value: i64) -> Self {
        self.dials.insert(key.into(), value);
        self
    }

    /// Put `option` into `slot`, replacing whatever was there.
    ///
    /// Returns the replaced option, if any.
    pub fn place(&mut self, slot: SlotId, option: OptionId) -> Option<OptionId> {
        if let Some(existing) = self.picks.iter_mut().find(|p| p.slot == slot) {
            return Some(std::mem::replace(&mut existing.option, option));
        }
        self.picks.push(Pick { slot, option });
        None
    }

    /// Append a pick without touching other picks in the same slot.
    pub fn push(&mut self, slot: SlotId, option: OptionId) {
        self.picks.push(Pick { slot, option });
    }

    /// Remove an option. Returns false if it wasn't in the build.
    pub fn remove(&mut self, option: &OptionId) -> bool {
        match self.picks.iter().position(|p| &p.option == option) {
            Some(index) => {
                self.picks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Set a dial value.
    pub fn set_dial(&mut self, key: AttributeKey, value: i64) {
        self.dials.insert(key, value);
    }

    /// Get a dial value.
    #[must_use]
    pub fn dial(&self, key: &AttributeKey) -> Option<i64> {
        self.dials.get(key).copied()
    }

    /// Iterate over dial settings.
    pub fn dials(&self) -> impl Iterator<Item = (&AttributeKey, i64)> {
        self.dials.iter().map(|(k, v)| (k, *v))
    }

    /// All picks in the order they were made.
    #[must_use]
    pub fn picks(&self) -> &[Pick] {
        &self.picks
    }

    /// Option occupying a slot (the first one, in pooled builds).
    #[must_use]
    pub fn option_in(&self, slot: SlotId) -> Option<&OptionId> {
        self.picks.iter().find(|p| p.slot == slot).map(|p| &p.option)
    }

    /// Check whether an option is in the build.
    #[must_use]
    pub fn contains(&self, option: &OptionId) -> bool {
        self.picks.iter().any(|p| &p.option == option)
    }

    /// Number of picked options (dials don't count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// A build is empty when it has neither picks nor dial settings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty() && self.dials.is_empty()
    }

    /// Drop all picks and dials.
    pub fn clear(&mut self) {
        self.picks.clear();
        self.dials.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_replaces_slot() {
        let mut build = Build::new();
        assert_eq!(build.place(SlotId::new(0), "lco".into()), None);
        assert_eq!(build.place(SlotId::new(1), "liquid".into()), None);

        let replaced = build.place(SlotId::new(0), "lfp".into());
        assert_eq!(replaced, Some(OptionId::new("lco")));
        assert_eq!(build.len(), 2);
        assert_eq!(build.option_in(SlotId::new(0)), Some(&OptionId::new("lfp")));
    }

    #[test]
    fn test_push_and_remove() {
        let mut build = Build::new();
        build.push(SlotId::new(2), "limonene".into());
        build.push(SlotId::new(2), "linalool".into());
        assert_eq!(build.len(), 2);

        assert!(build.remove(&"limonene".into()));
        assert!(!build.remove(&"limonene".into()));
        assert!(build.contains(&"linalool".into()));
        assert_eq!(build.len(), 1);
    }

    #[test]
    fn test_empty_counts_dials() {
        assert!(Build::new().is_empty());

        let dial_only = Build::new().with_dial("oxidizer", 70);
        assert!(!dial_only.is_empty());
        assert_eq!(dial_only.len(), 0);

        let mut build = Build::new().with_pick(SlotId::new(0), "ocean");
        assert!(!build.is_empty());
        build.clear();
        assert!(build.is_empty());
    }

    #[test]
    fn test_dials() {
        let mut build = Build::new();
        build.set_dial("temp".into(), 25);
        build.set_dial("temp".into(), 30);
        assert_eq!(build.dial(&"temp".into()), Some(30));
        assert_eq!(build.dial(&"pressure".into()), None);
        assert_eq!(build.dials().count(), 1);
    }
}
