//! Game configuration types.
//!
//! Games configure the engine by providing:
//! - `SlotConfig`: The categories options are picked into (cathode, microbe...)
//! - `BuildRules`: How many options a build holds and which slots must be filled
//! - `DialConfig`: Numeric settings that are not options (temperature, mixture)
//! - `SessionRules`: Starting balance, reputation and when a session ends
//! - `GameConfig`: Combines all configuration
//!
//! The engine never hardcodes slots or dials - games define them.

use serde::{Deserialize, Serialize};

use crate::options::AttributeKey;

/// Slot identifier. Games define what slots exist.
///
/// The engine doesn't interpret slot IDs beyond equality - games assign
/// meaning via `SlotConfig`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(pub u16);

impl SlotId {
    /// Create a new slot ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// Configuration for a single slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    /// Unique identifier for this slot.
    pub id: SlotId,

    /// Human-readable name ("cathode", "microbe").
    pub name: String,
}

impl SlotConfig {
    /// Create a new slot configuration.
    pub fn new(id: SlotId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// How picks share slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotMode {
    /// At most one option per slot; picking again replaces it.
    #[default]
    OnePerSlot,
    /// Options accumulate in a shared pool regardless of slot.
    Pool,
}

/// Limits on what a submittable build looks like.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRules {
    /// Minimum number of options.
    pub min_options: usize,

    /// Maximum number of options.
    pub max_options: usize,

    /// Slot sharing mode.
    #[serde(default)]
    pub mode: SlotMode,

    /// Slots that must hold an option before the build can be scored.
    #[serde(default)]
    pub required_slots: Vec<SlotId>,
}

impl BuildRules {
    /// Build rules accepting between `min` and `max` options.
    #[must_use]
    pub fn new(min_options: usize, max_options: usize) -> Self {
        Self {
            min_options,
            max_options,
            mode: SlotMode::OnePerSlot,
            required_slots: Vec::new(),
        }
    }

    /// Require one option in each of the given slots.
    #[must_use]
    pub fn requiring(mut self, slots: impl IntoIterator<Item = SlotId>) -> Self {
        self.required_slots.extend(slots);
        self
    }

    /// Switch to pooled picks.
    #[must_use]
    pub fn pooled(mut self) -> Self {
        self.mode = SlotMode::Pool;
        self
    }
}

impl Default for BuildRules {
    fn default() -> Self {
        Self::new(1, 5)
    }
}

/// Where a dial's value comes from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialSource {
    /// Set by the player, clamped to `[min, max]`.
    Player { min: i64, max: i64, default: i64 },
    /// Always `total - <of>` (fuel share given the oxidizer share).
    Complement { of: AttributeKey, total: i64 },
    /// Drawn uniformly from `[min, max]` when the build is submitted.
    Random { min: i64, max: i64 },
}

/// A numeric setting that joins the aggregate under its own key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialConfig {
    /// Aggregate key the dial writes to.
    pub key: AttributeKey,

    /// Value source.
    pub source: DialSource,
}

impl DialConfig {
    /// A player-controlled dial.
    pub fn player(key: impl Into<AttributeKey>, min: i64, max: i64, default: i64) -> Self {
        Self {
            key: key.into(),
            source: DialSource::Player { min, max, default },
        }
    }

    /// A dial derived as `total - of`.
    pub fn complement(
        key: impl Into<AttributeKey>,
        of: impl Into<AttributeKey>,
        total: i64,
    ) -> Self {
        Self {
            key: key.into(),
            source: DialSource::Complement { of: of.into(), total },
        }
    }

    /// A dial rolled at submit time.
    pub fn random(key: impl Into<AttributeKey>, min: i64, max: i64) -> Self {
        Self {
            key: key.into(),
            source: DialSource::Random { min, max },
        }
    }

    /// Clamp a player value into this dial's range.
    ///
    /// Returns `None` for dials the player cannot set.
    #[must_use]
    pub fn clamp(&self, value: i64) -> Option<i64> {
        match &self.source {
            DialSource::Player { min, max, .. } => Some(value.clamp(*min, *max)),
            DialSource::Complement { .. } | DialSource::Random { .. } => None,
        }
    }
}

/// Priority order for checking a target's requirements.
///
/// When several requirements fail at once, the first in this order is the
/// one reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckOrder {
    /// Min, then Max, then Exclude, then ExactMatch, then Range.
    /// Catalog order breaks ties within a kind.
    #[default]
    ByKind,
    /// Exactly the order the catalog lists them.
    Declared,
}

/// How many violations a failure verdict carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportMode {
    /// Stop at the first violated requirement.
    #[default]
    FirstOnly,
    /// Collect every violated requirement in priority order.
    All,
}

/// When the controller moves on to a fresh target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvancePolicy {
    /// Only after a successful submission; failures keep the build for another try.
    #[default]
    OnSuccess,
    /// After every scored submission.
    Always,
}

/// A title held while the balance stays above a threshold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    /// Balance must be strictly greater than this. `None` always matches.
    pub above: Option<i64>,
    pub title: String,
}

impl Rank {
    pub fn above(above: i64, title: impl Into<String>) -> Self {
        Self {
            above: Some(above),
            title: title.into(),
        }
    }

    /// The title everyone starts with.
    pub fn base(title: impl Into<String>) -> Self {
        Self {
            above: None,
            title: title.into(),
        }
    }
}

/// Session economy: balance, reputation and end conditions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRules {
    /// Balance at session start (funds, score or money depending on the game).
    pub starting_balance: i64,

    /// Lowest value the balance may fall to. `None` for unbounded.
    pub balance_floor: Option<i64>,

    /// Starting reputation. `None` disables reputation tracking.
    pub starting_reputation: Option<i64>,

    /// Reputation gained on success and lost on failure.
    pub reputation_step: i64,

    /// Reputation ceiling.
    pub reputation_max: i64,

    /// Refuse builds the balance can't pay for before any requirement is checked.
    pub charge_build_cost: bool,

    /// End the session once the balance reaches zero or below.
    pub end_on_empty_balance: bool,

    /// End the session once reputation reaches zero.
    pub end_on_lost_reputation: bool,

    /// Balance titles, highest first.
    #[serde(default)]
    pub ranks: Vec<Rank>,
}

impl SessionRules {
    /// Rules with a starting balance and nothing else enabled.
    #[must_use]
    pub fn new(starting_balance: i64) -> Self {
        Self {
            starting_balance,
            balance_floor: None,
            starting_reputation: None,
            reputation_step: 0,
            reputation_max: 100,
            charge_build_cost: false,
            end_on_empty_balance: false,
            end_on_lost_reputation: false,
            ranks: Vec::new(),
        }
    }

    /// Track reputation starting at `start`, moving by `step` per verdict.
    #[must_use]
    pub fn with_reputation(mut self, start: i64, step: i64) -> Self {
        self.starting_reputation = Some(start);
        self.reputation_step = step;
        self
    }

    /// Never let the balance fall below `floor`.
    #[must_use]
    pub fn with_floor(mut self, floor: i64) -> Self {
        self.balance_floor = Some(floor);
        self
    }

    /// Charge build cost up front and end the session when funds run out.
    #[must_use]
    pub fn charging_build_cost(mut self) -> Self {
        self.charge_build_cost = true;
        self.end_on_empty_balance = true;
        self
    }

    /// End the session when reputation hits zero.
    #[must_use]
    pub fn ending_on_lost_reputation(mut self) -> Self {
        self.end_on_lost_reputation = true;
        self
    }

    #[must_use]
    pub fn with_ranks(mut self, ranks: impl IntoIterator<Item = Rank>) -> Self {
        self.ranks = ranks.into_iter().collect();
        self
    }
}

impl Default for SessionRules {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Game name ("battery-baron").
    pub name: String,

    /// Slot configurations.
    pub slots: Vec<SlotConfig>,

    /// Build limits.
    #[serde(default)]
    pub build: BuildRules,

    /// Dial configurations.
    #[serde(default)]
    pub dials: Vec<DialConfig>,

    /// Requirement priority order.
    #[serde(default)]
    pub check_order: CheckOrder,

    /// How many violations to report.
    #[serde(default)]
    pub report: ReportMode,

    /// Session economy.
    #[serde(default)]
    pub session: SessionRules,

    /// Round advance policy.
    #[serde(default)]
    pub advance: AdvancePolicy,
}

impl GameConfig {
    /// Create a new game configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Vec::new(),
            build: BuildRules::default(),
            dials: Vec::new(),
            check_order: CheckOrder::default(),
            report: ReportMode::default(),
            session: SessionRules::default(),
            advance: AdvancePolicy::default(),
        }
    }

    /// Add a slot configuration.
    #[must_use]
    pub fn with_slot(mut self, slot: SlotConfig) -> Self {
        self.slots.push(slot);
        self
    }

    /// Set the build rules.
    #[must_use]
    pub fn with_build(mut self, build: BuildRules) -> Self {
        self.build = build;
        self
    }

    /// Add a dial.
    #[must_use]
    pub fn with_dial(mut self, dial: DialConfig) -> Self {
        self.dials.push(dial);
        self
    }

    /// Set the requirement check order.
    #[must_use]
    pub fn with_check_order(mut self, order: CheckOrder) -> Self {
        self.check_order = order;
        self
    }

    /// Set the report mode.
    #[must_use]
    pub fn with_report(mut self, report: ReportMode) -> Self {
        self.report = report;
        self
    }

    /// Set the session rules.
    #[must_use]
    pub fn with_session(mut self, session: SessionRules) -> Self {
        self.session = session;
        self
    }

    /// Set the advance policy.
    #[must_use]
    pub fn with_advance(mut self, advance: AdvancePolicy) -> Self {
        self.advance = advance;
        self
    }

    /// Get a slot config by ID.
    #[must_use]
    pub fn get_slot(&self, id: SlotId) -> Option<&SlotConfig> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Get a dial config by key.
    #[must_use]
    pub fn get_dial(&self, key: &AttributeKey) -> Option<&DialConfig> {
        self.dials.iter().find(|d| &d.key == key)
    }

    /// Name of a slot, falling back to its ID.
    #[must_use]
    pub fn slot_name(&self, id: SlotId) -> String {
        self.get_slot(id)
            .map_or_else(|| id.to_string(), |s| s.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_id() {
        let id = SlotId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Slot(5)");
    }

    #[test]
    fn test_build_rules_builder() {
        let rules = BuildRules::new(3, 5).pooled();
        assert_eq!(rules.mode, SlotMode::Pool);
        assert!(rules.required_slots.is_empty());

        let rules = BuildRules::new(3, 3).requiring([SlotId::new(0), SlotId::new(1)]);
        assert_eq!(rules.mode, SlotMode::OnePerSlot);
        assert_eq!(rules.required_slots.len(), 2);
    }

    #[test]
    fn test_dial_clamp() {
        let temp = DialConfig::player("temp", 0, 100, 20);
        assert_eq!(temp.clamp(140), Some(100));
        assert_eq!(temp.clamp(-5), Some(0));
        assert_eq!(temp.clamp(37), Some(37));

        let fuel = DialConfig::complement("fuel", "oxidizer", 100);
        assert_eq!(fuel.clamp(30), None);

        let market = DialConfig::random("market", 0, 29);
        assert_eq!(market.clamp(10), None);
    }

    #[test]
    fn test_session_rules_builder() {
        let rules = SessionRules::new(1000)
            .with_reputation(50, 10)
            .charging_build_cost();
        assert_eq!(rules.starting_reputation, Some(50));
        assert!(rules.charge_build_cost);
        assert!(rules.end_on_empty_balance);
        assert!(!rules.end_on_lost_reputation);
        assert_eq!(rules.balance_floor, None);

        let rules = SessionRules::new(0).with_floor(0);
        assert_eq!(rules.balance_floor, Some(0));
    }

    #[test]
    fn test_game_config() {
        let config = GameConfig::new("test")
            .with_slot(SlotConfig::new(SlotId::new(0), "cathode"))
            .with_slot(SlotConfig::new(SlotId::new(1), "anode"))
            .with_dial(DialConfig::player("temp", 0, 100, 20))
            .with_check_order(CheckOrder::Declared);

        assert_eq!(config.slots.len(), 2);
        assert_eq!(config.check_order, CheckOrder::Declared);
        assert_eq!(config.report, ReportMode::FirstOnly);
        assert_eq!(config.slot_name(SlotId::new(1)), "anode");
        assert_eq!(config.slot_name(SlotId::new(9)), "Slot(9)");
        assert!(config.get_dial(&"temp".into()).is_some());
        assert!(config.get_dial(&"pressure".into()).is_none());
    }

    #[test]
    fn test_game_config_json_defaults() {
        let json = r#"{"name":"minimal","slots":[{"id":0,"name":"source"}]}"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.build, BuildRules::default());
        assert_eq!(config.advance, AdvancePolicy::OnSuccess);
        assert_eq!(config.session.starting_balance, 0);
    }
}
