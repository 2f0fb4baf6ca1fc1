//! Target specifications and the per-game catalog they are drawn from.

use serde::{Deserialize, Serialize};

use super::payout::{Payout, Penalty};
use super::requirement::Requirement;

/// Most targets a catalog can hold: one per `TargetId`.
pub const MAX_TARGETS: usize = u16::MAX as usize + 1;

/// Index into a game's target catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetId(pub u16);

impl TargetId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Target({})", self.0)
    }
}

/// What a round asks for.
///
/// Immutable once drawn. The text fields are for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    /// Stable slug ("phone", "yogurt").
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub brief: String,
    #[serde(default)]
    pub hint: String,
    /// Shown after a successful submission.
    #[serde(default)]
    pub debrief: String,
    pub requirements: Vec<Requirement>,
    #[serde(default)]
    pub payout: Payout,
    #[serde(default)]
    pub penalty: Penalty,
}

impl TargetSpec {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            brief: String::new(),
            hint: String::new(),
            debrief: String::new(),
            requirements: Vec::new(),
            payout: Payout::None,
            penalty: Penalty::None,
        }
    }

    #[must_use]
    pub fn with_brief(mut self, brief: impl Into<String>) -> Self {
        self.brief = brief.into();
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    #[must_use]
    pub fn with_debrief(mut self, debrief: impl Into<String>) -> Self {
        self.debrief = debrief.into();
        self
    }

    #[must_use]
    pub fn require(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    #[must_use]
    pub fn with_payout(mut self, payout: Payout) -> Self {
        self.payout = payout;
        self
    }

    #[must_use]
    pub fn with_penalty(mut self, penalty: Penalty) -> Self {
        self.penalty = penalty;
        self
    }
}

/// All targets one game can draw.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetCatalog(Vec<TargetSpec>);

impl TargetCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a target and return its ID, or `None` once the catalog holds
    /// [`MAX_TARGETS`].
    pub fn push(&mut self, target: TargetSpec) -> Option<TargetId> {
        let id = TargetId::new(u16::try_from(self.0.len()).ok()?);
        self.0.push(target);
        Some(id)
    }

    #[must_use]
    pub fn get(&self, id: TargetId) -> Option<&TargetSpec> {
        self.0.get(id.index())
    }

    /// Look up a target by key.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<(TargetId, &TargetSpec)> {
        self.0
            .iter()
            .enumerate()
            .find(|(_, t)| t.key == key)
            .and_then(|(i, t)| Some((TargetId::new(u16::try_from(i).ok()?), t)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = TargetId> {
        (0..self.0.len())
            .map_while(|i| u16::try_from(i).ok())
            .map(TargetId::new)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetSpec> {
        self.0.iter()
    }
}

impl FromIterator<TargetSpec> for TargetCatalog {
    fn from_iter<I: IntoIterator<Item = TargetSpec>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
