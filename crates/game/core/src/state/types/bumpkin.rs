//! The player's avatar: skills and the activity ledger.

use std::collections::BTreeMap;

/// Skills a bumpkin can learn. Only those that affect resource gathering are
/// modelled here.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillName {
    #[strum(serialize = "Green Thumb")]
    #[cfg_attr(feature = "serde", serde(rename = "Green Thumb"))]
    GreenThumb,
    Lumberjack,
    #[strum(serialize = "Tree Hugger")]
    #[cfg_attr(feature = "serde", serde(rename = "Tree Hugger"))]
    TreeHugger,
    #[strum(serialize = "Rock'N'Roll")]
    #[cfg_attr(feature = "serde", serde(rename = "Rock'N'Roll"))]
    RockNRoll,
    #[strum(serialize = "Coal Face")]
    #[cfg_attr(feature = "serde", serde(rename = "Coal Face"))]
    CoalFace,
}

/// Learned skills and their levels. A level of zero counts as not learned.
pub type Skills = BTreeMap<SkillName, u32>;

/// Gameplay events counted per bumpkin for stats and quests.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivityName {
    #[strum(serialize = "Tree Chopped")]
    #[cfg_attr(feature = "serde", serde(rename = "Tree Chopped"))]
    TreeChopped,
    #[strum(serialize = "Stone Mined")]
    #[cfg_attr(feature = "serde", serde(rename = "Stone Mined"))]
    StoneMined,
    #[strum(serialize = "Iron Mined")]
    #[cfg_attr(feature = "serde", serde(rename = "Iron Mined"))]
    IronMined,
    #[strum(serialize = "Gold Mined")]
    #[cfg_attr(feature = "serde", serde(rename = "Gold Mined"))]
    GoldMined,
}

/// Per-activity counters.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ActivityLedger {
    counts: BTreeMap<ActivityName, u64>,
}

impl ActivityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, name: ActivityName) -> u64 {
        self.counts.get(&name).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActivityName, u64)> + '_ {
        self.counts.iter().map(|(name, count)| (*name, *count))
    }
}

impl FromIterator<(ActivityName, u64)> for ActivityLedger {
    fn from_iter<T: IntoIterator<Item = (ActivityName, u64)>>(iter: T) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Returns a copy of `ledger` with `name` counted once more.
pub fn track_activity(name: ActivityName, ledger: &ActivityLedger) -> ActivityLedger {
    track_activity_by(name, ledger, 1)
}

/// Returns a copy of `ledger` with `name` counted `amount` more times.
pub fn track_activity_by(name: ActivityName, ledger: &ActivityLedger, amount: u64) -> ActivityLedger {
    let mut next = ledger.clone();
    let count = next.counts.entry(name).or_insert(0);
    *count = count.saturating_add(amount);
    next
}

/// The player's avatar.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bumpkin {
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Skills,
    #[cfg_attr(feature = "serde", serde(default))]
    pub activity: ActivityLedger,
}

impl Bumpkin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skill(mut self, skill: SkillName, level: u32) -> Self {
        self.skills.insert(skill, level);
        self
    }

    /// True when `skill` is learned at any non-zero level.
    pub fn has_skill(&self, skill: SkillName) -> bool {
        has_skill(&self.skills, skill)
    }
}

pub fn has_skill(skills: &Skills, skill: SkillName) -> bool {
    skills.get(&skill).is_some_and(|level| *level > 0)
}
