//! Recovery modifiers that back-date a node's mined-at timestamp.
//!
//! Each modifier is a capability query over player-owned collections
//! (skills, placed collectibles). Active modifiers each remove a fixed
//! percentage of the *full* recovery window; percentages add up rather than
//! compound. New modifiers are registered here and the reducers pick them up
//! without changes to their control flow.

use std::sync::Arc;

use tracing::trace;

use crate::env::ConfigOracle;
use crate::state::{
    CollectibleName, Collectibles, SkillName, Skills, Timestamp, has_skill, is_collectible_active,
};

/// Read-only facts a modifier may inspect.
pub struct ModifierContext<'a> {
    pub skills: &'a Skills,
    pub collectibles: &'a Collectibles,
    /// Instant the modifier is evaluated at.
    pub now: Timestamp,
    pub config: &'a dyn ConfigOracle,
}

/// A boost that shortens a resource node's recovery.
pub trait RecoveryModifier: Send + Sync {
    /// Stable identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Share of the full recovery window removed while active, in percent.
    fn reduction_percent(&self) -> u32;

    /// Whether the boost applies in the given context.
    fn is_active(&self, ctx: &ModifierContext<'_>) -> bool;

    /// Milliseconds removed from a window of `recovery_ms` while active.
    fn reduction_ms(&self, recovery_ms: i64) -> i64 {
        recovery_ms.saturating_mul(i64::from(self.reduction_percent())) / 100
    }
}

/// Active while the bumpkin has learned `skill`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillModifier {
    pub skill: SkillName,
    pub percent: u32,
}

impl RecoveryModifier for SkillModifier {
    fn name(&self) -> &'static str {
        self.skill.into()
    }

    fn reduction_percent(&self) -> u32 {
        self.percent
    }

    fn is_active(&self, ctx: &ModifierContext<'_>) -> bool {
        has_skill(ctx.skills, self.skill)
    }
}

/// Active while a placement of `collectible` is built and inside its effect
/// window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectibleModifier {
    pub collectible: CollectibleName,
    pub percent: u32,
}

impl RecoveryModifier for CollectibleModifier {
    fn name(&self) -> &'static str {
        self.collectible.into()
    }

    fn reduction_percent(&self) -> u32 {
        self.percent
    }

    fn is_active(&self, ctx: &ModifierContext<'_>) -> bool {
        is_collectible_active(
            self.collectible,
            ctx.collectibles,
            ctx.now,
            ctx.config.collectible_effect_ms(self.collectible),
        )
    }
}

/// Ordered set of modifiers that apply to one resource type.
#[derive(Clone)]
pub struct ModifierRegistry {
    modifiers: Arc<[Arc<dyn RecoveryModifier>]>,
}

impl ModifierRegistry {
    pub fn new(modifiers: Vec<Arc<dyn RecoveryModifier>>) -> Self {
        Self {
            modifiers: modifiers.into(),
        }
    }

    /// Modifiers for stone rocks:
    /// - Coal Face skill: 20%
    /// - Time Warp Totem: 50%
    pub fn stone() -> Self {
        Self::new(vec![
            Arc::new(SkillModifier {
                skill: SkillName::CoalFace,
                percent: 20,
            }),
            Arc::new(CollectibleModifier {
                collectible: CollectibleName::TimeWarpTotem,
                percent: 50,
            }),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn RecoveryModifier> {
        self.modifiers.iter().map(|modifier| modifier.as_ref())
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// Sum of the reductions of every active modifier.
    pub fn total_reduction_ms(&self, ctx: &ModifierContext<'_>, recovery_ms: i64) -> i64 {
        self.iter()
            .filter(|modifier| modifier.is_active(ctx))
            .map(|modifier| {
                let reduction = modifier.reduction_ms(recovery_ms);
                trace!(modifier = modifier.name(), reduction, "recovery modifier active");
                reduction
            })
            .fold(0_i64, i64::saturating_add)
    }
}

impl std::fmt::Debug for ModifierRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|modifier| modifier.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{PlacedItem, Position};

    const WINDOW_MS: i64 = 14_400_000;

    fn context<'a>(
        skills: &'a Skills,
        collectibles: &'a Collectibles,
        config: &'a GameConfig,
    ) -> ModifierContext<'a> {
        ModifierContext {
            skills,
            collectibles,
            now: Timestamp(1_000),
            config,
        }
    }

    fn active_totem() -> Collectibles {
        Collectibles::from([(
            CollectibleName::TimeWarpTotem,
            vec![PlacedItem::new("1", Position::ORIGIN, Timestamp(0))],
        )])
    }

    #[test]
    fn no_boosts_reduce_nothing() {
        let config = GameConfig::default();
        let (skills, collectibles) = (Skills::new(), Collectibles::new());

        let ctx = context(&skills, &collectibles, &config);

        let reduction = ModifierRegistry::stone().total_reduction_ms(&ctx, WINDOW_MS);

        assert_eq!(reduction, 0);
    }

    #[test]
    fn skill_and_totem_stack_additively() {
        let config = GameConfig::default();
        let skills = Skills::from([(SkillName::CoalFace, 1)]);
        let collectibles = active_totem();

        let ctx = context(&skills, &collectibles, &config);

        let reduction = ModifierRegistry::stone().total_reduction_ms(&ctx, WINDOW_MS);

        assert_eq!(reduction, WINDOW_MS * 7 / 10);
    }

    #[test]
    fn unrelated_skills_do_not_count() {
        let config = GameConfig::default();
        let skills = Skills::from([(SkillName::Lumberjack, 3)]);
        let collectibles = Collectibles::new();

        let ctx = context(&skills, &collectibles, &config);

        let reduction = ModifierRegistry::stone().total_reduction_ms(&ctx, WINDOW_MS);

        assert_eq!(reduction, 0);
    }

    #[test]
    fn custom_registries_extend_the_stone_set() {
        struct Always;
        impl RecoveryModifier for Always {
            fn name(&self) -> &'static str {
                "always"
            }
            fn reduction_percent(&self) -> u32 {
                10
            }
            fn is_active(&self, _ctx: &ModifierContext<'_>) -> bool {
                true
            }
        }

        let config = GameConfig::default();
        let (skills, collectibles) = (Skills::new(), Collectibles::new());
        let mut modifiers: Vec<Arc<dyn RecoveryModifier>> = ModifierRegistry::stone()
            .modifiers
            .iter()
            .cloned()
            .collect();
        modifiers.push(Arc::new(Always));
        let registry = ModifierRegistry::new(modifiers);

        let ctx = context(&skills, &collectibles, &config);

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.total_reduction_ms(&ctx, WINDOW_MS), WINDOW_MS / 10);
    }
}
