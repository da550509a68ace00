//! Roll engine - the single path binding rolls and pool rolls go through

use crate::binding::RollBinding;
use crate::config::RollConstants;
use crate::format::{pool_log_entry, LogEntry};
use crate::formula::compile;
use crate::modifiers::CharacterModifiers;
use crate::pool::PoolRequest;
use crate::result::RollResult;
use crate::RollError;
use dice_core::{resolve_pool, thread_source, total_dice, AdvMode, DieGroup, RandomSource};

/// Resolves bindings and free-form pools against configured dice limits.
///
/// Holds only read-only constants; every call works on its own values plus
/// the randomness source passed in.
#[derive(Debug, Clone, Default)]
pub struct RollEngine {
    constants: RollConstants,
}

impl RollEngine {
    pub fn new(constants: RollConstants) -> Self {
        RollEngine { constants }
    }

    pub fn constants(&self) -> &RollConstants {
        &self.constants
    }

    /// Compile and roll a binding
    pub fn roll_binding<R: RandomSource + ?Sized>(
        &self,
        binding: &RollBinding,
        modifiers: &CharacterModifiers,
        situational: i32,
        mode: AdvMode,
        rng: &mut R,
    ) -> Result<RollResult, RollError> {
        let compiled = compile(binding, modifiers, situational, mode)?;
        self.resolve(
            compiled.formula_text,
            &compiled.groups,
            compiled.modifier,
            mode,
            rng,
        )
    }

    /// Roll a free-form dice pool
    pub fn roll_pool<R: RandomSource + ?Sized>(
        &self,
        request: &PoolRequest,
        rng: &mut R,
    ) -> Result<RollResult, RollError> {
        self.resolve(
            request.formula_text(),
            &request.groups,
            request.modifier,
            request.mode,
            rng,
        )
    }

    /// Dice-log entry for a pool roll, using the configured roll type
    pub fn pool_log_entry(
        &self,
        character_name: &str,
        character_id: &str,
        result: &RollResult,
    ) -> LogEntry {
        pool_log_entry(
            character_name,
            character_id,
            &self.constants.log.pool_roll_type,
            result,
        )
    }

    /// Reject pools outside the configured limits before anything is rolled
    pub fn check_limits(&self, groups: &[DieGroup]) -> Result<(), RollError> {
        let limits = &self.constants.limits;

        let count = total_dice(groups);
        if count > limits.max_dice as u64 {
            return Err(RollError::PoolTooLarge {
                count,
                max: limits.max_dice,
            });
        }

        if let Some(group) = groups.iter().find(|g| g.sides > limits.max_sides) {
            return Err(RollError::DieTooLarge {
                sides: group.sides,
                max: limits.max_sides,
            });
        }

        Ok(())
    }

    fn resolve<R: RandomSource + ?Sized>(
        &self,
        formula: String,
        groups: &[DieGroup],
        modifier: i32,
        mode: AdvMode,
        rng: &mut R,
    ) -> Result<RollResult, RollError> {
        self.check_limits(groups)?;
        let outcome = resolve_pool(groups, mode, rng)?;
        let result = RollResult::from_outcome(formula, modifier, outcome);

        tracing::debug!(
            formula = %result.formula,
            raw = result.raw_result,
            modifier = result.modifier,
            total = result.total,
            %mode,
            "roll resolved"
        );
        Ok(result)
    }
}

/// Roll a binding with default limits and the thread-local generator
pub fn roll_binding(
    binding: &RollBinding,
    modifiers: &CharacterModifiers,
    situational: i32,
    mode: AdvMode,
) -> Result<RollResult, RollError> {
    let mut rng = thread_source();
    RollEngine::default().roll_binding(binding, modifiers, situational, mode, &mut rng)
}

/// Roll a free-form pool with default limits and the thread-local generator
pub fn roll_pool(request: &PoolRequest) -> Result<RollResult, RollError> {
    let mut rng = thread_source();
    RollEngine::default().roll_pool(request, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::RollKind;
    use crate::config::DiceLimits;
    use dice_core::{DiceError, ScriptedSource, SeededSource};
    use proptest::prelude::*;

    fn mods() -> CharacterModifiers {
        CharacterModifiers::new().with("STR", 3).with("DEX", 1)
    }

    #[test]
    fn test_binding_and_pool_share_advantage_rules() {
        // A = [2, 3], B = [6, 1]: advantage keeps B on both paths
        let script = [(2, 6), (3, 6), (6, 6), (1, 6)];
        let engine = RollEngine::default();

        let binding = RollBinding::new(RollKind::Damage).with_die("2d6");
        let mut rng = ScriptedSource::faces(script);
        let from_binding = engine
            .roll_binding(&binding, &mods(), 0, AdvMode::Advantage, &mut rng)
            .unwrap();

        let pool = PoolRequest::new(vec![DieGroup::new(6, 2)]).with_mode(AdvMode::Advantage);
        let mut rng = ScriptedSource::faces(script);
        let from_pool = engine.roll_pool(&pool, &mut rng).unwrap();

        assert_eq!(from_binding.rolls, from_pool.rolls);
        assert_eq!(from_binding.all_rolled, from_pool.all_rolled);
        assert_eq!(from_binding.formula, from_pool.formula);
        assert_eq!(from_binding.raw_result, 7);
    }

    #[test]
    fn test_situational_modifier_applied() {
        let engine = RollEngine::default();
        let binding = RollBinding::new(RollKind::Attack).with_ability("STR").with_flat(2);
        let mut rng = ScriptedSource::faces([(10, 20)]);
        let result = engine
            .roll_binding(&binding, &mods(), -1, AdvMode::Normal, &mut rng)
            .unwrap();

        assert_eq!(result.modifier, 4);
        assert_eq!(result.total, 14);
        assert_eq!(result.formula, "d20 +4");
    }

    #[test]
    fn test_pool_too_large() {
        let engine = RollEngine::new(RollConstants {
            limits: DiceLimits {
                max_dice: 10,
                max_sides: 100,
            },
            ..Default::default()
        });
        let mut rng = ScriptedSource::new([0.5]);

        let pool = PoolRequest::new(vec![DieGroup::new(6, 8), DieGroup::new(4, 3)]);
        assert_eq!(
            engine.roll_pool(&pool, &mut rng),
            Err(RollError::PoolTooLarge { count: 11, max: 10 })
        );

        let pool = PoolRequest::new(vec![DieGroup::new(1000, 1)]);
        assert_eq!(
            engine.roll_pool(&pool, &mut rng),
            Err(RollError::DieTooLarge {
                sides: 1000,
                max: 100
            })
        );
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_limit_counts_dice_once_under_advantage() {
        let engine = RollEngine::new(RollConstants {
            limits: DiceLimits {
                max_dice: 2,
                max_sides: 20,
            },
            ..Default::default()
        });
        let pool = PoolRequest::new(vec![DieGroup::new(6, 2)]).with_mode(AdvMode::Advantage);
        let mut rng = SeededSource::seeded(3);
        let result = engine.roll_pool(&pool, &mut rng).unwrap();
        assert_eq!(result.all_rolled.len(), 4);
    }

    #[test]
    fn test_empty_pool_surfaces_error() {
        let engine = RollEngine::default();
        let mut rng = ScriptedSource::new([0.5]);
        let result = engine.roll_pool(&PoolRequest::new(Vec::new()), &mut rng);
        assert_eq!(result, Err(RollError::Dice(DiceError::EmptyPool)));
    }

    #[test]
    fn test_engine_pool_log_entry_uses_config() {
        let mut constants = RollConstants::default();
        constants.log.pool_roll_type = "chat".to_string();
        let engine = RollEngine::new(constants);

        let mut rng = ScriptedSource::faces([(4, 6)]);
        let result = engine
            .roll_pool(&PoolRequest::new(vec![DieGroup::new(6, 1)]), &mut rng)
            .unwrap();
        let entry = engine.pool_log_entry("Mira", "char-42", &result);
        assert_eq!(entry.roll_type, "chat");
        assert_eq!(entry.total, 4);
    }

    #[test]
    fn test_seeded_rolls_reproducible() {
        let engine = RollEngine::default();
        let binding = RollBinding::new(RollKind::Damage).with_die("4d6+2d8");

        let a = engine
            .roll_binding(&binding, &mods(), 0, AdvMode::Disadvantage, &mut SeededSource::seeded(77))
            .unwrap();
        let b = engine
            .roll_binding(&binding, &mods(), 0, AdvMode::Disadvantage, &mut SeededSource::seeded(77))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_dyn_source_accepted() {
        let engine = RollEngine::default();
        let mut scripted = ScriptedSource::faces([(5, 8)]);
        let rng: &mut dyn RandomSource = &mut scripted;
        let result = engine
            .roll_pool(&PoolRequest::new(vec![DieGroup::new(8, 1)]), rng)
            .unwrap();
        assert_eq!(result.raw_result, 5);
    }

    #[test]
    fn test_thread_rng_helpers() {
        let binding = RollBinding::new(RollKind::Check).with_ability("DEX");
        let result = roll_binding(&binding, &mods(), 0, AdvMode::Advantage).unwrap();
        assert!(result.raw_result >= 1 && result.raw_result <= 20);
        assert_eq!(result.total, result.raw_result as i64 + 1);

        let result = roll_pool(&PoolRequest::new(vec![DieGroup::new(4, 3)])).unwrap();
        assert!(result.raw_result >= 3 && result.raw_result <= 12);
    }

    fn mode_strategy() -> impl Strategy<Value = AdvMode> {
        prop_oneof![
            Just(AdvMode::Normal),
            Just(AdvMode::Advantage),
            Just(AdvMode::Disadvantage),
        ]
    }

    proptest! {
        #[test]
        fn prop_sums_are_consistent(
            seed in any::<u64>(),
            sides in 1u32..=100,
            count in 1u32..=10,
            modifier in -50i32..=50,
            mode in mode_strategy(),
        ) {
            let engine = RollEngine::default();
            let pool = PoolRequest::new(vec![DieGroup::new(sides, count)])
                .with_mode(mode)
                .with_modifier(modifier);
            let result = engine.roll_pool(&pool, &mut SeededSource::seeded(seed)).unwrap();

            let kept_sum: u64 = result.rolls.iter().map(|f| u64::from(f.value)).sum();
            prop_assert_eq!(result.raw_result, kept_sum);
            prop_assert_eq!(result.total, kept_sum as i64 + modifier as i64);
            prop_assert_eq!(result.rolls.len() as u32, count);
        }

        #[test]
        fn prop_binding_totals(
            seed in any::<u64>(),
            strength in -5i32..=10,
            flat in -5i32..=5,
            situational in -5i32..=5,
        ) {
            let engine = RollEngine::default();
            let modifiers = CharacterModifiers::new().with("STR", strength);
            let binding = RollBinding::new(RollKind::Attack).with_ability("STR").with_flat(flat);
            let result = engine
                .roll_binding(&binding, &modifiers, situational, AdvMode::Normal, &mut SeededSource::seeded(seed))
                .unwrap();

            prop_assert_eq!(result.modifier, strength + flat + situational);
            prop_assert_eq!(result.total, result.raw_result as i64 + result.modifier as i64);
        }
    }
}
