//! End-to-end roll scenarios: sheet input in, result and log entry out

use roll_core::prelude::*;
use roll_core::{to_log_entry, BindingConfig, DiceError, PoolRequest, ScriptedSource};

fn engine() -> RollEngine {
    RollEngine::default()
}

#[test]
fn skill_check_with_ability_modifier() {
    let binding = RollBinding::new(RollKind::Check)
        .with_ability("STR")
        .with_flat(0);
    let modifiers = CharacterModifiers::new().with("STR", 3);
    let mut rng = ScriptedSource::faces([(14, 20)]);

    let result = engine()
        .roll_binding(&binding, &modifiers, 0, AdvMode::Normal, &mut rng)
        .unwrap();

    assert_eq!(result.formula, "d20 +3");
    assert_eq!(result.raw_result, 14);
    assert_eq!(result.modifier, 3);
    assert_eq!(result.total, 17);
    assert_eq!(result.rolls, vec![DieFace { value: 14, sides: 20 }]);
}

#[test]
fn damage_without_modifier() {
    let binding = RollBinding::new(RollKind::Damage).with_die("1d8");
    let mut rng = ScriptedSource::faces([(6, 8)]);

    let result = engine()
        .roll_binding(&binding, &CharacterModifiers::new(), 0, AdvMode::Normal, &mut rng)
        .unwrap();

    assert_eq!(result.formula, "1d8");
    assert_eq!(result.modifier, 0);
    assert_eq!(result.raw_result, 6);
    assert_eq!(result.total, 6);
}

#[test]
fn manual_pool_with_modifier() {
    let pool = PoolRequest::new(vec![DieGroup::new(6, 2)]).with_modifier(-1);
    let mut rng = ScriptedSource::faces([(3, 6), (5, 6)]);

    let result = engine().roll_pool(&pool, &mut rng).unwrap();

    assert_eq!(result.raw_result, 8);
    assert_eq!(result.total, 7);
    assert_eq!(rng.draws(), 2);
    assert_eq!(format_pool("Manual roll", &result), "Manual roll: 2d6 - 1 = 7");
}

#[test]
fn empty_pool_is_an_error_not_zero() {
    let pool = PoolRequest::new(Vec::new());
    let mut rng = ScriptedSource::new([0.5]);

    let result = engine().roll_pool(&pool, &mut rng);

    assert_eq!(result, Err(RollError::Dice(DiceError::EmptyPool)));
    assert_eq!(rng.draws(), 0);
}

#[test]
fn attack_with_advantage_rolls_twice_and_keeps_higher() {
    let binding = RollBinding::new(RollKind::Attack)
        .with_ability("DEX")
        .with_flat(2);
    let modifiers = CharacterModifiers::new().with("DEX", 4);
    let mut rng = ScriptedSource::faces([(7, 20), (20, 20)]);

    let result = engine()
        .roll_binding(&binding, &modifiers, 0, AdvMode::Advantage, &mut rng)
        .unwrap();

    assert_eq!(rng.draws(), 2);
    assert_eq!(result.formula, "d20 +6 (Advantage)");
    assert_eq!(result.raw_result, 20);
    assert_eq!(result.total, 26);
    assert_eq!(result.all_rolled.len(), 2);
    assert!(result.has_crit_success());
    assert_eq!(
        format_roll("Rapier", &binding, &result),
        "Rapier (attack): d20 +6 (Advantage) = 26 [CRIT SUCCESS]"
    );
}

#[test]
fn save_with_disadvantage_against_dc() {
    let binding = RollBinding::new(RollKind::Save)
        .with_ability("WILL")
        .with_dc(12);
    let modifiers = CharacterModifiers::new().with("WILL", 1);
    let mut rng = ScriptedSource::faces([(15, 20), (9, 20)]);

    let result = engine()
        .roll_binding(&binding, &modifiers, 0, AdvMode::Disadvantage, &mut rng)
        .unwrap();

    assert_eq!(result.raw_result, 9);
    assert_eq!(result.total, 10);
    assert_eq!(
        format_roll("Resist Fear", &binding, &result),
        "Resist Fear (save): d20 +1 (Disadvantage) = 10 vs DC 12: failure"
    );
}

#[test]
fn catalog_binding_to_log_entry() {
    let config: BindingConfig = serde_json::from_str(
        r#"{"type": "healing", "ability": "WIS", "die": "2d4", "flat": 2}"#,
    )
    .unwrap();
    let binding = RollBinding::from_config(config).unwrap();
    let modifiers: CharacterModifiers = serde_json::from_str(r#"{"WIS": 3}"#).unwrap();
    let mut rng = ScriptedSource::faces([(1, 4), (4, 4)]);

    let result = engine()
        .roll_binding(&binding, &modifiers, 0, AdvMode::Normal, &mut rng)
        .unwrap();
    let entry = to_log_entry("Mira", "c6b1e2", &binding, &result);

    assert_eq!(result.formula, "2d4 + 5");
    assert_eq!(entry.raw_result, 5);
    assert_eq!(entry.modifier, 5);
    assert_eq!(entry.total, 10);
    assert_eq!(entry.roll_type, "healing");

    let json: serde_json::Value = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["character_name"], "Mira");
    assert_eq!(json["individual_rolls"][1]["value"], 4);
}

#[test]
fn unsupported_catalog_kind() {
    let config: BindingConfig =
        serde_json::from_str(r#"{"type": "initiative", "ability": "DEX"}"#).unwrap();
    assert!(matches!(
        RollBinding::from_config(config),
        Err(RollError::UnsupportedRollKind(kind)) if kind == "initiative"
    ));
}

#[test]
fn bad_die_token_is_named() {
    let binding = RollBinding::new(RollKind::Damage).with_die("1d8+1x6");
    let mut rng = ScriptedSource::new([0.5]);

    let err = engine()
        .roll_binding(&binding, &CharacterModifiers::new(), 0, AdvMode::Normal, &mut rng)
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid dice notation '1x6' in '1d8+1x6'");
    assert_eq!(rng.draws(), 0);
}
