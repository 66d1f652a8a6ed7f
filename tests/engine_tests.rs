//! Match engine integration tests through the public API.

use card_balance_sim::deck::{preset, PRESET_NAMES};
use card_balance_sim::engine::AttackTarget;
use card_balance_sim::{
    CardCatalog, CardTemplate, Deck, DeckConfig, EndReason, MatchConfig, MatchEngine,
    MatchRecorder, Side, TieBreak,
};

fn standard(config: DeckConfig) -> Deck {
    Deck::build(&config, &CardCatalog::standard()).unwrap()
}

fn engine(config: MatchConfig) -> MatchEngine {
    MatchEngine::new(config).unwrap()
}

/// A catalog with cards that can never deal lethal damage in 20 turns.
fn stall_catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();
    catalog.register(CardTemplate::new("Pebble", 1000, 2, 20, 4)).unwrap();
    catalog.register(CardTemplate::new("Boulder", 1000, 1, 10, 100)).unwrap();
    catalog
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[test]
fn test_angry_goblin_vs_hardy_skeleton() {
    let goblin = standard(DeckConfig::new(["Goblin"]).with_flavor("angry"));
    let skeleton = standard(DeckConfig::new(["Skeleton"]).with_flavor("hardy"));

    let mut recorder = MatchRecorder::new();
    let engine = engine(MatchConfig::default());
    let result = engine.simulate_observed(&goblin, &skeleton, TieBreak::Seeded(7), &mut recorder);

    assert_eq!(result.winner, Some(Side::Two));
    assert_eq!(result.turn, 1);
    assert_eq!(result.reason, EndReason::DeckOut);

    // Goblin is faster and strikes first
    assert_eq!(recorder.attacks.len(), 2);
    assert_eq!(recorder.attacks[0].side, Side::One);
    assert_eq!(recorder.attacks[0].damage, 19);
    assert_eq!(
        recorder.attacks[0].target,
        AttackTarget::Unit { name: "Skeleton".into(), hp_after: 75 }
    );
    assert_eq!(
        recorder.attacks[1].target,
        AttackTarget::Unit { name: "Goblin".into(), hp_after: 0 }
    );

    let after = &recorder.cleaned[0];
    assert!(after.unit_hp[Side::One].is_empty());
    assert_eq!(after.unit_hp[Side::Two], vec![75]);
    assert_eq!(after.hp[Side::One], 100);
    assert_eq!(after.hp[Side::Two], 100);
}

#[test]
fn test_timeout_goes_to_higher_hp() {
    let catalog = stall_catalog();
    let pebble = Deck::build(&DeckConfig::new(["Pebble"]), &catalog).unwrap();
    let boulder = Deck::build(&DeckConfig::new(["Boulder"]), &catalog).unwrap();
    let engine = engine(MatchConfig::default());

    // Boulder never becomes affordable, so Pebble chips away at the player
    let result = engine.simulate(&pebble, &boulder);
    assert_eq!(result.winner, Some(Side::One));
    assert_eq!(result.turn, 20);
    assert_eq!(result.reason, EndReason::Timeout);

    let result = engine.simulate(&boulder, &pebble);
    assert_eq!(result.winner, Some(Side::Two));
    assert_eq!(result.reason, EndReason::Timeout);
}

#[test]
fn test_timeout_respects_configured_turn_limit() {
    let catalog = stall_catalog();
    let pebble = Deck::build(&DeckConfig::new(["Pebble"]), &catalog).unwrap();
    let boulder = Deck::build(&DeckConfig::new(["Boulder"]), &catalog).unwrap();

    let mut recorder = MatchRecorder::new();
    let engine = engine(MatchConfig::new().with_max_turns(5));
    let result = engine.simulate_observed(&pebble, &boulder, TieBreak::FieldOrder, &mut recorder);

    assert_eq!(result.turn, 5);
    assert_eq!(result.reason, EndReason::Timeout);
    assert_eq!(recorder.cleaned.len(), 5);
    assert_eq!(recorder.cleaned[4].hp[Side::Two], 90);
}

// =============================================================================
// Extreme Stats
// =============================================================================

fn extreme_catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();
    catalog.register(CardTemplate::new("Imp", 20, 10, 40, 1)).unwrap();
    catalog.register(CardTemplate::new("Titan", 1, 1, 1, i32::MAX)).unwrap();
    catalog.register(CardTemplate::new("Nuke", 10, i32::MAX, 10, 1)).unwrap();
    catalog.register(CardTemplate::new("Flash", 10, 5, i32::MAX, 1)).unwrap();
    catalog.register(CardTemplate::new("Boulder", 1000, 1, 10, 100)).unwrap();
    catalog
}

#[test]
fn test_unaffordable_card_after_spending() {
    let catalog = extreme_catalog();
    let imp_titan = Deck::build(&DeckConfig::new(["Imp", "Titan"]), &catalog).unwrap();
    let imp = Deck::build(&DeckConfig::new(["Imp"]), &catalog).unwrap();

    let mut recorder = MatchRecorder::new();
    let result = engine(MatchConfig::default()).simulate_observed(
        &imp_titan,
        &imp,
        TieBreak::FieldOrder,
        &mut recorder,
    );

    assert_eq!(recorder.deployed[0].field_sizes[Side::One], 1);
    assert_eq!(recorder.deployed[0].remaining[Side::One], 1);
    assert_eq!(result.winner, Some(Side::One));
    assert_eq!(result.reason, EndReason::DeckOut);
    assert_eq!(result.turn, 2);
}

#[test]
fn test_player_hp_saturates() {
    let catalog = extreme_catalog();
    let nukes = Deck::build(&DeckConfig::repeated("Nuke", 2), &catalog).unwrap();
    let boulder = Deck::build(&DeckConfig::new(["Boulder"]), &catalog).unwrap();

    let mut recorder = MatchRecorder::new();
    let result = engine(MatchConfig::default()).simulate_observed(
        &nukes,
        &boulder,
        TieBreak::FieldOrder,
        &mut recorder,
    );

    assert_eq!(recorder.attacks.len(), 2);
    assert_eq!(recorder.cleaned[0].hp[Side::Two], i32::MIN);
    assert_eq!(result.winner, Some(Side::One));
    assert_eq!(result.reason, EndReason::PlayerHp);
    assert_eq!(result.turn, 1);
}

#[test]
fn test_speedy_max_speed_still_acts_first() {
    let catalog = extreme_catalog();
    let flash = Deck::build(&DeckConfig::new(["Flash"]).with_flavor("speedy"), &catalog).unwrap();
    let imp = Deck::build(&DeckConfig::new(["Imp"]), &catalog).unwrap();
    assert_eq!(flash.card(0).unwrap().speed, i32::MAX);

    let mut recorder = MatchRecorder::new();
    let result = engine(MatchConfig::default()).simulate_observed(
        &imp,
        &flash,
        TieBreak::Seeded(0),
        &mut recorder,
    );

    assert_eq!(recorder.attacks[0].side, Side::Two);
    assert_eq!(
        recorder.attacks[0].target,
        AttackTarget::Unit { name: "Imp".into(), hp_after: 15 }
    );
    assert_eq!(result.winner, Some(Side::One));
    assert_eq!(result.reason, EndReason::DeckOut);
    assert_eq!(result.turn, 1);
}

// =============================================================================
// Presets
// =============================================================================

#[test]
fn test_every_preset_pairing_finishes() {
    let engine = engine(MatchConfig::default());
    let decks: Vec<Deck> = PRESET_NAMES
        .iter()
        .map(|name| standard(preset(name).unwrap()))
        .collect();

    for a in &decks {
        for b in &decks {
            let result = engine.simulate(a, b);
            assert!((1..=20).contains(&result.turn), "{} vs {}: {result}", a.name(), b.name());
            if result.winner.is_none() {
                assert_eq!(result.reason, EndReason::Timeout);
            }
            if result.reason == EndReason::Timeout {
                assert_eq!(result.turn, 20);
            }
        }
    }
}

#[test]
fn test_field_limit_holds_for_presets() {
    let rush = standard(preset("goblin-rush").unwrap());
    let wall = standard(preset("skeleton-wall").unwrap());

    for size in 1..=5 {
        let engine = engine(MatchConfig::new().with_max_field_size(size));
        let mut recorder = MatchRecorder::new();
        engine.simulate_observed(&rush, &wall, TieBreak::Seeded(3), &mut recorder);
        assert!(recorder.max_field_size() <= size);
    }
}

#[test]
fn test_cleanup_leaves_only_living_units() {
    let mixed = standard(preset("mixed-arsenal").unwrap());
    let control = standard(preset("archer-control").unwrap());

    let mut recorder = MatchRecorder::new();
    engine(MatchConfig::default()).simulate_observed(
        &mixed,
        &control,
        TieBreak::Seeded(11),
        &mut recorder,
    );

    for snapshot in &recorder.cleaned {
        for (_, units) in snapshot.unit_hp.iter() {
            assert!(units.iter().all(|&hp| hp > 0));
        }
    }
}

#[test]
fn test_recorded_result_matches_returned_result() {
    let rush = standard(preset("goblin-rush").unwrap());
    let control = standard(preset("archer-control").unwrap());

    let mut recorder = MatchRecorder::new();
    let engine = engine(MatchConfig::default());
    let result = engine.simulate_observed(&rush, &control, TieBreak::Seeded(1), &mut recorder);

    assert_eq!(recorder.result, Some(result));
    assert_eq!(recorder.cleaned.len() as u32, result.turn);
    assert_eq!(engine.simulate_observed(&rush, &control, TieBreak::Seeded(1), &mut ()), result);
}

// =============================================================================
// Deck Files
// =============================================================================

#[test]
fn test_deck_file_plays_like_preset() {
    let path = std::env::temp_dir().join(format!("balance_sim_engine_{}.json", std::process::id()));
    let json = serde_json::to_string(&preset("skeleton-wall").unwrap()).unwrap();
    std::fs::write(&path, json).unwrap();

    let from_file = standard(DeckConfig::load(&path).unwrap());
    std::fs::remove_file(&path).unwrap();
    let from_preset = standard(preset("skeleton-wall").unwrap());
    let rush = standard(preset("goblin-rush").unwrap());

    let engine = engine(MatchConfig::default());
    assert_eq!(engine.simulate(&rush, &from_file), engine.simulate(&rush, &from_preset));
}
