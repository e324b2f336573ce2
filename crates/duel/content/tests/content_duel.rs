use std::fs;

use duel_content::{CardLoader, ContentFactory};
use duel_core::{
    Action, CardId, DuelEngine, DuelEnv, DuelSetup, DuelState, DuelStatus, MasteryLevel,
    MasteryRecord, OpponentProfile, Side, StackComparison, StatusEffectKind,
};

fn ids(list: &[&str]) -> Vec<CardId> {
    list.iter().map(|id| CardId::from(*id)).collect()
}

#[test]
fn factory_loads_a_data_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("duel.toml"), "starting_hp = 150\n").unwrap();
    fs::write(
        dir.path().join("cards.ron"),
        r#"(cards: [
            (id: "walk", name: "Walk", categories: [Movement], stats: (attack: 5, defense: 5)),
        ])"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("combos.ron"),
        r#"[
            (name: "Sunrise Run", prime_category: Light, trigger_category: Movement,
             effect: DoubleDamage),
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("mastery.ron"),
        r#"{"walk": (level: Master, streak: 40)}"#,
    )
    .unwrap();

    let factory = ContentFactory::new(dir.path());

    assert_eq!(factory.load_config().unwrap().starting_hp, 150);
    assert_eq!(factory.load_cards().unwrap().len(), 1);
    assert_eq!(factory.load_combos().unwrap().len(), 1);
    assert_eq!(
        factory.load_mastery().unwrap()[&CardId::from("walk")].level,
        MasteryLevel::Master
    );
}

#[test]
fn missing_mastery_file_means_no_mastery() {
    let dir = tempfile::tempdir().unwrap();
    let factory = ContentFactory::new(dir.path());

    assert!(factory.load_mastery().unwrap().is_empty());
}

#[test]
fn errors_name_the_offending_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cards.ron");
    fs::write(&path, "(cards: [(name: \"no id\")])").unwrap();

    let err = CardLoader::load(&path).unwrap_err();

    assert!(err.to_string().contains("cards.ron"), "{err}");
    assert!(ContentFactory::new(dir.path()).load_config().is_err());
}

#[test]
fn shipped_content_runs_a_full_exchange() {
    let config = ContentFactory::default_config().unwrap();
    let combos = ContentFactory::default_combos().unwrap();
    let catalog = ContentFactory::default_cards().unwrap();
    let engine = DuelEngine::new(DuelEnv::new(&config, &combos));

    let player_hand = catalog
        .hand(&ids(&["morning_sunlight", "zone2_run", "meditation"]))
        .unwrap();
    let opponent_hand = catalog
        .hand(&ids(&["heavy_lifting", "protein_breakfast"]))
        .unwrap();
    let comparison = StackComparison::new(&player_hand, &opponent_hand, &combos, &config);
    assert!(comparison.player > 0 && comparison.opponent > 0);

    let mastery = [
        (CardId::from("morning_sunlight"), MasteryRecord::new(MasteryLevel::Expert)),
        (CardId::from("meditation"), MasteryRecord::new(MasteryLevel::Adept)),
    ]
    .into_iter()
    .collect();
    let setup = DuelSetup::new(
        OpponentProfile::challenge("Burnout", 90, 12),
        player_hand,
        opponent_hand,
    );

    let state = engine.apply(&DuelState::new(), &Action::initialize(setup, mastery));
    assert_eq!(state.status, DuelStatus::Ongoing);
    // Circadian Anchor unlocked at Expert; Clear Head stays locked at Adept.
    assert_eq!(state.player.max_hp, 120);
    assert!(!state.player.effects.has(StatusEffectKind::Focused));
    assert_eq!(state.player.hand[0].stats.attack, 13);

    let state = engine.apply(&state, &Action::start_of_turn(Side::Player));
    let sunlight = state.player.hand[0].clone();
    let state = engine.apply(&state, &Action::play_card(&sunlight, Side::Player));
    assert_eq!(state.opponent.hp, 90 - 13);

    let run = state.player.hand[0].clone();
    let state = engine.apply(&state, &Action::play_card(&run, Side::Player));
    assert_eq!(state.opponent.hp, 77 - 28);
    assert_eq!(
        state.active_combo.as_ref().map(|c| c.name.as_str()),
        Some("Sunrise Run")
    );
    assert_eq!(state.player.stamina, 10 - 1 - 3);

    let state = engine.apply(&state, &Action::animation_complete(true));
    let state = engine.apply(&state, &Action::start_of_turn(Side::Opponent));
    let state = engine.apply(&state, &Action::opponent_turn());

    // Heavy lifting (cost 7) is the strongest affordable card.
    assert_eq!(state.player.hp, 120 - 22);
    assert!(state.opponent.effects.has(StatusEffectKind::Fatigued));
    assert_eq!(state.opponent.stamina, 3);
}
