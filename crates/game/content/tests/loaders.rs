use std::fs;

use land_content::{ConfigLoader, ContentFactory};
use land_core::{
    Bumpkin, Decimal, FixedClock, GameConfig, GameEngine, GameEnv, GameState, ItemName, Rock,
    StoneMineAction, Timestamp,
};
use tempfile::TempDir;

#[test]
fn bundled_data_matches_the_built_in_defaults() {
    let config = ContentFactory::bundled().load_config().unwrap();

    assert_eq!(config, GameConfig::default());
}

#[test]
fn loads_config_from_a_data_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(ContentFactory::CONFIG_FILE),
        "stone_recovery_secs = 30\ntime_warp_totem_duration_secs = 90\n",
    )
    .unwrap();

    let config = ContentFactory::new(dir.path()).load_config().unwrap();

    assert_eq!(config.stone_recovery_secs, 30);
    assert_eq!(config.time_warp_totem_duration_secs, 90);
}

#[test]
fn missing_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let error = ConfigLoader::load(&path).unwrap_err();

    assert!(error.to_string().contains("absent.toml"));
}

#[test]
fn malformed_file_reports_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("game.toml");
    fs::write(&path, "stone_recovery_secs = \"soon\"").unwrap();

    let error = ConfigLoader::load(&path).unwrap_err();

    let message = error.to_string();
    assert!(message.contains("Failed to parse config TOML"));
    assert!(message.contains("game.toml"));
}

#[test]
fn reset_yield_key_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(ContentFactory::CONFIG_FILE);
    fs::write(&path, "stone_reset_amount = 4\n").unwrap();

    assert!(ConfigLoader::load(&path).is_err());
}

#[test]
fn loaded_config_drives_the_engine() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(ContentFactory::CONFIG_FILE),
        "stone_recovery_secs = 10\n",
    )
    .unwrap();
    let config = ContentFactory::new(dir.path()).load_config().unwrap();
    let clock = FixedClock::new(Timestamp(10_001));
    let engine = GameEngine::new(GameEnv::with_all(&config, &clock));
    let state = GameState::empty()
        .with_rock(0, Rock::new(Decimal::ONE, Timestamp(0)))
        .with_inventory([(ItemName::Pickaxe, Decimal::ONE)].into_iter().collect())
        .with_bumpkin(Bumpkin::new());

    let next = engine
        .reduce(&state, &StoneMineAction::new(0).into())
        .unwrap();

    assert_eq!(next.rock(0).unwrap().stone.amount, Decimal::TWO);
    assert_eq!(next.inventory.amount(ItemName::Stone), Decimal::ONE);
    assert_eq!(next.inventory.amount(ItemName::Pickaxe), Decimal::ZERO);
}
