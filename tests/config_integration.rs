//! Config files shipped in `data/` load and drive the world

use survival_arcade::core::config::{load_config, SimulationConfig};
use survival_arcade::ecs::world::World;

#[test]
fn test_shipped_config_matches_defaults() {
    let loaded = load_config("data/survival.toml").expect("Should load data/survival.toml");
    let defaults = SimulationConfig::default();

    assert_eq!(loaded.seed, defaults.seed);
    assert_eq!(loaded.timing.tick_rate, defaults.timing.tick_rate);
    assert_eq!(loaded.player.fire_cooldown_ms, defaults.player.fire_cooldown_ms);
    assert_eq!(loaded.player.thirst_decay, defaults.player.thirst_decay);
    assert_eq!(loaded.hostile.population, defaults.hostile.population);
    assert_eq!(loaded.resource.population, defaults.resource.population);
}

#[test]
fn test_config_populations_drive_world() {
    let mut config = SimulationConfig::default();
    config.hostile.population = 2;
    config.resource.population = 4;
    let world = World::new(config);
    assert_eq!(world.hostiles.len(), 2);
    assert_eq!(world.resources.len(), 4);
}
