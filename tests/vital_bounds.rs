//! Property tests: whatever the input, vitals stay bounded and the player
//! stays on the field

use proptest::prelude::*;
use survival_arcade::core::config::SimulationConfig;
use survival_arcade::ecs::world::World;
use survival_arcade::render::snapshot;
use survival_arcade::simulation::{run_simulation_tick, PlayerInput};

fn input_strategy() -> impl Strategy<Value = PlayerInput> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(left, right, up, down, fire)| PlayerInput {
            left,
            right,
            up,
            down,
            fire,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_vitals_and_position_bounded(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(input_strategy(), 1..400),
    ) {
        let config = SimulationConfig { seed, ..SimulationConfig::default() };
        let mut world = World::new(config);
        let dt = world.config.tick_duration();

        for input in &inputs {
            run_simulation_tick(&mut world, input, &[], dt);

            let v = &world.player.vitals;
            for stat in [v.hunger, v.thirst, v.energy] {
                prop_assert!((0.0..=100.0).contains(&stat));
            }
            prop_assert!(v.health <= 100.0);

            let hud = snapshot(&world).hud;
            prop_assert!(hud.health >= 0 && hud.health <= 100);

            let b = world.player.position;
            prop_assert!(b.x >= 0.0 && b.y >= 0.0);
            prop_assert!(b.x + world.player.size.x <= 1024.0);
            prop_assert!(b.y + world.player.size.y <= 768.0);

            if world.phase.is_playing() {
                prop_assert_eq!(world.resources.len(), 10);
                prop_assert!(world.hostiles.len() <= 5);
            }
        }
    }
}
