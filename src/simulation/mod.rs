pub mod autopilot;
pub mod clock;
pub mod events;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::FixedTimestep;
pub use events::{SimulationEvent, SoundCue};
pub use input::{Command, PlayerInput};
pub use state::GamePhase;
pub use tick::run_simulation_tick;
