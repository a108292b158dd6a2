//! Survival Arcade - fixed-tick simulation core for a top-down survival shooter
//!
//! The player gathers food, water and wood, shoots pursuing hostiles and must
//! keep hunger, thirst, energy and health above zero. Everything here is
//! frontend-agnostic: input comes in as a [`simulation::PlayerInput`]
//! snapshot, a frame is advanced with [`simulation::run_simulation_tick`] and
//! [`render::snapshot`] hands back what to draw.

pub mod audio;
pub mod core;
pub mod ecs;
pub mod entity;
pub mod render;
pub mod simulation;
pub mod spatial;
