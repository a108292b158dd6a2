//! Placeholder colours

use serde::{Deserialize, Serialize};

use crate::entity::EntityKind;

/// RGBA color (0.0 to 1.0 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// 8-bit RGBA, for writing pixels
    pub fn to_rgba8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Solid colour used when an entity's sprite can't be loaded
pub fn placeholder_color(kind: EntityKind) -> Color {
    match kind {
        EntityKind::Player => BLUE,
        EntityKind::Hostile => RED,
        EntityKind::Resource => GREEN,
        EntityKind::Projectile => YELLOW,
    }
}
