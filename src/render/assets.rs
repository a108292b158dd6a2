//! Asset resolution with deterministic placeholders
//!
//! Sprites are looked up by logical name (`player`, `enemy`, `food`, ...).
//! Anything that fails to load is replaced by a solid block whose colour
//! depends only on the entity category, so a missing or broken asset
//! directory never stops the game.

use ahash::AHashMap;
use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::error::Result;
use crate::entity::EntityKind;
use crate::render::colors::{placeholder_color, Color};

/// Edge length of a placeholder block
pub const PLACEHOLDER_SIZE: u32 = 30;
/// Edge length of a projectile block (projectiles never have a sprite)
pub const PROJECTILE_SIZE: u32 = 5;

/// What the presenter should draw for an entity
#[derive(Debug, Clone)]
pub enum Visual {
    /// Decoded sprite, already scaled
    Sprite(Arc<RgbaImage>),
    /// Solid block
    Placeholder { color: Color, width: u32, height: u32 },
}

impl Visual {
    /// The deterministic stand-in for `kind`
    pub fn placeholder(kind: EntityKind) -> Self {
        let edge = match kind {
            EntityKind::Projectile => PROJECTILE_SIZE,
            _ => PLACEHOLDER_SIZE,
        };
        Visual::Placeholder {
            color: placeholder_color(kind),
            width: edge,
            height: edge,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        match self {
            Visual::Sprite(image) => image.dimensions(),
            Visual::Placeholder { width, height, .. } => (*width, *height),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Visual::Placeholder { .. })
    }

    /// Rasterize to RGBA pixels
    pub fn to_image(&self) -> RgbaImage {
        match self {
            Visual::Sprite(image) => image.as_ref().clone(),
            Visual::Placeholder {
                color,
                width,
                height,
            } => RgbaImage::from_pixel(*width, *height, Rgba(color.to_rgba8())),
        }
    }
}

/// Resolves logical asset names for the presentation and audio layers
pub trait AssetResolver {
    /// Sprite for `name`; must fall back to a placeholder rather than fail
    fn visual(&mut self, name: &str, kind: EntityKind) -> Visual;

    /// Path to a playable sound, if one exists
    fn sound(&mut self, name: &str) -> Option<PathBuf>;
}

/// Resolver that never touches the filesystem
#[derive(Debug, Default)]
pub struct PlaceholderAssets;

impl AssetResolver for PlaceholderAssets {
    fn visual(&mut self, _name: &str, kind: EntityKind) -> Visual {
        Visual::placeholder(kind)
    }

    fn sound(&mut self, _name: &str) -> Option<PathBuf> {
        None
    }
}

/// Sprite scale applied after loading, per logical name
pub fn sprite_scale(name: &str) -> f32 {
    match name {
        "player" => 0.5,
        "enemy" => 0.4,
        "food" | "water" | "wood" => 0.3,
        _ => 1.0,
    }
}

/// Loads `<root>/<name>.png` sprites and `<root>/<name>.wav` sounds
pub struct DirectoryAssets {
    root: PathBuf,
    visuals: AHashMap<String, Visual>,
    sounds: AHashMap<String, Option<PathBuf>>,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            visuals: AHashMap::new(),
            sounds: AHashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load(&self, name: &str) -> Result<Visual> {
        let path = self.root.join(format!("{}.png", name));
        let image = image::open(&path)?.to_rgba8();
        let scale = sprite_scale(name);
        let image = if (scale - 1.0).abs() > f32::EPSILON {
            let width = ((image.width() as f32 * scale) as u32).max(1);
            let height = ((image.height() as f32 * scale) as u32).max(1);
            image::imageops::resize(&image, width, height, FilterType::Triangle)
        } else {
            image
        };
        Ok(Visual::Sprite(Arc::new(image)))
    }
}

impl AssetResolver for DirectoryAssets {
    fn visual(&mut self, name: &str, kind: EntityKind) -> Visual {
        if kind == EntityKind::Projectile {
            return Visual::placeholder(kind);
        }
        if let Some(cached) = self.visuals.get(name) {
            return cached.clone();
        }

        let visual = match self.load(name) {
            Ok(visual) => visual,
            Err(e) => {
                tracing::warn!("Using placeholder for sprite '{}': {}", name, e);
                Visual::placeholder(kind)
            }
        };
        self.visuals.insert(name.to_string(), visual.clone());
        visual
    }

    fn sound(&mut self, name: &str) -> Option<PathBuf> {
        if let Some(cached) = self.sounds.get(name) {
            return cached.clone();
        }
        let path = self.root.join(format!("{}.wav", name));
        let found = path.is_file().then_some(path);
        if found.is_none() {
            tracing::debug!("No sound file for '{}'", name);
        }
        self.sounds.insert(name.to_string(), found.clone());
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_falls_back_to_placeholders() {
        let mut assets = DirectoryAssets::new("/definitely/not/here");
        let player = assets.visual("player", EntityKind::Player);
        assert!(player.is_placeholder());
        assert_eq!(player.size(), (30, 30));
        assert_eq!(player.to_image().get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert!(assets.sound("collect").is_none());
    }

    #[test]
    fn test_loads_and_scales_sprite() {
        let dir = tempfile::tempdir().unwrap();
        RgbaImage::from_pixel(40, 20, Rgba([9, 8, 7, 255]))
            .save(dir.path().join("player.png"))
            .unwrap();

        let mut assets = DirectoryAssets::new(dir.path());
        let visual = assets.visual("player", EntityKind::Player);
        assert!(!visual.is_placeholder());
        assert_eq!(visual.size(), (20, 10));
    }

    #[test]
    fn test_corrupt_sprite_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("enemy.png"), b"not a png").unwrap();
        let mut assets = DirectoryAssets::new(dir.path());
        let visual = assets.visual("enemy", EntityKind::Hostile);
        assert!(visual.is_placeholder());
        assert_eq!(visual.to_image().get_pixel(5, 5).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_projectiles_are_always_yellow_blocks() {
        let mut assets = PlaceholderAssets;
        let visual = assets.visual("bullet", EntityKind::Projectile);
        assert_eq!(visual.size(), (5, 5));
        assert_eq!(visual.to_image().get_pixel(0, 0).0, [255, 255, 0, 255]);
    }

    #[test]
    fn test_finds_sound_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("collect.wav"), b"RIFF").unwrap();
        let mut assets = DirectoryAssets::new(dir.path());
        assert_eq!(
            assets.sound("collect"),
            Some(dir.path().join("collect.wav"))
        );
        assert!(assets.sound("enemy_hit").is_none());
    }
}
