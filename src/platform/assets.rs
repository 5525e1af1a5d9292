//! Image asset lookup
//!
//! Images are optional decoration. A missing file becomes a placeholder and
//! the game carries on.

use std::path::{Path, PathBuf};

use crate::consts::{CHARACTER_COUNT, THUMBNAIL_SIZE};
use crate::error::{GameError, Result};

/// A resolved image slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    /// File found; drawn scaled to `size`×`size`
    Image { path: PathBuf, size: u32 },
    /// Nothing to draw; front ends show a plain shape
    Placeholder,
}

impl Asset {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Asset::Placeholder)
    }
}

static PLACEHOLDER: Asset = Asset::Placeholder;

/// Probe one image file
pub fn try_load_asset(path: &Path) -> Result<Asset> {
    if !path.is_file() {
        return Err(GameError::AssetMissing(path.to_path_buf()));
    }
    Ok(Asset::Image {
        path: path.to_path_buf(),
        size: THUMBNAIL_SIZE,
    })
}

fn load_or_placeholder(path: &Path) -> Asset {
    try_load_asset(path).unwrap_or_else(|e| {
        log::debug!("{}, using placeholder", e);
        Asset::Placeholder
    })
}

/// Every image the game knows about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCatalog {
    pub cover: Asset,
    /// Character portraits, index 0 is character 1
    pub characters: Vec<Asset>,
    pub path: Asset,
}

impl AssetCatalog {
    /// Look for `cover.png`, `character1..5.png` and `path.png` in `dir`
    pub fn load(dir: &Path) -> Self {
        let catalog = Self {
            cover: load_or_placeholder(&dir.join("cover.png")),
            characters: (1..=CHARACTER_COUNT)
                .map(|id| load_or_placeholder(&dir.join(format!("character{}.png", id))))
                .collect(),
            path: load_or_placeholder(&dir.join("path.png")),
        };
        log::info!(
            "Assets: {} of {} images found in {}",
            catalog.found(),
            CHARACTER_COUNT as usize + 2,
            dir.display()
        );
        catalog
    }

    /// Catalog with nothing loaded
    pub fn placeholders() -> Self {
        Self {
            cover: Asset::Placeholder,
            characters: vec![Asset::Placeholder; CHARACTER_COUNT as usize],
            path: Asset::Placeholder,
        }
    }

    /// Portrait for character `id` (1-based)
    pub fn character(&self, id: u8) -> &Asset {
        (id as usize)
            .checked_sub(1)
            .and_then(|i| self.characters.get(i))
            .unwrap_or(&PLACEHOLDER)
    }

    fn found(&self) -> usize {
        std::iter::once(&self.cover)
            .chain(self.characters.iter())
            .chain(std::iter::once(&self.path))
            .filter(|a| !a.is_placeholder())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_assets_become_placeholders() {
        let dir = tempdir().unwrap();
        let catalog = AssetCatalog::load(dir.path());
        assert_eq!(catalog, AssetCatalog::placeholders());
        assert!(matches!(
            try_load_asset(&dir.path().join("cover.png")),
            Err(GameError::AssetMissing(_))
        ));
    }

    #[test]
    fn test_present_assets_are_found() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("cover.png"), b"png").unwrap();
        fs::write(dir.path().join("character3.png"), b"png").unwrap();

        let catalog = AssetCatalog::load(dir.path());
        assert_eq!(
            catalog.cover,
            Asset::Image {
                path: dir.path().join("cover.png"),
                size: THUMBNAIL_SIZE
            }
        );
        assert!(!catalog.character(3).is_placeholder());
        assert!(catalog.character(1).is_placeholder());
        assert!(catalog.path.is_placeholder());
        assert_eq!(catalog.found(), 2);
    }

    #[test]
    fn test_character_out_of_range() {
        let catalog = AssetCatalog::placeholders();
        assert!(catalog.character(0).is_placeholder());
        assert!(catalog.character(42).is_placeholder());
    }
}
