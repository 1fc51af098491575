use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::{config::DF, models::FavoriteSet};

/// Somewhere the favorites array can be read once and overwritten wholesale.
pub trait FavoritesStore {
    fn load(&self) -> Result<FavoriteSet>;
    fn save(&mut self, favorites: &FavoriteSet) -> Result<()>;
}

/// Favorites kept as a JSON array in a plain file. A missing file means no favorites yet.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FavoritesStore for JsonFileStore {
    fn load(&self) -> Result<FavoriteSet> {
        if !self.path.exists() {
            return Ok(FavoriteSet::new());
        }
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read favorites from {:?}", self.path))?;
        let favorites = FavoriteSet::from_json(&json)
            .with_context(|| format!("Failed to parse favorites in {:?}", self.path))?;
        if DF.log_favorites {
            log::info!("Loaded {} favorites from {:?}", favorites.len(), self.path);
        }
        Ok(favorites)
    }

    fn save(&mut self, favorites: &FavoriteSet) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {:?}", parent))?;
            }
        }
        fs::write(&self.path, favorites.to_json()?)
            .with_context(|| format!("Failed to write favorites to {:?}", self.path))?;
        if DF.log_favorites {
            log::info!("Saved {} favorites to {:?}", favorites.len(), self.path);
        }
        Ok(())
    }
}

/// Favorites from the desktop app's key-value storage. Unreadable data starts fresh.
pub fn load_from_storage(storage: &dyn eframe::Storage, key: &str) -> FavoriteSet {
    let Some(json) = storage.get_string(key) else {
        return FavoriteSet::new();
    };
    FavoriteSet::from_json(&json).unwrap_or_else(|e| {
        log::error!("Discarding stored favorites (starting fresh): {:#}", e);
        FavoriteSet::new()
    })
}

/// Overwrite the stored favorites and flush straight away.
pub fn save_to_storage(storage: &mut dyn eframe::Storage, key: &str, favorites: &FavoriteSet) -> Result<()> {
    storage.set_string(key, favorites.to_json()?);
    storage.flush();
    if DF.log_favorites {
        log::info!("Persisted {} favorites", favorites.len());
    }
    Ok(())
}
