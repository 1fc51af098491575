//! Persistence locations and keys

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state
    pub state_path: &'static str,
}

/// Where the favorites snapshots live
pub struct FavoritesPersistenceConfig {
    /// Key under which the desktop app stores the JSON array
    pub storage_key: &'static str,
    /// Default file used by the command-line table
    pub file_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub app: AppPersistenceConfig,
    pub favorites: FavoritesPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app: AppPersistenceConfig {
        state_path: ".states.json",
    },
    favorites: FavoritesPersistenceConfig {
        storage_key: "favorites",
        file_path: "favorites.json",
    },
};
