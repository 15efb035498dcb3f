//! Setup-time error types.

use std::path::PathBuf;

use disunity_component::EntityError;

/// Errors raised while loading or applying a level description.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    /// The level file could not be read.
    #[error("failed to read level {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The level file is not a valid level description.
    #[error("failed to parse level: {0}")]
    Parse(#[from] serde_json::Error),

    /// A sprite names an asset the level does not declare.
    #[error("entity #{index} references unknown asset `{asset_id}`")]
    UnknownAsset { index: usize, asset_id: String },

    /// Two texture entries share an asset id.
    #[error("texture `{0}` is declared more than once")]
    DuplicateTexture(String),

    /// Component data was attached to an entity that is not alive.
    #[error(transparent)]
    Entity(#[from] EntityError),
}
