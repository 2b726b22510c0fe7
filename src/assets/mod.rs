//! Named-asset loading for shader sources.

use std::fs;
use std::path::PathBuf;

/// Errors that can occur while loading assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),
    #[error("Asset {name} is not valid UTF-8")]
    NotUtf8 { name: String },
    #[error("IO error reading {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Platform asset container: open a named asset, get its full contents.
pub trait AssetSource {
    fn load(&self, name: &str) -> Result<Vec<u8>, AssetError>;

    fn load_utf8(&self, name: &str) -> Result<String, AssetError> {
        let bytes = self.load(name)?;
        String::from_utf8(bytes).map_err(|_| AssetError::NotUtf8 {
            name: name.to_string(),
        })
    }
}

/// Assets read from a directory on disk.
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirAssets {
    fn load(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.root.join(name);
        if !path.is_file() {
            return Err(AssetError::NotFound(name.to_string()));
        }
        fs::read(&path).map_err(|source| AssetError::Io {
            name: name.to_string(),
            source,
        })
    }
}
