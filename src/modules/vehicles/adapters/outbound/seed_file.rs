// Startup seed for the vehicle store.
//
// The file is read once; any failure here is fatal to startup.

use crate::modules::vehicles::core::vehicle::Vehicle;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn parse_seed(path: &Path, bytes: &[u8]) -> Result<Vec<Vehicle>, SeedError> {
    serde_json::from_slice(bytes).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub async fn load_seed(path: impl AsRef<Path>) -> Result<Vec<Vehicle>, SeedError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(path, &bytes)
}
