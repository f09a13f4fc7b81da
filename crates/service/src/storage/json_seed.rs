use std::path::Path;

use serde::de::DeserializeOwned;
use tokio::fs;

use crate::errors::SeedError;

/// Result of seeding a store from its bootstrap file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// File parsed; `count` records seeded.
    Loaded { count: usize },
    /// No file at the configured path; store starts empty.
    Missing,
    /// File unreadable or not a JSON array of records; store starts empty.
    Invalid { reason: String },
}

impl BootstrapOutcome {
    pub fn count(&self) -> usize {
        match self {
            BootstrapOutcome::Loaded { count } => *count,
            _ => 0,
        }
    }
}

/// Read a JSON array of `T` from `path`.
///
/// `Ok(None)` when the file does not exist, `Err(SeedError)` when it exists
/// but cannot be read or decoded. Never creates or writes the file.
pub async fn read_json_array<T, P>(path: P) -> Result<Option<Vec<T>>, SeedError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(SeedError::Read { path: path.display().to_string(), source }),
    };
    let items: Vec<T> = serde_json::from_slice(&bytes)
        .map_err(|source| SeedError::Parse { path: path.display().to_string(), source })?;
    Ok(Some(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_path(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("json_seed_{tag}_{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn missing_file_is_none() -> Result<(), anyhow::Error> {
        let got = read_json_array::<u32, _>(tmp_path("missing")).await?;
        assert!(got.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn reads_array_in_order() -> Result<(), anyhow::Error> {
        let tmp = tmp_path("ok");
        tokio::fs::write(&tmp, b"[3, 1, 2]").await?;
        let got = read_json_array::<u32, _>(&tmp).await?;
        assert_eq!(got, Some(vec![3, 1, 2]));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn garbage_is_parse_error() -> Result<(), anyhow::Error> {
        let tmp = tmp_path("bad");
        tokio::fs::write(&tmp, b"{\"not\": \"an array\"}").await?;
        let got = read_json_array::<u32, _>(&tmp).await;
        assert!(matches!(got, Err(SeedError::Parse { .. })));
        // the file is left untouched
        assert_eq!(tokio::fs::read(&tmp).await?, b"{\"not\": \"an array\"}");
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
