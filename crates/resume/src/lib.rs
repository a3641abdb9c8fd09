mod de;
mod model;

use std::{io::ErrorKind, path::Path};

use thiserror::Error;

pub use model::*;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("unable to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid resume data in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

pub fn from_json(json: &str) -> Result<ResumeData, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads the resume record from disk.
///
/// A missing file yields an empty record so the site still renders; any other
/// read or parse failure is an error.
pub async fn load(path: impl AsRef<Path>) -> Result<ResumeData, ResumeError> {
    let path = path.as_ref();
    let path_display = path.display().to_string();

    let json = match tokio::fs::read_to_string(path).await {
        Ok(json) => json,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path_display, "Resume data not found, rendering empty pages");
            return Ok(ResumeData::default());
        }
        Err(source) => {
            return Err(ResumeError::Io {
                path: path_display,
                source,
            });
        }
    };

    let data = from_json(&json).map_err(|source| ResumeError::Parse {
        path: path_display.clone(),
        source,
    })?;

    tracing::info!(
        path = %path_display,
        projects = data.projects.len(),
        experience = data.experience.len(),
        "Resume data loaded"
    );

    Ok(data)
}
