use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("Source image not found at {}", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Failed to decode source image {}", .path.display())]
    SourceDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Can't create directory {}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't remove stale icon {}", .path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to generate icons for {folder}")]
    ResizeOrWrite {
        folder: String,
        #[source]
        source: image::ImageError,
    },
}

impl IconError {
    /// Folder preparation failures, the ones governed by `FailurePolicy`.
    pub fn is_setup_failure(&self) -> bool {
        matches!(
            self,
            IconError::DirectoryCreate { .. } | IconError::Cleanup { .. }
        )
    }
}
