use std::path::PathBuf;

/// Failures while reading or writing the inventory file.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("No save file available.")]
    NotFound { path: PathBuf },

    #[error("No data in file to load.")]
    Empty { path: PathBuf },

    #[error("Unable to load from file.")]
    Corrupt { path: PathBuf, reason: String },

    #[error("Unable to read the save file.")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The save attempt was not successful.")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
