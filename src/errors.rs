/*!
 * Error types for the docinject library.
 *
 * Only genuine failures live here. A missing locale directory, a document
 * without a presentation page, or a page without a marker block are normal
 * outcomes and are reported through the injector's outcome types instead.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an injection run
#[derive(Error, Debug)]
pub enum InjectError {
    /// A file that passed the existence check could not be read
    #[error("Failed to read file {path:?}: {source}")]
    Read {
        /// Path of the file being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A presentation file could not be written back
    #[error("Failed to write file {path:?}: {source}")]
    Write {
        /// Path of the file being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A documentation directory could not be listed
    #[error("Failed to list directory {path:?}: {message}")]
    ListDir {
        /// Directory being listed
        path: PathBuf,
        /// Error message from the directory walker
        message: String,
    },

    /// The marker id cannot form a valid opening tag
    #[error("Invalid marker id '{id}': {reason}")]
    InvalidMarker {
        /// The rejected id
        id: String,
        /// Why it was rejected
        reason: String,
    },
}
