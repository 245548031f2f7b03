//! Errors raised while reading or writing the compose file

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnnotateError {
    /// The target file is missing, unreadable, or unwritable
    #[error("cannot access {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The target file is not valid UTF-8
    #[error("{} is not valid UTF-8", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}
