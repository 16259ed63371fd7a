use std::path::PathBuf;

use thiserror::Error;

/// Failures that prevent a game from ever being started.
///
/// Once a dictionary is loaded every engine operation is total, so this is the
/// only error type the library exposes.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to read dictionary at {}: {source}", path.display())]
    DictionaryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dictionary at {} contains no words", path.display())]
    DictionaryEmpty { path: PathBuf },
}
