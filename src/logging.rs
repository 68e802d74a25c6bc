//! Logger setup
//!
//! `-v` raises the default level; `RUST_LOG` overrides it.

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("cannot open log file {}: {}", .path.display(), .source)]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logger already installed: {0}")]
    Install(#[from] log::SetLoggerError),
}

/// Default level for a `-v` count
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Install the global logger
///
/// With `log_file`, records are appended there instead of stderr.
///
/// # Errors
///
/// Returns `LoggingError` if the log file cannot be opened or a logger is
/// already installed.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<(), LoggingError> {
    let mut builder = Builder::new();
    builder.filter_level(level_for(verbosity)).parse_default_env();

    if let Some(path) = log_file {
        let file = open_log(path).map_err(|source| LoggingError::File {
            path: path.to_path_buf(),
            source,
        })?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    Ok(())
}

fn open_log(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
