//! Runtime configuration resolved from the command line

use crate::wordlists::WordBank;
use crate::wordlists::loader::load_from_file;
use std::io;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "wordle_daily";
const STATE_FILE: &str = "state.json";
const LOG_FILE: &str = "wordle_daily.log";

/// Which words count as valid guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dictionary {
    /// The full embedded allowed list
    All,
    /// Only words from the answer pool
    AnswersOnly,
    /// A newline-delimited file
    File(PathBuf),
    /// Any 5 letters
    Off,
}

impl Dictionary {
    /// Interpret the `-w` argument: `all`, `answers`, or a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "all" => Self::All,
            "answers" => Self::AnswersOnly,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub state_path: PathBuf,
    pub dictionary: Dictionary,
}

impl Config {
    #[must_use]
    pub fn new(state_path: Option<PathBuf>, dictionary: Dictionary) -> Self {
        Self {
            state_path: state_path.unwrap_or_else(default_state_path),
            dictionary,
        }
    }

    /// Log file used while the terminal UI owns the screen
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.state_path.with_file_name(LOG_FILE)
    }

    /// Build the word source for this configuration
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a dictionary file cannot be read.
    pub fn word_bank(&self) -> io::Result<WordBank> {
        let bank = WordBank::embedded();
        Ok(match &self.dictionary {
            Dictionary::All => bank,
            Dictionary::AnswersOnly => bank.with_dictionary(Vec::new()),
            Dictionary::File(path) => bank.with_dictionary(load_from_file(path)?),
            Dictionary::Off => bank.without_dictionary(),
        })
    }
}

/// `<data dir>/wordle_daily/state.json`, or the current directory when the
/// platform has no data dir
#[must_use]
pub fn default_state_path() -> PathBuf {
    dirs::data_dir()
        .map_or_else(|| Path::new(".").to_path_buf(), |dir| dir.join(APP_DIR))
        .join(STATE_FILE)
}
