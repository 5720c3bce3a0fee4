//! Run settings
//!
//! Every field has a fixed default so that a bare run reads `keep.xlsx` from the working
//! directory and writes `adjectivalness_analysis.xlsx` next to it.
use std::path::PathBuf;
use crate::count::{Criteria, FirstToken, NOUN_TAG};
use crate::errors::*;
use crate::nltk;

pub const DEFAULT_INPUT: &str = "keep.xlsx";
pub const DEFAULT_COLUMN: &str = "ing_form";
pub const DEFAULT_OUTPUT: &str = "adjectivalness_analysis.xlsx";

#[derive(Debug, Clone)]
pub struct Config {
    /// Spreadsheet holding the candidate words
    pub input: PathBuf,
    /// Header of the column with the candidate words
    pub column: String,
    /// Where the report goes; overwritten
    pub output: PathBuf,
    /// Brown corpus directory, or NLTK's default location when unset
    pub corpus_dir: Option<PathBuf>,
    pub allow_download: bool,
    pub criteria: Criteria,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            column: DEFAULT_COLUMN.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            corpus_dir: None,
            allow_download: true,
            criteria: Criteria {
                noun_tag: NOUN_TAG.to_string(),
                first_token: FirstToken::Ignored,
            },
        }
    }
}

impl Config {
    pub fn brown_dir(&self) -> Result<PathBuf> {
        match self.corpus_dir {
            Some(ref dir) => Ok(dir.clone()),
            None => nltk::default_brown_dir(),
        }
    }
}
