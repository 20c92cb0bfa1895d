//! Configuration Module
//! JSON configuration for sources, row limits and reference data.

use crate::analysis::Pipeline;
use crate::nlp::{StemRuleset, StopwordSet};
use crate::sentiment::{Lexicon, LexiconError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "sentiscope.json";

/// Rows read per source unless configured otherwise.
pub const DEFAULT_MAX_ROWS: usize = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unknown schema preset '{0}'")]
    UnknownPreset(String),
}

/// Column layouts of well-known tweet datasets that ship without a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaPreset {
    Sentiment140,
    Covid19Tweets,
    TwitterEntity,
}

impl SchemaPreset {
    pub const ALL: [SchemaPreset; 3] = [
        SchemaPreset::Sentiment140,
        SchemaPreset::Covid19Tweets,
        SchemaPreset::TwitterEntity,
    ];

    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            SchemaPreset::Sentiment140 => &["target", "ids", "date", "flag", "user", "text"],
            SchemaPreset::Covid19Tweets => &[
                "user_name",
                "user_location",
                "user_description",
                "user_created",
                "user_followers",
                "user_friends",
                "user_favourites",
                "user_verified",
                "date",
                "text",
                "hashtags",
                "source",
                "is_retweet",
            ],
            SchemaPreset::TwitterEntity => &["id", "platform", "text"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaPreset::Sentiment140 => "sentiment140",
            SchemaPreset::Covid19Tweets => "covid19_tweets",
            SchemaPreset::TwitterEntity => "twitter_entity",
        }
    }
}

impl fmt::Display for SchemaPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

fn default_text_column() -> String {
    "text".to_string()
}

/// One CSV source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: PathBuf,
    /// Known header-less layout; ignored when `columns` is set.
    #[serde(default)]
    pub preset: Option<SchemaPreset>,
    /// Explicit column names for a header-less file.
    #[serde(default)]
    pub columns: Option<Vec<String>>,
    #[serde(default = "default_text_column")]
    pub text_column: String,
}

impl SourceConfig {
    /// A source whose first row is a header.
    pub fn with_header(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            preset: None,
            columns: None,
            text_column: default_text_column(),
        }
    }

    pub fn with_preset(path: impl Into<PathBuf>, preset: SchemaPreset) -> Self {
        Self {
            preset: Some(preset),
            ..Self::with_header(path)
        }
    }

    /// Column names to assign, or `None` when the file carries a header row.
    pub fn column_names(&self) -> Option<Vec<String>> {
        self.columns.clone().or_else(|| {
            self.preset
                .map(|p| p.columns().iter().map(|c| c.to_string()).collect())
        })
    }

    /// Display name: the file name.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Options applied while reading every source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub max_rows: Option<usize>,
    pub skip_malformed: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_rows: Some(DEFAULT_MAX_ROWS),
            skip_malformed: false,
        }
    }
}

/// Static chart export size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sources: Vec<SourceConfig>,
    /// `null` reads every row.
    pub max_rows: Option<usize>,
    pub skip_malformed: bool,
    pub extra_stopwords: Vec<String>,
    /// JSON `{"word": weight}` file replacing the built-in lexicon.
    pub lexicon_path: Option<PathBuf>,
    pub chart: ChartConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            max_rows: Some(DEFAULT_MAX_ROWS),
            skip_malformed: false,
            extra_stopwords: Vec::new(),
            lexicon_path: None,
            chart: ChartConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&contents)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `sentiscope.json` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            log::debug!("No {} in {}, using defaults", DEFAULT_CONFIG_FILE, dir.display());
            Ok(Self::default())
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            max_rows: self.max_rows,
            skip_malformed: self.skip_malformed,
        }
    }

    pub fn stopwords(&self) -> StopwordSet {
        StopwordSet::english().with_extra(&self.extra_stopwords)
    }

    pub fn lexicon(&self) -> Result<Lexicon, LexiconError> {
        match &self.lexicon_path {
            Some(path) => Lexicon::from_json_file(path),
            None => Ok(Lexicon::english()),
        }
    }

    /// Build the shared pipeline from this configuration's reference data.
    pub fn build_pipeline(&self) -> Result<Pipeline, LexiconError> {
        let lexicon = self.lexicon()?;
        Ok(Pipeline::new(
            self.stopwords(),
            StemRuleset::porter(),
            &lexicon,
        ))
    }
}
