use serde::{Deserialize, Serialize};

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Shown before each command when stdin is a terminal
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            prompt: default_prompt(),
        }
    }
}

fn default_prompt() -> String {
    "tl> ".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub json: bool,
    /// Name column width in listings
    #[serde(default = "default_name_width")]
    pub name_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            json: false,
            name_width: default_name_width(),
        }
    }
}

fn default_name_width() -> usize {
    40
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub mode: SearchMode,
}

/// Which search contract `search` uses when `--all` is not given
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Exact, case-insensitive match on name or due date; first hit only
    #[default]
    First,
    /// Case-insensitive substring match on name or due date; every hit
    All,
}
