use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{LineLabels, TagFilter};
use crate::error::Result;

/// Name of the project-local configuration file
pub const CONFIG_FILE_NAME: &str = "changelog.toml";

/// Represents the complete configuration for changelog generation.
///
/// Every option that influences rendering is a named field; unknown keys in a
/// configuration file are rejected when it is loaded.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Repository owner, used to build the project URL
    pub user: String,
    pub project: String,
    pub github_site: String,

    /// Text placed verbatim before the header
    pub frontmatter: Option<String>,
    pub header: String,
    /// File whose contents are appended verbatim after the generated sections
    pub base: Option<PathBuf>,

    pub unreleased: bool,
    pub unreleased_only: bool,
    pub unreleased_label: String,
    /// Name given to the unreleased section when the next tag is already known
    pub future_release: Option<String>,
    pub since_tag: Option<String>,
    pub due_tag: Option<String>,
    pub exclude_tags: Vec<String>,
    pub exclude_tags_regex: Option<String>,

    pub issues: bool,
    pub pulls: bool,
    pub issue_prefix: String,
    pub merge_prefix: String,
    pub simple_list: bool,

    pub compare_link: bool,
    /// printf-style template taking the tag link once (e.g. `https://example.com/r/%s`)
    pub release_url: Option<String>,
    /// strftime-style pattern for release dates
    pub date_format: String,

    pub filter_issues_by_milestone: bool,
    pub issue_line_labels: LineLabels,
    pub author: bool,
    pub usernames_as_github_logins: bool,

    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            user: String::new(),
            project: String::new(),
            github_site: "https://github.com".to_string(),
            frontmatter: None,
            header: "# Changelog".to_string(),
            base: None,
            unreleased: true,
            unreleased_only: false,
            unreleased_label: "Unreleased".to_string(),
            future_release: None,
            since_tag: None,
            due_tag: None,
            exclude_tags: Vec::new(),
            exclude_tags_regex: None,
            issues: true,
            pulls: true,
            issue_prefix: "**Closed issues:**".to_string(),
            merge_prefix: "**Merged pull requests:**".to_string(),
            simple_list: false,
            compare_link: true,
            release_url: None,
            date_format: "%Y-%m-%d".to_string(),
            filter_issues_by_milestone: true,
            issue_line_labels: LineLabels::None,
            author: true,
            usernames_as_github_logins: false,
            verbose: false,
        }
    }
}

impl Config {
    /// Base URL of the project on the web host, e.g. `https://github.com/owner/repo`
    pub fn project_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.github_site.trim_end_matches('/'),
            self.user,
            self.project
        )
    }

    /// Tag selection rules derived from this configuration
    pub fn tag_filter(&self) -> Result<TagFilter> {
        TagFilter::new(
            self.since_tag.clone(),
            self.due_tag.clone(),
            self.exclude_tags.clone(),
            self.exclude_tags_regex.as_deref(),
        )
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog.toml` in current directory
/// 3. `.changelog.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses configuration from TOML text, filling unspecified fields with defaults
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    Ok(config)
}
