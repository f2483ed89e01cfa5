use std::env;

use crate::domain::summary::SummaryFormat;
use crate::error::{AppError, AppResult};

const DEFAULT_JIRA_BASE_URL: &str = "https://ridecircuit.atlassian.net";
const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_CLAUDE_MODEL: &str = "claude-3-5-sonnet-20240620";
const DEFAULT_MAX_BACKGROUND_TASKS: usize = 32;

/// Whether an endpoint answers after the pipeline finishes or right away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    #[default]
    Sync,
    Async,
}

impl DispatchMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "sync" => Some(Self::Sync),
            "async" => Some(Self::Async),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub claude_api_key: String,
    pub claude_model: String,
    pub anthropic_base_url: String,
    pub jira_user: String,
    pub jira_api_token: String,
    pub jira_base_url: String,
    pub dispatch_mode: DispatchMode,
    pub summary_format: SummaryFormat,
    pub max_background_tasks: usize,
}

impl AppConfig {
    /// Reads configuration from the environment. Missing credentials fail
    /// here rather than on the first outbound call.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            claude_api_key: require_var("CLAUDE_API_KEY")?,
            claude_model: optional_var("CLAUDE_MODEL")
                .unwrap_or_else(|| DEFAULT_CLAUDE_MODEL.to_string()),
            anthropic_base_url: optional_var("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|| DEFAULT_ANTHROPIC_BASE_URL.to_string()),
            jira_user: require_var("JIRA_USER")?,
            jira_api_token: require_var("JIRA_API_TOKEN")?,
            jira_base_url: optional_var("JIRA_BASE_URL")
                .unwrap_or_else(|| DEFAULT_JIRA_BASE_URL.to_string()),
            dispatch_mode: parse_var("JISSUE_DISPATCH", DispatchMode::parse)?,
            summary_format: parse_var("JISSUE_SUMMARY_FORMAT", SummaryFormat::parse)?,
            max_background_tasks: match optional_var("JISSUE_MAX_BACKGROUND_TASKS") {
                None => DEFAULT_MAX_BACKGROUND_TASKS,
                Some(raw) => raw.trim().parse().ok().filter(|n| *n >= 1).ok_or_else(|| {
                    AppError::Configuration(format!(
                        "invalid value for JISSUE_MAX_BACKGROUND_TASKS: {raw}"
                    ))
                })?,
            },
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            claude_api_key: String::new(),
            claude_model: DEFAULT_CLAUDE_MODEL.to_string(),
            anthropic_base_url: DEFAULT_ANTHROPIC_BASE_URL.to_string(),
            jira_user: String::new(),
            jira_api_token: String::new(),
            jira_base_url: DEFAULT_JIRA_BASE_URL.to_string(),
            dispatch_mode: DispatchMode::default(),
            summary_format: SummaryFormat::default(),
            max_background_tasks: DEFAULT_MAX_BACKGROUND_TASKS,
        }
    }
}

fn require_var(name: &str) -> AppResult<String> {
    optional_var(name).ok_or_else(|| AppError::Configuration(format!("{name} is not set")))
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var<T: Default>(name: &str, parse: impl Fn(&str) -> Option<T>) -> AppResult<T> {
    match optional_var(name) {
        None => Ok(T::default()),
        Some(raw) => parse(&raw)
            .ok_or_else(|| AppError::Configuration(format!("invalid value for {name}: {raw}"))),
    }
}
