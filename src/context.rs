use std::sync::Arc;

use crate::config::AppConfig;
use crate::dispatch::BackgroundDispatcher;
use crate::services::{IssueTrackerService, LanguageModelService};

/// Immutable per-process state handed to every request handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub language_model: Arc<dyn LanguageModelService>,
    pub issue_tracker: Arc<dyn IssueTrackerService>,
    pub dispatcher: BackgroundDispatcher,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        language_model: Arc<dyn LanguageModelService>,
        issue_tracker: Arc<dyn IssueTrackerService>,
    ) -> Self {
        let dispatcher = BackgroundDispatcher::new(config.max_background_tasks);
        Self {
            config,
            language_model,
            issue_tracker,
            dispatcher,
        }
    }
}
