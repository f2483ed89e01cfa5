use async_trait::async_trait;

use crate::domain::ticket::{SubmissionReceipt, TicketDraft};
use crate::error::AppResult;

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    /// Submits the draft and returns the tracker's response verbatim.
    /// Non-2xx statuses are part of the receipt, not errors; only transport
    /// failures are.
    async fn create_issue(&self, draft: &TicketDraft) -> AppResult<SubmissionReceipt>;
}
