use crate::context::AppContext;
use crate::domain::ticket::{IssueRoute, SubmissionReceipt, TicketDraft};
use crate::error::AppResult;

/// The full request pipeline: summarize the raw text, normalize the
/// completion into a title and description, compose the draft for the
/// endpoint's project and issue type, and submit it.
pub async fn process_issue(
    ctx: &AppContext,
    text: &str,
    route: IssueRoute,
) -> AppResult<SubmissionReceipt> {
    let completion = ctx.language_model.summarize(text).await?;
    let summary = ctx.config.summary_format.normalize(&completion);
    let draft = TicketDraft::new(summary, route);

    tracing::debug!(
        project_id = %draft.project_id,
        issue_type_id = %draft.issue_type_id,
        title = %draft.title,
        "submitting ticket draft"
    );

    ctx.issue_tracker.create_issue(&draft).await
}
