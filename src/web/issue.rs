use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use crate::config::DispatchMode;
use crate::context::AppContext;
use crate::domain::ticket::IssueRoute;
use crate::error::AppError;
use crate::workflow::issue::process_issue;

/// Fixed acknowledgment returned by the asynchronous mode.
pub const ASYNC_ACK_MESSAGE: &str = "Issue received; ticket creation scheduled";

#[derive(Deserialize)]
pub struct IssueRequest {
    text: Option<String>,
}

pub async fn issue_mobile(
    State(ctx): State<AppContext>,
    Json(payload): Json<IssueRequest>,
) -> Result<Response, AppError> {
    handle_issue(ctx, "/issue-mobile", IssueRoute::MOBILE, payload).await
}

pub async fn issue_backend(
    State(ctx): State<AppContext>,
    Json(payload): Json<IssueRequest>,
) -> Result<Response, AppError> {
    handle_issue(ctx, "/issue-backend", IssueRoute::BACKEND, payload).await
}

pub async fn issue_infra(
    State(ctx): State<AppContext>,
    Json(payload): Json<IssueRequest>,
) -> Result<Response, AppError> {
    handle_issue(ctx, "/issue-infra", IssueRoute::INFRA, payload).await
}

pub async fn issue_test(
    State(ctx): State<AppContext>,
    Json(payload): Json<IssueRequest>,
) -> Result<Response, AppError> {
    handle_issue(ctx, "/issue-test", IssueRoute::TEST, payload).await
}

async fn handle_issue(
    ctx: AppContext,
    endpoint: &'static str,
    route: IssueRoute,
    payload: IssueRequest,
) -> Result<Response, AppError> {
    let Some(text) = payload.text else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No text provided" })),
        )
            .into_response());
    };

    match ctx.config.dispatch_mode {
        DispatchMode::Sync => {
            let receipt = process_issue(&ctx, &text, route).await?;
            tracing::info!(endpoint, status = receipt.status, "ticket filed");
            Ok(Json(json!({ "response": receipt.body })).into_response())
        }
        DispatchMode::Async => {
            let pipeline_ctx = ctx.clone();
            ctx.dispatcher.spawn(endpoint, async move {
                process_issue(&pipeline_ctx, &text, route).await
            });
            Ok(Json(json!({ "message": ASYNC_ACK_MESSAGE })).into_response())
        }
    }
}
