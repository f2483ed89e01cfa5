pub mod issue;

use axum::Router;
use axum::routing::{get, post};

use crate::context::AppContext;

const BANNER: &str = "jissue gateway is up. POST {\"text\": \"...\"} to \
/issue-mobile, /issue-backend, /issue-infra or /issue-test to file a ticket.\n";

pub fn build_router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/issue-mobile", post(issue::issue_mobile))
        .route("/issue-backend", post(issue::issue_backend))
        .route("/issue-infra", post(issue::issue_infra))
        .route("/issue-test", post(issue::issue_test))
        .with_state(ctx)
}

async fn banner() -> &'static str {
    BANNER
}
