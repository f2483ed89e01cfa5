use async_trait::async_trait;
use base64::prelude::{BASE64_STANDARD, Engine as _};
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::Serialize;

use crate::domain::ticket::{SubmissionReceipt, TicketDraft};
use crate::error::{AppError, AppResult};
use crate::services::IssueTrackerService;

pub struct JiraClient {
    http: Client,
    base_url: String,
    user: String,
    token: String,
}

impl JiraClient {
    pub fn new(base_url: String, user: String, token: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            user,
            token,
        }
    }

    fn auth_header(&self) -> String {
        let credentials = format!("{}:{}", self.user, self.token);
        let encoded = BASE64_STANDARD.encode(credentials);
        format!("Basic {encoded}")
    }

    fn issue_endpoint(&self) -> String {
        format!("{}/rest/api/2/issue", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl IssueTrackerService for JiraClient {
    async fn create_issue(&self, draft: &TicketDraft) -> AppResult<SubmissionReceipt> {
        let response = self
            .http
            .post(self.issue_endpoint())
            .header(AUTHORIZATION, self.auth_header())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&JiraCreateIssueRequest::from_draft(draft))
            .send()
            .await
            .map_err(|err| AppError::IssueTracker(format!("failed to call Jira: {err}")))?;

        // The caller gets the tracker's answer as-is, including rejections.
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| AppError::IssueTracker(format!("failed to read Jira response: {err}")))?;

        Ok(SubmissionReceipt { status, body })
    }
}

#[derive(Serialize)]
struct JiraCreateIssueRequest {
    fields: JiraCreateIssueFields,
}

impl JiraCreateIssueRequest {
    fn from_draft(draft: &TicketDraft) -> Self {
        Self {
            fields: JiraCreateIssueFields {
                summary: draft.title.clone(),
                description: draft.description.clone(),
                project: JiraId {
                    id: draft.project_id.clone(),
                },
                issuetype: JiraId {
                    id: draft.issue_type_id.clone(),
                },
            },
        }
    }
}

#[derive(Serialize)]
struct JiraCreateIssueFields {
    summary: String,
    description: String,
    project: JiraId,
    issuetype: JiraId,
}

#[derive(Serialize)]
struct JiraId {
    id: String,
}
