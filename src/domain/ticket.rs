use crate::domain::summary::IssueSummary;

/// A Jira project / issue-type pair bound to one HTTP endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueRoute {
    pub project_id: &'static str,
    pub issue_type_id: &'static str,
}

impl IssueRoute {
    pub const MOBILE: Self = Self {
        project_id: "10012",
        issue_type_id: "10002",
    };
    pub const BACKEND: Self = Self {
        project_id: "10013",
        issue_type_id: "10002",
    };
    pub const INFRA: Self = Self {
        project_id: "10014",
        issue_type_id: "10002",
    };
    pub const TEST: Self = Self {
        project_id: "10002",
        issue_type_id: "10008",
    };
}

/// The in-memory ticket payload, built once per request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub project_id: String,
    pub issue_type_id: String,
}

impl TicketDraft {
    pub fn new(summary: IssueSummary, route: IssueRoute) -> Self {
        Self {
            title: summary.title,
            description: summary.description,
            project_id: route.project_id.to_string(),
            issue_type_id: route.issue_type_id.to_string(),
        }
    }
}

/// The ticketing API's answer, passed through verbatim.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub status: u16,
    pub body: String,
}
