pub mod claude;
pub mod jira;
