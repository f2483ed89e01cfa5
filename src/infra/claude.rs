use async_trait::async_trait;
use reqwest::{Client, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::services::LanguageModelService;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_OUTPUT_TOKENS: u32 = 1024;

/// Fixed instruction sent with every summarization request.
pub const SYSTEM_PROMPT: &str = "\
You are an assistant that is part of a team of software developers.
You'll be given a bulk of information and you need to extract the relevant information to create a Jira issue describing it.
You need to reply on a JSON format including 2 keys: 'title' (string) and 'description' (string).
'title' should be a short description of the task.
'description' should contain clear information about the all the context you can gather about that task. Feel free to include links and lists here. Make is as short as possible.
";

pub struct ClaudeClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ClaudeClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    fn messages_endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LanguageModelService for ClaudeClient {
    async fn summarize(&self, text: &str) -> AppResult<String> {
        let request_body = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_OUTPUT_TOKENS,
            system: SYSTEM_PROMPT,
            messages: vec![Message {
                role: "user",
                content: text,
            }],
        };

        let response = self
            .http
            .post(self.messages_endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header(CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|err| AppError::LanguageModel(format!("failed to call Claude: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::LanguageModel(format!(
                "Claude responded with {status}: {body}"
            )));
        }

        let payload: MessagesResponse = response.json().await.map_err(|err| {
            AppError::LanguageModel(format!("failed to parse Claude response: {err}"))
        })?;

        payload
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or_else(|| AppError::LanguageModel("Claude returned no content".to_string()))
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: String,
}
