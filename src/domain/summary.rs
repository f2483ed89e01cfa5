use serde::Deserialize;

/// Literal tag marking every created ticket as machine-generated.
pub const TITLE_TAG: &str = "[JISSUE]";

/// Title and description extracted from a raw model completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSummary {
    pub title: String,
    pub description: String,
}

/// How a raw completion is turned into an [`IssueSummary`].
///
/// Two upstream prompt contracts exist: one asks the model for a JSON object
/// with `title` and `description` keys, the other for a plain reply whose
/// first line is the title. Both are kept behind this one enum so the
/// dispatcher never branches on the format itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    #[default]
    StructuredJson,
    FirstLine,
}

#[derive(Deserialize)]
struct StructuredCompletion {
    title: String,
    description: String,
}

impl SummaryFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "json" => Some(Self::StructuredJson),
            "first-line" => Some(Self::FirstLine),
            _ => None,
        }
    }

    pub fn normalize(&self, completion: &str) -> IssueSummary {
        match self {
            Self::StructuredJson => normalize_structured(completion),
            Self::FirstLine => normalize_first_line(completion),
        }
    }
}

/// Models occasionally emit raw control characters inside JSON string values,
/// which strict parsers reject. Rewriting them as the `\n` escape sequence
/// keeps the payload parseable without losing the line structure. Only
/// characters inside string literals are touched; whitespace between tokens
/// is already valid JSON.
fn sanitize_control_chars(completion: &str) -> String {
    let mut out = String::with_capacity(completion.len());
    let mut in_string = false;
    let mut escaped = false;
    for ch in completion.chars() {
        if !in_string {
            if ch == '"' {
                in_string = true;
            }
            out.push(ch);
            continue;
        }
        if escaped {
            escaped = false;
            out.push(ch);
            continue;
        }
        match ch {
            '\\' => {
                escaped = true;
                out.push(ch);
            }
            '"' => {
                in_string = false;
                out.push(ch);
            }
            '\u{0000}'..='\u{001f}' | '\u{007f}'..='\u{009f}' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out
}

fn normalize_structured(completion: &str) -> IssueSummary {
    let sanitized = sanitize_control_chars(completion);
    match serde_json::from_str::<StructuredCompletion>(&sanitized) {
        Ok(parsed) => IssueSummary {
            title: format!("{TITLE_TAG} {}", parsed.title),
            description: parsed.description,
        },
        Err(err) => {
            // Lossy on purpose: a malformed completion still files a ticket,
            // with the raw text as its description.
            tracing::warn!("completion is not valid JSON, keeping raw text: {err}");
            IssueSummary {
                title: TITLE_TAG.to_string(),
                description: completion.to_string(),
            }
        }
    }
}

fn normalize_first_line(completion: &str) -> IssueSummary {
    let (first_line, rest) = match completion.split_once('\n') {
        Some((line, rest)) => (line, rest),
        None => (completion, ""),
    };
    IssueSummary {
        title: format!("{TITLE_TAG} {first_line}"),
        description: rest.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_json_takes_both_keys() {
        let summary =
            SummaryFormat::StructuredJson.normalize(r#"{"title":"T","description":"D"}"#);
        assert_eq!(summary.title, "[JISSUE] T");
        assert_eq!(summary.description, "D");
    }

    #[test]
    fn structured_json_falls_back_to_raw_text() {
        let summary = SummaryFormat::StructuredJson.normalize("hello");
        assert_eq!(summary.title, "[JISSUE]");
        assert_eq!(summary.description, "hello");
    }

    #[test]
    fn structured_json_missing_key_falls_back() {
        let raw = r#"{"title":"only a title"}"#;
        let summary = SummaryFormat::StructuredJson.normalize(raw);
        assert_eq!(summary.title, "[JISSUE]");
        assert_eq!(summary.description, raw);
    }

    #[test]
    fn structured_json_tolerates_raw_control_characters() {
        let raw = "{\"title\":\"T\",\"description\":\"line one\u{0001}line two\"}";
        let summary = SummaryFormat::StructuredJson.normalize(raw);
        assert_eq!(summary.title, "[JISSUE] T");
        assert_eq!(summary.description, "line one\nline two");
    }

    #[test]
    fn structured_json_tolerates_raw_newlines_and_del_range_in_strings() {
        let raw = "{\"title\":\"T\",\"description\":\"first\nsecond\u{0085}third\"}";
        let summary = SummaryFormat::StructuredJson.normalize(raw);
        assert_eq!(summary.title, "[JISSUE] T");
        assert_eq!(summary.description, "first\nsecond\nthird");
    }

    #[test]
    fn structured_json_leaves_whitespace_between_tokens_alone() {
        let raw = "{\n  \"title\": \"T\",\n  \"description\": \"D\"\n}";
        let summary = SummaryFormat::StructuredJson.normalize(raw);
        assert_eq!(summary.title, "[JISSUE] T");
        assert_eq!(summary.description, "D");
    }

    #[test]
    fn structured_json_keeps_existing_escapes_intact() {
        let raw = "{\"title\":\"a \\\"quoted\\\" word\",\"description\":\"tab\u{0009}here\"}";
        let summary = SummaryFormat::StructuredJson.normalize(raw);
        assert_eq!(summary.title, "[JISSUE] a \"quoted\" word");
        assert_eq!(summary.description, "tab\nhere");
    }

    #[test]
    fn structured_json_empty_completion_yields_bare_tag() {
        let summary = SummaryFormat::StructuredJson.normalize("");
        assert_eq!(summary.title, "[JISSUE]");
        assert_eq!(summary.description, "");
    }

    #[test]
    fn first_line_splits_title_and_trims_description() {
        let summary = SummaryFormat::FirstLine.normalize("My Title\nLine2\nLine3");
        assert_eq!(summary.title, "[JISSUE] My Title");
        assert_eq!(summary.description, "Line2\nLine3");
    }

    #[test]
    fn first_line_without_newline_has_empty_description() {
        let summary = SummaryFormat::FirstLine.normalize("just a title");
        assert_eq!(summary.title, "[JISSUE] just a title");
        assert_eq!(summary.description, "");
    }

    #[test]
    fn first_line_empty_completion_keeps_tag_prefix() {
        let summary = SummaryFormat::FirstLine.normalize("");
        assert_eq!(summary.title, "[JISSUE] ");
        assert_eq!(summary.description, "");
    }

    #[test]
    fn parse_recognizes_both_formats() {
        assert_eq!(SummaryFormat::parse("json"), Some(SummaryFormat::StructuredJson));
        assert_eq!(SummaryFormat::parse("First-Line"), Some(SummaryFormat::FirstLine));
        assert_eq!(SummaryFormat::parse("yaml"), None);
    }
}
