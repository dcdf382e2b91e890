//! HTTP API Client
//!
//! Functions for communicating with the helpdesk REST API.

use gloo_net::http::Request;

use crate::state::global::{Complaint, Stats};

/// Default API base URL (same origin)
pub const DEFAULT_API_BASE: &str = "";

/// Local storage key holding an API base override
const API_BASE_KEY: &str = "helpdesk_api_url";

/// Get the API base URL from local storage or use default. The override is
/// read-only from the client's perspective; operators set the key by hand.
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    normalize_api_base(&url)
}

/// Normalize a base URL: remove trailing slash
fn normalize_api_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Fixed user-facing message for transport and payload failures. The detail
/// is only useful in the console.
pub const CONNECTION_ERROR: &str = "Connection error";

fn connection_error(e: gloo_net::Error) -> String {
    web_sys::console::error_1(&format!("Request failed: {}", e).into());
    CONNECTION_ERROR.to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// The analysis endpoint returns plain text delimited by these labels.
/// They are part of the wire contract and the parser keys on them.
pub const SCORE_LABEL: &str = "情緒分數：";
pub const SENTIMENT_LABEL: &str = "情緒標籤：";
pub const REQUESTS_LABEL: &str = "關鍵訴求：";
pub const REPLY_LABEL: &str = "建議回覆：";

const ANALYSIS_LABELS: [&str; 4] = [SCORE_LABEL, SENTIMENT_LABEL, REQUESTS_LABEL, REPLY_LABEL];

/// Structured sentiment analysis result, parsed from the delimited wire text
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisReport {
    /// Anger score, 1-10
    pub score: Option<String>,
    /// Sentiment label (angry, disappointed, ...)
    pub label: Option<String>,
    /// One-line summary of what the customer wants
    pub requests: Option<String>,
    /// Suggested service reply
    pub suggested_reply: Option<String>,
    /// Full wire text, kept for the unstructured fallback
    pub raw: String,
}

impl AnalysisReport {
    /// Parse the delimited analysis text. Each field is the text between its
    /// label and the next label present, in wire order. Missing labels leave
    /// their field as `None`.
    pub fn parse(text: &str) -> Self {
        let mut marks: Vec<(usize, usize)> = ANALYSIS_LABELS
            .iter()
            .enumerate()
            .filter_map(|(idx, label)| text.find(label).map(|pos| (pos, idx)))
            .collect();
        marks.sort_by_key(|&(pos, _)| pos);

        let mut fields: [Option<String>; 4] = Default::default();
        for (i, &(pos, idx)) in marks.iter().enumerate() {
            let start = pos + ANALYSIS_LABELS[idx].len();
            let end = marks.get(i + 1).map_or(text.len(), |&(next, _)| next);
            fields[idx] = Some(text[start..end].trim().to_string());
        }

        let [score, label, requests, suggested_reply] = fields;
        Self {
            score,
            label,
            requests,
            suggested_reply,
            raw: text.to_string(),
        }
    }

    /// True when at least one labeled field was found
    pub fn is_structured(&self) -> bool {
        self.score.is_some()
            || self.label.is_some()
            || self.requests.is_some()
            || self.suggested_reply.is_some()
    }
}

// ============ API Functions ============

/// Send a chat message and return the assistant's reply
pub async fn send_chat_message(message: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct ChatRequest {
        message: String,
    }

    #[derive(serde::Deserialize)]
    struct ChatResponse {
        response: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/chat", api_base))
        .json(&ChatRequest {
            message: message.to_string(),
        })
        .map_err(connection_error)?
        .send()
        .await
        .map_err(connection_error)?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string() });
        return Err(error.error);
    }

    let result: ChatResponse = response.json().await
        .map_err(connection_error)?;

    Ok(result.response)
}

/// Fetch all tickets, newest first
pub async fn fetch_complaints() -> Result<Vec<Complaint>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/complaints", api_base))
        .send()
        .await
        .map_err(connection_error)?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string() });
        return Err(error.error);
    }

    response.json().await
        .map_err(connection_error)
}

/// Create a new ticket
pub async fn create_complaint(content: &str) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct CreateRequest {
        content: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/complaints", api_base))
        .json(&CreateRequest {
            content: content.to_string(),
        })
        .map_err(connection_error)?
        .send()
        .await
        .map_err(connection_error)?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string() });
        return Err(error.error);
    }

    Ok(())
}

/// Delete a ticket by id
pub async fn delete_complaint(id: u32) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}/api/complaints/{}", api_base, id))
        .send()
        .await
        .map_err(connection_error)?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string() });
        return Err(error.error);
    }

    Ok(())
}

/// Post an admin reply; the server marks the ticket resolved
pub async fn reply_complaint(id: u32, reply: &str) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct ReplyRequest {
        reply: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/complaints/{}/reply", api_base, id))
        .json(&ReplyRequest {
            reply: reply.to_string(),
        })
        .map_err(connection_error)?
        .send()
        .await
        .map_err(connection_error)?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string() });
        return Err(error.error);
    }

    Ok(())
}

/// Fetch dashboard counters
pub async fn fetch_stats() -> Result<Stats, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/stats", api_base))
        .send()
        .await
        .map_err(connection_error)?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string() });
        return Err(error.error);
    }

    response.json().await
        .map_err(connection_error)
}

/// Run sentiment analysis on free-form text
pub async fn analyze_text(text: &str) -> Result<AnalysisReport, String> {
    #[derive(serde::Serialize)]
    struct AnalyzeRequest {
        text: String,
    }

    #[derive(serde::Deserialize)]
    struct AnalyzeResponse {
        result: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/analyze", api_base))
        .json(&AnalyzeRequest {
            text: text.to_string(),
        })
        .map_err(connection_error)?
        .send()
        .await
        .map_err(connection_error)?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string() });
        return Err(error.error);
    }

    let result: AnalyzeResponse = response.json().await
        .map_err(connection_error)?;

    Ok(AnalysisReport::parse(&result.result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_report() {
        let text = "情緒分數：8\n情緒標籤：憤怒\n關鍵訴求：退款並道歉\n建議回覆：非常抱歉造成您的困擾，我們將立即處理退款。";

        let report = AnalysisReport::parse(text);
        assert!(report.is_structured());
        assert_eq!(report.score.as_deref(), Some("8"));
        assert_eq!(report.label.as_deref(), Some("憤怒"));
        assert_eq!(report.requests.as_deref(), Some("退款並道歉"));
        assert_eq!(
            report.suggested_reply.as_deref(),
            Some("非常抱歉造成您的困擾，我們將立即處理退款。")
        );
    }

    #[test]
    fn test_parse_multiline_reply_field() {
        let text = "情緒分數：3\n情緒標籤：平靜\n關鍵訴求：想知道出貨時間\n建議回覆：您好，\n訂單將於三日內出貨。";

        let report = AnalysisReport::parse(text);
        // The last field runs to end of text, newlines included
        assert_eq!(
            report.suggested_reply.as_deref(),
            Some("您好，\n訂單將於三日內出貨。")
        );
    }

    #[test]
    fn test_parse_missing_labels() {
        let report = AnalysisReport::parse("情緒分數：5\n關鍵訴求：更換商品");
        assert!(report.is_structured());
        assert_eq!(report.score.as_deref(), Some("5"));
        assert!(report.label.is_none());
        assert_eq!(report.requests.as_deref(), Some("更換商品"));
        assert!(report.suggested_reply.is_none());
    }

    #[test]
    fn test_api_base_trailing_slash_removed() {
        assert_eq!(normalize_api_base("http://localhost:5000/"), "http://localhost:5000");
        assert_eq!(normalize_api_base("http://localhost:5000"), "http://localhost:5000");
        assert_eq!(normalize_api_base(""), "");
    }

    #[test]
    fn test_parse_unlabeled_text_keeps_raw() {
        let report = AnalysisReport::parse("The model returned something unexpected.");
        assert!(!report.is_structured());
        assert_eq!(report.raw, "The model returned something unexpected.");
    }
}
