use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::config::Configuration;

/// Avatar the overlay shows next to command-originated danmaku.
pub const AVATAR_URL: &str = "https://vip.123pan.cn/1841937928/11391818";

/// Budget for the whole request/response cycle of one broadcast.
pub const BROADCAST_TIMEOUT: Duration = Duration::from_secs(10);

/// Sentinel page number for broadcasts not tied to a slide.
const PAGE_NUMBER_NONE: &str = "-1";

/// One outbound danmaku, built per invocation and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct BroadcastRequest {
    /// Reserved, always empty for command-originated danmaku.
    pub room_id: String,
    /// Reserved, always empty for command-originated danmaku.
    pub course_name: String,
    pub page_number: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub avatar_url: String,
}

impl BroadcastRequest {
    /// Builds a request tagged as coming from the slash command. `content`
    /// must be non-empty; the handler rejects empty input before this point.
    pub fn command(content: impl Into<String>) -> Self {
        BroadcastRequest {
            room_id: String::new(),
            course_name: String::new(),
            page_number: PAGE_NUMBER_NONE.to_string(),
            content: content.into(),
            kind: "command".to_string(),
            avatar_url: AVATAR_URL.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum BroadcastError {
    #[error("broadcast request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to encode broadcast request: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("broadcast rejected ({status}): {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// POSTs one danmaku to the configured overlay endpoint.
///
/// Only HTTP 200 counts as success; any other status is reported with the
/// response body as opaque diagnostic text. No retries, a failure is
/// terminal for the invocation.
pub async fn send_broadcast(
    client: &reqwest::Client,
    config: &Configuration,
    text: &str,
) -> Result<(), BroadcastError> {
    let request = BroadcastRequest::command(text);
    let body = serde_json::to_vec(&request)?;

    let response = client
        .post(&config.danmaku_url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .timeout(BROADCAST_TIMEOUT)
        .body(body)
        .send()
        .await?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(BroadcastError::Rejected { status, body });
    }

    Ok(())
}
