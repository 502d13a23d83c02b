//! Telegram Bot API delivery via `sendMessage`.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use homework_common::config::AppConfig;
use homework_common::error::NotifyError;

use crate::Notifier;

/// Telegram rejects messages longer than this many characters.
const MAX_MESSAGE_CHARS: usize = 4096;

#[derive(Debug, Deserialize)]
struct TgResponse {
    ok: bool,
    description: Option<String>,
}

/// Sends notifications to one Telegram chat.
pub struct TelegramNotifier {
    client: Client,
    send_url: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(
        api_url: &str,
        token: &str,
        chat_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            send_url: format!("{}/bot{}/sendMessage", api_url.trim_end_matches('/'), token),
            chat_id: chat_id.into(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, NotifyError> {
        Self::new(
            &config.telegram_api_url,
            &config.telegram_token,
            config.telegram_chat_id.clone(),
            config.http_timeout,
        )
    }

    async fn send_chunk(&self, chunk: &str) -> Result<(), NotifyError> {
        let payload = serde_json::json!({
            "chat_id": self.chat_id,
            "text": chunk,
        });

        // The URL embeds the bot token, so reqwest errors are stripped of it.
        let resp = self
            .client
            .post(&self.send_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.without_url().to_string()))?;

        let status = resp.status();
        let body: Option<TgResponse> = resp.json().await.ok();

        match body {
            Some(TgResponse { ok: true, .. }) if status.is_success() => Ok(()),
            Some(TgResponse { description, .. }) => Err(NotifyError::Rejected {
                status: status.as_u16(),
                description: description.unwrap_or_else(|| "sendMessage failed".to_string()),
            }),
            None => Err(NotifyError::Rejected {
                status: status.as_u16(),
                description: "unreadable sendMessage response".to_string(),
            }),
        }
    }
}

impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        if text.trim().is_empty() {
            return Err(NotifyError::EmptyMessage);
        }
        for chunk in split_message(text, MAX_MESSAGE_CHARS) {
            self.send_chunk(&chunk).await?;
        }
        Ok(())
    }
}

/// Split `text` into pieces of at most `max_chars` characters. Empty text
/// yields no pieces.
fn split_message(text: &str, max_chars: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_message_single_chunk() {
        assert_eq!(split_message("привет", 4096), vec!["привет"]);
    }

    #[test]
    fn test_empty_text_has_no_chunks() {
        assert!(split_message("", 4096).is_empty());
    }

    #[test]
    fn test_split_counts_chars_not_bytes() {
        let text = "ж".repeat(10);
        let chunks = split_message(&text, 4);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], "жжжж");
        assert_eq!(chunks[2], "жж");
    }

    #[test]
    fn test_send_url_trims_trailing_slash() {
        let notifier =
            TelegramNotifier::new("http://localhost:8081/", "T0KEN", "42", Duration::from_secs(1))
                .unwrap();
        assert_eq!(notifier.send_url, "http://localhost:8081/botT0KEN/sendMessage");
    }
}
