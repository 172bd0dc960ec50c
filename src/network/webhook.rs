use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::assistant::{AssistantError, ChatRequest, RemoteAssistant};
use crate::config::AppConfig;

#[derive(Serialize)]
struct UnblockRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct ScheduleRequest<'a> {
    email: &'a str,
    #[serde(rename = "data")]
    date: &'a str,
}

/// `RemoteAssistant` over plain HTTP POSTs to the configured webhooks.
pub struct WebhookClient {
    http: reqwest::Client,
    chat_url: String,
    unblock_url: String,
    schedule_url: String,
}

impl WebhookClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: &AppConfig) -> Self {
        Self {
            http,
            chat_url: config.chat_webhook.clone(),
            unblock_url: config.unblock_webhook.clone(),
            schedule_url: config.schedule_webhook.clone(),
        }
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<reqwest::Response, AssistantError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response)
    }
}

#[async_trait]
impl RemoteAssistant for WebhookClient {
    async fn send_message(&self, request: &ChatRequest) -> Result<String, AssistantError> {
        let response = self.post(&self.chat_url, request).await?;
        let body = response.text().await?;
        Ok(extract_reply(&body))
    }

    async fn request_unblock(&self, email: &str) -> Result<(), AssistantError> {
        self.post(&self.unblock_url, &UnblockRequest { email })
            .await?;
        Ok(())
    }

    async fn schedule_session(&self, email: &str, date: &str) -> Result<(), AssistantError> {
        self.post(&self.schedule_url, &ScheduleRequest { email, date })
            .await?;
        Ok(())
    }
}

/// Pulls the reply text out of a chat webhook body.
///
/// Prefers a truthy `output`, then a truthy `message`, then the whole payload.
/// Strings are returned as-is, other JSON values compactly serialized, and a
/// body that is not JSON at all is returned verbatim.
pub fn extract_reply(body: &str) -> String {
    let payload = match serde_json::from_str::<Value>(body) {
        Ok(payload) => payload,
        Err(_) => return body.to_string(),
    };

    let field = |name: &str| payload.get(name).filter(|value| is_truthy(value));
    let reply = field("output").or_else(|| field("message")).unwrap_or(&payload);

    match reply {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_output_over_message() {
        let body = r#"{ "output": "Olá!", "message": "ignored" }"#;
        assert_eq!(extract_reply(body), "Olá!");
    }

    #[test]
    fn falls_back_to_message_when_output_is_falsy() {
        assert_eq!(extract_reply(r#"{ "output": "", "message": "Oi" }"#), "Oi");
        assert_eq!(extract_reply(r#"{ "output": null, "message": "Oi" }"#), "Oi");
        assert_eq!(extract_reply(r#"{ "message": "Oi" }"#), "Oi");
    }

    #[test]
    fn serializes_whole_payload_without_known_fields() {
        assert_eq!(extract_reply(r#"{"reply":"x"}"#), r#"{"reply":"x"}"#);
        assert_eq!(extract_reply("[1,2]"), "[1,2]");
        assert_eq!(extract_reply("42"), "42");
    }

    #[test]
    fn non_string_output_is_serialized() {
        assert_eq!(extract_reply(r#"{ "output": { "a": 1 } }"#), r#"{"a":1}"#);
    }

    #[test]
    fn plain_text_and_json_strings_are_used_verbatim() {
        assert_eq!(extract_reply("Olá, tudo bem?"), "Olá, tudo bem?");
        assert_eq!(extract_reply(r#""Olá!""#), "Olá!");
        assert_eq!(extract_reply(""), "");
    }

    #[test]
    fn client_reads_endpoints_from_config() {
        let config = AppConfig {
            chat_webhook: "http://bot/chat".to_string(),
            unblock_webhook: "http://bot/unblock".to_string(),
            schedule_webhook: "http://bot/schedule".to_string(),
        };

        let client = WebhookClient::new(&config);

        assert_eq!(client.chat_url, "http://bot/chat");
        assert_eq!(client.unblock_url, "http://bot/unblock");
        assert_eq!(client.schedule_url, "http://bot/schedule");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let config = AppConfig {
            chat_webhook: "http://127.0.0.1:9/chat".to_string(),
            ..AppConfig::default()
        };
        let client = WebhookClient::new(&config);
        let request = ChatRequest {
            email: "ana@x.com".to_string(),
            name: "Ana".to_string(),
            message: "Oi".to_string(),
        };

        let result = client.send_message(&request).await;

        assert!(matches!(result, Err(AssistantError::Transport(_))));
    }
}
