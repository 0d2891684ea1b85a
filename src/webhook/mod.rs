//! Discord webhook delivery.
//!
//! A message is posted once. Failures are logged and reported as `false`;
//! nothing is retried.

mod types;

pub use types::{Embed, EmbedFooter, EmbedImage, WebhookMessage};

use log::{error, info};
use url::Url;

use crate::config::WEBHOOK_TIMEOUT;
use crate::error_handling::WebhookError;

/// Longest response body kept in a rejection error
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Posts `message` to the webhook at `url`.
///
/// Any 2xx answer counts as delivered (Discord replies 204 unless `?wait=true`).
pub async fn try_send_webhook(
    client: &reqwest::Client,
    url: &str,
    message: &WebhookMessage,
) -> Result<(), WebhookError> {
    let url = Url::parse(url)?;
    let response = client
        .post(url)
        .timeout(WEBHOOK_TIMEOUT)
        .json(message)
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body: String = response
        .text()
        .await
        .unwrap_or_default()
        .chars()
        .take(MAX_ERROR_BODY_CHARS)
        .collect();
    Err(WebhookError::Rejected {
        status: status.as_u16(),
        body,
    })
}

/// Posts `message` to the webhook at `url`, logging the outcome.
///
/// Returns whether the message was delivered. Never fails.
pub async fn send_webhook(client: &reqwest::Client, url: &str, message: &WebhookMessage) -> bool {
    match try_send_webhook(client, url, message).await {
        Ok(()) => {
            if message.is_embed() {
                info!("Embed webhook sent successfully");
            } else {
                info!("Webhook sent successfully");
            }
            true
        }
        Err(e) => {
            error!("Error while sending webhook: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};
    use serde_json::json;

    #[tokio::test]
    async fn test_send_text_webhook_posts_content() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/api/webhooks/1/token"),
                request::body(json_decoded(eq(json!({"content": "hello"})))),
            ])
            .respond_with(status_code(204)),
        );

        let url = format!("http://{}/api/webhooks/1/token", server.addr());
        let client = reqwest::Client::new();
        let message = WebhookMessage::text("hello");
        assert!(send_webhook(&client, &url, &message).await);
    }

    #[tokio::test]
    async fn test_send_embed_webhook_posts_embed() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/hook"),
                request::body(json_decoded(eq(json!({
                    "embeds": [{"title": "Ranked", "description": "map ranked"}]
                })))),
            ])
            .respond_with(status_code(200).body("{}")),
        );

        let url = format!("http://{}/hook", server.addr());
        let client = reqwest::Client::new();
        let message = WebhookMessage::embed(Embed::new("map ranked").title("Ranked"));
        assert!(send_webhook(&client, &url, &message).await);
    }

    #[tokio::test]
    async fn test_rejected_webhook_returns_error_with_status() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/hook"))
                .respond_with(status_code(429).body("You are being rate limited.")),
        );

        let url = format!("http://{}/hook", server.addr());
        let client = reqwest::Client::new();
        let result = try_send_webhook(&client, &url, &WebhookMessage::text("spam")).await;
        match result {
            Err(WebhookError::Rejected { status, body }) => {
                assert_eq!(status, 429);
                assert_eq!(body, "You are being rate limited.");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_webhook_swallows_failures() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/hook"))
                .times(1)
                .respond_with(status_code(500)),
        );

        let url = format!("http://{}/hook", server.addr());
        let client = reqwest::Client::new();
        // Exactly one request: no retry on failure.
        let message = WebhookMessage::text("x");
        assert!(!send_webhook(&client, &url, &message).await);
    }

    #[tokio::test]
    async fn test_send_webhook_invalid_url() {
        let client = reqwest::Client::new();
        let message = WebhookMessage::text("x");
        let result = try_send_webhook(&client, "not a url", &message).await;
        assert!(matches!(result, Err(WebhookError::InvalidUrl(_))));
        assert!(!send_webhook(&client, "not a url", &message).await);
    }

    #[tokio::test]
    async fn test_send_webhook_unreachable_host() {
        // Bind then drop a listener to get a port nothing is listening on.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("addr").port()
        };
        let url = format!("http://127.0.0.1:{}/hook", port);
        let client = reqwest::Client::new();
        let result = try_send_webhook(&client, &url, &WebhookMessage::text("x")).await;
        assert!(matches!(result, Err(WebhookError::Http(_))));
    }
}
