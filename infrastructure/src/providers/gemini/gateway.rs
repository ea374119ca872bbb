//! Gemini LLM Gateway implementation

use super::error::{from_api_error, from_status, from_transport};
use super::sse::SseDecoder;
use super::types::{GenerateRequest, GenerateResponse};
use crate::config::FileProviderConfig;
use crate::credentials::ApiKey;
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use mentor_application::{GatewayError, LlmGateway, StreamHandle};
use mentor_domain::{GenerationConfig, StreamEvent};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";
const STREAM_CHANNEL_CAPACITY: usize = 64;

/// Gateway to the Generative Language API.
///
/// Each call is a single HTTP request; nothing is retried.
pub struct GeminiGateway {
    client: reqwest::Client,
    api_key: ApiKey,
    base_url: String,
}

impl GeminiGateway {
    pub fn new(
        api_key: ApiKey,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Other(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &FileProviderConfig, api_key: ApiKey) -> Result<Self, GatewayError> {
        Self::new(
            api_key,
            config.base_url.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    fn endpoint(&self, config: &GenerationConfig) -> String {
        let model = config.model.as_str();
        if config.streaming {
            format!(
                "{}/v1beta/models/{}:streamGenerateContent?alt=sse",
                self.base_url, model
            )
        } else {
            format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
        }
    }

    async fn post(
        &self,
        url: &str,
        request: &GenerateRequest,
    ) -> Result<reqwest::Response, GatewayError> {
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(request)
            .send()
            .await
            .map_err(|e| from_transport(&e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = from_status(status.as_u16(), &body);
        warn!("Gemini request rejected with {}: {}", status, error);
        Err(error)
    }

    async fn generate_once(
        &self,
        url: &str,
        request: &GenerateRequest,
    ) -> Result<StreamHandle, GatewayError> {
        let body = self
            .post(url, request)
            .await?
            .text()
            .await
            .map_err(|e| from_transport(&e))?;
        let response: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
        if let Some(error) = &response.error {
            return Err(from_api_error(error));
        }
        log_finish(&response);

        Ok(StreamHandle::from_events(vec![StreamEvent::Completed(
            response.text(),
        )]))
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn generate_stream(
        &self,
        instruction: &str,
        config: &GenerationConfig,
    ) -> Result<StreamHandle, GatewayError> {
        let url = self.endpoint(config);
        let request = GenerateRequest::from_instruction(instruction, config);

        if !config.streaming {
            return self.generate_once(&url, &request).await;
        }

        let response = self.post(&url, &request).await?;
        let (tx, rx) = mpsc::channel(STREAM_CHANNEL_CAPACITY);
        tokio::spawn(pump_events(response.bytes_stream(), tx));
        Ok(StreamHandle::new(rx))
    }
}

/// Decode the SSE body and forward text deltas until the body ends.
///
/// Stops early when the receiving side of the channel is dropped.
async fn pump_events<S, B>(body: S, tx: mpsc::Sender<StreamEvent>)
where
    S: Stream<Item = Result<B, reqwest::Error>>,
    B: AsRef<[u8]>,
{
    let mut body = std::pin::pin!(body);
    let mut decoder = SseDecoder::new();
    let mut full_text = String::new();

    while let Some(chunk) = body.next().await {
        let payloads = match chunk {
            Ok(bytes) => decoder.feed(bytes.as_ref()),
            Err(e) => {
                let _ = tx.send(from_transport(&e).into_stream_event()).await;
                return;
            }
        };
        for payload in payloads {
            if !forward_payload(&payload, &mut full_text, &tx).await {
                return;
            }
        }
    }

    if let Some(payload) = decoder.finish()
        && !forward_payload(&payload, &mut full_text, &tx).await
    {
        return;
    }

    debug!("Gemini stream completed ({} chars)", full_text.len());
    let _ = tx.send(StreamEvent::Completed(full_text)).await;
}

/// Returns false when streaming must stop.
async fn forward_payload(
    payload: &str,
    full_text: &mut String,
    tx: &mpsc::Sender<StreamEvent>,
) -> bool {
    match parse_payload(payload) {
        Ok(text) if text.is_empty() => true,
        Ok(text) => {
            full_text.push_str(&text);
            tx.send(StreamEvent::Delta(text)).await.is_ok()
        }
        Err(error) => {
            warn!("Gemini stream failed: {}", error);
            let _ = tx.send(error.into_stream_event()).await;
            false
        }
    }
}

fn parse_payload(payload: &str) -> Result<String, GatewayError> {
    let response: GenerateResponse = serde_json::from_str(payload)
        .map_err(|e| GatewayError::MalformedResponse(format!("{}: {}", e, payload)))?;
    if let Some(error) = &response.error {
        return Err(from_api_error(error));
    }
    log_finish(&response);
    Ok(response.text())
}

/// An empty or cut-off reply is otherwise unexplained.
fn log_finish(response: &GenerateResponse) {
    if let Some(reason) = response.abnormal_finish() {
        warn!("Gemini stopped generating early: {}", reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_domain::Model;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one HTTP response and hand back the raw request.
    async fn serve_once(
        status: &'static str,
        content_type: &'static str,
        body: String,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                content_type,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });

        (format!("http://{}", addr), handle)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let lower = line.to_ascii_lowercase();
                        lower
                            .strip_prefix("content-length:")
                            .and_then(|v| v.trim().parse::<usize>().ok())
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    return text;
                }
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    fn gateway(base_url: &str) -> GeminiGateway {
        GeminiGateway::new(
            ApiKey::new("test-key"),
            base_url,
            Some(Duration::from_secs(5)),
        )
        .unwrap()
    }

    fn sse_chunk(text: &str) -> String {
        format!(
            "data: {{\"candidates\":[{{\"content\":{{\"role\":\"model\",\"parts\":[{{\"text\":\"{}\"}}]}}}}]}}\r\n\r\n",
            text
        )
    }

    #[tokio::test]
    async fn test_streaming_request_and_deltas() {
        let body = format!("{}{}", sse_chunk("Hello"), sse_chunk(" world"));
        let (base_url, server) = serve_once("200 OK", "text/event-stream", body).await;

        let mut handle = gateway(&base_url)
            .generate_stream("Explain loops", &GenerationConfig::default())
            .await
            .unwrap();

        assert_eq!(handle.next_delta().await.unwrap(), Some("Hello".to_string()));
        assert_eq!(handle.next_delta().await.unwrap(), Some(" world".to_string()));
        assert_eq!(handle.next_delta().await.unwrap(), None);

        let request = server.await.unwrap();
        assert!(request.starts_with(
            "POST /v1beta/models/gemini-2.5-flash-lite:streamGenerateContent?alt=sse HTTP/1.1"
        ));
        assert!(request.to_ascii_lowercase().contains("x-goog-api-key: test-key"));
        assert!(request.contains("\"text\":\"Explain loops\""));
        assert!(request.contains("\"maxOutputTokens\":200"));
    }

    #[tokio::test]
    async fn test_non_streaming_uses_generate_content() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Full answer"}]}}]}"#.to_string();
        let (base_url, server) = serve_once("200 OK", "application/json", body).await;

        let config = GenerationConfig::default()
            .with_model(Model::Gemini25Flash)
            .with_streaming(false);
        let text = gateway(&base_url)
            .generate("Explain joins", &config)
            .await
            .unwrap();
        assert_eq!(text, "Full answer");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /v1beta/models/gemini-2.5-flash:generateContent HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_http_429_is_quota_exceeded() {
        let body = r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#
            .to_string();
        let (base_url, _server) =
            serve_once("429 Too Many Requests", "application/json", body).await;

        let result = gateway(&base_url)
            .generate_stream("hi", &GenerationConfig::default())
            .await;
        assert!(matches!(result, Err(GatewayError::QuotaExceeded(_))));
    }

    #[tokio::test]
    async fn test_http_500_is_request_failure() {
        let (base_url, _server) =
            serve_once("500 Internal Server Error", "text/plain", "boom".to_string()).await;

        let result = gateway(&base_url)
            .generate_stream("hi", &GenerationConfig::default())
            .await;
        match result {
            Err(GatewayError::RequestFailed(message)) => assert!(message.contains("500")),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("expected an error"),
        }
    }

    #[tokio::test]
    async fn test_quota_error_mid_stream() {
        let body = format!(
            "{}data: {{\"error\":{{\"code\":429,\"message\":\"slow down\",\"status\":\"RESOURCE_EXHAUSTED\"}}}}\r\n\r\n",
            sse_chunk("Partial")
        );
        let (base_url, _server) = serve_once("200 OK", "text/event-stream", body).await;

        let mut handle = gateway(&base_url)
            .generate_stream("hi", &GenerationConfig::default())
            .await
            .unwrap();
        assert_eq!(handle.next_delta().await.unwrap(), Some("Partial".to_string()));
        assert!(handle.next_delta().await.unwrap_err().is_quota_exceeded());
    }

    #[tokio::test]
    async fn test_malformed_payload() {
        let body = "data: not json\r\n\r\n".to_string();
        let (base_url, _server) = serve_once("200 OK", "text/event-stream", body).await;

        let mut handle = gateway(&base_url)
            .generate_stream("hi", &GenerationConfig::default())
            .await
            .unwrap();
        assert!(matches!(
            handle.next_delta().await,
            Err(GatewayError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_permission_error_mid_stream_keeps_its_kind() {
        let body = format!(
            "{}data: {{\"error\":{{\"code\":403,\"message\":\"denied\",\"status\":\"PERMISSION_DENIED\"}}}}\r\n\r\n",
            sse_chunk("Partial")
        );
        let (base_url, _server) = serve_once("200 OK", "text/event-stream", body).await;

        let mut handle = gateway(&base_url)
            .generate_stream("hi", &GenerationConfig::default())
            .await
            .unwrap();
        assert_eq!(handle.next_delta().await.unwrap(), Some("Partial".to_string()));
        assert_eq!(
            handle.next_delta().await.unwrap_err(),
            GatewayError::Authentication("PERMISSION_DENIED: denied".to_string())
        );
    }

    #[tokio::test]
    async fn test_truncated_reply_still_completes() {
        let body = "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"Cut\"}]},\"finishReason\":\"MAX_TOKENS\"}]}\r\n\r\n".to_string();
        let (base_url, _server) = serve_once("200 OK", "text/event-stream", body).await;

        let text = gateway(&base_url)
            .generate("hi", &GenerationConfig::default())
            .await
            .unwrap();
        assert_eq!(text, "Cut");
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = gateway(&format!("http://{}", addr))
            .generate_stream("hi", &GenerationConfig::default())
            .await;
        assert!(matches!(result, Err(GatewayError::ConnectionError(_))));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let gateway = gateway("https://example.test/");
        assert_eq!(
            gateway.endpoint(&GenerationConfig::default()),
            "https://example.test/v1beta/models/gemini-2.5-flash-lite:streamGenerateContent?alt=sse"
        );
    }
}
