//! HTTP transport to the analysis server.
//!
//! Every call goes to `{base_url}/ws/{endpoint}` with the configured bearer
//! token and `Accept: application/json`; the server only matches handlers
//! that carry that header.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::debug;

use crate::config::{ClientConfig, TransportVariant};
use crate::error::{LexisResult, TransportFailure};
use crate::model::{AnalysisRequest, Endpoint};

/// Sends one analysis call and returns the decoded JSON body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        endpoint: Endpoint,
        request: &AnalysisRequest,
    ) -> Result<Value, TransportFailure>;
}

/// reqwest-backed transport.
#[derive(Clone)]
pub struct HttpTransport {
    base_url: String,
    token: String,
    variant: TransportVariant,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport from a validated config.
    pub fn from_config(config: &ClientConfig) -> LexisResult<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            variant: config.transport,
            client,
        })
    }

    pub fn variant(&self) -> TransportVariant {
        self.variant
    }

    /// Full URL of an endpoint.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/ws/{}", self.base_url, endpoint.path())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        endpoint: Endpoint,
        request: &AnalysisRequest,
    ) -> Result<Value, TransportFailure> {
        let url = self.url(endpoint);

        let builder = match self.variant {
            TransportVariant::Query => self.client.get(&url).query(&request.query_pairs()),
            TransportVariant::Json => self.client.post(&url).json(request),
        };

        debug!(url = %url, variant = %self.variant, "Sending analysis request");

        let response = builder
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportFailure::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(classify)?;
        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|e| TransportFailure::MalformedBody(e.to_string()))?;

        debug!(url = %url, status = status.as_u16(), "Analysis response received");

        Ok(body)
    }
}

fn classify(err: reqwest::Error) -> TransportFailure {
    if err.is_timeout() {
        TransportFailure::Timeout(err.to_string())
    } else {
        TransportFailure::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport(base_url: &str, variant: TransportVariant) -> HttpTransport {
        let config = ClientConfig::default()
            .with_base_url(base_url)
            .with_token("test-token")
            .with_transport(variant);
        HttpTransport::from_config(&config).unwrap()
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let t = transport("http://localhost:8080/nlp/", TransportVariant::Query);
        assert_eq!(t.url(Endpoint::Tag), "http://localhost:8080/nlp/ws/tag");
    }

    #[tokio::test]
    async fn test_query_variant_sends_get_with_params() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ws/keywords"))
            .and(query_param("text", "Apple releases new iPhone"))
            .and(query_param("method", "tfidf"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "keywords": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let t = transport(&server.uri(), TransportVariant::Query);
        let body = t
            .send(
                Endpoint::Keywords,
                &AnalysisRequest::keywords("Apple releases new iPhone", "tfidf"),
            )
            .await
            .unwrap();
        assert_eq!(body, json!({ "keywords": [] }));
    }

    #[tokio::test]
    async fn test_json_variant_sends_post_with_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ws/lemmatize"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({ "originalText": "The cats are running" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "lemmatizedText": "the cat be run" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let t = transport(&server.uri(), TransportVariant::Json);
        let body = t
            .send(Endpoint::Lemmatize, &AnalysisRequest::simple("The cats are running"))
            .await
            .unwrap();
        assert_eq!(body["lemmatizedText"], "the cat be run");
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ws/tag"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad token"))
            .mount(&server)
            .await;

        let t = transport(&server.uri(), TransportVariant::Query);
        let err = t.send(Endpoint::Tag, &AnalysisRequest::simple("x")).await.unwrap_err();
        assert_eq!(
            err,
            TransportFailure::Status { status: 401, body: "bad token".to_string() }
        );
        assert_eq!(err.text_status(), "error");
    }

    #[tokio::test]
    async fn test_empty_body_is_parse_error() {
        let server = MockServer::start().await;

        // Unknown methods come back as an empty 200.
        Mock::given(method("GET"))
            .and(path("/ws/keywords"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let t = transport(&server.uri(), TransportVariant::Query);
        let err = t
            .send(Endpoint::Keywords, &AnalysisRequest::keywords("x", "bogus"))
            .await
            .unwrap_err();
        assert_eq!(err.text_status(), "parsererror");
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ws/tag"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "taggedText": "x_NN" }))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let config = ClientConfig::default()
            .with_base_url(server.uri())
            .with_timeout_secs(1);
        let t = HttpTransport::from_config(&config).unwrap();
        let err = t.send(Endpoint::Tag, &AnalysisRequest::simple("x")).await.unwrap_err();
        assert_eq!(err.text_status(), "timeout");
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let uri = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let t = transport(&uri, TransportVariant::Query);
        let err = t.send(Endpoint::Tag, &AnalysisRequest::simple("x")).await.unwrap_err();
        assert!(matches!(err, TransportFailure::Network(_)));
    }
}
