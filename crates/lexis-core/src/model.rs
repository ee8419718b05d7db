//! Request and response models for the analysis endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LexisError;

/// Keyword extraction method used when the selector is left empty.
pub const DEFAULT_METHOD: &str = "textrank";

/// Extraction methods the analysis server answers. Other names reach the
/// server unchanged but come back as an empty body.
pub const KEYWORD_METHODS: &[&str] = &[DEFAULT_METHOD];

/// One of the fixed server operations under `/ws/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Lemmatize,
    Tag,
    Keywords,
}

impl Endpoint {
    /// Path segment appended to `/ws/`.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Lemmatize => "lemmatize",
            Self::Tag => "tag",
            Self::Keywords => "keywords",
        }
    }

    /// Response field holding this endpoint's result.
    pub fn result_field(&self) -> &'static str {
        match self {
            Self::Lemmatize => "lemmatizedText",
            Self::Tag => "taggedText",
            Self::Keywords => "keywords",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Endpoint {
    type Err = LexisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lemmatize" => Ok(Self::Lemmatize),
            "tag" => Ok(Self::Tag),
            "keywords" => Ok(Self::Keywords),
            other => Err(LexisError::UnknownEndpoint(other.to_string())),
        }
    }
}

/// Payload of one analysis call. Serializes as the JSON body variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    #[serde(rename = "originalText")]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl AnalysisRequest {
    /// Request for a scalar endpoint (lemmatize, tag).
    pub fn simple(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            method: None,
        }
    }

    /// Request for keyword extraction. An empty method falls back to
    /// [`DEFAULT_METHOD`].
    pub fn keywords(text: impl Into<String>, method: &str) -> Self {
        let method = if method.trim().is_empty() {
            DEFAULT_METHOD
        } else {
            method
        };
        Self {
            text: text.into(),
            method: Some(method.to_string()),
        }
    }

    /// Query-string pairs for the GET variant.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![("text", self.text.as_str())];
        if let Some(method) = &self.method {
            pairs.push(("method", method.as_str()));
        }
        pairs
    }
}

/// A single extracted keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub text: String,
    pub score: f64,
}

/// Body returned by the keywords endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordListResponse {
    #[serde(default)]
    pub original_text: Option<String>,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
}

/// A rendered keyword table row.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordRow {
    pub text: String,
    pub score: f64,
}

impl KeywordRow {
    /// Score in its natural decimal form, e.g. `0.92`, or `0` for zero.
    pub fn score_label(&self) -> String {
        self.score.to_string()
    }
}

impl From<Keyword> for KeywordRow {
    fn from(keyword: Keyword) -> Self {
        Self {
            text: keyword.text,
            score: keyword.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_paths_and_fields() {
        assert_eq!(Endpoint::Lemmatize.path(), "lemmatize");
        assert_eq!(Endpoint::Tag.result_field(), "taggedText");
        assert_eq!(Endpoint::Keywords.result_field(), "keywords");
        assert_eq!("tag".parse::<Endpoint>().unwrap(), Endpoint::Tag);
        assert!("stem".parse::<Endpoint>().is_err());
    }

    #[test]
    fn test_json_body_shape() {
        let simple = serde_json::to_value(AnalysisRequest::simple("worlds")).unwrap();
        assert_eq!(simple, json!({ "originalText": "worlds" }));

        let keywords =
            serde_json::to_value(AnalysisRequest::keywords("Apple releases new iPhone", "tfidf"))
                .unwrap();
        assert_eq!(
            keywords,
            json!({ "originalText": "Apple releases new iPhone", "method": "tfidf" })
        );
    }

    #[test]
    fn test_query_pairs() {
        let req = AnalysisRequest::keywords("some text", "rake");
        assert_eq!(req.query_pairs(), vec![("text", "some text"), ("method", "rake")]);
        assert_eq!(AnalysisRequest::simple("x").query_pairs(), vec![("text", "x")]);
    }

    #[test]
    fn test_empty_method_defaults_to_textrank() {
        let req = AnalysisRequest::keywords("text", "  ");
        assert_eq!(req.method.as_deref(), Some(DEFAULT_METHOD));
    }

    #[test]
    fn test_keyword_list_keeps_original_text() {
        let body = json!({
            "originalText": "Daallo Airlines Flight 159 makes a successful emergency landing",
            "keywords": [
                { "text": "airlines flight", "score": 0.5773502691896257 },
                { "text": "explosion", "score": 0.0 }
            ]
        });
        let parsed: KeywordListResponse = serde_json::from_value(body).unwrap();
        assert!(parsed.original_text.unwrap().starts_with("Daallo"));
        assert_eq!(parsed.keywords.len(), 2);
        assert_eq!(parsed.keywords[0].text, "airlines flight");
    }

    #[test]
    fn test_score_label() {
        let row = |score| KeywordRow { text: String::new(), score };
        assert_eq!(row(0.92).score_label(), "0.92");
        assert_eq!(row(0.0).score_label(), "0");
        assert_eq!(row(0.5773502691896257).score_label(), "0.5773502691896257");
    }
}
