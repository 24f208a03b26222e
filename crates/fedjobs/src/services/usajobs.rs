//! USAJOBS search client.
//!
//! Issues one `GET /api/search` per invocation and decodes the
//! `SearchResult` envelope into [`JobResult`]s.
//! API docs: https://developer.usajobs.gov/tutorials/search-jobs

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::entities::{JobResult, QueryParameters, SearchOutcome};
use crate::domain::errors::{DomainError, SearchFailure};
use crate::ports::JobSearchService;

pub const DEFAULT_ENDPOINT: &str = "https://data.usajobs.gov/api/search";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Credentials and endpoint for the USAJOBS API
#[derive(Debug, Clone)]
pub struct UsaJobsConfig {
    pub endpoint: String,
    /// Sent as `Authorization-Key`
    pub api_key: String,
    /// Contact email, sent as `User-Agent`
    pub contact: String,
    pub timeout: Duration,
}

impl UsaJobsConfig {
    pub fn new(api_key: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            contact: contact.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the API endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.api_key.trim().is_empty() {
            return Err(DomainError::Configuration("USAJOBS API key is empty".into()));
        }
        if self.contact.trim().is_empty() {
            return Err(DomainError::Configuration(
                "USAJOBS contact email is empty".into(),
            ));
        }
        Ok(())
    }
}

/// Job search client backed by the USAJOBS REST API
pub struct UsaJobsClient {
    config: UsaJobsConfig,
}

impl UsaJobsClient {
    pub fn new(config: UsaJobsConfig) -> Self {
        Self { config }
    }

    async fn perform_search(&self, params: &QueryParameters) -> Result<String, SearchFailure> {
        // One client per invocation so no connection state is shared.
        let client = Client::builder()
            .timeout(self.config.timeout)
            .build()
            .map_err(|err| SearchFailure::Transport {
                message: err.to_string(),
            })?;

        let response = client
            .get(&self.config.endpoint)
            .header("User-Agent", &self.config.contact)
            .header("Authorization-Key", &self.config.api_key)
            .query(&params.to_pairs())
            .send()
            .await
            .map_err(|err| SearchFailure::Transport {
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchFailure::HttpStatus {
                code: status.as_u16(),
            });
        }

        response.text().await.map_err(|err| SearchFailure::Transport {
            message: err.to_string(),
        })
    }
}

#[async_trait]
impl JobSearchService for UsaJobsClient {
    async fn search(&self, params: &QueryParameters) -> SearchOutcome {
        debug!(keyword = %params.keyword, endpoint = %self.config.endpoint, "Calling USAJOBS");

        match self.perform_search(params).await {
            Ok(body) => decode_search_response(&body),
            Err(failure) => {
                warn!(reason = failure.reason(), error = %failure, "USAJOBS request failed");
                SearchOutcome::Failure(failure)
            }
        }
    }
}

// ============================================
// Response Types
// ============================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchEnvelope {
    search_result: SearchResultBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchResultBody {
    search_result_count_all: u64,
    search_result_items: Vec<SearchResultItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchResultItem {
    matched_object_descriptor: PositionDescriptor,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PositionDescriptor {
    position_title: String,
    position_location: Vec<PositionLocation>,
    #[serde(rename = "PositionURI")]
    position_uri: Option<String>,
    #[serde(rename = "ApplyURI", default)]
    apply_uri: Vec<String>,
    organization_name: Option<String>,
    user_area: Option<UserArea>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PositionLocation {
    location_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct UserArea {
    details: Option<UserAreaDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct UserAreaDetails {
    #[serde(default)]
    hiring_path: Vec<String>,
}

impl TryFrom<PositionDescriptor> for JobResult {
    type Error = SearchFailure;

    fn try_from(descriptor: PositionDescriptor) -> Result<Self, Self::Error> {
        let location = descriptor
            .position_location
            .into_iter()
            .next()
            .ok_or_else(|| {
                SearchFailure::malformed(format!(
                    "'{}' has no PositionLocation",
                    descriptor.position_title
                ))
            })?;

        let apply_url = descriptor
            .apply_uri
            .into_iter()
            .find(|uri| !uri.is_empty())
            .or(descriptor.position_uri);

        let hiring_paths = descriptor
            .user_area
            .and_then(|area| area.details)
            .map(|details| details.hiring_path)
            .unwrap_or_default();

        Ok(JobResult {
            title: descriptor.position_title,
            location_name: location.location_name,
            apply_url,
            hiring_paths,
            organization: descriptor.organization_name,
        })
    }
}

/// Decode a USAJOBS response body
///
/// Any missing required field yields `MalformedResponse` instead of a
/// partial result.
pub fn decode_search_response(body: &str) -> SearchOutcome {
    let envelope: SearchEnvelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(err) => {
            warn!(error = %err, "USAJOBS response did not match the expected shape");
            return SearchOutcome::Failure(SearchFailure::malformed(err.to_string()));
        }
    };

    let result = envelope.search_result;
    let jobs: Result<Vec<JobResult>, SearchFailure> = result
        .search_result_items
        .into_iter()
        .map(|item| JobResult::try_from(item.matched_object_descriptor))
        .collect();

    match jobs {
        Ok(results) => {
            debug!(
                total = result.search_result_count_all,
                returned = results.len(),
                "Decoded USAJOBS response"
            );
            SearchOutcome::Success {
                total_count: result.search_result_count_all,
                results,
            }
        }
        Err(failure) => {
            warn!(error = %failure, "USAJOBS item missing required fields");
            SearchOutcome::Failure(failure)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(title: &str, locations: &[&str]) -> serde_json::Value {
        json!({
            "MatchedObjectId": "123456",
            "MatchedObjectDescriptor": {
                "PositionTitle": title,
                "PositionURI": "https://www.usajobs.gov:443/GetJob/ViewDetails/123456",
                "ApplyURI": ["https://www.usajobs.gov:443/GetJob/ViewDetails/123456?PostingChannelID="],
                "PositionLocationDisplay": "Multiple Locations",
                "PositionLocation": locations
                    .iter()
                    .map(|name| json!({ "LocationName": name, "CountryCode": "United States" }))
                    .collect::<Vec<_>>(),
                "OrganizationName": "Cybersecurity and Infrastructure Security Agency",
                "UserArea": {
                    "Details": {
                        "HiringPath": ["public", "vet"]
                    }
                }
            }
        })
    }

    fn envelope(total: u64, items: Vec<serde_json::Value>) -> String {
        json!({
            "LanguageCode": "EN",
            "SearchParameters": {},
            "SearchResult": {
                "SearchResultCount": items.len(),
                "SearchResultCountAll": total,
                "SearchResultItems": items
            }
        })
        .to_string()
    }

    #[test]
    fn test_decode_success() {
        let body = envelope(
            512,
            vec![
                item("IT Specialist (INFOSEC)", &["Arlington, Virginia", "Remote"]),
                item("Cyber Analyst", &["Fort Meade, Maryland"]),
            ],
        );

        match decode_search_response(&body) {
            SearchOutcome::Success {
                total_count,
                results,
            } => {
                assert_eq!(total_count, 512);
                assert_eq!(results.len(), 2);
                assert_eq!(results[0].title, "IT Specialist (INFOSEC)");
                assert_eq!(results[0].location_name, "Arlington, Virginia");
                assert_eq!(results[0].hiring_paths, vec!["public", "vet"]);
                assert_eq!(
                    results[0].organization.as_deref(),
                    Some("Cybersecurity and Infrastructure Security Agency")
                );
                assert!(results[0]
                    .apply_url
                    .as_deref()
                    .unwrap()
                    .ends_with("PostingChannelID="));
                assert_eq!(results[1].title, "Cyber Analyst");
            }
            other => panic!("Expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_empty_items() {
        let outcome = decode_search_response(&envelope(0, vec![]));
        assert_eq!(
            outcome,
            SearchOutcome::Success {
                total_count: 0,
                results: vec![]
            }
        );
    }

    #[test]
    fn test_optional_fields_fall_back() {
        let body = envelope(
            1,
            vec![json!({
                "MatchedObjectDescriptor": {
                    "PositionTitle": "Park Ranger",
                    "PositionURI": "https://www.usajobs.gov/job/777",
                    "PositionLocation": [{ "LocationName": "Yellowstone, Wyoming" }]
                }
            })],
        );

        let SearchOutcome::Success { results, .. } = decode_search_response(&body) else {
            panic!("Expected success");
        };
        assert_eq!(
            results[0].apply_url.as_deref(),
            Some("https://www.usajobs.gov/job/777")
        );
        assert!(results[0].hiring_paths.is_empty());
        assert_eq!(results[0].hiring_paths_display(), "Not specified");
        assert_eq!(results[0].organization, None);
    }

    #[test]
    fn test_missing_envelope_fails_closed() {
        for body in [
            json!({ "Unexpected": true }).to_string(),
            json!({ "SearchResult": { "SearchResultItems": [] } }).to_string(),
            json!({ "SearchResult": { "SearchResultCountAll": 3 } }).to_string(),
            "not json".to_string(),
        ] {
            let outcome = decode_search_response(&body);
            assert!(
                matches!(
                    outcome,
                    SearchOutcome::Failure(SearchFailure::MalformedResponse { .. })
                ),
                "body {} gave {:?}",
                body,
                outcome
            );
        }
    }

    #[test]
    fn test_item_without_location_fails_closed() {
        let body = envelope(1, vec![item("Ghost Job", &[])]);
        assert!(matches!(
            decode_search_response(&body),
            SearchOutcome::Failure(SearchFailure::MalformedResponse { .. })
        ));

        let body = envelope(
            1,
            vec![json!({ "MatchedObjectDescriptor": { "PositionLocation": [] } })],
        );
        assert!(!decode_search_response(&body).is_success());
    }

    #[test]
    fn test_config_builder() {
        let config = UsaJobsConfig::new("key", "me@example.com")
            .with_endpoint("http://localhost:9999/api/search")
            .with_timeout(Duration::from_secs(3));
        assert_eq!(config.endpoint, "http://localhost:9999/api/search");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(config.validate().is_ok());
        assert!(UsaJobsConfig::new("", "me@example.com").validate().is_err());
    }

    /// Serve one canned HTTP response and return the raw request head
    async fn serve_once(
        status_line: &'static str,
        body: String,
    ) -> (String, tokio::task::JoinHandle<String>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}/api/search", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&head).into_owned()
        });

        (endpoint, handle)
    }

    fn fixed_params(req: &crate::domain::entities::SearchRequest) -> QueryParameters {
        crate::application::query::build(
            req,
            &crate::domain::entities::SearchLimits::default(),
            chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_failure() {
        let (endpoint, server) =
            serve_once("HTTP/1.1 500 Internal Server Error", "{}".to_string()).await;
        let client = UsaJobsClient::new(
            UsaJobsConfig::new("secret-key", "me@example.com")
                .with_endpoint(endpoint)
                .with_timeout(Duration::from_secs(5)),
        );
        let req = crate::domain::entities::SearchRequest::new(
            "developer",
            &crate::domain::entities::SearchLimits::default(),
        );

        let outcome = client.search(&fixed_params(&req)).await;
        assert_eq!(
            outcome,
            SearchOutcome::Failure(SearchFailure::HttpStatus { code: 500 })
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_request_carries_headers_and_query() {
        let body = envelope(1, vec![item("Cyber Analyst", &["Fort Meade, Maryland"])]);
        let (endpoint, server) = serve_once("HTTP/1.1 200 OK", body).await;
        let client = UsaJobsClient::new(
            UsaJobsConfig::new("secret-key", "me@example.com")
                .with_endpoint(endpoint)
                .with_timeout(Duration::from_secs(5)),
        );
        let mut req = crate::domain::entities::SearchRequest::new(
            "cyber analyst",
            &crate::domain::entities::SearchLimits::default(),
        );
        req.result_count = 5;
        req.hiring_paths = vec!["public".into(), "vet".into()];

        let outcome = client.search(&fixed_params(&req)).await;
        assert!(outcome.is_success(), "got {:?}", outcome);

        let head = server.await.unwrap().to_lowercase();
        let request_line = head.lines().next().unwrap();
        assert!(request_line.starts_with("get /api/search?"), "{}", request_line);
        assert!(request_line.contains("keyword=cyber+analyst"), "{}", request_line);
        assert!(request_line.contains("resultsperpage=5"), "{}", request_line);
        assert!(request_line.contains("hiringpath=public%3bvet"), "{}", request_line);
        assert!(request_line.contains("dateposted=14"), "{}", request_line);
        assert!(!request_line.contains("locationname"), "{}", request_line);
        assert!(head.contains("\r\nuser-agent: me@example.com\r\n"), "{}", head);
        assert!(head.contains("\r\nauthorization-key: secret-key\r\n"), "{}", head);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_failure() {
        let client = UsaJobsClient::new(
            UsaJobsConfig::new("key", "me@example.com")
                .with_endpoint("http://127.0.0.1:9/api/search")
                .with_timeout(Duration::from_secs(2)),
        );
        let params = crate::application::query::build_now(
            &crate::domain::entities::SearchRequest::new(
                "developer",
                &crate::domain::entities::SearchLimits::default(),
            ),
            &crate::domain::entities::SearchLimits::default(),
        );

        assert!(matches!(
            client.search(&params).await,
            SearchOutcome::Failure(SearchFailure::Transport { .. })
        ));
    }
}
