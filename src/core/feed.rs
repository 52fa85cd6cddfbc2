use crate::utils::error::{QuakeError, Result};
use geojson::{FeatureCollection, GeoJson};
use reqwest::Client;
use std::time::Duration;

/// Parses a GeoJSON document that must be a FeatureCollection.
pub fn parse_collection(text: &str) -> Result<FeatureCollection> {
    match text.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        _ => Err(QuakeError::UnexpectedGeoJson {
            expected: "FeatureCollection".to_string(),
        }),
    }
}

pub fn empty_collection() -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: Vec::new(),
        foreign_members: None,
    }
}

#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    pub fn new(timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self { client })
    }

    pub async fn fetch_collection(&self, url: &str) -> Result<FeatureCollection> {
        tracing::debug!("Requesting feed: {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Feed {} answered {}", url, status);

        if !status.is_success() {
            return Err(QuakeError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_collection(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_parse_collection() {
        let collection = parse_collection(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": {"mag": 1.2},
                 "geometry": {"type": "Point", "coordinates": [1.0, 2.0, 3.0]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(collection.features.len(), 1);
    }

    #[test]
    fn test_parse_rejects_single_feature() {
        let result = parse_collection(
            r#"{"type": "Feature", "properties": {},
                "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}}"#,
        );
        assert!(matches!(result, Err(QuakeError::UnexpectedGeoJson { .. })));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_collection("not json"),
            Err(QuakeError::GeoJsonError(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_collection() {
        let server = MockServer::start();
        let feed_mock = server.mock(|when, then| {
            when.method(GET).path("/all_week.geojson");
            then.status(200)
                .header("Content-Type", "application/geo+json")
                .body(r#"{"type": "FeatureCollection", "features": []}"#);
        });

        let client = FeedClient::new(5).unwrap();
        let collection = client
            .fetch_collection(&server.url("/all_week.geojson"))
            .await
            .unwrap();

        feed_mock.assert();
        assert!(collection.features.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_reports_http_status() {
        let server = MockServer::start();
        let feed_mock = server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let client = FeedClient::new(5).unwrap();
        let result = client.fetch_collection(&server.url("/missing")).await;

        feed_mock.assert();
        match result {
            Err(QuakeError::HttpStatus { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }
}
