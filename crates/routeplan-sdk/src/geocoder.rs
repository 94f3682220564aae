//! Location lookup for free-text and `lat,lng` queries.

use async_trait::async_trait;
use routeplan_core::{parse_coordinate_query, Coordinate, GeocodeError};
use serde::Deserialize;

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Best-match coordinate for `query`.
    async fn geocode(&self, query: &str) -> Result<Coordinate, GeocodeError>;
}

/// Nominatim search client, limited to a set of country codes.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    base_url: String,
    country_codes: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

impl NominatimGeocoder {
    /// Create a geocoder client that identifies itself with a `routeplan/<version>` User-Agent.
    pub fn new(
        base_url: impl Into<String>,
        country_codes: impl Into<String>,
    ) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("routeplan/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeocodeError::Transport(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            country_codes: country_codes.into(),
            client,
        })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    #[tracing::instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Result<Coordinate, GeocodeError> {
        if let Some(coordinate) = parse_coordinate_query(query) {
            return Ok(coordinate);
        }

        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "json"),
                ("q", query),
                ("countrycodes", self.country_codes.as_str()),
                ("limit", "1"),
            ])
            .send()
            .await
            .map_err(|e| GeocodeError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let results: Vec<SearchResult> = response
            .json()
            .await
            .map_err(|e| GeocodeError::Decode(e.to_string()))?;
        let best = results
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NotFound(query.to_string()))?;
        parse_result(&best)
    }
}

fn parse_result(result: &SearchResult) -> Result<Coordinate, GeocodeError> {
    let lat = result
        .lat
        .parse()
        .map_err(|_| GeocodeError::Decode(format!("bad latitude {:?}", result.lat)))?;
    let lng = result
        .lon
        .parse()
        .map_err(|_| GeocodeError::Decode(format!("bad longitude {:?}", result.lon)))?;
    Ok(Coordinate::new(lat, lng))
}
