//! Reverse-geocoding client for landmark detection.
//!
//! Wraps the public OpenStreetMap Nominatim endpoint: given a coordinate
//! pair, return the name of the closest known place ("Pico da Neblina"),
//! or nothing. Any non-2xx response or parse failure collapses to "no
//! result" at the [`NominatimClient::detect_landmark`] level; callers never
//! see a blocking error from a lookup.
//!
//! The name-picking preference order lives in [`pick_name`], a pure
//! function over the response body so it can be tested without a network.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// Identifying client label Nominatim's usage policy requires.
const CLIENT_USER_AGENT: &str = "PatoPrimordial/1.0";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from a single reverse lookup. `detect_landmark` swallows these;
/// `reverse` surfaces them for callers that want the detail.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("nominatim returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Address sub-fields that can stand in for a missing display name, in
/// preference order (points of interest first, regions last).
const ADDRESS_FIELDS: [&str; 6] = [
    "tourism",
    "natural",
    "mountain",
    "state_district",
    "state",
    "region",
];

/// Pull the best available place name out of a Nominatim response body.
pub fn pick_name(body: &Value) -> Option<String> {
    let candidate = body
        .get("display_name")
        .and_then(Value::as_str)
        .or_else(|| body.get("name").and_then(Value::as_str))
        .or_else(|| {
            let address = body.get("address")?;
            ADDRESS_FIELDS
                .iter()
                .find_map(|field| address.get(*field).and_then(Value::as_str))
        });
    candidate
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
}

/// HTTP client for the Nominatim reverse endpoint.
pub struct NominatimClient {
    http: reqwest::Client,
}

impl NominatimClient {
    pub fn new() -> Result<Self, GeoError> {
        let http = reqwest::Client::builder()
            .user_agent(CLIENT_USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http })
    }

    /// One reverse lookup. `Ok(None)` means the endpoint answered but had
    /// no usable name for this coordinate.
    pub async fn reverse(&self, lat: f64, lon: f64) -> Result<Option<String>, GeoError> {
        let response = self
            .http
            .get(NOMINATIM_URL)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("format", "json".to_string()),
                ("zoom", "14".to_string()),
                ("addressdetails", "1".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeoError::Status(status));
        }

        let body: Value = response.json().await?;
        Ok(pick_name(&body))
    }

    /// Best-effort lookup: name or nothing. Failures are logged and folded
    /// into `None` so a flaky network never blocks the wizard.
    pub async fn detect_landmark(&self, lat: f64, lon: f64) -> Option<String> {
        match self.reverse(lat, lon).await {
            Ok(name) => name,
            Err(err) => {
                log::warn!("landmark lookup failed for ({lat:.5}, {lon:.5}): {err}");
                None
            }
        }
    }
}
