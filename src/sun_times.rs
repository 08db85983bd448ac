// Module containing response data structures for the sunrise-sunset API
pub mod response;

use tokio::sync::OnceCell;
use tracing::{debug, error, info};

use crate::error::SunTimesError;

// API endpoint for the sunrise-sunset.org service
const SUN_TIMES_ENDPOINT: &str = "https://api.sunrise-sunset.org/json";

// Fixed observation point (San Francisco); the service tracks a single location
const LATITUDE: f64 = 37.7749;
const LONGITUDE: f64 = -122.4194;

/// Raw UTC sunrise/sunset timestamps as returned by one successful fetch.
///
/// Immutable once obtained; the strings keep the upstream ISO-8601
/// representation and are only interpreted at formatting time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSunTimes {
    /// Sunrise instant, ISO-8601 with UTC offset (e.g. "2024-06-21T13:48:00+00:00")
    pub sunrise_utc: String,
    /// Sunset instant, same representation
    pub sunset_utc: String,
}

/// Client for the sunrise-sunset.org JSON API.
///
/// Fetches the sunrise/sunset pair for the fixed coordinate and memoizes the
/// first successful result for the lifetime of the client. Use
/// [`SunTimesClient::new`] for production or [`SunTimesClient::with_endpoint`]
/// to point at a mock server in tests.
pub struct SunTimesClient {
    client: reqwest::Client,
    endpoint: String,
    cached: OnceCell<RawSunTimes>,
}

impl SunTimesClient {
    /// Creates a client pointed at the production sunrise-sunset.org API.
    pub fn new() -> Self {
        Self::with_endpoint(SUN_TIMES_ENDPOINT)
    }

    /// Creates a client with a custom endpoint URL (for testing with wiremock).
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_owned(),
            cached: OnceCell::new(),
        }
    }

    /// Returns the sunrise/sunset times, fetching them on first use.
    ///
    /// The first successful fetch is cached; every later call returns the
    /// cached record without touching the network. Concurrent first calls
    /// share a single in-flight request, and a failed fetch leaves the cache
    /// unset so the next call retries from scratch.
    ///
    /// # Errors
    /// * [`SunTimesError::RequestError`] on network failure
    /// * [`SunTimesError::ApiRequestFailed`] on a non-2xx HTTP status or a
    ///   non-"OK" envelope status
    /// * [`SunTimesError::ResponseParseError`] when the body is not the
    ///   expected JSON shape
    pub async fn fetch(&self) -> Result<&RawSunTimes, SunTimesError> {
        self.cached.get_or_try_init(|| self.fetch_remote()).await
    }

    async fn fetch_remote(&self) -> Result<RawSunTimes, SunTimesError> {
        info!("Fetching sunrise/sunset data for {}, {}", LATITUDE, LONGITUDE);

        // Construct the API URL with query parameters; formatted=0 requests
        // ISO-8601 UTC output instead of pre-rendered 12-hour strings
        let url = format!(
            "{}?lat={}&lng={}&formatted=0",
            self.endpoint, LATITUDE, LONGITUDE
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            error!("Failed to fetch sun times: {}", response.status());
            return Err(SunTimesError::ApiRequestFailed(format!(
                "Failed to fetch sun times: {}",
                response.status()
            )));
        }

        // Parse successful response into the envelope struct
        let envelope: response::SunTimesResponse = response
            .json()
            .await
            .map_err(|e| SunTimesError::ResponseParseError(e.to_string()))?;
        if envelope.status != "OK" {
            error!("Sun times API returned status {:?}", envelope.status);
            return Err(SunTimesError::ApiRequestFailed(format!(
                "API returned status {:?}",
                envelope.status
            )));
        }

        debug!("Sun times fetched successfully: {:?}", envelope.results);
        Ok(RawSunTimes {
            sunrise_utc: envelope.results.sunrise,
            sunset_utc: envelope.results.sunset,
        })
    }
}

impl Default for SunTimesClient {
    fn default() -> Self {
        Self::new()
    }
}
