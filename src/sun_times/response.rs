/// Response envelope for the sunrise-sunset.org JSON API
/// Represents the structure returned by api.sunrise-sunset.org/json
#[derive(serde::Deserialize, Debug)]
pub struct SunTimesResponse {
    /// Per-event timestamps for the requested coordinate
    pub results: SunTimesResults,
    /// Envelope status, "OK" on success
    pub status: String,
}

/// The timestamps consumed from the response; the API returns more events
/// (solar noon, twilight bounds) which are ignored here
#[derive(serde::Deserialize, Debug)]
pub struct SunTimesResults {
    /// Sunrise in ISO-8601 UTC (requires formatted=0 in the request)
    pub sunrise: String,
    /// Sunset in ISO-8601 UTC
    pub sunset: String,
}
