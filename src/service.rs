use tokio::sync::watch;
use tracing::{debug, info};

use crate::error::SunTimesError;
use crate::localize::{self, SunField};
use crate::sun_times::SunTimesClient;

/// Display-ready sunrise/sunset strings in the most recently selected locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedSunTimes {
    pub sunrise_local: String,
    pub sunset_local: String,
}

/// The fetch-and-localize pipeline behind the display layer.
///
/// One fetch feeds both fields; the locale is a pure formatting-time
/// parameter, so switching it re-renders the cached raw data without a new
/// network request. Completed cycles are published on a watch channel, where
/// late subscribers see the latest value and stale intermediate values are
/// simply overwritten.
pub struct SunTimeService {
    source: SunTimesClient,
    publisher: watch::Sender<Option<LocalizedSunTimes>>,
}

impl SunTimeService {
    pub fn new(source: SunTimesClient) -> Self {
        let (publisher, _) = watch::channel(None);
        Self { source, publisher }
    }

    /// Registers an observer; it reads `None` until the first successful cycle.
    pub fn subscribe(&self) -> watch::Receiver<Option<LocalizedSunTimes>> {
        self.publisher.subscribe()
    }

    /// Runs one fetch-and-display cycle for the given locale.
    ///
    /// Fetches the raw times (cached after the first success), localizes both
    /// fields into the system time zone, and publishes the rendered pair. The
    /// pair is only published when both fields localize cleanly, matching the
    /// all-or-nothing display of the original screen.
    ///
    /// # Errors
    /// Returns the underlying [`SunTimesError`] when the fetch itself fails;
    /// the previously published value, if any, stays visible to observers.
    pub async fn select_locale(&self, locale: Option<&str>) -> Result<(), SunTimesError> {
        let raw = self.source.fetch().await?;

        let sunrise = localize::localize(Some(raw), SunField::Sunrise);
        let sunset = localize::localize(Some(raw), SunField::Sunset);

        if let (Some(sunrise), Some(sunset)) = (sunrise, sunset) {
            let rendered = LocalizedSunTimes {
                sunrise_local: localize::format(&sunrise, locale),
                sunset_local: localize::format(&sunset, locale),
            };
            info!(
                "Publishing sun times for locale {:?}: {} / {}",
                locale, rendered.sunrise_local, rendered.sunset_local
            );
            self.publisher.send_replace(Some(rendered));
        } else {
            debug!("Skipping publish, at least one field failed to localize");
        }

        Ok(())
    }
}
