//! Sunrise/sunset time service for a fixed coordinate.
//!
//! Fetches the daily sunrise and sunset instants from the public
//! sunrise-sunset.org API, memoizes the raw result for the process lifetime,
//! and renders both as 12-hour local-time strings under a caller-selected
//! locale.

pub mod error;
pub mod localize;
pub mod service;
pub mod sun_times;

pub use error::SunTimesError;
pub use localize::{SUPPORTED_LOCALES, SunField, format, localize, localize_in};
pub use service::{LocalizedSunTimes, SunTimeService};
pub use sun_times::{RawSunTimes, SunTimesClient};
