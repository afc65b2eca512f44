//! Local host facts read per request: wall-clock time and hostname.

use chrono::{DateTime, Local};
use tracing::warn;

/// Format of the timestamp reported by the root endpoint (`DD/MM/YYYY HH:MM:SS`).
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Reported when the hostname cannot be resolved.
pub const UNKNOWN_HOSTNAME: &str = "unknown";

/// Format a local time the way the root endpoint reports it.
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local wall-clock time, formatted.
pub fn current_timestamp() -> String {
    format_timestamp(&Local::now())
}

/// Hostname of the machine (or container) the process runs in.
///
/// Resolved on every call so a migrated or renamed host is reported as it is
/// now. Falls back to [`UNKNOWN_HOSTNAME`] rather than failing the request.
pub fn hostname() -> String {
    match hostname::get() {
        Ok(name) => match name.into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!("Hostname is not valid UTF-8: {:?}", raw);
                UNKNOWN_HOSTNAME.to_string()
            }
        },
        Err(e) => {
            warn!("Failed to resolve hostname: {}", e);
            UNKNOWN_HOSTNAME.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_is_day_month_year() {
        let time = Local.with_ymd_and_hms(2025, 3, 7, 9, 5, 2).unwrap();
        assert_eq!(format_timestamp(&time), "07/03/2025 09:05:02");
    }

    #[test]
    fn current_timestamp_has_fixed_width() {
        let ts = current_timestamp();
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[2..3], "/");
        assert_eq!(&ts[5..6], "/");
        assert_eq!(&ts[10..11], " ");
    }

    #[test]
    fn hostname_is_never_empty() {
        assert!(!hostname().is_empty());
    }
}
