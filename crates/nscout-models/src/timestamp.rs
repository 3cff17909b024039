//! Scraper upload-date conversion.
//!
//! The scraper reports upload dates as bare `YYYYMMDD` strings with no
//! timezone. They are treated as UTC midnight and rendered as ISO-8601.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum UploadDateError {
    #[error("invalid upload date: {0}")]
    Invalid(String),
}

/// Convert a scraper `YYYYMMDD` upload date to an ISO-8601 timestamp at
/// UTC midnight.
pub fn upload_date_to_iso(upload_date: &str) -> Result<String, UploadDateError> {
    let date = NaiveDate::parse_from_str(upload_date, "%Y%m%d")
        .map_err(|_| UploadDateError::Invalid(upload_date.to_string()))?;
    let dt: DateTime<Utc> = Utc
        .from_utc_datetime(&date.and_hms_opt(0, 0, 0).expect("midnight is valid"));
    Ok(dt.to_rfc3339())
}

/// Convert an ISO-8601 timestamp back to the scraper's `YYYYMMDD` form.
pub fn iso_to_upload_date(iso: &str) -> Result<String, UploadDateError> {
    let dt = DateTime::parse_from_rfc3339(iso)
        .map_err(|_| UploadDateError::Invalid(iso.to_string()))?;
    Ok(dt.with_timezone(&Utc).format("%Y%m%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_date_to_iso() {
        let iso = upload_date_to_iso("20240115").unwrap();
        assert!(iso.starts_with("2024-01-15T00:00:00"));
    }

    #[test]
    fn test_round_trip() {
        for date in ["20240115", "19991231", "20200229"] {
            let iso = upload_date_to_iso(date).unwrap();
            assert_eq!(iso_to_upload_date(&iso).unwrap(), date);
        }
    }

    #[test]
    fn test_invalid_dates_rejected() {
        assert!(upload_date_to_iso("2024").is_err());
        assert!(upload_date_to_iso("20241350").is_err());
        assert!(upload_date_to_iso("not-a-date").is_err());
        assert!(iso_to_upload_date("20240115").is_err());
    }
}
