//! Embedded file metadata
//!
//! Timestamp strings for the PNG `Creation Time` text chunk (RFC 1123)
//! and the TIFF `DateTime` tag (`YYYY:MM:DD HH:MM:SS`). Both are opaque
//! to the core; only the codec layer produces them.

use chrono::{Local, Utc};

/// Current time in RFC 1123 form, as PNG `Creation Time` wants it.
pub(crate) fn creation_time_rfc1123() -> String {
    Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Current local time in TIFF `DateTime` form.
pub(crate) fn tiff_datetime() -> String {
    Local::now().format("%Y:%m:%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc1123_shape() {
        let s = creation_time_rfc1123();
        assert!(s.ends_with("GMT"), "{s}");
        assert_eq!(s.matches(':').count(), 2);
    }

    #[test]
    fn test_tiff_datetime_shape() {
        // TIFF fixes the DateTime field at 19 characters
        assert_eq!(tiff_datetime().len(), 19);
    }
}
