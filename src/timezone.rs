//! Resolves canonical timezone names.

use time_tz::Tz;

use crate::Error;

/// Look up a timezone by its canonical name, e.g. "Pacific/Auckland".
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if `canonical_timezone` is not a known timezone.
pub fn get_timezone(canonical_timezone: &str) -> Result<&'static Tz, Error> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .ok_or_else(|| Error::InvalidTimezoneError(canonical_timezone.to_owned()))
}

#[cfg(test)]
mod tests {
    use time::{UtcOffset, macros::datetime};
    use time_tz::{Offset, TimeZone};

    use crate::Error;

    use super::get_timezone;

    #[test]
    fn finds_utc() {
        let timezone = get_timezone("Etc/UTC").unwrap();

        let offset = timezone.get_offset_utc(&datetime!(2024-07-15 00:00 UTC)).to_utc();
        assert_eq!(offset, UtcOffset::UTC);
    }

    #[test]
    fn offset_follows_daylight_saving() {
        let auckland = get_timezone("Pacific/Auckland").unwrap();

        let summer = auckland.get_offset_utc(&datetime!(2024-01-15 00:00 UTC)).to_utc();
        let winter = auckland.get_offset_utc(&datetime!(2024-07-15 00:00 UTC)).to_utc();

        assert_eq!(summer, UtcOffset::from_hms(13, 0, 0).unwrap());
        assert_eq!(winter, UtcOffset::from_hms(12, 0, 0).unwrap());
    }

    #[test]
    fn unknown_zone_is_an_error() {
        assert_eq!(
            get_timezone("Mars/Olympus_Mons").map(|timezone| timezone.name()),
            Err(Error::InvalidTimezoneError("Mars/Olympus_Mons".to_owned()))
        );
    }
}
