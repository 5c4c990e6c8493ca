//! Implements a struct that holds the state of the REST server.

use crate::{Error, timezone::get_timezone};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// Timeline dates are shown in this timezone.
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState].
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an error if `local_timezone` is not a known timezone.
    pub fn new(local_timezone: &str) -> Result<Self, Error> {
        get_timezone(local_timezone)?;

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::AppState;

    #[test]
    fn accepts_canonical_timezone() {
        let state = AppState::new("Pacific/Auckland").unwrap();

        assert_eq!(state.local_timezone, "Pacific/Auckland");
    }

    #[test]
    fn rejects_unknown_timezone() {
        let result = AppState::new("Nowhere/Special");

        assert_eq!(
            result.map(|state| state.local_timezone),
            Err(Error::InvalidTimezoneError("Nowhere/Special".to_owned()))
        );
    }
}
