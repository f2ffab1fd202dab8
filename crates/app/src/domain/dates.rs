//! Backend date values.

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::{Timestamp, civil::Date, tz::TimeZone};
use serde::{Deserialize, Serialize};

/// A date as the backend emits it.
///
/// Depending on how the backend serializer is configured, dates arrive as an
/// RFC 3339 timestamp, a bare calendar date or epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BackendDate {
    /// RFC 3339 instant, e.g. `2024-10-18T09:30:00.000+00:00`.
    Timestamp(Timestamp),

    /// Calendar date, e.g. `2024-10-18`.
    Date(Date),

    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
}

impl BackendDate {
    /// Calendar date in UTC, when representable.
    #[must_use]
    pub fn date(&self) -> Option<Date> {
        match *self {
            Self::Timestamp(timestamp) => Some(timestamp.to_zoned(TimeZone::UTC).date()),
            Self::Date(date) => Some(date),
            Self::EpochMillis(millis) => Timestamp::from_millisecond(millis)
                .ok()
                .map(|timestamp| timestamp.to_zoned(TimeZone::UTC).date()),
        }
    }
}

impl Display for BackendDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match (self.date(), self) {
            (Some(date), _) => Display::fmt(&date, f),
            (None, Self::EpochMillis(millis)) => Display::fmt(millis, f),
            (None, _) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn accepts_offset_timestamps() -> TestResult {
        let parsed: BackendDate = serde_json::from_str("\"2024-10-18T23:30:00.000+00:00\"")?;

        assert_eq!(parsed.date(), Some(date(2024, 10, 18)));

        Ok(())
    }

    #[test]
    fn accepts_plain_dates() -> TestResult {
        let parsed: BackendDate = serde_json::from_str("\"2024-10-18\"")?;

        assert_eq!(parsed, BackendDate::Date(date(2024, 10, 18)));
        assert_eq!(parsed.to_string(), "2024-10-18");

        Ok(())
    }

    #[test]
    fn accepts_epoch_milliseconds() -> TestResult {
        let parsed: BackendDate = serde_json::from_str("1729209600000")?;

        assert_eq!(parsed.date(), Some(date(2024, 10, 18)));

        Ok(())
    }
}
