/*!
 * Time codes for subtitle paragraphs.
 *
 * A `TimeCode` is a signed millisecond offset from the start of the timeline.
 * Nothing stops a time code from going negative or past any upper bound:
 * negative and overlapping durations are repaired by the fix rules, not
 * rejected here.
 */

use std::fmt;

use crate::errors::TimeCodeError;

// @struct: Signed millisecond offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeCode {
    // @field: Total milliseconds, may be negative
    total_milliseconds: i64,
}

impl TimeCode {
    pub const ZERO: TimeCode = TimeCode { total_milliseconds: 0 };

    // @creates: Time code from total milliseconds
    pub fn from_millis(total_milliseconds: i64) -> Self {
        Self { total_milliseconds }
    }

    // @creates: Time code from clock fields
    pub fn from_hms(hours: i64, minutes: i64, seconds: i64, milliseconds: i64) -> Self {
        Self {
            total_milliseconds: ((hours * 60 + minutes) * 60 + seconds) * 1000 + milliseconds,
        }
    }

    pub fn total_milliseconds(&self) -> i64 {
        self.total_milliseconds
    }

    pub fn set_total_milliseconds(&mut self, total_milliseconds: i64) {
        self.total_milliseconds = total_milliseconds;
    }

    pub fn total_seconds(&self) -> f64 {
        self.total_milliseconds as f64 / 1000.0
    }

    pub fn is_negative(&self) -> bool {
        self.total_milliseconds < 0
    }

    pub fn hours(&self) -> i64 {
        self.total_milliseconds.abs() / 3_600_000
    }

    pub fn minutes(&self) -> i64 {
        (self.total_milliseconds.abs() % 3_600_000) / 60_000
    }

    pub fn seconds(&self) -> i64 {
        (self.total_milliseconds.abs() % 60_000) / 1_000
    }

    pub fn milliseconds(&self) -> i64 {
        self.total_milliseconds.abs() % 1_000
    }

    /// Hundredths of a second, truncated, as used by the SubStation family.
    pub fn centiseconds(&self) -> i64 {
        self.milliseconds() / 10
    }

    /// Parse four numeric fields separated by any of `separators`.
    ///
    /// The last field is multiplied by `fraction_scale` to get milliseconds,
    /// so `"0:00:01.50"` with scale 10 is 1500 ms and `"00:00:01,500"` with
    /// scale 1 is also 1500 ms.
    pub fn parse_fields(
        text: &str,
        separators: &[char],
        fraction_scale: i64,
    ) -> Result<Self, TimeCodeError> {
        let parts: Vec<&str> = text.trim().split(separators).collect();
        if parts.len() != 4 {
            return Err(TimeCodeError::FieldCount(text.to_string()));
        }

        let mut fields = [0i64; 4];
        for (field, part) in fields.iter_mut().zip(&parts) {
            *field = part
                .trim()
                .parse()
                .map_err(|_| TimeCodeError::InvalidField(text.to_string()))?;
        }

        let [hours, minutes, seconds, fraction] = fields;
        Ok(Self::from_hms(hours, minutes, seconds, fraction * fraction_scale))
    }

    /// Format as `HH:MM:SS,mmm`, the SubRip layout.
    pub fn to_srt_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{:02}:{:02}:{:02},{:03}",
            sign,
            self.hours(),
            self.minutes(),
            self.seconds(),
            self.milliseconds()
        )
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_srt_string())
    }
}

impl std::ops::Add<i64> for TimeCode {
    type Output = TimeCode;

    fn add(self, milliseconds: i64) -> TimeCode {
        TimeCode::from_millis(self.total_milliseconds + milliseconds)
    }
}

impl std::ops::Sub for TimeCode {
    type Output = i64;

    fn sub(self, other: TimeCode) -> i64 {
        self.total_milliseconds - other.total_milliseconds
    }
}
