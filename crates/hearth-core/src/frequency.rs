//! Usage frequencies for limited actions and feats.
//!
//! A frequency says how many times an ability may be used per period.
//! Periods are either one of the keywords `turn`, `round`, `day`, or an
//! ISO-8601 duration such as `PT10M`, `PT1H`, or `P1W`.

use std::fmt;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// The period after which a frequency resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FrequencyPeriod {
    /// Once per turn.
    Turn,
    /// Once per round.
    Round,
    /// Once per day.
    Day,
    /// A fixed span of time.
    Duration(TimeDelta),
}

impl FrequencyPeriod {
    /// Parse a period from its keyword or ISO-8601 form.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "turn" => return Ok(Self::Turn),
            "round" => return Ok(Self::Round),
            "day" => return Ok(Self::Day),
            _ => {}
        }
        parse_iso_duration(trimmed)
            .map(Self::Duration)
            .ok_or_else(|| CoreError::InvalidPeriod(s.to_string()))
    }

    /// The fixed span of a duration period, if this is one.
    pub fn span(&self) -> Option<TimeDelta> {
        match self {
            Self::Duration(d) => Some(*d),
            _ => None,
        }
    }
}

/// Parse `P[nY][nM][nW][nD][T[nH][nM][nS]]` into a time span.
///
/// Months count as 30 days and years as 365 days. Returns `None` for
/// anything malformed, including a bare `P` or `PT`.
fn parse_iso_duration(s: &str) -> Option<TimeDelta> {
    let body = s.to_ascii_uppercase();
    let body = body.strip_prefix('P')?;
    let (date_part, time_part) = match body.split_once('T') {
        Some((d, t)) => {
            if t.is_empty() {
                return None;
            }
            (d, Some(t))
        }
        None => (body, None),
    };
    if date_part.is_empty() && time_part.is_none() {
        return None;
    }

    let mut seconds: i64 = 0;
    for (n, unit) in components(date_part)? {
        let scale = match unit {
            'Y' => 365 * DAY,
            'M' => 30 * DAY,
            'W' => 7 * DAY,
            'D' => DAY,
            _ => return None,
        };
        seconds = seconds.checked_add(n.checked_mul(scale)?)?;
    }
    if let Some(time) = time_part {
        for (n, unit) in components(time)? {
            let scale = match unit {
                'H' => HOUR,
                'M' => MINUTE,
                'S' => 1,
                _ => return None,
            };
            seconds = seconds.checked_add(n.checked_mul(scale)?)?;
        }
    }
    TimeDelta::try_seconds(seconds)
}

/// Split `"1D12H"`-style text into `(number, unit)` pairs.
fn components(s: &str) -> Option<Vec<(i64, char)>> {
    let mut out = Vec::new();
    let mut digits = String::new();
    for c in s.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else {
            if digits.is_empty() {
                return None;
            }
            out.push((digits.parse().ok()?, c));
            digits.clear();
        }
    }
    // Trailing digits without a unit
    if !digits.is_empty() {
        return None;
    }
    Some(out)
}

impl TryFrom<String> for FrequencyPeriod {
    type Error = CoreError;

    fn try_from(s: String) -> CoreResult<Self> {
        Self::parse(&s)
    }
}

impl From<FrequencyPeriod> for String {
    fn from(period: FrequencyPeriod) -> Self {
        period.to_string()
    }
}

impl fmt::Display for FrequencyPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Turn => write!(f, "turn"),
            Self::Round => write!(f, "round"),
            Self::Day => write!(f, "day"),
            Self::Duration(d) => {
                let total = d.num_seconds();
                if total == 0 {
                    return write!(f, "PT0S");
                }
                let days = total / DAY;
                let hours = (total % DAY) / HOUR;
                let minutes = (total % HOUR) / MINUTE;
                let secs = total % MINUTE;
                write!(f, "P")?;
                if days > 0 {
                    write!(f, "{days}D")?;
                }
                if hours > 0 || minutes > 0 || secs > 0 {
                    write!(f, "T")?;
                    if hours > 0 {
                        write!(f, "{hours}H")?;
                    }
                    if minutes > 0 {
                        write!(f, "{minutes}M")?;
                    }
                    if secs > 0 {
                        write!(f, "{secs}S")?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// How often a limited ability may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frequency {
    /// Uses remaining in the current period.
    pub value: i32,
    /// Uses available per period.
    pub max: i32,
    /// The period after which uses reset.
    pub per: FrequencyPeriod,
}

impl Frequency {
    /// A frequency with all uses remaining.
    pub fn new(max: i32, per: FrequencyPeriod) -> Self {
        Self {
            value: max,
            max,
            per,
        }
    }

    /// Returns true if at least one use has been spent this period.
    pub fn is_spent(&self) -> bool {
        self.value < self.max
    }
}
