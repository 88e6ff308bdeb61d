//! UTCTime and GeneralizedTime content.

use asnkit_types::{DecodeError, EncodeError};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

const UTC_TIME: &str = "UTCTime";
const GENERALIZED_TIME: &str = "GeneralizedTime";

/// Consume `n` ASCII digits.
fn digits(input: &mut &[u8], n: usize) -> Option<u32> {
    let (head, rest) = (input.get(..n)?, input.get(n..)?);
    if !head.iter().all(u8::is_ascii_digit) {
        return None;
    }
    *input = rest;
    Some(head.iter().fold(0, |acc, &b| acc * 10 + (b - b'0') as u32))
}

/// Parse the zone suffix. `None` offset means the suffix was absent.
fn zone(input: &[u8], kind: &'static str) -> Result<Option<FixedOffset>, DecodeError> {
    let bad = || DecodeError::content(kind, "invalid time zone");
    match input {
        [] => Ok(None),
        [b'Z'] => Ok(FixedOffset::east_opt(0)),
        [sign @ (b'+' | b'-'), rest @ ..] => {
            let mut rest = rest;
            let hours = digits(&mut rest, 2).ok_or_else(bad)?;
            let minutes = digits(&mut rest, 2).ok_or_else(bad)?;
            if !rest.is_empty() || hours > 23 || minutes > 59 {
                return Err(bad());
            }
            let secs = (hours * 3600 + minutes * 60) as i32;
            let secs = if *sign == b'-' { -secs } else { secs };
            FixedOffset::east_opt(secs).map(Some).ok_or_else(bad)
        }
        _ => Err(bad()),
    }
}

fn to_utc(
    local: NaiveDateTime,
    offset: Option<FixedOffset>,
    kind: &'static str,
) -> Result<DateTime<Utc>, DecodeError> {
    match offset {
        None => Ok(Utc.from_utc_datetime(&local)),
        Some(offset) => offset
            .from_local_datetime(&local)
            .single()
            .map(|t| t.with_timezone(&Utc))
            .ok_or(DecodeError::content(kind, "time out of range")),
    }
}

/// Parse `YYMMDDhhmm[ss](Z|+hhmm|-hhmm)`. Years below 50 fall in the 2000s.
pub(crate) fn parse_utc_time(content: &[u8]) -> Result<DateTime<Utc>, DecodeError> {
    let bad = || DecodeError::content(UTC_TIME, "malformed time");
    let mut input = content;

    let yy = digits(&mut input, 2).ok_or_else(bad)?;
    let month = digits(&mut input, 2).ok_or_else(bad)?;
    let day = digits(&mut input, 2).ok_or_else(bad)?;
    let hour = digits(&mut input, 2).ok_or_else(bad)?;
    let minute = digits(&mut input, 2).ok_or_else(bad)?;
    let second = digits(&mut input, 2).unwrap_or(0);

    let offset = zone(input, UTC_TIME)?.ok_or_else(bad)?;
    let year = if yy < 50 { 2000 + yy as i32 } else { 1900 + yy as i32 };
    let local = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .ok_or_else(bad)?;
    to_utc(local, Some(offset), UTC_TIME)
}

/// Parse `YYYYMMDDhh[mm[ss[.fff]]][Z|+hhmm|-hhmm]`; no zone reads as UTC.
pub(crate) fn parse_generalized_time(content: &[u8]) -> Result<DateTime<Utc>, DecodeError> {
    let bad = || DecodeError::content(GENERALIZED_TIME, "malformed time");
    let mut input = content;

    let year = digits(&mut input, 4).ok_or_else(bad)? as i32;
    let month = digits(&mut input, 2).ok_or_else(bad)?;
    let day = digits(&mut input, 2).ok_or_else(bad)?;
    let hour = digits(&mut input, 2).ok_or_else(bad)?;
    let mut minute = 0;
    let mut second = 0;
    let mut nanos = 0;
    if let Some(m) = digits(&mut input, 2) {
        minute = m;
        if let Some(s) = digits(&mut input, 2) {
            second = s;
            if let [b'.' | b',', rest @ ..] = input {
                let len = rest.iter().take_while(|b| b.is_ascii_digit()).count();
                if len == 0 {
                    return Err(bad());
                }
                let (fraction, tail) = rest.split_at(len);
                // Nanosecond precision; further digits are dropped.
                nanos = fraction
                    .iter()
                    .chain(std::iter::repeat(&b'0'))
                    .take(9)
                    .fold(0, |acc, &b| acc * 10 + (b - b'0') as u32);
                input = tail;
            }
        }
    }

    let offset = zone(input, GENERALIZED_TIME)?;
    let local = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_nano_opt(hour, minute, second, nanos))
        .ok_or_else(bad)?;
    to_utc(local, offset, GENERALIZED_TIME)
}

/// `YYMMDDhhmmssZ`, for whole seconds in years 1950 through 2049.
pub(crate) fn format_utc_time(time: &DateTime<Utc>) -> Result<String, EncodeError> {
    if !(1950..=2049).contains(&time.year()) {
        return Err(EncodeError::TimeOutOfRange);
    }
    if time.nanosecond() != 0 {
        return Err(EncodeError::TimePrecision);
    }
    Ok(time.format("%y%m%d%H%M%SZ").to_string())
}

/// `YYYYMMDDhhmmss[.f]Z` with trailing fraction zeros removed.
pub(crate) fn format_generalized_time(time: &DateTime<Utc>) -> Result<String, EncodeError> {
    if !(0..=9999).contains(&time.year()) {
        return Err(EncodeError::TimeOutOfRange);
    }
    let mut out = time.format("%Y%m%d%H%M%S").to_string();
    let nanos = time.nanosecond() % 1_000_000_000;
    if nanos != 0 {
        let fraction = format!("{nanos:09}");
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out.push('Z');
    Ok(out)
}
