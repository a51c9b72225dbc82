use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::{RoundMode, ToSpan, Unit, Zoned, ZonedRound};

/// Wire format of the time field, matching an HTML `datetime-local` value.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

const DISPLAY_FORMAT: &str = "%B %-d, %Y at %-I:%M %p";

/// Earliest bookable call time: one calendar day from now, truncated to
/// minute precision. Calendar arithmetic, so the gap is 23 to 25 hours
/// across DST transitions.
pub fn minimum_call_time() -> Result<Zoned, jiff::Error> {
    let tomorrow = Zoned::now().checked_add(1.day())?;
    tomorrow.round(ZonedRound::new().smallest(Unit::Minute).mode(RoundMode::Trunc))
}

/// The minimum call time rendered in the time field's own format, suitable
/// as the lower bound of the input range.
pub fn minimum_call_time_bound() -> Result<String, jiff::Error> {
    Ok(minimum_call_time()?.strftime(INPUT_FORMAT).to_string())
}

/// Renders the raw time field (ISO-local, seconds optional) as a
/// human-readable local date and time for the relay body.
pub fn format_call_time(raw: &str) -> Result<String, jiff::Error> {
    let local: DateTime = raw.parse()?;
    let zoned = local.to_zoned(TimeZone::system())?;
    Ok(zoned.strftime(DISPLAY_FORMAT).to_string())
}
