//! Conversions for `<input type="datetime-local">` values.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

/// Trimmed picker value, or `None` when nothing was picked.
pub fn picked_value(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Convert a local picker value (`2024-06-01T08:30`) to an ISO-8601 UTC string.
///
/// The browser's timezone is applied through `Date`; outside the browser the
/// value is treated as UTC and normalized to millisecond precision.
pub fn local_to_iso(raw: &str) -> Option<String> {
    let value = picked_value(raw)?;
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(value));
        if date.get_time().is_nan() {
            return None;
        }
        date.to_iso_string().as_string()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        normalize_utc(value)
    }
}

#[cfg(any(test, not(feature = "hydrate")))]
fn normalize_utc(value: &str) -> Option<String> {
    let (date, time) = value.split_once('T')?;
    let mut date_parts = date.split('-');
    let valid_date = date_parts.next().is_some_and(|y| y.len() == 4)
        && date_parts.next().is_some_and(|m| m.len() == 2)
        && date_parts.next().is_some_and(|d| d.len() == 2)
        && date_parts.next().is_none();
    if !valid_date || !date.chars().all(|c| c.is_ascii_digit() || c == '-') {
        return None;
    }
    let time = match time.len() {
        5 => format!("{time}:00.000"),
        8 => format!("{time}.000"),
        _ => return None,
    };
    if !time.chars().all(|c| c.is_ascii_digit() || c == ':' || c == '.') {
        return None;
    }
    Some(format!("{date}T{time}Z"))
}
