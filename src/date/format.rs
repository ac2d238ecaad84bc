// ============================================================================
// Date Formatting
// Localized strftime rendering and month-aware arithmetic on chrono types
// ============================================================================

use super::errors::{DateError, DateResult};
use crate::domain::config;
use chrono::format::{Item, StrftimeItems};
use chrono::{Locale, Months, NaiveDate, NaiveDateTime};

/// Locale used when neither the caller nor the environment provides one.
pub const FALLBACK_LOCALE: &str = "en_US";

/// Environment variables consulted for the process locale, in order.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Render `date_time` with a strftime `pattern` in `locale`.
///
/// Without a locale, `use_system_locale` in the global configuration picks
/// between the process locale and [`FALLBACK_LOCALE`].
///
/// # Errors
/// - `InvalidPattern` if the pattern has an unknown specifier
/// - `UnsupportedLocale` if the locale is not recognised
pub fn format_date(
    date_time: NaiveDateTime,
    pattern: &str,
    locale: Option<&str>,
) -> DateResult<String> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(DateError::InvalidPattern(pattern.to_string()));
    }

    let name = match locale {
        Some(name) => normalize_locale(name),
        None => default_locale(),
    };
    let locale = parse_locale(&name)?;

    Ok(date_time
        .and_utc()
        .format_localized(pattern, locale)
        .to_string())
}

/// Shift `date` by `months`, clamping the day to the target month's end
/// (`2024-01-31` + 1 month = `2024-02-29`).
///
/// # Errors
/// Returns `OutOfRange` if the result is not a representable date.
pub fn add_months(date: NaiveDate, months: i32) -> DateResult<NaiveDate> {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.ok_or(DateError::OutOfRange)
}

fn parse_locale(name: &str) -> DateResult<Locale> {
    Locale::try_from(name).map_err(|_| DateError::UnsupportedLocale(name.to_string()))
}

fn default_locale() -> String {
    if !config::current().use_system_locale {
        return FALLBACK_LOCALE.to_string();
    }

    LOCALE_ENV_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| locale_from_env_value(&value))
        .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
}

/// Turn a POSIX locale value (`de_DE.UTF-8@euro`) into a locale name.
/// `None` for empty, `C` and `POSIX`.
pub fn locale_from_env_value(value: &str) -> Option<String> {
    let name = value
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    match name {
        "" | "C" | "POSIX" => None,
        other => Some(normalize_locale(other)),
    }
}

/// BCP-47 style `en-US` to POSIX style `en_US`.
pub fn normalize_locale(name: &str) -> String {
    name.trim().replace('-', "_")
}
