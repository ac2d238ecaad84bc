// ============================================================================
// Date Module
// Localized date rendering and month arithmetic used alongside numbers
// ============================================================================

mod errors;
mod format;

pub use errors::{DateError, DateResult};
pub use format::{
    add_months, format_date, locale_from_env_value, normalize_locale, FALLBACK_LOCALE,
};
