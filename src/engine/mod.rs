// ============================================================================
// Engine Module
// The decimal-to-string formatting pipeline
// ============================================================================

pub mod bidi;
pub mod cleanup;
pub mod compact;
pub mod formatter;
pub mod grouping;
pub mod presets;
pub mod representation;
pub mod shrink;

pub use compact::{chinese_converter, thousand_converter};
pub use formatter::{format_number, format_number_with, RenderPath};
pub use presets::{
    format_amount, format_amount_with, format_percentage, format_percentage_with, format_price,
    format_price_with,
};
