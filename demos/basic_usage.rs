// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_display::prelude::*;
use rust_decimal::Decimal;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Decimal Display Example ===\n");

    let values: Vec<Decimal> = ["1234567.891", "0.000001234", "-0.4567", "9876543210.1"]
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    println!("Plain / grouped / compact:");
    let grouped = FormatOptions::new().with_grouping(true).with_precision(2);
    let compact = FormatOptions::new().with_compact(true).with_precision(2);
    for value in &values {
        println!(
            "  {:>16} | {:>18} | {:>10}",
            format_number(*value, &FormatOptions::new()),
            format_number(*value, &grouped),
            format_number(*value, &compact),
        );
    }

    println!("\nPresets:");
    for value in &values {
        println!(
            "  pct {:>18}  price {:>18}  amount {:>10}",
            format_percentage(*value, &FormatOptions::new()),
            format_price(*value, &FormatOptions::new()),
            format_amount(*value, &FormatOptions::new()),
        );
    }

    // Switch process-wide defaults to a European style with shrunk zeros
    println!("\n=== European defaults ===");
    configure(
        ConfigUpdate::new()
            .with_group_separator(".")
            .with_decimal_separator(",")
            .with_shrink_zero_mode(Some(ShrinkZeroMode::Subscript)),
    );
    for value in &values {
        println!("  {}", format_price(*value, &FormatOptions::new()));
    }

    // Large-number units for Chinese locales
    configure(ConfigUpdate::new().with_compact_converter(Some(CompactFn::new(chinese_converter))));
    println!("\nChinese units: {}", format_amount(values[3], &FormatOptions::new()));

    reset();

    println!("\nString input: {}", "42.5000".format_price(&FormatOptions::new()));
    let missing = FormatOptions::new().with_def_if_null("--");
    println!("Missing value: {}", "n/a".format_number(&missing));
}
