// ============================================================================
// Basic Usage Example
// ============================================================================

use radix_convert::prelude::*;
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Radix Convert Example ===\n");

    // Every derivation step is also forwarded to tracing
    let converter = Converter::new(Arc::new(LoggingTraceSink));

    // Integer conversion across bases
    println!("Converting 10101100 (binary) to hexadecimal...");
    let result = converter
        .convert("10101100", Radix::BINARY, Radix::HEXADECIMAL)
        .unwrap();

    println!("  {} (base 2) = {} (base 16)", result.input, result.output);
    println!("  via decimal {}\n", result.decimal);

    println!("Derivation:");
    for line in result.trace_lines() {
        println!("  {}", line);
    }

    // Fractional conversion with the 10-digit truncation policy
    println!("\nConverting 0.1 (decimal) to binary...");
    let fractional = converter
        .convert("0.1", Radix::DECIMAL, Radix::BINARY)
        .unwrap();

    println!("  0.1 (base 10) = {} (base 2)", fractional.output);
    println!("  ({} multiplication steps, truncated)\n", fractional.trace.len() - 1);

    // Error reporting
    println!("Trying to parse \"G\" as hexadecimal...");
    match converter.convert("G", Radix::HEXADECIMAL, Radix::DECIMAL) {
        Ok(_) => unreachable!(),
        Err(error) => println!("  rejected: {}", error),
    }

    // Arbitrary radices up to 36
    println!("\nConverting 255 (decimal) through every base up to 36:");
    for base in 2..=36 {
        let target = Radix::new(base).unwrap();
        let result = converter.convert("255", Radix::DECIMAL, target).unwrap();
        println!("  base {:>2}: {}", base, result.output);
    }
}
