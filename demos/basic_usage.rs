// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_engine::prelude::*;

fn main() {
    println!("=== Decimal Engine Example ===\n");

    // Exact arithmetic where floats drift
    let a: Decimal = "0.1".parse().unwrap();
    let b: Decimal = "0.2".parse().unwrap();
    let sum = a.checked_add(b).unwrap();
    println!("0.1 + 0.2 = {}", sum);

    // Division carries up to 28 fractional digits
    let third = Decimal::ONE.checked_div(Decimal::from(3)).unwrap();
    println!("1 / 3     = {}", third);

    // Overflow is an error, never a silent wrap
    match Decimal::MAX.checked_add(Decimal::ONE) {
        Ok(value) => println!("unexpected: {}", value),
        Err(error) => println!("MAX + 1   -> {}", error),
    }

    // The 4-word encoding round-trips exactly
    let price: Decimal = "123.4500".parse().unwrap();
    let bits = price.to_bits();
    let back = Decimal::from_bits(bits).unwrap();
    println!("\n{} encodes as {:?} (scale {})", price, bits, back.scale());

    // Locale rules are passed explicitly
    let german = NumberFormat::de_de();
    let amount: Decimal = "1234567.891".parse().unwrap();
    println!("\nInvariant: {}", format_with(&amount, "N2", &NumberFormat::invariant()).unwrap());
    println!("German:    {}", format_with(&amount, "N2", &german).unwrap());
    println!("Currency:  {}", format_with(&amount.negate(), "C", &german).unwrap());

    // Styles gate the parse grammar
    let refund = parse_with("($1,234.50)", ParseStyle::CURRENCY, &NumberFormat::invariant());
    println!("\nParsed currency refund: {:?}", refund.map(|d| d.to_string()));
}
