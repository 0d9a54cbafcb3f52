// ============================================================================
// Basic Usage Example
// ============================================================================

use currency::prelude::*;

fn main() -> Result<(), CurrencyError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Currency Example ===\n");

    // Parse heterogeneous inputs
    let price = Currency::new("$1,234.56")?;
    let refund = Currency::new("(19.99)")?;
    let garbage = Currency::new("not a number")?;

    println!("Parsed \"$1,234.56\"  -> {} ({} minor units)", price, price.int_value());
    println!("Parsed \"(19.99)\"    -> {}", refund);
    println!("Parsed \"not a number\" -> {}", garbage);

    // Arithmetic without float drift
    println!("\n=== Arithmetic ===");
    println!("0.1 + 0.2       = {}", Currency::new(0.1)?.add(0.2)?);
    println!("price + refund  = {}", price.add(refund)?);
    println!("price x 8.25%   = {}", price.multiply(0.0825)?);
    println!("price / 3       = {}", price.divide(3)?);

    match price.divide(0) {
        Ok(result) => println!("price / 0       = {}", result),
        Err(err) => println!("price / 0       -> {}", err),
    }

    // Exact distribution
    println!("\n=== Distribution ===");
    for (i, share) in Currency::new(100)?.distribute(3)?.iter().enumerate() {
        println!("  share {}: {}", i + 1, share.format(Some(true)));
    }
    for (i, share) in Currency::new(100)?.allocate(&[50, 30, 20])?.iter().enumerate() {
        println!("  allocation {}: {}", i + 1, share.format(Some(true)));
    }

    // Reconfigure the process-wide profile
    println!("\n=== Formatting ===");
    println!("US dollar: {}", price.format(Some(true)));

    configure(Settings::euro())?;
    println!("Euro:      {}", price.format(Some(true)));
    println!("Parsed \"1.234,56\" under euro settings -> {}", Currency::new("1.234,56")?.format(None));

    // Separator equal to the decimal marker would not parse back
    if let Err(err) = configure(SettingsUpdate::new().with_separator(",")) {
        println!("Rejected update: {}", err);
    }

    reset_settings();
    println!("Reset:     {}", price.format(Some(true)));

    Ok(())
}
