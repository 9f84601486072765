// ============================================================================
// Basic Usage Example
// ============================================================================

use exact_money::prelude::*;
use rust_decimal::Decimal;

fn main() -> MoneyResult<()> {
    println!("=== Exact Money Example ===\n");

    // One registry per process, built at startup.
    let registry = CurrencyRegistry::new();
    let eur = registry.eur()?;
    let chips = registry.define("CHIP", 1)?;

    // Arithmetic stays in exact sub-units; decimal input converts without
    // a float detour, so 19.99 really is 1999 cents.
    let price = Money::from_decimal(Decimal::new(1999, 2), &eur)?;
    let shipping = Money::of_sub_units(495, &eur);
    let total = price.plus(&shipping)?;
    println!("Order total: {} ({} main units)", total, total.main_units());

    // Split the bill three ways without losing a cent.
    println!("\nSplitting {} three ways...", total);
    let split = total.allocate(Portions::equal(3))?;
    for (key, share) in split.iter() {
        println!("  diner {}: {}", key, share);
    }
    println!("  sum: {}", split.total()?.expect("non-empty split"));

    // Weighted allocation: the biggest stake is first in line for the
    // leftover sub-units.
    println!("\nDistributing {} by stake...", total);
    let payout = total.allocate(Portions::labeled([
        ("founder", 50.0),
        ("investor", 35.0),
        ("employee-pool", 15.0),
    ]))?;
    for (key, share) in payout.iter() {
        println!("  {}: {}", key, share);
    }

    // Indivisible currencies work the same way.
    let pot = chips.amount_of_sub_units(1000);
    let winners = pot.allocate(Portions::weights([2.0, 1.0, 1.0]))?;
    println!("\nChip pot {} paid out:", pot);
    for (key, share) in winners.iter() {
        println!("  seat {}: {}", key, share);
    }

    // Cross-currency arithmetic is refused, not silently coerced.
    match total.plus(&pot) {
        Err(err) => println!("\nAs expected: {}", err),
        Ok(_) => unreachable!("EUR + CHIP must not succeed"),
    }

    Ok(())
}
