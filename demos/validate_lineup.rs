//! Lineup Validation
//!
//! This example validates a contest lineup, then breaks it and shows
//! every violation reported at once.
//!
//! Run with: cargo run --example validate_lineup

use lineup_rules::core::{PlayerEntry, Position};
use lineup_rules::enforcement::LineupRules;
use lineup_rules::validate_lineup;
use stillwater::validation::Validation;

fn main() {
    println!("=== Lineup Validation Example ===\n");

    let mut lineup = vec![
        PlayerEntry::new(1i64, "Chris Sale", Position::Pitcher, 12i64, 123i64, 9500),
        PlayerEntry::new(2i64, "Yadier Molina", Position::Catcher, 22i64, 115i64, 2500),
        PlayerEntry::new(3i64, "Luke Voit", Position::FirstBase, 20i64, 115i64, 2800),
        PlayerEntry::new(4i64, "Dee Gordon", Position::SecondBase, 18i64, 101i64, 3200),
        PlayerEntry::new(5i64, "Manny Machado", Position::ThirdBase, 14i64, 134i64, 3100),
        PlayerEntry::new(6i64, "Troy Tulowitzki", Position::Shortstop, 27i64, 126i64, 3300),
        PlayerEntry::new(7i64, "Andrew McCutchen", Position::Outfield, 11i64, 131i64, 3800),
        PlayerEntry::new(8i64, "Bryce Harper", Position::Outfield, 15i64, 119i64, 3800),
        PlayerEntry::new(9i64, "Mookie Betts", Position::Outfield, 12i64, 123i64, 3600),
    ];

    println!("Example 1: Standard lineup");
    println!("  Valid: {}\n", validate_lineup(&lineup));

    println!("Example 2: Extra outfielder from a stacked team");
    lineup.push(PlayerEntry::new(10i64, "J.D. Martinez", Position::Outfield, 12i64, 123i64, 12000));

    match LineupRules::default().enforce(&lineup) {
        Validation::Success(_) => println!("  Unexpectedly valid"),
        Validation::Failure(violations) => {
            println!("  {} violations:", violations.len());
            for violation in violations.iter() {
                println!("    - {violation}");
            }
        }
    }

    println!("\n=== Example Complete ===");
}
