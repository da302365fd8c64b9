use std::path::Path;

use crate::team::TeamFile;

pub fn run(file: &Path) -> Result<(), String> {
    let team = TeamFile::load(file)?;

    let problems = team.problems();
    if !problems.is_empty() {
        return Err(format!(
            "{} problem(s) in '{}':\n  {}",
            problems.len(),
            team.name,
            problems.join("\n  ")
        ));
    }

    println!("  All checks passed for '{}'.", team.name);
    println!(
        "  {} cards, {} batters, {} fielders",
        team.cards.len(),
        team.batting_order.len(),
        team.fielders.len()
    );

    Ok(())
}
