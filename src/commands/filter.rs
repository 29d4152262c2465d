use std::path::Path;

use anyhow::Result;
use eventbrief_core::filter_past_on;
use owo_colors::OwoColorize;

use crate::input::read_input;

pub fn run(file: Option<&Path>, today: Option<String>) -> Result<()> {
    let text = read_input(file)?;
    let reference = super::reference_date(today.as_deref())?;

    let outcome = filter_past_on(&text, reference);
    print!("{}", outcome.text);

    if outcome.lines_removed > 0 {
        eprintln!(
            "{}",
            format!(
                "Removed {} of {} lines dated before {reference}",
                outcome.lines_removed, outcome.lines_in
            )
            .dimmed()
        );
    }
    Ok(())
}
