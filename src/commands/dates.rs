use std::path::Path;

use anyhow::Result;
use eventbrief_core::extract_dates;
use owo_colors::OwoColorize;

use crate::input::read_input;

pub fn run(file: Option<&Path>) -> Result<()> {
    let text = read_input(file)?;
    let dates = extract_dates(&text);

    if dates.is_empty() {
        eprintln!("{}", "No dates found".dimmed());
        return Ok(());
    }

    for date in dates {
        println!("{date}");
    }
    Ok(())
}
