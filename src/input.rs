//! Reading command input from a file or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read the whole input. `None` or `-` means stdin.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Could not read stdin")?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brief.md");
        std::fs::write(&path, "## Upcoming Events\n").unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), "## Upcoming Events\n");
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = read_input(Some(Path::new("/nonexistent/brief.md"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/brief.md"), "{err}");
    }
}
