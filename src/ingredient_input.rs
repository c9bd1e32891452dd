//! # Ingredient Input Module
//!
//! Turns free-form user text into the ingredient list fed to a search.
//!
//! ## Features
//!
//! - Comma separated entry (`"egg, milk , salt"`)
//! - Multi-line text, one ingredient per line, as read from a file
//! - Both styles mixed in the same text
//!
//! Case is left as typed; the match engine folds case itself.

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use std::fs;
use std::path::Path;

// Commas and line breaks both separate ingredients
const SEPARATOR_PATTERN: &str = r"[,\r\n]+";

lazy_static! {
    static ref SEPARATOR_REGEX: Regex =
        Regex::new(SEPARATOR_PATTERN).expect("Ingredient separator pattern should be valid");
}

/// Split user text into trimmed, non-empty ingredient names, keeping their order
///
/// # Examples
///
/// ```rust
/// use recipe_finder::ingredient_input::parse_ingredient_text;
///
/// let ingredients = parse_ingredient_text("egg, milk,,  salt \n cream");
/// assert_eq!(ingredients, vec!["egg", "milk", "salt", "cream"]);
/// ```
pub fn parse_ingredient_text(text: &str) -> Vec<String> {
    let ingredients: Vec<String> = SEPARATOR_REGEX
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    debug!("Parsed {} ingredients from input text", ingredients.len());
    ingredients
}

/// Read an ingredient list from a text file with one ingredient per line
///
/// Blank lines are skipped and surrounding whitespace is trimmed.
pub fn read_ingredient_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    info!("Reading ingredients from file: {}", path.display());

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ingredient file {}", path.display()))?;

    let ingredients: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    info!("Read {} ingredients from {}", ingredients.len(), path.display());
    Ok(ingredients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_comma_separated() {
        assert_eq!(
            parse_ingredient_text("egg,milk, salt"),
            vec!["egg", "milk", "salt"]
        );
    }

    #[test]
    fn test_parse_drops_blank_entries() {
        assert!(parse_ingredient_text("").is_empty());
        assert!(parse_ingredient_text(" , ,\n").is_empty());
        assert_eq!(parse_ingredient_text(",egg,"), vec!["egg"]);
    }

    #[test]
    fn test_parse_keeps_inner_spaces_and_case() {
        assert_eq!(
            parse_ingredient_text("Olive Oil, sour cream"),
            vec!["Olive Oil", "sour cream"]
        );
    }

    #[test]
    fn test_parse_windows_line_endings() {
        assert_eq!(parse_ingredient_text("egg\r\nmilk\r\n"), vec!["egg", "milk"]);
    }

    #[test]
    fn test_read_ingredient_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "egg")?;
        writeln!(file)?;
        writeln!(file, "  cream  ")?;
        writeln!(file, "salt")?;

        let ingredients = read_ingredient_file(file.path())?;
        assert_eq!(ingredients, vec!["egg", "cream", "salt"]);
        Ok(())
    }

    #[test]
    fn test_read_missing_file_fails() {
        let err = read_ingredient_file("/nonexistent/ingredients.txt").unwrap_err();
        assert!(err.to_string().contains("Failed to read ingredient file"));
    }
}
