//! # Presentation Formatting Module
//!
//! Turns search results into text for display: the compact replacement
//! annotation shown in the results table, a single table row, and the
//! multi-line detail view of one recipe.

use crate::matching::Replacements;
use crate::search::MatchResult;

/// Render used substitutions as `ingredient→sub1, sub2` entries joined by `", "`
///
/// An empty mapping renders as an empty string.
///
/// # Examples
///
/// ```rust
/// use recipe_finder::formatting::format_replacements;
/// use recipe_finder::matching::Replacements;
///
/// let used: Replacements = [("milk", vec!["cream"]), ("butter", vec!["oil", "ghee"])]
///     .into_iter()
///     .collect();
/// assert_eq!(format_replacements(&used), "milk→cream, butter→oil, ghee");
/// ```
pub fn format_replacements(replacements: &Replacements) -> String {
    replacements
        .iter()
        .map(|(ingredient, substitutes)| format!("{}→{}", ingredient, substitutes.join(", ")))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a result percentage with one decimal place, e.g. `66.7%`
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.1}%", percentage)
}

/// Header line matching the columns of [`format_row`]
pub fn table_header() -> String {
    format!(
        "{:<28} {:>8} {:>6} {:<10} {}",
        "Name", "Match", "Time", "Complexity", "Substitutions used"
    )
}

/// One results-table line: name, match, time, complexity, substitutions used
pub fn format_row(result: &MatchResult) -> String {
    format!(
        "{:<28} {:>8} {:>6} {:<10} {}",
        result.name,
        format_percentage(result.percentage),
        result.time,
        result.complexity,
        result.replacements_info
    )
    .trim_end()
    .to_string()
}

/// Detail view of one result
///
/// Every missing ingredient is annotated with its substitutes, split into
/// those listed as used for the ingredient and all other options, or with
/// `no substitutes found` when there are none.
pub fn describe(result: &MatchResult) -> String {
    let mut lines = vec![
        format!("Recipe: {}", result.name),
        format!("Match: {}", format_percentage(result.percentage)),
        format!("Time: {} min", result.time),
        format!("Complexity: {}", result.complexity),
    ];

    if result.missing.is_empty() {
        lines.push(String::new());
        lines.push("All ingredients available!".to_string());
        return lines.join("\n");
    }

    lines.push(String::new());
    lines.push("Missing ingredients:".to_string());

    for ingredient in &result.missing {
        let mut line = format!("• {}", ingredient);

        let substitutes = result.all_replacements.get(ingredient).unwrap_or_default();
        if substitutes.is_empty() {
            line.push_str(" - no substitutes found");
        } else {
            let used = result.used_replacements.get(ingredient).unwrap_or_default();
            let (available, other): (Vec<&String>, Vec<&String>) =
                substitutes.iter().partition(|s| used.contains(s));

            let mut parts = Vec::new();
            if !available.is_empty() {
                parts.push(format!("Available substitutes: {}", join_refs(&available)));
            }
            if !other.is_empty() {
                parts.push(format!("Other options: {}", join_refs(&other)));
            }
            line.push_str(" - ");
            line.push_str(&parts.join("; "));
        }

        lines.push(line);
    }

    lines.join("\n")
}

fn join_refs(items: &[&String]) -> String {
    items
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Complexity;

    fn result(missing: &[&str], used: Replacements, all: Replacements) -> MatchResult {
        MatchResult {
            name: "Pancakes".to_string(),
            percentage: 200.0 / 3.0,
            time: 25.0,
            complexity: Complexity::Medium,
            missing: missing.iter().map(|s| s.to_string()).collect(),
            replacements_info: format_replacements(&used),
            used_replacements: used,
            all_replacements: all,
        }
    }

    #[test]
    fn test_format_empty_replacements() {
        assert_eq!(format_replacements(&Replacements::new()), "");
    }

    #[test]
    fn test_format_single_replacement() {
        let used: Replacements = [("milk", vec!["cream"])].into_iter().collect();
        assert_eq!(format_replacements(&used), "milk→cream");
    }

    #[test]
    fn test_format_percentage_rounds_to_one_decimal() {
        assert_eq!(format_percentage(200.0 / 3.0), "66.7%");
        assert_eq!(format_percentage(100.0), "100.0%");
    }

    #[test]
    fn test_format_row_contains_columns() {
        let used: Replacements = [("milk", vec!["cream"])].into_iter().collect();
        let row = format_row(&result(&["salt"], used, Replacements::new()));
        assert!(row.starts_with("Pancakes"));
        assert!(row.contains("66.7%"));
        assert!(row.contains("25"));
        assert!(row.contains("medium"));
        assert!(row.ends_with("milk→cream"));
    }

    #[test]
    fn test_describe_all_available() {
        let text = describe(&result(&[], Replacements::new(), Replacements::new()));
        assert!(text.starts_with("Recipe: Pancakes\nMatch: 66.7%\nTime: 25 min\nComplexity: medium"));
        assert!(text.ends_with("All ingredients available!"));
    }

    #[test]
    fn test_describe_missing_with_other_options() {
        let all: Replacements = [("milk", vec!["cream", "kefir"])].into_iter().collect();
        let text = describe(&result(&["milk", "salt"], Replacements::new(), all));

        assert!(text.contains("Missing ingredients:"));
        assert!(text.contains("• milk - Other options: cream, kefir"));
        assert!(text.lines().any(|l| l == "• salt - no substitutes found"));
    }

    #[test]
    fn test_describe_declared_without_substitutes() {
        let all: Replacements = [("saffron", Vec::<&str>::new())].into_iter().collect();
        let text = describe(&result(&["saffron"], Replacements::new(), all));
        assert!(text.contains("• saffron - no substitutes found"));
    }

    #[test]
    fn test_describe_splits_available_and_other() {
        let used: Replacements = [("milk", vec!["kefir"])].into_iter().collect();
        let all: Replacements = [("milk", vec!["cream", "kefir"])].into_iter().collect();
        let text = describe(&result(&["milk"], used, all));
        assert!(text.contains("• milk - Available substitutes: kefir; Other options: cream"));
    }
}
