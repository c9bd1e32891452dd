//! # Match Engine Module
//!
//! Scores a single recipe against the ingredients a user has on hand.
//!
//! ## Scoring rules
//!
//! - An ingredient the user has (case-insensitive) counts as a match.
//! - Otherwise its substitutes are looked up in the full [`SubstitutionGraph`].
//!   If any of them is on hand, the ingredient still counts as a match and
//!   the substitutes on hand are reported as *used*.
//! - Anything else is reported as *missing*.
//!
//! Substitution is followed one hop only: substitutes of substitutes are
//! never considered.

use log::trace;
use serde::Serialize;
use std::collections::HashSet;

use crate::catalog::Recipe;
use crate::substitutions::SubstitutionGraph;

/// The ingredients a user has on hand, case-folded for comparison
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIngredients {
    items: HashSet<String>,
}

impl UserIngredients {
    /// Build the set from raw names; names are trimmed and lowercased, blanks are dropped
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items = ingredients
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        Self { items }
    }

    /// Whether `ingredient` is on hand, compared case-insensitively
    pub fn contains(&self, ingredient: &str) -> bool {
        self.items.contains(&ingredient.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for UserIngredients {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Insertion-ordered mapping from an ingredient to a list of substitutes
///
/// Entries keep the order in which the recipe declares its ingredients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Replacements {
    entries: Vec<(String, Vec<String>)>,
}

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record substitutes for an ingredient, replacing any previous entry for it
    pub fn insert(&mut self, ingredient: String, substitutes: Vec<String>) {
        match self.entries.iter_mut().find(|(k, _)| *k == ingredient) {
            Some((_, existing)) => *existing = substitutes,
            None => self.entries.push((ingredient, substitutes)),
        }
    }

    pub fn get(&self, ingredient: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == ingredient)
            .map(|(_, v)| v.as_slice())
    }

    pub fn contains_key(&self, ingredient: &str) -> bool {
        self.get(ingredient).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V, S> FromIterator<(K, V)> for Replacements
where
    K: Into<String>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut replacements = Replacements::new();
        for (ingredient, substitutes) in iter {
            replacements.insert(
                ingredient.into(),
                substitutes.into_iter().map(Into::into).collect(),
            );
        }
        replacements
    }
}

/// Outcome of scoring one recipe against one set of user ingredients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchOutcome {
    /// Share of required ingredients covered, 0.0 to 100.0
    pub percentage: f64,
    /// Ingredients neither on hand nor covered by a substitute, lowercase, recipe order
    pub missing: Vec<String>,
    /// For each covered-by-substitute ingredient, the substitutes on hand
    pub used_replacements: Replacements,
    /// For each ingredient not on hand, every substitute the graph knows (possibly none)
    pub all_replacements: Replacements,
}

/// Score `recipe` against the user's ingredients
///
/// # Arguments
///
/// * `recipe` - The recipe to score
/// * `graph` - The catalog-wide substitution graph (not the recipe-local mapping)
/// * `user` - Ingredients on hand
///
/// # Returns
///
/// A [`MatchOutcome`]; a recipe declaring no ingredients scores 0.
///
/// # Examples
///
/// ```rust
/// use recipe_finder::catalog::Catalog;
/// use recipe_finder::matching::{score, UserIngredients};
/// use recipe_finder::substitutions::SubstitutionGraph;
///
/// let catalog = Catalog::from_json_str(r#"[
///     {"name": "Omelette", "ingredients": ["egg", "milk", "salt"], "time": 10,
///      "complexity": "light", "replacements": {"milk": ["cream"]}}
/// ]"#)?;
/// let graph = SubstitutionGraph::build(catalog.recipes());
/// let user = UserIngredients::new(["Egg", "cream", "salt"]);
///
/// let outcome = score(&catalog.recipes()[0], &graph, &user);
/// assert_eq!(outcome.percentage, 100.0);
/// assert!(outcome.missing.is_empty());
/// assert_eq!(outcome.used_replacements.get("milk").unwrap(), ["cream"]);
/// # Ok::<(), recipe_finder::catalog::LoadError>(())
/// ```
pub fn score(recipe: &Recipe, graph: &SubstitutionGraph, user: &UserIngredients) -> MatchOutcome {
    let mut matches = 0usize;
    let mut missing = Vec::new();
    let mut used_replacements = Replacements::new();
    let mut all_replacements = Replacements::new();

    for ingredient in recipe.ingredients.iter().map(|i| i.to_lowercase()) {
        if user.contains(&ingredient) {
            matches += 1;
            continue;
        }

        let known = graph.substitutes(&ingredient);
        let available: Vec<String> = known
            .unwrap_or_default()
            .iter()
            .filter(|sub| user.contains(sub))
            .cloned()
            .collect();

        all_replacements.insert(ingredient.clone(), known.unwrap_or_default().to_vec());

        if available.is_empty() {
            trace!("'{}' is missing for recipe '{}'", ingredient, recipe.name);
            missing.push(ingredient);
        } else {
            trace!(
                "'{}' covered by {:?} for recipe '{}'",
                ingredient,
                available,
                recipe.name
            );
            matches += 1;
            used_replacements.insert(ingredient, available);
        }
    }

    let total = recipe.ingredients.len();
    let percentage = if total > 0 {
        matches as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    MatchOutcome {
        percentage,
        missing,
        used_replacements,
        all_replacements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Complexity, LocalReplacements};

    fn recipe(ingredients: &[&str], replacements: Vec<(&str, Vec<&str>)>) -> Recipe {
        Recipe {
            name: "Test".to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            time: 10.0,
            complexity: Complexity::Light,
            replacements: LocalReplacements::new(
                replacements
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.into_iter().map(String::from).collect()))
                    .collect(),
            ),
        }
    }

    fn score_one(recipe: &Recipe, user: &[&str]) -> MatchOutcome {
        let graph = SubstitutionGraph::build(std::slice::from_ref(recipe));
        score(recipe, &graph, &UserIngredients::new(user))
    }

    #[test]
    fn test_user_ingredients_case_folded_and_trimmed() {
        let user = UserIngredients::new([" Egg ", "MILK", "", "   "]);
        assert_eq!(user.len(), 2);
        assert!(user.contains("egg"));
        assert!(user.contains("Milk"));
    }

    #[test]
    fn test_direct_matches() {
        let outcome = score_one(&recipe(&["Egg", "milk"], vec![]), &["egg", "MILK"]);
        assert_eq!(outcome.percentage, 100.0);
        assert!(outcome.missing.is_empty());
        assert!(outcome.used_replacements.is_empty());
        assert!(outcome.all_replacements.is_empty());
    }

    #[test]
    fn test_substitute_covers_missing_ingredient() {
        let r = recipe(&["egg", "milk", "salt"], vec![("milk", vec!["cream"])]);
        let outcome = score_one(&r, &["egg", "cream", "salt"]);

        assert_eq!(outcome.percentage, 100.0);
        assert!(outcome.missing.is_empty());
        assert_eq!(outcome.used_replacements.get("milk").unwrap(), ["cream"]);
        assert_eq!(outcome.all_replacements.get("milk").unwrap(), ["cream"]);
    }

    #[test]
    fn test_partial_match_keeps_recipe_order() {
        let r = recipe(&["egg", "milk", "salt"], vec![("milk", vec!["cream"])]);
        let outcome = score_one(&r, &["egg"]);

        assert!((outcome.percentage - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(outcome.missing, vec!["milk", "salt"]);
        assert!(outcome.used_replacements.is_empty());
        assert_eq!(outcome.all_replacements.get("milk").unwrap(), ["cream"]);
        assert_eq!(outcome.all_replacements.get("salt"), Some(&[][..]));
    }

    #[test]
    fn test_zero_ingredients_scores_zero() {
        let outcome = score_one(&recipe(&[], vec![]), &["egg"]);
        assert_eq!(outcome.percentage, 0.0);
        assert!(outcome.missing.is_empty());
    }

    #[test]
    fn test_only_available_substitutes_are_used() {
        let r = recipe(&["butter"], vec![("butter", vec!["margarine", "oil", "ghee"])]);
        let outcome = score_one(&r, &["ghee", "oil"]);

        assert_eq!(outcome.percentage, 100.0);
        assert_eq!(outcome.used_replacements.get("butter").unwrap(), ["oil", "ghee"]);
        assert_eq!(
            outcome.all_replacements.get("butter").unwrap(),
            ["margarine", "oil", "ghee"]
        );
    }

    #[test]
    fn test_substitution_is_one_hop() {
        let r = recipe(
            &["milk"],
            vec![("milk", vec!["cream"]), ("cream", vec!["yogurt"])],
        );
        let outcome = score_one(&r, &["yogurt"]);
        assert_eq!(outcome.percentage, 0.0);
        assert_eq!(outcome.missing, vec!["milk"]);
    }

    #[test]
    fn test_graph_from_other_recipes_is_used() {
        let pancakes = recipe(&["flour", "milk"], vec![]);
        let omelette = recipe(&["egg"], vec![("Milk", vec!["Cream"])]);
        let graph = SubstitutionGraph::build(&[pancakes.clone(), omelette]);

        let outcome = score(&pancakes, &graph, &UserIngredients::new(["flour", "cream"]));
        assert_eq!(outcome.percentage, 100.0);
        assert_eq!(outcome.used_replacements.get("milk").unwrap(), ["cream"]);
    }

    #[test]
    fn test_empty_declaration_recorded_in_all_replacements() {
        let r = recipe(&["saffron"], vec![("saffron", vec![])]);
        let outcome = score_one(&r, &["salt"]);
        assert_eq!(outcome.missing, vec!["saffron"]);
        assert_eq!(outcome.all_replacements.get("saffron"), Some(&[][..]));
    }

    #[test]
    fn test_replacements_insert_overwrites_existing_key() {
        let mut replacements = Replacements::new();
        replacements.insert("milk".to_string(), vec!["cream".to_string()]);
        replacements.insert("salt".to_string(), vec![]);
        replacements.insert("milk".to_string(), vec!["kefir".to_string()]);

        let keys: Vec<&str> = replacements.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["milk", "salt"]);
        assert_eq!(replacements.get("milk").unwrap(), ["kefir"]);
    }
}
