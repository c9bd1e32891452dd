//! # Recipe Search Module
//!
//! [`RecipeFinder`] owns the loaded catalog together with the substitution
//! graph built from it. Both are immutable once constructed, so a finder can
//! be shared freely between threads and queried concurrently.

use log::{debug, info};
use serde::Serialize;
use std::path::Path;

use crate::catalog::{Catalog, Complexity, LoadError, ParseComplexityError, Recipe};
use crate::formatting::format_replacements;
use crate::matching::{score, Replacements, UserIngredients};
use crate::substitutions::SubstitutionGraph;

/// Labels meaning "no complexity filter"
const ANY_COMPLEXITY_LABELS: [&str; 3] = ["any", "all", "любая"];

/// One scored recipe, as returned by [`RecipeFinder::search`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub name: String,
    /// Coverage of the recipe's ingredients, 0.0 to 100.0
    pub percentage: f64,
    /// Preparation time in minutes
    pub time: f64,
    pub complexity: Complexity,
    pub missing: Vec<String>,
    pub used_replacements: Replacements,
    pub all_replacements: Replacements,
    /// `used_replacements` rendered for a results table
    pub replacements_info: String,
}

/// Parse a user-facing complexity filter
///
/// Blank input and "any" mean no filter.
///
/// # Errors
///
/// Returns `ParseComplexityError` for labels that are neither a known level
/// nor an "any" label.
pub fn parse_complexity_filter(label: &str) -> Result<Option<Complexity>, ParseComplexityError> {
    let normalized = label.trim().to_lowercase();
    if normalized.is_empty() || ANY_COMPLEXITY_LABELS.contains(&normalized.as_str()) {
        return Ok(None);
    }
    normalized.parse().map(Some)
}

/// Coordinates catalog, substitution graph and match engine
#[derive(Debug, Clone)]
pub struct RecipeFinder {
    catalog: Catalog,
    graph: SubstitutionGraph,
}

impl RecipeFinder {
    /// Take ownership of a catalog and build its substitution graph
    pub fn new(catalog: Catalog) -> Self {
        let graph = SubstitutionGraph::build(catalog.recipes());
        Self { catalog, graph }
    }

    /// Load a JSON catalog from disk and build the finder
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Ok(Self::new(Catalog::from_path(path)?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn graph(&self) -> &SubstitutionGraph {
        &self.graph
    }

    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        self.catalog.get(name)
    }

    /// Score every recipe against the given ingredients
    ///
    /// Recipes are restricted to `complexity` when a filter is given. Recipes
    /// scoring exactly 0% are left out. The result keeps catalog order; use
    /// [`crate::sorting::sort_results`] to rank it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recipe_finder::catalog::Catalog;
    /// use recipe_finder::search::RecipeFinder;
    ///
    /// let catalog = Catalog::from_json_str(r#"[
    ///     {"name": "Omelette", "ingredients": ["egg", "milk", "salt"], "time": 10,
    ///      "complexity": "light", "replacements": {"milk": ["cream"]}},
    ///     {"name": "Salad", "ingredients": ["tomato", "cucumber"], "time": 5,
    ///      "complexity": "light"}
    /// ]"#)?;
    /// let finder = RecipeFinder::new(catalog);
    ///
    /// let results = finder.search(&["egg", "cream", "salt"], None);
    /// assert_eq!(results.len(), 1);
    /// assert_eq!(results[0].name, "Omelette");
    /// assert_eq!(results[0].replacements_info, "milk→cream");
    /// # Ok::<(), recipe_finder::catalog::LoadError>(())
    /// ```
    pub fn search<S: AsRef<str>>(
        &self,
        ingredients: &[S],
        complexity: Option<Complexity>,
    ) -> Vec<MatchResult> {
        let user = UserIngredients::new(ingredients);
        debug!(
            "Searching {} recipes with {} ingredients, complexity filter: {:?}",
            self.catalog.len(),
            user.len(),
            complexity
        );

        let results: Vec<MatchResult> = self
            .catalog
            .recipes()
            .iter()
            .filter(|recipe| complexity.map_or(true, |c| recipe.complexity == c))
            .filter_map(|recipe| {
                let outcome = score(recipe, &self.graph, &user);
                if outcome.percentage > 0.0 {
                    Some(MatchResult {
                        name: recipe.name.clone(),
                        percentage: outcome.percentage,
                        time: recipe.time,
                        complexity: recipe.complexity,
                        replacements_info: format_replacements(&outcome.used_replacements),
                        missing: outcome.missing,
                        used_replacements: outcome.used_replacements,
                        all_replacements: outcome.all_replacements,
                    })
                } else {
                    None
                }
            })
            .collect();

        info!("Search matched {} recipes", results.len());
        results
    }
}
