//! # Substitution Graph Module
//!
//! Aggregates the recipe-local replacement declarations of the whole catalog
//! into one case-insensitive adjacency map: ingredient → substitutes.
//!
//! The graph is built once when the catalog is loaded and never changes
//! afterwards. Declarations for the same ingredient coming from different
//! recipes are appended to a single shared list, duplicates included.

use log::{debug, info};
use std::collections::HashMap;

use crate::catalog::Recipe;

/// Case-insensitive map from an ingredient to its known substitutes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionGraph {
    edges: HashMap<String, Vec<String>>,
}

impl SubstitutionGraph {
    /// Build the graph from every recipe's local replacement mapping
    ///
    /// A declaration with an empty substitute list still creates an entry,
    /// so [`has_entry`](Self::has_entry) can tell "declared, nothing known"
    /// apart from "never declared".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recipe_finder::catalog::Catalog;
    /// use recipe_finder::substitutions::SubstitutionGraph;
    ///
    /// let catalog = Catalog::from_json_str(r#"[
    ///     {"name": "A", "ingredients": ["Milk"], "time": 5, "complexity": "light",
    ///      "replacements": {"Milk": ["Cream"]}},
    ///     {"name": "B", "ingredients": ["milk"], "time": 5, "complexity": "light",
    ///      "replacements": {"milk": ["Oat Milk"]}}
    /// ]"#)?;
    /// let graph = SubstitutionGraph::build(catalog.recipes());
    ///
    /// assert_eq!(graph.substitutes("MILK").unwrap(), ["cream", "oat milk"]);
    /// # Ok::<(), recipe_finder::catalog::LoadError>(())
    /// ```
    pub fn build(recipes: &[Recipe]) -> Self {
        let mut edges: HashMap<String, Vec<String>> = HashMap::new();

        for recipe in recipes {
            for (ingredient, substitutes) in recipe.replacements.iter() {
                let key = ingredient.to_lowercase();
                debug!(
                    "Recipe '{}' declares {} substitute(s) for '{}'",
                    recipe.name,
                    substitutes.len(),
                    key
                );
                edges
                    .entry(key)
                    .or_default()
                    .extend(substitutes.iter().map(|s| s.to_lowercase()));
            }
        }

        info!("Built substitution graph with {} ingredients", edges.len());
        Self { edges }
    }

    /// Known substitutes for an ingredient, in aggregation order
    ///
    /// Returns `None` when no recipe ever declared substitutes for it, and
    /// `Some(&[])` when a recipe declared an empty list.
    pub fn substitutes(&self, ingredient: &str) -> Option<&[String]> {
        self.edges
            .get(&ingredient.to_lowercase())
            .map(Vec::as_slice)
    }

    pub fn has_entry(&self, ingredient: &str) -> bool {
        self.edges.contains_key(&ingredient.to_lowercase())
    }

    /// Number of ingredients with an entry
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
