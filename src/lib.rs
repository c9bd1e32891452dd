//! # Recipe Finder
//!
//! Matches the ingredients a user has on hand against a recipe catalog,
//! crediting ingredients that can be covered by a known substitute, and
//! ranks the matching recipes by time, complexity or match percentage.
//!
//! ```rust
//! use recipe_finder::catalog::Catalog;
//! use recipe_finder::search::RecipeFinder;
//! use recipe_finder::sorting::{sort_results, SortKey};
//!
//! let catalog = Catalog::from_json_str(r#"[
//!     {"name": "Omelette", "ingredients": ["egg", "milk", "salt"], "time": 10,
//!      "complexity": "light", "replacements": {"milk": ["cream"]}},
//!     {"name": "Pancakes", "ingredients": ["flour", "egg", "milk"], "time": 25,
//!      "complexity": "medium"}
//! ]"#)?;
//! let finder = RecipeFinder::new(catalog);
//!
//! let results = finder.search(&["egg", "cream", "flour"], None);
//! let ranked = sort_results(&results, SortKey::Match);
//! assert_eq!(ranked[0].name, "Pancakes");
//! # Ok::<(), recipe_finder::catalog::LoadError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod formatting;
pub mod ingredient_input;
pub mod matching;
pub mod search;
pub mod sorting;
pub mod substitutions;
