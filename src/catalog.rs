//! # Recipe Catalog Module
//!
//! This module defines the typed recipe records and loads them from a JSON
//! catalog. Every record is validated when the catalog is read, so matching
//! never has to deal with missing or malformed fields.
//!
//! ## Catalog format
//!
//! ```json
//! [
//!   {
//!     "name": "Omelette",
//!     "ingredients": ["egg", "milk", "salt"],
//!     "time": 10,
//!     "complexity": "light",
//!     "replacements": { "milk": ["cream"] }
//!   }
//! ]
//! ```
//!
//! `replacements` is optional and defaults to an empty mapping.

use log::{debug, info};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while loading a recipe catalog
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog source could not be opened or read
    #[error("failed to read recipe catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalog is not a well-formed sequence of recipe records
    #[error("malformed recipe catalog: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Two records share the same name
    #[error("duplicate recipe name in catalog: {0}")]
    DuplicateName(String),
    /// A record has a blank name
    #[error("recipe at position {0} has an empty name")]
    EmptyName(usize),
    /// A record's preparation time is negative or not a finite number
    #[error("recipe {name:?} has an invalid preparation time: {time}")]
    InvalidTime { name: String, time: f64 },
}

/// Error returned when a complexity label is not one of the known levels
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown complexity level: {0:?}")]
pub struct ParseComplexityError(pub String);

/// How demanding a recipe is to prepare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Light,
    Medium,
    Hard,
}

impl Complexity {
    /// Fixed ordering rank used by the complexity sorter (light = 1 ... hard = 3)
    pub fn rank(self) -> u8 {
        match self {
            Complexity::Light => 1,
            Complexity::Medium => 2,
            Complexity::Hard => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Light => "light",
            Complexity::Medium => "medium",
            Complexity::Hard => "hard",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = ParseComplexityError;

    /// Parse a complexity label, case-insensitively.
    ///
    /// Besides the English labels, the Russian labels found in older
    /// catalog files are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" | "лёгкая" | "легкая" => Ok(Complexity::Light),
            "medium" | "средняя" => Ok(Complexity::Medium),
            "hard" | "сложная" => Ok(Complexity::Hard),
            _ => Err(ParseComplexityError(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Complexity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(de::Error::custom)
    }
}

/// Substitutes declared by a single recipe, in declaration order
///
/// JSON objects are read in document order, so the order in which a recipe
/// lists its replacements is the order in which they reach the
/// substitution graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocalReplacements(Vec<(String, Vec<String>)>);

impl LocalReplacements {
    pub fn new(entries: Vec<(String, Vec<String>)>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for LocalReplacements {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = LocalReplacements;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from ingredient name to a list of substitutes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((ingredient, substitutes)) =
                    map.next_entry::<String, Vec<String>>()?
                {
                    entries.push((ingredient, substitutes));
                }
                Ok(LocalReplacements(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe name
    pub name: String,
    /// Required ingredients, in the order the recipe declares them
    pub ingredients: Vec<String>,
    /// Preparation time in minutes; fractional values are allowed
    pub time: f64,
    pub complexity: Complexity,
    /// Recipe-local substitutes, keyed by ingredient
    #[serde(default)]
    pub replacements: LocalReplacements,
}

/// The loaded, validated recipe collection, in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build a catalog from already-typed records.
    ///
    /// Applies the same validation as the file loaders.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, LoadError> {
        validate(&recipes)?;
        info!("Loaded recipe catalog with {} recipes", recipes.len());
        Ok(Self { recipes })
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if the file cannot be opened or read, and
    /// `LoadError::Malformed` / `DuplicateName` / `EmptyName` if its content
    /// is not a valid catalog. No partial catalog is ever returned.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use recipe_finder::catalog::Catalog;
    ///
    /// let catalog = Catalog::from_path("recipes.json")?;
    /// println!("{} recipes", catalog.len());
    /// # Ok::<(), recipe_finder::catalog::LoadError>(())
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        info!("Loading recipe catalog from: {}", path.display());

        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut text = String::new();
        BufReader::new(file)
            .read_to_string(&mut text)
            .map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_json_str(&text)
    }

    /// Load a catalog from any reader producing JSON
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let recipes: Vec<Recipe> = serde_json::from_reader(reader)?;
        Self::new(recipes)
    }

    /// Load a catalog from a JSON string
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        let recipes: Vec<Recipe> = serde_json::from_str(text)?;
        debug!("Parsed {} recipe records", recipes.len());
        Self::new(recipes)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Find a recipe by its exact name
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn validate(recipes: &[Recipe]) -> Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(recipes.len());
    for (position, recipe) in recipes.iter().enumerate() {
        if recipe.name.trim().is_empty() {
            return Err(LoadError::EmptyName(position));
        }
        if !seen.insert(recipe.name.as_str()) {
            return Err(LoadError::DuplicateName(recipe.name.clone()));
        }
        if !recipe.time.is_finite() || recipe.time < 0.0 {
            return Err(LoadError::InvalidTime {
                name: recipe.name.clone(),
                time: recipe.time,
            });
        }
    }
    Ok(())
}
