//! Search criteria value object built once per pet search.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Animal type accepted by the catalog search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    #[serde(alias = "cat")]
    Cat,
    #[serde(alias = "dog")]
    Dog,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Cat => "Cat",
            Species::Dog => "Dog",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cat" => Ok(Species::Cat),
            "dog" => Ok(Species::Dog),
            other => Err(format!("unknown species '{other}', expected cat or dog")),
        }
    }
}

/// Size class accepted by the catalog search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    #[serde(alias = "small")]
    Small,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "large")]
    Large,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            other => Err(format!(
                "unknown size '{other}', expected small, medium or large"
            )),
        }
    }
}

/// What the user is looking for: species, size and five preference flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub species: Species,
    pub size: Size,
    pub good_with_children: bool,
    pub good_with_dogs: bool,
    pub good_with_cats: bool,
    pub house_trained: bool,
    pub special_needs: bool,
}

impl SearchCriteria {
    /// Criteria with every preference flag unset.
    pub fn new(species: Species, size: Size) -> Self {
        Self {
            species,
            size,
            good_with_children: false,
            good_with_dogs: false,
            good_with_cats: false,
            house_trained: false,
            special_needs: false,
        }
    }

    /// Catalog query parameters for these criteria.
    ///
    /// Booleans are rendered as the lowercase literals `true` / `false`.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("type", self.species.to_string()),
            ("size", self.size.to_string()),
            ("good_with_children", self.good_with_children.to_string()),
            ("good_with_dogs", self.good_with_dogs.to_string()),
            ("good_with_cats", self.good_with_cats.to_string()),
            ("house_trained", self.house_trained.to_string()),
            ("special_needs", self.special_needs.to_string()),
        ]
    }
}
