use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

// ------------- Hero -------------
// Empty names stand for names that are not known.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    hero_name: String,
    #[serde(default)]
    can_fly: bool,
}

impl Hero {
    pub fn new(first_name: &str, last_name: &str, hero_name: &str, can_fly: bool) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            hero_name: hero_name.to_owned(),
            can_fly,
        }
    }
    pub fn first_name(&self) -> &str {
        &self.first_name
    }
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
    pub fn hero_name(&self) -> &str {
        &self.hero_name
    }
    pub fn can_fly(&self) -> bool {
        self.can_fly
    }
    pub fn has_last_name(&self) -> bool {
        !self.last_name.is_empty()
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first_name.is_empty() && self.last_name.is_empty() {
            write!(f, "{}", self.hero_name)
        } else {
            write!(f, "{} ({} {})", self.hero_name, self.first_name, self.last_name)
        }
    }
}

impl AsRef<str> for Hero {
    fn as_ref(&self) -> &str {
        &self.hero_name
    }
}

pub fn default_roster() -> Vec<Hero> {
    vec![
        Hero::new("Wade", "Wilson", "Deadpool", false),
        Hero::new("", "", "Homelander", true),
        Hero::new("Bruce", "Wayne", "Batman", false),
        Hero::new("", "", "Stormfront", true),
    ]
}

/// Reads a JSON array of heroes, e.g.
/// `[{"first_name": "Bruce", "last_name": "Wayne", "hero_name": "Batman"}]`.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<Hero>> {
    let text = fs::read_to_string(path.as_ref())?;
    let heroes = parse_roster(&text)?;
    debug!(path = %path.as_ref().display(), heroes = heroes.len(), "roster loaded");
    Ok(heroes)
}

pub fn parse_roster(text: &str) -> Result<Vec<Hero>> {
    Ok(serde_json::from_str(text)?)
}

/// Hero names joined with ", ".
pub fn names<'a, I>(heroes: I) -> String
where
    I: IntoIterator<Item = &'a Hero>,
{
    heroes.into_iter().map(Hero::hero_name).collect::<Vec<_>>().join(", ")
}
