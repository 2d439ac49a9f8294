//! Catalog types the query engine evaluates against.
//!
//! Only the shape the engine needs is modelled here: the hosting catalog
//! converts its own records into these before filtering.

use serde::{Deserialize, Serialize};

/// Printing rarity, ordered from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Mythic,
    Special,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Self::Common,
        Self::Uncommon,
        Self::Rare,
        Self::Mythic,
        Self::Special,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Mythic => "mythic",
            Self::Special => "special",
        }
    }

    /// Parses a rarity from its full name or its first letter, ignoring case.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "c" | "common" => Some(Self::Common),
            "u" | "uncommon" => Some(Self::Uncommon),
            "r" | "rare" => Some(Self::Rare),
            "m" | "mythic" | "mythicrare" => Some(Self::Mythic),
            "s" | "special" => Some(Self::Special),
            _ => None,
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named side of a card. Split and double-faced cards have several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    pub name: String,
    pub type_line: String,
    #[serde(default)]
    pub rules_text: String,
}

impl Face {
    pub fn new(
        name: impl Into<String>,
        type_line: impl Into<String>,
        rules_text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_line: type_line.into(),
            rules_text: rules_text.into(),
        }
    }
}

/// The printing a card instance comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Printing {
    pub set_code: String,
    pub rarity: Rarity,
}

/// A catalog entry: the unit a compiled query accepts or rejects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Combined name across faces, e.g. `Fire // Ice`.
    pub full_name: String,
    pub faces: Vec<Face>,
    pub printing: Printing,
}

impl Card {
    pub fn new(full_name: impl Into<String>, faces: Vec<Face>, printing: Printing) -> Self {
        Self {
            full_name: full_name.into(),
            faces,
            printing,
        }
    }

    /// Builds a single-faced card whose full name is the face name.
    pub fn single(face: Face, printing: Printing) -> Self {
        Self {
            full_name: face.name.clone(),
            faces: vec![face],
            printing,
        }
    }

    pub fn rarity(&self) -> Rarity {
        self.printing.rarity
    }
}
