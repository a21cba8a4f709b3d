use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::BillingError;

/// A play in the theater's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// Display name printed on statement lines.
    pub name: String,
    /// Pricing genre as recorded in the catalog (e.g. "tragedy").
    /// Parsed into a [`Genre`] when the play is priced.
    pub genre: String,
}

impl Play {
    pub fn new(name: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
        }
    }

    /// Resolve the catalog genre string into a supported [`Genre`].
    pub fn genre(&self) -> Result<Genre, BillingError> {
        self.genre.parse()
    }
}

/// A single performance billed on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Key into the play lookup.
    pub play_id: String,
    /// Number of seats sold.
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<String>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's invoice: the performances they are billed for, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Customer name printed in the statement header.
    pub customer: String,
    /// Performances in statement line order.
    pub performances: Vec<Performance>,
}

/// Pricing genres. Each genre has its own amount and credit formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Tragedy,
    Comedy,
}

impl Genre {
    /// Catalog code for this genre.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Tragedy => "tragedy",
            Self::Comedy => "comedy",
        }
    }

    /// Parse from a catalog code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "tragedy" => Some(Self::Tragedy),
            "comedy" => Some(Self::Comedy),
            _ => None,
        }
    }
}

impl FromStr for Genre {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| BillingError::UnknownGenre(s.to_string()))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Read-only mapping from play id to [`Play`].
///
/// Implemented for the standard maps keyed by `String`; callers with their
/// own catalog storage can implement it directly.
pub trait PlayLookup {
    /// Look up the play with the given id.
    fn play(&self, play_id: &str) -> Option<&Play>;

    /// Look up a play, failing with [`BillingError::PlayNotFound`] if absent.
    fn require(&self, play_id: &str) -> Result<&Play, BillingError> {
        self.play(play_id)
            .ok_or_else(|| BillingError::PlayNotFound(play_id.to_string()))
    }
}

impl<S: std::hash::BuildHasher> PlayLookup for HashMap<String, Play, S> {
    fn play(&self, play_id: &str) -> Option<&Play> {
        self.get(play_id)
    }
}

impl PlayLookup for BTreeMap<String, Play> {
    fn play(&self, play_id: &str) -> Option<&Play> {
        self.get(play_id)
    }
}

impl<L: PlayLookup + ?Sized> PlayLookup for &L {
    fn play(&self, play_id: &str) -> Option<&Play> {
        (**self).play(play_id)
    }
}
