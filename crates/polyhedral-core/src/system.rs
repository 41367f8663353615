//! System identity: the addressing unit shared by both registries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier for a supported tabletop ruleset.
///
/// The set is closed: adding a ruleset means adding a variant here and a
/// descriptor row in the manifest. Wire names are kebab-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SystemId {
    /// Daggerheart (Darrington Press).
    Daggerheart,
    /// Dungeons & Dragons 5th edition.
    Dnd5e,
    /// Vampire: the Masquerade.
    VampireTheMasquerade,
}

impl SystemId {
    /// All known system identifiers, in declaration order.
    pub const ALL: [Self; 3] = [Self::Daggerheart, Self::Dnd5e, Self::VampireTheMasquerade];

    /// Returns the stable wire name for this system.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daggerheart => "daggerheart",
            Self::Dnd5e => "dnd5e",
            Self::VampireTheMasquerade => "vampire-the-masquerade",
        }
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown system identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown system id: {0}")]
pub struct UnknownSystemId(pub String);

impl FromStr for SystemId {
    type Err = UnknownSystemId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSystemId(s.to_owned()))
    }
}

/// Normalizes a version string: trims surrounding whitespace and rejects
/// the empty result. All version comparison and storage goes through this.
#[must_use]
pub fn normalize_version(version: &str) -> Option<&str> {
    let trimmed = version.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// A `(system, version)` pair: the key under which entries are registered
/// and resolved in both registries.
///
/// The version is stored normalized. Equality is structural, so two keys
/// built from differently-padded version strings compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SystemKey {
    /// The ruleset this key addresses.
    pub id: SystemId,
    /// The normalized, non-empty version string.
    pub version: String,
}

impl SystemKey {
    /// Builds a key from an id and a raw version string.
    ///
    /// Returns `None` when the version is empty after trimming.
    #[must_use]
    pub fn new(id: SystemId, version: &str) -> Option<Self> {
        normalize_version(version).map(|version| Self {
            id,
            version: version.to_owned(),
        })
    }

    /// Derives the key for a registrable entry.
    ///
    /// Returns `None` when the entry reports an empty version.
    #[must_use]
    pub fn for_entry<T: SystemEntry + ?Sized>(entry: &T) -> Option<Self> {
        Self::new(entry.id(), entry.version())
    }
}

impl fmt::Display for SystemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.id, self.version)
    }
}

/// Anything addressable by a [`SystemKey`]: modules, metadata entries and
/// adapters all expose their identity through this trait so registries can
/// derive keys uniformly.
pub trait SystemEntry: Send + Sync {
    /// The ruleset this entry belongs to.
    fn id(&self) -> SystemId;

    /// The ruleset version this entry implements. May carry surrounding
    /// whitespace; consumers normalize before use.
    fn version(&self) -> &str;
}
