//! Typed model of the extracted variant mappings
//!
//! Two fixed levels: base character -> variant name -> [`VariantGlyph`]. Both levels
//! keep first-insertion order so the JSON mirrors the source table's traversal order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The transformed character for one base character under one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantGlyph {
    #[serde(rename = "char")]
    pub glyph: String,
    /// Hexadecimal codepoint offset, kept exactly as written in the table
    pub delta: String,
}

impl VariantGlyph {
    pub fn new(glyph: impl Into<String>, delta: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            delta: delta.into(),
        }
    }

    /// Parse the delta text as a hexadecimal codepoint offset.
    pub fn delta_value(&self) -> Result<u32> {
        u32::from_str_radix(&self.delta, 16).map_err(|_| Error::InvalidDelta(self.delta.clone()))
    }
}

/// All variants recorded for a single base character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseEntry {
    variants: IndexMap<String, VariantGlyph>,
}

impl BaseEntry {
    /// Set the glyph for `variant`. A repeated variant overwrites in place.
    pub fn insert(&mut self, variant: impl Into<String>, glyph: VariantGlyph) {
        self.variants.insert(variant.into(), glyph);
    }

    pub fn get(&self, variant: &str) -> Option<&VariantGlyph> {
        self.variants.get(variant)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariantGlyph)> {
        self.variants.iter().map(|(name, glyph)| (name.as_str(), glyph))
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Base character -> variant mappings, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantTable {
    entries: IndexMap<String, BaseEntry>,
}

impl VariantTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a table previously produced by [`crate::extract`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Record `glyph` as the `variant` form of `base`, creating the base entry if needed.
    pub fn insert(&mut self, base: impl Into<String>, variant: impl Into<String>, glyph: VariantGlyph) {
        self.entries
            .entry(base.into())
            .or_default()
            .insert(variant, glyph);
    }

    pub fn get(&self, base: &str) -> Option<&BaseEntry> {
        self.entries.get(base)
    }

    pub fn lookup(&self, base: &str, variant: &str) -> Option<&VariantGlyph> {
        self.get(base)?.get(variant)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BaseEntry)> {
        self.entries.iter().map(|(base, entry)| (base.as_str(), entry))
    }

    /// Number of distinct base characters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct variant names in the order they were first seen.
    pub fn variant_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for entry in self.entries.values() {
            for (name, _) in entry.iter() {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Rewrite `text` in the given variant.
    ///
    /// Characters without a glyph for `variant` are copied unchanged. Only
    /// single-codepoint base keys can match.
    pub fn apply(&self, variant: &str, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut buf = [0u8; 4];
        for c in text.chars() {
            let key: &str = c.encode_utf8(&mut buf);
            match self.lookup(key, variant) {
                Some(glyph) => out.push_str(&glyph.glyph),
                None => out.push(c),
            }
        }
        out
    }
}
