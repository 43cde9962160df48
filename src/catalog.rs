//! Built-in colormap registry.
//!
//! An explicit, lazily-constructed catalog of named gradients built from
//! anchor-color data. Construction happens on first use of [`catalog`] (or
//! explicitly via [`Catalog::build`]), never at import time, and lookups
//! support exact names or regex patterns with a deterministic preference
//! ranking.

use crate::color::Color;
use crate::gradient::Gradient;
use regex::RegexBuilder;
use std::sync::OnceLock;

/// Palette family, in descending lookup priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteFamily {
    /// Single-hue or perceptually ordered ramps.
    Sequential,
    /// Two-sided ramps around a neutral midpoint.
    Diverging,
    /// Unordered categorical sets.
    Qualitative,
}

impl PaletteFamily {
    /// Ranking weight used to break ties between pattern matches.
    const fn priority(self) -> u8 {
        match self {
            Self::Sequential => 3,
            Self::Diverging => 2,
            Self::Qualitative => 1,
        }
    }
}

/// One named gradient in the catalog.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Lookup name.
    pub name: &'static str,
    /// Palette family.
    pub family: PaletteFamily,
    /// The gradient itself.
    pub gradient: Gradient,
}

/// Anchor data: name, family, anchor colors as 8-bit RGB.
const BUILTIN_PALETTES: &[(&str, PaletteFamily, &[[u8; 3]])] = &[
    (
        "viridis",
        PaletteFamily::Sequential,
        &[[68, 1, 84], [59, 82, 139], [33, 145, 140], [94, 201, 98], [253, 231, 37]],
    ),
    (
        "magma",
        PaletteFamily::Sequential,
        &[[0, 0, 4], [81, 18, 124], [183, 55, 121], [252, 137, 97], [252, 253, 191]],
    ),
    (
        "plasma",
        PaletteFamily::Sequential,
        &[[13, 8, 135], [126, 3, 168], [204, 71, 120], [248, 149, 64], [240, 249, 33]],
    ),
    (
        "inferno",
        PaletteFamily::Sequential,
        &[[0, 0, 4], [87, 16, 110], [188, 55, 84], [249, 142, 9], [252, 255, 164]],
    ),
    (
        "blues",
        PaletteFamily::Sequential,
        &[[247, 251, 255], [198, 219, 239], [107, 174, 214], [33, 113, 181], [8, 48, 107]],
    ),
    (
        "greys",
        PaletteFamily::Sequential,
        &[[0, 0, 0], [255, 255, 255]],
    ),
    (
        "heat",
        PaletteFamily::Sequential,
        &[[0, 0, 0], [128, 0, 0], [255, 0, 0], [255, 128, 0], [255, 255, 0], [255, 255, 255]],
    ),
    (
        "red_blue",
        PaletteFamily::Diverging,
        &[[178, 24, 43], [239, 138, 98], [247, 247, 247], [103, 169, 207], [33, 102, 172]],
    ),
    (
        "spectral",
        PaletteFamily::Diverging,
        &[[158, 1, 66], [244, 109, 67], [255, 255, 191], [102, 194, 165], [94, 79, 162]],
    ),
    (
        "cool_warm",
        PaletteFamily::Diverging,
        &[[59, 76, 192], [221, 221, 221], [180, 4, 38]],
    ),
    (
        "classic",
        PaletteFamily::Qualitative,
        &[
            [31, 119, 180],
            [255, 127, 14],
            [44, 160, 44],
            [214, 39, 40],
            [148, 103, 189],
            [140, 86, 75],
            [227, 119, 194],
            [127, 127, 127],
        ],
    ),
    (
        "pastel",
        PaletteFamily::Qualitative,
        &[
            [251, 180, 174],
            [179, 205, 227],
            [204, 235, 197],
            [222, 203, 228],
            [254, 217, 166],
            [255, 255, 204],
        ],
    ),
];

/// The colormap registry.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build the registry from the built-in anchor data.
    ///
    /// This is the explicit construction entry point; [`catalog`] calls it
    /// once and caches the result.
    #[must_use]
    pub fn build() -> Self {
        let entries = BUILTIN_PALETTES
            .iter()
            .map(|&(name, family, anchors)| {
                let colors = anchors
                    .iter()
                    .map(|&[r, g, b]| Color::from_rgb8(r, g, b))
                    .collect();
                CatalogEntry {
                    name,
                    family,
                    // Anchor lists are non-empty by construction.
                    gradient: Gradient::new(colors, name)
                        .expect("builtin palette data is non-empty"),
                }
            })
            .collect();
        Self { entries }
    }

    /// Number of registered palettes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty. Never true for the built-in catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered names, in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    /// Exact lookup by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Gradient> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.gradient)
    }

    /// Pattern lookup with preference ranking.
    ///
    /// `pattern` is a regex matched anywhere in the palette name; an invalid
    /// pattern degrades to a literal substring match. Multiple matches are
    /// ranked by family priority (sequential > diverging > qualitative),
    /// then by stop count, descending.
    #[must_use]
    pub fn find(&self, pattern: &str, case_sensitive: bool) -> Option<&Gradient> {
        if pattern.trim().is_empty() {
            return None;
        }

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(!case_sensitive)
            .build()
            .or_else(|_| {
                RegexBuilder::new(&regex::escape(pattern))
                    .case_insensitive(!case_sensitive)
                    .build()
            })
            .ok()?;

        self.entries
            .iter()
            .filter(|e| regex.is_match(e.name))
            .max_by_key(|e| (e.family.priority(), e.gradient.len()))
            .map(|e| &e.gradient)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::build()
    }
}

/// The process-wide registry, built on first use.
#[must_use]
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(Catalog::build)
}
