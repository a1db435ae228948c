//! Font value type used by theme resolution.
//!
//! The editor's rendering layer owns real platform font handles; this crate
//! only needs to say "the base font, with bold and/or italic applied". The
//! [`Font`] here is that description: a plain value the embedding layer maps
//! onto its toolkit's font system.

/// Bold/italic trait flags.
///
/// Applying traits is a set union, so application is idempotent and
/// commutative: applying bold twice, or bold-then-italic vs.
/// italic-then-bold, produces the same trait set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FontTraits {
    pub bold: bool,
    pub italic: bool,
}

impl FontTraits {
    pub const fn new(bold: bool, italic: bool) -> Self {
        Self { bold, italic }
    }

    /// Union of two trait sets.
    pub const fn union(self, other: FontTraits) -> FontTraits {
        FontTraits {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
        }
    }

    /// True if no trait is set.
    pub const fn is_plain(self) -> bool {
        !self.bold && !self.italic
    }
}

/// A font description: family, point size, and trait flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
    pub traits: FontTraits,
}

impl Font {
    /// A plain font with no traits.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            traits: FontTraits::default(),
        }
    }

    /// Return this font with the given traits merged in.
    ///
    /// Traits already present are kept, so the derived font is always at
    /// least as styled as the base. Returns an unchanged copy when the merge
    /// adds nothing.
    pub fn with_traits(&self, traits: FontTraits) -> Font {
        Font {
            family: self.family.clone(),
            size: self.size,
            traits: self.traits.union(traits),
        }
    }
}
