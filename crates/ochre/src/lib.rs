//! Capture classification and theme resolution for source editors.
//!
//! This crate is the theming layer of a code editor: the parser integration
//! tags spans of text with capture classifications, and this crate maps each
//! classification (or its absence) plus the active [`Theme`] to concrete
//! visual style - a color, and a font derived from the editor's base font.
//!
//! Two pieces:
//! - [`CaptureKind`]: the closed taxonomy of classifications, with stable
//!   compact ids for in-memory storage and canonical strings for the query
//!   boundary
//! - [`Theme`]: an immutable bundle of style attributes, one per capture
//!   category, with total resolution functions ([`Theme::attribute`],
//!   [`Theme::color_for`], [`Theme::font_for`])
//!
//! Every operation is total: unknown capture names, out-of-range ids and
//! absent classifications all resolve to the theme's default text style.
//! Nothing in the resolution path can fail, so a capture kind the taxonomy
//! doesn't model yet can never break rendering.

pub mod capture;
pub mod font;
pub mod theme;

pub use capture::CaptureKind;
pub use font::{Font, FontTraits};
pub use theme::{Color, StyleAttribute, Theme, ThemeError, builtin};
