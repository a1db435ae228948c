//! Theme support: colors, style attributes, and capture resolution.
//!
//! A [`Theme`] is an immutable bundle of visual styling choices. It is built
//! once (from TOML, or one of the built-ins), shared read-only by however
//! many rendering passes want it, and replaced wholesale when the user picks
//! another theme. Nothing here mutates after construction and nothing here
//! can fail at resolution time: an absent or unmodeled classification simply
//! resolves to the default text style.
//!
//! # Theme Format
//!
//! Themes are TOML files with one rule per canonical capture name and an
//! optional color palette:
//!
//! ```toml
//! name = "Example"
//! variant = "light"
//!
//! text = { color = "ink" }
//! background = "#ffffff"
//!
//! # Simple foreground color
//! "type.value" = "#3900a0"
//!
//! # With trait flags
//! "string" = { color = "red", italic = true }
//!
//! [palette]
//! ink = "#000000"
//! red = "#d12f1b"
//! ```

use crate::capture::CaptureKind;
use crate::font::{Font, FontTraits};
use std::collections::HashMap;
use thiserror::Error;

/// RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like "#ff0000" or "ff0000".
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        // Byte length plus ASCII keeps the fixed-offset slices below on
        // char boundaries for any input.
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Convert to hex string with # prefix.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Lighten the color by a factor (0.0 to 1.0).
    pub fn lighten(&self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 + (255.0 - self.r as f32) * factor).round() as u8,
            g: (self.g as f32 + (255.0 - self.g as f32) * factor).round() as u8,
            b: (self.b as f32 + (255.0 - self.b as f32) * factor).round() as u8,
        }
    }

    /// Darken the color by a factor (0.0 to 1.0).
    pub fn darken(&self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 * (1.0 - factor)).round() as u8,
            g: (self.g as f32 * (1.0 - factor)).round() as u8,
            b: (self.b as f32 * (1.0 - factor)).round() as u8,
        }
    }
}

/// The style applied to one capture category: a color plus trait flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleAttribute {
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
}

impl StyleAttribute {
    /// ANSI reset sequence.
    pub const ANSI_RESET: &'static str = "\x1b[0m";

    pub const fn new(color: Color) -> Self {
        Self {
            color,
            bold: false,
            italic: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// The bold/italic flags as font traits.
    pub const fn traits(&self) -> FontTraits {
        FontTraits::new(self.bold, self.italic)
    }

    /// Generate the ANSI escape sequence for this attribute.
    pub fn ansi(&self) -> String {
        let mut codes = Vec::new();
        if self.bold {
            codes.push("1".to_string());
        }
        if self.italic {
            codes.push("3".to_string());
        }
        codes.push(format!(
            "38;2;{};{};{}",
            self.color.r, self.color.g, self.color.b
        ));
        format!("\x1b[{}m", codes.join(";"))
    }
}

/// A complete editor theme.
///
/// Fields are public for construction, but a `Theme` is treated as read-only
/// once built: theme switching replaces the whole value rather than mutating
/// slots in place, which is also what makes sharing one across concurrent
/// rendering passes safe.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name for display.
    pub name: String,
    /// Whether this is a dark or light theme.
    pub is_dark: bool,

    /// Default text style; also the fallback for unclassified spans.
    pub text: StyleAttribute,
    /// Caret color.
    pub insertion_point: Color,
    /// Style for rendered invisible characters (spaces, tabs, newlines).
    pub invisibles: StyleAttribute,
    /// Editor background.
    pub background: Color,
    /// Background of the line containing the caret.
    pub line_highlight: Color,
    /// Selection background.
    pub selection: Color,

    pub blocks: StyleAttribute,
    pub modifiers: StyleAttribute,
    pub types: StyleAttribute,
    pub type_values: StyleAttribute,
    pub numbers: StyleAttribute,
    pub constants: StyleAttribute,
    pub booleans: StyleAttribute,
    pub strings: StyleAttribute,
    pub math_strings: StyleAttribute,
    pub file_strings: StyleAttribute,
    pub text_separators: StyleAttribute,
    pub text_delimiters: StyleAttribute,
    pub math_delimiters: StyleAttribute,
    pub keywords: StyleAttribute,
    pub commands: StyleAttribute,
    pub comments: StyleAttribute,
}

impl Theme {
    /// Resolve the style attribute for a capture classification.
    ///
    /// An absent classification resolves to the default text style. The
    /// match is deliberately exhaustive with no catch-all: a new
    /// [`CaptureKind`] will not compile until it is given a slot here.
    pub fn attribute(&self, capture: Option<CaptureKind>) -> StyleAttribute {
        let Some(capture) = capture else {
            return self.text;
        };
        match capture {
            CaptureKind::Block => self.blocks,
            CaptureKind::Modifier => self.modifiers,
            CaptureKind::Type => self.types,
            CaptureKind::TypeValue => self.type_values,
            CaptureKind::Number => self.numbers,
            CaptureKind::Constant => self.constants,
            CaptureKind::Boolean => self.booleans,
            CaptureKind::String => self.strings,
            CaptureKind::MathString => self.math_strings,
            CaptureKind::FileString => self.file_strings,
            CaptureKind::TextSeparator => self.text_separators,
            CaptureKind::TextDelimiter => self.text_delimiters,
            CaptureKind::MathDelimiter => self.math_delimiters,
            CaptureKind::Keyword => self.keywords,
            CaptureKind::Command => self.commands,
            CaptureKind::Comment => self.comments,
        }
    }

    /// The text color for a capture classification.
    pub fn color_for(&self, capture: Option<CaptureKind>) -> Color {
        self.attribute(capture).color
    }

    /// Derive a font from `base` with the traits the capture's style calls
    /// for.
    ///
    /// Returns an unchanged copy of `base` when the resolved style has no
    /// traits; this is the common case, and spans vastly outnumber themes,
    /// so the fast path avoids building anything.
    pub fn font_for(&self, capture: Option<CaptureKind>, base: &Font) -> Font {
        let attribute = self.attribute(capture);
        if !attribute.bold && !attribute.italic {
            return base.clone();
        }
        base.with_traits(attribute.traits())
    }

    /// Parse a theme from TOML.
    ///
    /// Capture rules may be a bare color string (hex or palette reference)
    /// or a table with `color`, `bold` and `italic` keys. Any capture rule
    /// the file omits falls back to the `text` attribute, so a parsed theme
    /// always has every slot populated. Chrome colors the file omits are
    /// derived from `background` and `text`. A theme is treated as light
    /// unless it says `variant = "dark"`.
    pub fn from_toml(source: &str) -> Result<Self, ThemeError> {
        let value: toml::Value = source
            .parse()
            .map_err(|e| ThemeError::Parse(format!("{e}")))?;
        let table = value
            .as_table()
            .ok_or_else(|| ThemeError::Parse("expected a table".into()))?;

        let name = table
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let is_dark = table.get("variant").and_then(|v| v.as_str()) == Some("dark");

        // Palette for named color lookups
        let palette: HashMap<&str, Color> = table
            .get("palette")
            .and_then(|v| v.as_table())
            .map(|t| {
                t.iter()
                    .filter_map(|(k, v)| {
                        v.as_str()
                            .and_then(Color::from_hex)
                            .map(|c| (k.as_str(), c))
                    })
                    .collect()
            })
            .unwrap_or_default();

        let resolve_color =
            |s: &str| -> Option<Color> { Color::from_hex(s).or_else(|| palette.get(s).copied()) };

        let text_rule = table.get("text").ok_or(ThemeError::MissingKey("text"))?;
        let raw = parse_rule(text_rule, &resolve_color)?;
        let text = StyleAttribute {
            color: raw.color.ok_or(ThemeError::MissingKey("text"))?,
            bold: raw.bold,
            italic: raw.italic,
        };

        let background = color_key(table, "background", &resolve_color)?
            .ok_or(ThemeError::MissingKey("background"))?;

        // Chrome colors fall back to values derived from background/text.
        let insertion_point =
            color_key(table, "insertion-point", &resolve_color)?.unwrap_or(text.color);
        let line_highlight =
            color_key(table, "line-highlight", &resolve_color)?.unwrap_or_else(|| {
                if is_dark {
                    background.lighten(0.08)
                } else {
                    background.darken(0.05)
                }
            });
        let selection = color_key(table, "selection", &resolve_color)?.unwrap_or_else(|| {
            if is_dark {
                background.lighten(0.25)
            } else {
                background.darken(0.15)
            }
        });
        let invisibles = match table.get("invisibles") {
            Some(rule) => {
                let raw = parse_rule(rule, &resolve_color)?;
                StyleAttribute {
                    color: raw.color.unwrap_or(text.color),
                    bold: raw.bold,
                    italic: raw.italic,
                }
            }
            None => StyleAttribute::new(if is_dark {
                text.color.darken(0.55)
            } else {
                text.color.lighten(0.7)
            }),
        };

        let slot = |kind: CaptureKind| -> Result<StyleAttribute, ThemeError> {
            match table.get(kind.as_name()) {
                Some(rule) => {
                    let raw = parse_rule(rule, &resolve_color)?;
                    Ok(StyleAttribute {
                        color: raw.color.unwrap_or(text.color),
                        bold: raw.bold,
                        italic: raw.italic,
                    })
                }
                None => Ok(text),
            }
        };

        Ok(Theme {
            name,
            is_dark,
            text,
            insertion_point,
            invisibles,
            background,
            line_highlight,
            selection,
            blocks: slot(CaptureKind::Block)?,
            modifiers: slot(CaptureKind::Modifier)?,
            types: slot(CaptureKind::Type)?,
            type_values: slot(CaptureKind::TypeValue)?,
            numbers: slot(CaptureKind::Number)?,
            constants: slot(CaptureKind::Constant)?,
            booleans: slot(CaptureKind::Boolean)?,
            strings: slot(CaptureKind::String)?,
            math_strings: slot(CaptureKind::MathString)?,
            file_strings: slot(CaptureKind::FileString)?,
            text_separators: slot(CaptureKind::TextSeparator)?,
            text_delimiters: slot(CaptureKind::TextDelimiter)?,
            math_delimiters: slot(CaptureKind::MathDelimiter)?,
            keywords: slot(CaptureKind::Keyword)?,
            commands: slot(CaptureKind::Command)?,
            comments: slot(CaptureKind::Comment)?,
        })
    }
}

/// A style rule as written in the file, before fallbacks apply.
struct RawRule {
    color: Option<Color>,
    bold: bool,
    italic: bool,
}

/// Parse a style rule from TOML (either string or table).
fn parse_rule(
    value: &toml::Value,
    resolve_color: &impl Fn(&str) -> Option<Color>,
) -> Result<RawRule, ThemeError> {
    let mut raw = RawRule {
        color: None,
        bold: false,
        italic: false,
    };

    match value {
        // Simple string: just a color
        toml::Value::String(s) => {
            raw.color =
                Some(resolve_color(s).ok_or_else(|| ThemeError::UnknownColor(s.clone()))?);
        }
        // Table with color, bold, italic
        toml::Value::Table(t) => {
            if let Some(c) = t.get("color").and_then(|v| v.as_str()) {
                raw.color =
                    Some(resolve_color(c).ok_or_else(|| ThemeError::UnknownColor(c.into()))?);
            }
            if let Some(bold) = t.get("bold").and_then(|v| v.as_bool()) {
                raw.bold = bold;
            }
            if let Some(italic) = t.get("italic").and_then(|v| v.as_bool()) {
                raw.italic = italic;
            }
        }
        _ => {}
    }

    Ok(raw)
}

/// Read a bare color key, if present.
fn color_key(
    table: &toml::value::Table,
    key: &'static str,
    resolve_color: &impl Fn(&str) -> Option<Color>,
) -> Result<Option<Color>, ThemeError> {
    match table.get(key).and_then(|v| v.as_str()) {
        Some(s) => Ok(Some(
            resolve_color(s).ok_or_else(|| ThemeError::UnknownColor(s.into()))?,
        )),
        None => Ok(None),
    }
}

/// Error type for theme loading. Resolution itself cannot fail.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme parse error: {0}")]
    Parse(String),
    #[error("theme is missing required key `{0}`")]
    MissingKey(&'static str),
    #[error("unknown color `{0}` (not hex, not in palette)")]
    UnknownColor(String),
}

// ============================================================================
// Built-in themes (include_str!'d from TOML files)
// ============================================================================

macro_rules! builtin_theme {
    ($name:ident, $file:literal) => {
        pub fn $name() -> &'static Theme {
            use std::sync::OnceLock;
            static THEME: OnceLock<Theme> = OnceLock::new();
            THEME.get_or_init(|| {
                Theme::from_toml(include_str!(concat!("../themes/", $file)))
                    .expect(concat!("failed to parse built-in theme: ", $file))
            })
        }
    };
}

/// Built-in themes module.
pub mod builtin {
    use super::Theme;

    builtin_theme!(pageflow_light, "pageflow-light.toml");
    builtin_theme!(pageflow_dark, "pageflow-dark.toml");

    /// Get all built-in themes.
    pub fn all() -> Vec<&'static Theme> {
        vec![pageflow_light(), pageflow_dark()]
    }

    /// Look up a built-in theme by display name, case-insensitively.
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        all().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#ff0000"), Some(Color::new(255, 0, 0)));
        assert_eq!(Color::from_hex("00ff00"), Some(Color::new(0, 255, 0)));
        assert_eq!(Color::from_hex("#invalid"), None);
        // Six bytes but not six hex digits; must not slice mid-character.
        assert_eq!(Color::from_hex("€€"), None);
        assert_eq!(Color::from_hex("#€€"), None);
    }

    #[test]
    fn test_color_to_hex() {
        assert_eq!(Color::new(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(Color::new(0, 255, 0).to_hex(), "#00ff00");
    }

    #[test]
    fn test_attribute_builders() {
        let attr = StyleAttribute::new(Color::new(1, 2, 3)).bold().italic();
        assert!(attr.bold);
        assert!(attr.italic);
        assert_eq!(attr.color, Color::new(1, 2, 3));
    }

    #[test]
    fn test_absent_capture_resolves_to_text() {
        for theme in builtin::all() {
            assert_eq!(theme.attribute(None), theme.text);
            assert_eq!(theme.color_for(None), theme.text.color);
        }
    }

    #[test]
    fn test_builtin_light_palette() {
        let theme = builtin::pageflow_light();
        assert!(!theme.is_dark);
        assert_eq!(theme.strings.color, Color::from_hex("#d12f1b").unwrap());
        assert_eq!(theme.background, Color::new(255, 255, 255));
    }

    #[test]
    fn test_builtin_dark_palette() {
        let theme = builtin::pageflow_dark();
        assert!(theme.is_dark);
        assert_eq!(theme.background, Color::from_hex("#1f1f24").unwrap());
        assert_eq!(theme.keywords.color, Color::from_hex("#fc5fa3").unwrap());
        assert!(theme.keywords.bold);
        assert_eq!(theme.comments.color, Color::from_hex("#6c7986").unwrap());
        assert!(theme.comments.italic);
    }

    #[test]
    fn test_from_toml_palette_and_rules() {
        let theme = Theme::from_toml(indoc! {r##"
            name = "Test"
            variant = "light"

            text = { color = "ink" }
            background = "#fffff8"

            "string" = { color = "red", italic = true }
            "boolean" = { color = "#272ad8", bold = true }
            "type.value" = "#3900a0"

            [palette]
            ink = "#101010"
            red = "#d12f1b"
        "##})
        .unwrap();

        assert_eq!(theme.name, "Test");
        assert_eq!(theme.text.color, Color::new(0x10, 0x10, 0x10));
        assert_eq!(theme.strings.color, Color::new(0xd1, 0x2f, 0x1b));
        assert!(theme.strings.italic);
        assert!(!theme.strings.bold);
        assert!(theme.booleans.bold);
        assert_eq!(theme.type_values.color, Color::new(0x39, 0x00, 0xa0));
    }

    #[test]
    fn test_from_toml_missing_rules_fall_back_to_text() {
        let theme = Theme::from_toml(indoc! {r##"
            text = "#222222"
            background = "#ffffff"
        "##})
        .unwrap();

        for &kind in CaptureKind::ALL {
            assert_eq!(theme.attribute(Some(kind)), theme.text);
        }
    }

    #[test]
    fn test_from_toml_derives_chrome_colors() {
        let theme = Theme::from_toml(indoc! {r##"
            variant = "light"
            text = "#000000"
            background = "#ffffff"
        "##})
        .unwrap();

        assert_eq!(theme.insertion_point, theme.text.color);
        assert_eq!(theme.line_highlight, theme.background.darken(0.05));
        assert_eq!(theme.selection, theme.background.darken(0.15));
        assert_eq!(theme.invisibles.color, theme.text.color.lighten(0.7));
    }

    #[test]
    fn test_from_toml_missing_text_is_error() {
        let err = Theme::from_toml(r##"background = "#ffffff""##).unwrap_err();
        assert!(matches!(err, ThemeError::MissingKey("text")));
    }

    #[test]
    fn test_from_toml_missing_background_is_error() {
        let err = Theme::from_toml(r##"text = "#000000""##).unwrap_err();
        assert!(matches!(err, ThemeError::MissingKey("background")));
    }

    #[test]
    fn test_from_toml_missing_variant_defaults_to_light() {
        let theme = Theme::from_toml(indoc! {r##"
            text = "#000000"
            background = "#ffffff"
        "##})
        .unwrap();

        assert!(!theme.is_dark);
        assert_eq!(theme.line_highlight, theme.background.darken(0.05));
    }

    #[test]
    fn test_from_toml_multibyte_color_is_error() {
        let err = Theme::from_toml(indoc! {r##"
            text = "€€"
            background = "#ffffff"
        "##})
        .unwrap_err();
        assert!(matches!(err, ThemeError::UnknownColor(_)));
    }

    #[test]
    fn test_from_toml_unknown_palette_ref_is_error() {
        let err = Theme::from_toml(indoc! {r##"
            text = "no-such-color"
            background = "#ffffff"
        "##})
        .unwrap_err();
        assert!(matches!(err, ThemeError::UnknownColor(_)));
    }

    #[test]
    fn test_from_toml_invalid_source_is_error() {
        assert!(matches!(
            Theme::from_toml("not = = toml"),
            Err(ThemeError::Parse(_))
        ));
    }

    #[test]
    fn test_ansi_escape() {
        let attr = StyleAttribute::new(Color::new(255, 0, 0)).bold();
        assert_eq!(attr.ansi(), "\x1b[1;38;2;255;0;0m");
        assert_eq!(StyleAttribute::ANSI_RESET, "\x1b[0m");
    }
}
