//! Capture kind definitions - the closed set of syntax classifications.
//!
//! A capture is a classification tag the parser layer attaches to a span of
//! text ("this span is a string literal"). Large documents carry one of these
//! per tagged span, so the in-memory representation is a single byte. The
//! canonical string form (`"type.value"`, `"string.math"`, ...) only appears
//! at the boundary with the parser's query metadata and is never the hot-path
//! representation.

/// A syntax capture kind.
///
/// Discriminants are stable identifiers and must never be renumbered: tagged
/// spans may be stored with these ids across versions. Ids 0-12 predate the
/// keyword, command and comment kinds; new kinds always append at the end.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureKind {
    Block = 0,
    Modifier = 1,
    Type = 2,
    TypeValue = 3,
    Number = 4,
    Constant = 5,
    Boolean = 6,
    String = 7,
    MathString = 8,
    FileString = 9,
    TextSeparator = 10,
    TextDelimiter = 11,
    MathDelimiter = 12,
    Keyword = 13,
    Command = 14,
    Comment = 15,
}

impl CaptureKind {
    /// Every capture kind, in id order.
    pub const ALL: &'static [CaptureKind] = &[
        CaptureKind::Block,
        CaptureKind::Modifier,
        CaptureKind::Type,
        CaptureKind::TypeValue,
        CaptureKind::Number,
        CaptureKind::Constant,
        CaptureKind::Boolean,
        CaptureKind::String,
        CaptureKind::MathString,
        CaptureKind::FileString,
        CaptureKind::TextSeparator,
        CaptureKind::TextDelimiter,
        CaptureKind::MathDelimiter,
        CaptureKind::Keyword,
        CaptureKind::Command,
        CaptureKind::Comment,
    ];

    /// Look up a capture kind from its canonical query name.
    ///
    /// Returns `None` for anything unrecognized. Queries routinely produce
    /// names this taxonomy doesn't model yet; that is a normal case and must
    /// degrade to "no classification", never to an error.
    pub fn from_name(name: &str) -> Option<CaptureKind> {
        match name {
            "block" => Some(CaptureKind::Block),
            "modifier" => Some(CaptureKind::Modifier),
            "type" => Some(CaptureKind::Type),
            "type.value" => Some(CaptureKind::TypeValue),
            "number" => Some(CaptureKind::Number),
            "constant" => Some(CaptureKind::Constant),
            "boolean" => Some(CaptureKind::Boolean),
            "string" => Some(CaptureKind::String),
            "string.math" => Some(CaptureKind::MathString),
            "string.file" => Some(CaptureKind::FileString),
            "text.separator" => Some(CaptureKind::TextSeparator),
            "text.delimiter" => Some(CaptureKind::TextDelimiter),
            "math.delimiter" => Some(CaptureKind::MathDelimiter),
            "keyword" => Some(CaptureKind::Keyword),
            "command" => Some(CaptureKind::Command),
            "comment" => Some(CaptureKind::Comment),
            _ => None,
        }
    }

    /// The canonical query name for this kind. Round-trips with
    /// [`CaptureKind::from_name`].
    pub const fn as_name(self) -> &'static str {
        match self {
            CaptureKind::Block => "block",
            CaptureKind::Modifier => "modifier",
            CaptureKind::Type => "type",
            CaptureKind::TypeValue => "type.value",
            CaptureKind::Number => "number",
            CaptureKind::Constant => "constant",
            CaptureKind::Boolean => "boolean",
            CaptureKind::String => "string",
            CaptureKind::MathString => "string.math",
            CaptureKind::FileString => "string.file",
            CaptureKind::TextSeparator => "text.separator",
            CaptureKind::TextDelimiter => "text.delimiter",
            CaptureKind::MathDelimiter => "math.delimiter",
            CaptureKind::Keyword => "keyword",
            CaptureKind::Command => "command",
            CaptureKind::Comment => "comment",
        }
    }

    /// The stable compact id for this kind.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Look up a capture kind from a stored id.
    ///
    /// Returns `None` for out-of-range values, so corrupted or cross-version
    /// data degrades to "no classification" instead of failing.
    pub const fn from_id(id: u8) -> Option<CaptureKind> {
        Some(match id {
            0 => CaptureKind::Block,
            1 => CaptureKind::Modifier,
            2 => CaptureKind::Type,
            3 => CaptureKind::TypeValue,
            4 => CaptureKind::Number,
            5 => CaptureKind::Constant,
            6 => CaptureKind::Boolean,
            7 => CaptureKind::String,
            8 => CaptureKind::MathString,
            9 => CaptureKind::FileString,
            10 => CaptureKind::TextSeparator,
            11 => CaptureKind::TextDelimiter,
            12 => CaptureKind::MathDelimiter,
            13 => CaptureKind::Keyword,
            14 => CaptureKind::Command,
            15 => CaptureKind::Comment,
            _ => return None,
        })
    }
}

impl std::fmt::Display for CaptureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_name())
    }
}
