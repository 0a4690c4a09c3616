//! Literal tokens handed over by the SQL grammar.

use std::fmt;

/// Lexical kind of a literal token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// `b'0101'`
    BitString,
    /// `x'DEADBEEF'`
    HexString,
    /// `'text'`
    QuotedString,
    /// `$$text$$` or `$tag$text$tag$`
    DollarQuotedString,
    /// `N'text'`
    NationalString,
    /// `E'text'`
    EscapedString,
    Number,
    Boolean,
    Null,
}

impl LiteralKind {
    /// Name of the grammar node this kind corresponds to, used in diagnostics
    pub fn node_name(&self) -> &'static str {
        match self {
            LiteralKind::BitString => "SingleQuotedByteStringLiteral",
            LiteralKind::HexString => "HexStringLiteral",
            LiteralKind::QuotedString => "SingleQuotedString",
            LiteralKind::DollarQuotedString => "DollarQuotedString",
            LiteralKind::NationalString => "NationalStringLiteral",
            LiteralKind::EscapedString => "EscapedStringLiteral",
            LiteralKind::Number => "Number",
            LiteralKind::Boolean => "Boolean",
            LiteralKind::Null => "Null",
        }
    }
}

/// A literal as produced by the grammar: its kind plus the raw token text.
///
/// For bit and hex strings `raw` holds only the digits, quotes stripped and
/// case preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralToken {
    pub kind: LiteralKind,
    pub raw: String,
}

impl LiteralToken {
    pub fn new(kind: LiteralKind, raw: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
        }
    }

    pub fn bits(raw: impl Into<String>) -> Self {
        Self::new(LiteralKind::BitString, raw)
    }

    pub fn hex(raw: impl Into<String>) -> Self {
        Self::new(LiteralKind::HexString, raw)
    }

    pub fn string(raw: impl Into<String>) -> Self {
        Self::new(LiteralKind::QuotedString, raw)
    }

    pub fn national(raw: impl Into<String>) -> Self {
        Self::new(LiteralKind::NationalString, raw)
    }

    pub fn number(raw: impl Into<String>) -> Self {
        Self::new(LiteralKind::Number, raw)
    }

    pub fn boolean(value: bool) -> Self {
        Self::new(LiteralKind::Boolean, if value { "true" } else { "false" })
    }

    pub fn null() -> Self {
        Self::new(LiteralKind::Null, "NULL")
    }
}

/// Renders the token as its grammar node, e.g. `NationalStringLiteral("hmmm")`
impl fmt::Display for LiteralToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LiteralKind::Null => write!(f, "{}", self.kind.node_name()),
            _ => write!(f, "{}({:?})", self.kind.node_name(), self.raw),
        }
    }
}
