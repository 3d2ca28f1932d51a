//! Per-code-unit analysis of selected text.
//!
//! The analyzer walks a buffer by UTF-16 code unit and classifies each unit
//! against ordered rule tables, producing one [`CharDescriptor`] per unit.
//! Iteration is code-unit based to match how editors index strings: a
//! character outside the Basic Multilingual Plane is reported as its two
//! surrogate halves, each with its own descriptor.

use crate::types::{Analysis, CharCategory, CharDescriptor};

// Code units with dedicated rules.
const NUL: u16 = 0x00;
const BACKSPACE: u16 = 0x08;
const TAB: u16 = 0x09;
const LINE_FEED: u16 = 0x0A;
const VERTICAL_TAB: u16 = 0x0B;
const FORM_FEED: u16 = 0x0C;
const CARRIAGE_RETURN: u16 = 0x0D;
const SPACE: u16 = 0x20;
const DELETE: u16 = 0x7F;

/// Inclusive printable ASCII range, space through tilde.
const PRINTABLE_START: u16 = 0x20;
const PRINTABLE_END: u16 = 0x7E;

/// Highest code unit in the ASCII range.
const MAX_ASCII: u16 = 0x7F;

/// Matcher for one code unit in a rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnitPattern {
    /// Exactly this unit
    Exact(u16),
    /// Inclusive range of units
    Range(u16, u16),
    /// Any unit; terminates a table
    Any,
}

impl UnitPattern {
    fn matches(self, unit: u16) -> bool {
        match self {
            UnitPattern::Exact(expected) => unit == expected,
            UnitPattern::Range(lo, hi) => (lo..=hi).contains(&unit),
            UnitPattern::Any => true,
        }
    }
}

/// Classification rules, checked top to bottom with the first match
/// winning. The exact-unit rows shadow the printable range below them,
/// which is what makes a space `Space` rather than `PrintableAscii`.
pub(crate) const CATEGORY_RULES: &[(UnitPattern, CharCategory)] = &[
    (UnitPattern::Exact(SPACE), CharCategory::Space),
    (UnitPattern::Exact(LINE_FEED), CharCategory::LineFeed),
    (UnitPattern::Exact(CARRIAGE_RETURN), CharCategory::CarriageReturn),
    (UnitPattern::Exact(TAB), CharCategory::Tab),
    (UnitPattern::Exact(VERTICAL_TAB), CharCategory::VerticalTab),
    (UnitPattern::Exact(FORM_FEED), CharCategory::FormFeed),
    (UnitPattern::Exact(BACKSPACE), CharCategory::Backspace),
    (UnitPattern::Exact(NUL), CharCategory::Null),
    (
        UnitPattern::Range(PRINTABLE_START, PRINTABLE_END),
        CharCategory::PrintableAscii,
    ),
    (UnitPattern::Any, CharCategory::NonPrintable),
];

/// Rendering chosen by a glyph rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GlyphForm {
    /// A fixed replacement symbol
    Symbol(&'static str),
    /// `[N]` with the unit's decimal value
    Bracketed,
    /// The character itself
    Verbatim,
}

/// Display-glyph rules, independent of classification and likewise
/// first-match-wins: named symbols shadow the bracketed control range,
/// and everything unmatched renders verbatim. Carriage return shares the
/// line feed symbol.
pub(crate) const GLYPH_RULES: &[(UnitPattern, GlyphForm)] = &[
    (UnitPattern::Exact(SPACE), GlyphForm::Symbol("␣")),
    (UnitPattern::Exact(LINE_FEED), GlyphForm::Symbol("↵")),
    (UnitPattern::Exact(TAB), GlyphForm::Symbol("⇥")),
    (UnitPattern::Exact(CARRIAGE_RETURN), GlyphForm::Symbol("↵")),
    (UnitPattern::Exact(NUL), GlyphForm::Symbol("␀")),
    (UnitPattern::Range(NUL, 0x1F), GlyphForm::Bracketed),
    (UnitPattern::Exact(DELETE), GlyphForm::Bracketed),
    (UnitPattern::Any, GlyphForm::Verbatim),
];

/// Classify one code unit with the category table.
pub(crate) fn categorize(unit: u16) -> CharCategory {
    for (pattern, category) in CATEGORY_RULES {
        if pattern.matches(unit) {
            return *category;
        }
    }
    // Unreachable while the table keeps its catch-all row.
    CharCategory::NonPrintable
}

/// Render one code unit as a human-safe glyph.
pub(crate) fn display_glyph(unit: u16) -> String {
    for (pattern, form) in GLYPH_RULES {
        if pattern.matches(unit) {
            return match form {
                GlyphForm::Symbol(symbol) => (*symbol).to_string(),
                GlyphForm::Bracketed => format!("[{}]", unit),
                GlyphForm::Verbatim => verbatim_glyph(unit),
            };
        }
    }
    verbatim_glyph(unit)
}

/// The unit as a character. Surrogate halves have no scalar value and
/// render as U+FFFD, which is what editors show for a lone surrogate.
fn verbatim_glyph(unit: u16) -> String {
    match char::from_u32(u32::from(unit)) {
        Some(ch) => ch.to_string(),
        None => char::REPLACEMENT_CHARACTER.to_string(),
    }
}

/// Analyze a buffer, producing one descriptor per UTF-16 code unit.
///
/// Total over any input: the empty string yields an empty analysis and no
/// buffer can fail. Analysis is pure, so repeated calls on the same text
/// return equal results.
pub fn analyze(text: &str) -> Analysis {
    let descriptors: Vec<CharDescriptor> = text
        .encode_utf16()
        .enumerate()
        .map(|(index, unit)| CharDescriptor {
            index,
            code_unit: unit,
            glyph: display_glyph(unit),
            category: categorize(unit),
            is_ascii: unit <= MAX_ASCII,
            hex: format!("{:X}", unit),
        })
        .collect();

    Analysis {
        source_len: descriptors.len(),
        descriptors,
    }
}
