//! Core types for selection analysis.
//!
//! This module defines the data structures produced by the character
//! analyzer and consumed by anything rendering summaries or detail views.

use serde::Serialize;

/// Classification of a single UTF-16 code unit.
///
/// Exactly one category applies to every unit. Dedicated whitespace and
/// control categories take precedence over the printable range, so a space
/// is `Space` rather than `PrintableAscii`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub enum CharCategory {
    /// ASCII space (32)
    Space,
    /// Line feed, `\n` (10)
    LineFeed,
    /// Carriage return, `\r` (13)
    CarriageReturn,
    /// Horizontal tab, `\t` (9)
    Tab,
    /// Vertical tab (11)
    VerticalTab,
    /// Form feed (12)
    FormFeed,
    /// Backspace (8)
    Backspace,
    /// NUL (0)
    Null,
    /// Printable ASCII, 32 through 126
    PrintableAscii,
    /// Remaining control characters, DEL, and every unit above 126
    NonPrintable,
}

impl CharCategory {
    /// Get the human-readable name shown in detail views
    pub fn name(&self) -> &'static str {
        match self {
            CharCategory::Space => "Space",
            CharCategory::LineFeed => "Line Feed (LF)",
            CharCategory::CarriageReturn => "Carriage Return (CR)",
            CharCategory::Tab => "Horizontal Tab",
            CharCategory::VerticalTab => "Vertical Tab",
            CharCategory::FormFeed => "Form Feed",
            CharCategory::Backspace => "Backspace",
            CharCategory::Null => "Null",
            CharCategory::PrintableAscii => "Printable ASCII",
            CharCategory::NonPrintable => "Non-printable",
        }
    }

    /// Whether the category names a control character
    pub fn is_control(&self) -> bool {
        matches!(
            self,
            CharCategory::LineFeed
                | CharCategory::CarriageReturn
                | CharCategory::Tab
                | CharCategory::VerticalTab
                | CharCategory::FormFeed
                | CharCategory::Backspace
                | CharCategory::Null
        )
    }
}

/// One analyzed code unit with its display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharDescriptor {
    /// Zero-based position in the analyzed buffer, counted in code units
    pub index: usize,
    /// The raw UTF-16 code unit; its numeric value is the code point
    /// reported for this position
    pub code_unit: u16,
    /// Human-safe rendering of the unit (`␣`, `↵`, `[7]`, or the character
    /// itself)
    pub glyph: String,
    /// Category assigned by the classification table
    pub category: CharCategory,
    /// Whether the unit is in the ASCII range (0 through 127)
    pub is_ascii: bool,
    /// Uppercase hex digits of the unit, no padding, no prefix
    pub hex: String,
}

impl CharDescriptor {
    /// `U+`-prefixed code point notation, zero-padded to four digits
    pub fn unicode_notation(&self) -> String {
        format!("U+{:04X}", self.code_unit)
    }

    /// `ASCII: N` for ASCII units, `Non-ASCII` otherwise
    pub fn ascii_label(&self) -> String {
        if self.is_ascii {
            format!("ASCII: {}", self.code_unit)
        } else {
            "Non-ASCII".to_string()
        }
    }
}

/// Result of analyzing a buffer: one descriptor per UTF-16 code unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Analysis {
    /// Length of the analyzed buffer in code units
    pub source_len: usize,
    /// Per-unit descriptors in buffer order; `descriptors[i].index == i`
    pub descriptors: Vec<CharDescriptor>,
}

/// A complete inspection of one selection.
///
/// Carries the analyzed buffer together with its analysis, so rendering
/// code receives everything in one payload instead of consulting shared
/// selection state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    /// The buffer that was analyzed: the literal content when enclosing
    /// quotes were stripped, otherwise the raw selection
    pub text: String,
    /// Whether the selection was a quoted string literal and its quotes
    /// were stripped before analysis
    pub literal: bool,
    /// Per-unit analysis of `text`
    pub analysis: Analysis,
}
