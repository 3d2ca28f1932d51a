//! # strscope - Per-character inspection of selected text
//!
//! This library takes a text selection and reports per-character metadata:
//! position, display glyph, decimal and hex values, Unicode notation, and a
//! human-readable name for whitespace and control characters. When the
//! selection looks like a quoted string literal, the enclosing quotes can be
//! stripped so only the literal's content is analyzed.
//!
//! ## Code units
//!
//! Analysis walks the text by UTF-16 code unit, matching how editors index
//! and measure strings. A character outside the Basic Multilingual Plane
//! therefore produces two descriptors, one per surrogate half, and
//! [`Analysis::source_len`] is the selection length as an editor would
//! report it rather than a `char` count.
//!
//! ## Usage
//!
//! ```
//! use strscope::inspect;
//!
//! let report = inspect("'hi\n'");
//!
//! assert!(report.literal);
//! assert_eq!(report.analysis.source_len, 3);
//! for d in &report.analysis.descriptors {
//!     println!("{}: {} ({})", d.index, d.glyph, d.category.name());
//! }
//! ```

mod analyzer;
mod literal;
mod types;

pub use analyzer::analyze;
pub use literal::detect_literal;
pub use types::{Analysis, CharCategory, CharDescriptor, Inspection};

/// Options for selection inspection.
#[derive(Debug, Clone)]
pub struct InspectOptions {
    /// Strip matching quotes and analyze the content between them when the
    /// selection is a string literal (default: true)
    pub unwrap_literals: bool,
}

impl InspectOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self {
            unwrap_literals: true,
        }
    }

    /// Enable or disable string-literal unwrapping
    pub fn with_unwrap_literals(mut self, enabled: bool) -> Self {
        self.unwrap_literals = enabled;
        self
    }
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Inspect a selection with default options.
///
/// Runs literal detection, analyzes either the unquoted content or the raw
/// selection, and returns the whole payload needed to render a summary and
/// a per-character detail view.
pub fn inspect(text: &str) -> Inspection {
    inspect_with_options(text, &InspectOptions::new())
}

/// Inspect a selection with explicit options.
pub fn inspect_with_options(text: &str, options: &InspectOptions) -> Inspection {
    if options.unwrap_literals {
        if let Some(content) = detect_literal(text) {
            return Inspection {
                text: content.to_string(),
                literal: true,
                analysis: analyze(content),
            };
        }
    }

    Inspection {
        text: text.to_string(),
        literal: false,
        analysis: analyze(text),
    }
}
