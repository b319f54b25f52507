//! Common types shared between splitting and concatenation

/// Where the delimiter text goes when a string is split or joined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Delimiter is dropped
    #[default]
    Ignore,
    /// Delimiter is placed in front of each segment (except the first when splitting)
    Prepend,
    /// Delimiter is placed after each segment (except the last when splitting)
    Append,
    /// Delimiter is placed strictly between elements. Only valid for concatenation.
    Insert,
}

impl Style {
    /// Returns true if `split` accepts this style
    pub(crate) fn supports_split(&self) -> bool {
        !matches!(self, Style::Insert)
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Style::Ignore => "ignore",
            Style::Prepend => "prepend",
            Style::Append => "append",
            Style::Insert => "insert",
        }
    }
}

/// Maps the signed limit convention to an optional cap:
/// negative is unlimited, anything else is a maximum count.
pub(crate) fn cap(limit: isize) -> Option<usize> {
    if limit < 0 {
        None
    } else {
        Some(limit.unsigned_abs())
    }
}
