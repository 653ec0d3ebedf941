use std::fmt;

/// Two-letter domain identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Type expression errors (VTE)
    TE,
    /// Schema document errors (VDC)
    DC,
    /// Configuration errors (VCF)
    CF,
}

impl Domain {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TE => "TE",
            Self::DC => "DC",
            Self::CF => "CF",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Category {
    /// Syntax errors (malformed input)
    Syntax = 0,
    /// Resolution errors (failed lookups)
    Resolution = 1,
    /// Validation errors (constraint violations)
    Validation = 2,
    /// Conflict errors (duplicate definitions)
    Conflict = 3,
    /// Missing errors (required element absent)
    Missing = 4,
    /// Cycle errors (circular references)
    Cycle = 5,
    /// Warning (non-fatal issues)
    Warning = 8,
    /// Internal errors
    Internal = 9,
}

impl Category {
    pub const fn as_digit(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Category {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.as_digit())
    }
}

/// Compositional error code - V[Domain][Category][Seq]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    pub domain: Domain,
    pub category: Category,
    pub sequence: u16,
}

impl ErrorCode {
    pub const fn new(
        domain: Domain,
        category: Category,
        sequence: u16,
    ) -> Self {
        Self {
            domain,
            category,
            sequence,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "V{}{}{:03}",
            self.domain,
            self.category.as_digit(),
            self.sequence
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Resolution fails
    #[default]
    Error,
    /// Resolution succeeds, shown by default
    Warning,
    Info,
    Hint,
}

impl Severity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Hint => "hint",
        }
    }

    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Error)
    }

    pub(crate) const fn rank(&self) -> u8 {
        match self {
            Self::Error => 3,
            Self::Warning => 2,
            Self::Info => 1,
            Self::Hint => 0,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
