//! The four verdict tokens the analyzer can emit, and the two safety axes
//! they belong to.

use std::fmt;

/// One of the two independent safety properties tracked per test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Null-pointer safety (`*_DIV_ZERO` tokens).
    NullPointer,
    /// Array-bounds safety (`*_OUT_OF_BOUNDS` tokens).
    OutOfBounds,
}

/// A verdict literal emitted by the analyzer on stdout.
///
/// Each token belongs to exactly one [`Axis`]; anything outside these four
/// literals is not a verdict and is dropped by the output scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerdictToken {
    /// Null-pointer axis: definitely safe.
    NoDivZero,
    /// Null-pointer axis: may be unsafe.
    MayDivZero,
    /// Bounds axis: definitely safe.
    NoOutOfBounds,
    /// Bounds axis: may be unsafe.
    MayOutOfBounds,
}

impl VerdictToken {
    /// Classify a candidate token string. Returns `None` for anything that
    /// is not exactly one of the four literals.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "NO_DIV_ZERO" => Some(Self::NoDivZero),
            "MAY_DIV_ZERO" => Some(Self::MayDivZero),
            "NO_OUT_OF_BOUNDS" => Some(Self::NoOutOfBounds),
            "MAY_OUT_OF_BOUNDS" => Some(Self::MayOutOfBounds),
            _ => None,
        }
    }

    /// The axis this token reports on.
    pub const fn axis(self) -> Axis {
        match self {
            Self::NoDivZero | Self::MayDivZero => Axis::NullPointer,
            Self::NoOutOfBounds | Self::MayOutOfBounds => Axis::OutOfBounds,
        }
    }

    /// The literal string as it appears in analyzer output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoDivZero => "NO_DIV_ZERO",
            Self::MayDivZero => "MAY_DIV_ZERO",
            Self::NoOutOfBounds => "NO_OUT_OF_BOUNDS",
            Self::MayOutOfBounds => "MAY_OUT_OF_BOUNDS",
        }
    }
}

impl fmt::Display for VerdictToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
