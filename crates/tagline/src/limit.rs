//! Length measurement and budget resolution.
//!
//! A tag line is bounded by one length budget, measured either in characters
//! or in UTF-8 bytes, and optionally by a tag count. Linux limits filenames by
//! byte length, so `"自然"` counts as 2 characters but 6 bytes.

use std::fmt;
use std::str::FromStr;

use crate::errors::SettingsError;

/// Character budget applied when no limit is configured.
pub const DEFAULT_CHARS_LIMIT: usize = 120;

/// How the length of a tag line is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthMode {
    /// Count Unicode scalar values.
    Char,
    /// Count UTF-8 encoded bytes.
    Byte,
    /// Never limit the length.
    Unlimited,
}

impl LengthMode {
    /// Return the canonical mode name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Byte => "byte",
            Self::Unlimited => "unlimited",
        }
    }
}

impl fmt::Display for LengthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthMode {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "char" | "chars" => Ok(Self::Char),
            "byte" | "bytes" => Ok(Self::Byte),
            "unlimited" => Ok(Self::Unlimited),
            _ => Err(SettingsError::UnknownLengthMode(value.to_string())),
        }
    }
}

/// The resolved length budget of a tag line.
///
/// # Examples
///
/// ```
/// use tagline::LengthBudget;
///
/// assert_eq!(LengthBudget::resolve(0, 0, None), LengthBudget::Chars(120));
/// assert_eq!(LengthBudget::resolve(40, 10, None), LengthBudget::Bytes(10));
/// assert_eq!(LengthBudget::resolve(-1, 10, None), LengthBudget::Unlimited);
/// assert_eq!(LengthBudget::Bytes(10).measure("風景"), 6);
/// assert_eq!(LengthBudget::Chars(10).measure("風景"), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBudget {
    /// At most this many characters.
    Chars(usize),
    /// At most this many UTF-8 bytes.
    Bytes(usize),
    /// No length bound; every tag measures as zero.
    Unlimited,
}

impl LengthBudget {
    /// Resolve the configured limits into one budget.
    ///
    /// A negative character or byte limit disables the length bound. A zero
    /// character limit means the default of [`DEFAULT_CHARS_LIMIT`]. An
    /// explicit [`LengthMode::Char`] always counts characters. With an explicit
    /// [`LengthMode::Byte`], the character limit value doubles as the byte
    /// limit when no positive byte limit is set. Without a mode, a positive
    /// byte limit takes precedence over the character limit.
    #[must_use]
    pub fn resolve(chars_limit: i64, bytes_limit: i64, mode: Option<LengthMode>) -> Self {
        if chars_limit < 0 || bytes_limit < 0 || mode == Some(LengthMode::Unlimited) {
            return Self::Unlimited;
        }
        let chars = positive(chars_limit).unwrap_or(DEFAULT_CHARS_LIMIT);
        match (positive(bytes_limit), mode) {
            (_, Some(LengthMode::Char)) => Self::Chars(chars),
            (Some(bytes), _) => Self::Bytes(bytes),
            (None, Some(LengthMode::Byte)) => Self::Bytes(chars),
            (None, _) => Self::Chars(chars),
        }
    }

    /// Measure text with this budget's length function.
    #[must_use]
    pub fn measure(self, text: &str) -> usize {
        match self {
            Self::Chars(_) => text.chars().count(),
            Self::Bytes(_) => text.len(),
            Self::Unlimited => 0,
        }
    }

    /// Return the largest accepted measured length.
    #[must_use]
    pub const fn limit(self) -> usize {
        match self {
            Self::Chars(limit) | Self::Bytes(limit) => limit,
            Self::Unlimited => usize::MAX,
        }
    }

    /// Return the measurement mode of this budget.
    #[must_use]
    pub const fn mode(self) -> LengthMode {
        match self {
            Self::Chars(_) => LengthMode::Char,
            Self::Bytes(_) => LengthMode::Byte,
            Self::Unlimited => LengthMode::Unlimited,
        }
    }
}

impl Default for LengthBudget {
    fn default() -> Self {
        Self::Chars(DEFAULT_CHARS_LIMIT)
    }
}

/// Convert a configured count into a positive `usize`, treating zero and
/// negative values as unset.
pub(crate) fn positive(value: i64) -> Option<usize> {
    usize::try_from(value).ok().filter(|count| *count > 0)
}
