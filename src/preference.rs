//! The persisted theme preference and its string encoding.
//!
//! Decoding is deliberately lopsided: only the exact literal `"true"` is
//! recognized. Anything else, including a missing key, is [`Preference::Unset`]
//! and must not be treated as an explicit "off".

use crate::consts::{STORED_FALSE, STORED_TRUE};

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// Preference as read back from storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preference {
    /// Stored value was exactly `"true"`.
    Enabled,
    /// Absent, `"false"`, or any other string.
    #[default]
    Unset,
}

impl Preference {
    /// Decode a raw stored value.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some(STORED_TRUE) => Self::Enabled,
            _ => Self::Unset,
        }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }
}

/// Encode a checked state the way it is written to storage.
#[must_use]
pub fn encode_checked(checked: bool) -> &'static str {
    if checked { STORED_TRUE } else { STORED_FALSE }
}
