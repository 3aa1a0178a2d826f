use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Semantic category of an application error
///
/// Each code has exactly one wire-stable slug. Anything that does not match
/// a known slug collapses to [`Code::Internal`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    /// Unexpected failure whose details must not reach callers
    #[default]
    Internal,
    /// Requested entity does not exist
    NotFound,
    /// Caller supplied malformed or unacceptable input
    Invalid,
    /// Caller is not authenticated
    Unauthorized,
    /// Caller is authenticated but not allowed to perform the operation
    PermissionDenied,
    /// Operation conflicts with existing state
    Conflict,
}

impl Code {
    /// Every defined code, in declaration order
    pub const ALL: [Self; 6] = [
        Self::Internal,
        Self::NotFound,
        Self::Invalid,
        Self::Unauthorized,
        Self::PermissionDenied,
        Self::Conflict,
    ];

    /// Canonical slug used on the wire
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::NotFound => "not_found",
            Self::Invalid => "invalid",
            Self::Unauthorized => "unauthorized",
            Self::PermissionDenied => "permission_denied",
            Self::Conflict => "conflict",
        }
    }

    /// Parse a code from its slug
    ///
    /// Matching is exact and case-sensitive. Unknown input yields
    /// [`Code::Internal`]; this never fails.
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "not_found" => Self::NotFound,
            "invalid" => Self::Invalid,
            "unauthorized" => Self::Unauthorized,
            "permission_denied" => Self::PermissionDenied,
            "conflict" => Self::Conflict,
            _ => Self::Internal,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Code {
    fn from(slug: &str) -> Self {
        Self::from_slug(slug)
    }
}

impl FromStr for Code {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_slug(s))
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let slug = Cow::<'de, str>::deserialize(deserializer)?;
        Ok(Self::from_slug(&slug))
    }
}
