// Version value parsing, rendering and the next-version algorithm

use std::fmt;
use std::str::FromStr;

/// Low-order components roll over past this value.
const COMPONENT_CEILING: u32 = 999;

/// Errors raised while parsing a version string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionParseError {
    /// A dotted component that is not a non-negative integer
    #[error("invalid version component [{0}] - components must be non-negative integers")]
    InvalidComponent(String),

    /// More than three dotted components
    #[error("invalid version [{0}] - expected 1 to 3 dotted components")]
    InvalidArity(String),

    /// A pre-release suffix that is neither RELEASE nor SNAPSHOT
    #[error("invalid tag [{0}] - the tag must be RELEASE or SNAPSHOT")]
    UnknownTag(String),
}

/// Pre-release qualifier carried after the numeric components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Release,
    Snapshot,
}

impl Tag {
    pub fn render(self) -> &'static str {
        match self {
            Self::Release => "RELEASE",
            Self::Snapshot => "SNAPSHOT",
        }
    }

    /// Parse a tag suffix. Anything other than RELEASE or SNAPSHOT
    /// (case-insensitive) is a hard error, never a default.
    pub fn parse(s: &str) -> Result<Self, VersionParseError> {
        match s.to_uppercase().as_str() {
            "RELEASE" => Ok(Self::Release),
            "SNAPSHOT" => Ok(Self::Snapshot),
            _ => Err(VersionParseError::UnknownTag(s.to_string())),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}

/// Numeric part of a version, keeping the arity it was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Numbers {
    /// MAJOR
    One(u32),
    /// MAJOR.PATCH
    Two(u32, u32),
    /// MAJOR.MINOR.PATCH
    Three(u32, u32, u32),
}

impl Numbers {
    /// Increment rules per arity. Low-order components saturate at 999 and
    /// carry into the next-higher component; an all-zero version bumps MAJOR.
    fn next(self) -> Self {
        match self {
            Self::One(major) => Self::One(major + 1),
            Self::Two(0, 0) => Self::Two(1, 0),
            Self::Two(major, patch) => {
                if patch < COMPONENT_CEILING {
                    Self::Two(major, patch + 1)
                } else {
                    Self::Two(major + 1, 0)
                }
            }
            Self::Three(0, 0, 0) => Self::Three(1, 0, 0),
            Self::Three(major, minor, patch) => {
                if minor < COMPONENT_CEILING {
                    if patch < COMPONENT_CEILING {
                        Self::Three(major, minor, patch + 1)
                    } else {
                        Self::Three(major, minor + 1, 0)
                    }
                } else if patch == COMPONENT_CEILING {
                    Self::Three(major + 1, 0, 0)
                } else {
                    Self::Three(major, minor, patch + 1)
                }
            }
        }
    }
}

impl fmt::Display for Numbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(major) => write!(f, "{}", major),
            Self::Two(major, patch) => write!(f, "{}.{}", major, patch),
            Self::Three(major, minor, patch) => write!(f, "{}.{}.{}", major, minor, patch),
        }
    }
}

/// A parsed catalog version: 1 to 3 numeric components plus an optional tag.
/// Values are built fresh per invocation and never outlive one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    numbers: Numbers,
    tag: Option<Tag>,
}

impl Version {
    /// The version that follows this one. The numeric part advances per the
    /// arity rules; a RELEASE tag reopens as SNAPSHOT, any other tag is kept.
    pub fn next(self) -> Self {
        let tag = match self.tag {
            Some(Tag::Release) => Some(Tag::Snapshot),
            other => other,
        };
        Self {
            numbers: self.numbers.next(),
            tag,
        }
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (numeric, tag) = match s.split_once('-') {
            Some((numeric, suffix)) => (numeric, Some(Tag::parse(suffix)?)),
            None => (s, None),
        };

        let parts: Vec<&str> = numeric.split('.').collect();
        if parts.is_empty() || parts.len() > 3 {
            return Err(VersionParseError::InvalidArity(s.to_string()));
        }

        let mut components = Vec::with_capacity(parts.len());
        for part in &parts {
            let value = part
                .parse::<u32>()
                .map_err(|_| VersionParseError::InvalidComponent((*part).to_string()))?;
            components.push(value);
        }

        let numbers = match components[..] {
            [major] => Numbers::One(major),
            [major, patch] => Numbers::Two(major, patch),
            [major, minor, patch] => Numbers::Three(major, minor, patch),
            _ => return Err(VersionParseError::InvalidArity(s.to_string())),
        };

        Ok(Self { numbers, tag })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag {
            Some(tag) => write!(f, "{}-{}", self.numbers, tag),
            None => write!(f, "{}", self.numbers),
        }
    }
}
