// Accepted version-value shapes for the catalog file

use regex::Regex;

/// Catalog files must carry this name, compared case-insensitively.
pub const EXPECTED_FILE_NAME: &str = "libs.versions.toml";

/// Sentinel meaning "no value was provided".
pub const UNSPECIFIED: &str = "unspecified";

/// The closed set of value shapes a catalog version entry may take.
///
/// `Dev` and `Placeholder` are whole-value development markers; the rest are
/// dotted numeric versions, optionally carrying a pre-release suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPattern {
    Dev,
    Placeholder,
    Major,
    MajorPatch,
    MajorMinorPatch,
    MajorMinorPatchSnapshot,
    MajorMinorPatchRelease,
}

impl VersionPattern {
    /// The regex source for this shape (full-value match, unanchored here).
    pub fn shape(self) -> &'static str {
        match self {
            Self::Dev => "DEV",
            Self::Placeholder => "PLACEHOLDER",
            Self::Major => r"\d+",
            Self::MajorPatch => r"\d+\.\d+",
            Self::MajorMinorPatch => r"\d+\.\d+\.\d+",
            Self::MajorMinorPatchSnapshot => r"\d+\.\d+\.\d+-SNAPSHOT",
            Self::MajorMinorPatchRelease => r"\d+\.\d+\.\d+-RELEASE",
        }
    }

    /// Every accepted shape, development markers included ("set" path).
    pub fn all() -> &'static [Self] {
        &[
            Self::Dev,
            Self::Placeholder,
            Self::Major,
            Self::MajorPatch,
            Self::MajorMinorPatch,
            Self::MajorMinorPatchSnapshot,
            Self::MajorMinorPatchRelease,
        ]
    }

    /// Shapes a version must take to be incremented ("update" path).
    /// Development markers carry no arithmetic meaning and are excluded.
    pub fn without_dev() -> &'static [Self] {
        &[
            Self::Major,
            Self::MajorPatch,
            Self::MajorMinorPatch,
            Self::MajorMinorPatchSnapshot,
            Self::MajorMinorPatchRelease,
        ]
    }

    /// Whether `value` matches this shape in full.
    pub fn matches(self, value: &str) -> bool {
        // Shapes are static and known-good, compilation cannot fail.
        let re = Regex::new(&format!("^{}$", self.shape())).expect("static shape regex");
        re.is_match(value)
    }
}

/// Whether `value` fully matches at least one of `patterns`.
pub fn matches_any(value: &str, patterns: &[VersionPattern]) -> bool {
    patterns.iter().any(|p| p.matches(value))
}

/// Human-readable list of the shapes in `patterns`, for error messages.
pub fn shape_list(patterns: &[VersionPattern]) -> String {
    let shapes: Vec<&str> = patterns.iter().map(|p| p.shape()).collect();
    format!("[{}]", shapes.join(", "))
}

/// Compiled line patterns of the form `alias="<shape>"` for each accepted
/// shape. Lines are matched against these after stripping space characters.
pub fn alias_line_patterns(alias: &str, patterns: &[VersionPattern]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| {
            let source = format!("^{}=\"{}\"$", regex::escape(alias), p.shape());
            Regex::new(&source).expect("static line regex")
        })
        .collect()
}
