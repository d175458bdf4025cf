//! Black option keys
//!
//! `[tool.black]` keys are written with dashes (`line-length`), sometimes
//! with underscores or a leading `--` copied from the command line. Every
//! accepted spelling is listed in [`KEY_TABLE`]; anything else is not a
//! black option.

/// An option black understands in `[tool.black]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlackOption {
    LineLength,
    TargetVersion,
    Pyi,
    SkipStringNormalization,
    SkipMagicTrailingComma,
    Preview,
    RequiredVersion,
    Include,
    Exclude,
    ExtendExclude,
    ForceExclude,
}

use BlackOption::*;

/// External spelling -> option.
pub const KEY_TABLE: &[(&str, BlackOption)] = &[
    ("line-length", LineLength),
    ("line_length", LineLength),
    ("--line-length", LineLength),
    ("target-version", TargetVersion),
    ("target_version", TargetVersion),
    ("--target-version", TargetVersion),
    ("pyi", Pyi),
    ("--pyi", Pyi),
    ("skip-string-normalization", SkipStringNormalization),
    ("skip_string_normalization", SkipStringNormalization),
    ("--skip-string-normalization", SkipStringNormalization),
    ("skip-magic-trailing-comma", SkipMagicTrailingComma),
    ("skip_magic_trailing_comma", SkipMagicTrailingComma),
    ("--skip-magic-trailing-comma", SkipMagicTrailingComma),
    ("preview", Preview),
    ("--preview", Preview),
    ("required-version", RequiredVersion),
    ("required_version", RequiredVersion),
    ("--required-version", RequiredVersion),
    ("include", Include),
    ("--include", Include),
    ("exclude", Exclude),
    ("--exclude", Exclude),
    ("extend-exclude", ExtendExclude),
    ("extend_exclude", ExtendExclude),
    ("--extend-exclude", ExtendExclude),
    ("force-exclude", ForceExclude),
    ("force_exclude", ForceExclude),
    ("--force-exclude", ForceExclude),
];

impl BlackOption {
    /// Look up an option by any of its accepted spellings.
    pub fn from_key(key: &str) -> Option<Self> {
        KEY_TABLE
            .iter()
            .find(|(spelling, _)| *spelling == key)
            .map(|(_, option)| *option)
    }

    /// Internal identifier, used as the key in a resolved black config.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineLength => "line_length",
            TargetVersion => "target_version",
            Pyi => "pyi",
            SkipStringNormalization => "skip_string_normalization",
            SkipMagicTrailingComma => "skip_magic_trailing_comma",
            Preview => "preview",
            RequiredVersion => "required_version",
            Include => "include",
            Exclude => "exclude",
            ExtendExclude => "extend_exclude",
            ForceExclude => "force_exclude",
        }
    }

    /// Command-line flag black takes for this option.
    pub fn flag(&self) -> &'static str {
        match self {
            LineLength => "--line-length",
            TargetVersion => "--target-version",
            Pyi => "--pyi",
            SkipStringNormalization => "--skip-string-normalization",
            SkipMagicTrailingComma => "--skip-magic-trailing-comma",
            Preview => "--preview",
            RequiredVersion => "--required-version",
            Include => "--include",
            Exclude => "--exclude",
            ExtendExclude => "--extend-exclude",
            ForceExclude => "--force-exclude",
        }
    }

    /// Whether the option changes formatting output.
    ///
    /// The include/exclude family only selects files, which has no meaning
    /// when the source arrives on stdin.
    pub fn affects_output(&self) -> bool {
        !matches!(self, Include | Exclude | ExtendExclude | ForceExclude)
    }

    /// Look up an option by its internal identifier.
    pub fn from_internal(name: &str) -> Option<Self> {
        KEY_TABLE
            .iter()
            .map(|(_, option)| *option)
            .find(|option| option.as_str() == name)
    }
}

impl std::fmt::Display for BlackOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("line-length", LineLength)]
    #[case("line_length", LineLength)]
    #[case("--line-length", LineLength)]
    #[case("--target-version", TargetVersion)]
    #[case("skip-string-normalization", SkipStringNormalization)]
    #[case("extend-exclude", ExtendExclude)]
    fn known_spellings_map_to_one_option(#[case] key: &str, #[case] expected: BlackOption) {
        assert_eq!(BlackOption::from_key(key), Some(expected));
    }

    #[rstest]
    #[case("line-lenght")]
    #[case("LINE-LENGTH")]
    #[case("-line-length")]
    #[case("")]
    fn unknown_spellings_are_rejected(#[case] key: &str) {
        assert_eq!(BlackOption::from_key(key), None);
    }

    #[test]
    fn every_spelling_normalizes_to_the_internal_name() {
        for (spelling, option) in KEY_TABLE {
            let stripped = spelling.trim_start_matches("--").replace('-', "_");
            assert_eq!(stripped, option.as_str(), "spelling {spelling}");
        }
    }

    #[test]
    fn internal_names_round_trip() {
        for (_, option) in KEY_TABLE {
            assert_eq!(BlackOption::from_internal(option.as_str()), Some(*option));
        }
    }

    #[test]
    fn file_selection_options_do_not_affect_output() {
        assert!(!Include.affects_output());
        assert!(!ForceExclude.affects_output());
        assert!(LineLength.affects_output());
        assert!(Preview.affects_output());
    }
}
