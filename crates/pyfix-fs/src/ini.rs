//! INI document parsing for `setup.cfg` and `.isort.cfg`.
//!
//! Follows the defaults of Python's `configparser`, which is what the tools
//! owning these files use to read them:
//!
//! ```text
//! # comment
//! [isort]
//! profile = black
//! known_first_party:
//!     app
//!     lib
//! ```
//!
//! - `key = value` and `key: value` are both accepted; keys are lower-cased
//! - lines indented deeper than the option continue its value, joined
//!   with `\n`; blank lines inside such a value are kept as empty lines
//! - full-line comments start with `#` or `;`
//! - duplicate sections and duplicate keys within a section are errors

use regex::Regex;
use std::sync::LazyLock;

/// Section header: `[name]`, trailing text ignored as configparser does.
static SECTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(?P<name>[^\]]+)\]").expect("Invalid section regex"));

/// Option line: the first `=` or `:` separates key from value.
static OPTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<key>[^=:]*?)\s*[=:]\s*(?P<value>.*)$").expect("Invalid option regex")
});

/// A parse failure with the 1-based line it occurred on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct IniError {
    pub line: usize,
    pub message: String,
}

/// A named section and its options, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniSection {
    name: String,
    entries: Vec<(String, String)>,
}

impl IniSection {
    /// Iterate over options in file order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A parsed INI file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: Vec<IniSection>,
}

impl IniDocument {
    /// Parse INI text.
    pub fn parse(content: &str) -> Result<Self, IniError> {
        let mut sections: Vec<IniSection> = Vec::new();
        // Indentation of the last option line while its value may continue.
        let mut option_indent: Option<usize> = None;
        // Blank lines seen since the last line of the current value.
        let mut pending_blanks = 0;

        for (idx, raw_line) in content.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = raw_line.trim();

            if trimmed.is_empty() {
                if option_indent.is_some() {
                    pending_blanks += 1;
                }
                continue;
            }
            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            let indent = raw_line.len() - raw_line.trim_start().len();
            if option_indent.is_some_and(|level| indent > level) {
                if let Some((_, value)) = sections.last_mut().and_then(|s| s.entries.last_mut()) {
                    if !value.is_empty() {
                        value.push_str(&"\n".repeat(pending_blanks + 1));
                    }
                    value.push_str(trimmed);
                }
                pending_blanks = 0;
                continue;
            }
            pending_blanks = 0;

            if let Some(caps) = SECTION_REGEX.captures(trimmed) {
                let name = caps["name"].to_string();
                if sections.iter().any(|s| s.name == name) {
                    return Err(IniError {
                        line: line_no,
                        message: format!("section '{}' already exists", name),
                    });
                }
                sections.push(IniSection {
                    name,
                    entries: Vec::new(),
                });
                option_indent = None;
                continue;
            }

            let Some(section) = sections.last_mut() else {
                return Err(IniError {
                    line: line_no,
                    message: "file contains no section headers".to_string(),
                });
            };

            let Some(caps) = OPTION_REGEX.captures(trimmed) else {
                return Err(IniError {
                    line: line_no,
                    message: format!("expected 'key = value', found '{}'", trimmed),
                });
            };

            let key = caps["key"].trim().to_lowercase();
            if key.is_empty() {
                return Err(IniError {
                    line: line_no,
                    message: "option without a name".to_string(),
                });
            }
            if section.entries.iter().any(|(k, _)| *k == key) {
                return Err(IniError {
                    line: line_no,
                    message: format!(
                        "option '{}' in section '{}' already exists",
                        key, section.name
                    ),
                });
            }

            section.entries.push((key, caps["value"].trim().to_string()));
            option_indent = Some(indent);
        }

        Ok(Self { sections })
    }

    /// Look up a section by exact name.
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().find(|s| s.name == name)
    }
}
