//! Formatter identities

use serde::{Deserialize, Serialize};

/// The two formatters pyfix drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterId {
    /// black, the primary formatter: layout and line wrapping
    Black,
    /// isort, the secondary formatter: import ordering
    Isort,
}

impl FormatterId {
    pub const ALL: [FormatterId; 2] = [Self::Black, Self::Isort];

    /// Name of the formatter, which is also its Python module name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Isort => "isort",
        }
    }
}

impl std::fmt::Display for FormatterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
