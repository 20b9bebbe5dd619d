use crate::index::tree::Keyed;
use std::fmt;

/// One course of the catalog.
///
/// `code` is the key of the index. It is compared byte-wise, so callers
/// normalize it (uppercase) before asking the index for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub code: String,
    pub name: String,
    pub prereqs: Vec<String>,
}

impl Course {
    pub fn new(code: &str, name: &str) -> Course {
        Course {
            code: code.to_string(),
            name: name.to_string(),
            prereqs: vec![],
        }
    }

    pub fn with_prereqs(code: &str, name: &str, prereqs: &[&str]) -> Course {
        Course {
            code: code.to_string(),
            name: name.to_string(),
            prereqs: prereqs.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// `code, name`, the line used by the sorted listing
    pub fn summary(&self) -> String {
        format!("{}, {}", self.code, self.name)
    }
}

/// Codes are kept uppercase. Every code bound for the index, from a source
/// line or from the user, goes through here first.
pub fn normalize_code(input: &str) -> String {
    input.trim().to_uppercase()
}

impl Keyed for Course {
    fn key(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        if self.prereqs.is_empty() {
            write!(f, "Prerequisites: none")
        } else {
            write!(f, "Prerequisites: {}", self.prereqs.join(", "))
        }
    }
}
