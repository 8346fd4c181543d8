use std::fmt;

/// Wildcard name filter the pizza service understands. The only two shapes
/// ever sent on the wire are `*` (match everything) and `*text*`, with
/// literal asterisks in the operator's input escaped as `\*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter(String);

impl NameFilter {
    /// The match-everything filter, `*`.
    pub fn any() -> Self {
        Self("*".to_string())
    }

    /// Substring filter built from raw operator input. Blank input (or a
    /// missing input element upstream) degrades to [`NameFilter::any`].
    pub fn contains(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::any();
        }
        let escaped = trimmed.replace('*', "\\*");
        Self(format!("*{}*", escaped))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NameFilter {
    fn default() -> Self {
        Self::any()
    }
}

impl fmt::Display for NameFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
