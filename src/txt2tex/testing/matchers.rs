//! Text matching for assertions

/// How to compare a text field
#[derive(Debug, Clone)]
pub enum TextMatch {
    /// Exact text match
    Exact(String),
    /// Text starts with prefix
    StartsWith(String),
    /// Text contains substring
    Contains(String),
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix),
            TextMatch::Contains(substring) => actual.contains(substring),
        }
    }

    /// Assert that the actual text matches this pattern
    pub fn assert(&self, actual: &str, context: &str) {
        let (how, expected) = match self {
            TextMatch::Exact(expected) => ("be", expected),
            TextMatch::StartsWith(prefix) => ("start with", prefix),
            TextMatch::Contains(substring) => ("contain", substring),
        };
        assert!(
            self.matches(actual),
            "{}: Expected text to {} '{}', but got '{}'",
            context,
            how,
            expected,
            actual
        );
    }
}

impl From<&str> for TextMatch {
    fn from(text: &str) -> Self {
        TextMatch::Exact(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        assert!(TextMatch::Exact("p".into()).matches("p"));
        assert!(TextMatch::StartsWith("Sol".into()).matches("Solution 1"));
        assert!(TextMatch::Contains("land".into()).matches("p land q"));
        assert!(!TextMatch::Exact("p".into()).matches("q"));
    }

    #[test]
    #[should_panic(expected = "items[0]: Expected text to be 'a', but got 'b'")]
    fn test_assert_reports_context() {
        TextMatch::Exact("a".into()).assert("b", "items[0]");
    }
}
