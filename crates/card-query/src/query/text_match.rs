//! Case-insensitive text matching used by the default name term and the
//! built-in text filters.

/// A needle lowercased once at compile time and matched against many haystacks.
#[derive(Debug, Clone)]
pub struct TextNeedle {
    lowered: String,
}

impl TextNeedle {
    pub fn new(value: &str) -> Self {
        Self {
            lowered: value.to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        self.lowered.as_str()
    }

    /// True when `haystack` contains the needle, ignoring case.
    pub fn found_in(&self, haystack: &str) -> bool {
        if self.lowered.is_empty() {
            return true;
        }
        if haystack.is_ascii() && self.lowered.is_ascii() {
            return ascii_contains_ignore_case(haystack, self.lowered.as_str());
        }
        haystack.to_lowercase().contains(self.lowered.as_str())
    }

    /// True when `haystack` equals the needle, ignoring case.
    pub fn equals(&self, haystack: &str) -> bool {
        if haystack.is_ascii() && self.lowered.is_ascii() {
            return haystack.eq_ignore_ascii_case(self.lowered.as_str());
        }
        haystack.to_lowercase() == self.lowered
    }
}

fn ascii_contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    let needle = lowered_needle.as_bytes();
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}
