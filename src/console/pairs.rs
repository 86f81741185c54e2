//! `--key value` argument pairs
//!
//! ```text
//! set --wpm 25 --weight --mode b
//!      └─ (wpm, 25)  (weight, -)  (mode, b)
//! ```
//!
//! Fixed-capacity output, nothing is allocated.

/// One `--key [value]` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandArgumentPair<'t> {
    /// Token suffix after `--`
    pub key: Option<&'t str>,
    /// Last plain token seen after the key
    pub value: Option<&'t str>,
}

impl<'t> CommandArgumentPair<'t> {
    pub const EMPTY: Self = Self { key: None, value: None };

    /// Key present without a value
    pub fn is_flag(&self) -> bool {
        self.key.is_some() && self.value.is_none()
    }
}

/// Key marker test: `--` followed by at least one character
fn key_of(token: &str) -> Option<&str> {
    token.strip_prefix("--").filter(|key| !key.is_empty())
}

/// Convert arguments into key/value pairs
///
/// A plain token before the first key is dropped. Extraction stops at the
/// first key that would not fit in `pairs`. Returns the number of pairs found.
pub fn arguments_to_pairs<'t>(tokens: &[&'t str], pairs: &mut [CommandArgumentPair<'t>]) -> usize {
    pairs.fill(CommandArgumentPair::EMPTY);

    let mut found = 0;
    for &token in tokens {
        match key_of(token) {
            Some(key) => {
                if found == pairs.len() {
                    break;
                }
                pairs[found] = CommandArgumentPair { key: Some(key), value: None };
                found += 1;
            }
            None => {
                if let Some(current) = found.checked_sub(1) {
                    pairs[current].value = Some(token);
                }
            }
        }
    }
    found
}

/// Look up a pair by key among the first found pairs
pub fn find_pair<'p, 't>(pairs: &'p [CommandArgumentPair<'t>], key: &str) -> Option<&'p CommandArgumentPair<'t>> {
    pairs.iter().find(|p| p.key == Some(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_marker() {
        assert_eq!(key_of("--wpm"), Some("wpm"));
        assert_eq!(key_of("---x"), Some("-x"));
        assert_eq!(key_of("--"), None);
        assert_eq!(key_of("-w"), None);
        assert_eq!(key_of("wpm"), None);
    }

    #[test]
    fn test_is_flag() {
        let flag = CommandArgumentPair { key: Some("verbose"), value: None };
        let pair = CommandArgumentPair { key: Some("wpm"), value: Some("25") };
        assert!(flag.is_flag());
        assert!(!pair.is_flag());
        assert!(!CommandArgumentPair::EMPTY.is_flag());
    }

    #[test]
    fn test_stale_slots_are_reset() {
        let mut pairs = [CommandArgumentPair { key: Some("old"), value: Some("x") }; 3];
        let found = arguments_to_pairs(&["--a"], &mut pairs);

        assert_eq!(found, 1);
        assert_eq!(pairs[1], CommandArgumentPair::EMPTY);
        assert_eq!(pairs[2], CommandArgumentPair::EMPTY);
    }
}
