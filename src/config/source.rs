//! Key/value sources the resolver reads from.
//!
//! Nothing in [`super::resolve`] touches `std::env` directly; callers pass a
//! source in. Tests use a plain map, the binary uses [`ProcessEnv`] layered
//! over values read from `.env` files.

use std::collections::{BTreeMap, HashMap};
use std::env;

/// Read-only string lookup by key.
pub trait EnvSource {
    /// Raw value for `key`, or `None` when unset.
    fn get(&self, key: &str) -> Option<String>;

    /// Value for `key` treating the empty string as unset.
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty())
    }
}

/// The real process environment. Non-unicode values read as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Two sources stacked: `primary` wins, `fallback` fills the gaps.
///
/// A key set to the empty string in `primary` still shadows `fallback`.
#[derive(Debug, Clone, Default)]
pub struct Layered<A, B> {
    pub primary: A,
    pub fallback: B,
}

impl<A, B> Layered<A, B> {
    pub fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: EnvSource, B: EnvSource> EnvSource for Layered<A, B> {
    fn get(&self, key: &str) -> Option<String> {
        self.primary.get(key).or_else(|| self.fallback.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn map_lookup() {
        let m = map(&[("A", "1")]);
        assert_eq!(EnvSource::get(&m, "A").as_deref(), Some("1"));
        assert_eq!(EnvSource::get(&m, "B"), None);
    }

    #[test]
    fn empty_value_is_not_non_empty() {
        let m = map(&[("A", "")]);
        assert_eq!(EnvSource::get(&m, "A").as_deref(), Some(""));
        assert_eq!(m.get_non_empty("A"), None);
    }

    #[test]
    fn layered_primary_wins() {
        let top = map(&[("A", "top")]);
        let bottom = map(&[("A", "bottom"), ("B", "bottom")]);
        let layered = Layered::new(&top, &bottom);
        assert_eq!(layered.get("A").as_deref(), Some("top"));
        assert_eq!(layered.get("B").as_deref(), Some("bottom"));
        assert_eq!(layered.get("C"), None);
    }

    #[test]
    fn layered_empty_primary_shadows() {
        let top = map(&[("A", "")]);
        let bottom = map(&[("A", "bottom")]);
        let layered = Layered::new(top, bottom);
        assert_eq!(layered.get_non_empty("A"), None);
    }

    #[test]
    fn process_env_unset_key() {
        assert_eq!(ProcessEnv.get("DOCUMIND_SURELY_NOT_SET_4F2A"), None);
    }
}
