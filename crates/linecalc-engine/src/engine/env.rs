//! Pass-scoped variable environment.

use std::collections::HashMap;

/// Mapping from variable name to its last assigned value.
///
/// An environment lives for exactly one pass. It only grows or overwrites;
/// there is no removal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Environment {
    vars: HashMap<String, f64>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Bind `name` to `value`, replacing any earlier binding.
    pub fn assign(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// All bindings, sorted by name.
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut out: Vec<(&str, f64)> = self.vars.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        out.sort_by(|a, b| a.0.cmp(b.0));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_overwrites() {
        let mut env = Environment::new();
        env.assign("x", 5.0);
        env.assign("x", 10.0);
        assert_eq!(env.get("x"), Some(10.0));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_missing_is_none() {
        let env = Environment::new();
        assert!(env.is_empty());
        assert_eq!(env.get("x"), None);
        assert!(!env.contains("x"));
    }

    #[test]
    fn test_sorted_by_name() {
        let mut env = Environment::new();
        env.assign("b", 2.0);
        env.assign("a", 1.0);
        assert_eq!(env.sorted(), vec![("a", 1.0), ("b", 2.0)]);
    }
}
