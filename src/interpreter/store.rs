use std::collections::HashMap;

/// Integer variables keyed by name.
///
/// Names are case-sensitive. There is no removal; assigning an existing name
/// overwrites its value.
#[derive(Debug, Default, Clone)]
pub struct VariableStore {
    values: HashMap<String, i64>,
}

impl VariableStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `name`, returning the previous value if any.
    pub fn set(&mut self, name: &str, value: i64) -> Option<i64> {
        self.values.insert(name.to_string(), value)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over all variables in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
