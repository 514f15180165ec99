/// Categories every session starts with, in display order.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Food",
    "Shopping",
    "Transport",
    "Utilities",
    "Entertainment",
    "Miscellaneous",
];

/// Fixed ordered set of valid expense categories, defined at startup and
/// immutable thereafter.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    names: Vec<String>,
}

impl CategoryRegistry {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn defaults() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }

    /// Registered category names, in registry order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
