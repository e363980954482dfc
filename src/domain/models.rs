use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single catalog entry. `name` is optional because catalog files are
/// external input; a nameless entry never matches a typed query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
}

impl Item {
    pub fn new(id: u64, name: &str, email: &str) -> Self {
        Self {
            id: ItemId(id),
            name: Some(name.to_string()),
            email: email.to_string(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }

    /// Up to two uppercase initials, used in place of an avatar.
    #[must_use]
    pub fn initials(&self) -> String {
        let Some(name) = &self.name else {
            return "?".to_string();
        };
        let initials: String = name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.label(), self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(Item::new(1, "Ada Lovelace", "ada@x").initials(), "AL");
        assert_eq!(Item::new(2, "bob", "bob@x").initials(), "B");
        assert_eq!(Item::new(3, "   ", "blank@x").initials(), "?");

        let nameless = Item {
            id: ItemId(4),
            name: None,
            email: "ghost@x".to_string(),
        };
        assert_eq!(nameless.initials(), "?");
        assert_eq!(nameless.label(), "(unnamed)");
    }

    #[test]
    fn test_display() {
        let item = Item::new(1, "Alice", "a@x");
        assert_eq!(item.to_string(), "Alice <a@x>");
    }
}
