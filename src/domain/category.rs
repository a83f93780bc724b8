//! Category domain entity and related types.

use serde::{Deserialize, Serialize};

/// Category domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Storage-assigned identifier, immutable once set
    pub id: i32,
    pub name: String,
}

impl Category {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Category creation data transfer object.
///
/// Carries no identifier: storage always assigns one on insert.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_flat_record() {
        let json = serde_json::to_value(Category::new(1, "Appetizer")).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "name": "Appetizer" }));
    }
}
