use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: u32,
    pub name: String,
    pub price: u32,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(id: u32, name: impl Into<String>, price: u32, created_at: DateTime<Utc>) -> Self {
        Order {
            id,
            name: name.into(),
            price,
            created_at,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}) at {}",
            self.id,
            self.name,
            self.price,
            self.created_at.to_rfc3339()
        )
    }
}

/// Serialized with `name` exposed as `full_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "full_name")]
    pub name: String,
    pub age: u32,
}

impl User {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        User {
            name: name.into(),
            age,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }
}
