use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use super::money::Money;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown category: '{0}' (expected me, you, common or ignore)")]
    UnknownCategory(String),
}

/// Opaque per-item token used for list rendering and category lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn generate() -> Self {
        ItemId(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default = "ItemId::generate")]
    pub id: ItemId,
    pub name: String,
    pub price: Money,
}

impl LineItem {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        LineItem {
            id: ItemId::generate(),
            name: name.into(),
            price,
        }
    }

    /// Blank entry offered for manual input when nothing could be read off a receipt.
    pub fn placeholder() -> Self {
        LineItem::new("", Money::zero())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Me,
    You,
    Common,
    Ignore,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Me, Category::You, Category::Common, Category::Ignore];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Me => write!(f, "me"),
            Category::You => write!(f, "you"),
            Category::Common => write!(f, "common"),
            Category::Ignore => write!(f, "ignore"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "me" => Ok(Category::Me),
            "you" => Ok(Category::You),
            "common" | "shared" => Ok(Category::Common),
            "ignore" | "ignored" => Ok(Category::Ignore),
            other => Err(CoreError::UnknownCategory(other.to_string())),
        }
    }
}

/// Items kept when the user confirms an edited list: blank names are dropped.
pub fn confirm_items(items: Vec<LineItem>) -> Vec<LineItem> {
    items.into_iter().filter(|i| !i.name.trim().is_empty()).collect()
}

/// Sum of every listed price, discounts included.
pub fn receipt_total(items: &[LineItem]) -> Money {
    items.iter().map(|i| i.price).sum()
}

/// One swipe decision: an item and the bucket it was put in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedItem {
    pub item: LineItem,
    pub category: Category,
}

impl CategorizedItem {
    pub fn new(item: LineItem, category: Category) -> Self {
        CategorizedItem { item, category }
    }
}
