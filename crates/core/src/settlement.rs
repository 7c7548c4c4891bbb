use serde::{Deserialize, Serialize};

use super::item::{CategorizedItem, Category};
use super::money::{Money, OddCent};

/// Categorized items partitioned by bucket, with per-bucket totals.
///
/// The four item lists together hold every input entry exactly once, each
/// list in input order. Ignored items count towards no total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementResult {
    pub me_total: Money,
    pub you_total: Money,
    pub common_total: Money,
    pub me_items: Vec<CategorizedItem>,
    pub you_items: Vec<CategorizedItem>,
    pub common_items: Vec<CategorizedItem>,
    pub ignored_items: Vec<CategorizedItem>,
}

/// What each party owes once the shared total has been halved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owed {
    pub me_owes: Money,
    pub you_owes: Money,
    pub common_half_me: Money,
    pub common_half_you: Money,
}

/// Partition categorized items and total each bucket in a single pass.
pub fn split(categorized: &[CategorizedItem]) -> SettlementResult {
    let mut result = SettlementResult::default();

    for entry in categorized {
        let price = entry.item.price;
        match entry.category {
            Category::Me => {
                result.me_total = result.me_total + price;
                result.me_items.push(entry.clone());
            }
            Category::You => {
                result.you_total = result.you_total + price;
                result.you_items.push(entry.clone());
            }
            Category::Common => {
                result.common_total = result.common_total + price;
                result.common_items.push(entry.clone());
            }
            Category::Ignore => result.ignored_items.push(entry.clone()),
        }
    }

    result
}

impl SettlementResult {
    /// Derived amounts: each party's own total plus their half of the shared total.
    pub fn owed(&self, odd_cent: OddCent) -> Owed {
        let (common_half_me, common_half_you) = self.common_total.halve(odd_cent);
        Owed {
            me_owes: self.me_total + common_half_me,
            you_owes: self.you_total + common_half_you,
            common_half_me,
            common_half_you,
        }
    }

    pub fn items(&self, category: Category) -> &[CategorizedItem] {
        match category {
            Category::Me => &self.me_items,
            Category::You => &self.you_items,
            Category::Common => &self.common_items,
            Category::Ignore => &self.ignored_items,
        }
    }

    pub fn item_count(&self) -> usize {
        Category::ALL.iter().map(|c| self.items(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Sum of all non-ignored prices.
    pub fn grand_total(&self) -> Money {
        self.me_total + self.you_total + self.common_total
    }
}
