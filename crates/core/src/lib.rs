pub mod item;
pub mod money;
pub mod settlement;
pub mod summary;

pub use item::{confirm_items, receipt_total, CategorizedItem, Category, CoreError, ItemId, LineItem};
pub use money::{Money, OddCent};
pub use settlement::{split, Owed, SettlementResult};
pub use summary::{format_summary, SummaryOptions};
