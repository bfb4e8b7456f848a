//! Core data models
//!
//! Shapes mirror the document store collections (camelCase fields). Records
//! reference each other by ID string only.

pub mod member;
pub mod records;
pub mod report;
pub mod task;

pub use member::{Member, RoleType};
pub use records::{
    AiKnowledge, BudgetTransaction, ChatSession, OwnedRecord, ResourceKind, TransactionKind,
};
pub use report::{ReportStatus, WorkReport};
pub use task::{Task, TaskStatus};

use uuid::Uuid;

/// Generate a time-ordered record ID
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}
