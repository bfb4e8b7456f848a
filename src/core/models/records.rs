//! Simple owned records: budget transactions, knowledge entries, chat sessions

use super::generate_id;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Kind of record for permission purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Budget,
    Knowledge,
    ChatSession,
}

/// A record owned by the member who created it
pub trait OwnedRecord {
    fn record_id(&self) -> &str;
    fn owner_id(&self) -> &str;
    fn resource(&self) -> ResourceKind;
}

/// Budget transaction direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Budget transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetTransaction {
    pub id: String,
    pub title: String,
    /// Amount in the dashboard currency, always positive
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default)]
    pub category: String,
    pub date: NaiveDate,
    pub created_by: String,
}

impl BudgetTransaction {
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        date: NaiveDate,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            amount,
            kind,
            category: String::new(),
            date,
            created_by: created_by.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Signed amount: income positive, expense negative
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl OwnedRecord for BudgetTransaction {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &str {
        &self.created_by
    }

    fn resource(&self) -> ResourceKind {
        ResourceKind::Budget
    }
}

/// Knowledge base entry fed to the assistant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiKnowledge {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    pub created_by: String,
}

impl AiKnowledge {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            content: content.into(),
            category: String::new(),
            created_by: created_by.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

impl OwnedRecord for AiKnowledge {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &str {
        &self.created_by
    }

    fn resource(&self) -> ResourceKind {
        ResourceKind::Knowledge
    }
}

/// Assistant chat session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub user_id: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl ChatSession {
    pub fn new(user_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            user_id: user_id.into(),
            created_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

impl OwnedRecord for ChatSession {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &str {
        &self.user_id
    }

    fn resource(&self) -> ResourceKind {
        ResourceKind::ChatSession
    }
}
