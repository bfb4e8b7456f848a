//! Snapshots of the realtime collections and the store holding the latest one

use crate::core::directory::MemberDirectory;
use crate::core::models::{
    AiKnowledge, BudgetTransaction, ChatSession, Member, OwnedRecord, Task, WorkReport,
};
use crate::utils::error::{OpsError, Result};
use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Raw collection contents, as exported from the document store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotData {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub reports: Vec<WorkReport>,
    #[serde(default)]
    pub budget: Vec<BudgetTransaction>,
    #[serde(default)]
    pub knowledge: Vec<AiKnowledge>,
    #[serde(default)]
    pub chat_sessions: Vec<ChatSession>,
}

/// Locally held view of every collection
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    directory: MemberDirectory,
    data: SnapshotData,
}

impl Snapshot {
    /// Index the collections; fails on duplicate or blank member IDs
    pub fn from_data(mut data: SnapshotData) -> Result<Self> {
        let directory = MemberDirectory::new(std::mem::take(&mut data.members))?;
        Ok(Self { directory, data })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::from_data(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_data(serde_json::from_str(content)?)
    }

    /// Load a snapshot export; `.yaml`/`.yml` is read as YAML, anything else as JSON
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading snapshot from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            OpsError::config(format!("Failed to read snapshot {}: {}", path.display(), e))
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        let snapshot = if is_yaml {
            Self::from_yaml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };

        debug!(
            members = snapshot.directory.len(),
            tasks = snapshot.data.tasks.len(),
            reports = snapshot.data.reports.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    pub fn directory(&self) -> &MemberDirectory {
        &self.directory
    }

    pub fn member(&self, id: &str) -> Option<&Member> {
        self.directory.get(id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.data.tasks
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.data.tasks.iter().find(|t| t.id == id)
    }

    pub fn reports(&self) -> &[WorkReport] {
        &self.data.reports
    }

    pub fn report(&self, id: &str) -> Option<&WorkReport> {
        self.data.reports.iter().find(|r| r.id == id)
    }

    /// Budget transaction, knowledge entry or chat session by ID
    pub fn owned_record(&self, id: &str) -> Option<&dyn OwnedRecord> {
        let data = &self.data;
        data.budget
            .iter()
            .map(|r| r as &dyn OwnedRecord)
            .chain(data.knowledge.iter().map(|r| r as &dyn OwnedRecord))
            .chain(data.chat_sessions.iter().map(|r| r as &dyn OwnedRecord))
            .find(|r| r.record_id() == id)
    }

    /// Tasks whose assignee is missing from the directory
    pub fn orphaned_tasks(&self) -> impl Iterator<Item = &Task> {
        self.data
            .tasks
            .iter()
            .filter(|t| !self.directory.contains(&t.assignee_id))
    }

    /// Members whose stored role type does not parse
    pub fn members_with_unknown_roles(&self) -> impl Iterator<Item = &Member> {
        self.directory.iter().filter(|m| m.role_type().is_err())
    }
}

/// Holds the most recent snapshot.
///
/// Subscription callbacks may race; whichever calls [`replace`](Self::replace)
/// last wins. Readers get an `Arc` and never block writers.
#[derive(Debug)]
pub struct SnapshotStore {
    current: ArcSwap<Snapshot>,
}

impl SnapshotStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            current: ArcSwap::from_pointee(snapshot),
        }
    }

    /// Current snapshot
    pub fn load(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    /// Install a new snapshot, returning the one it replaced
    pub fn replace(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        debug!(members = snapshot.directory.len(), "Replacing snapshot");
        self.current.swap(Arc::new(snapshot))
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(Snapshot::default())
    }
}
