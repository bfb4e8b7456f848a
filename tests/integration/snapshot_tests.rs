//! Snapshot loading and store integration tests

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::{OrgChart, TaskFactory};
    use chrono::NaiveDate;
    use opsdesk::core::models::{BudgetTransaction, TransactionKind};
    use opsdesk::{OpsError, PermissionEngine, Snapshot, SnapshotData, SnapshotStore};
    use std::io::Write;
    use std::sync::Arc;

    fn export(data: &SnapshotData, suffix: &str) -> tempfile::NamedTempFile {
        let content = if suffix == ".json" {
            serde_json::to_string(data).unwrap()
        } else {
            serde_yaml::to_string(data).unwrap()
        };
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn marketing_data() -> SnapshotData {
        let mut data = OrgChart::marketing().snapshot_data();
        data.tasks = vec![
            TaskFactory::assigned("bob", "alice").with_id("t-brief"),
            TaskFactory::assigned("carol", "ghost").with_id("t-orphan"),
        ];
        data.budget = vec![
            BudgetTransaction::new(
                "Paid social",
                1200.0,
                TransactionKind::Expense,
                NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
                "frank",
            )
            .with_id("b-1"),
        ];
        data
    }

    /// Test loading the same export as JSON and as YAML
    #[tokio::test]
    async fn test_load_json_and_yaml_exports() {
        let data = marketing_data();

        for suffix in [".json", ".yaml"] {
            let file = export(&data, suffix);
            let snapshot = assert_ok!(Snapshot::from_file(file.path()).await);
            assert_eq!(snapshot.directory().len(), 6);
            assert_eq!(snapshot.tasks().len(), 2);
            assert!(snapshot.task("t-brief").is_some());
        }
    }

    /// Test integrity queries over a loaded snapshot
    #[tokio::test]
    async fn test_snapshot_integrity_queries() {
        let mut data = marketing_data();
        data.members[1].role_type = "COPYWRITER".to_string();
        let file = export(&data, ".json");
        let snapshot = assert_ok!(Snapshot::from_file(file.path()).await);

        let orphaned: Vec<_> = snapshot.orphaned_tasks().map(|t| t.id.as_str()).collect();
        assert_eq!(orphaned, vec!["t-orphan"]);

        let unknown: Vec<_> = snapshot
            .members_with_unknown_roles()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(unknown, vec!["frank"]);
    }

    /// Test deciding on owned records found in a snapshot
    #[test]
    fn test_owned_record_decisions() {
        let snapshot = assert_ok!(Snapshot::from_data(marketing_data()));
        let engine = PermissionEngine::default();
        let record = snapshot.owned_record("b-1").expect("budget entry exists");

        let frank = snapshot.member("frank").unwrap();
        let alice = snapshot.member("alice").unwrap();
        let carol = snapshot.member("carol").unwrap();
        assert!(engine.can_edit_record(frank, record));
        assert!(!engine.can_edit_record(alice, record));
        assert!(engine.can_delete_record(carol, record));
    }

    /// Test that duplicate member ids are rejected
    #[test]
    fn test_duplicate_members_rejected() {
        let mut data = marketing_data();
        data.members.push(data.members[0].clone());

        let result = Snapshot::from_data(data);
        assert!(matches!(result, Err(OpsError::Validation(_))));
    }

    /// Test that readers keep their snapshot while a newer one is installed
    #[test]
    fn test_store_last_write_wins() {
        let store = SnapshotStore::new(assert_ok!(Snapshot::from_data(marketing_data())));
        let before = store.load();

        let smaller = OrgChart::marketing().without("frank").without("alice");
        store.replace(assert_ok!(Snapshot::from_data(smaller.snapshot_data())));
        let latest = OrgChart::marketing().without("zoe");
        let replaced = store.replace(assert_ok!(Snapshot::from_data(latest.snapshot_data())));

        assert_eq!(before.directory().len(), 6);
        assert_eq!(replaced.directory().len(), 4);
        assert_eq!(store.load().directory().len(), 5);
        assert!(!Arc::ptr_eq(&before, &store.load()));
    }

    /// Test that a decision follows the snapshot it was made against
    #[test]
    fn test_decision_against_stale_snapshot() {
        let store = SnapshotStore::new(assert_ok!(Snapshot::from_data(marketing_data())));
        let engine = PermissionEngine::default();
        let held = store.load();
        let alice = held.member("alice").unwrap().clone();

        // frank leaves; the held snapshot still lists frank as a peer
        let without_frank = OrgChart::marketing().without("frank");
        store.replace(assert_ok!(Snapshot::from_data(without_frank.snapshot_data())));

        assert!(!engine.can_edit_task(held.directory(), &alice, "frank"));
        let latest = store.load();
        assert!(engine.can_edit_task(latest.directory(), &alice, "frank"));
    }
}
