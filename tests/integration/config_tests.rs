//! Configuration loading integration tests
//!
//! Loads configuration files from disk and checks that the engine built from
//! them behaves accordingly.

#[cfg(test)]
mod tests {
    use crate::common::OrgChart;
    use crate::{assert_err, assert_ok};
    use opsdesk::config::models::{
        Capability, LogFormat, OrphanOwnerPolicy, UnmatchedReportsToPolicy,
    };
    use opsdesk::core::models::RoleType;
    use opsdesk::{Config, OpsError, PermissionEngine};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    /// Test loading a complete configuration file
    #[tokio::test]
    async fn test_load_full_config() {
        let file = write_config(
            r#"
permissions:
  STAFF: [edit_any]
  MANAGER: [delete_any, approve]
policy:
  orphan_owner: deny
  unmatched_reports_to: reject
logging:
  level: debug
  format: json
"#,
        );

        let config = assert_ok!(Config::from_file(file.path()).await);
        let table = config.permissions();
        assert!(table.grants(RoleType::Staff, Capability::EditAny));
        assert!(!table.grants(RoleType::Board, Capability::EditAny));
        assert_eq!(config.policy().orphan_owner, OrphanOwnerPolicy::Deny);
        assert_eq!(
            config.policy().unmatched_reports_to,
            UnmatchedReportsToPolicy::Reject
        );
        assert_eq!(config.logging().format, LogFormat::Json);

        let org = OrgChart::marketing();
        let directory = org.directory();
        let engine = PermissionEngine::from_config(&config.desk);
        assert!(engine.can_edit_task(&directory, &org.member("alice"), "frank"));
    }

    /// Test that omitted sections fall back to defaults
    #[tokio::test]
    async fn test_partial_config_uses_defaults() {
        let file = write_config("logging:\n  level: warn\n");

        let config = assert_ok!(Config::from_file(file.path()).await);
        assert_eq!(config.permissions(), Config::default().permissions());
        assert_eq!(config.policy(), Config::default().policy());
        assert_eq!(config.logging().level, "warn");
    }

    /// Test that granting approve to STAFF is rejected
    #[tokio::test]
    async fn test_staff_approve_rejected() {
        let file = write_config("permissions:\n  STAFF: [approve]\n");

        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(matches!(err, OpsError::Config(ref msg) if msg.contains("approve")));
    }

    /// Test that unknown role types and capabilities are parse errors
    #[tokio::test]
    async fn test_unknown_names_rejected() {
        let file = write_config("permissions:\n  INTERN: [view_all]\n");
        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(err.to_string().contains("Failed to parse config"));

        let file = write_config("permissions:\n  STAFF: [fly]\n");
        assert_err!(Config::from_file(file.path()).await);
    }

    /// Test that the shipped example spells out the defaults
    #[tokio::test]
    async fn test_example_config_matches_defaults() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/opsdesk.yaml.example");
        let config = assert_ok!(Config::from_file(path).await);
        assert_eq!(config, Config::default());
    }

    /// Test that a missing file is a configuration error
    #[tokio::test]
    async fn test_missing_file() {
        let err = assert_err!(Config::from_file("/nonexistent/opsdesk.yaml").await);
        assert!(matches!(err, OpsError::Config(_)));
    }

    /// Test that an empty permission table leaves only the hierarchy
    #[test]
    fn test_empty_permission_table() {
        let config = assert_ok!(Config::from_yaml_str("permissions: {}\n"));
        assert!(config.permissions().is_empty());

        let org = OrgChart::marketing();
        let engine = PermissionEngine::from_config(&config.desk);
        assert!(!engine.can_delete_task(&org.member("bob")));
        assert!(engine.can_delete_task(&org.member("carol")));
        let directory = org.directory();
        assert!(engine.can_edit_task(&directory, &org.member("bob"), "alice"));
    }

    /// Test that the serialised configuration loads back unchanged
    #[test]
    fn test_yaml_output_reloads() {
        let config = Config::default();
        let yaml = assert_ok!(config.to_yaml());
        assert!(yaml.contains("MANAGER"));
        assert_eq!(assert_ok!(Config::from_yaml_str(&yaml)), config);
    }
}
