//! Reviewer resolution integration tests

#[cfg(test)]
mod tests {
    use crate::common::{OrgChart, ReportFactory};
    use opsdesk::config::models::{PolicyConfig, RolePermissionConfig};
    use opsdesk::core::models::{Member, RoleType};
    use opsdesk::{GrantRule, IntegrityWarning, PermissionEngine, ReviewerSource};

    fn reviewer_of(org: &OrgChart, id: &str) -> Option<String> {
        let directory = org.directory();
        PermissionEngine::default()
            .resolve_reviewer(&directory, &org.member(id))
            .reviewer_id()
            .map(str::to_string)
    }

    /// Test the escalation ladder on the marketing org chart
    #[test]
    fn test_escalation_ladder() {
        let org = OrgChart::marketing();

        assert_eq!(reviewer_of(&org, "alice").as_deref(), Some("bob"));
        assert_eq!(reviewer_of(&org, "frank").as_deref(), Some("bob"));
        assert_eq!(reviewer_of(&org, "bob").as_deref(), Some("carol"));
        assert_eq!(reviewer_of(&org, "dana").as_deref(), Some("carol"));
        assert_eq!(reviewer_of(&org, "carol").as_deref(), Some("zoe"));
        assert_eq!(reviewer_of(&org, "zoe"), None);
    }

    /// Test that a deputy manager is preferred for team leaders
    #[test]
    fn test_deputy_preferred_for_leaders() {
        let org = OrgChart::marketing()
            .with(Member::new("Dee", RoleType::DeputyManager).with_id("dee"));

        assert_eq!(reviewer_of(&org, "bob").as_deref(), Some("dee"));
        assert_eq!(reviewer_of(&org, "dee").as_deref(), Some("carol"));
        assert_eq!(reviewer_of(&org, "alice").as_deref(), Some("bob"));
    }

    /// Test that staff without a department leader go to the manager
    #[test]
    fn test_staff_without_leader() {
        let org = OrgChart::marketing().without("bob");
        assert_eq!(reviewer_of(&org, "alice").as_deref(), Some("carol"));

        let org = OrgChart::marketing().update("alice", |m| m.with_department(""));
        assert_eq!(reviewer_of(&org, "alice").as_deref(), Some("carol"));
    }

    /// Test that an explicit reportsTo beats the org chart
    #[test]
    fn test_reports_to_overrides_hierarchy() {
        let org = OrgChart::marketing().update("alice", |m| m.with_reports_to("Design Lead"));
        let directory = org.directory();

        let resolution =
            PermissionEngine::default().resolve_reviewer(&directory, &org.member("alice"));
        assert_eq!(resolution.reviewer_id(), Some("dana"));
        assert_eq!(resolution.source, ReviewerSource::ReportsTo);

        // reportsTo may point below the member's own level
        let org = OrgChart::marketing().update("carol", |m| m.with_reports_to("Frank"));
        assert_eq!(reviewer_of(&org, "carol").as_deref(), Some("frank"));
    }

    /// Test that surrounding whitespace in reportsTo is ignored
    #[test]
    fn test_reports_to_is_trimmed() {
        let org = OrgChart::marketing().update("bob", |m| m.with_reports_to("  Director "));
        assert_eq!(reviewer_of(&org, "bob").as_deref(), Some("zoe"));
    }

    /// Test the unmatched reportsTo policies
    #[test]
    fn test_unmatched_reports_to() {
        let org = OrgChart::marketing().update("alice", |m| m.with_reports_to("Head of Growth"));
        let directory = org.directory();
        let alice = org.member("alice");

        let resolution = PermissionEngine::default().resolve_reviewer(&directory, &alice);
        assert_eq!(resolution.reviewer_id(), Some("bob"));
        assert_eq!(resolution.source, ReviewerSource::HierarchyFallback);
        assert!(matches!(
            &resolution.warnings[..],
            [IntegrityWarning::UnmatchedReportsTo { reports_to, .. }] if reports_to == "Head of Growth"
        ));

        let strict = PermissionEngine::new(RolePermissionConfig::default(), PolicyConfig::strict());
        let resolution = strict.resolve_reviewer(&directory, &alice);
        assert_eq!(resolution.source, ReviewerSource::Unresolved);
        assert!(resolution.reviewer.is_none());
    }

    /// Test that repeated resolution returns the same member
    #[test]
    fn test_resolution_is_deterministic() {
        let org = OrgChart::marketing()
            .with(Member::new("Cam", RoleType::Manager).with_id("cam"));
        let directory = org.directory();
        let engine = PermissionEngine::default();
        let bob = org.member("bob");

        let first = engine.resolve_reviewer(&directory, &bob).reviewer_id();
        for _ in 0..10 {
            assert_eq!(
                engine.resolve_reviewer(&directory, &bob).reviewer_id(),
                first
            );
        }
        assert_eq!(first, Some("carol"));
    }

    /// Test the submit-then-review flow
    #[test]
    fn test_resolved_reviewer_can_approve() {
        let org = OrgChart::marketing();
        let directory = org.directory();
        let engine = PermissionEngine::new(RolePermissionConfig::empty(), PolicyConfig::default());
        let alice = org.member("alice");

        let resolution = engine.resolve_reviewer(&directory, &alice);
        let reviewer = resolution.reviewer.expect("alice has a reviewer");
        let mut report = ReportFactory::for_review(&alice.id, &reviewer.id);

        let decision = engine.check_approve_report(&directory, reviewer, &report);
        assert_eq!(decision.granted_by, Some(GrantRule::AssignedReviewer));

        report.approve(&reviewer.id).unwrap();
        assert_eq!(report.approved_by.as_deref(), Some("bob"));
        assert!(!engine.can_approve_report(&directory, reviewer, &report));
    }
}
