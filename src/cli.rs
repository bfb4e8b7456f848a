//! Command line interface
//!
//! Every command prints a JSON document on stdout. A denied permission is a
//! successful command; only missing data or invalid input is an error.

use crate::auth::rbac::PermissionEngine;
use crate::config::{Config, warn_permissive_config};
use crate::core::models::{Member, RoleType, Task, WorkReport};
use crate::core::snapshot::Snapshot;
use crate::utils::error::{OpsError, Result};
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Permission checks against a dashboard snapshot
#[derive(Debug, Parser)]
#[command(name = "opsdesk", version, about)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true, env = "OPSDESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Snapshot export (JSON, or YAML by extension)
    #[arg(short, long, global = true, env = "OPSDESK_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the authority ladder
    Roles,
    /// Authority level of a role type value
    Level { role_type: String },
    /// May ACTOR edit TASK?
    CanEditTask {
        #[arg(long)]
        actor: String,
        #[arg(long)]
        task: String,
    },
    /// May ACTOR delete tasks?
    CanDeleteTask {
        #[arg(long)]
        actor: String,
    },
    /// May ACTOR see TASK?
    CanViewTask {
        #[arg(long)]
        actor: String,
        #[arg(long)]
        task: String,
    },
    /// May ACTOR reassign TASK?
    CanReassignTask {
        #[arg(long)]
        actor: String,
        #[arg(long)]
        task: String,
    },
    /// May ACTOR approve or reject REPORT?
    CanApproveReport {
        #[arg(long)]
        actor: String,
        #[arg(long)]
        report: String,
    },
    /// Who reviews MEMBER's work reports?
    Reviewer {
        #[arg(long)]
        member: String,
    },
    /// Validate the configuration and, if given, the snapshot
    Validate,
}

/// Load the configuration file, or fall back to defaults plus environment
pub async fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path).await?,
        None => {
            debug!("No configuration file given, using defaults");
            Config::from_env()?
        }
    };
    Ok(config)
}

/// Execute a parsed command and return its JSON output
pub async fn run(cli: &Cli, config: &Config) -> Result<Value> {
    let engine = PermissionEngine::from_config(&config.desk);

    match &cli.command {
        Command::Roles => {
            let roles: Vec<Value> = RoleType::ALL
                .iter()
                .map(|role| json!({ "roleType": role, "level": engine.level(*role) }))
                .collect();
            Ok(Value::Array(roles))
        }
        Command::Level { role_type } => {
            let level = engine.role_level(role_type)?;
            Ok(json!({ "roleType": role_type, "level": level }))
        }
        Command::CanEditTask { actor, task } => {
            let snapshot = load_snapshot(cli).await?;
            let actor = find_member(&snapshot, actor)?;
            let task = find_task(&snapshot, task)?;
            let decision = engine.check_edit_task(snapshot.directory(), actor, &task.assignee_id);
            Ok(serde_json::to_value(&decision)?)
        }
        Command::CanDeleteTask { actor } => {
            let snapshot = load_snapshot(cli).await?;
            let actor = find_member(&snapshot, actor)?;
            Ok(serde_json::to_value(engine.check_delete_task(actor))?)
        }
        Command::CanViewTask { actor, task } => {
            let snapshot = load_snapshot(cli).await?;
            let actor = find_member(&snapshot, actor)?;
            let task = find_task(&snapshot, task)?;
            let decision = engine.check_view_task(snapshot.directory(), actor, task);
            Ok(serde_json::to_value(&decision)?)
        }
        Command::CanReassignTask { actor, task } => {
            let snapshot = load_snapshot(cli).await?;
            let actor = find_member(&snapshot, actor)?;
            let task = find_task(&snapshot, task)?;
            let decision = engine.check_reassign_task(snapshot.directory(), actor, task);
            Ok(serde_json::to_value(&decision)?)
        }
        Command::CanApproveReport { actor, report } => {
            let snapshot = load_snapshot(cli).await?;
            let actor = find_member(&snapshot, actor)?;
            let report = find_report(&snapshot, report)?;
            let decision = engine.check_approve_report(snapshot.directory(), actor, report);
            Ok(serde_json::to_value(&decision)?)
        }
        Command::Reviewer { member } => {
            let snapshot = load_snapshot(cli).await?;
            let member = find_member(&snapshot, member)?;
            let resolution = engine.resolve_reviewer(snapshot.directory(), member);
            Ok(serde_json::to_value(&resolution)?)
        }
        Command::Validate => validate(cli, config).await,
    }
}

async fn validate(cli: &Cli, config: &Config) -> Result<Value> {
    config.validate()?;
    warn_permissive_config(&config.desk);

    let mut output = json!({ "config": "ok" });
    if cli.snapshot.is_some() {
        let snapshot = load_snapshot(cli).await?;
        let orphaned: Vec<&str> = snapshot.orphaned_tasks().map(|t| t.id.as_str()).collect();
        let unknown_roles: Vec<&str> = snapshot
            .members_with_unknown_roles()
            .map(|m| m.id.as_str())
            .collect();
        info!(
            orphaned = orphaned.len(),
            unknown_roles = unknown_roles.len(),
            "Snapshot checked"
        );
        output["snapshot"] = json!({
            "members": snapshot.directory().len(),
            "tasks": snapshot.tasks().len(),
            "reports": snapshot.reports().len(),
            "orphanedTasks": orphaned,
            "unknownRoles": unknown_roles,
        });
    }
    Ok(output)
}

async fn load_snapshot(cli: &Cli) -> Result<Snapshot> {
    let path = cli.snapshot.as_deref().ok_or_else(|| {
        OpsError::config("No snapshot given; pass --snapshot or set OPSDESK_SNAPSHOT")
    })?;
    Snapshot::from_file(path).await
}

fn find_member<'a>(snapshot: &'a Snapshot, id: &str) -> Result<&'a Member> {
    snapshot
        .member(id)
        .ok_or_else(|| OpsError::not_found(format!("Member {} not found", id)))
}

fn find_task<'a>(snapshot: &'a Snapshot, id: &str) -> Result<&'a Task> {
    snapshot
        .task(id)
        .ok_or_else(|| OpsError::not_found(format!("Task {} not found", id)))
}

fn find_report<'a>(snapshot: &'a Snapshot, id: &str) -> Result<&'a WorkReport> {
    snapshot
        .report(id)
        .ok_or_else(|| OpsError::not_found(format!("Report {} not found", id)))
}
