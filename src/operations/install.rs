//! Install operation module
//!
//! `install` reconciles the selected dependencies and fetches only those that
//! need it; `update` runs the same workflow with every dependency forced.
//!
//! Dependencies are handled one after another. A failed dependency is recorded
//! and the batch moves on, except for persistence failures, which abort the
//! whole operation.

use crate::cli::{InstallArgs, UpdateArgs};
use crate::error::{FiledepError, Result};
use crate::progress::ProgressDisplay;
use crate::reconcile::Reason;
use crate::workspace::Workspace;

use super::fetch::{FetchOutcome, FetchRequest};
use super::{Context, select_names};

/// Configuration options for install and update
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Dependencies to consider (empty for all)
    pub names: Vec<String>,

    /// Fetch regardless of the reconciliation verdict
    pub force: bool,
}

impl From<&InstallArgs> for InstallOptions {
    fn from(args: &InstallArgs) -> Self {
        Self {
            names: args.names.clone(),
            force: args.force,
        }
    }
}

impl From<&UpdateArgs> for InstallOptions {
    fn from(args: &UpdateArgs) -> Self {
        Self {
            names: args.names.clone(),
            force: true,
        }
    }
}

/// What a batch did
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Fetched dependencies with the reason they were fetched
    pub fetched: Vec<(FetchOutcome, Reason)>,

    pub up_to_date: Vec<String>,

    /// Per-dependency failures, each naming the failing step
    pub failures: Vec<FiledepError>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.fetched.len() + self.up_to_date.len() + self.failures.len()
    }

    /// `Err(BatchFailed)` when any dependency failed
    pub fn ensure_success(&self) -> Result<()> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(FiledepError::BatchFailed {
                failed: self.failures.len(),
                total: self.total(),
            })
        }
    }
}

/// High-level install operation
pub struct InstallOperation<'a> {
    ctx: &'a Context,
    workspace: &'a mut Workspace,
}

impl<'a> InstallOperation<'a> {
    pub fn new(ctx: &'a Context, workspace: &'a mut Workspace) -> Self {
        Self { ctx, workspace }
    }

    /// Execute install operation
    ///
    /// Every selected dependency is reconciled before anything is fetched.
    pub fn execute(&mut self, options: &InstallOptions) -> Result<BatchReport> {
        let names = select_names(self.workspace, &options.names)?;
        let plan = self
            .ctx
            .reconciler()
            .plan(self.workspace, &names, options.force);

        tracing::debug!(
            selected = names.len(),
            needs_action = plan.actions.len(),
            "reconciled"
        );

        let mut report = BatchReport {
            up_to_date: plan.up_to_date,
            failures: plan.failures,
            ..BatchReport::default()
        };

        // A bar for a single fetch is noise
        let progress = if plan.actions.len() > 1 {
            ProgressDisplay::new(plan.actions.len())
        } else {
            ProgressDisplay::hidden()
        };
        let fetcher = self.ctx.fetcher();

        for (name, reason) in plan.actions {
            progress.start(&name);

            let Some(entry) = self.workspace.manifest.get(&name) else {
                continue;
            };
            let request = FetchRequest {
                name: name.clone(),
                source: entry.source.clone(),
                local_path: entry.path.clone(),
                record_manifest: false,
            };

            match fetcher.fetch(self.workspace, &request) {
                Ok(outcome) => report.fetched.push((outcome, reason)),
                Err(err) if err.is_persistence() => {
                    progress.abandon();
                    return Err(err);
                }
                Err(err) => {
                    tracing::debug!(name = %name, error = %err, "dependency failed");
                    report.failures.push(err);
                }
            }
            progress.inc();
        }

        progress.finish();
        Ok(report)
    }
}
