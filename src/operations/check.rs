//! Check operation module
//!
//! Runs reconciliation for the selected dependencies without fetching.

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::reconcile::Plan;
use crate::workspace::Workspace;

use super::{Context, select_names};

/// High-level check operation
pub struct CheckOperation<'a> {
    ctx: &'a Context,
    workspace: &'a Workspace,
}

impl<'a> CheckOperation<'a> {
    pub fn new(ctx: &'a Context, workspace: &'a Workspace) -> Self {
        Self { ctx, workspace }
    }

    /// Reconcile the dependencies named in `args` (all when empty)
    pub fn execute(&self, args: &CheckArgs) -> Result<Plan> {
        let names = select_names(self.workspace, &args.names)?;
        Ok(self.ctx.reconciler().plan(self.workspace, &names, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ManifestEntry;
    use crate::reconcile::Reason;
    use crate::test_fixtures::{FakeDownloader, FakeHistory, SHA, context, create_workspace};

    #[test]
    fn test_check_never_downloads() {
        let (_temp, mut workspace) = create_workspace();
        workspace
            .manifest
            .upsert("x", ManifestEntry::new("github:acme/lib/x.lua@main", "x.lua"));
        let downloader = FakeDownloader::serving(b"x");
        let requests = downloader.requests();
        let ctx = context(FakeHistory::with_commit(SHA), downloader);

        let plan = CheckOperation::new(&ctx, &workspace)
            .execute(&CheckArgs { names: Vec::new() })
            .unwrap();

        assert_eq!(plan.actions, vec![("x".to_string(), Reason::NeverLocked)]);
        assert!(requests.borrow().is_empty());
        assert!(!workspace.lockfile_path().exists());
    }

    #[test]
    fn test_check_empty_manifest() {
        let (_temp, workspace) = create_workspace();
        let ctx = context(FakeHistory::with_commit(SHA), FakeDownloader::serving(b"x"));

        let plan = CheckOperation::new(&ctx, &workspace)
            .execute(&CheckArgs { names: Vec::new() })
            .unwrap();
        assert_eq!(plan.total(), 0);
    }
}
