//! Reconciliation: is a vendored file still what its manifest entry declares?
//!
//! [`Reconciler::decide`] evaluates ordered rules, first match wins:
//!
//! 1. forced by the caller
//! 2. declared in the manifest but never locked
//! 3. locked, but the local file is missing
//! 4. the declared ref now resolves to a different commit than the locked one,
//!    or the lock only has a content hash and a commit is now available
//! 5. up to date
//!
//! The engine is advisory: it never downloads content or writes files. Its only
//! network access is the commit lookup of rule 4.


use std::fmt;

use crate::config::{Integrity, LockEntry, ManifestEntry};
use crate::error::{Result, Step};
use crate::resolver::RefResolver;
use crate::source::{SourceParser, same_commit};
use crate::workspace::Workspace;

/// Why a dependency has to be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    Forced,
    NeverLocked,
    LocalFileMissing,
    CommitDrift { locked: String, target: String },
    UpgradeablePin { target: String },
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Forced => f.write_str("forced by caller"),
            Reason::NeverLocked => f.write_str("declared but never locked"),
            Reason::LocalFileMissing => f.write_str("local file missing"),
            Reason::CommitDrift { locked, target } => {
                write!(f, "commit drift (locked {}, source at {})", short(locked), short(target))
            }
            Reason::UpgradeablePin { .. } => {
                f.write_str("upgradeable from content-hash pin to commit pin")
            }
        }
    }
}

fn short(commit: &str) -> &str {
    commit.get(..12).unwrap_or(commit)
}

/// Outcome of reconciling one dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    UpToDate,
    NeedsAction(Reason),
}

/// Decides whether dependencies need fetching
pub struct Reconciler<'a> {
    parser: &'a SourceParser,
    resolver: &'a RefResolver,
}

impl<'a> Reconciler<'a> {
    pub fn new(parser: &'a SourceParser, resolver: &'a RefResolver) -> Self {
        Self { parser, resolver }
    }

    /// Decide the verdict for one dependency
    ///
    /// Fails only when the manifest source cannot be parsed. A failed commit
    /// lookup degrades to comparing the unresolved ref with the locked commit.
    pub fn decide(
        &self,
        entry: &ManifestEntry,
        lock: Option<&LockEntry>,
        local_file_exists: bool,
        forced: bool,
    ) -> Result<Verdict> {
        if forced {
            return Ok(Verdict::NeedsAction(Reason::Forced));
        }
        let Some(lock) = lock else {
            return Ok(Verdict::NeedsAction(Reason::NeverLocked));
        };
        if !local_file_exists {
            return Ok(Verdict::NeedsAction(Reason::LocalFileMissing));
        }

        let declared = self.parser.parse(&entry.source)?;
        let (target, resolved) = match self.resolver.resolve(&declared) {
            Ok(pinned) => (pinned.git_ref, true),
            Err(err) => {
                tracing::warn!(
                    source = %entry.source,
                    error = %err,
                    "could not resolve ref, comparing the unresolved ref instead"
                );
                (declared.git_ref, false)
            }
        };

        let verdict = match &lock.integrity {
            Integrity::Commit(locked) if !same_commit(locked, &target) => {
                Verdict::NeedsAction(Reason::CommitDrift {
                    locked: locked.clone(),
                    target,
                })
            }
            Integrity::Sha256(_) if resolved => {
                Verdict::NeedsAction(Reason::UpgradeablePin { target })
            }
            _ => Verdict::UpToDate,
        };
        Ok(verdict)
    }

    /// Reconcile the selected dependencies of a workspace
    ///
    /// Every dependency is evaluated before anything is fetched; a dependency
    /// whose source cannot be parsed is reported in [`Plan::failures`] and the
    /// rest are still evaluated.
    pub fn plan(&self, workspace: &Workspace, names: &[String], forced: bool) -> Plan {
        let mut plan = Plan::default();

        for name in names {
            let Some(entry) = workspace.manifest.get(name) else {
                continue;
            };
            let lock = workspace.lockfile.get(name);
            let exists = workspace.local_file_exists(&entry.path);

            match self.decide(entry, lock, exists, forced) {
                Ok(Verdict::UpToDate) => plan.up_to_date.push(name.clone()),
                Ok(Verdict::NeedsAction(reason)) => {
                    tracing::debug!(name = %name, %reason, "needs action");
                    plan.actions.push((name.clone(), reason));
                }
                Err(err) => plan.failures.push(err.in_step(name.as_str(), Step::Parse)),
            }
        }

        plan
    }
}

/// Aggregated verdicts for a batch
#[derive(Debug, Default)]
pub struct Plan {
    /// Dependencies to fetch, with the reason, in manifest order
    pub actions: Vec<(String, Reason)>,

    pub up_to_date: Vec<String>,

    /// Dependencies that could not be evaluated
    pub failures: Vec<crate::error::FiledepError>,
}

impl Plan {
    pub fn total(&self) -> usize {
        self.actions.len() + self.up_to_date.len() + self.failures.len()
    }
}
