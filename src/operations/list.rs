//! List operation module
//!
//! Describes every declared dependency together with its lock state.

use serde::Serialize;

use crate::workspace::Workspace;

/// State of one declared dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LockState {
    /// Locked and the vendored file is present
    Locked,
    /// Locked but the vendored file is gone
    Missing,
    /// Declared but never fetched
    Unlocked,
}

/// A declared dependency as shown by `list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedDependency {
    pub name: String,
    pub source: String,
    pub path: String,
    pub state: LockState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrity: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// High-level list operation
pub struct ListOperation<'a> {
    workspace: &'a Workspace,
}

impl<'a> ListOperation<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self { workspace }
    }

    /// Declared dependencies in name order
    pub fn execute(&self) -> Vec<ListedDependency> {
        self.workspace
            .manifest
            .dependencies
            .iter()
            .map(|(name, entry)| {
                let locked = self.workspace.lockfile.get(name);
                let state = match locked {
                    None => LockState::Unlocked,
                    Some(_) if self.workspace.local_file_exists(&entry.path) => LockState::Locked,
                    Some(_) => LockState::Missing,
                };
                ListedDependency {
                    name: name.clone(),
                    source: entry.source.clone(),
                    path: entry.path.clone(),
                    state,
                    integrity: locked.map(|l| l.integrity.to_string()),
                    url: locked.map(|l| l.url.clone()),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Integrity, LockEntry, ManifestEntry};
    use crate::test_fixtures::{SHA, create_workspace};

    #[test]
    fn test_list_reports_lock_state() {
        let (temp, mut workspace) = create_workspace();
        for name in ["a", "b", "c"] {
            workspace.manifest.upsert(
                name,
                ManifestEntry::new(format!("github:acme/lib/{name}.lua@main"), format!("{name}.lua")),
            );
        }
        for name in ["a", "b"] {
            workspace.lockfile.upsert(
                name,
                LockEntry {
                    url: format!("https://raw.githubusercontent.com/acme/lib/{SHA}/{name}.lua"),
                    path: format!("{name}.lua"),
                    integrity: Integrity::Commit(SHA.to_string()),
                },
            );
        }
        std::fs::write(temp.path().join("a.lua"), "a").unwrap();

        let listed = ListOperation::new(&workspace).execute();

        let states: Vec<_> = listed.iter().map(|d| d.state.clone()).collect();
        assert_eq!(
            states,
            vec![LockState::Locked, LockState::Missing, LockState::Unlocked]
        );
        assert_eq!(listed[0].integrity.as_deref(), Some(format!("commit:{SHA}").as_str()));
        assert!(listed[2].url.is_none());
    }

    #[test]
    fn test_list_json_shape() {
        let (_temp, mut workspace) = create_workspace();
        workspace
            .manifest
            .upsert("x", ManifestEntry::new("github:acme/lib/x.lua@main", "x.lua"));

        let listed = ListOperation::new(&workspace).execute();
        let json = serde_json::to_value(&listed).unwrap();

        assert_eq!(json[0]["name"], "x");
        assert_eq!(json[0]["state"], "unlocked");
        assert!(json[0].get("integrity").is_none());
    }
}
