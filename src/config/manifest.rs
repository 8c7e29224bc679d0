//! Manifest (filedep.toml) data structures
//!
//! The manifest declares which remote files a project vendors and where they
//! live locally. Sources are stored in canonical form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{FiledepError, Result};

/// Manifest filename
pub const MANIFEST_FILE: &str = "filedep.toml";

/// Manifest structure (filedep.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Declared dependencies keyed by name
    #[serde(default)]
    pub dependencies: BTreeMap<String, ManifestEntry>,
}

/// A declared dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Canonical source (`github:<owner>/<repo>/<path>@<ref>`)
    pub source: String,

    /// Local path, relative to the project root
    pub path: String,
}

impl ManifestEntry {
    pub fn new(source: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            path: path.into(),
        }
    }
}

impl Manifest {
    /// Parse manifest from TOML
    pub fn from_toml(content: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(content).map_err(|e| FiledepError::ConfigParseFailed {
            path: MANIFEST_FILE.to_string(),
            reason: e.to_string(),
        })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Serialize manifest to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FiledepError::ConfigSerializeFailed {
            path: MANIFEST_FILE.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn get(&self, name: &str) -> Option<&ManifestEntry> {
        self.dependencies.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
    }

    /// Insert or replace a dependency
    pub fn upsert(&mut self, name: impl Into<String>, entry: ManifestEntry) {
        self.dependencies.insert(name.into(), entry);
    }

    pub fn remove(&mut self, name: &str) -> Option<ManifestEntry> {
        self.dependencies.remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.dependencies.keys().map(String::as_str)
    }

    /// Check structural validity (names and paths)
    pub fn validate(&self) -> Result<()> {
        for (name, entry) in &self.dependencies {
            validate_name(name)?;
            if entry.path.trim().is_empty() {
                return Err(FiledepError::ConfigInvalid {
                    message: format!("dependency '{name}' has an empty path"),
                });
            }
        }
        Ok(())
    }
}

/// Dependency names are used as TOML keys and in messages
pub fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("name must not be empty")
    } else if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        Some("name must not contain whitespace")
    } else if name.contains('/') || name.contains('\\') {
        Some("name must not contain path separators")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(FiledepError::InvalidDependencyName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_from_toml() {
        let toml = r#"
[dependencies.json]
source = "github:rxi/json.lua/json.lua@master"
path = "vendor/json.lua"

[dependencies.inspect]
source = "github:kikito/inspect.lua/inspect.lua@v3.1.3"
path = "inspect.lua"
"#;
        let manifest = Manifest::from_toml(toml).unwrap();
        assert_eq!(manifest.dependencies.len(), 2);
        let json = manifest.get("json").unwrap();
        assert_eq!(json.source, "github:rxi/json.lua/json.lua@master");
        assert_eq!(json.path, "vendor/json.lua");
    }

    #[test]
    fn test_manifest_empty_document() {
        let manifest = Manifest::from_toml("").unwrap();
        assert!(manifest.dependencies.is_empty());
    }

    #[test]
    fn test_manifest_round_trip_keeps_sorted_names() {
        let mut manifest = Manifest::default();
        manifest.upsert("zeta", ManifestEntry::new("github:a/b/z.lua@main", "z.lua"));
        manifest.upsert("alpha", ManifestEntry::new("github:a/b/a.lua@main", "a.lua"));

        let toml = manifest.to_toml().unwrap();
        assert!(toml.find("alpha").unwrap() < toml.find("zeta").unwrap());
        assert_eq!(Manifest::from_toml(&toml).unwrap(), manifest);
    }

    #[test]
    fn test_manifest_operations() {
        let mut manifest = Manifest::default();
        assert!(!manifest.contains("dep"));

        manifest.upsert("dep", ManifestEntry::new("github:a/b/c@main", "c"));
        assert!(manifest.contains("dep"));
        assert_eq!(manifest.names().collect::<Vec<_>>(), vec!["dep"]);

        assert!(manifest.remove("dep").is_some());
        assert!(manifest.remove("dep").is_none());
    }

    #[test]
    fn test_manifest_rejects_invalid_toml() {
        let err = Manifest::from_toml("[dependencies.x]\nsource = ").unwrap_err();
        assert!(matches!(err, FiledepError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_manifest_rejects_empty_path() {
        let toml = "[dependencies.x]\nsource = \"github:a/b/c@main\"\npath = \"\"\n";
        let err = Manifest::from_toml(toml).unwrap_err();
        assert!(matches!(err, FiledepError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("json").is_ok());
        assert!(validate_name("json-lua_2").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("a b").is_err());
        assert!(validate_name("a/b").is_err());
    }
}
