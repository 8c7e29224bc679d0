//! Add operation module
//!
//! Declares a new dependency in filedep.toml and fetches it in one step.

use std::path::Path;

use crate::cli::AddArgs;
use crate::config::manifest::validate_name;
use crate::error::{FiledepError, Result};
use crate::workspace::Workspace;

use super::Context;
use super::fetch::{FetchOutcome, FetchRequest};

/// Configuration options for add
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    pub source: String,
    pub name: Option<String>,
    pub path: Option<String>,
    pub force: bool,
}

impl From<&AddArgs> for AddOptions {
    fn from(args: &AddArgs) -> Self {
        Self {
            source: args.source.clone(),
            name: args.name.clone(),
            path: args.path.clone(),
            force: args.force,
        }
    }
}

/// High-level add operation
pub struct AddOperation<'a> {
    ctx: &'a Context,
    workspace: &'a mut Workspace,
}

impl<'a> AddOperation<'a> {
    pub fn new(ctx: &'a Context, workspace: &'a mut Workspace) -> Self {
        Self { ctx, workspace }
    }

    /// Execute add operation
    ///
    /// The name defaults to the file name without its extension, the local
    /// path to the file name. An existing name is only replaced with `force`.
    pub fn execute(&mut self, options: &AddOptions) -> Result<FetchOutcome> {
        let descriptor = self.ctx.parser.parse(&options.source)?;
        let filename = descriptor.filename();

        let name = match &options.name {
            Some(name) => name.clone(),
            None => default_name(filename),
        };
        validate_name(&name)?;

        if self.workspace.manifest.contains(&name) && !options.force {
            return Err(FiledepError::DependencyExists { name });
        }

        let local_path = options
            .path
            .clone()
            .unwrap_or_else(|| filename.to_string());

        let request = FetchRequest {
            name,
            source: descriptor.canonical_id(),
            local_path,
            record_manifest: true,
        };
        self.ctx.fetcher().fetch(self.workspace, &request)
    }
}

/// File name without its extension (`json.lua` -> `json`)
fn default_name(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(filename)
        .to_string()
}
