//! Command implementations for the filedep CLI

pub mod add;
pub mod check;
pub mod completions;
pub mod helpers;
pub mod init;
pub mod install;
pub mod list;
pub mod remove;
pub mod version;
