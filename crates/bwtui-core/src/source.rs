//! Vault and folder sources backed by the Bitwarden CLI.

use crate::error::LoadError;
use crate::models::{FolderRecord, ItemRecord};
use serde::de::DeserializeOwned;
use std::process::Command;

/// Something that can list vault items and folders.
pub trait VaultSource {
    /// List items, optionally narrowed by a source-side search string.
    fn list_items(&self, search: Option<&str>) -> Result<Vec<ItemRecord>, LoadError>;

    /// List all folders.
    fn list_folders(&self) -> Result<Vec<FolderRecord>, LoadError>;
}

/// Runs `bw list ...` and decodes its JSON output.
#[derive(Debug, Clone)]
pub struct BitwardenCli {
    program: String,
}

impl BitwardenCli {
    /// Create a source that invokes `program` (usually `bw`).
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run<T: DeserializeOwned>(&self, args: &[&str], what: &'static str) -> Result<T, LoadError> {
        let command = format!("{} {}", self.program, args.join(" "));
        tracing::debug!("Running {}", command);

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| LoadError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(LoadError::Exit {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        serde_json::from_slice(&output.stdout).map_err(|source| LoadError::Parse { what, source })
    }
}

impl Default for BitwardenCli {
    fn default() -> Self {
        Self::new("bw")
    }
}

impl VaultSource for BitwardenCli {
    fn list_items(&self, search: Option<&str>) -> Result<Vec<ItemRecord>, LoadError> {
        let mut args = vec!["list", "items"];
        if let Some(search) = search.filter(|s| !s.is_empty()) {
            args.push("--search");
            args.push(search);
        }
        self.run(&args, "vault items")
    }

    fn list_folders(&self) -> Result<Vec<FolderRecord>, LoadError> {
        self.run(&["list", "folders"], "folders")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_a_spawn_error() {
        let source = BitwardenCli::new("bwtui-test-no-such-program");
        let err = source.list_folders().unwrap_err();
        assert!(matches!(err, LoadError::Spawn { .. }), "{err:?}");
    }

    #[cfg(unix)]
    #[test]
    fn failing_program_is_an_exit_error() {
        let source = BitwardenCli::new("false");
        let err = source.list_items(None).unwrap_err();
        assert!(matches!(err, LoadError::Exit { .. }), "{err:?}");
    }

    #[cfg(unix)]
    #[test]
    fn non_json_output_is_a_parse_error() {
        // `echo list folders` prints its arguments, which is not JSON.
        let source = BitwardenCli::new("echo");
        let err = source.list_folders().unwrap_err();
        assert!(
            matches!(err, LoadError::Parse { what: "folders", .. }),
            "{err:?}"
        );
    }
}
