//! Shared data types for the application.

use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// Kind of a vault item, decoded from the numeric `type` field of `bw` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "u8")]
pub enum ItemKind {
    Login,
    SecureNote,
    Card,
    Identity,
    #[default]
    Unknown,
}

impl From<u8> for ItemKind {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Login,
            2 => Self::SecureNote,
            3 => Self::Card,
            4 => Self::Identity,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Login => "login",
            Self::SecureNote => "note",
            Self::Card => "card",
            Self::Identity => "identity",
            Self::Unknown => "item",
        };
        f.write_str(label)
    }
}

/// Represents a folder in the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: String,
    pub name: String,
}

/// Username and password of a credential item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Login {
    pub username: String,
    pub password: String,
}

/// Represents a vault item with its folder already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultItem {
    pub kind: ItemKind,
    pub name: String,
    pub login: Option<Login>,
    pub notes: String,
    pub folder: Option<Arc<Folder>>,
}

impl VaultItem {
    /// Name of the folder this item lives in, if any.
    pub fn folder_name(&self) -> Option<&str> {
        self.folder.as_deref().map(|folder| folder.name.as_str())
    }
}

impl fmt::Display for VaultItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.folder_name() {
            Some(folder) => write!(f, "{} ({})", self.name, folder),
            None => f.write_str(&self.name),
        }
    }
}

/// Raw item record as printed by `bw list items`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    #[serde(rename = "type", default)]
    pub kind: ItemKind,
    pub name: String,
    #[serde(default)]
    pub login: Option<LoginRecord>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub folder_id: Option<String>,
}

/// Raw login block; `bw` prints `null` for unset fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRecord {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl From<LoginRecord> for Login {
    fn from(record: LoginRecord) -> Self {
        Self {
            username: record.username.unwrap_or_default(),
            password: record.password.unwrap_or_default(),
        }
    }
}

/// Raw folder record as printed by `bw list folders`.
///
/// The "No Folder" pseudo-folder carries a `null` id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FolderRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}
