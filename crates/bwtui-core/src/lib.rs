//! Core models and state handling for bwtui.
//!
//! This crate loads the vault through the Bitwarden CLI and provides the
//! pieces of UI state the terminal frontend is built from: filtering,
//! selection, the details overlay and the feedback line.

pub mod clipboard;
pub mod details;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod keymap;
pub mod models;
pub mod navigation;
pub mod repository;
pub mod source;

pub use clipboard::{ClipboardSink, CommandClipboard, SystemClipboard};
pub use details::{DetailsState, DetailsView, PASSWORD_MASK};
pub use error::{ClipboardError, ConfigError, LoadError};
pub use feedback::{Expired, FeedbackTimer, Notifier, ThreadTimer};
pub use filter::{FilterEngine, FilteredView};
pub use keymap::{Action, KeyBindings};
pub use models::{Folder, ItemKind, Login, VaultItem};
pub use navigation::Navigation;
pub use repository::Repository;
pub use source::{BitwardenCli, VaultSource};
