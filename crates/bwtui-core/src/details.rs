//! State of the item details overlay.

use crate::models::VaultItem;

/// Shown in place of a password until it is revealed.
pub const PASSWORD_MASK: &str = "********";

/// Which item is being inspected and whether its password is visible.
#[derive(Debug, Clone, Default)]
pub struct DetailsState {
    active: Option<VaultItem>,
    reveal_password: bool,
}

/// Field values of the open item, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsView<'a> {
    pub name: &'a str,
    pub kind: String,
    pub folder: Option<&'a str>,
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
    pub notes: Option<&'a str>,
}

impl DetailsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the overlay on a snapshot of `item`, password hidden.
    pub fn open(&mut self, item: VaultItem) {
        self.active = Some(item);
        self.reveal_password = false;
    }

    /// Flip password visibility. Does nothing while closed.
    pub fn toggle_reveal(&mut self) {
        if self.active.is_some() {
            self.reveal_password = !self.reveal_password;
        }
    }

    pub fn close(&mut self) {
        self.active = None;
        self.reveal_password = false;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_item(&self) -> Option<&VaultItem> {
        self.active.as_ref()
    }

    pub fn reveal_password(&self) -> bool {
        self.reveal_password
    }

    /// Build the view of the open item, masking the password as needed.
    pub fn view(&self) -> Option<DetailsView<'_>> {
        let item = self.active.as_ref()?;
        let login = item.login.as_ref();
        Some(DetailsView {
            name: &item.name,
            kind: item.kind.to_string(),
            folder: item.folder_name(),
            username: login.map(|login| login.username.as_str()),
            password: login.map(|login| {
                if self.reveal_password {
                    login.password.as_str()
                } else {
                    PASSWORD_MASK
                }
            }),
            notes: (!item.notes.is_empty()).then_some(item.notes.as_str()),
        })
    }
}
