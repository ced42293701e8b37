//! Access policy seam for admin operations
//!
//! Authentication and authorization live in an external auth provider; the
//! core only asks a capability question before performing an admin action.
//! Implementations decide what a subject string means (a verified user id,
//! a token fingerprint, a role name).

use serde::{Deserialize, Serialize};

/// Administrative actions the portal can be asked to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminAction {
    CreateEntry,
    UpdateEntry,
    DeleteEntry,
    EditHero,
    EditBranding,
}

impl AdminAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminAction::CreateEntry => "create_entry",
            AdminAction::UpdateEntry => "update_entry",
            AdminAction::DeleteEntry => "delete_entry",
            AdminAction::EditHero => "edit_hero",
            AdminAction::EditBranding => "edit_branding",
        }
    }
}

impl std::fmt::Display for AdminAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability check consulted before every admin operation
pub trait AccessPolicy: Send + Sync {
    fn is_authorized(&self, subject: &str, action: AdminAction) -> bool;
}

/// Policy that grants every action; test and local-development fixture
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AccessPolicy for AllowAll {
    fn is_authorized(&self, _subject: &str, _action: AdminAction) -> bool {
        true
    }
}

/// Policy that denies every action; test fixture
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

impl AccessPolicy for DenyAll {
    fn is_authorized(&self, _subject: &str, _action: AdminAction) -> bool {
        false
    }
}
