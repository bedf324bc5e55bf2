//! # Action Catalog
//!
//! Static catalog of the bulk actions an operator can run, plus the
//! confirmation gate that decides whether a run needs explicit approval
//! before it starts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Closed enumeration of bulk action kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Delete,
    Update,
    Archive,
    Restore,
    Export,
    Move,
    Duplicate,
    Approve,
    Reject,
    Custom,
}

impl ActionType {
    /// Action kinds that remove or overwrite records by default
    pub fn is_destructive_by_default(&self) -> bool {
        matches!(self, Self::Delete | Self::Reject)
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delete => write!(f, "delete"),
            Self::Update => write!(f, "update"),
            Self::Archive => write!(f, "archive"),
            Self::Restore => write!(f, "restore"),
            Self::Export => write!(f, "export"),
            Self::Move => write!(f, "move"),
            Self::Duplicate => write!(f, "duplicate"),
            Self::Approve => write!(f, "approve"),
            Self::Reject => write!(f, "reject"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

impl std::str::FromStr for ActionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "delete" => Ok(Self::Delete),
            "update" => Ok(Self::Update),
            "archive" => Ok(Self::Archive),
            "restore" => Ok(Self::Restore),
            "export" => Ok(Self::Export),
            "move" => Ok(Self::Move),
            "duplicate" => Ok(Self::Duplicate),
            "approve" => Ok(Self::Approve),
            "reject" => Ok(Self::Reject),
            "custom" => Ok(Self::Custom),
            _ => Err(format!("Invalid action type: {s}")),
        }
    }
}

/// Immutable catalog entry describing one available bulk action.
///
/// Created at configuration time and shared read-only from then on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkAction {
    pub id: String,
    pub action_type: ActionType,
    pub label: String,
    pub description: String,
    pub confirmation_required: bool,
    pub destructive: bool,
}

impl BulkAction {
    pub fn new(
        id: impl Into<String>,
        action_type: ActionType,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            action_type,
            label: label.into(),
            description: description.into(),
            confirmation_required: false,
            destructive: action_type.is_destructive_by_default(),
        }
    }

    pub fn with_confirmation(mut self) -> Self {
        self.confirmation_required = true;
        self
    }

    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }
}

/// Confirmation gate: destructive actions always require confirmation,
/// regardless of the explicit flag.
pub fn requires_confirmation(action: &BulkAction) -> bool {
    action.confirmation_required || action.destructive
}

/// Lookup table of configured bulk actions, keyed by action id.
#[derive(Debug, Clone, Default)]
pub struct ActionCatalog {
    actions: HashMap<String, Arc<BulkAction>>,
    ordered_ids: Vec<String>,
}

impl ActionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the standard dashboard action set.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.register(BulkAction::new(
            "bulk-delete",
            ActionType::Delete,
            "Delete",
            "Permanently delete the selected items",
        ));
        catalog.register(
            BulkAction::new(
                "bulk-update",
                ActionType::Update,
                "Update",
                "Apply a field update to the selected items",
            )
            .with_confirmation(),
        );
        catalog.register(BulkAction::new(
            "bulk-archive",
            ActionType::Archive,
            "Archive",
            "Move the selected items to the archive",
        ));
        catalog.register(BulkAction::new(
            "bulk-restore",
            ActionType::Restore,
            "Restore",
            "Restore the selected items from the archive",
        ));
        catalog.register(BulkAction::new(
            "bulk-export",
            ActionType::Export,
            "Export",
            "Export the selected items",
        ));
        catalog.register(
            BulkAction::new(
                "bulk-move",
                ActionType::Move,
                "Move",
                "Move the selected items to another location",
            )
            .with_confirmation(),
        );
        catalog.register(BulkAction::new(
            "bulk-duplicate",
            ActionType::Duplicate,
            "Duplicate",
            "Create copies of the selected items",
        ));
        catalog.register(BulkAction::new(
            "bulk-approve",
            ActionType::Approve,
            "Approve",
            "Approve the selected items",
        ));
        catalog.register(BulkAction::new(
            "bulk-reject",
            ActionType::Reject,
            "Reject",
            "Reject the selected items",
        ));
        catalog
    }

    pub fn register(&mut self, action: BulkAction) {
        let id = action.id.clone();
        if self.actions.insert(id.clone(), Arc::new(action)).is_none() {
            self.ordered_ids.push(id);
        }
    }

    pub fn get(&self, id: &str) -> Option<Arc<BulkAction>> {
        self.actions.get(id).cloned()
    }

    /// Actions in registration order, for menu rendering.
    pub fn actions(&self) -> Vec<Arc<BulkAction>> {
        self.ordered_ids
            .iter()
            .filter_map(|id| self.actions.get(id).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
