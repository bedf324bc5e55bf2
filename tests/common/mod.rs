#![allow(dead_code)]

//! Shared test doubles for the integration suite.

use async_trait::async_trait;
use bulkops_core::catalog::{ActionType, BulkAction};
use bulkops_core::orchestration::{ApplyAction, ItemFailure, OperationItem};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub struct TestItem {
    pub id: String,
    pub label: String,
}

impl TestItem {
    pub fn arc(n: usize) -> Arc<dyn OperationItem> {
        Arc::new(Self {
            id: format!("item-{n}"),
            label: format!("Item {n}"),
        })
    }
}

impl OperationItem for TestItem {
    fn id(&self) -> String {
        self.id.clone()
    }
    fn label(&self) -> String {
        self.label.clone()
    }
}

/// Items `item-1` .. `item-n`, in order
pub fn items(n: usize) -> Vec<Arc<dyn OperationItem>> {
    (1..=n).map(TestItem::arc).collect()
}

pub fn archive_action() -> Arc<BulkAction> {
    Arc::new(BulkAction::new(
        "bulk-archive",
        ActionType::Archive,
        "Archive",
        "test action",
    ))
}

type Hook = Box<dyn Fn() + Send + Sync>;

/// Apply double: fails for configured item ids, counts invocations, and can
/// fire a one-shot hook (e.g. a pause or cancel control call) when a given
/// invocation number is reached.
pub struct ScriptedApply {
    fail_ids: HashSet<String>,
    calls: AtomicUsize,
    hook: Mutex<Option<(usize, Hook)>>,
}

impl ScriptedApply {
    pub fn succeeding() -> Self {
        Self::failing(HashSet::new())
    }

    pub fn failing(fail_ids: HashSet<String>) -> Self {
        Self {
            fail_ids,
            calls: AtomicUsize::new(0),
            hook: Mutex::new(None),
        }
    }

    pub fn failing_ids(ids: &[&str]) -> Self {
        Self::failing(ids.iter().map(|s| s.to_string()).collect())
    }

    pub fn with_hook_at(self, call_number: usize, hook: impl Fn() + Send + Sync + 'static) -> Self {
        *self.hook.lock() = Some((call_number, Box::new(hook)));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ApplyAction for ScriptedApply {
    async fn apply(
        &self,
        _action: &BulkAction,
        item: &dyn OperationItem,
        _parameters: &HashMap<String, Value>,
        _dry_run: bool,
    ) -> Result<(), ItemFailure> {
        let call_number = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let hook = self.hook.lock();
            if let Some((at, hook_fn)) = hook.as_ref() {
                if call_number == *at {
                    hook_fn();
                }
            }
        }
        tokio::task::yield_now().await;
        if self.fail_ids.contains(&item.id()) {
            Err(ItemFailure::operation(format!(
                "simulated failure for {}",
                item.id()
            )))
        } else {
            Ok(())
        }
    }
}

/// Apply double for the dry-run contract: counts commits to a side channel
/// and only commits when `dry_run` is false.
pub struct CommitProbe {
    commits: AtomicUsize,
}

impl CommitProbe {
    pub fn new() -> Self {
        Self {
            commits: AtomicUsize::new(0),
        }
    }

    pub fn commits(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ApplyAction for CommitProbe {
    async fn apply(
        &self,
        _action: &BulkAction,
        _item: &dyn OperationItem,
        _parameters: &HashMap<String, Value>,
        dry_run: bool,
    ) -> Result<(), ItemFailure> {
        if !dry_run {
            self.commits.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }
}
