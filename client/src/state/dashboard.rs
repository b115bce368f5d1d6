//! Admin overview counters, one per entity table.

use portal::{EntityKind, RemoteError};

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatValue {
    Loading,
    Count(u64),
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatEntry {
    pub kind: EntityKind,
    pub value: StatValue,
}

impl StatEntry {
    pub fn display(&self) -> String {
        match &self.value {
            StatValue::Loading => "...".to_owned(),
            StatValue::Count(n) => n.to_string(),
            StatValue::Failed(_) => "n/a".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub entries: Vec<StatEntry>,
}

impl Default for DashboardStats {
    fn default() -> Self {
        let entries = EntityKind::ALL
            .into_iter()
            .map(|kind| StatEntry { kind, value: StatValue::Loading })
            .collect();
        Self { entries }
    }
}

impl DashboardStats {
    pub fn record(&mut self, kind: EntityKind, result: Result<u64, RemoteError>) {
        let Some(entry) = self.entries.iter_mut().find(|e| e.kind == kind) else {
            return;
        };
        entry.value = match result {
            Ok(n) => StatValue::Count(n),
            Err(e) => StatValue::Failed(e.user_message()),
        };
    }

    /// First failure message, shown once above the cards.
    pub fn first_error(&self) -> Option<String> {
        self.entries.iter().find_map(|e| match &e.value {
            StatValue::Failed(message) => Some(message.clone()),
            _ => None,
        })
    }
}
