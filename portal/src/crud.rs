//! List state and remote calls for the per-entity CRUD screens.
//!
//! INVARIANTS
//! ==========
//! - The list only changes after the backend confirmed a write. A failed
//!   create, update or delete leaves `items` exactly as it was.
//! - At most one mutation is in flight per screen. [`CrudState::try_begin_mutation`]
//!   refuses a second one, and the UI disables submit controls on `in_flight`.
//!   This is a UI affordance: the backend itself does not deduplicate.

use serde_json::{Map, Value};

use crate::error::RemoteError;
use crate::record::{Record, RecordId};
use crate::remote::{Query, RemoteClient, Transport};
use crate::schema::EntitySchema;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CrudState {
    pub items: Vec<Record>,
    pub loading: bool,
    pub in_flight: bool,
    pub error: Option<String>,
    pub filter: String,
}

impl CrudState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the list on success; keep the previous rows on failure.
    pub fn finish_load(&mut self, result: Result<Vec<Record>, RemoteError>) {
        self.loading = false;
        match result {
            Ok(rows) => self.items = rows,
            Err(e) => self.error = Some(e.user_message()),
        }
    }

    /// Claim the mutation slot. Returns `false` while another mutation runs.
    pub fn try_begin_mutation(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.error = None;
        true
    }

    /// Returns `true` when the row was committed and added.
    pub fn finish_create(&mut self, schema: &EntitySchema, result: Result<Record, RemoteError>) -> bool {
        self.in_flight = false;
        match result {
            Ok(record) => {
                if schema.ascending {
                    self.items.push(record);
                } else {
                    self.items.insert(0, record);
                }
                true
            }
            Err(e) => {
                self.error = Some(e.user_message());
                false
            }
        }
    }

    /// Returns `true` when the row was committed and replaced.
    pub fn finish_update(&mut self, result: Result<Record, RemoteError>) -> bool {
        self.in_flight = false;
        match result {
            Ok(record) => {
                let id = record.id();
                match self.items.iter_mut().find(|item| item.id().is_some() && item.id() == id) {
                    Some(slot) => *slot = record,
                    None => self.items.push(record),
                }
                true
            }
            Err(e) => {
                self.error = Some(e.user_message());
                false
            }
        }
    }

    /// Returns `true` when the row was deleted remotely and dropped locally.
    pub fn finish_delete(&mut self, id: &RecordId, result: Result<(), RemoteError>) -> bool {
        self.in_flight = false;
        match result {
            Ok(()) => {
                self.items.retain(|item| item.id().as_ref() != Some(id));
                true
            }
            Err(e) => {
                self.error = Some(e.user_message());
                false
            }
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Rows matching the filter text across the schema's searchable fields.
    #[must_use]
    pub fn visible(&self, schema: &EntitySchema) -> Vec<Record> {
        let needle = self.filter.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.clone();
        }
        self.items
            .iter()
            .filter(|item| {
                schema
                    .searchable
                    .iter()
                    .any(|field| item.text(field).to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }
}

// =============================================================================
// REMOTE CALLS
// =============================================================================

#[must_use]
pub fn list_query(schema: &EntitySchema) -> Query {
    Query::new().order(schema.order_by, schema.ascending)
}

/// # Errors
///
/// Returns [`RemoteError`] when the select fails.
pub async fn fetch_all<T: Transport>(
    client: &RemoteClient<T>,
    schema: &EntitySchema,
    access_token: Option<&str>,
) -> Result<Vec<Record>, RemoteError> {
    client.select(schema.table, &list_query(schema), access_token).await
}

/// # Errors
///
/// Returns [`RemoteError`] when the insert is rejected.
pub async fn create<T: Transport>(
    client: &RemoteClient<T>,
    schema: &EntitySchema,
    row: &Map<String, Value>,
    access_token: Option<&str>,
) -> Result<Record, RemoteError> {
    client.insert(schema.table, row, access_token).await
}

/// # Errors
///
/// Returns [`RemoteError`] when the update is rejected or matches no row.
pub async fn update<T: Transport>(
    client: &RemoteClient<T>,
    schema: &EntitySchema,
    id: &RecordId,
    row: &Map<String, Value>,
    access_token: Option<&str>,
) -> Result<Record, RemoteError> {
    client.update(schema.table, id, row, access_token).await
}

/// # Errors
///
/// Returns [`RemoteError`] when the delete is rejected or matches no row.
pub async fn remove<T: Transport>(
    client: &RemoteClient<T>,
    schema: &EntitySchema,
    id: &RecordId,
    access_token: Option<&str>,
) -> Result<(), RemoteError> {
    client.delete(schema.table, id, access_token).await
}

#[cfg(test)]
#[path = "crud_test.rs"]
mod crud_test;
