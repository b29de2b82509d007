// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::transport::{TicketDraft, TicketTransport, TransportError, UpdatePayload};
use gearguard_domain::{Actor, Role};
use serde_json::{Value, json};
use std::cell::RefCell;

/// An in-memory transport double.
///
/// Holds the server-truth records. `update_ticket` merges the payload into
/// the stored record, so a fetch after a confirmed update reflects the
/// change; a fetch after a failed update reflects the unchanged original.
pub struct FakeTransport {
    records: RefCell<Vec<Value>>,
    fail_next_update: RefCell<Option<TransportError>>,
    fail_fetch: RefCell<bool>,
    updates_sent: RefCell<Vec<(i64, Value)>>,
    next_id: RefCell<i64>,
}

impl FakeTransport {
    pub fn new(records: Vec<Value>) -> Self {
        Self {
            records: RefCell::new(records),
            fail_next_update: RefCell::new(None),
            fail_fetch: RefCell::new(false),
            updates_sent: RefCell::new(Vec::new()),
            next_id: RefCell::new(1000),
        }
    }

    /// Makes the next `update_ticket` call fail with the given error.
    pub fn fail_next_update(&self, err: TransportError) {
        *self.fail_next_update.borrow_mut() = Some(err);
    }

    /// Makes all subsequent fetches fail.
    pub fn fail_fetch(&self) {
        *self.fail_fetch.borrow_mut() = true;
    }

    /// Returns the payloads sent upstream, in order.
    pub fn updates_sent(&self) -> Vec<(i64, Value)> {
        self.updates_sent.borrow().clone()
    }
}

impl TicketTransport for FakeTransport {
    fn fetch_all_tickets(&self) -> Result<Vec<Value>, TransportError> {
        if *self.fail_fetch.borrow() {
            return Err(TransportError::Network(String::from("connection refused")));
        }
        Ok(self.records.borrow().clone())
    }

    fn update_ticket(
        &self,
        ticket_id: i64,
        payload: &UpdatePayload,
    ) -> Result<Value, TransportError> {
        if let Some(err) = self.fail_next_update.borrow_mut().take() {
            return Err(err);
        }

        let patch: Value = serde_json::to_value(payload).unwrap();
        self.updates_sent
            .borrow_mut()
            .push((ticket_id, patch.clone()));

        let mut records = self.records.borrow_mut();
        let record = records
            .iter_mut()
            .find(|r| r.get("id").and_then(Value::as_i64) == Some(ticket_id))
            .ok_or(TransportError::Server {
                status: 404,
                message: String::from("Not found"),
            })?;
        for (key, value) in patch.as_object().unwrap() {
            record[key] = value.clone();
        }
        Ok(record.clone())
    }

    fn create_ticket(&self, draft: &TicketDraft) -> Result<Value, TransportError> {
        let mut next_id = self.next_id.borrow_mut();
        *next_id += 1;
        let mut record: Value = serde_json::to_value(draft).unwrap();
        record["id"] = json!(*next_id);
        record["status"] = json!("NEW");
        self.records.borrow_mut().push(record.clone());
        Ok(record)
    }
}

/// Builds a raw server record in the flat camelCase shape.
pub fn raw_ticket(id: i64, status: &str, assigned_to: Option<&str>) -> Value {
    let mut record = json!({
        "id": id,
        "subject": format!("Ticket {id}"),
        "description": "Test ticket",
        "status": status,
        "priority": "MEDIUM",
        "type": "PREVENTIVE",
        "equipmentName": "CNC Milling Machine",
        "equipmentId": 1,
    });
    if let Some(name) = assigned_to {
        record["assignedTo"] = json!(name);
    }
    record
}

/// Creates a technician actor named Bob.
pub fn create_technician() -> Actor {
    Actor::new(3, String::from("Bob"), Role::Technician)
}

/// Creates a manager actor.
pub fn create_manager() -> Actor {
    Actor::new(2, String::from("Morgan"), Role::Manager)
}
