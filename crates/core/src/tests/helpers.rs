// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gearguard_domain::{
    Actor, EquipmentRef, Priority, RequestType, Role, Ticket, TicketStatus,
};

/// Creates a ticket with the given id, status, and assignee.
pub fn create_test_ticket(id: i64, status: TicketStatus, assigned_to: Option<&str>) -> Ticket {
    Ticket {
        id,
        subject: format!("Ticket {id}"),
        description: String::from("Test ticket"),
        status,
        priority: Priority::Medium,
        request_type: RequestType::Preventive,
        equipment: EquipmentRef::new(1, String::from("CNC Milling Machine")),
        assigned_to: assigned_to.map(String::from),
        created_at: Some(String::from("2026-03-01")),
        scheduled_date: None,
        duration_hours: None,
    }
}

/// Creates a technician actor named Bob.
pub fn create_technician() -> Actor {
    Actor::new(3, String::from("Bob"), Role::Technician)
}

/// Creates a manager actor.
pub fn create_manager() -> Actor {
    Actor::new(2, String::from("Morgan"), Role::Manager)
}
