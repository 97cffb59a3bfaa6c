// Booking assignment logic
// Customers request a room, wait in a FIFO queue and get the first free room in scan order

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{pending_queue::PendingQueue, room_grid::RoomGrid};

// Error types for booking operations. None of them is fatal, the console reports and carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("A customer with ID {0} already exists")]
    DuplicateId(i32),

    #[error("No pending booking requests")]
    NoPendingRequests,

    // The dequeued request is not put back
    #[error("No rooms available, request {dropped_id} dropped")]
    NoRoomsAvailable { dropped_id: i32 },

    #[error("No booking found with ID {0}")]
    NotFound(i32),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// Hostel layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HostelConfig {
    pub floors: usize,
    pub rooms_per_floor: usize,
}

impl Default for HostelConfig {
    fn default() -> Self {
        Self {
            floors: 2,
            rooms_per_floor: 5,
        }
    }
}

impl HostelConfig {
    pub fn validate(&self) -> Result<(), BookingError> {
        if self.floors == 0 {
            return Err(BookingError::InvalidConfig(
                "hostel needs at least one floor".to_string(),
            ));
        }

        if self.rooms_per_floor == 0 {
            return Err(BookingError::InvalidConfig(
                "each floor needs at least one room".to_string(),
            ));
        }

        Ok(())
    }
}

// 1-based floor and room numbers, as shown to guests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoomAssignment {
    pub floor: usize,
    pub room: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    // None while the booking is pending
    pub assignment: Option<RoomAssignment>,
}

impl Customer {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            assignment: None,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.assignment.is_some()
    }
}

// Result of a successful confirm_next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub customer: Customer,
    pub assignment: RoomAssignment,
    // true when the customer was canceled while still queued, so the roster had nothing to update
    pub ghost: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct BookingStats {
    pub requests_accepted: usize,
    pub duplicates_rejected: usize,
    pub confirmations: usize,
    pub ghost_confirmations: usize,
    pub dropped_requests: usize,
    pub cancellations: usize,
    pub unknown_cancellations: usize,
}

// Serializable view of the whole hostel, used for diagnostics
#[derive(Debug, Clone, Serialize)]
pub struct HostelSnapshot {
    pub config: HostelConfig,
    pub rooms: RoomGrid,
    pub customers: Vec<Customer>,
    pub pending_ids: Vec<i32>,
    pub stats: BookingStats,
}

// Booking operations driven by the console menu
pub trait BookingService {
    fn new(config: HostelConfig) -> Self
    where
        Self: Sized;

    // Current occupancy of every room
    fn list_availability(&self) -> &RoomGrid;

    // Queue a new booking request. Rejects ids already on the roster.
    fn request_booking(&mut self, id: i32, name: &str) -> Result<(), BookingError>;

    // Give the oldest pending request the first free room in row-major order
    fn confirm_next(&mut self) -> Result<Confirmation, BookingError>;

    fn check_status(&self, id: i32) -> Result<&Customer, BookingError>;

    // Drop a customer from the roster, freeing the room if one was assigned
    fn cancel_booking(&mut self, id: i32) -> Result<Customer, BookingError>;

    fn list_customers(&self) -> &[Customer];

    fn stats(&self) -> BookingStats;

    fn snapshot(&self) -> HostelSnapshot;
}

#[derive(Debug, Clone)]
pub struct HostelBookingSystem {
    config: HostelConfig,
    rooms: RoomGrid,
    pending: PendingQueue,
    customers: Vec<Customer>,
    stats: BookingStats,
}

impl Default for HostelBookingSystem {
    fn default() -> Self {
        Self::new(HostelConfig::default())
    }
}

impl HostelBookingSystem {
    pub fn config(&self) -> HostelConfig {
        self.config
    }

    pub fn pending(&self) -> &PendingQueue {
        &self.pending
    }

    fn find_customer(&self, id: i32) -> Option<usize> {
        self.customers.iter().position(|c| c.id == id)
    }
}

impl BookingService for HostelBookingSystem {
    fn new(config: HostelConfig) -> Self {
        Self {
            rooms: RoomGrid::new(config.floors, config.rooms_per_floor),
            config,
            pending: PendingQueue::new(),
            customers: Vec::new(),
            stats: BookingStats::default(),
        }
    }

    fn list_availability(&self) -> &RoomGrid {
        &self.rooms
    }

    fn request_booking(&mut self, id: i32, name: &str) -> Result<(), BookingError> {
        if self.find_customer(id).is_some() {
            self.stats.duplicates_rejected += 1;
            debug!(id, "rejected duplicate booking request");
            return Err(BookingError::DuplicateId(id));
        }

        let customer = Customer::new(id, name);
        self.pending.push_back(customer.clone());
        self.customers.push(customer);
        self.stats.requests_accepted += 1;

        debug!(id, name, pending = self.pending.len(), "booking request queued");
        Ok(())
    }

    fn confirm_next(&mut self) -> Result<Confirmation, BookingError> {
        let mut customer = self
            .pending
            .pop_front()
            .ok_or(BookingError::NoPendingRequests)?;

        let Some((floor, room)) = self.rooms.first_free() else {
            self.stats.dropped_requests += 1;
            warn!(id = customer.id, "no free room, pending request dropped");
            return Err(BookingError::NoRoomsAvailable {
                dropped_id: customer.id,
            });
        };

        self.rooms.occupy(floor, room);
        let assignment = RoomAssignment {
            floor: floor + 1,
            room: room + 1,
        };
        customer.assignment = Some(assignment);
        self.stats.confirmations += 1;

        // Write back over the roster entry; a canceled customer has none
        let ghost = match self.find_customer(customer.id) {
            Some(idx) => {
                self.customers[idx] = customer.clone();
                false
            }
            None => {
                self.stats.ghost_confirmations += 1;
                warn!(
                    id = customer.id,
                    floor = floor + 1,
                    room = room + 1,
                    "confirmed a request whose customer was already canceled"
                );
                true
            }
        };

        info!(
            id = customer.id,
            floor = floor + 1,
            room = room + 1,
            "booking confirmed"
        );

        Ok(Confirmation {
            customer,
            assignment,
            ghost,
        })
    }

    fn check_status(&self, id: i32) -> Result<&Customer, BookingError> {
        self.customers
            .iter()
            .find(|c| c.id == id)
            .ok_or(BookingError::NotFound(id))
    }

    fn cancel_booking(&mut self, id: i32) -> Result<Customer, BookingError> {
        let Some(idx) = self.find_customer(id) else {
            self.stats.unknown_cancellations += 1;
            debug!(id, "cancel requested for unknown id");
            return Err(BookingError::NotFound(id));
        };

        if let Some(RoomAssignment { floor, room }) = self.customers[idx].assignment {
            self.rooms.release(floor - 1, room - 1);
            debug!(id, floor, room, "room released");
        } else if self.pending.contains(id) {
            // The queued request stays behind and will still consume a room on confirm
            debug!(id, "canceled customer is still in the pending queue");
        }

        let customer = self.customers.remove(idx);
        self.stats.cancellations += 1;

        info!(id, "booking canceled");
        Ok(customer)
    }

    fn list_customers(&self) -> &[Customer] {
        &self.customers
    }

    fn stats(&self) -> BookingStats {
        self.stats.clone()
    }

    fn snapshot(&self) -> HostelSnapshot {
        HostelSnapshot {
            config: self.config,
            rooms: self.rooms.clone(),
            customers: self.customers.clone(),
            pending_ids: self.pending.iter().map(|c| c.id).collect(),
            stats: self.stats.clone(),
        }
    }
}
