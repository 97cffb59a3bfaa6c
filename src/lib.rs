// Main library file for the hostel booking tracker

pub mod booking;
pub mod console;
pub mod pending_queue;
pub mod room_grid;

// Re-export key types for convenience
pub use booking::{
    BookingError, BookingService, BookingStats, Confirmation, Customer, HostelBookingSystem,
    HostelConfig, HostelSnapshot, RoomAssignment,
};
pub use console::{Console, ConsoleError, MenuChoice};
pub use pending_queue::PendingQueue;
pub use room_grid::RoomGrid;
