// Interactive menu for the booking desk
// Reads choices line by line and prints the same messages a guest sees at the front desk

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    booking::{BookingError, BookingService, Confirmation, Customer},
    room_grid::RoomGrid,
};

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowAvailableRooms,
    RequestBooking,
    CheckStatus,
    CancelBooking,
    ConfirmNext,
    ListCustomers,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            1 => Some(MenuChoice::ShowAvailableRooms),
            2 => Some(MenuChoice::RequestBooking),
            3 => Some(MenuChoice::CheckStatus),
            4 => Some(MenuChoice::CancelBooking),
            5 => Some(MenuChoice::ConfirmNext),
            6 => Some(MenuChoice::ListCustomers),
            7 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub const MENU: &str = "\n--- Hostel Booking System ---\n\
1. Show Available Rooms\n\
2. Request Room Booking\n\
3. Check Booking Status\n\
4. Cancel Booking\n\
5. Confirm Next Booking (Admin)\n\
6. List All Customers\n\
7. Exit\n\
Enter your choice: ";

pub const GOODBYE: &str = "Thank you for using the Hostel Booking System. Goodbye!\n";

pub fn render_availability(grid: &RoomGrid) -> String {
    let mut out = String::from("\nRoom Availability (0 = Available, 1 = Booked):\n");

    for (floor, rooms) in grid.rows().enumerate() {
        out.push_str(&format!("Floor {}: ", floor + 1));
        for taken in rooms {
            out.push_str(if *taken { "1 " } else { "0 " });
        }
        out.push('\n');
    }

    out
}

pub fn render_request(name: &str, result: &Result<(), BookingError>) -> String {
    match result {
        Ok(()) => format!(
            "Booking request submitted for {}. Your booking is pending.\n",
            name
        ),
        Err(BookingError::DuplicateId(_)) => {
            "A customer with this ID already exists. Booking cannot be duplicated.\n".to_string()
        }
        Err(e) => unreachable!("request_booking never fails with {e:?}"),
    }
}

pub fn render_confirmation(result: &Result<Confirmation, BookingError>) -> String {
    match result {
        Ok(Confirmation {
            customer,
            assignment,
            ..
        }) => format!(
            "Booking confirmed for {} in Floor {}, Room {}.\n",
            customer.name, assignment.floor, assignment.room
        ),
        Err(BookingError::NoPendingRequests) => "No pending booking requests.\n".to_string(),
        Err(BookingError::NoRoomsAvailable { .. }) => {
            "No rooms available at the moment. Booking remains pending.\n".to_string()
        }
        Err(e) => unreachable!("confirm_next never fails with {e:?}"),
    }
}

pub fn render_status(id: i32, result: Result<&Customer, BookingError>) -> String {
    match result {
        Ok(Customer {
            name,
            assignment: Some(at),
            ..
        }) => format!(
            "Hello {}, your booking is confirmed in Floor {}, Room {}.\n",
            name, at.floor, at.room
        ),
        Ok(Customer { name, .. }) => format!(
            "Hello {}, your booking is still pending. Please wait for confirmation.\n",
            name
        ),
        Err(_) => format!("No booking request found with ID {}.\n", id),
    }
}

pub fn render_customers(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return "\nNo customers found.\n".to_string();
    }

    let mut out = String::from("\nList of All Customers:\n");
    for customer in customers {
        let (floor, room, status) = match customer.assignment {
            Some(at) => (at.floor.to_string(), at.room.to_string(), "Confirmed"),
            None => ("Pending".to_string(), "Pending".to_string(), "Pending"),
        };

        out.push_str(&format!(
            "ID: {}, Name: {}, Floor: {}, Room: {}, Status: {}\n",
            customer.id, customer.name, floor, room, status
        ));
    }

    out
}

pub struct Console<S, R, W> {
    service: S,
    input: R,
    output: W,
}

impl<S, R, W> Console<S, R, W>
where
    S: BookingService,
    R: BufRead,
    W: Write,
{
    pub fn new(service: S, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn into_parts(self) -> (S, W) {
        (self.service, self.output)
    }

    // Runs until the exit choice or end of input
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        loop {
            self.write(MENU)?;

            let Some(line) = self.read_line()? else {
                debug!("input closed, leaving menu loop");
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                trace!(input = %line.trim(), "unrecognised menu input");
                self.write("Invalid choice. Please try again.\n")?;
                continue;
            };

            trace!(?choice, "menu choice");
            match choice {
                MenuChoice::ShowAvailableRooms => {
                    let text = render_availability(self.service.list_availability());
                    self.write(&text)?;
                }
                MenuChoice::RequestBooking => self.request_booking()?,
                MenuChoice::CheckStatus => self.check_status()?,
                MenuChoice::CancelBooking => self.cancel_booking()?,
                MenuChoice::ConfirmNext => {
                    let result = self.service.confirm_next();
                    self.write(&render_confirmation(&result))?;
                }
                MenuChoice::ListCustomers => {
                    let text = render_customers(self.service.list_customers());
                    self.write(&text)?;
                }
                MenuChoice::Exit => {
                    self.write(GOODBYE)?;
                    break;
                }
            }
        }

        match serde_json::to_string(&self.service.snapshot()) {
            Ok(state) => debug!(%state, "final hostel state"),
            Err(e) => debug!(error = %e, "could not serialize hostel state"),
        }

        Ok(())
    }

    fn request_booking(&mut self) -> Result<(), ConsoleError> {
        let Some(id) = self.prompt_id("\nEnter your ID: ")? else {
            return Ok(());
        };

        // Duplicates are caught before asking for the name
        if self.service.check_status(id).is_ok() {
            let result = self.service.request_booking(id, "");
            return self.write(&render_request("", &result));
        }

        self.write("Enter your name: ")?;
        let name = self.read_line()?.unwrap_or_default();
        let name = name.trim_end_matches(['\r', '\n']);

        let result = self.service.request_booking(id, name);
        self.write(&render_request(name, &result))
    }

    fn check_status(&mut self) -> Result<(), ConsoleError> {
        let Some(id) = self.prompt_id("\nEnter your ID to check booking status: ")? else {
            return Ok(());
        };

        let text = render_status(id, self.service.check_status(id));
        self.write(&text)
    }

    fn cancel_booking(&mut self) -> Result<(), ConsoleError> {
        let Some(id) = self.prompt_id("\nEnter your ID to cancel your booking: ")? else {
            return Ok(());
        };

        match self.service.cancel_booking(id) {
            Ok(_) => self.write("Your booking has been canceled.\n"),
            Err(_) => self.write(&format!("No booking found with ID {}.\n", id)),
        }
    }

    // None when the input is not a number or has run out
    fn prompt_id(&mut self, prompt: &str) -> Result<Option<i32>, ConsoleError> {
        self.write(prompt)?;

        let Some(line) = self.read_line()? else {
            return Ok(None);
        };

        match line.trim().parse::<i32>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                self.write("Invalid ID. Please enter a number.\n")?;
                Ok(None)
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}
