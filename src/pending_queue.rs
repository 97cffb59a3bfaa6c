use std::collections::VecDeque;

use crate::booking::Customer;

// FIFO of booking requests waiting for a room. Arrival order is preserved.
#[derive(Debug, Default, Clone)]
pub struct PendingQueue {
    requests: VecDeque<Customer>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, customer: Customer) {
        self.requests.push_back(customer);
    }

    pub fn pop_front(&mut self) -> Option<Customer> {
        self.requests.pop_front()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn contains(&self, id: i32) -> bool {
        self.requests.iter().any(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.requests.iter()
    }
}
