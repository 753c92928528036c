use crate::container::TicketContainer;
use crate::ticket::{Priority, TroubleTicket};

/// Drives tickets through a container, logging each insert and removal
#[derive(Debug, Default)]
pub struct WorkSession<C> {
    container: C,
}

impl<C: TicketContainer> WorkSession<C> {
    pub fn new(container: C) -> Self {
        Self { container }
    }

    /// Open a new ticket and return its number
    pub fn create(&mut self, description: impl Into<String>, priority: Priority) -> u64 {
        self.submit(TroubleTicket::new(description, priority))
    }

    pub fn submit(&mut self, ticket: TroubleTicket) -> u64 {
        let number = ticket.number();
        log::info!(
            "Inserted ticket {number} ({}): {}",
            ticket.priority(),
            ticket.description()
        );
        self.container.push(ticket);
        number
    }

    /// Remove the next ticket, or `None` when there is nothing left to work
    pub fn work(&mut self) -> Option<TroubleTicket> {
        let ticket = self.container.pop()?;
        log::info!(
            "Removed ticket {} ({}): {}",
            ticket.number(),
            ticket.priority(),
            ticket.description()
        );
        Some(ticket)
    }

    /// Work every remaining ticket in container order
    pub fn drain(&mut self) -> Vec<TroubleTicket> {
        std::iter::from_fn(|| self.work()).collect()
    }

    pub fn peek(&self) -> Option<&TroubleTicket> {
        self.container.peek()
    }

    pub fn pending(&self) -> usize {
        self.container.len()
    }

    pub fn into_inner(self) -> C {
        self.container
    }
}
