//! Containers that decide which ticket gets worked next.

use std::collections::{BinaryHeap, VecDeque};

use crate::ticket::TroubleTicket;

pub trait TicketContainer {
    fn push(&mut self, ticket: TroubleTicket);

    /// Remove the next ticket to work
    fn pop(&mut self) -> Option<TroubleTicket>;

    /// The ticket [`pop`](TicketContainer::pop) would return
    fn peek(&self) -> Option<&TroubleTicket>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: TicketContainer + ?Sized> TicketContainer for Box<C> {
    fn push(&mut self, ticket: TroubleTicket) {
        (**self).push(ticket)
    }

    fn pop(&mut self) -> Option<TroubleTicket> {
        (**self).pop()
    }

    fn peek(&self) -> Option<&TroubleTicket> {
        (**self).peek()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// First in, first out
#[derive(Debug, Default)]
pub struct TicketQueue {
    tickets: VecDeque<TroubleTicket>,
}

impl TicketContainer for TicketQueue {
    fn push(&mut self, ticket: TroubleTicket) {
        self.tickets.push_back(ticket);
    }

    fn pop(&mut self) -> Option<TroubleTicket> {
        self.tickets.pop_front()
    }

    fn peek(&self) -> Option<&TroubleTicket> {
        self.tickets.front()
    }

    fn len(&self) -> usize {
        self.tickets.len()
    }
}

/// Last in, first out
#[derive(Debug, Default)]
pub struct TicketStack {
    tickets: Vec<TroubleTicket>,
}

impl TicketContainer for TicketStack {
    fn push(&mut self, ticket: TroubleTicket) {
        self.tickets.push(ticket);
    }

    fn pop(&mut self) -> Option<TroubleTicket> {
        self.tickets.pop()
    }

    fn peek(&self) -> Option<&TroubleTicket> {
        self.tickets.last()
    }

    fn len(&self) -> usize {
        self.tickets.len()
    }
}

/// Highest priority first. Order among equal priorities is unspecified.
#[derive(Debug, Default)]
pub struct TicketPriorityQueue {
    tickets: BinaryHeap<TroubleTicket>,
}

impl TicketContainer for TicketPriorityQueue {
    fn push(&mut self, ticket: TroubleTicket) {
        self.tickets.push(ticket);
    }

    fn pop(&mut self) -> Option<TroubleTicket> {
        self.tickets.pop()
    }

    fn peek(&self) -> Option<&TroubleTicket> {
        self.tickets.peek()
    }

    fn len(&self) -> usize {
        self.tickets.len()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContainerKind {
    #[default]
    Fifo,
    Lifo,
    Priority,
}

impl ContainerKind {
    pub fn build(self) -> Box<dyn TicketContainer> {
        match self {
            ContainerKind::Fifo => Box::new(TicketQueue::default()),
            ContainerKind::Lifo => Box::new(TicketStack::default()),
            ContainerKind::Priority => Box::new(TicketPriorityQueue::default()),
        }
    }
}
