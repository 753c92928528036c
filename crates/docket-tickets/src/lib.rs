pub mod container;
pub mod session;
pub mod ticket;

pub use container::{
    ContainerKind, TicketContainer, TicketPriorityQueue, TicketQueue, TicketStack,
};
pub use session::WorkSession;
pub use ticket::{Priority, Status, TicketError, TroubleTicket, parse_ticket_line, read_tickets};
