use std::cmp::Ordering;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

const DEFAULT_DESCRIPTION: &str = "**No description provided**";

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    #[error("Unknown priority: {0:?}")]
    UnknownPriority(String),
    #[error("Line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: Box<TicketError>,
    },
    #[error("Blank ticket line")]
    BlankLine,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    None,
    Low,
    #[default]
    Normal,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 5] = [
        Priority::None,
        Priority::Low,
        Priority::Normal,
        Priority::High,
        Priority::Critical,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Priority::None => "None",
            Priority::Low => "Low",
            Priority::Normal => "Normal",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    /// 1-based position in a selection menu (`1` = None, `5` = Critical)
    pub fn from_menu_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Priority {
    type Err = TicketError;

    /// Accepts a name in any case or a menu number
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(number) = s.parse::<usize>() {
            return Self::from_menu_number(number)
                .ok_or_else(|| TicketError::UnknownPriority(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|priority| priority.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TicketError::UnknownPriority(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    New,
    Open,
    InWork,
    Resolved,
    Verified,
    Closed,
    Rejected,
    Hold,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::New => "New",
            Status::Open => "Open",
            Status::InWork => "In Work",
            Status::Resolved => "Resolved",
            Status::Verified => "Verified",
            Status::Closed => "Closed",
            Status::Rejected => "Rejected",
            Status::Hold => "Hold",
        })
    }
}

/// A unit of support work.
///
/// Tickets order and compare by [`Priority`] alone, so two distinct tickets
/// of equal priority are `==`. Use [`TroubleTicket::number`] for identity.
#[derive(Debug, Clone)]
pub struct TroubleTicket {
    number: u64,
    description: String,
    resolution: String,
    priority: Priority,
    status: Status,
}

impl TroubleTicket {
    pub fn new(description: impl Into<String>, priority: Priority) -> Self {
        Self {
            number: NEXT_TICKET.fetch_add(1, AtomicOrdering::Relaxed),
            description: description.into(),
            resolution: String::new(),
            priority,
            status: Status::default(),
        }
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn resolution(&self) -> &str {
        &self.resolution
    }

    pub fn set_resolution(&mut self, resolution: impl Into<String>) {
        self.resolution = resolution.into();
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

impl Default for TroubleTicket {
    fn default() -> Self {
        Self::new(DEFAULT_DESCRIPTION, Priority::default())
    }
}

impl PartialEq for TroubleTicket {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for TroubleTicket {}

impl PartialOrd for TroubleTicket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TroubleTicket {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

impl fmt::Display for TroubleTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ID={}, Priority={}, Status={}",
            self.number, self.priority, self.status
        )?;
        writeln!(f, "Description:")?;
        writeln!(f, "{}", self.description)?;
        if !self.resolution.is_empty() {
            writeln!(f, "Resolution:")?;
            writeln!(f, "{}", self.resolution)?;
        }
        Ok(())
    }
}

/// Parse `<priority> <description>`; a bare priority gets the default description
pub fn parse_ticket_line(line: &str) -> Result<TroubleTicket, TicketError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(TicketError::BlankLine);
    }
    let (priority, description) = match line.split_once(char::is_whitespace) {
        Some((priority, description)) => (priority, description.trim()),
        None => (line, ""),
    };
    let priority: Priority = priority.parse()?;
    let description = if description.is_empty() {
        DEFAULT_DESCRIPTION
    } else {
        description
    };
    Ok(TroubleTicket::new(description, priority))
}

/// Parse one ticket per line, skipping blank lines and `#` comments
pub fn read_tickets<R: BufRead>(reader: R) -> Result<Vec<TroubleTicket>, TicketError> {
    let mut tickets = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let ticket = parse_ticket_line(trimmed).map_err(|source| TicketError::InvalidLine {
            line: index + 1,
            source: Box::new(source),
        })?;
        tickets.push(ticket);
    }
    Ok(tickets)
}
