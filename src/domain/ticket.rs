use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use uuid::Uuid;

use super::errors::{DomainError, Rejection};
use super::money::parse_amount;
use super::too_long;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Active,
    Inactive,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Active => "ACTIVE",
            TicketStatus::Inactive => "INACTIVE",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(TicketStatus::Active),
            "INACTIVE" => Ok(TicketStatus::Inactive),
            other => Err(DomainError::Internal(format!(
                "unknown ticket status '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: Uuid,
    pub scenic_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
    pub status: TicketStatus,
}

/// Ticket form as submitted by a venue manager; numeric fields are raw text.
#[derive(Debug, Clone, Default)]
pub struct TicketInput {
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub stock: String,
}

/// A validated ticket ready to be written. Saved tickets are always active.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
    pub status: TicketStatus,
}

pub fn validate_ticket(input: &TicketInput) -> Result<NewTicket, DomainError> {
    if input.name.trim().is_empty() {
        return Err(Rejection::MissingTicketName.into());
    }
    if too_long(&input.name) {
        return Err(Rejection::TicketNameTooLong.into());
    }

    let price = parse_amount(&input.price).ok_or(Rejection::InvalidTicketPrice)?;

    let stock = input
        .stock
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|s| *s >= 0)
        .ok_or(Rejection::InvalidStock)?;

    Ok(NewTicket {
        name: input.name.clone(),
        description: input
            .description
            .as_ref()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty()),
        price,
        stock,
        status: TicketStatus::Active,
    })
}
