use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use uuid::Uuid;

use super::datetime::parse_wall_clock;
use super::errors::DomainError;
use super::ticket::Ticket;

/// A stored discount. `start_time` and `end_time` keep the combined
/// `YYYY-MM-DD HH:MM` form they are persisted in.
#[derive(Debug, Clone)]
pub struct Discount {
    pub id: Uuid,
    pub scenic_id: Uuid,
    pub title: String,
    pub discount_value: BigDecimal,
    pub start_time: String,
    pub end_time: String,
    pub ticket_ids: Vec<Uuid>,
}

impl Discount {
    pub fn window(&self) -> Result<(NaiveDateTime, NaiveDateTime), DomainError> {
        Ok((
            parse_wall_clock(&self.start_time)?,
            parse_wall_clock(&self.end_time)?,
        ))
    }

    pub fn applies_to(&self, ticket_id: Uuid) -> bool {
        self.ticket_ids.contains(&ticket_id)
    }
}

/// Discount form as submitted by a venue manager. Blank strings count as
/// missing; `discount_value` is the raw text entered.
#[derive(Debug, Clone, Default)]
pub struct DiscountInput {
    pub title: String,
    pub discount_value: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub ticket_ids: Vec<Uuid>,
}

/// A discount that passed validation, normalized for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDiscount {
    pub title: String,
    pub discount_value: BigDecimal,
    pub start_time: String,
    pub end_time: String,
    pub ticket_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountStatus {
    NotStarted,
    Active,
    Ended,
}

impl DiscountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountStatus::NotStarted => "not_started",
            DiscountStatus::Active => "active",
            DiscountStatus::Ended => "ended",
        }
    }
}

/// Everything the validator needs about one venue, read together.
#[derive(Debug, Clone, Default)]
pub struct VenueSnapshot {
    pub tickets: Vec<Ticket>,
    pub discounts: Vec<Discount>,
}

#[derive(Debug, Clone)]
pub struct DiscountView {
    pub discount: Discount,
    pub status: DiscountStatus,
    pub ticket_names: String,
}

#[derive(Debug, Clone)]
pub struct TicketOffer {
    pub ticket: Ticket,
    pub discounted_price: Option<BigDecimal>,
}
