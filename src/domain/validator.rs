use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use uuid::Uuid;

use super::datetime::{combine, format_wall_clock};
use super::money::parse_amount;
use super::too_long;
use super::discount::{Discount, DiscountInput, DiscountStatus, NewDiscount};
use super::errors::{DomainError, Rejection};
use super::ticket::Ticket;

pub const UNSET_TICKETS: &str = "未设置";

/// Decide whether `candidate` may be saved for a venue.
///
/// `existing` must hold every stored discount of the venue except the one
/// being edited. Rules run in a fixed order and the first failure wins.
/// Malformed dates (in the candidate or in `existing`) are reported as
/// [`DomainError::MalformedDateTime`] rather than a rejection.
pub fn validate(
    candidate: &DiscountInput,
    existing: &[Discount],
    tickets: &[Ticket],
) -> Result<NewDiscount, DomainError> {
    if candidate.title.trim().is_empty() {
        return Err(Rejection::MissingTitle.into());
    }
    if too_long(&candidate.title) {
        return Err(Rejection::TitleTooLong.into());
    }

    let discount_value =
        parse_amount(&candidate.discount_value).ok_or(Rejection::InvalidDiscountValue)?;

    let required = [
        (&candidate.start_date, Rejection::MissingStartDate),
        (&candidate.start_time, Rejection::MissingStartTime),
        (&candidate.end_date, Rejection::MissingEndDate),
        (&candidate.end_time, Rejection::MissingEndTime),
    ];
    if let Some((_, rejection)) = required.iter().find(|(v, _)| v.trim().is_empty()) {
        return Err((*rejection).into());
    }

    let start = combine(&candidate.start_date, &candidate.start_time)?;
    let end = combine(&candidate.end_date, &candidate.end_time)?;
    if start >= end {
        return Err(Rejection::EndNotAfterStart.into());
    }

    if candidate.ticket_ids.is_empty() {
        return Err(Rejection::MissingTickets.into());
    }

    let min_price = tickets
        .iter()
        .filter(|t| candidate.ticket_ids.contains(&t.id))
        .map(|t| &t.price)
        .min();
    if let Some(min_price) = min_price {
        if discount_value > *min_price {
            return Err(Rejection::ExceedsTicketPrice.into());
        }
    }

    for other in existing {
        let (other_start, other_end) = other.window()?;
        if !overlaps((start, end), (other_start, other_end)) {
            continue;
        }
        if candidate.ticket_ids.iter().any(|id| other.applies_to(*id)) {
            log::debug!(
                "candidate {} .. {} conflicts with discount {}",
                start,
                end,
                other.id
            );
            return Err(Rejection::Conflict.into());
        }
    }

    Ok(NewDiscount {
        title: candidate.title.clone(),
        discount_value,
        start_time: format_wall_clock(&start),
        end_time: format_wall_clock(&end),
        ticket_ids: candidate.ticket_ids.clone(),
    })
}

/// Half-open overlap: a window ending exactly when another starts does not
/// overlap it.
fn overlaps(a: (NaiveDateTime, NaiveDateTime), b: (NaiveDateTime, NaiveDateTime)) -> bool {
    !(a.1 <= b.0 || a.0 >= b.1)
}

/// Status of `discount` at wall-clock `now`. Both bounds count as active.
pub fn derive_status(now: NaiveDateTime, discount: &Discount) -> Result<DiscountStatus, DomainError> {
    let (start, end) = discount.window()?;
    Ok(if now < start {
        DiscountStatus::NotStarted
    } else if now <= end {
        DiscountStatus::Active
    } else {
        DiscountStatus::Ended
    })
}

/// Price a buyer pays for `ticket` at `now`: the first active discount that
/// covers it is subtracted, never going below zero. `None` when no discount
/// applies.
pub fn discounted_price(
    ticket: &Ticket,
    discounts: &[Discount],
    now: NaiveDateTime,
) -> Result<Option<BigDecimal>, DomainError> {
    for discount in discounts.iter().filter(|d| d.applies_to(ticket.id)) {
        if derive_status(now, discount)? == DiscountStatus::Active {
            let price = &ticket.price - &discount.discount_value;
            return Ok(Some(price.max(BigDecimal::from(0_i64))));
        }
    }
    Ok(None)
}

/// Names of the selected tickets in ticket-list order, comma separated.
pub fn ticket_names(ticket_ids: &[Uuid], tickets: &[Ticket]) -> String {
    if ticket_ids.is_empty() {
        return UNSET_TICKETS.to_string();
    }
    tickets
        .iter()
        .filter(|t| ticket_ids.contains(&t.id))
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
