use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::domain::discount::{DiscountInput, DiscountView, TicketOffer, VenueSnapshot};
use crate::domain::errors::DomainError;
use crate::domain::ports::DiscountRepository;
use crate::domain::ticket::TicketStatus;
use crate::domain::validator::{derive_status, discounted_price, ticket_names, validate};

pub struct DiscountService<R> {
    repo: R,
}

impl<R: DiscountRepository> DiscountService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_discount(
        &self,
        scenic_id: Uuid,
        input: DiscountInput,
    ) -> Result<Uuid, DomainError> {
        let result = self.repo.create_checked(scenic_id, &|venue: &VenueSnapshot| {
            validate(&input, &venue.discounts, &venue.tickets)
        });
        match &result {
            Ok(id) => log::info!("created discount {} for scenic {}", id, scenic_id),
            Err(e) => log::warn!("discount for scenic {} not created: {}", scenic_id, e),
        }
        result
    }

    /// Replace discount `id` in place. The stored version of `id` is left out
    /// of the overlap check so an edit never conflicts with itself.
    pub fn update_discount(
        &self,
        scenic_id: Uuid,
        id: Uuid,
        input: DiscountInput,
    ) -> Result<(), DomainError> {
        let result = self.repo.update_checked(scenic_id, id, &|venue: &VenueSnapshot| {
            if !venue.discounts.iter().any(|d| d.id == id) {
                return Err(DomainError::NotFound);
            }
            let others: Vec<_> = venue
                .discounts
                .iter()
                .filter(|d| d.id != id)
                .cloned()
                .collect();
            validate(&input, &others, &venue.tickets)
        });
        match &result {
            Ok(()) => log::info!("updated discount {} for scenic {}", id, scenic_id),
            Err(e) => log::warn!("discount {} not updated: {}", id, e),
        }
        result
    }

    pub fn delete_discount(&self, scenic_id: Uuid, id: Uuid) -> Result<(), DomainError> {
        self.repo.delete(scenic_id, id)?;
        log::info!("deleted discount {} for scenic {}", id, scenic_id);
        Ok(())
    }

    /// Discounts of a venue with their status at `now` and the names of the
    /// tickets they cover.
    pub fn list_discounts(
        &self,
        scenic_id: Uuid,
        now: NaiveDateTime,
    ) -> Result<Vec<DiscountView>, DomainError> {
        let venue = self.repo.snapshot(scenic_id)?;
        venue
            .discounts
            .iter()
            .map(|d| {
                Ok(DiscountView {
                    status: derive_status(now, d)?,
                    ticket_names: ticket_names(&d.ticket_ids, &venue.tickets),
                    discount: d.clone(),
                })
            })
            .collect()
    }

    /// What a buyer sees: the venue's active tickets and, where a discount is
    /// running at `now`, the reduced price.
    pub fn list_offers(
        &self,
        scenic_id: Uuid,
        now: NaiveDateTime,
    ) -> Result<Vec<TicketOffer>, DomainError> {
        let venue = self.repo.snapshot(scenic_id)?;
        venue
            .tickets
            .iter()
            .filter(|t| t.status == TicketStatus::Active)
            .map(|t| {
                Ok(TicketOffer {
                    discounted_price: discounted_price(t, &venue.discounts, now)?,
                    ticket: t.clone(),
                })
            })
            .collect()
    }
}
