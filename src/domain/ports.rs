use uuid::Uuid;

use super::discount::{NewDiscount, VenueSnapshot};
use super::errors::DomainError;
use super::scenic::{NewScenic, Scenic, ScenicPage, ScenicStatus};
use super::ticket::{NewTicket, Ticket, TicketStatus};

pub trait ScenicRepository: Send + Sync + 'static {
    /// Fails with [`Rejection::ScenicAlreadyExists`] when the owner already
    /// has a venue.
    ///
    /// [`Rejection::ScenicAlreadyExists`]: super::errors::Rejection::ScenicAlreadyExists
    fn create(&self, owner_id: i64, scenic: NewScenic) -> Result<Uuid, DomainError>;
    fn update(&self, id: Uuid, scenic: NewScenic) -> Result<(), DomainError>;
    /// Removes the venue together with its tickets and discounts.
    fn delete(&self, id: Uuid) -> Result<(), DomainError>;
    fn get(&self, id: Uuid) -> Result<Scenic, DomainError>;
    fn find_by_owner(&self, owner_id: i64) -> Result<Option<Scenic>, DomainError>;
    fn list_by_status(
        &self,
        status: ScenicStatus,
        page: i64,
        limit: i64,
    ) -> Result<ScenicPage, DomainError>;
}

/// Writes against a venue that does not exist fail with
/// [`DomainError::NotFound`].
pub trait TicketRepository: Send + Sync + 'static {
    fn create(&self, scenic_id: Uuid, ticket: NewTicket) -> Result<Uuid, DomainError>;
    fn update(&self, scenic_id: Uuid, id: Uuid, ticket: NewTicket) -> Result<(), DomainError>;
    fn set_status(&self, scenic_id: Uuid, id: Uuid, status: TicketStatus) -> Result<(), DomainError>;
    fn delete(&self, scenic_id: Uuid, id: Uuid) -> Result<(), DomainError>;
    fn list_by_scenic(
        &self,
        scenic_id: Uuid,
        status: Option<TicketStatus>,
    ) -> Result<Vec<Ticket>, DomainError>;
}

/// Runs against the venue as read inside the write, and returns the record to
/// store. An error aborts the write.
pub type DiscountCheck<'a> = &'a dyn Fn(&VenueSnapshot) -> Result<NewDiscount, DomainError>;

/// Every operation fails with [`DomainError::NotFound`] for an unknown venue.
pub trait DiscountRepository: Send + Sync + 'static {
    fn snapshot(&self, scenic_id: Uuid) -> Result<VenueSnapshot, DomainError>;
    fn create_checked(&self, scenic_id: Uuid, check: DiscountCheck<'_>) -> Result<Uuid, DomainError>;
    fn update_checked(
        &self,
        scenic_id: Uuid,
        id: Uuid,
        check: DiscountCheck<'_>,
    ) -> Result<(), DomainError>;
    fn delete(&self, scenic_id: Uuid, id: Uuid) -> Result<(), DomainError>;
}
