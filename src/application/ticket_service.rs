use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::ports::TicketRepository;
use crate::domain::ticket::{validate_ticket, Ticket, TicketInput, TicketStatus};

pub struct TicketService<R> {
    repo: R,
}

impl<R: TicketRepository> TicketService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_ticket(&self, scenic_id: Uuid, input: TicketInput) -> Result<Uuid, DomainError> {
        let ticket = validate_ticket(&input)?;
        let id = self.repo.create(scenic_id, ticket)?;
        log::info!("created ticket {} for scenic {}", id, scenic_id);
        Ok(id)
    }

    /// Editing a ticket puts it back on sale, like a fresh create.
    pub fn update_ticket(
        &self,
        scenic_id: Uuid,
        id: Uuid,
        input: TicketInput,
    ) -> Result<(), DomainError> {
        let ticket = validate_ticket(&input)?;
        self.repo.update(scenic_id, id, ticket)?;
        log::info!("updated ticket {} for scenic {}", id, scenic_id);
        Ok(())
    }

    pub fn set_ticket_status(
        &self,
        scenic_id: Uuid,
        id: Uuid,
        status: TicketStatus,
    ) -> Result<(), DomainError> {
        self.repo.set_status(scenic_id, id, status)?;
        log::info!("ticket {} is now {}", id, status);
        Ok(())
    }

    /// Discounts referencing the ticket are left as they are.
    pub fn delete_ticket(&self, scenic_id: Uuid, id: Uuid) -> Result<(), DomainError> {
        self.repo.delete(scenic_id, id)?;
        log::info!("deleted ticket {} for scenic {}", id, scenic_id);
        Ok(())
    }

    /// Tickets of a venue, optionally only those in `status`.
    pub fn list_tickets(
        &self,
        scenic_id: Uuid,
        status: Option<TicketStatus>,
    ) -> Result<Vec<Ticket>, DomainError> {
        self.repo.list_by_scenic(scenic_id, status)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use bigdecimal::BigDecimal;

    use super::*;
    use crate::domain::errors::Rejection;
    use crate::domain::ticket::NewTicket;

    #[derive(Default)]
    pub(crate) struct InMemoryTickets {
        pub venues: Mutex<HashSet<Uuid>>,
        pub tickets: Mutex<Vec<Ticket>>,
    }

    impl InMemoryTickets {
        pub fn for_venues(scenic_ids: &[Uuid]) -> Self {
            let repo = Self::default();
            repo.venues.lock().unwrap().extend(scenic_ids.iter().copied());
            repo
        }

        fn with_mut<T>(
            &self,
            scenic_id: Uuid,
            id: Uuid,
            f: impl FnOnce(&mut Ticket) -> T,
        ) -> Result<T, DomainError> {
            let mut tickets = self.tickets.lock().unwrap();
            tickets
                .iter_mut()
                .find(|t| t.id == id && t.scenic_id == scenic_id)
                .map(f)
                .ok_or(DomainError::NotFound)
        }
    }

    impl TicketRepository for InMemoryTickets {
        fn create(&self, scenic_id: Uuid, ticket: NewTicket) -> Result<Uuid, DomainError> {
            if !self.venues.lock().unwrap().contains(&scenic_id) {
                return Err(DomainError::NotFound);
            }
            let id = Uuid::new_v4();
            self.tickets.lock().unwrap().push(Ticket {
                id,
                scenic_id,
                name: ticket.name,
                description: ticket.description,
                price: ticket.price,
                stock: ticket.stock,
                status: ticket.status,
            });
            Ok(id)
        }

        fn update(&self, scenic_id: Uuid, id: Uuid, ticket: NewTicket) -> Result<(), DomainError> {
            self.with_mut(scenic_id, id, |t| {
                t.name = ticket.name;
                t.description = ticket.description;
                t.price = ticket.price;
                t.stock = ticket.stock;
                t.status = ticket.status;
            })
        }

        fn set_status(
            &self,
            scenic_id: Uuid,
            id: Uuid,
            status: TicketStatus,
        ) -> Result<(), DomainError> {
            self.with_mut(scenic_id, id, |t| t.status = status)
        }

        fn delete(&self, scenic_id: Uuid, id: Uuid) -> Result<(), DomainError> {
            let mut tickets = self.tickets.lock().unwrap();
            let before = tickets.len();
            tickets.retain(|t| !(t.id == id && t.scenic_id == scenic_id));
            if tickets.len() == before {
                return Err(DomainError::NotFound);
            }
            Ok(())
        }

        fn list_by_scenic(
            &self,
            scenic_id: Uuid,
            status: Option<TicketStatus>,
        ) -> Result<Vec<Ticket>, DomainError> {
            Ok(self
                .tickets
                .lock()
                .unwrap()
                .iter()
                .filter(|t| t.scenic_id == scenic_id)
                .filter(|t| status.map_or(true, |s| t.status == s))
                .cloned()
                .collect())
        }
    }

    fn form(name: &str, price: &str, stock: &str) -> TicketInput {
        TicketInput {
            name: name.to_string(),
            description: Some("Entry before 17:00".to_string()),
            price: price.to_string(),
            stock: stock.to_string(),
        }
    }

    #[test]
    fn create_and_list() {
        let (scenic_id, elsewhere) = (Uuid::new_v4(), Uuid::new_v4());
        let service = TicketService::new(InMemoryTickets::for_venues(&[scenic_id, elsewhere]));

        let id = service.create_ticket(scenic_id, form("Adult", "20", "50")).unwrap();
        service
            .create_ticket(elsewhere, form("Elsewhere", "5", "1"))
            .unwrap();

        let tickets = service.list_tickets(scenic_id, None).unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].id, id);
        assert_eq!(tickets[0].price, BigDecimal::from(20_i64));
        assert_eq!(tickets[0].status, TicketStatus::Active);
    }

    #[test]
    fn ticket_for_unknown_venue_is_not_found() {
        let service = TicketService::new(InMemoryTickets::default());
        assert!(matches!(
            service.create_ticket(Uuid::new_v4(), form("Adult", "20", "50")),
            Err(DomainError::NotFound)
        ));
    }

    #[test]
    fn listing_can_be_limited_to_one_status() {
        let scenic_id = Uuid::new_v4();
        let service = TicketService::new(InMemoryTickets::for_venues(&[scenic_id]));
        let adult = service.create_ticket(scenic_id, form("Adult", "20", "50")).unwrap();
        service.create_ticket(scenic_id, form("Child", "10", "50")).unwrap();
        service
            .set_ticket_status(scenic_id, adult, TicketStatus::Inactive)
            .unwrap();

        let on_sale = service
            .list_tickets(scenic_id, Some(TicketStatus::Active))
            .unwrap();
        assert_eq!(on_sale.len(), 1);
        assert_eq!(on_sale[0].name, "Child");
        assert_eq!(service.list_tickets(scenic_id, None).unwrap().len(), 2);
    }

    #[test]
    fn invalid_form_is_rejected_before_storage() {
        let scenic_id = Uuid::new_v4();
        let service = TicketService::new(InMemoryTickets::for_venues(&[scenic_id]));

        let result = service.create_ticket(scenic_id, form("Adult", "0", "50"));
        assert!(matches!(
            result,
            Err(DomainError::Rejected(Rejection::InvalidTicketPrice))
        ));
        assert!(service.list_tickets(scenic_id, None).unwrap().is_empty());
    }

    #[test]
    fn update_reactivates_ticket() {
        let scenic_id = Uuid::new_v4();
        let service = TicketService::new(InMemoryTickets::for_venues(&[scenic_id]));
        let id = service.create_ticket(scenic_id, form("Adult", "20", "50")).unwrap();

        service
            .set_ticket_status(scenic_id, id, TicketStatus::Inactive)
            .unwrap();
        service
            .update_ticket(scenic_id, id, form("Adult (peak)", "25", "40"))
            .unwrap();

        let ticket = &service.list_tickets(scenic_id, None).unwrap()[0];
        assert_eq!(ticket.name, "Adult (peak)");
        assert_eq!(ticket.stock, 40);
        assert_eq!(ticket.status, TicketStatus::Active);
    }

    #[test]
    fn tickets_of_another_venue_are_not_found() {
        let scenic_id = Uuid::new_v4();
        let service = TicketService::new(InMemoryTickets::for_venues(&[scenic_id]));
        let id = service.create_ticket(scenic_id, form("Adult", "20", "50")).unwrap();
        let stranger = Uuid::new_v4();

        assert!(matches!(
            service.set_ticket_status(stranger, id, TicketStatus::Inactive),
            Err(DomainError::NotFound)
        ));
        assert!(matches!(
            service.delete_ticket(stranger, id),
            Err(DomainError::NotFound)
        ));
    }

    #[test]
    fn delete_removes_ticket() {
        let scenic_id = Uuid::new_v4();
        let service = TicketService::new(InMemoryTickets::for_venues(&[scenic_id]));
        let id = service.create_ticket(scenic_id, form("Adult", "20", "50")).unwrap();

        service.delete_ticket(scenic_id, id).unwrap();
        assert!(service.list_tickets(scenic_id, None).unwrap().is_empty());
    }
}
