use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::TicketRepository;
use crate::domain::ticket::{NewTicket, Ticket, TicketStatus};
use crate::schema::tickets;

use super::models::{NewTicketRow, TicketChangeset, TicketRow};

pub struct DieselTicketRepository {
    pool: DbPool,
}

impl DieselTicketRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn found(affected: usize) -> Result<(), DomainError> {
    if affected == 0 {
        Err(DomainError::NotFound)
    } else {
        Ok(())
    }
}

impl TicketRepository for DieselTicketRepository {
    fn create(&self, scenic_id: Uuid, ticket: NewTicket) -> Result<Uuid, DomainError> {
        let mut conn = self.pool.get()?;

        let id = Uuid::new_v4();
        diesel::insert_into(tickets::table)
            .values(&NewTicketRow {
                id,
                scenic_id,
                name: ticket.name,
                description: ticket.description,
                price: ticket.price,
                stock: ticket.stock,
                status: ticket.status.to_string(),
            })
            .execute(&mut conn)?;

        Ok(id)
    }

    fn update(&self, scenic_id: Uuid, id: Uuid, ticket: NewTicket) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let affected = diesel::update(
            tickets::table
                .filter(tickets::id.eq(id))
                .filter(tickets::scenic_id.eq(scenic_id)),
        )
        .set(&TicketChangeset {
            name: ticket.name,
            description: ticket.description,
            price: ticket.price,
            stock: ticket.stock,
            status: ticket.status.to_string(),
            updated_at: Utc::now(),
        })
        .execute(&mut conn)?;

        found(affected)
    }

    fn set_status(&self, scenic_id: Uuid, id: Uuid, status: TicketStatus) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let affected = diesel::update(
            tickets::table
                .filter(tickets::id.eq(id))
                .filter(tickets::scenic_id.eq(scenic_id)),
        )
        .set((
            tickets::status.eq(status.as_str()),
            tickets::updated_at.eq(Utc::now()),
        ))
        .execute(&mut conn)?;

        found(affected)
    }

    fn delete(&self, scenic_id: Uuid, id: Uuid) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let affected = diesel::delete(
            tickets::table
                .filter(tickets::id.eq(id))
                .filter(tickets::scenic_id.eq(scenic_id)),
        )
        .execute(&mut conn)?;

        found(affected)
    }

    fn list_by_scenic(
        &self,
        scenic_id: Uuid,
        status: Option<TicketStatus>,
    ) -> Result<Vec<Ticket>, DomainError> {
        let mut conn = self.pool.get()?;
        load_tickets(&mut conn, scenic_id, status)
    }
}

pub(crate) fn load_tickets(
    conn: &mut PgConnection,
    scenic_id: Uuid,
    status: Option<TicketStatus>,
) -> Result<Vec<Ticket>, DomainError> {
    let mut query = tickets::table
        .filter(tickets::scenic_id.eq(scenic_id))
        .select(TicketRow::as_select())
        .order(tickets::created_at.asc())
        .into_boxed();
    if let Some(status) = status {
        query = query.filter(tickets::status.eq(status.as_str()));
    }

    query
        .load::<TicketRow>(conn)?
        .into_iter()
        .map(Ticket::try_from)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use uuid::Uuid;

    use super::DieselTicketRepository;
    use crate::domain::errors::DomainError;
    use crate::domain::ports::TicketRepository;
    use crate::domain::ticket::{NewTicket, TicketStatus};
    use crate::infrastructure::test_db::{seed_venue, setup_db};

    fn make_ticket(name: &str, price: &str) -> NewTicket {
        NewTicket {
            name: name.to_string(),
            description: None,
            price: BigDecimal::from_str(price).expect("valid decimal"),
            stock: 10,
            status: TicketStatus::Active,
        }
    }

    #[tokio::test]
    async fn create_and_list_roundtrip() {
        let (_container, pool) = setup_db().await;
        let scenic_id = seed_venue(&pool);
        let elsewhere = seed_venue(&pool);
        let repo = DieselTicketRepository::new(pool);

        let id = repo
            .create(scenic_id, make_ticket("Adult", "20.00"))
            .expect("create failed");
        repo.create(elsewhere, make_ticket("Other venue", "5.00"))
            .expect("create failed");

        let tickets = repo.list_by_scenic(scenic_id, None).expect("list failed");
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].id, id);
        assert_eq!(tickets[0].name, "Adult");
        assert_eq!(tickets[0].price, BigDecimal::from(20_i64));
        assert_eq!(tickets[0].status, TicketStatus::Active);
    }

    #[tokio::test]
    async fn status_filter_hides_inactive_tickets() {
        let (_container, pool) = setup_db().await;
        let scenic_id = seed_venue(&pool);
        let repo = DieselTicketRepository::new(pool);

        let adult = repo.create(scenic_id, make_ticket("Adult", "20")).unwrap();
        repo.create(scenic_id, make_ticket("Child", "10")).unwrap();
        repo.set_status(scenic_id, adult, TicketStatus::Inactive)
            .expect("status update failed");

        let active = repo
            .list_by_scenic(scenic_id, Some(TicketStatus::Active))
            .unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Child");
        assert_eq!(repo.list_by_scenic(scenic_id, None).unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_and_delete_are_scoped_to_the_venue() {
        let (_container, pool) = setup_db().await;
        let scenic_id = seed_venue(&pool);
        let repo = DieselTicketRepository::new(pool);
        let id = repo.create(scenic_id, make_ticket("Adult", "20")).unwrap();

        let stranger = Uuid::new_v4();
        assert!(matches!(
            repo.update(stranger, id, make_ticket("Hijacked", "1")),
            Err(DomainError::NotFound)
        ));
        assert!(matches!(repo.delete(stranger, id), Err(DomainError::NotFound)));

        repo.update(scenic_id, id, make_ticket("Adult (peak)", "25"))
            .expect("update failed");
        assert_eq!(
            repo.list_by_scenic(scenic_id, None).unwrap()[0].name,
            "Adult (peak)"
        );

        repo.delete(scenic_id, id).expect("delete failed");
        assert!(repo.list_by_scenic(scenic_id, None).unwrap().is_empty());
    }

    #[tokio::test]
    async fn ticket_for_unknown_venue_is_not_found() {
        let (_container, pool) = setup_db().await;
        let repo = DieselTicketRepository::new(pool);

        assert!(matches!(
            repo.create(Uuid::new_v4(), make_ticket("Adult", "20")),
            Err(DomainError::NotFound)
        ));
    }
}
