use chrono::Utc;
use diesel::prelude::*;
use diesel::sql_types::Text;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::discount::{Discount, VenueSnapshot};
use crate::domain::errors::DomainError;
use crate::domain::ports::{DiscountCheck, DiscountRepository};
use crate::schema::discounts;

use super::models::{DiscountChangeset, DiscountRow, NewDiscountRow};
use super::scenic_repo::scenic_exists;
use super::ticket_repo::load_tickets;

pub struct DieselDiscountRepository {
    pool: DbPool,
}

impl DieselDiscountRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Serialize writers of one venue until the end of the current transaction.
/// Postgres cannot express the overlap rule as a constraint over the ticket
/// arrays, so check-then-write has to happen under this lock.
fn lock_venue(conn: &mut PgConnection, scenic_id: Uuid) -> Result<(), DomainError> {
    diesel::sql_query("SELECT pg_advisory_xact_lock(hashtext($1))")
        .bind::<Text, _>(scenic_id.to_string())
        .execute(conn)?;
    Ok(())
}

fn load_snapshot(conn: &mut PgConnection, scenic_id: Uuid) -> Result<VenueSnapshot, DomainError> {
    if !scenic_exists(conn, scenic_id)? {
        return Err(DomainError::NotFound);
    }
    let tickets = load_tickets(conn, scenic_id, None)?;
    let discounts = discounts::table
        .filter(discounts::scenic_id.eq(scenic_id))
        .select(DiscountRow::as_select())
        .order(discounts::created_at.asc())
        .load::<DiscountRow>(conn)?
        .into_iter()
        .map(Discount::from)
        .collect();

    Ok(VenueSnapshot { tickets, discounts })
}

impl DiscountRepository for DieselDiscountRepository {
    fn snapshot(&self, scenic_id: Uuid) -> Result<VenueSnapshot, DomainError> {
        let mut conn = self.pool.get()?;
        conn.transaction::<_, DomainError, _>(|conn| load_snapshot(conn, scenic_id))
    }

    fn create_checked(&self, scenic_id: Uuid, check: DiscountCheck<'_>) -> Result<Uuid, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            lock_venue(conn, scenic_id)?;
            let venue = load_snapshot(conn, scenic_id)?;
            let new = check(&venue)?;

            let id = Uuid::new_v4();
            diesel::insert_into(discounts::table)
                .values(&NewDiscountRow {
                    id,
                    scenic_id,
                    title: new.title,
                    discount_value: new.discount_value,
                    start_time: new.start_time,
                    end_time: new.end_time,
                    ticket_ids: new.ticket_ids,
                })
                .execute(conn)?;

            Ok(id)
        })
    }

    fn update_checked(
        &self,
        scenic_id: Uuid,
        id: Uuid,
        check: DiscountCheck<'_>,
    ) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            lock_venue(conn, scenic_id)?;
            let venue = load_snapshot(conn, scenic_id)?;
            let new = check(&venue)?;

            let affected = diesel::update(
                discounts::table
                    .filter(discounts::id.eq(id))
                    .filter(discounts::scenic_id.eq(scenic_id)),
            )
            .set(&DiscountChangeset {
                title: new.title,
                discount_value: new.discount_value,
                start_time: new.start_time,
                end_time: new.end_time,
                ticket_ids: new.ticket_ids,
                updated_at: Utc::now(),
            })
            .execute(conn)?;

            if affected == 0 {
                return Err(DomainError::NotFound);
            }
            Ok(())
        })
    }

    fn delete(&self, scenic_id: Uuid, id: Uuid) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let affected = diesel::delete(
            discounts::table
                .filter(discounts::id.eq(id))
                .filter(discounts::scenic_id.eq(scenic_id)),
        )
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }
}
