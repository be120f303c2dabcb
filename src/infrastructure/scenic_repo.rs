use chrono::Utc;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::{DomainError, Rejection};
use crate::domain::ports::ScenicRepository;
use crate::domain::scenic::{NewScenic, Scenic, ScenicPage, ScenicStatus};
use crate::schema::scenic;

use super::models::{NewScenicRow, ScenicChangeset, ScenicRow};

pub struct DieselScenicRepository {
    pool: DbPool,
}

impl DieselScenicRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Whether venue `id` exists, for callers already holding a connection.
pub(crate) fn scenic_exists(conn: &mut PgConnection, id: Uuid) -> Result<bool, DomainError> {
    let count: i64 = scenic::table
        .filter(scenic::id.eq(id))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

impl ScenicRepository for DieselScenicRepository {
    fn create(&self, owner_id: i64, new: NewScenic) -> Result<Uuid, DomainError> {
        let mut conn = self.pool.get()?;

        let id = Uuid::new_v4();
        let inserted = diesel::insert_into(scenic::table)
            .values(&NewScenicRow {
                id,
                owner_id,
                name: new.name,
                description: new.description,
                address: new.address,
                contact_phone: new.contact_phone,
                images: new.images,
                status: new.status.to_string(),
            })
            .execute(&mut conn);

        match inserted {
            Ok(_) => Ok(id),
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(Rejection::ScenicAlreadyExists.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn update(&self, id: Uuid, new: NewScenic) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let affected = diesel::update(scenic::table.find(id))
            .set(&ScenicChangeset {
                name: new.name,
                description: new.description,
                address: new.address,
                contact_phone: new.contact_phone,
                images: new.images,
                status: new.status.to_string(),
                updated_at: Utc::now(),
            })
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }

    fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let affected = diesel::delete(scenic::table.find(id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }

    fn get(&self, id: Uuid) -> Result<Scenic, DomainError> {
        let mut conn = self.pool.get()?;

        let row = scenic::table
            .find(id)
            .select(ScenicRow::as_select())
            .first::<ScenicRow>(&mut conn)
            .optional()?
            .ok_or(DomainError::NotFound)?;
        Scenic::try_from(row)
    }

    fn find_by_owner(&self, owner_id: i64) -> Result<Option<Scenic>, DomainError> {
        let mut conn = self.pool.get()?;

        scenic::table
            .filter(scenic::owner_id.eq(owner_id))
            .select(ScenicRow::as_select())
            .first::<ScenicRow>(&mut conn)
            .optional()?
            .map(Scenic::try_from)
            .transpose()
    }

    fn list_by_status(
        &self,
        status: ScenicStatus,
        page: i64,
        limit: i64,
    ) -> Result<ScenicPage, DomainError> {
        let mut conn = self.pool.get()?;
        let offset = (page - 1) * limit;

        let total: i64 = scenic::table
            .filter(scenic::status.eq(status.as_str()))
            .count()
            .get_result(&mut conn)?;

        let items = scenic::table
            .filter(scenic::status.eq(status.as_str()))
            .select(ScenicRow::as_select())
            .order((scenic::created_at.asc(), scenic::id.asc()))
            .limit(limit)
            .offset(offset)
            .load::<ScenicRow>(&mut conn)?
            .into_iter()
            .map(Scenic::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ScenicPage { items, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::test_db::setup_db;

    fn venue(name: &str) -> NewScenic {
        NewScenic {
            name: name.to_string(),
            description: Some("Lakeside gardens".to_string()),
            address: "1 Lakeside Road".to_string(),
            contact_phone: Some("13912345678".to_string()),
            images: vec!["https://img.example/1.jpg".to_string()],
            status: ScenicStatus::Open,
        }
    }

    #[tokio::test]
    async fn create_get_and_find_by_owner() {
        let (_container, pool) = setup_db().await;
        let repo = DieselScenicRepository::new(pool);

        let id = repo.create(42, venue("West Lake")).expect("create failed");

        let stored = repo.get(id).expect("get failed");
        assert_eq!(stored.name, "West Lake");
        assert_eq!(stored.owner_id, 42);
        assert_eq!(stored.images, vec!["https://img.example/1.jpg".to_string()]);
        assert_eq!(stored.status, ScenicStatus::Open);

        assert_eq!(repo.find_by_owner(42).unwrap().map(|s| s.id), Some(id));
        assert!(repo.find_by_owner(7).unwrap().is_none());
        assert!(matches!(repo.get(Uuid::new_v4()), Err(DomainError::NotFound)));
    }

    #[tokio::test]
    async fn second_venue_for_owner_is_rejected() {
        let (_container, pool) = setup_db().await;
        let repo = DieselScenicRepository::new(pool);

        repo.create(42, venue("West Lake")).unwrap();
        assert!(matches!(
            repo.create(42, venue("Lingyin Temple")),
            Err(DomainError::Rejected(Rejection::ScenicAlreadyExists))
        ));
    }

    #[tokio::test]
    async fn list_by_status_pages_open_venues() {
        let (_container, pool) = setup_db().await;
        let repo = DieselScenicRepository::new(pool);

        for owner in 0..5 {
            repo.create(owner, venue(&format!("Venue {}", owner))).unwrap();
        }
        let mut closed = venue("Closed");
        closed.status = ScenicStatus::Closed;
        repo.create(99, closed).unwrap();

        let page1 = repo.list_by_status(ScenicStatus::Open, 1, 3).unwrap();
        assert_eq!(page1.total, 5);
        assert_eq!(page1.items.len(), 3);

        let page2 = repo.list_by_status(ScenicStatus::Open, 2, 3).unwrap();
        assert_eq!(page2.total, 5);
        assert_eq!(page2.items.len(), 2);
        assert!(page2.items.iter().all(|s| s.status == ScenicStatus::Open));
    }

    #[tokio::test]
    async fn update_and_delete_unknown_venue_are_not_found() {
        let (_container, pool) = setup_db().await;
        let repo = DieselScenicRepository::new(pool);
        let id = repo.create(42, venue("West Lake")).unwrap();

        let mut edited = venue("West Lake (north gate)");
        edited.contact_phone = None;
        repo.update(id, edited).expect("update failed");
        let stored = repo.get(id).unwrap();
        assert_eq!(stored.name, "West Lake (north gate)");
        assert_eq!(stored.contact_phone, None);

        assert!(matches!(
            repo.update(Uuid::new_v4(), venue("Nowhere")),
            Err(DomainError::NotFound)
        ));
        repo.delete(id).expect("delete failed");
        assert!(matches!(repo.delete(id), Err(DomainError::NotFound)));
    }
}
