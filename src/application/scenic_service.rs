use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::ports::ScenicRepository;
use crate::domain::scenic::{validate_scenic, Scenic, ScenicInput, ScenicPage, ScenicStatus};

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

pub struct ScenicService<R> {
    repo: R,
}

impl<R: ScenicRepository> ScenicService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_scenic(&self, owner_id: i64, input: ScenicInput) -> Result<Uuid, DomainError> {
        let scenic = validate_scenic(&input)?;
        let id = self.repo.create(owner_id, scenic)?;
        log::info!("created scenic {} for owner {}", id, owner_id);
        Ok(id)
    }

    pub fn update_scenic(&self, id: Uuid, input: ScenicInput) -> Result<(), DomainError> {
        let scenic = validate_scenic(&input)?;
        self.repo.update(id, scenic)?;
        log::info!("updated scenic {}", id);
        Ok(())
    }

    /// Tickets and discounts of the venue go with it.
    pub fn delete_scenic(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo.delete(id)?;
        log::info!("deleted scenic {} with its tickets and discounts", id);
        Ok(())
    }

    pub fn get_scenic(&self, id: Uuid) -> Result<Scenic, DomainError> {
        self.repo.get(id)
    }

    /// The venue managed by `owner_id`.
    pub fn scenic_of_owner(&self, owner_id: i64) -> Result<Scenic, DomainError> {
        self.repo
            .find_by_owner(owner_id)?
            .ok_or(DomainError::NotFound)
    }

    /// Open venues for buyers, oldest first. `page` is 1-based; out-of-range
    /// values are clamped.
    pub fn list_open(&self, page: i64, limit: i64) -> Result<ScenicPage, DomainError> {
        let page = page.max(1);
        let limit = limit.clamp(1, MAX_PAGE_SIZE);
        self.repo.list_by_status(ScenicStatus::Open, page, limit)
    }
}
