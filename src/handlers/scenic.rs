use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::scenic_service::{ScenicService, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::domain::ports::ScenicRepository;
use crate::domain::scenic::{Scenic, ScenicInput, ScenicStatus};
use crate::errors::AppError;

use super::{blocking_error, CreatedResponse};

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScenicStatusValue {
    #[default]
    Open,
    Closed,
}

impl From<ScenicStatusValue> for ScenicStatus {
    fn from(v: ScenicStatusValue) -> Self {
        match v {
            ScenicStatusValue::Open => ScenicStatus::Open,
            ScenicStatusValue::Closed => ScenicStatus::Closed,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScenicRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact_phone: Option<String>,
    /// Image URLs, at most five.
    #[serde(default)]
    pub images: Vec<String>,
    /// Defaults to OPEN.
    #[serde(default)]
    pub status: ScenicStatusValue,
}

impl From<ScenicRequest> for ScenicInput {
    fn from(r: ScenicRequest) -> Self {
        ScenicInput {
            name: r.name,
            description: r.description,
            address: r.address,
            contact_phone: r.contact_phone,
            images: r.images,
            status: r.status.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScenicResponse {
    pub id: Uuid,
    pub owner_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub contact_phone: Option<String>,
    pub images: Vec<String>,
    pub status: String,
}

impl From<Scenic> for ScenicResponse {
    fn from(s: Scenic) -> Self {
        ScenicResponse {
            id: s.id,
            owner_id: s.owner_id,
            name: s.name,
            description: s.description,
            address: s.address,
            contact_phone: s.contact_phone,
            images: s.images,
            status: s.status.to_string(),
        }
    }
}

// ── Pagination ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListScenicParams {
    /// Page number (1-based). Defaults to 1.
    #[serde(default = "default_page")]
    pub page: i64,
    /// Number of venues per page. Defaults to 10, maximum 100.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListScenicResponse {
    pub items: Vec<ScenicResponse>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /scenic
///
/// Open venues, oldest first. Closed venues are never listed.
#[utoipa::path(
    get,
    path = "/scenic",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-based, default 1)"),
        ("limit" = Option<i64>, Query, description = "Venues per page (default 10, max 100)"),
    ),
    responses(
        (status = 200, description = "Paginated list of open venues", body = ListScenicResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "scenic"
)]
pub async fn list_scenic<R: ScenicRepository>(
    service: web::Data<ScenicService<R>>,
    query: web::Query<ListScenicParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let page = params.page.max(1);
    let limit = params.limit.clamp(1, MAX_PAGE_SIZE);

    let result = web::block(move || service.list_open(page, limit))
        .await
        .map_err(blocking_error)??;

    Ok(HttpResponse::Ok().json(ListScenicResponse {
        items: result.items.into_iter().map(ScenicResponse::from).collect(),
        total: result.total,
        page,
        limit,
    }))
}

/// GET /scenic/{scenic_id}
#[utoipa::path(
    get,
    path = "/scenic/{scenic_id}",
    params(("scenic_id" = Uuid, Path, description = "Venue UUID")),
    responses(
        (status = 200, description = "The venue", body = ScenicResponse),
        (status = 404, description = "Venue not found"),
    ),
    tag = "scenic"
)]
pub async fn get_scenic<R: ScenicRepository>(
    service: web::Data<ScenicService<R>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let scenic = web::block(move || service.get_scenic(id))
        .await
        .map_err(blocking_error)??;

    Ok(HttpResponse::Ok().json(ScenicResponse::from(scenic)))
}

/// PUT /scenic/{scenic_id}
#[utoipa::path(
    put,
    path = "/scenic/{scenic_id}",
    params(("scenic_id" = Uuid, Path, description = "Venue UUID")),
    request_body = ScenicRequest,
    responses(
        (status = 204, description = "Venue updated"),
        (status = 404, description = "Venue not found"),
        (status = 422, description = "Form rejected"),
    ),
    tag = "scenic"
)]
pub async fn update_scenic<R: ScenicRepository>(
    service: web::Data<ScenicService<R>>,
    path: web::Path<Uuid>,
    body: web::Json<ScenicRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let input = ScenicInput::from(body.into_inner());

    web::block(move || service.update_scenic(id, input))
        .await
        .map_err(blocking_error)??;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /scenic/{scenic_id}
///
/// Deletes the venue with all of its tickets and discounts.
#[utoipa::path(
    delete,
    path = "/scenic/{scenic_id}",
    params(("scenic_id" = Uuid, Path, description = "Venue UUID")),
    responses(
        (status = 204, description = "Venue deleted"),
        (status = 404, description = "Venue not found"),
    ),
    tag = "scenic"
)]
pub async fn delete_scenic<R: ScenicRepository>(
    service: web::Data<ScenicService<R>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    web::block(move || service.delete_scenic(id))
        .await
        .map_err(blocking_error)??;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /owners/{owner_id}/scenic
///
/// The venue an owner manages, if any.
#[utoipa::path(
    get,
    path = "/owners/{owner_id}/scenic",
    params(("owner_id" = i64, Path, description = "Owner user id")),
    responses(
        (status = 200, description = "The owner's venue", body = ScenicResponse),
        (status = 404, description = "Owner has no venue"),
    ),
    tag = "scenic"
)]
pub async fn get_owner_scenic<R: ScenicRepository>(
    service: web::Data<ScenicService<R>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let owner_id = path.into_inner();

    let scenic = web::block(move || service.scenic_of_owner(owner_id))
        .await
        .map_err(blocking_error)??;

    Ok(HttpResponse::Ok().json(ScenicResponse::from(scenic)))
}

/// POST /owners/{owner_id}/scenic
///
/// Create the owner's venue. An owner manages at most one.
#[utoipa::path(
    post,
    path = "/owners/{owner_id}/scenic",
    params(("owner_id" = i64, Path, description = "Owner user id")),
    request_body = ScenicRequest,
    responses(
        (status = 201, description = "Venue created", body = CreatedResponse),
        (status = 422, description = "Form rejected or owner already has a venue"),
    ),
    tag = "scenic"
)]
pub async fn create_owner_scenic<R: ScenicRepository>(
    service: web::Data<ScenicService<R>>,
    path: web::Path<i64>,
    body: web::Json<ScenicRequest>,
) -> Result<HttpResponse, AppError> {
    let owner_id = path.into_inner();
    let input = ScenicInput::from(body.into_inner());

    let id = web::block(move || service.create_scenic(owner_id, input))
        .await
        .map_err(blocking_error)??;

    Ok(HttpResponse::Created().json(CreatedResponse { id }))
}
