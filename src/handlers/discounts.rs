use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::discount_service::DiscountService;
use crate::domain::discount::{DiscountInput, DiscountView, TicketOffer};
use crate::domain::ports::DiscountRepository;
use crate::errors::AppError;

use super::{blocking_error, field_text, local_now, CreatedResponse, NumberOrText};

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Discount form. Dates are `YYYY-MM-DD`, times `HH:MM`, local wall clock.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscountRequest {
    #[serde(default)]
    pub title: String,
    /// Flat amount taken off each selected ticket, as a number or a string.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub discount_value: Option<NumberOrText>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub ticket_ids: Vec<Uuid>,
}

impl From<DiscountRequest> for DiscountInput {
    fn from(r: DiscountRequest) -> Self {
        DiscountInput {
            title: r.title,
            discount_value: field_text(r.discount_value),
            start_date: r.start_date,
            start_time: r.start_time,
            end_date: r.end_date,
            end_time: r.end_time,
            ticket_ids: r.ticket_ids,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscountResponse {
    pub id: Uuid,
    pub scenic_id: Uuid,
    pub title: String,
    pub discount_value: String,
    /// `YYYY-MM-DD HH:MM`
    pub start_time: String,
    /// `YYYY-MM-DD HH:MM`
    pub end_time: String,
    pub ticket_ids: Vec<Uuid>,
    /// One of `not_started`, `active`, `ended`.
    pub status: String,
    pub ticket_names: String,
}

impl From<DiscountView> for DiscountResponse {
    fn from(v: DiscountView) -> Self {
        DiscountResponse {
            id: v.discount.id,
            scenic_id: v.discount.scenic_id,
            title: v.discount.title,
            discount_value: v.discount.discount_value.to_string(),
            start_time: v.discount.start_time,
            end_time: v.discount.end_time,
            ticket_ids: v.discount.ticket_ids,
            status: v.status.as_str().to_string(),
            ticket_names: v.ticket_names,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferResponse {
    pub ticket_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub discounted_price: Option<String>,
    pub has_discount: bool,
}

impl From<TicketOffer> for OfferResponse {
    fn from(o: TicketOffer) -> Self {
        OfferResponse {
            ticket_id: o.ticket.id,
            name: o.ticket.name,
            description: o.ticket.description,
            price: o.ticket.price.to_string(),
            has_discount: o.discounted_price.is_some(),
            discounted_price: o.discounted_price.map(|p| p.to_string()),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /scenic/{scenic_id}/discounts
///
/// Discounts of the venue with their current status.
#[utoipa::path(
    get,
    path = "/scenic/{scenic_id}/discounts",
    params(("scenic_id" = Uuid, Path, description = "Venue UUID")),
    responses(
        (status = 200, description = "Discounts of the venue", body = [DiscountResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "discounts"
)]
pub async fn list_discounts<R: DiscountRepository>(
    service: web::Data<DiscountService<R>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let scenic_id = path.into_inner();
    let now = local_now();

    let views = web::block(move || service.list_discounts(scenic_id, now))
        .await
        .map_err(blocking_error)??;

    let body: Vec<DiscountResponse> = views.into_iter().map(DiscountResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /scenic/{scenic_id}/discounts
///
/// Validates the form against the venue's tickets and existing discounts and
/// stores it only if every rule passes.
#[utoipa::path(
    post,
    path = "/scenic/{scenic_id}/discounts",
    params(("scenic_id" = Uuid, Path, description = "Venue UUID")),
    request_body = DiscountRequest,
    responses(
        (status = 201, description = "Discount created", body = CreatedResponse),
        (status = 400, description = "Malformed date or time"),
        (status = 422, description = "Form rejected, see `code`"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "discounts"
)]
pub async fn create_discount<R: DiscountRepository>(
    service: web::Data<DiscountService<R>>,
    path: web::Path<Uuid>,
    body: web::Json<DiscountRequest>,
) -> Result<HttpResponse, AppError> {
    let scenic_id = path.into_inner();
    let input = DiscountInput::from(body.into_inner());

    let id = web::block(move || service.create_discount(scenic_id, input))
        .await
        .map_err(blocking_error)??;

    Ok(HttpResponse::Created().json(CreatedResponse { id }))
}

/// PUT /scenic/{scenic_id}/discounts/{id}
#[utoipa::path(
    put,
    path = "/scenic/{scenic_id}/discounts/{id}",
    params(
        ("scenic_id" = Uuid, Path, description = "Venue UUID"),
        ("id" = Uuid, Path, description = "Discount UUID"),
    ),
    request_body = DiscountRequest,
    responses(
        (status = 204, description = "Discount updated"),
        (status = 400, description = "Malformed date or time"),
        (status = 404, description = "Discount not found"),
        (status = 422, description = "Form rejected, see `code`"),
    ),
    tag = "discounts"
)]
pub async fn update_discount<R: DiscountRepository>(
    service: web::Data<DiscountService<R>>,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<DiscountRequest>,
) -> Result<HttpResponse, AppError> {
    let (scenic_id, id) = path.into_inner();
    let input = DiscountInput::from(body.into_inner());

    web::block(move || service.update_discount(scenic_id, id, input))
        .await
        .map_err(blocking_error)??;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /scenic/{scenic_id}/discounts/{id}
#[utoipa::path(
    delete,
    path = "/scenic/{scenic_id}/discounts/{id}",
    params(
        ("scenic_id" = Uuid, Path, description = "Venue UUID"),
        ("id" = Uuid, Path, description = "Discount UUID"),
    ),
    responses(
        (status = 204, description = "Discount deleted"),
        (status = 404, description = "Discount not found"),
    ),
    tag = "discounts"
)]
pub async fn delete_discount<R: DiscountRepository>(
    service: web::Data<DiscountService<R>>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, AppError> {
    let (scenic_id, id) = path.into_inner();

    web::block(move || service.delete_discount(scenic_id, id))
        .await
        .map_err(blocking_error)??;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /scenic/{scenic_id}/offers
///
/// Tickets on sale with the price after any discount running right now.
#[utoipa::path(
    get,
    path = "/scenic/{scenic_id}/offers",
    params(("scenic_id" = Uuid, Path, description = "Venue UUID")),
    responses(
        (status = 200, description = "Tickets on sale", body = [OfferResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "discounts"
)]
pub async fn list_offers<R: DiscountRepository>(
    service: web::Data<DiscountService<R>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let scenic_id = path.into_inner();
    let now = local_now();

    let offers = web::block(move || service.list_offers(scenic_id, now))
        .await
        .map_err(blocking_error)??;

    let body: Vec<OfferResponse> = offers.into_iter().map(OfferResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}
