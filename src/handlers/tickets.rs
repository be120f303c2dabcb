use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::ticket_service::TicketService;
use crate::domain::ports::TicketRepository;
use crate::domain::ticket::{Ticket, TicketInput, TicketStatus};
use crate::errors::AppError;

use super::{blocking_error, field_text, CreatedResponse, NumberOrText};

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Decimal price, as a number or a string such as "9.99".
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub price: Option<NumberOrText>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub stock: Option<NumberOrText>,
}

impl From<TicketRequest> for TicketInput {
    fn from(r: TicketRequest) -> Self {
        TicketInput {
            name: r.name,
            description: r.description,
            price: field_text(r.price),
            stock: field_text(r.stock),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatusValue {
    Active,
    Inactive,
}

impl From<TicketStatusValue> for TicketStatus {
    fn from(v: TicketStatusValue) -> Self {
        match v {
            TicketStatusValue::Active => TicketStatus::Active,
            TicketStatusValue::Inactive => TicketStatus::Inactive,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TicketStatusRequest {
    pub status: TicketStatusValue,
}

#[derive(Debug, Deserialize)]
pub struct ListTicketsParams {
    /// Only tickets in this status. All tickets when absent.
    pub status: Option<TicketStatusValue>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub id: Uuid,
    pub scenic_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub stock: i32,
    pub status: String,
}

impl From<Ticket> for TicketResponse {
    fn from(t: Ticket) -> Self {
        TicketResponse {
            id: t.id,
            scenic_id: t.scenic_id,
            name: t.name,
            description: t.description,
            price: t.price.to_string(),
            stock: t.stock,
            status: t.status.to_string(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /scenic/{scenic_id}/tickets
///
/// Every ticket of the venue, on sale or not, unless `status` narrows it.
#[utoipa::path(
    get,
    path = "/scenic/{scenic_id}/tickets",
    params(
        ("scenic_id" = Uuid, Path, description = "Venue UUID"),
        ("status" = Option<TicketStatusValue>, Query, description = "ACTIVE or INACTIVE"),
    ),
    responses(
        (status = 200, description = "Tickets of the venue", body = [TicketResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "tickets"
)]
pub async fn list_tickets<R: TicketRepository>(
    service: web::Data<TicketService<R>>,
    path: web::Path<Uuid>,
    query: web::Query<ListTicketsParams>,
) -> Result<HttpResponse, AppError> {
    let scenic_id = path.into_inner();
    let status = query.into_inner().status.map(TicketStatus::from);

    let tickets = web::block(move || service.list_tickets(scenic_id, status))
        .await
        .map_err(blocking_error)??;

    let body: Vec<TicketResponse> = tickets.into_iter().map(TicketResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /scenic/{scenic_id}/tickets
#[utoipa::path(
    post,
    path = "/scenic/{scenic_id}/tickets",
    params(("scenic_id" = Uuid, Path, description = "Venue UUID")),
    request_body = TicketRequest,
    responses(
        (status = 201, description = "Ticket created", body = CreatedResponse),
        (status = 404, description = "Venue not found"),
        (status = 422, description = "Form rejected"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "tickets"
)]
pub async fn create_ticket<R: TicketRepository>(
    service: web::Data<TicketService<R>>,
    path: web::Path<Uuid>,
    body: web::Json<TicketRequest>,
) -> Result<HttpResponse, AppError> {
    let scenic_id = path.into_inner();
    let input = TicketInput::from(body.into_inner());

    let id = web::block(move || service.create_ticket(scenic_id, input))
        .await
        .map_err(blocking_error)??;

    Ok(HttpResponse::Created().json(CreatedResponse { id }))
}

/// PUT /scenic/{scenic_id}/tickets/{id}
#[utoipa::path(
    put,
    path = "/scenic/{scenic_id}/tickets/{id}",
    params(
        ("scenic_id" = Uuid, Path, description = "Venue UUID"),
        ("id" = Uuid, Path, description = "Ticket UUID"),
    ),
    request_body = TicketRequest,
    responses(
        (status = 204, description = "Ticket updated"),
        (status = 404, description = "Ticket not found"),
        (status = 422, description = "Form rejected"),
    ),
    tag = "tickets"
)]
pub async fn update_ticket<R: TicketRepository>(
    service: web::Data<TicketService<R>>,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<TicketRequest>,
) -> Result<HttpResponse, AppError> {
    let (scenic_id, id) = path.into_inner();
    let input = TicketInput::from(body.into_inner());

    web::block(move || service.update_ticket(scenic_id, id, input))
        .await
        .map_err(blocking_error)??;

    Ok(HttpResponse::NoContent().finish())
}

/// PATCH /scenic/{scenic_id}/tickets/{id}/status
///
/// Put a ticket on sale or take it off sale.
#[utoipa::path(
    patch,
    path = "/scenic/{scenic_id}/tickets/{id}/status",
    params(
        ("scenic_id" = Uuid, Path, description = "Venue UUID"),
        ("id" = Uuid, Path, description = "Ticket UUID"),
    ),
    request_body = TicketStatusRequest,
    responses(
        (status = 204, description = "Status changed"),
        (status = 404, description = "Ticket not found"),
    ),
    tag = "tickets"
)]
pub async fn set_ticket_status<R: TicketRepository>(
    service: web::Data<TicketService<R>>,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<TicketStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let (scenic_id, id) = path.into_inner();
    let status = TicketStatus::from(body.status);

    web::block(move || service.set_ticket_status(scenic_id, id, status))
        .await
        .map_err(blocking_error)??;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /scenic/{scenic_id}/tickets/{id}
#[utoipa::path(
    delete,
    path = "/scenic/{scenic_id}/tickets/{id}",
    params(
        ("scenic_id" = Uuid, Path, description = "Venue UUID"),
        ("id" = Uuid, Path, description = "Ticket UUID"),
    ),
    responses(
        (status = 204, description = "Ticket deleted"),
        (status = 404, description = "Ticket not found"),
    ),
    tag = "tickets"
)]
pub async fn delete_ticket<R: TicketRepository>(
    service: web::Data<TicketService<R>>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, AppError> {
    let (scenic_id, id) = path.into_inner();

    web::block(move || service.delete_ticket(scenic_id, id))
        .await
        .map_err(blocking_error)??;

    Ok(HttpResponse::NoContent().finish())
}
