pub mod discounts;
pub mod scenic;
pub mod tickets;

use actix_web::web;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

use crate::domain::ports::{DiscountRepository, ScenicRepository, TicketRepository};
use crate::errors::AppError;

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    pub id: Uuid,
}

/// A form field that may arrive as a JSON number or as the text typed into
/// the form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

impl NumberOrText {
    pub fn into_text(self) -> String {
        match self {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(s) => s,
        }
    }
}

pub(crate) fn field_text(field: Option<NumberOrText>) -> String {
    field.map(NumberOrText::into_text).unwrap_or_default()
}

/// Discount windows are local wall-clock times, so status is judged against
/// the server's local clock.
pub(crate) fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub(crate) fn blocking_error(e: actix_web::error::BlockingError) -> AppError {
    AppError::Internal(e.to_string())
}

/// Mount every venue route for the given repository implementations.
pub fn configure<S: ScenicRepository, T: TicketRepository, D: DiscountRepository>(
    cfg: &mut web::ServiceConfig,
) {
    cfg.route("/scenic", web::get().to(scenic::list_scenic::<S>))
        .route("/owners/{owner_id}/scenic", web::get().to(scenic::get_owner_scenic::<S>))
        .route(
            "/owners/{owner_id}/scenic",
            web::post().to(scenic::create_owner_scenic::<S>),
        );
    cfg.service(
        web::scope("/scenic/{scenic_id}")
            .route("", web::get().to(scenic::get_scenic::<S>))
            .route("", web::put().to(scenic::update_scenic::<S>))
            .route("", web::delete().to(scenic::delete_scenic::<S>))
            .route("/tickets", web::get().to(tickets::list_tickets::<T>))
            .route("/tickets", web::post().to(tickets::create_ticket::<T>))
            .route("/tickets/{id}", web::put().to(tickets::update_ticket::<T>))
            .route("/tickets/{id}", web::delete().to(tickets::delete_ticket::<T>))
            .route(
                "/tickets/{id}/status",
                web::patch().to(tickets::set_ticket_status::<T>),
            )
            .route("/discounts", web::get().to(discounts::list_discounts::<D>))
            .route("/discounts", web::post().to(discounts::create_discount::<D>))
            .route(
                "/discounts/{id}",
                web::put().to(discounts::update_discount::<D>),
            )
            .route(
                "/discounts/{id}",
                web::delete().to(discounts::delete_discount::<D>),
            )
            .route("/offers", web::get().to(discounts::list_offers::<D>)),
    );
}

#[derive(OpenApi)]
#[openapi(
    paths(
        scenic::list_scenic,
        scenic::get_scenic,
        scenic::update_scenic,
        scenic::delete_scenic,
        scenic::get_owner_scenic,
        scenic::create_owner_scenic,
        tickets::list_tickets,
        tickets::create_ticket,
        tickets::update_ticket,
        tickets::set_ticket_status,
        tickets::delete_ticket,
        discounts::list_discounts,
        discounts::create_discount,
        discounts::update_discount,
        discounts::delete_discount,
        discounts::list_offers,
    ),
    components(schemas(
        scenic::ScenicRequest,
        scenic::ScenicStatusValue,
        scenic::ScenicResponse,
        scenic::ListScenicResponse,
        tickets::TicketRequest,
        tickets::TicketStatusRequest,
        tickets::TicketStatusValue,
        tickets::TicketResponse,
        discounts::DiscountRequest,
        discounts::DiscountResponse,
        discounts::OfferResponse,
        CreatedResponse,
    )),
    tags(
        (name = "scenic", description = "Venues and their owners"),
        (name = "tickets", description = "Venue ticket management"),
        (name = "discounts", description = "Venue discounts and buyer offers"),
    )
)]
pub struct ApiDoc;
