use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::discount::Discount;
use crate::domain::errors::DomainError;
use crate::domain::scenic::Scenic;
use crate::domain::ticket::Ticket;
use crate::schema::{discounts, scenic, tickets};

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = scenic)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ScenicRow {
    pub id: Uuid,
    pub owner_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub contact_phone: Option<String>,
    pub images: Vec<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ScenicRow> for Scenic {
    type Error = DomainError;

    fn try_from(row: ScenicRow) -> Result<Self, Self::Error> {
        Ok(Scenic {
            id: row.id,
            owner_id: row.owner_id,
            name: row.name,
            description: row.description,
            address: row.address,
            contact_phone: row.contact_phone,
            images: row.images,
            status: row.status.parse()?,
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = scenic)]
pub struct NewScenicRow {
    pub id: Uuid,
    pub owner_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub contact_phone: Option<String>,
    pub images: Vec<String>,
    pub status: String,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = scenic)]
#[diesel(treat_none_as_null = true)]
pub struct ScenicChangeset {
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub contact_phone: Option<String>,
    pub images: Vec<String>,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = tickets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TicketRow {
    pub id: Uuid,
    pub scenic_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = DomainError;

    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        Ok(Ticket {
            id: row.id,
            scenic_id: row.scenic_id,
            name: row.name,
            description: row.description,
            price: row.price,
            stock: row.stock,
            status: row.status.parse()?,
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = tickets)]
pub struct NewTicketRow {
    pub id: Uuid,
    pub scenic_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
    pub status: String,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = tickets)]
#[diesel(treat_none_as_null = true)]
pub struct TicketChangeset {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = discounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DiscountRow {
    pub id: Uuid,
    pub scenic_id: Uuid,
    pub title: String,
    pub discount_value: BigDecimal,
    pub start_time: String,
    pub end_time: String,
    pub ticket_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DiscountRow> for Discount {
    fn from(row: DiscountRow) -> Self {
        Discount {
            id: row.id,
            scenic_id: row.scenic_id,
            title: row.title,
            discount_value: row.discount_value,
            start_time: row.start_time,
            end_time: row.end_time,
            ticket_ids: row.ticket_ids,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = discounts)]
pub struct NewDiscountRow {
    pub id: Uuid,
    pub scenic_id: Uuid,
    pub title: String,
    pub discount_value: BigDecimal,
    pub start_time: String,
    pub end_time: String,
    pub ticket_ids: Vec<Uuid>,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = discounts)]
pub struct DiscountChangeset {
    pub title: String,
    pub discount_value: BigDecimal,
    pub start_time: String,
    pub end_time: String,
    pub ticket_ids: Vec<Uuid>,
    pub updated_at: DateTime<Utc>,
}
