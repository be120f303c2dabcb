pub mod discount_service;
pub mod scenic_service;
pub mod ticket_service;
