//! Application layer: the product service and its wire DTOs.

pub mod dto;
pub mod product_service;

pub use product_service::ProductService;
