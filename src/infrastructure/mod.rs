//! Infrastructure: configuration, logging, database access and QR rendering.

pub mod config;
pub mod database_connection;
pub mod logging;
pub mod product_repository;
pub mod qr;
pub mod seeder;
