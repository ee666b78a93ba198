//! Core domain: the product entity, the code grammar, the repository
//! interface and the error taxonomy.

pub mod code;
pub mod error;
pub mod product;
pub mod repositories;

pub use error::ProductError;
pub use product::Product;
pub use repositories::ProductRepository;
