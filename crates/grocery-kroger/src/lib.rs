pub mod classify;
pub mod client;
pub mod error;
pub mod types;
pub mod validate;

pub use classify::classify_response;
pub use client::KrogerClient;
pub use error::KrogerError;
pub use types::{
    Envelope, Location, LocationsResponse, Meta, Pagination, Product, ProductsResponse,
};
