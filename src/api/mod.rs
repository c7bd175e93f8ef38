//! API service modules for Shopware Admin endpoints.
//!
//! Each service provides methods for interacting with a specific
//! entity of the Admin API.

mod products;

pub use products::{ProductsQuery, ProductsService, DEFAULT_LIMIT, FIRST_PAGE};
