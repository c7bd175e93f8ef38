//! Data models for the Shopware Admin API.
//!
//! - [`primitives`] - Core types like `ProductId` and `BaseUrl`
//! - [`product`] - Product listing, patch and update result models

pub mod primitives;
pub mod product;

// Re-export commonly used types
pub use primitives::*;
pub use product::*;
