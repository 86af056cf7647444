//! Item resource domain.
//!
//! # Data Flow
//! ```text
//! ItemIn (deserialized body, fields loosely typed)
//!     → validation.rs (type + range checks, all violations collected)
//!     → ValidItem
//!     → catalog.rs (business rules, id allocation via counter.rs)
//!     → ItemOut
//! ```

pub mod catalog;
pub mod counter;
pub mod types;
pub mod validation;

pub use catalog::{ItemCatalog, ItemError};
pub use counter::IdCounter;
pub use types::{ItemIn, ItemOut, SumIn, SumRequest, SumResponse, ValidItem};
pub use validation::FieldError;
