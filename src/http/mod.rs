//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign request ID)
//!     → extract.rs (decode path/query/body, rejections → ApiError)
//!     → handlers.rs (validation, business rules)
//!     → error.rs (ApiError → status + JSON body)
//!     → Send to client
//! ```

pub mod error;
pub mod extract;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
