//! HTTP surface for the Duhigure household tracker.
//!
//! # Responsibility
//! - Map REST resources onto `duhigure_core` services.
//! - Translate service errors into status codes with structured bodies.
//!
//! # Invariants
//! - Handlers never touch SQL directly.
//! - Database work runs off the async executor, one request at a time.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::router;
pub use server::serve;
pub use state::AppState;
