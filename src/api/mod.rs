// api/mod.rs - HTTP access to the product endpoints
//
// Structure:
// - client.rs: typed client for the write and read endpoints
// - abort.rs: abort handle/token pair for in-flight requests
// - error.rs: client error taxonomy

pub mod abort;
pub mod client;
pub mod error;

pub use abort::{pair, AbortHandle, AbortToken};
pub use client::{ApiClient, LIST_LIMIT, LIST_SKIP, READ_ENDPOINT, WRITE_ENDPOINT};
pub use error::ApiError;
