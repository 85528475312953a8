//! Query gateway over the hosted PostgREST backend.

mod client;
mod error;

pub use client::{Filter, PostgrestClient};
pub use error::{GatewayError, GatewayResult};
