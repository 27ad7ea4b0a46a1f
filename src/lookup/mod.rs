//! Postal code lookup service client

mod client;
mod traits;

pub use client::{ViaCepClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use traits::PostalLookup;

#[cfg(test)]
pub use traits::MockPostalLookup;
