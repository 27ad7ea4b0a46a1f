//! Trait abstraction for the lookup service to enable mocking in tests

use super::client::{LookupError, ViaCepClient};
use crate::state::LookupOutcome;
use async_trait::async_trait;

/// Resolves postal codes to addresses
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostalLookup: Send + Sync {
    /// Look up an 8-digit postal code. Failures are folded into the outcome.
    async fn lookup(&self, postal_code: &str) -> LookupOutcome;
}

#[async_trait]
impl PostalLookup for ViaCepClient {
    async fn lookup(&self, postal_code: &str) -> LookupOutcome {
        match self.fetch(postal_code).await {
            Ok(address) => LookupOutcome::Found(address),
            Err(LookupError::NotFound) => LookupOutcome::NotFound,
            Err(err) => LookupOutcome::TransportError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Address;
    use std::time::Duration;

    #[test]
    fn test_mock_lookup_returns_configured_outcome() {
        let mut mock = MockPostalLookup::new();
        mock.expect_lookup()
            .withf(|code| code == "01001000")
            .times(1)
            .returning(|_| LookupOutcome::Found(Address::new("Praça da Sé", "Sé", "São Paulo", "SP")));

        let outcome = tokio_test::block_on(mock.lookup("01001000"));
        assert_eq!(
            outcome,
            LookupOutcome::Found(Address::new("Praça da Sé", "Sé", "São Paulo", "SP"))
        );
    }

    #[tokio::test]
    async fn test_client_maps_transport_failures() {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ViaCepClient::new(format!("http://{addr}"), Duration::from_secs(1)).unwrap();
        assert!(matches!(
            client.lookup("01001000").await,
            LookupOutcome::TransportError(_)
        ));
    }
}
