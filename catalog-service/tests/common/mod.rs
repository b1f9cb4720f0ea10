use std::sync::Arc;

use async_trait::async_trait;
use auth::SessionIssuer;
use auth::TokenCodec;
use catalog_service::domain::account::service::AccountService;
use catalog_service::domain::product::service::ProductService;
use catalog_service::domain::provider::ports::CountryCodeVerifier;
use catalog_service::domain::provider::service::ProviderService;
use catalog_service::inbound::http::router::create_router;
use catalog_service::outbound::repositories::memory::InMemoryAccountRepository;
use catalog_service::outbound::repositories::memory::InMemoryProductRepository;
use catalog_service::outbound::repositories::memory::InMemoryProviderRepository;
use serde_json::json;

pub const TEST_SECRET: &str = "test-secret-key-for-token-signing-at-least-32-bytes";

/// Country verifier stub with a fixed answer; the real adapter calls an
/// external service the tests must not depend on.
pub struct StaticCountryCodes {
    valid: bool,
}

#[async_trait]
impl CountryCodeVerifier for StaticCountryCodes {
    async fn verify(&self, _code: &str) -> bool {
        self.valid
    }
}

/// Test application that spawns a real server on in-memory adapters
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application with every country code accepted.
    pub async fn spawn() -> Self {
        Self::spawn_with_countries(true).await
    }

    /// Spawn the application with a fixed country-code verdict.
    pub async fn spawn_with_countries(valid: bool) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let issuer = Arc::new(SessionIssuer::new(
            TokenCodec::new(TEST_SECRET).expect("Failed to build codec"),
        ));

        let accounts = Arc::new(InMemoryAccountRepository::new());
        let providers = Arc::new(InMemoryProviderRepository::new());
        let products = Arc::new(InMemoryProductRepository::new(Arc::clone(&providers)));
        let countries = Arc::new(StaticCountryCodes { valid });

        let account_service = Arc::new(AccountService::new(accounts, issuer));
        let provider_service = Arc::new(ProviderService::new(providers.clone(), countries));
        let product_service = Arc::new(ProductService::new(products, providers));

        let router = create_router(account_service, provider_service, product_service);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PATCH request with Bearer token
    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .patch(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register an account and return the full response body.
    pub async fn register(&self, email: &str, password: &str) -> serde_json::Value {
        let response = self
            .post("/v1/register")
            .json(&json!({
                "name": "Test User",
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.json().await.expect("Failed to parse response")
    }

    /// Register an account and return a fresh access token for it.
    pub async fn access_token(&self, email: &str) -> String {
        let body = self.register(email, "Abacates3825.").await;
        body["data"]["tokens"]["accessToken"]["token"]
            .as_str()
            .expect("Missing access token")
            .to_string()
    }
}
