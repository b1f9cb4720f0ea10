use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::provider::ports::CountryCodeVerifier;

const BASE_URL: &str = "https://restcountries.com/v3.1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Country code check backed by the REST Countries service.
///
/// `GET {base}/alpha/{code}`: a 2xx answer means the code exists. Any
/// other answer, and any transport failure, counts as a rejection; the
/// cause only shows up in the server logs.
pub struct RestCountriesClient {
    http: Client,
    base_url: String,
}

impl RestCountriesClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_base_url(BASE_URL.to_string())
    }

    /// Point the client at a different host (tests use a local stub).
    pub fn with_base_url(base_url: String) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { http, base_url })
    }
}

#[async_trait]
impl CountryCodeVerifier for RestCountriesClient {
    async fn verify(&self, code: &str) -> bool {
        let url = format!("{}/alpha/{}", self.base_url, code);

        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::warn!(
                    code,
                    status = response.status().as_u16(),
                    "Country code rejected by reference service"
                );
                false
            }
            Err(e) => {
                tracing::warn!(code, error = %e, "Country code verification failed");
                false
            }
        }
    }
}
