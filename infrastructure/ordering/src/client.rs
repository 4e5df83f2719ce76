use reqwest::Client;

/// Configuration for the ordering platform API
pub struct OrderingApiConfig {
    pub base_url: String,
}

impl OrderingApiConfig {
    /// Load API configuration from environment variables
    ///
    /// Environment variables:
    /// - ORDERING_API_BASE_URL: base URL of the platform backend
    ///   (default: "http://localhost:8080/api")
    pub fn from_env() -> Self {
        let base_url = std::env::var("ORDERING_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api".to_string());
        Self { base_url }
    }
}

/// Shared HTTP client for the ordering platform endpoints.
pub struct OrderingApiClient {
    pub client: Client,
    pub base_url: String,
}

impl OrderingApiClient {
    pub fn new(config: &OrderingApiConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the order-creation endpoint URL.
    pub fn orders_url(&self) -> String {
        format!("{}/orders", self.base_url)
    }

    /// Returns the points-debit endpoint URL.
    pub fn points_debit_url(&self) -> String {
        format!("{}/points/debit", self.base_url)
    }
}
