//! Gateway for upstream servers that already speak the wire shape,
//! e.g. another shelfrig instance's `/api/products/search`.

use async_trait::async_trait;
use tracing::debug;

use super::{CatalogGateway, CatalogItem, GatewayError, USER_AGENT};

pub struct HttpGateway {
    client: reqwest::Client,
    url: String,
}

impl HttpGateway {
    /// `url` is the full search endpoint; the query is sent as `?q=`.
    pub fn new(url: impl Into<String>) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogGateway for HttpGateway {
    async fn search(&self, query: &str) -> Result<Vec<CatalogItem>, GatewayError> {
        debug!(url = %self.url, query, "catalog search");
        let response = self
            .client
            .get(&self.url)
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        super::parse_items(&body)
    }

    fn name(&self) -> &str {
        "http"
    }
}
