//! # Inventory Client
//!
//! The `InventoryClient` seam and its HTTP implementation.
//!
//! ## Why a Trait?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     The Client Seam                                     │
//! │                                                                         │
//! │  CartSession ───► Arc<dyn InventoryClient> ───┬─► HttpInventoryClient  │
//! │                                               │   (production, reqwest)│
//! │                                               │                         │
//! │                                               └─► ScriptedInventory    │
//! │                                                   (tests, in-memory)   │
//! │                                                                         │
//! │  The session never knows which one it is talking to. Tests can         │
//! │  script stock counts and failures without a network in sight.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! The backing service speaks plain REST/JSON:
//! - `GET {base}/products/{id}` -> `{ "id": 1, "title": "...", "price": 139.9, "image": "..." }`
//! - `GET {base}/stock/{id}` -> `{ "id": 1, "amount": 3 }`
//!
//! Prices arrive as decimal numbers and are converted to integer cents at
//! this boundary; nothing past this crate ever touches a float price.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::InventoryConfig;
use crate::error::InventoryResult;
use shoes_core::{Product, Stock};

// =============================================================================
// InventoryClient Trait
// =============================================================================

/// Typed, fallible lookups against the remote inventory service.
///
/// Both lookups are keyed by the integer product identifier. Transport
/// and encoding are this crate's concern; callers only see domain types.
#[async_trait]
pub trait InventoryClient: Send + Sync {
    /// Fetches catalog metadata for a product.
    async fn fetch_product(&self, product_id: u64) -> InventoryResult<Product>;

    /// Fetches the current stock count for a product.
    async fn fetch_stock(&self, product_id: u64) -> InventoryResult<Stock>;
}

// =============================================================================
// Wire DTOs
// =============================================================================

/// Product payload as the service sends it (price is a decimal number).
#[derive(Debug, Deserialize)]
struct ProductDto {
    id: u64,
    title: String,
    price: f64,
    image: String,
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Product {
            id: dto.id,
            title: dto.title,
            // convert to integer cents at the boundary
            price_cents: (dto.price * 100.0).round() as i64,
            image: dto.image,
        }
    }
}

/// Stock payload as the service sends it.
#[derive(Debug, Deserialize)]
struct StockDto {
    id: u64,
    amount: i64,
}

impl From<StockDto> for Stock {
    fn from(dto: StockDto) -> Self {
        Stock {
            id: dto.id,
            amount: dto.amount,
        }
    }
}

// =============================================================================
// HttpInventoryClient
// =============================================================================

/// HTTP implementation of [`InventoryClient`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpInventoryClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpInventoryClient {
    /// Creates a new client from configuration.
    pub fn new(config: &InventoryConfig) -> InventoryResult<Self> {
        // Url::join resolves relative to the last path segment, so the
        // base must end with a slash for "products/1" to land under it
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(HttpInventoryClient { client, base_url })
    }

    /// Builds the endpoint URL for a relative path.
    fn endpoint(&self, path: &str) -> InventoryResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Executes a GET request and decodes the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> InventoryResult<T> {
        let url = self.endpoint(path)?;
        debug!(%url, "Inventory lookup");

        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl InventoryClient for HttpInventoryClient {
    async fn fetch_product(&self, product_id: u64) -> InventoryResult<Product> {
        let dto: ProductDto = self.get_json(&format!("products/{}", product_id)).await?;
        Ok(dto.into())
    }

    async fn fetch_stock(&self, product_id: u64) -> InventoryResult<Stock> {
        let dto: StockDto = self.get_json(&format!("stock/{}", product_id)).await?;
        Ok(dto.into())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
