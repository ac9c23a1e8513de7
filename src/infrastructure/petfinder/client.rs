//! Petfinder v2 implementation of the animal catalog.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use super::dto::{AnimalDetailResponse, AnimalsPage, TokenResponse};
use crate::config::CatalogConfig;
use crate::domain::entities::{AccessToken, AnimalRecord, SearchCriteria};
use crate::domain::repositories::AnimalCatalog;
use crate::error::AppError;

/// HTTP client for the Petfinder catalog.
///
/// Holds no token state: every operation performs its own client-credentials
/// exchange. Page requests within one search are sequential and share a token.
pub struct PetfinderClient {
    http: Client,
    config: CatalogConfig,
}

impl PetfinderClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Uses a preconfigured `reqwest` client (timeouts, proxies, TLS).
    pub fn with_client(http: Client, config: CatalogConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path.trim_start_matches('/'))
    }

    /// Requests one search page and returns its body.
    async fn fetch_page(
        &self,
        token: &AccessToken,
        criteria: &SearchCriteria,
        page: u64,
    ) -> Result<AnimalsPage, AppError> {
        let response = self
            .http
            .get(self.endpoint("animals"))
            .bearer_auth(token.as_str())
            .query(&criteria.query_pairs())
            .query(&[
                ("status", "adoptable".to_string()),
                ("limit", self.config.page_size.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?;

        tracing::debug!(page, "Search page response status: {}", response.status());

        let body = json_or_status(response, |status| AppError::CatalogQuery { status }).await?;
        AnimalsPage::parse(body)
    }
}

/// Reads a JSON body from a success response, or maps the status to an error.
async fn json_or_status(
    response: Response,
    on_failure: impl FnOnce(u16) -> AppError,
) -> Result<Value, AppError> {
    let status = response.status();
    if !status.is_success() {
        tracing::warn!("Catalog request failed with status {}", status);
        return Err(on_failure(status.as_u16()));
    }

    Ok(response.json::<Value>().await?)
}

#[async_trait]
impl AnimalCatalog for PetfinderClient {
    async fn acquire_access_token(&self) -> Result<AccessToken, AppError> {
        let response = self
            .http
            .post(self.endpoint("oauth2/token"))
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.config.api_key.as_str()),
                ("client_secret", self.config.api_secret.as_str()),
            ])
            .send()
            .await?;

        tracing::info!("Token response status: {}", response.status());

        let body = json_or_status(response, |status| AppError::Authentication { status }).await?;
        let token: TokenResponse =
            serde_json::from_value(body).map_err(|_| AppError::malformed("access_token"))?;

        let access_token = token
            .access_token
            .ok_or_else(|| AppError::malformed("access_token"))?;

        tracing::info!(
            token_type = token.token_type.as_deref().unwrap_or("Bearer"),
            expires_in = token.expires_in,
            "Access token successfully generated"
        );

        Ok(AccessToken::new(access_token))
    }

    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<AnimalRecord>, AppError> {
        tracing::info!(
            species = %criteria.species,
            size = %criteria.size,
            good_with_children = criteria.good_with_children,
            good_with_dogs = criteria.good_with_dogs,
            good_with_cats = criteria.good_with_cats,
            house_trained = criteria.house_trained,
            special_needs = criteria.special_needs,
            "Searching animal catalog"
        );

        let token = self.acquire_access_token().await?;

        let first = self.fetch_page(&token, criteria, 1).await?;
        // The first page's totals drive the whole walk; later pages are not re-checked.
        let page_count = first
            .pagination
            .as_ref()
            .ok_or_else(|| AppError::malformed("pagination"))?
            .page_count()?;

        let mut animals = first.into_animals()?;

        for page in 2..=page_count {
            let next = self.fetch_page(&token, criteria, page).await?;
            animals.extend(next.into_animals()?);
        }

        tracing::info!(
            pages = page_count,
            animals = animals.len(),
            "Catalog search complete"
        );

        Ok(animals)
    }

    async fn fetch_detail(&self, pet_id: i64) -> Result<AnimalRecord, AppError> {
        let token = self.acquire_access_token().await?;

        let response = self
            .http
            .get(self.endpoint(&format!("animals/{pet_id}")))
            .bearer_auth(token.as_str())
            .send()
            .await?;

        tracing::debug!(pet_id, "Detail response status: {}", response.status());

        let body = json_or_status(response, |status| AppError::CatalogQuery { status }).await?;
        let detail: AnimalDetailResponse =
            serde_json::from_value(body).map_err(|_| AppError::malformed("animal"))?;

        detail.animal.ok_or_else(|| AppError::missing_field("animal"))
    }
}
