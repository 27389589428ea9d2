use modlist_core::CatalogEntry;
use modlist_lib::CatalogOverrides;
use serde::Deserialize;
use serde_json::Value;
use tokio::time::Duration;

use crate::error::CatalogError;
use crate::links;
use crate::types::ApiMod;

pub const DEFAULT_API_BASE: &str = "https://mods.vintagestory.at/api/mod/";
pub const DEFAULT_PAGE_BASE: &str = "https://mods.vintagestory.at/show/mod/";
pub const DEFAULT_DOWNLOAD_BASE: &str = "https://moddbcdn.vintagestory.at/";

/// Bound on each catalog request, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// The three hosts the pipeline builds URLs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEndpoints {
    /// Prefix for `GET {api_base}{modid}`; ends with `/`
    pub api_base: String,
    /// Prefix for the public mod page, followed by the asset id
    pub page_base: String,
    /// Public CDN host that artifact paths are rewritten onto
    pub download_base: String,
}

impl Default for CatalogEndpoints {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_base: DEFAULT_PAGE_BASE.to_string(),
            download_base: DEFAULT_DOWNLOAD_BASE.to_string(),
        }
    }
}

impl CatalogEndpoints {
    /// Replace the endpoints named in `overrides`, keeping the rest.
    pub fn with_overrides(mut self, overrides: &CatalogOverrides) -> Self {
        if let Some(ref api) = overrides.api_base {
            self.api_base = api.clone();
        }
        if let Some(ref page) = overrides.page_base {
            self.page_base = page.clone();
        }
        if let Some(ref dl) = overrides.download_base {
            self.download_base = dl.clone();
        }
        self
    }
}

/// Result of asking the catalog about one mod id.
#[derive(Debug)]
pub enum CatalogLookup {
    /// No mod id to ask about; no request was made
    Skipped,
    Found(CatalogEntry),
    Failed(CatalogError),
}

/// HTTP client for the Vintage Story ModDB API.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ModDbClient {
    http: reqwest::Client,
    endpoints: CatalogEndpoints,
}

impl ModDbClient {
    pub fn new(endpoints: CatalogEndpoints) -> Result<Self, CatalogError> {
        Self::with_timeout(endpoints, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(endpoints: CatalogEndpoints, timeout: Duration) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("modlist/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::Transport)?;
        Ok(Self { http, endpoints })
    }

    pub fn endpoints(&self) -> &CatalogEndpoints {
        &self.endpoints
    }

    /// Look up a mod id. An empty id is skipped without a request.
    pub async fn lookup(&self, mod_id: &str) -> CatalogLookup {
        if mod_id.is_empty() {
            return CatalogLookup::Skipped;
        }
        match self.fetch(mod_id).await {
            Ok(entry) => CatalogLookup::Found(entry),
            Err(e) => CatalogLookup::Failed(e),
        }
    }

    /// One `GET` against the catalog, no retries.
    pub async fn fetch(&self, mod_id: &str) -> Result<CatalogEntry, CatalogError> {
        let url = links::lookup_url(&self.endpoints.api_base, mod_id);
        log::debug!("GET {}", url);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(CatalogError::from_request)?;

        let status = resp.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let text = resp.text().await.map_err(CatalogError::from_request)?;
        parse_catalog_body(mod_id, &text)
    }
}

/// Interpret a catalog response body.
///
/// A missing, `null` or empty `mod` object means the id is unknown to the
/// catalog. A `mod` object that lacks required fields, or a body that is
/// not a JSON object at all, is a shape error.
pub fn parse_catalog_body(mod_id: &str, body: &str) -> Result<CatalogEntry, CatalogError> {
    let data: Value = serde_json::from_str(body)
        .map_err(|e| CatalogError::Shape(format!("invalid JSON: {e}")))?;
    let Value::Object(ref root) = data else {
        return Err(CatalogError::Shape("response is not a JSON object".into()));
    };

    match root.get("mod") {
        None | Some(Value::Null) => Err(CatalogError::NotFound(mod_id.to_string())),
        Some(Value::Object(m)) if m.is_empty() => Err(CatalogError::NotFound(mod_id.to_string())),
        Some(m) => ApiMod::deserialize(m)
            .map(CatalogEntry::from)
            .map_err(|e| CatalogError::Shape(e.to_string())),
    }
}
