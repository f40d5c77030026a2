//! Category document accessor
//!
//! Every operation performs its own fresh GET. Nothing is cached between
//! calls, and no state is held beyond the transport and the base URL.

use crate::entry::{Entry, EntryId, SearchField};
use crate::error::{Error, Result};
use crate::transport::{HttpTransport, Transport};
use tracing::{debug, info, warn};

/// Data directory of the published `@mdkva/tasbihkit` package on jsDelivr
pub const DEFAULT_BASE_URL: &str = "https://cdn.jsdelivr.net/npm/@mdkva/tasbihkit/data";

/// Read-through accessor over the remote category documents
#[derive(Debug, Clone)]
pub struct CategoryStore<T = HttpTransport> {
    transport: T,
    base_url: String,
}

impl CategoryStore<HttpTransport> {
    /// Accessor over the public CDN using a reqwest transport
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new()?))
    }
}

impl<T: Transport> CategoryStore<T> {
    /// Accessor over the public CDN using the given transport
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the accessor at another data directory (mirror, local server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Location of a category document. The category is substituted verbatim.
    pub fn category_url(&self, category: &str) -> String {
        format!("{}/{}.json", self.base_url, category)
    }

    /// Fetch the full entry list of a category, in source order
    pub async fn load_all(&self, category: &str) -> Result<Vec<Entry>> {
        if category.is_empty() {
            return Err(Error::InvalidArgument("Category is required.".to_string()));
        }

        let url = self.category_url(category);
        debug!(category = %category, url = %url, "Fetching category document");

        let response = self.transport.get(&url).await?;

        if !response.is_ok() {
            warn!(category = %category, status = response.status, "Category file not available");
            return Err(Error::NotFound(format!(
                "Category file '{}.json' not found.",
                category
            )));
        }

        let entries: Vec<Entry> = response.json()?;

        info!(category = %category, entries = entries.len(), "Category document loaded");

        Ok(entries)
    }

    /// Find the first entry whose id equals `id` rendered as a trimmed string
    pub async fn search_by_id(&self, category: &str, id: impl Into<EntryId>) -> Result<Entry> {
        let id = id.into();
        if !id.is_present() {
            return Err(Error::InvalidArgument("Tasbih ID is required.".to_string()));
        }

        let entries = self.load_all(category).await?;
        let key = id.normalized();

        entries
            .into_iter()
            .find(|entry| entry.id() == Some(key.as_str()))
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "Tasbih with ID '{}' not found in category '{}'.",
                    id, category
                ))
            })
    }

    /// Entries whose label contains `keyword`, ignoring case
    ///
    /// An empty keyword returns an empty list without touching the network.
    pub async fn search_by_label(&self, category: &str, keyword: &str) -> Result<Vec<Entry>> {
        self.search_text(category, SearchField::Label, keyword).await
    }

    /// Entries whose translation contains `translation`, ignoring case
    ///
    /// An empty term returns an empty list without touching the network.
    pub async fn search_by_translation(
        &self,
        category: &str,
        translation: &str,
    ) -> Result<Vec<Entry>> {
        self.search_text(category, SearchField::Translation, translation)
            .await
    }

    async fn search_text(
        &self,
        category: &str,
        field: SearchField,
        term: &str,
    ) -> Result<Vec<Entry>> {
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let entries = self.load_all(category).await?;
        let term = term.to_lowercase();

        let matches: Vec<Entry> = entries
            .into_iter()
            .filter(|entry| field.matches(entry, &term))
            .collect();

        debug!(
            category = %category,
            field = field.as_str(),
            term = %term,
            matches = matches.len(),
            "Substring search complete"
        );

        Ok(matches)
    }
}
