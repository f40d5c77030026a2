//! # TasbihKit
//!
//! Read-through accessor for the tasbih category documents published with the
//! `@mdkva/tasbihkit` package on jsDelivr:
//! - Load a whole category (`general`, `day-and-night`, `post-prayer`, ...)
//! - Look up one entry by id
//! - Case-insensitive substring search over labels or translations
//!
//! ```no_run
//! # async fn demo() -> tasbihkit::Result<()> {
//! let kit = tasbihkit::TasbihKit::new()?;
//! let morning = kit.search_by_label("day-and-night", "morning").await?;
//! let first = kit.search_by_id("general", 1).await?;
//! # Ok(())
//! # }
//! ```

pub mod entry;
pub mod error;
pub mod store;
pub mod transport;

pub use entry::{Entry, EntryId, SearchField};
pub use error::{Error, Result};
pub use store::{CategoryStore, DEFAULT_BASE_URL};
pub use transport::{HttpTransport, Transport, TransportResponse};

use once_cell::sync::OnceCell;

/// Default accessor: public CDN over reqwest
pub type TasbihKit = CategoryStore<HttpTransport>;

static SHARED: OnceCell<TasbihKit> = OnceCell::new();

/// Process-wide default accessor, built on first use
///
/// Holds no mutable state; equivalent to a fresh [`TasbihKit::new`] apart
/// from sharing one connection pool.
pub fn shared() -> Result<&'static TasbihKit> {
    SHARED.get_or_try_init(TasbihKit::new)
}
