//! Resource proxies for the Jet merchant API.
//!
//! Each proxy borrows a [`JetClient`](crate::JetClient), builds the path for
//! one endpoint and hands off to the client's GET/PUT/POST helpers. None of
//! them hold state of their own. Obtain them from the client:
//!
//! ```rust,ignore
//! let ready = client.orders().orders(OrderStatus::Ready, None).await?;
//! let sku = client.products().get_product("SKU-123").await?;
//! ```
//!
//! Every operation returns whatever the response decoder produced: the JSON
//! body on success, or a `{status, status_code, ...}` envelope otherwise.

mod files;
mod orders;
mod products;
mod refunds;
mod returns;
mod taxonomy;

pub use files::{FileType, Files};
pub use orders::{OrderStatus, Orders};
pub use products::{Products, MAIN_IMAGE_SLOT};
pub use refunds::{RefundStatus, Refunds};
pub use returns::{ReturnStatus, Returns};
pub use taxonomy::Taxonomy;

use std::borrow::Cow;

/// Percent-encodes a caller-supplied path segment.
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}
