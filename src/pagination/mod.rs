//! Page-based listing support.
//!
//! - `config` - page size limits and their defaults
//! - `normalizer` - raw page/size input to a [`PageWindow`]
//! - `layout` - page metadata once the record count is known
//! - `paginator` - count-then-fetch orchestration over a [`DataSource`]
//! - `result` / `response` - the listing payload and its HTTP envelope

mod config;
mod layout;
mod normalizer;
mod paginator;
mod response;
mod result;
mod source;

pub use config::{DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, PaginationConfig, effective_max_size};
pub use layout::{PageLayout, page_count};
pub use normalizer::{Normalizer, PageOptions, PageRequest, PageWindow, normalize};
pub use paginator::{PaginationFailure, PaginationStage, Paginator};
pub use result::{FETCH_ERROR_MESSAGE, PaginationResult};
pub use source::DataSource;
