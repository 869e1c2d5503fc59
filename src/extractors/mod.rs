//! Request extractors that report failures through `AppError`.

mod json;
mod page;
mod path;
pub use json::{ApiJson, EMPTY_BODY};
pub use page::{Page, DEFAULT_PAGE};
pub use path::ApiPath;
