//! Article source implementations.

mod medium;

pub use medium::{article_id_from_url, MediumSource};
