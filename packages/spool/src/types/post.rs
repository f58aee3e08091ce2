//! A single post within an assembled thread.

use serde::{Deserialize, Serialize};

/// One post in a thread.
///
/// Derived fields (`character_count`, `has_hashtags`) are computed
/// from the content at construction. Lengths are counted in
/// characters, not bytes, matching how the platform counts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// 1-based, contiguous position in the thread
    pub order: u32,

    /// Final post text
    pub content: String,

    /// Character count of the content
    pub character_count: usize,

    /// Whether the content contains hashtags
    pub has_hashtags: bool,

    /// Back-reference to the owning thread, set at thread construction
    pub thread_id: Option<String>,
}

impl Post {
    /// Create a post at a position, deriving the computed fields.
    pub fn new(order: u32, content: impl Into<String>) -> Self {
        let content = content.into();
        let character_count = content.chars().count();
        let has_hashtags = content.contains('#');
        Self {
            order,
            content,
            character_count,
            has_hashtags,
            thread_id: None,
        }
    }
}
