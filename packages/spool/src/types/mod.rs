//! Data types for thread assembly.

pub mod article;
pub mod config;
pub mod post;
pub mod summary;
pub mod thread;
