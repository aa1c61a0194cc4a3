mod dto;
pub mod handlers;
#[cfg(test)]
pub mod mocks;
mod repo;
mod repo_types;

pub use dto::SnippetCreateForm;
pub use repo::PgSnippetStore;
pub use repo_types::{Snippet, SnippetStore};
