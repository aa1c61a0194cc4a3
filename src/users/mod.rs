mod dto;
pub mod handlers;
#[cfg(test)]
pub mod mocks;
mod password;
mod repo;
mod repo_types;

pub use dto::{LoginForm, PasswordUpdateForm, SignupForm};
pub use repo::PgUserStore;
pub use repo_types::{User, UserStore};
