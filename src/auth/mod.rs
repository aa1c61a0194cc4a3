pub mod extractors;
pub mod middleware;
pub mod session;

pub use extractors::AuthUser;
