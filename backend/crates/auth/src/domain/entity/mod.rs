//! Entity Module

pub mod claims;
pub mod user;

pub use claims::Claims;
pub use user::User;
