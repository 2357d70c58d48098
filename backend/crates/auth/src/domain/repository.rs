//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;

/// User repository trait
///
/// The store does not enforce username uniqueness; callers check with
/// [`LocalUserRepository::exists_by_username`] before creating.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by user name
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>>;

    /// Check if user name exists
    async fn exists_by_username(&self, username: &UserName) -> AuthResult<bool>;
}
