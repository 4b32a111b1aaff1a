//! User fixtures for creating in-memory test data.

use chrono::Utc;
use entity::user;
use uuid::Uuid;

/// Plain-text password used for every factory-created user.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Lowest cost bcrypt accepts, keeps hashing fast in tests.
pub const TEST_HASH_COST: u32 = 4;

/// Default role for test users.
pub const DEFAULT_ROLE: &str = "user";

/// Default test username.
pub const DEFAULT_USERNAME: &str = "player";

/// Default test email.
pub const DEFAULT_EMAIL: &str = "player@example.com";

/// Creates a user entity model with default values.
///
/// The password hash is a placeholder and will not verify against `DEFAULT_PASSWORD`;
/// use `factory::user::UserFactory` when a login must succeed.
///
/// # Returns
/// - `user::Model` - In-memory user entity with a random id
pub fn entity() -> user::Model {
    let now = Utc::now();
    user::Model {
        id: Uuid::new_v4(),
        username: DEFAULT_USERNAME.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        password_hash: "not-a-hash".to_string(),
        role: DEFAULT_ROLE.to_string(),
        created_at: now,
        updated_at: now,
    }
}
