//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user owning `count` games.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of games to create for the user
///
/// # Returns
/// - `Ok((user, games))` - The user and their games in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_games(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::user::Model, Vec<entity::game::Model>), DbErr> {
    let user = crate::factory::user::create_user(db).await?;

    let mut games = Vec::with_capacity(count);
    for _ in 0..count {
        games.push(crate::factory::game::create_game(db, user.id).await?);
    }

    Ok((user, games))
}
