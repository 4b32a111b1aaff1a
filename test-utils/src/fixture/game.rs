//! Game fixtures for creating in-memory test data.

use chrono::Utc;
use entity::game;
use uuid::Uuid;

/// Default test game title.
pub const DEFAULT_TITLE: &str = "Test Game";

/// Default backlog status.
pub const DEFAULT_STATUS: &str = "backlog";

/// Creates a game entity model owned by `user_id` with default values.
///
/// # Default Values
/// - title: `"Test Game"`
/// - status: `"backlog"`
/// - score, date_finished, last_played_at: `None`
/// - numeric counters: `0`
pub fn entity(user_id: Uuid) -> game::Model {
    let now = Utc::now();
    game::Model {
        id: Uuid::new_v4(),
        user_id,
        title: DEFAULT_TITLE.to_string(),
        cover_url: String::new(),
        genre: String::new(),
        status: DEFAULT_STATUS.to_string(),
        platform: String::new(),
        platinum: false,
        score: None,
        hours_played: 0,
        hltb_estimate: 0,
        release_year: 0,
        date_finished: None,
        last_played_at: None,
        review_text: String::new(),
        created_at: now,
        updated_at: now,
    }
}
