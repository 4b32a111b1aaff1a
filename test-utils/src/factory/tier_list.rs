//! Tier list factory for creating test tier lists with their rows and items.
//!
//! Rows and items are inserted directly, bypassing the synchronizer, so tests can set up
//! an existing structure and then observe how a replace operation changes it.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// A row to insert: label, sort order and `(game_id, sort_order)` items.
struct RowSeed {
    label: String,
    sort_order: i32,
    items: Vec<(Uuid, i32)>,
}

/// Factory for creating test tier lists.
///
/// # Example
///
/// ```rust,ignore
/// let list = TierListFactory::new(&db, user.id)
///     .name("Best of 2024")
///     .row("S", 0, vec![(game1.id, 0), (game2.id, 1)])
///     .row("A", 1, vec![])
///     .build()
///     .await?;
/// ```
pub struct TierListFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    rows: Vec<RowSeed>,
}

impl<'a> TierListFactory<'a> {
    /// Creates a new TierListFactory named `"Tier List {id}"` with no rows.
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        Self {
            db,
            user_id,
            name: format!("Tier List {}", next_id()),
            created_at: Utc::now(),
            rows: Vec::new(),
        }
    }

    /// Sets the tier list name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the creation timestamp, useful for ordering tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Appends a row with the given items.
    pub fn row(mut self, label: impl Into<String>, sort_order: i32, items: Vec<(Uuid, i32)>) -> Self {
        self.rows.push(RowSeed {
            label: label.into(),
            sort_order,
            items,
        });
        self
    }

    /// Builds and inserts the tier list, its rows and their items.
    ///
    /// # Returns
    /// - `Ok(entity::tier_list::Model)` - Created tier list entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::tier_list::Model, DbErr> {
        let tier_list = entity::tier_list::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await?;

        for (row_position, row) in self.rows.into_iter().enumerate() {
            let tier_row = entity::tier_row::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                tier_list_id: ActiveValue::Set(tier_list.id),
                label: ActiveValue::Set(row.label),
                color: ActiveValue::Set("#FFFFFF".to_string()),
                sort_order: ActiveValue::Set(row.sort_order),
                position: ActiveValue::Set(row_position as i32),
            }
            .insert(self.db)
            .await?;

            for (item_position, (game_id, sort_order)) in row.items.into_iter().enumerate() {
                entity::tier_item::ActiveModel {
                    id: ActiveValue::Set(Uuid::new_v4()),
                    tier_row_id: ActiveValue::Set(tier_row.id),
                    game_id: ActiveValue::Set(game_id),
                    sort_order: ActiveValue::Set(sort_order),
                    position: ActiveValue::Set(item_position as i32),
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(tier_list)
    }
}

/// Creates an empty tier list owned by `user_id`.
pub async fn create_tier_list(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::tier_list::Model, DbErr> {
    TierListFactory::new(db, user_id).build().await
}
