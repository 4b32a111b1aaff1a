//! Tier list persistence, including the transactional structure synchronizer.
//!
//! Rows and items are never edited in place. Creating a list inserts its structure and
//! replacing a list deletes the whole structure and inserts the desired one again, all
//! inside a single transaction. Every row and item receives a freshly generated id.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use uuid::Uuid;

use crate::server::{
    middleware::ownership,
    model::tier_list::{TierList, TierListParam, TierListSummary, TierRowParam},
};

/// Rows per multi-row statement, keeps every statement well below SQLite's limit of
/// 32,766 bound parameters.
const BATCH_SIZE: usize = 1000;

pub struct TierListRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TierListRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a tier list with its rows and items in one transaction.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the new list
    /// - `param` - Desired name and structure
    ///
    /// # Returns
    /// - `Ok(TierList)` - The created list, hydrated
    /// - `Err(DbErr)` - Insert failed (for example an item references a missing game);
    ///   nothing is persisted
    pub async fn create(&self, user_id: Uuid, param: TierListParam) -> Result<TierList, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let result = async {
            let list = entity::tier_list::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                user_id: ActiveValue::Set(user_id),
                name: ActiveValue::Set(param.name),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            }
            .insert(&txn)
            .await?;

            insert_structure(&txn, list.id, param.rows).await?;

            Ok::<_, DbErr>(list)
        }
        .await;

        let list = match result {
            Ok(list) => {
                txn.commit().await?;
                list
            }
            Err(e) => {
                txn.rollback().await?;
                return Err(e);
            }
        };

        self.get_by_id(list.id, user_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Tier list with id {} not found after creation",
                list.id
            )))
    }

    /// Replaces the name and the entire row/item structure of a tier list.
    ///
    /// Runs as one transaction:
    /// 1. Load the list and check it belongs to `user_id`
    /// 2. Update the name and `updated_at`; id and owner never change
    /// 3. Delete all items of the list's rows, then the rows
    /// 4. Insert the desired rows with fresh ids, then their items with fresh ids
    ///
    /// Any failure rolls the transaction back and leaves the previous structure intact.
    ///
    /// # Returns
    /// - `Ok(Some(TierList))` - The updated list, hydrated
    /// - `Ok(None)` - List does not exist or belongs to another user
    /// - `Err(DbErr)` - Store failure, nothing was changed
    pub async fn replace(
        &self,
        id: Uuid,
        user_id: Uuid,
        param: TierListParam,
    ) -> Result<Option<TierList>, DbErr> {
        let txn = self.db.begin().await?;

        let result = async {
            let Some(list) = entity::prelude::TierList::find_by_id(id).one(&txn).await? else {
                return Ok(false);
            };
            if !ownership::authorize(list.user_id, user_id) {
                return Ok(false);
            }

            let mut active_model: entity::tier_list::ActiveModel = list.into();
            active_model.name = ActiveValue::Set(param.name);
            active_model.updated_at = ActiveValue::Set(Utc::now());
            active_model.update(&txn).await?;

            delete_structure(&txn, id).await?;
            insert_structure(&txn, id, param.rows).await?;

            Ok::<_, DbErr>(true)
        }
        .await;

        match result {
            Ok(true) => txn.commit().await?,
            Ok(false) => {
                txn.rollback().await?;
                return Ok(None);
            }
            Err(e) => {
                txn.rollback().await?;
                return Err(e);
            }
        }

        self.get_by_id(id, user_id).await
    }

    /// Gets a tier list by ID, fully hydrated, scoped to its owner.
    ///
    /// Rows are ordered by `sort_order` then submission position; items likewise within
    /// their row. Each item carries its game when the game still exists.
    ///
    /// # Returns
    /// - `Ok(Some(TierList))` - The list with rows, items and games
    /// - `Ok(None)` - List does not exist or belongs to another user
    pub async fn get_by_id(&self, id: Uuid, user_id: Uuid) -> Result<Option<TierList>, DbErr> {
        let Some(list) = entity::prelude::TierList::find_by_id(id)
            .filter(entity::tier_list::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let rows = entity::prelude::TierRow::find()
            .filter(entity::tier_row::Column::TierListId.eq(list.id))
            .order_by_asc(entity::tier_row::Column::SortOrder)
            .order_by_asc(entity::tier_row::Column::Position)
            .all(self.db)
            .await?;

        let row_ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let items = if row_ids.is_empty() {
            Vec::new()
        } else {
            entity::prelude::TierItem::find()
                .filter(entity::tier_item::Column::TierRowId.is_in(row_ids))
                .order_by_asc(entity::tier_item::Column::SortOrder)
                .order_by_asc(entity::tier_item::Column::Position)
                .find_also_related(entity::prelude::Game)
                .all(self.db)
                .await?
        };

        Ok(Some(TierList::from_entities(list, rows, items)))
    }

    /// Gets all tier lists of a user without their rows, newest first.
    pub async fn get_all_by_user(&self, user_id: Uuid) -> Result<Vec<TierListSummary>, DbErr> {
        let lists = entity::prelude::TierList::find()
            .filter(entity::tier_list::Column::UserId.eq(user_id))
            .order_by_desc(entity::tier_list::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(lists.into_iter().map(TierListSummary::from_entity).collect())
    }

    /// Deletes a tier list owned by `user_id`; rows and items go with it.
    ///
    /// # Returns
    /// - `Ok(true)` - List was deleted
    /// - `Ok(false)` - List does not exist or belongs to another user
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::TierList::delete_many()
            .filter(entity::tier_list::Column::Id.eq(id))
            .filter(entity::tier_list::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Deletes every item of every row of a list, then the rows themselves.
async fn delete_structure<C: ConnectionTrait>(conn: &C, tier_list_id: Uuid) -> Result<(), DbErr> {
    let row_ids: Vec<Uuid> = entity::prelude::TierRow::find()
        .select_only()
        .column(entity::tier_row::Column::Id)
        .filter(entity::tier_row::Column::TierListId.eq(tier_list_id))
        .into_tuple()
        .all(conn)
        .await?;

    if row_ids.is_empty() {
        return Ok(());
    }

    for batch in row_ids.chunks(BATCH_SIZE) {
        entity::prelude::TierItem::delete_many()
            .filter(entity::tier_item::Column::TierRowId.is_in(batch.to_vec()))
            .exec(conn)
            .await?;
    }

    entity::prelude::TierRow::delete_many()
        .filter(entity::tier_row::Column::TierListId.eq(tier_list_id))
        .exec(conn)
        .await?;

    Ok(())
}

/// Inserts rows bound to `tier_list_id`, then their items, each with a fresh id.
///
/// Submission order is recorded in `position` so rows or items sharing a `sort_order`
/// read back in the order they were sent. Large structures are written in batches of
/// `BATCH_SIZE`.
async fn insert_structure<C: ConnectionTrait>(
    conn: &C,
    tier_list_id: Uuid,
    rows: Vec<TierRowParam>,
) -> Result<(), DbErr> {
    let mut row_models = Vec::with_capacity(rows.len());
    let mut item_models = Vec::new();

    for (row_position, row) in rows.into_iter().enumerate() {
        let row_id = Uuid::new_v4();

        for (item_position, item) in row.items.into_iter().enumerate() {
            item_models.push(entity::tier_item::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                tier_row_id: ActiveValue::Set(row_id),
                game_id: ActiveValue::Set(item.game_id),
                sort_order: ActiveValue::Set(item.sort_order),
                position: ActiveValue::Set(item_position as i32),
            });
        }

        row_models.push(entity::tier_row::ActiveModel {
            id: ActiveValue::Set(row_id),
            tier_list_id: ActiveValue::Set(tier_list_id),
            label: ActiveValue::Set(row.label),
            color: ActiveValue::Set(row.color),
            sort_order: ActiveValue::Set(row.sort_order),
            position: ActiveValue::Set(row_position as i32),
        });
    }

    for batch in row_models.chunks(BATCH_SIZE) {
        entity::prelude::TierRow::insert_many(batch.to_vec())
            .exec_without_returning(conn)
            .await?;
    }

    for batch in item_models.chunks(BATCH_SIZE) {
        entity::prelude::TierItem::insert_many(batch.to_vec())
            .exec_without_returning(conn)
            .await?;
    }

    Ok(())
}
