use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tier_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub tier_row_id: Uuid,
    pub game_id: Uuid,
    pub sort_order: i32,
    /// Submission index within the row, breaks `sort_order` ties.
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tier_row::Entity",
        from = "Column::TierRowId",
        to = "super::tier_row::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    TierRow,
    // Non-owning reference. Game deletion removes its placements explicitly.
    #[sea_orm(
        belongs_to = "super::game::Entity",
        from = "Column::GameId",
        to = "super::game::Column::Id"
    )]
    Game,
}

impl Related<super::tier_row::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TierRow.def()
    }
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
