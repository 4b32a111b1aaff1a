use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tier_rows")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub tier_list_id: Uuid,
    pub label: String,
    pub color: String,
    pub sort_order: i32,
    /// Submission index within the list, breaks `sort_order` ties.
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tier_list::Entity",
        from = "Column::TierListId",
        to = "super::tier_list::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    TierList,
    #[sea_orm(has_many = "super::tier_item::Entity")]
    TierItem,
}

impl Related<super::tier_list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TierList.def()
    }
}

impl Related<super::tier_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TierItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
