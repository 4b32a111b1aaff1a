use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub cover_url: String,
    pub genre: String,
    pub status: String,
    pub platform: String,
    pub platinum: bool,
    pub score: Option<f64>,
    pub hours_played: i32,
    pub hltb_estimate: i32,
    pub release_year: i32,
    pub date_finished: Option<DateTimeUtc>,
    pub last_played_at: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Text")]
    pub review_text: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::game_tag::Entity")]
    GameTag,
    #[sea_orm(has_many = "super::tier_item::Entity")]
    TierItem,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::tier_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TierItem.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_tag::Relation::Tag.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::game_tag::Relation::Game.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
