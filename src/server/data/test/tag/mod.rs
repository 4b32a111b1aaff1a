use crate::server::data::tag::TagRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod filter_visible_ids;
mod get_visible;
mod name_exists;
