use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, Role, UpdateUserData},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod email_taken;
mod get_all_paginated;
mod update;
