use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::ownership,
    model::user::{PaginatedUsers, UpdateUserData, UpdateUserParam, User},
    service::auth::EMAIL_TAKEN,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of all users. Callers must have checked the admin permission.
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Requested page with totals
    /// - `Err(AppError::BadRequest)` - `per_page` is zero
    pub async fn get_all_paginated(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        if per_page == 0 {
            return Err(AppError::BadRequest("entries must be at least 1".to_string()));
        }

        let user_repo = UserRepository::new(self.db);

        let (users, total) = user_repo.get_all_paginated(page, per_page).await?;
        let users = users
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
        })
    }

    /// Gets an account the principal may manage.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Account missing, or neither the principal nor an admin
    pub async fn get_by_id(&self, id: Uuid, principal: &User) -> Result<User, AppError> {
        if !ownership::can_manage_account(id, principal) {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let user = UserRepository::new(self.db).find_by_id(id).await?;
        User::from_entity(ownership::found(user, "User")?)
    }

    /// Updates an account the principal may manage.
    ///
    /// Only admins may change roles. A new password is hashed with `hash_cost`.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated account
    /// - `Err(AppError::NotFound)` - Account missing or not manageable by the principal
    /// - `Err(AuthError::AccessDenied)` - Non-admin attempted a role change
    /// - `Err(AppError::Conflict)` - New email already registered
    pub async fn update(
        &self,
        id: Uuid,
        principal: &User,
        param: UpdateUserParam,
        hash_cost: u32,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if !ownership::can_manage_account(id, principal) {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        if param.role.is_some() && !principal.is_admin() {
            return Err(AuthError::AccessDenied(
                principal.id,
                "User attempted to change an account role without the admin role".to_string(),
            )
            .into());
        }
        if let Some(email) = &param.email {
            if user_repo.email_taken(email, Some(id)).await? {
                return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
            }
        }

        let password_hash = match &param.password {
            Some(password) => Some(bcrypt::hash(password, hash_cost)?),
            None => None,
        };

        let user = user_repo
            .update(
                id,
                UpdateUserData {
                    username: param.username,
                    email: param.email,
                    password_hash,
                    role: param.role,
                },
            )
            .await
            .map_err(|e| AppError::conflict_on_unique(e, EMAIL_TAKEN))?;

        User::from_entity(ownership::found(user, "User")?)
    }

    /// Deletes an account the principal may manage, with everything it owns.
    pub async fn delete(&self, id: Uuid, principal: &User) -> Result<(), AppError> {
        if !ownership::can_manage_account(id, principal) {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("User {} deleted by {}", id, principal.id);

        Ok(())
    }
}
