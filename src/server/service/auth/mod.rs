//! Account registration and password login.

pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, RegisterUserParam, Role, User},
    service::auth::token::TokenService,
};

/// Conflict message for an email already registered to another account.
pub(crate) const EMAIL_TAKEN: &str = "An account with this email already exists";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account and returns it with a fresh token.
    ///
    /// The first account created while no admin exists is given the admin role.
    ///
    /// # Returns
    /// - `Ok((User, String))` - Created user and bearer token
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(
        &self,
        param: RegisterUserParam,
        hash_cost: u32,
    ) -> Result<(User, String), AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.email_taken(&param.email, None).await? {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let role = if user_repo.admin_exists().await? {
            Role::User
        } else {
            tracing::info!("No admin account exists, granting admin role to {}", param.email);
            Role::Admin
        };

        let password_hash = bcrypt::hash(&param.password, hash_cost)?;
        let user = user_repo
            .create(CreateUserParam {
                username: param.username,
                email: param.email,
                password_hash,
                role,
            })
            .await
            .map_err(|e| AppError::conflict_on_unique(e, EMAIL_TAKEN))?;
        let user = User::from_entity(user)?;

        let token = self.tokens.issue(&user)?;

        Ok((user, token))
    }

    /// Verifies email and password and returns the user with a fresh token.
    ///
    /// # Returns
    /// - `Ok((User, String))` - Authenticated user and bearer token
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), AppError> {
        let user_repo = UserRepository::new(self.db);

        let email = email.trim().to_lowercase();
        let Some(user) = user_repo.find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = User::from_entity(user)?;
        let token = self.tokens.issue(&user)?;

        Ok((user, token))
    }
}
