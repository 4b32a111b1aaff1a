//! User domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::user::{PaginatedUsersDto, RegisterUserDto, UpdateUserDto, UserDto},
    server::error::{internal::InternalError, AppError},
};

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Parses a role name, `None` if unknown.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// User account without its password hash.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - Converted domain model
    /// - `Err(AppError)` - The stored role string is unknown
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = Role::parse(&entity.role)
            .ok_or_else(|| InternalError::UnknownRole(entity.role.clone()))?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            role,
            created_at: entity.created_at,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role.as_str().to_string(),
            created_at: self.created_at,
        }
    }
}

/// Validated registration input. The password is still plain text here.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserParam {
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, AppError> {
        let username = dto.username.trim().to_string();
        let email = dto.email.trim().to_lowercase();

        if username.is_empty() {
            return Err(AppError::BadRequest("Username must not be empty".to_string()));
        }
        validate_email(&email)?;
        if dto.password.is_empty() {
            return Err(AppError::BadRequest("Password must not be empty".to_string()));
        }

        Ok(Self {
            username,
            email,
            password: dto.password,
        })
    }
}

/// Data for inserting a user once the password has been hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Validated partial update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

impl UpdateUserParam {
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        let username = match dto.username.map(|u| u.trim().to_string()) {
            Some(u) if u.is_empty() => {
                return Err(AppError::BadRequest("Username must not be empty".to_string()))
            }
            other => other,
        };

        let email = dto.email.map(|e| e.trim().to_lowercase());
        if let Some(email) = &email {
            validate_email(email)?;
        }

        let role = match dto.role {
            Some(role) => Some(
                Role::parse(&role)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown role '{}'", role)))?,
            ),
            None => None,
        };

        Ok(Self {
            username,
            email,
            password: dto.password.filter(|p| !p.is_empty()),
            role,
        })
    }
}

/// Column values to write on update, with the password already hashed.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserData {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<Role>,
}

/// One page of users.
#[derive(Debug, Clone)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        let total_pages = if self.per_page > 0 {
            self.total.div_ceil(self.per_page)
        } else {
            0
        };

        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}

fn validate_email(email: &str) -> Result<(), AppError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(AppError::BadRequest(format!(
            "'{}' is not a valid email address",
            email
        ))),
    }
}
