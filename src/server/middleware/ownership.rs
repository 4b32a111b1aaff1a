//! Ownership checks for user-scoped resources.
//!
//! A principal may only see or change resources it owns. Ownership mismatches are reported
//! exactly like missing resources (404) so the existence of other users' data never leaks.

use uuid::Uuid;

use crate::server::{error::AppError, model::user::User};

/// Returns whether `principal_id` owns a resource owned by `resource_owner_id`.
pub fn authorize(resource_owner_id: Uuid, principal_id: Uuid) -> bool {
    resource_owner_id == principal_id
}

/// Returns whether a resource with an optional owner may be read; unowned resources are
/// readable by everyone.
pub fn can_read(resource_owner_id: Option<Uuid>, principal_id: Uuid) -> bool {
    resource_owner_id.is_none_or(|owner| authorize(owner, principal_id))
}

/// Returns whether `principal` may modify a resource with an optional owner.
///
/// Owned resources need the owner; unowned (global) resources need an admin.
pub fn can_modify(resource_owner_id: Option<Uuid>, principal: &User) -> bool {
    match resource_owner_id {
        Some(owner) => authorize(owner, principal.id),
        None => principal.is_admin(),
    }
}

/// Returns whether `principal` may manage the account `account_id`: itself, or any account
/// for admins.
pub fn can_manage_account(account_id: Uuid, principal: &User) -> bool {
    authorize(account_id, principal.id) || principal.is_admin()
}

/// Converts a missing resource into `AppError::NotFound` with the message
/// `"{resource} not found"`.
pub fn found<T>(resource: Option<T>, name: &str) -> Result<T, AppError> {
    resource.ok_or_else(|| AppError::NotFound(format!("{} not found", name)))
}
