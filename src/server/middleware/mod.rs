//! Request guards: bearer-token authentication and resource ownership checks.

pub mod auth;
pub mod ownership;

#[cfg(test)]
mod test;
