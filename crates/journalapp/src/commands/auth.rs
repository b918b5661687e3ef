//! The single local account.
//!
//! There is at most one [`User`]; registering again replaces it. Passwords
//! are only ever stored as salted hashes (see [`crate::crypto`]).

use crate::crypto::{hash_secret, verify_secret};
use crate::error::Result;
use crate::model::User;
use crate::store::{DataStore, StoreKey};
use chrono::Utc;

use super::helpers::new_id;

pub fn current_user<S: DataStore>(store: &S) -> Result<Option<User>> {
    store.load(StoreKey::Auth)
}

pub fn is_logged_in<S: DataStore>(store: &S) -> Result<bool> {
    Ok(current_user(store)?.is_some())
}

/// Create the account, overwriting any previous one.
pub fn register<S: DataStore>(store: &mut S, password: &str) -> Result<User> {
    let user = User {
        id: new_id(),
        password_hash: hash_secret(password)?,
        created_at: Utc::now(),
    };
    store.save(StoreKey::Auth, &user)?;
    tracing::info!(id = %user.id, "user registered");
    Ok(user)
}

/// True iff an account exists and `password` matches it.
pub fn login<S: DataStore>(store: &S, password: &str) -> Result<bool> {
    Ok(current_user(store)?.is_some_and(|u| verify_secret(password, &u.password_hash)))
}

pub fn logout<S: DataStore>(store: &mut S) -> Result<()> {
    store.remove(StoreKey::Auth)?;
    tracing::info!("user logged out");
    Ok(())
}

/// Replace the password after checking the old one.
///
/// Returns `false` and leaves the account untouched when there is no account
/// or `old` does not match.
pub fn change_password<S: DataStore>(store: &mut S, old: &str, new: &str) -> Result<bool> {
    let Some(mut user) = current_user(store)? else {
        return Ok(false);
    };
    if !verify_secret(old, &user.password_hash) {
        return Ok(false);
    }
    user.password_hash = hash_secret(new)?;
    store.save(StoreKey::Auth, &user)?;
    tracing::info!(id = %user.id, "password changed");
    Ok(true)
}
