//! Test helpers for generating unique test data
//!
//! Usernames carry a unique index in the store, so tests mint theirs from
//! ULIDs to stay isolated across runs and binaries.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use gateway_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("state");
/// let id2 = unique_str("state");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("state-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique username with the given prefix
///
/// # Examples
/// ```
/// use gateway_test_support::unique_helpers::unique_username;
///
/// let name = unique_username("rogue");
/// assert!(name.starts_with("rogue-"));
/// ```
pub fn unique_username(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new()).to_lowercase()
}
