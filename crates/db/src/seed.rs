//! Seed data for new databases.

use costwise_core::User;
use costwise_shared::types::UserId;

/// Id of the user every fresh installation starts with.
pub const DEFAULT_USER_ID: UserId = UserId(123_123);

/// Users created by the seeder.
#[must_use]
pub fn default_users() -> Vec<User> {
    vec![User {
        id: DEFAULT_USER_ID,
        first_name: "mosh".to_string(),
        last_name: "israeli".to_string(),
        birthday: "1990-01-10".to_string(),
        marital_status: "single".to_string(),
    }]
}
