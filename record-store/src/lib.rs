pub mod advanced;
pub mod client;
pub mod expression;
#[cfg(test)]
mod mocks;
pub mod models;
pub mod users;

pub use advanced::{get_advanced_users, get_listed_users, get_listed_users_by_first_name};
pub use client::dynamodb::DynamoDbClient;
pub use models::{UserInfo, UserInfoAdvanced};
pub use users::{create_new_user, delete_user, get_all_users, get_user, update_user_info};
