use serde::{Deserialize, Serialize};

pub const USER_ID: &str = "userId";
pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const BATCH_ID: &str = "batchId";
pub const GROUP: &str = "group";
pub const ACTIVE: &str = "active";

/// A row of the user table. `userId` is the partition key.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,
}

impl UserInfo {
    pub fn new(user_id: String, first_name: String, last_name: String) -> Self {
        Self {
            user_id,
            first_name,
            last_name,
        }
    }
}

/// A row of the user table as seen through the `group`/`active` secondary index.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoAdvanced {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub batch_id: String,
    // partition key of the index
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group: String,
    // sort key of the index, "true" for active users
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub active: String,
}

#[derive(Serialize, Debug)]
pub(crate) struct UserKey<'a> {
    #[serde(rename = "userId")]
    pub user_id: &'a str,
}

#[derive(Serialize, Debug)]
pub(crate) struct UserNameValues<'a> {
    #[serde(rename = ":firstName")]
    pub first_name: &'a str,
    #[serde(rename = ":lastName")]
    pub last_name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::AttributeValue;
    use serde_dynamo::aws_sdk_dynamodb_1::{from_item, to_item};
    use std::collections::HashMap;

    #[test]
    fn empty_fields_are_omitted() {
        let user = UserInfo::new("u-1".to_string(), "Ada".to_string(), String::new());
        let item: HashMap<String, AttributeValue> = to_item(&user).unwrap();

        assert_eq!(item.len(), 2);
        assert_eq!(item.get(USER_ID), Some(&AttributeValue::S("u-1".to_string())));
        assert_eq!(item.get(FIRST_NAME), Some(&AttributeValue::S("Ada".to_string())));
        assert!(!item.contains_key(LAST_NAME));
    }

    #[test]
    fn missing_attributes_read_as_empty() {
        let item = HashMap::from([
            (USER_ID.to_string(), AttributeValue::S("u-2".to_string())),
            (GROUP.to_string(), AttributeValue::S("g-1".to_string())),
        ]);

        let user: UserInfoAdvanced = from_item(item).unwrap();
        assert_eq!(user.user_id, "u-2");
        assert_eq!(user.group, "g-1");
        assert!(user.batch_id.is_empty());
        assert!(user.active.is_empty());
    }

    #[test]
    fn update_values_keep_empty_strings() {
        let values = UserNameValues {
            first_name: "Grace",
            last_name: "",
        };
        let item: HashMap<String, AttributeValue> = to_item(&values).unwrap();
        assert_eq!(
            item.get(":firstName"),
            Some(&AttributeValue::S("Grace".to_string()))
        );
        assert_eq!(item.get(":lastName"), Some(&AttributeValue::S(String::new())));
    }
}
