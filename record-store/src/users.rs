use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_dynamo::aws_sdk_dynamodb_1::{from_item, from_items, to_item};
use shared::error::{LabelledError, Result};

use crate::client::{Item, RecordClientInterface, UpdateRequest};
use crate::models::{UserInfo, UserKey, UserNameValues, USER_ID};

pub const UPDATE_NAMES_EXPRESSION: &str = "set firstName = :firstName, lastName = :lastName";

pub(crate) fn user_key(user_id: &str) -> Item {
    HashMap::from([(USER_ID.to_string(), AttributeValue::S(user_id.to_string()))])
}

pub async fn get_user<C: RecordClientInterface>(
    client: &C,
    table_name: &str,
    user_id: &str,
) -> Result<UserInfo> {
    let item = client
        .get_item(table_name.to_string(), user_key(user_id))
        .await
        .map_err(|err| LabelledError::bracketed("FailedTableLookupError", err).logged())?
        .ok_or_else(|| LabelledError::tagged("UserNotFound", user_id).logged())?;

    let user: UserInfo = from_item(item)
        .map_err(|_| LabelledError::tagged("ItemUnMarshalError", user_id).logged())?;

    log::info!("User details of userID : {user_id} Fetched Successfully");
    Ok(user)
}

pub async fn get_all_users<C: RecordClientInterface>(
    client: &C,
    table_name: &str,
) -> Result<Vec<UserInfo>> {
    let items = client
        .scan(table_name.to_string())
        .await
        .map_err(|err| LabelledError::bracketed("Failed to Lookup table", err).logged())?;

    if items.is_empty() {
        return Err(LabelledError::bare("Users Not found").logged());
    }

    let users: Vec<UserInfo> = from_items(items)
        .map_err(|err| LabelledError::bracketed("UnMarshal Stores Error", err).logged())?;

    log::info!("Successfully Fetched {}", users.len());
    Ok(users)
}

pub async fn create_new_user<C: RecordClientInterface>(
    client: &C,
    table_name: &str,
    user: &UserInfo,
) -> Result<UserInfo> {
    let item: Item =
        to_item(user).map_err(|err| LabelledError::bracketed("Marshal Map Error", err).logged())?;

    client
        .put_item(table_name.to_string(), item)
        .await
        .map_err(|err| LabelledError::bracketed("Put Item Error", err).logged())?;

    log::info!("User : {} Created Successfully", user.user_id);
    Ok(user.clone())
}

/// Overwrites first and last name of an existing user. Empty names are written as empty
/// strings rather than removed.
pub async fn update_user_info<C: RecordClientInterface>(
    client: &C,
    table_name: &str,
    user: &UserInfo,
) -> Result<UserInfo> {
    if user.user_id.is_empty() {
        return Err(LabelledError::bracketed("FailedTableLookupError", "missing userId").logged());
    }

    let key: Item = to_item(UserKey {
        user_id: &user.user_id,
    })
    .map_err(|err| LabelledError::bracketed("FailedTableLookupError", err).logged())?;

    let values: Item = to_item(UserNameValues {
        first_name: &user.first_name,
        last_name: &user.last_name,
    })
    .map_err(|err| LabelledError::bracketed("FailedToCreateUpdateDetails", err).logged())?;

    let request = UpdateRequest {
        table_name: table_name.to_string(),
        key,
        update_expression: UPDATE_NAMES_EXPRESSION.to_string(),
        expression_attribute_values: values,
    };

    client
        .update_item(request)
        .await
        .map_err(|err| LabelledError::bracketed("UpdateItemError", err).logged())?;

    log::info!("User : {} Details Updated Successfully", user.user_id);
    Ok(user.clone())
}

pub async fn delete_user<C: RecordClientInterface>(
    client: &C,
    table_name: &str,
    user_id: &str,
) -> Result<()> {
    client
        .delete_item(table_name.to_string(), user_key(user_id))
        .await
        .map_err(|err| LabelledError::bracketed("Failed to Delete", err).logged())?;

    log::info!("User : {user_id} Deleted Successfully");
    Ok(())
}
