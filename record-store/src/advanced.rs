//! Queries against the `group`/`active` secondary index and batch lookups by id.

use std::collections::HashSet;

use serde_dynamo::aws_sdk_dynamodb_1::from_items;
use shared::error::{LabelledError, Result};

use crate::client::{Item, QueryRequest, RecordClientInterface};
use crate::expression::{name, Builder, Condition, Name};
use crate::models::{UserInfoAdvanced, ACTIVE, BATCH_ID, FIRST_NAME, GROUP, LAST_NAME, USER_ID};
use crate::users::user_key;

/// Service limit on keys in a single BatchGetItem request.
pub const MAX_BATCH_KEYS: usize = 100;

fn advanced_projection() -> Vec<Name> {
    [USER_ID, FIRST_NAME, LAST_NAME, BATCH_ID, GROUP, ACTIVE]
        .into_iter()
        .map(|attribute| name(attribute))
        .collect()
}

fn active_in_group(group: &str) -> Condition {
    name(GROUP).equal(group).and(name(ACTIVE).equal("true"))
}

async fn query_active_group<C: RecordClientInterface>(
    client: &C,
    table_name: &str,
    index_name: &str,
    group: &str,
    filter: Condition,
) -> Result<Vec<Item>> {
    let expression = Builder::new()
        .with_key_condition(active_in_group(group))
        .with_filter(filter)
        .with_projection(advanced_projection())
        .build()
        .map_err(|err| LabelledError::bracketed("Query Expression Error", err).logged())?;

    let request = QueryRequest {
        table_name: table_name.to_string(),
        index_name: Some(index_name.to_string()),
        expression,
    };

    client
        .query(request)
        .await
        .map_err(|err| LabelledError::bracketed("FailedTableLookupError", err).logged())
}

/// Active users of `group` whose `batchId` equals `batch`.
pub async fn get_advanced_users<C: RecordClientInterface>(
    client: &C,
    table_name: &str,
    index_name: &str,
    group: &str,
    batch: &str,
) -> Result<Vec<UserInfoAdvanced>> {
    let filter = name(BATCH_ID).equal(batch);
    let items = query_active_group(client, table_name, index_name, group, filter).await?;

    if items.is_empty() {
        return Err(LabelledError::bare(format!(
            "Stores Not found for Group: {group} BatchID : {batch}"
        ))
        .logged());
    }

    let users: Vec<UserInfoAdvanced> = from_items(items)
        .map_err(|err| LabelledError::bracketed("UnMarshal users Error", err).logged())?;

    log::info!(
        "Successfully Fetched {} results from DynamoDB for group: {group}",
        users.len()
    );
    Ok(users)
}

/// Fetches users by primary key. Duplicate ids are collapsed, keeping first occurrence.
pub async fn get_listed_users<C: RecordClientInterface>(
    client: &C,
    table_name: &str,
    user_ids: &[String],
) -> Result<Vec<UserInfoAdvanced>> {
    let mut seen = HashSet::new();
    let mut keys: Vec<Item> = Vec::with_capacity(user_ids.len());
    for user_id in user_ids {
        if seen.insert(user_id.as_str()) {
            keys.push(user_key(user_id));
        }
    }

    if keys.len() > MAX_BATCH_KEYS {
        return Err(LabelledError::bracketed(
            "TooManyKeys",
            format!("{} keys, limit {MAX_BATCH_KEYS}", keys.len()),
        )
        .logged());
    }

    if keys.is_empty() {
        return Err(LabelledError::bare("Users Not found for the input list of ID's").logged());
    }

    let output = client
        .batch_get_item(table_name.to_string(), keys)
        .await
        .map_err(|err| LabelledError::bracketed("FailedTableLookupError", err).logged())?;

    if output.unprocessed_keys > 0 {
        log::warn!(
            "{} keys were left unprocessed by BatchGetItem on {table_name}",
            output.unprocessed_keys
        );
    }

    if output.items.is_empty() {
        return Err(LabelledError::bare("Users Not found for the input list of ID's").logged());
    }

    let users: Vec<UserInfoAdvanced> = from_items(output.items)
        .map_err(|err| LabelledError::bracketed("UnMarshal Error", err).logged())?;

    log::info!("Successfully Fetched {} results from DynamoDB", users.len());
    Ok(users)
}

/// Active users of `group` whose first name is any of `first_names`.
pub async fn get_listed_users_by_first_name<C: RecordClientInterface>(
    client: &C,
    table_name: &str,
    index_name: &str,
    first_names: &[String],
    group: &str,
) -> Result<Vec<UserInfoAdvanced>> {
    let filter = Condition::any(
        first_names
            .iter()
            .map(|first_name| name(FIRST_NAME).equal(first_name.as_str())),
    )
    .ok_or_else(|| {
        LabelledError::bracketed("Query Expression Error", "empty filter condition").logged()
    })?;

    let items = query_active_group(client, table_name, index_name, group, filter).await?;

    if items.is_empty() {
        return Err(LabelledError::bare(format!(
            "Stores Not found for group: {group} in the input list of ID's"
        ))
        .logged());
    }

    let users: Vec<UserInfoAdvanced> = from_items(items)
        .map_err(|err| LabelledError::bracketed("UnMarshal Error", err).logged())?;

    log::info!(
        "Successfully Fetched {} results from DynamoDB for group: {group}",
        users.len()
    );
    Ok(users)
}
