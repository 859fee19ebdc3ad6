use clap::{Parser, Subcommand};
use record_store::{DynamoDbClient, UserInfo};
use shared::configuration;
use shared::error::Result;

use super::{print_json, required_setting};

/// Read and write records in the user table
#[derive(Parser, Debug)]
#[clap(name = "users", about)]
pub struct UsersArgs {
    /// The user table, defaults to $USER_TABLE_NAME
    #[clap(short = 't', long = "table")]
    pub table: Option<String>,

    /// The group/active secondary index, defaults to $USER_GROUP_INDEX_NAME or groupIndex
    #[clap(long = "index")]
    pub index: Option<String>,

    #[clap(subcommand)]
    pub action: UsersAction,
}

#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// Fetch a single user by id
    Get { user_id: String },
    /// List every user in the table
    List,
    /// Create a user
    Create {
        user_id: String,
        #[clap(long = "first-name", default_value = "")]
        first_name: String,
        #[clap(long = "last-name", default_value = "")]
        last_name: String,
    },
    /// Overwrite the first and last name of a user, both names are required
    Update {
        user_id: String,
        #[clap(long = "first-name")]
        first_name: String,
        #[clap(long = "last-name")]
        last_name: String,
    },
    /// Delete a user by id
    Delete { user_id: String },
    /// Active users of a group within a batch
    Query {
        #[clap(long)]
        group: String,
        #[clap(long)]
        batch: String,
    },
    /// Fetch up to 100 users by id
    BatchGet {
        #[clap(required = true)]
        user_ids: Vec<String>,
    },
    /// Active users of a group matching any of the given first names
    ByFirstName {
        #[clap(long)]
        group: String,
        #[clap(required = true)]
        first_names: Vec<String>,
    },
}

pub async fn run(args: UsersArgs) -> Result<()> {
    let table = required_setting(
        args.table,
        configuration::get_user_table_name(),
        "USER_TABLE_NAME",
    )?;
    let index = args
        .index
        .unwrap_or_else(configuration::get_group_index_name);
    let client = DynamoDbClient::from_env().await;

    match args.action {
        UsersAction::Get { user_id } => {
            print_json(&record_store::get_user(&client, &table, &user_id).await?)
        }
        UsersAction::List => print_json(&record_store::get_all_users(&client, &table).await?),
        UsersAction::Create {
            user_id,
            first_name,
            last_name,
        } => {
            let user = UserInfo::new(user_id, first_name, last_name);
            print_json(&record_store::create_new_user(&client, &table, &user).await?)
        }
        UsersAction::Update {
            user_id,
            first_name,
            last_name,
        } => {
            let user = UserInfo::new(user_id, first_name, last_name);
            print_json(&record_store::update_user_info(&client, &table, &user).await?)
        }
        UsersAction::Delete { user_id } => {
            record_store::delete_user(&client, &table, &user_id).await
        }
        UsersAction::Query { group, batch } => print_json(
            &record_store::get_advanced_users(&client, &table, &index, &group, &batch).await?,
        ),
        UsersAction::BatchGet { user_ids } => {
            print_json(&record_store::get_listed_users(&client, &table, &user_ids).await?)
        }
        UsersAction::ByFirstName { group, first_names } => print_json(
            &record_store::get_listed_users_by_first_name(
                &client,
                &table,
                &index,
                &first_names,
                &group,
            )
            .await?,
        ),
    }
}
