use std::str::FromStr;

pub const DEFAULT_AWS_REGION: &str = "us-east-2";
pub const DEFAULT_GROUP_INDEX_NAME: &str = "groupIndex";

#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(input: &str) -> Result<Environment, Self::Err> {
        match input {
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            _ => Ok(Environment::Development),
        }
    }
}

pub fn get_rust_env() -> Environment {
    std::env::var("RUST_ENV")
        .ok()
        .and_then(|env| Environment::from_str(&env).ok())
        .unwrap_or(Environment::Development)
}

pub fn get_aws_region() -> aws_types::region::Region {
    let region = std::env::var("AWS_REGION")
        .ok()
        .filter(|region| !region.is_empty())
        .unwrap_or_else(|| DEFAULT_AWS_REGION.to_string());
    aws_types::region::Region::new(region)
}

pub fn get_aws_profile() -> Option<String> {
    std::env::var("AWS_PROFILE")
        .ok()
        .filter(|profile| !profile.is_empty())
}

/// Endpoint override, used to point the clients at a local emulator.
pub fn get_aws_endpoint_url() -> Option<String> {
    std::env::var("AWS_ENDPOINT_URL")
        .ok()
        .filter(|url| !url.is_empty())
}

pub fn get_user_table_name() -> Result<String, std::env::VarError> {
    std::env::var("USER_TABLE_NAME")
}

pub fn get_group_index_name() -> String {
    std::env::var("USER_GROUP_INDEX_NAME").unwrap_or_else(|_| DEFAULT_GROUP_INDEX_NAME.to_string())
}

pub fn get_upload_bucket() -> Result<String, std::env::VarError> {
    std::env::var("UPLOAD_BUCKET")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn region_defaults_to_us_east_2() {
        std::env::remove_var("AWS_REGION");
        assert_eq!(get_aws_region().as_ref(), "us-east-2");

        std::env::set_var("AWS_REGION", "");
        assert_eq!(get_aws_region().as_ref(), "us-east-2");

        std::env::set_var("AWS_REGION", "eu-west-1");
        assert_eq!(get_aws_region().as_ref(), "eu-west-1");
        std::env::remove_var("AWS_REGION");
    }

    #[test]
    #[serial]
    fn group_index_falls_back_to_default() {
        std::env::remove_var("USER_GROUP_INDEX_NAME");
        assert_eq!(get_group_index_name(), "groupIndex");

        std::env::set_var("USER_GROUP_INDEX_NAME", "cohortIndex");
        assert_eq!(get_group_index_name(), "cohortIndex");
        std::env::remove_var("USER_GROUP_INDEX_NAME");
    }

    #[test]
    #[serial]
    fn empty_profile_is_ignored() {
        std::env::set_var("AWS_PROFILE", "");
        assert_eq!(get_aws_profile(), None);

        std::env::set_var("AWS_PROFILE", "dev");
        assert_eq!(get_aws_profile(), Some("dev".to_string()));
        std::env::remove_var("AWS_PROFILE");
    }

    #[test]
    fn unknown_env_is_development() {
        assert_eq!(Environment::from_str("qa"), Ok(Environment::Development));
        assert_eq!(Environment::from_str("staging"), Ok(Environment::Staging));
        assert_eq!(
            Environment::from_str("production"),
            Ok(Environment::Production)
        );
    }
}
