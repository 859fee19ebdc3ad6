use aws_config::{BehaviorVersion, SdkConfig};

use crate::configuration;

/// Loads the SDK configuration shared by every client: region, optional named profile and
/// optional endpoint override, all taken from the environment.
pub async fn load_sdk_config() -> SdkConfig {
    let region = configuration::get_aws_region();
    log::debug!("Loading AWS config for region {region}");

    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region);

    if let Some(profile) = configuration::get_aws_profile() {
        log::debug!("Using AWS profile {profile}");
        loader = loader.profile_name(profile);
    }

    if let Some(endpoint_url) = configuration::get_aws_endpoint_url() {
        log::info!("Overriding AWS endpoint with {endpoint_url}");
        loader = loader.endpoint_url(endpoint_url);
    }

    loader.load().await
}
