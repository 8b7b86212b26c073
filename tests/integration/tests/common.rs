//! Common test utilities and fixtures.

use std::sync::Arc;

use awsfed_aws::{RoleMappingConfig, SetAwsAttributes};
use awsfed_spi::{Attributes, StepChain};
use serde_json::{Map, Value};

/// Account used by every fixture.
pub const ACCOUNT: &str = "123456789012";

/// IAM SAML provider used by every fixture.
pub const PROVIDER: &str = "idp1";

/// Expected `Role` value for an IAM role in the fixture account.
pub fn role_value(role: &str) -> String {
    format!("arn:aws:iam::{ACCOUNT}:role/{role},arn:aws:iam::{ACCOUNT}:saml-provider/{PROVIDER}")
}

/// Raw options for the Admins/Viewers fixture.
pub fn fixture_options(match_all: bool) -> Map<String, Value> {
    let value = serde_json::json!({
        "aws.account": ACCOUNT,
        "iam.provider": PROVIDER,
        "match.all": match_all,
        "iam.roles": {
            "Admins": ["admin"],
            "Viewers": ["viewer"]
        }
    });
    match value {
        Value::Object(map) => map,
        _ => unreachable!("fixture is an object"),
    }
}

/// Admins/Viewers configuration shared across threads.
pub fn fixture_config(match_all: bool) -> anyhow::Result<Arc<RoleMappingConfig>> {
    init_tracing();
    Ok(Arc::new(RoleMappingConfig::from_options(&fixture_options(
        match_all,
    ))?))
}

/// Processing chain holding only the AWS step.
pub fn fixture_chain(match_all: bool) -> anyhow::Result<StepChain> {
    Ok(StepChain::new().with_step(SetAwsAttributes::new(fixture_config(match_all)?)))
}

/// Attributes for a user with the given uid and groups.
pub fn user(uid: &str, groups: &[&str]) -> Attributes {
    let mut attrs = Attributes::new();
    attrs.set("uid", uid);
    attrs.set_values("group", groups.iter().copied());
    attrs
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("awsfed_aws=debug,awsfed_spi=trace")
        .with_test_writer()
        .try_init();
}
