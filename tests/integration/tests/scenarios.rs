//! Example scenarios for the AWS attribute step.

use awsfed_aws::{
    transform, ConfigError, RoleMappingConfig, ROLE_ATTRIBUTE, ROLE_SESSION_NAME_ATTRIBUTE,
    SESSION_DURATION_ATTRIBUTE,
};
use serde_json::json;

use crate::common::{fixture_chain, fixture_config, role_value, user};

/// A user in one matching group gets that single role.
#[test]
fn test_first_match_grants_admin_role() -> anyhow::Result<()> {
    let config = fixture_config(false)?;
    let out = transform(user("alice", &["admin", "other"]), &config)?;

    assert_eq!(out.values(ROLE_SESSION_NAME_ATTRIBUTE), ["alice"]);
    assert_eq!(out.values(SESSION_DURATION_ATTRIBUTE), ["3600"]);
    assert_eq!(out.values(ROLE_ATTRIBUTE), [role_value("Admins")]);
    Ok(())
}

/// With match-all, every matching role is emitted in role map order.
#[test]
fn test_match_all_grants_every_role() -> anyhow::Result<()> {
    let config = fixture_config(true)?;
    let out = transform(user("alice", &["viewer", "admin"]), &config)?;

    assert_eq!(
        out.values(ROLE_ATTRIBUTE),
        [role_value("Admins"), role_value("Viewers")]
    );
    Ok(())
}

/// Without a uid attribute the request is rejected.
#[test]
fn test_missing_uid_is_rejected() -> anyhow::Result<()> {
    let chain = fixture_chain(false)?;
    let mut attrs = user("ignored", &["admin"]);
    attrs.remove("uid");

    let err = chain.process(attrs).unwrap_err();
    assert!(err.is_missing_attribute());
    assert_eq!(err.to_string(), "missing attribute: uid");
    Ok(())
}

/// No matching group: session attributes are set, `Role` is absent.
#[test]
fn test_no_match_sets_session_only() -> anyhow::Result<()> {
    let chain = fixture_chain(true)?;
    let out = chain.process(user("alice", &["nobody"]))?;

    assert_eq!(out.values(ROLE_SESSION_NAME_ATTRIBUTE), ["alice"]);
    assert_eq!(out.values(SESSION_DURATION_ATTRIBUTE), ["3600"]);
    assert!(!out.contains(ROLE_ATTRIBUTE));
    Ok(())
}

/// A configuration without an account id never gets built.
#[test]
fn test_missing_account_fails_construction() {
    let options = json!({
        "iam.provider": "idp1",
        "iam.roles": {"Admins": "admin"}
    });
    let serde_json::Value::Object(options) = options else {
        unreachable!()
    };

    let err = RoleMappingConfig::from_options(&options).unwrap_err();
    assert_eq!(err, ConfigError::MissingAccountId);
}

/// Attributes arriving as JSON with scalar values are accepted.
#[test]
fn test_host_json_attributes() -> anyhow::Result<()> {
    let chain = fixture_chain(false)?;
    let attrs = serde_json::from_str(r#"{"uid": "carol", "group": "viewer"}"#)?;

    let out = chain.process(attrs)?;
    assert_eq!(out.values(ROLE_ATTRIBUTE), [role_value("Viewers")]);

    let json = serde_json::to_value(&out)?;
    assert_eq!(json[ROLE_SESSION_NAME_ATTRIBUTE], json!(["carol"]));
    Ok(())
}
