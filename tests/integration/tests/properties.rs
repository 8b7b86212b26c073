//! Laws that hold for every input.

use std::sync::Arc;
use std::thread;

use awsfed_aws::{
    apply, local_roles, matching_roles, transform, RolePair, RoleMappingConfig, ROLE_ATTRIBUTE,
    ROLE_SESSION_NAME_ATTRIBUTE, SESSION_DURATION_ATTRIBUTE,
};

use crate::common::{fixture_config, user, ACCOUNT, PROVIDER};

const GROUP_SETS: &[&[&str]] = &[
    &[],
    &["nobody"],
    &["admin"],
    &["viewer"],
    &["admin", "viewer"],
    &["viewer", "admin", "other"],
];

/// Missing account or provider always fails; supplying both always succeeds.
#[test]
fn test_required_fields() {
    for (account, provider) in [(None, None), (Some(ACCOUNT), None), (None, Some(PROVIDER))] {
        let mut builder = RoleMappingConfig::builder();
        if let Some(account) = account {
            builder = builder.account_id(account);
        }
        if let Some(provider) = provider {
            builder = builder.provider_name(provider);
        }
        let err = builder.build().unwrap_err();
        assert!(err.is_missing_required(), "unexpected error: {err}");
    }

    assert!(RoleMappingConfig::builder()
        .account_id(ACCOUNT)
        .provider_name(PROVIDER)
        .build()
        .is_ok());
}

/// A failed call leaves the caller's attributes untouched.
#[test]
fn test_failure_has_no_partial_mutation() -> anyhow::Result<()> {
    let config = fixture_config(true)?;
    for uid in [None, Some("")] {
        let mut attrs = user("x", &["admin", "viewer"]);
        match uid {
            Some(v) => attrs.set("uid", v),
            None => {
                attrs.remove("uid");
            }
        }
        let before = attrs.clone();

        assert!(apply(&mut attrs, &config).is_err());
        assert_eq!(attrs, before);
        assert!(!attrs.contains(ROLE_SESSION_NAME_ATTRIBUTE));
        assert!(!attrs.contains(ROLE_ATTRIBUTE));
    }
    Ok(())
}

/// Session attributes only depend on the input, not on prior calls.
#[test]
fn test_session_fields_are_idempotent() -> anyhow::Result<()> {
    let config = fixture_config(false)?;
    let input = user("alice", &["admin"]);

    let first = transform(input.clone(), &config)?;
    let second = transform(input, &config)?;

    for name in [ROLE_SESSION_NAME_ATTRIBUTE, SESSION_DURATION_ATTRIBUTE] {
        assert_eq!(first.values(name), second.values(name));
    }
    assert_eq!(first, second);
    Ok(())
}

/// First-match yields at most one role; match-all yields one per matching entry.
#[test]
fn test_match_mode_law() -> anyhow::Result<()> {
    let first = fixture_config(false)?;
    let all = fixture_config(true)?;

    for groups in GROUP_SETS {
        let attrs = user("alice", groups);
        let local = local_roles(&attrs, all.role_attributes());
        let expected = all
            .role_map()
            .iter()
            .filter(|m| m.is_granted_by(&local))
            .count();

        let out = transform(attrs.clone(), &first)?;
        assert!(out.values(ROLE_ATTRIBUTE).len() <= 1, "groups: {groups:?}");
        assert_eq!(out.values(ROLE_ATTRIBUTE).len(), expected.min(1));

        let out = transform(attrs.clone(), &all)?;
        assert_eq!(out.values(ROLE_ATTRIBUTE).len(), expected, "groups: {groups:?}");
        assert_eq!(matching_roles(&all, &local).len(), expected);
    }
    Ok(())
}

/// Every emitted role value is an exact role/provider ARN pair.
#[test]
fn test_arn_format_law() -> anyhow::Result<()> {
    let config = fixture_config(true)?;
    let out = transform(user("alice", &["admin", "viewer"]), &config)?;

    for value in out.values(ROLE_ATTRIBUTE) {
        let pair: RolePair = value.parse()?;
        assert_eq!(pair.account_id(), ACCOUNT);
        assert_eq!(pair.provider_name(), PROVIDER);
        assert_eq!(
            value,
            &format!(
                "arn:aws:iam::{ACCOUNT}:role/{},arn:aws:iam::{ACCOUNT}:saml-provider/{PROVIDER}",
                pair.role_name()
            )
        );
    }
    Ok(())
}

/// One configuration serves concurrent requests without locking.
#[test]
fn test_shared_config_across_threads() -> anyhow::Result<()> {
    let config = fixture_config(true)?;

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let config = Arc::clone(&config);
            thread::spawn(move || {
                let uid = format!("user{i}");
                let groups: &[&str] = if i % 2 == 0 { &["admin"] } else { &["viewer"] };
                transform(user(&uid, groups), &config).map(|out| (uid, out))
            })
        })
        .collect();

    for handle in handles {
        let (uid, out) = handle.join().expect("worker panicked")?;
        assert_eq!(out.values(ROLE_SESSION_NAME_ATTRIBUTE), [uid]);
        assert_eq!(out.values(ROLE_ATTRIBUTE).len(), 1);
    }
    Ok(())
}
