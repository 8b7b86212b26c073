//! Role/provider ARN pairs carried in the `Role` attribute.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RolePairError;

const ARN_PREFIX: &str = "arn:aws:iam::";
const ROLE_MARKER: &str = ":role/";
const PROVIDER_MARKER: &str = ":saml-provider/";

/// An IAM role ARN paired with the SAML provider ARN allowed to assume it.
///
/// Rendered as `<role arn>,<provider arn>`. IAM also accepts the reverse
/// order, so parsing takes either.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RolePair {
    /// `arn:aws:iam::<account>:role/<name>`
    pub role_arn: String,
    /// `arn:aws:iam::<account>:saml-provider/<name>`
    pub provider_arn: String,
}

impl RolePair {
    /// Builds the pair for a role and provider in one account.
    #[must_use]
    pub fn new(account_id: &str, role_name: &str, provider_name: &str) -> Self {
        let account = format!("{ARN_PREFIX}{account_id}");
        Self {
            role_arn: format!("{account}{ROLE_MARKER}{role_name}"),
            provider_arn: format!("{account}{PROVIDER_MARKER}{provider_name}"),
        }
    }

    /// Account id from the role ARN.
    #[must_use]
    pub fn account_id(&self) -> &str {
        account_of(&self.role_arn).unwrap_or_default()
    }

    /// Role name (including any path).
    #[must_use]
    pub fn role_name(&self) -> &str {
        resource_of(&self.role_arn, ROLE_MARKER).unwrap_or_default()
    }

    /// SAML provider name.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        resource_of(&self.provider_arn, PROVIDER_MARKER).unwrap_or_default()
    }
}

impl fmt::Display for RolePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.role_arn, self.provider_arn)
    }
}

impl FromStr for RolePair {
    type Err = RolePairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| RolePairError {
            value: s.to_string(),
            reason,
        };

        let (first, second) = s
            .split_once(',')
            .ok_or_else(|| invalid("expected two comma-separated ARNs"))?;
        let (first, second) = (first.trim(), second.trim());

        let (role_arn, provider_arn) = if first.contains(ROLE_MARKER) {
            (first, second)
        } else {
            (second, first)
        };

        if resource_of(role_arn, ROLE_MARKER).is_none() {
            return Err(invalid("missing IAM role ARN"));
        }
        if resource_of(provider_arn, PROVIDER_MARKER).is_none() {
            return Err(invalid("missing SAML provider ARN"));
        }

        Ok(Self {
            role_arn: role_arn.to_string(),
            provider_arn: provider_arn.to_string(),
        })
    }
}

fn account_of(arn: &str) -> Option<&str> {
    arn.strip_prefix(ARN_PREFIX)?.split(':').next()
}

fn resource_of<'a>(arn: &'a str, marker: &str) -> Option<&'a str> {
    let rest = arn.strip_prefix(ARN_PREFIX)?;
    let (_, name) = rest.split_once(marker)?;
    (!name.is_empty() && !name.contains(',')).then_some(name)
}
