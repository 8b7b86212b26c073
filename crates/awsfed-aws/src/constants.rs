//! AWS SAML attribute names, configuration keys and defaults.

/// Role/provider ARN pairs the user may assume.
pub const ROLE_ATTRIBUTE: &str = "https://aws.amazon.com/SAML/Attributes/Role";

/// Identifier of the federated session.
pub const ROLE_SESSION_NAME_ATTRIBUTE: &str =
    "https://aws.amazon.com/SAML/Attributes/RoleSessionName";

/// Lifetime of the federated session in seconds.
pub const SESSION_DURATION_ATTRIBUTE: &str =
    "https://aws.amazon.com/SAML/Attributes/SessionDuration";

// ============================================================================
// Configuration keys
// ============================================================================

/// Name of the attribute holding the session identifier.
pub const KEY_UID_ATTRIBUTE: &str = "attribute.uid";

/// Name(s) of the attributes holding local role identifiers.
pub const KEY_ROLE_ATTRIBUTE: &str = "attribute.role";

/// Session duration in seconds.
pub const KEY_SESSION_DURATION: &str = "session.duration";

/// AWS account id.
pub const KEY_AWS_ACCOUNT: &str = "aws.account";

/// Name of the SAML provider registration in IAM.
pub const KEY_IAM_PROVIDER: &str = "iam.provider";

/// Emit every matching role instead of the first.
pub const KEY_MATCH_ALL: &str = "match.all";

/// Map of IAM role name to granting local roles.
pub const KEY_IAM_ROLES: &str = "iam.roles";

// ============================================================================
// Defaults and limits
// ============================================================================

/// Default uid attribute name.
pub const DEFAULT_UID_ATTRIBUTE: &str = "uid";

/// Default role attribute name.
pub const DEFAULT_ROLE_ATTRIBUTE: &str = "group";

/// Default session duration (one hour).
pub const DEFAULT_SESSION_DURATION_SECS: u32 = 3600;

/// Shortest session IAM accepts (15 minutes).
pub const MIN_SESSION_DURATION_SECS: u32 = 900;

/// Longest session IAM accepts (12 hours).
pub const MAX_SESSION_DURATION_SECS: u32 = 43_200;

/// Length of an AWS account id.
pub const ACCOUNT_ID_LEN: usize = 12;
