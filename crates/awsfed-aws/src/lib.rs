//! # awsfed-aws
//!
//! AWS IAM attribute mapping for SAML federation.
//!
//! Given the attributes already asserted about an authenticated user, the
//! [`SetAwsAttributes`] step adds the attributes IAM needs for SAML-based
//! role assumption:
//!
//! - `https://aws.amazon.com/SAML/Attributes/RoleSessionName` - copied from
//!   the configured uid attribute
//! - `https://aws.amazon.com/SAML/Attributes/SessionDuration` - session lifetime
//! - `https://aws.amazon.com/SAML/Attributes/Role` - one role/provider ARN pair
//!   per IAM role granted by the user's local roles
//!
//! # Example
//!
//! ```
//! use awsfed_aws::{transform, RoleMappingConfig, ROLE_ATTRIBUTE};
//! use awsfed_spi::Attributes;
//!
//! let config = RoleMappingConfig::builder()
//!     .account_id("123456789012")
//!     .provider_name("idp1")
//!     .role("Admins", ["admin"])
//!     .build()
//!     .unwrap();
//!
//! let mut attributes = Attributes::new();
//! attributes.set("uid", "alice");
//! attributes.set("group", "admin");
//!
//! let out = transform(attributes, &config).unwrap();
//! assert_eq!(
//!     out.values(ROLE_ATTRIBUTE),
//!     ["arn:aws:iam::123456789012:role/Admins,arn:aws:iam::123456789012:saml-provider/idp1"]
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod coerce;
pub mod config;
pub mod constants;
pub mod error;
pub mod role_pair;
pub mod transformer;

pub use config::{RoleMapping, RoleMappingConfig, RoleMappingConfigBuilder};
pub use constants::{ROLE_ATTRIBUTE, ROLE_SESSION_NAME_ATTRIBUTE, SESSION_DURATION_ATTRIBUTE};
pub use error::{ConfigError, ConfigResult, MissingAttributeError, RolePairError};
pub use role_pair::RolePair;
pub use transformer::{apply, local_roles, matching_roles, transform, SetAwsAttributes};
