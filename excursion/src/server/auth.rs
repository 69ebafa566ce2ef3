//! Authentication seam.
//!
//! Token issuance and JWT validation live outside this repository; the
//! server only needs an authenticated principal with a role claim. Real
//! deployments plug their validator in through [`TokenValidator`]; the
//! default [`AllowAll`] keeps the binary usable standalone.

use anyhow::Result;
use async_trait::async_trait;

/// Role claim carried by an authenticated principal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
	Admin,
	Creator,
	User,
}

impl Role {
	/// Whether this role may upload or modify content.
	pub fn can_manage_content(&self) -> bool {
		matches!(self, Role::Admin | Role::Creator)
	}
}

#[derive(Clone, Debug)]
pub struct Principal {
	pub subject: String,
	pub role: Role,
}

/// External collaborator seam for token validation.
#[async_trait]
pub trait TokenValidator: Send + Sync {
	/// Validate the value of the `Authorization: Bearer` header, when
	/// present. Returning an error rejects the request with 401.
	async fn validate(&self, token: Option<&str>) -> Result<Principal>;
}

/// Accepts every request as an anonymous admin.
pub struct AllowAll;

#[async_trait]
impl TokenValidator for AllowAll {
	async fn validate(&self, _token: Option<&str>) -> Result<Principal> {
		Ok(Principal {
			subject: "anonymous".to_string(),
			role: Role::Admin,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn content_management_roles() {
		assert!(Role::Admin.can_manage_content());
		assert!(Role::Creator.can_manage_content());
		assert!(!Role::User.can_manage_content());
	}

	#[tokio::test]
	async fn allow_all_accepts_missing_tokens() {
		let principal = AllowAll.validate(None).await.unwrap();
		assert_eq!(principal.role, Role::Admin);
	}
}
