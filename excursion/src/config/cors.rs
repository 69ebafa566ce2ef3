use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
	/// Allowed origins: exact strings, `"*"` for everything, or
	/// `"*suffix"` / `"prefix*"` wildcard patterns.
	/// An empty list disables cross-origin access.
	#[serde(default)]
	pub allowed_origins: Vec<String>,
}
