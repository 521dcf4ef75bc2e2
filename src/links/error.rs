use thiserror::Error;

/// Problems found while reading the link map.
///
/// None of these are fatal. Loading degrades to defaulted groups and reports
/// what it skipped through these values and the log.
#[derive(Debug, Error)]
pub enum LinkMapError {
	#[error("link map is not valid JSON: {0}")]
	InvalidJson(#[from] serde_json::Error),

	#[error("link map must be a JSON object keyed by shape name")]
	NotAnObject,

	#[error("unknown link map key `{0}` ignored")]
	UnknownKey(String),

	#[error("link map entry `{key}` is {reason}; rendering an empty panel")]
	MalformedEntry { key: String, reason: &'static str },

	#[error("section {index} of `{key}` is not an object; rendering it empty")]
	MalformedSection { key: String, index: usize },

	#[error("item {index} of `{key}` is malformed ({reason}); rendering a placeholder")]
	MalformedItem {
		key: String,
		index: usize,
		reason: String,
	},
}
