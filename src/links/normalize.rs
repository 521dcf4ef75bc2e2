//! Conversion of loosely shaped link map entries into [`LinkGroup`]s.
//!
//! An entry may be a bare array of items, an object with `items`, an object
//! with `sections`, or anything else. Classification happens once in
//! [`RawEntry::from_value`]; [`normalize`] is total over the result.

use log::warn;
use serde::Deserialize;
use serde_json::Value;

use super::error::LinkMapError;
use super::types::{GroupEntries, LinkGroup, LinkItem, Section};

/// Shape of a link map entry as found in the document.
#[derive(Clone, Debug, PartialEq)]
pub enum RawEntry {
	/// Bare array of items; the title is always defaulted.
	List(Vec<Value>),
	/// Object whose `sections` is an array. Wins over `items`.
	Sectioned {
		title: Option<String>,
		sections: Vec<Value>,
	},
	/// Object whose `items` is an array.
	Flat { title: Option<String>, items: Vec<Value> },
	/// Present but neither of the accepted shapes.
	Malformed {
		title: Option<String>,
		reason: &'static str,
	},
	/// Key absent from the document.
	Missing,
}

/// Normalized group plus everything that had to be papered over.
#[derive(Debug)]
pub struct Normalized {
	pub group: LinkGroup,
	pub diagnostics: Vec<LinkMapError>,
}

impl RawEntry {
	pub fn from_value(value: Option<&Value>) -> Self {
		let Some(value) = value else {
			return RawEntry::Missing;
		};
		match value {
			Value::Array(items) => RawEntry::List(items.clone()),
			Value::Object(obj) => {
				let title = obj
					.get("title")
					.and_then(Value::as_str)
					.map(str::to_owned);
				if let Some(sections) = obj.get("sections").and_then(Value::as_array) {
					RawEntry::Sectioned {
						title,
						sections: sections.clone(),
					}
				} else if let Some(items) = obj.get("items").and_then(Value::as_array) {
					RawEntry::Flat {
						title,
						items: items.clone(),
					}
				} else {
					RawEntry::Malformed {
						title,
						reason: "missing an `items` or `sections` array",
					}
				}
			}
			Value::Null => RawEntry::Malformed {
				title: None,
				reason: "null",
			},
			_ => RawEntry::Malformed {
				title: None,
				reason: "neither an array nor an object",
			},
		}
	}
}

/// Maps one raw entry to a [`LinkGroup`], never failing.
///
/// Diagnostics are logged as warnings and also returned to the caller.
pub fn normalize(raw: RawEntry, key: &str, default_title: &str) -> Normalized {
	let mut diagnostics = Vec::new();
	let pick_title = |title: Option<String>| {
		title
			.filter(|t| !t.is_empty())
			.unwrap_or_else(|| default_title.to_owned())
	};

	let group = match raw {
		RawEntry::List(items) => LinkGroup {
			title: default_title.to_owned(),
			entries: GroupEntries::Flat(convert_items(&items, key, &mut diagnostics)),
		},
		RawEntry::Sectioned { title, sections } => LinkGroup {
			title: pick_title(title),
			entries: GroupEntries::Sectioned(
				sections
					.iter()
					.enumerate()
					.map(|(index, section)| convert_section(section, index, key, &mut diagnostics))
					.collect(),
			),
		},
		RawEntry::Flat { title, items } => LinkGroup {
			title: pick_title(title),
			entries: GroupEntries::Flat(convert_items(&items, key, &mut diagnostics)),
		},
		RawEntry::Malformed { title, reason } => {
			diagnostics.push(LinkMapError::MalformedEntry {
				key: key.to_owned(),
				reason,
			});
			LinkGroup::empty(pick_title(title))
		}
		RawEntry::Missing => {
			diagnostics.push(LinkMapError::MalformedEntry {
				key: key.to_owned(),
				reason: "missing",
			});
			LinkGroup::empty(default_title)
		}
	};

	for diagnostic in &diagnostics {
		warn!("{diagnostic}");
	}
	Normalized { group, diagnostics }
}

fn convert_items(items: &[Value], key: &str, diagnostics: &mut Vec<LinkMapError>) -> Vec<LinkItem> {
	items
		.iter()
		.enumerate()
		.map(|(index, value)| {
			LinkItem::deserialize(value).unwrap_or_else(|err| {
				diagnostics.push(LinkMapError::MalformedItem {
					key: key.to_owned(),
					index,
					reason: err.to_string(),
				});
				LinkItem::default()
			})
		})
		.collect()
}

fn convert_section(
	value: &Value,
	index: usize,
	key: &str,
	diagnostics: &mut Vec<LinkMapError>,
) -> Section {
	let Some(obj) = value.as_object() else {
		diagnostics.push(LinkMapError::MalformedSection {
			key: key.to_owned(),
			index,
		});
		return Section::default();
	};
	let items = obj
		.get("items")
		.and_then(Value::as_array)
		.map(|items| convert_items(items, key, diagnostics))
		.unwrap_or_default();
	Section {
		subtitle: obj
			.get("subtitle")
			.and_then(Value::as_str)
			.map(str::to_owned),
		items,
	}
}
