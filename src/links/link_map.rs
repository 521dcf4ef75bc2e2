use log::{debug, info, warn};
use serde_json::{Map, Value};

use super::error::LinkMapError;
use super::normalize::{Normalized, RawEntry, normalize};
use super::types::LinkGroup;
use crate::shape::ShapeKind;

/// Link map shipped with the page.
pub const LINK_MAP_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/links.json"));

/// Parsed link map document: shape key to raw entry.
#[derive(Clone, Debug, Default)]
pub struct LinkMap {
	entries: Map<String, Value>,
}

impl LinkMap {
	pub fn parse(json: &str) -> Result<Self, LinkMapError> {
		match serde_json::from_str::<Value>(json)? {
			Value::Object(entries) => Ok(Self { entries }),
			_ => Err(LinkMapError::NotAnObject),
		}
	}

	/// Keys that do not name one of the four shapes.
	pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
		self.entries
			.keys()
			.map(String::as_str)
			.filter(|key| ShapeKind::from_key(key).is_none())
	}

	pub fn raw_entry(&self, shape: ShapeKind) -> RawEntry {
		RawEntry::from_value(self.entries.get(shape.key()))
	}

	pub fn normalize(&self, shape: ShapeKind) -> Normalized {
		normalize(self.raw_entry(shape), shape.key(), shape.default_title())
	}

	/// Normalized groups for all four shapes, in layout order.
	pub fn groups(&self) -> [(ShapeKind, LinkGroup); 4] {
		for key in self.unknown_keys() {
			warn!("{}", LinkMapError::UnknownKey(key.to_owned()));
		}
		ShapeKind::ALL.map(|shape| {
			let Normalized { group, diagnostics } = self.normalize(shape);
			if !diagnostics.is_empty() {
				debug!("`{shape}` degraded with {} diagnostic(s)", diagnostics.len());
			}
			(shape, group)
		})
	}
}

/// Reads the link map, degrading to defaulted empty groups when the document
/// itself cannot be used.
pub fn load_groups(json: &str) -> [(ShapeKind, LinkGroup); 4] {
	let map = LinkMap::parse(json).unwrap_or_else(|err| {
		warn!("{err}; every panel falls back to its default title");
		LinkMap::default()
	});
	let groups = map.groups();
	info!("Loaded link map with {} configured shapes", map.entries.len());
	groups
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::links::types::{GroupEntries, LinkItem};

	#[test]
	fn bundled_link_map_covers_every_shape() {
		let map = LinkMap::parse(LINK_MAP_JSON).unwrap();
		assert_eq!(map.unknown_keys().count(), 0);
		for shape in ShapeKind::ALL {
			let out = map.normalize(shape);
			assert!(out.diagnostics.is_empty(), "{shape}: {:?}", out.diagnostics);
		}
	}

	#[test]
	fn bundled_titles_and_links() {
		let groups = load_groups(LINK_MAP_JSON);
		let (shape, cross) = &groups[3];
		assert_eq!(*shape, ShapeKind::Cross);
		assert_eq!(cross.title, "Ki Chong Tran");
		let GroupEntries::Flat(items) = &cross.entries else {
			panic!("expected flat entries");
		};
		assert!(items[0].is_external());
		assert!(!items[1].is_external());
	}

	#[test]
	fn invalid_json_degrades_to_defaults() {
		assert!(matches!(
			LinkMap::parse("{ not json"),
			Err(LinkMapError::InvalidJson(_))
		));
		let groups = load_groups("{ not json");
		for (shape, group) in groups {
			assert_eq!(group, LinkGroup::empty(shape.default_title()));
		}
	}

	#[test]
	fn top_level_must_be_an_object() {
		assert!(matches!(LinkMap::parse("[]"), Err(LinkMapError::NotAnObject)));
		let groups = load_groups("[1, 2]");
		assert!(groups.iter().all(|(shape, g)| g.title == shape.default_title()));
	}

	#[test]
	fn tolerates_mixed_entry_shapes() {
		let map = LinkMap::parse(
			r##"{
				"triangle": [{ "label": "A", "href": "#" }],
				"square": { "title": "C", "items": [{ "label": "B", "href": "http://x" }] },
				"circle": { "sections": [{ "subtitle": "One", "items": [] }] },
				"hexagon": []
			}"##,
		)
		.unwrap();
		assert_eq!(map.unknown_keys().collect::<Vec<_>>(), vec!["hexagon"]);

		let [triangle, square, circle, cross] = map.groups().map(|(_, group)| group);
		assert_eq!(triangle.title, "NFTs");
		assert_eq!(
			triangle.entries,
			GroupEntries::Flat(vec![LinkItem::new("A", "#")])
		);
		assert_eq!(square.title, "C");
		assert!(matches!(circle.entries, GroupEntries::Sectioned(ref s) if s.len() == 1));
		assert_eq!(cross, LinkGroup::empty("Author"));
	}
}
