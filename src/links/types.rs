use serde::Deserialize;

/// Label shown for an item whose configuration has no label.
pub const UNTITLED_LABEL: &str = "(untitled)";

/// A single outbound link in a panel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LinkItem {
	#[serde(default)]
	pub label: Option<String>,
	#[serde(default)]
	pub href: Option<String>,
}

/// A titled run of items inside a sectioned panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Section {
	pub subtitle: Option<String>,
	pub items: Vec<LinkItem>,
}

/// Body of a panel: either one flat list or a list of sections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupEntries {
	Flat(Vec<LinkItem>),
	Sectioned(Vec<Section>),
}

/// Canonical panel model produced from one link map entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkGroup {
	pub title: String,
	pub entries: GroupEntries,
}

/// True when `href` is an absolute `http://` or `https://` URL.
pub fn is_external(href: Option<&str>) -> bool {
	href.is_some_and(|h| h.starts_with("http://") || h.starts_with("https://"))
}

impl LinkItem {
	#[cfg(test)]
	pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
		Self {
			label: Some(label.into()),
			href: Some(href.into()),
		}
	}

	pub fn display_label(&self) -> &str {
		match self.label.as_deref() {
			Some(label) if !label.is_empty() => label,
			_ => UNTITLED_LABEL,
		}
	}

	/// Navigation target; items without an href point at the page itself.
	pub fn target_href(&self) -> &str {
		match self.href.as_deref() {
			Some(href) if !href.is_empty() => href,
			_ => "#",
		}
	}

	pub fn is_external(&self) -> bool {
		is_external(self.href.as_deref())
	}
}

impl Section {
	/// Subtitle worth rendering: present and not just whitespace.
	pub fn visible_subtitle(&self) -> Option<&str> {
		self.subtitle.as_deref().map(str::trim).filter(|s| !s.is_empty())
	}
}

impl LinkGroup {
	pub fn empty(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			entries: GroupEntries::Flat(Vec::new()),
		}
	}
}
