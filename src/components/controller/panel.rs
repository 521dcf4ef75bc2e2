use leptos::prelude::*;

use crate::links::{GroupEntries, LinkGroup, LinkItem, Section};

/// Floating menu listing a group's links.
///
/// Empty groups still render the frame and title, with no entries.
#[component]
pub fn Panel(group: LinkGroup, #[prop(into)] mobile: Signal<bool>) -> impl IntoView {
	let LinkGroup { title, entries } = group;
	let title = (!title.is_empty()).then(|| view! { <div class="panel-title">{title}</div> });

	let body = match entries {
		GroupEntries::Flat(items) => link_list(items).into_any(),
		GroupEntries::Sectioned(sections) => view! {
			<div class="panel-sections">
				{sections.into_iter().map(section_view).collect_view()}
			</div>
		}
		.into_any(),
	};

	let class = move || {
		if mobile.get() {
			"panel panel-mobile"
		} else {
			"panel panel-desktop"
		}
	};

	view! {
		<div class=class role="menu">
			{title}
			{body}
		</div>
	}
}

fn section_view(section: Section) -> impl IntoView {
	let subtitle = section
		.visible_subtitle()
		.map(str::to_owned)
		.map(|subtitle| view! { <div class="panel-subtitle">{subtitle}</div> });
	view! {
		<div class="panel-section">
			{subtitle}
			{link_list(section.items)}
		</div>
	}
}

fn link_list(items: Vec<LinkItem>) -> impl IntoView {
	view! {
		<ul class="panel-links">
			{items.into_iter().map(link_entry).collect_view()}
		</ul>
	}
}

fn link_entry(item: LinkItem) -> impl IntoView {
	let external = item.is_external();
	let href = item.target_href().to_owned();
	let label = item.display_label().to_owned();
	view! {
		<li>
			<a
				class="panel-link"
				role="menuitem"
				href=href
				target=external.then_some("_blank")
				rel=external.then_some("noopener noreferrer")
			>
				{label}
			</a>
		</li>
	}
}
