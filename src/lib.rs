//! Leptos client-side landing page: four shape controls with link panels.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

// Modules
mod components;
mod links;
mod pages;
mod shape;

// Top-Level pages
use crate::pages::home::Home;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Initialize logging and panic hooks for the WASM target.
///
/// A panic is printed to the console and replaces the page with its message.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	std::panic::set_hook(Box::new(crate::pages::error::show_panic));
	info!("Logging initialized");
}

/// The single landing page with its document metadata.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="ETHPAPERS.XYZ" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content="Ethereum Papers: books, NFTs, GPTs and the author." />

		<Home />
	}
}
