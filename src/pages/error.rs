use std::panic::PanicHookInfo;

use log::error;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

/// Replaces the contents of `root` with a minimal error screen.
///
/// Built with plain DOM calls so it still works once the reactive runtime
/// has panicked.
pub fn render_error_screen(root: &HtmlElement, message: &str) -> Result<(), JsValue> {
	let Some(document) = root.owner_document() else {
		return Err(JsValue::from_str("error screen root is not attached to a document"));
	};
	let screen = document.create_element("div")?;
	screen.set_class_name("error-screen");
	let heading = document.create_element("h2")?;
	heading.set_text_content(Some("Error"));
	let detail = document.create_element("pre")?;
	detail.set_text_content(Some(message));
	screen.append_child(&heading)?;
	screen.append_child(&detail)?;

	root.set_inner_html("");
	root.append_child(&screen)?;
	Ok(())
}

/// Text of the panic payload, falling back to the full panic report.
pub fn panic_message(info: &PanicHookInfo<'_>) -> String {
	let payload = info.payload();
	payload
		.downcast_ref::<&str>()
		.map(|s| (*s).to_owned())
		.or_else(|| payload.downcast_ref::<String>().cloned())
		.unwrap_or_else(|| info.to_string())
}

/// Panic hook: reports to the console, then swaps the page for the error screen.
pub fn show_panic(info: &PanicHookInfo<'_>) {
	console_error_panic_hook::hook(info);
	let Some(body) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body())
	else {
		return;
	};
	if let Err(err) = render_error_screen(&body, &panic_message(info)) {
		error!("Failed to show the error screen: {err:?}");
	}
}
