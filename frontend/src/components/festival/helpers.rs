//! Utility functions for the festival lookup component.
//!
//! - **Endpoint resolution**: the backend base URL is taken from the
//!   `FESTIVAL_API_BASE_URL` variable at build time. When unset the front end
//!   talks to the server it was loaded from.
//! - **Backend call**: posting the festival name and decoding the record.
//! - **User Feedback**: temporary "toast" notifications for failures.

use common::model::festival::FestivalRecord;
use common::requests::GenerateFestivalRequest;
use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const GENERATE_PATH: &str = "/generate-festival";

/// Backend base URL baked in at build time, without a trailing slash.
pub fn api_base_url() -> &'static str {
    option_env!("FESTIVAL_API_BASE_URL")
        .unwrap_or("")
        .trim_end_matches('/')
}

/// Full URL of the lookup endpoint for a given base.
pub fn endpoint_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), GENERATE_PATH)
}

/// Posts `festival` to the backend and decodes the returned record.
///
/// Any non-200 answer, transport failure or undecodable body is reported as
/// an `Err` with a short reason meant for the console, not for the user.
pub async fn fetch_festival(festival: String) -> Result<FestivalRecord, String> {
    let url = endpoint_url(api_base_url());
    let response = Request::post(&url)
        .json(&GenerateFestivalRequest { festival })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(format!("Server error {}: {}", response.status(), body));
    }

    response
        .json::<FestivalRecord>()
        .await
        .map_err(|e| e.to_string())
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast removes itself after a few seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(4000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
