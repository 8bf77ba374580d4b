// src/templates/mod.rs
pub mod signup;

mod layout;

pub use layout::render_page;

/// Where `wasm-pack build --target web` puts the generated loader.
pub const DEFAULT_SCRIPT_SRC: &str = "/pkg/newsletter_signup.js";

// Helper function for HTML escaping
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
