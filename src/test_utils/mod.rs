//! Shared helpers for tests.

mod html;
mod http;

pub(crate) use html::{assert_valid_html, parse_html_document};
pub(crate) use http::assert_hx_redirect;
