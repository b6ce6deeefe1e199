//! Presentation boundary: pages, notices, and redirects.
//!
//! HTML rendering belongs to an external template engine. Handlers hand it
//! a [`Page`], a JSON envelope naming the template plus the data context
//! and any one-shot notices:
//!
//! ```json
//! {
//!   "template": "pages/show_venue.html",
//!   "notices": [{ "level": "success", "message": "Venue X was successfully listed!" }],
//!   "context": { "venue": { "id": 1, "name": "X" } }
//! }
//! ```
//!
//! Redirects cannot carry a body, so their notice travels in the
//! [`NOTICE_HEADER`] response header.

use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;

/// Response header carrying the notice of a redirect.
pub const NOTICE_HEADER: &str = "x-notice";

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// The operation went through.
    Success,
    /// The operation was rolled back.
    Error,
}

/// A one-shot user notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Text shown to the user.
    pub message: String,
}

impl Notice {
    /// A success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// An error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Encodes the notice as `<level>: <message>` for [`NOTICE_HEADER`].
    ///
    /// Returns `None` unless the message is printable ASCII; header values
    /// carry no charset, so anything else is left to the page itself.
    #[must_use]
    pub fn header_value(&self) -> Option<HeaderValue> {
        if !self.message.is_ascii() {
            return None;
        }
        let level = match self.level {
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        };
        HeaderValue::from_str(&format!("{level}: {}", self.message)).ok()
    }
}

/// A page handed to the template engine.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// Template to render, e.g. `pages/venues.html`.
    pub template: &'static str,
    /// HTTP status of the response.
    #[serde(skip)]
    pub status: StatusCode,
    /// Notices to show once.
    pub notices: Vec<Notice>,
    /// Data context for the template.
    pub context: serde_json::Value,
}

impl Page {
    /// An empty `200 OK` page for `template`.
    #[must_use]
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            status: StatusCode::OK,
            notices: Vec::new(),
            context: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// Overrides the response status.
    #[must_use]
    pub const fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Appends a notice.
    #[must_use]
    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }

    /// Replaces the whole context with the serialised `context`.
    #[must_use]
    pub fn with_context<T: Serialize>(mut self, context: &T) -> Self {
        self.context = serde_json::to_value(context).unwrap_or_else(|e| {
            tracing::warn!(template = self.template, error = %e, "page context not serializable");
            serde_json::Value::Null
        });
        self
    }

    /// Sets one top-level context key.
    #[must_use]
    pub fn with<T: Serialize>(mut self, key: &str, value: &T) -> Self {
        let value = serde_json::to_value(value).unwrap_or_else(|e| {
            tracing::warn!(template = self.template, key, error = %e, "page value not serializable");
            serde_json::Value::Null
        });
        if let serde_json::Value::Object(map) = &mut self.context {
            map.insert(key.to_string(), value);
        }
        self
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// `303 See Other` to `location`, carrying `notice` if it fits in a header.
#[must_use]
pub fn redirect(location: &str, notice: Option<&Notice>) -> Response {
    let mut response = Redirect::to(location).into_response();
    if let Some(value) = notice.and_then(Notice::header_value) {
        response.headers_mut().insert(NOTICE_HEADER, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use axum::http::header;

    use super::*;

    fn redirect_location(response: &Response) -> Option<&str> {
        if !response.status().is_redirection() {
            return None;
        }
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    #[test]
    fn page_collects_context_keys() {
        let page = Page::new("pages/search_venues.html")
            .with("search_term", &"Hop")
            .with_notice(Notice::success("done"));
        assert_eq!(
            page.context.get("search_term").and_then(|v| v.as_str()),
            Some("Hop")
        );
        assert_eq!(page.notices.len(), 1);
        assert_eq!(page.status, StatusCode::OK);
    }

    #[test]
    fn redirect_is_see_other_with_notice_header() {
        let notice = Notice::error("Venue 3 couldn't be deleted!");
        let response = redirect("/venues", Some(&notice));
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(redirect_location(&response), Some("/venues"));
        assert_eq!(
            response
                .headers()
                .get(NOTICE_HEADER)
                .and_then(|v| v.to_str().ok()),
            Some("error: Venue 3 couldn't be deleted!")
        );
    }

    #[test]
    fn non_ascii_notice_is_dropped_from_header() {
        let notice = Notice::success("Café Ünderground was successfully updated!");
        assert!(notice.header_value().is_none());
        let response = redirect("/venues/1", Some(&notice));
        assert!(response.headers().get(NOTICE_HEADER).is_none());
    }
}
