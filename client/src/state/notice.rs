//! Page notice derived from the login URL's query string.
//!
//! The account system sends users back to `/login?logout=true` after a
//! logout and `/login?logout=api_error` when it could not reach its backend.
//! The notice is computed once, before the form becomes interactive.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

pub const LOGGED_OUT_MESSAGE: &str = "You've been logged out successfully.";
pub const API_ERROR_MESSAGE: &str = "Error: Unable to connect to the WP Shopify account system. Please try again later or contact us directly.";

const LOGGED_OUT_FLAG: &str = "logout=true";
const API_ERROR_FLAG: &str = "logout=api_error";

/// Read-only access to the query string the page was opened with.
pub trait NoticeSource {
    fn query_string(&self) -> String;
}

impl NoticeSource for str {
    fn query_string(&self) -> String {
        self.to_owned()
    }
}

impl NoticeSource for String {
    fn query_string(&self) -> String {
        self.clone()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Banner shown above the login form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageNotice {
    pub kind: NoticeKind,
    pub multi_line: bool,
    pub message: &'static str,
}

impl PageNotice {
    /// Derive the notice from `source`, if any.
    ///
    /// Flags are matched as substrings of the whole query string; when both
    /// appear, the logout confirmation wins.
    pub fn derive<S: NoticeSource + ?Sized>(source: &S) -> Option<Self> {
        let query = source.query_string();
        if query.contains(LOGGED_OUT_FLAG) {
            Some(Self { kind: NoticeKind::Success, multi_line: false, message: LOGGED_OUT_MESSAGE })
        } else if query.contains(API_ERROR_FLAG) {
            Some(Self { kind: NoticeKind::Error, multi_line: true, message: API_ERROR_MESSAGE })
        } else {
            None
        }
    }
}
