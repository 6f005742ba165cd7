use super::*;

#[test]
fn no_flags_no_notice() {
    for query in ["", "?", "?foo=bar", "?logout=false", "?logout", "logout=tru", "?LOGOUT=TRUE"] {
        assert_eq!(PageNotice::derive(query), None, "unexpected notice for {query:?}");
    }
}

#[test]
fn logout_true_is_single_line_success() {
    let notice = PageNotice::derive("?logout=true").unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert!(!notice.multi_line);
    assert_eq!(notice.message, "You've been logged out successfully.");
}

#[test]
fn api_error_is_multi_line_error() {
    let notice = PageNotice::derive("?logout=api_error").unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.multi_line);
    assert_eq!(
        notice.message,
        "Error: Unable to connect to the WP Shopify account system. Please try again later or contact us directly."
    );
}

#[test]
fn flags_match_as_substrings() {
    let notice = PageNotice::derive("?ref=mail&logout=true&utm=x").unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    let notice = PageNotice::derive("?xlogout=api_errors").unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
}

#[test]
fn logout_true_wins_over_api_error() {
    let notice = PageNotice::derive("?logout=api_error&logout=true").unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
}

#[test]
fn owned_string_source() {
    let query = String::from("?logout=true");
    assert!(PageNotice::derive(&query).is_some());
}

#[test]
fn kind_names_match_notice_types() {
    assert_eq!(NoticeKind::Success.as_str(), "success");
    assert_eq!(NoticeKind::Error.as_str(), "error");
}
