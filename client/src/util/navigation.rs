//! Full-page navigation.
//!
//! A successful login leaves the single-page app entirely so the account
//! dashboard boots fresh with the new session. Requires a browser
//! environment; elsewhere the redirect is a no-op.

/// Capability that replaces the current document with `href`.
pub trait Navigator: Send + Sync {
    fn hard_redirect(&self, href: &str);
}

/// `window.location.href` assignment.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn hard_redirect(&self, href: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(href) {
                    log::warn!("redirect to {href} failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = href;
        }
    }
}
