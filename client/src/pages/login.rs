//! Customer login page.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::login_form::LoginForm;
use crate::net::api::{api_domain, default_auth_client};
use crate::net::login::LoginController;
use crate::state::notice::PageNotice;
use crate::util::navigation::WindowNavigator;
use crate::util::storage::LocalStorage;

/// Login page: reads the logout notice once, then hands the browser
/// capabilities to `LoginForm`.
#[component]
pub fn LoginPage() -> impl IntoView {
    let search = use_location().search.get_untracked();
    let notice = PageNotice::derive(&search);
    let controller = LoginController::new(
        default_auth_client(&api_domain()),
        Arc::new(LocalStorage),
        Arc::new(WindowNavigator),
    );

    view! {
        <div class="login-page">
            <LoginForm controller=controller notice=notice/>
        </div>
    }
}
