//! Customer login form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the notice banner, credential inputs, submit control and error
//! paragraph. All network, storage and navigation effects go through the
//! injected `LoginController`; the form only owns its `LoginFormState`.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::button::Button;
use crate::components::input_group::InputGroup;
use crate::components::notice::Notice;
use crate::net::login::LoginController;
use crate::state::login::{LoginFormState, LoginPhase};
use crate::state::notice::PageNotice;

/// In-app route of the password reset page.
pub const FORGOT_PASSWORD_PATH: &str = "/forgot-password";

/// Keys that submit the form from the password field.
fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

/// Inline style of the error paragraph; fully determined by visibility.
fn message_style(visible: bool) -> &'static str {
    if visible {
        "visibility: visible; opacity: 1; transform: translateY(0px);"
    } else {
        "visibility: hidden; opacity: 0; transform: translateY(20px);"
    }
}

/// Login form. `notice` is derived by the caller before the form mounts.
#[component]
pub fn LoginForm(controller: LoginController, notice: Option<PageNotice>) -> impl IntoView {
    let form = RwSignal::new(LoginFormState::default());
    let disabled = Signal::derive(move || form.with(|s| s.disabled));

    let submit = Callback::new(move |()| {
        // Locks the form synchronously so a second click or Enter before the
        // task runs is dropped.
        let Some(creds) = form.try_update(LoginFormState::try_begin_submit).flatten() else {
            return;
        };
        let controller = controller.clone();
        leptos::task::spawn_local(async move {
            controller.login(&form, creds).await;
        });
    });

    let on_password_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key()) {
            submit.run(());
        }
    };

    let message_visible = move || form.with(LoginFormState::message_visible);

    view! {
        <div
            class="login-form"
            class:login-form--submitting=move || form.with(|s| s.phase() == LoginPhase::Submitting)
        >
            {notice
                .map(|notice| {
                    view! {
                        <Notice kind=notice.kind global=true multi_line=notice.multi_line>
                            {notice.message}
                        </Notice>
                    }
                })}
            <h1 class="login-form__heading">"Customer Login"</h1>
            <InputGroup>
                <label class="login-form__label" for="login-username">"Email"</label>
                <input
                    id="login-username"
                    class="login-form__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || form.with(|s| s.username.clone())
                    on:input=move |ev| form.update(|s| s.username = event_target_value(&ev))
                    disabled=move || disabled.get()
                />

                <label class="login-form__label" for="login-password">"Password"</label>
                <input
                    id="login-password"
                    class="login-form__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || form.with(|s| s.password.clone())
                    on:input=move |ev| form.update(|s| s.password = event_target_value(&ev))
                    on:keydown=on_password_keydown
                    disabled=move || disabled.get()
                />
            </InputGroup>

            <div class="login-form__controls">
                <Button text="Submit" on_click=submit disabled=disabled/>
                <A href=FORGOT_PASSWORD_PATH>
                    <span class="login-form__forgot-password">"Forgot password?"</span>
                </A>
            </div>

            <p
                class="login-form__message"
                class:login-form__message--visible=message_visible
                style=move || message_style(message_visible())
            >
                {move || form.with(|s| s.message.clone().unwrap_or_default())}
            </p>
        </div>
    }
}
