use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let submit = move || {
        if is_loading.get_untracked() {
            return;
        }
        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if email_val.is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Enter email and password".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            // on success the auth state flips and this page unmounts
            let result = do_login(email_val, password_val, set_auth_state).await;
            if let Err(e) = result {
                log::warn!("Login failed: {}", e);
                let _ = set_error_message.try_set(Some(e.user_message()));
                let _ = set_is_loading.try_set(false);
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Edu Console"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <div
                    class="login-form"
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                >
                    <div class="form-group">
                        <label>"Email"</label>
                        <Input value=email placeholder="admin@school.org" />
                    </div>

                    <div class="form-group">
                        <label>"Password"</label>
                        <Input value=password input_type=InputType::Password />
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::from(is_loading)
                        on_click=move |_| submit()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                    <Show when=move || is_loading.get()>
                        <Spinner />
                    </Show>
                </div>
            </div>
        </div>
    }
}
