use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only for administrators
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_admin())
            fallback=|| view! { <div class="warning-box">"Administrator access required."</div> }
        >
            {children()}
        </Show>
    }
}
