use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const AUTO_HIDE_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Dismissible message line under a form or table.
///
/// Success messages hide themselves; errors stay until dismissed.
#[component]
pub fn Notification(
    message: RwSignal<Option<String>>,
    #[prop(optional)] kind: Option<NotificationKind>,
) -> impl IntoView {
    let kind = kind.unwrap_or(NotificationKind::Error);
    let timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let visible = message.with(|m| m.is_some());
        if visible && kind == NotificationKind::Success {
            let hide = Timeout::new(AUTO_HIDE_MS, move || {
                message.try_set(None);
            });
            timer.set_value(Some(hide));
        } else {
            timer.set_value(None);
        }
    });

    let class = match kind {
        NotificationKind::Success => "notification notification--success",
        NotificationKind::Error => "notification notification--error",
    };

    view! {
        {move || message.get().map(|text| view! {
            <div class=class role="alert">
                <span class="notification__text">{text}</span>
                <button
                    class="notification__close"
                    title="Dismiss"
                    on:click=move |_| message.set(None)
                >
                    {icon("x")}
                </button>
            </div>
        })}
    }
}
