use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::icons;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeLevel {
    Success,
    Info,
}

impl NoticeLevel {
    fn class(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "notification-success",
            NoticeLevel::Info => "notification-info",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "check-circle",
            NoticeLevel::Info => "info",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub message: AttrValue,
    pub level: NoticeLevel,
    pub on_close: Callback<()>,
}

/// Transient toast. Dismisses itself after a fixed delay or on the close
/// button; the parent owns whether it is rendered at all.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                // the icon placeholder below was just inserted
                icons::refresh();
                let timer = Timeout::new(config::NOTICE_DISMISS_MS, move || {
                    on_close.emit(());
                });
                move || drop(timer)
            },
            (),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={classes!("notification", props.level.class())}>
            <div class="notification-content">
                <i data-lucide={props.level.icon()}></i>
                <span>{ props.message.clone() }</span>
                <button class="notification-close" onclick={close}>
                    <i data-lucide="x"></i>
                </button>
            </div>
        </div>
    }
}
