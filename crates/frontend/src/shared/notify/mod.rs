//! Всплывающие уведомления об исходе операций над записями.
//!
//! `NotificationService` кладётся в контекст один раз в `App`; любой экран
//! может вызвать `success`/`error`, а `NotificationHost` рисует активные
//! сообщения и снимает их по таймеру.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    fn intent(self) -> MessageBarIntent {
        match self {
            NoticeLevel::Success => MessageBarIntent::Success,
            NoticeLevel::Warning => MessageBarIntent::Warning,
            NoticeLevel::Error => MessageBarIntent::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
    ttl_ms: u32,
}

impl NotificationService {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
            ttl_ms,
        }
    }

    pub fn push(&self, level: NoticeLevel, text: impl Into<String>) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Notice {
                id,
                level,
                text: text.into(),
            })
        });

        let svc = *self;
        let ttl = self.ttl_ms;
        spawn_local(async move {
            TimeoutFuture::new(ttl).await;
            svc.dismiss(id);
        });
        id
    }

    pub fn success(&self, text: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Success, text)
    }

    pub fn warning(&self, text: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Warning, text)
    }

    pub fn error(&self, text: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Error, text)
    }

    /// Снять уведомление; после ухода со страницы сервис уже может быть удалён.
    pub fn dismiss(&self, id: u64) {
        let _ = self.items.try_update(|items| items.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Signal<Vec<Notice>> {
        let items = self.items;
        Signal::derive(move || items.get())
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_notifications();

    view! {
        <div class="notification-host" style="position: fixed; top: 16px; right: 16px; z-index: 1000; display: flex; flex-direction: column; gap: 8px; width: 360px;">
            <For
                each=move || svc.items().get()
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <MessageBar intent=notice.level.intent()>
                            <div style="display: flex; align-items: center; justify-content: space-between; gap: 8px; width: 100%;">
                                <span>{notice.text}</span>
                                <button
                                    class="notification-close"
                                    style="background: none; border: none; cursor: pointer; color: inherit;"
                                    title="Закрыть"
                                    on:click=move |_| svc.dismiss(id)
                                >
                                    {crate::shared::icons::icon("x")}
                                </button>
                            </div>
                        </MessageBar>
                    }
                }
            />
        </div>
    }
}
