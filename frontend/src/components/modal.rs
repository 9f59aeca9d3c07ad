//! 阻塞式提示框
//!
//! 所有接口错误、校验错误与成功提示都通过 [`Notifier`] 展示，
//! 同一时刻只显示一个。

use crate::web::Timeout;
use leptos::prelude::*;
use pharmaboard_shared::api::ApiError;

/// 成功提示自动关闭的延迟
const AUTO_CLOSE_MS: u32 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

/// 提示框服务
#[derive(Clone, Copy)]
pub struct Notifier {
    current: RwSignal<Option<Notice>>,
    next_id: StoredValue<u64>,
}

impl Notifier {
    fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    fn show(&self, kind: NoticeKind, title: &str, text: &str) -> u64 {
        let id = self.next_id.get_value() + 1;
        self.next_id.set_value(id);
        self.current.set(Some(Notice {
            id,
            kind,
            title: title.to_string(),
            text: text.to_string(),
        }));
        id
    }

    /// 需要用户确认的错误提示
    pub fn error(&self, title: &str, text: &str) {
        self.show(NoticeKind::Error, title, text);
    }

    /// 接口错误：优先显示后端 `message`
    pub fn api_error(&self, err: &ApiError, fallback: &str) {
        tracing::warn!(error = %err, "request failed");
        self.error("Erreur", &err.user_message(fallback));
    }

    /// 成功提示，稍后自动关闭
    pub fn success(&self, title: &str, text: &str) {
        let id = self.show(NoticeKind::Success, title, text);
        let current = self.current;
        Timeout::new(AUTO_CLOSE_MS, move || {
            // 期间若已换成别的提示则不动它
            if current.with_untracked(|n| n.as_ref().is_some_and(|n| n.id == id)) {
                current.set(None);
            }
        })
        .forget();
    }

    pub fn close(&self) {
        self.current.set(None);
    }
}

pub fn provide_notifier() -> Notifier {
    let notifier = Notifier::new();
    provide_context(notifier);
    notifier
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier should be provided")
}

/// 提示框出口，挂在应用根部
#[component]
pub fn NoticeModal() -> impl IntoView {
    let notifier = use_notifier();
    let current = notifier.current;

    view! {
        <Show when=move || current.with(Option::is_some)>
            {move || {
                current
                    .get()
                    .map(|notice| {
                        let (badge, button) = match notice.kind {
                            NoticeKind::Success => ("text-success", "btn btn-success"),
                            NoticeKind::Error => ("text-error", "btn btn-error"),
                        };
                        view! {
                            <div class="modal modal-open" role="alertdialog">
                                <div class="modal-box text-center">
                                    <h3 class=format!("font-bold text-xl {badge}")>{notice.title}</h3>
                                    <p class="py-4">{notice.text}</p>
                                    <div class="modal-action justify-center">
                                        <button class=button on:click=move |_| notifier.close()>
                                            "OK"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}

/// 浏览器原生确认框；不可用时视为取消
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
