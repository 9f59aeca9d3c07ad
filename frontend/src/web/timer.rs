//! 定时器封装模块
//!
//! 使用 `web_sys` 的原生定时器 API 替代 `gloo-timers`。

use wasm_bindgen::prelude::*;

/// 一次性定时器
///
/// 封装 `setTimeout` API。`Timeout` 被 drop 时取消定时器，
/// 调用 [`Timeout::forget`] 则让它一直运行到触发。
pub struct Timeout {
    handle: Option<i32>,
    closure: Option<Closure<dyn FnMut()>>,
}

impl Timeout {
    /// 创建新的一次性定时器
    ///
    /// 无法获取 window 或设置失败时回调不会触发。
    pub fn new<F>(millis: u32, callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(cb) = callback.take() {
                cb();
            }
        });

        let handle = web_sys::window().and_then(|window| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    millis as i32,
                )
                .ok()
        });
        if handle.is_none() {
            tracing::error!(millis, "setTimeout failed");
        }

        Self {
            handle,
            closure: Some(closure),
        }
    }

    /// 取消定时器
    pub fn cancel(&mut self) {
        if let (Some(handle), Some(window)) = (self.handle.take(), web_sys::window()) {
            window.clear_timeout_with_handle(handle);
        }
    }

    /// 放弃所有权，定时器照常触发
    pub fn forget(mut self) {
        self.handle = None;
        if let Some(closure) = self.closure.take() {
            // 泄漏闭包以保持回调存活
            closure.forget();
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}
