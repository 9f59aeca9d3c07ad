//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 替代 `gloo-storage`，提供简洁的本地存储接口，
//! 并在其上实现凭据存储 [`BrowserTokenStore`]。

use pharmaboard_shared::{
    Credential, FallbackTokenStore, KeyValueStore, MemoryTokenStore, TokenStore,
};

/// 本地存储操作封装
///
/// 提供静态方法访问浏览器 LocalStorage API。
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 获取存储的字符串值
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 设置存储值，失败返回 `false`
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 删除存储的键值对，失败返回 `false`
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        LocalStorage::set(key, value)
    }

    fn delete(&self, key: &str) -> bool {
        LocalStorage::delete(key)
    }
}

thread_local! {
    // localStorage 写入失败时的退路，仅在本页面生命周期内有效
    static FALLBACK: MemoryTokenStore = MemoryTokenStore::new();
}

/// 基于 `localStorage["token"]` 的凭据存储
///
/// 无状态，可随意复制；所有副本读写同一个键和同一个内存退路。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl BrowserTokenStore {
    fn with<R>(f: impl FnOnce(&FallbackTokenStore<LocalStorage, &MemoryTokenStore>) -> R) -> R {
        FALLBACK.with(|memory| f(&FallbackTokenStore::new(LocalStorage, memory)))
    }
}

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<Credential> {
        Self::with(|store| store.get())
    }

    fn set(&self, credential: &Credential) {
        Self::with(|store| store.set(credential))
    }

    fn clear(&self) {
        Self::with(|store| store.clear())
    }
}
