//! 凭据与凭据存储
//!
//! 同一时刻最多只存在一个凭据，凭据是否存在是"已登录"的唯一信号。

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// 持久化存储中保存凭据的键
pub const TOKEN_STORAGE_KEY: &str = "token";

/// 后端签发的不透明 Bearer 凭据
///
/// 原样保存，不做任何校验。`Debug` 输出会隐藏内容。
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Authorization` 请求头的值
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(<{} bytes>)", self.0.len())
    }
}

impl From<String> for Credential {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

// =========================================================
// 存储抽象 (Token Store)
// =========================================================

/// 同步的凭据存储
///
/// 浏览器实现基于 `localStorage`，测试使用 [`MemoryTokenStore`]。
pub trait TokenStore {
    fn get(&self) -> Option<Credential>;
    fn set(&self, credential: &Credential);
    fn clear(&self);
}

impl<S: TokenStore + ?Sized> TokenStore for &S {
    fn get(&self) -> Option<Credential> {
        (**self).get()
    }

    fn set(&self, credential: &Credential) {
        (**self).set(credential)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

impl<S: TokenStore + ?Sized> TokenStore for Rc<S> {
    fn get(&self) -> Option<Credential> {
        (**self).get()
    }

    fn set(&self, credential: &Credential) {
        (**self).set(credential)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// 内存中的凭据存储
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RefCell<Option<Credential>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credential(credential: Credential) -> Self {
        Self {
            slot: RefCell::new(Some(credential)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<Credential> {
        self.slot.borrow().clone()
    }

    fn set(&self, credential: &Credential) {
        // 覆盖写入，保证只有一个凭据
        *self.slot.borrow_mut() = Some(credential.clone());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

// =========================================================
// 持久化 + 内存退路 (Fallback)
// =========================================================

/// 同步的字符串键值存储，写入可能失败
///
/// 浏览器中即 `localStorage`：隐私模式或配额用尽时 `setItem` 会抛错。
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// 写入成功返回 `true`
    fn set(&self, key: &str, value: &str) -> bool;
    fn delete(&self, key: &str) -> bool;
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for &K {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> bool {
        (**self).delete(key)
    }
}

/// 优先写入持久化存储，写入失败时退回内存存储
///
/// 内存中的凭据总是比持久化存储中的新，因此读取时先查内存。
/// 写入失败时同时删除持久化存储中的旧值，避免旧凭据被读到。
#[derive(Debug, Clone, Copy)]
pub struct FallbackTokenStore<K, F> {
    primary: K,
    fallback: F,
}

impl<K: KeyValueStore, F: TokenStore> FallbackTokenStore<K, F> {
    pub fn new(primary: K, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<K: KeyValueStore, F: TokenStore> TokenStore for FallbackTokenStore<K, F> {
    fn get(&self) -> Option<Credential> {
        self.fallback
            .get()
            .or_else(|| self.primary.get(TOKEN_STORAGE_KEY).map(Credential::new))
    }

    fn set(&self, credential: &Credential) {
        if self.primary.set(TOKEN_STORAGE_KEY, credential.as_str()) {
            self.fallback.clear();
        } else {
            tracing::warn!("persistent storage rejected the credential, keeping it in memory");
            self.primary.delete(TOKEN_STORAGE_KEY);
            self.fallback.set(credential);
        }
    }

    fn clear(&self) {
        self.primary.delete(TOKEN_STORAGE_KEY);
        self.fallback.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_previous_credential() {
        let store = MemoryTokenStore::new();
        store.set(&Credential::new("first"));
        store.set(&Credential::new("second"));
        assert_eq!(store.get(), Some(Credential::new("second")));
    }

    #[test]
    fn test_clear_removes_credential() {
        let store = MemoryTokenStore::with_credential(Credential::new("abc"));
        store.clear();
        assert_eq!(store.get(), None);
        // 重复清除无副作用
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_shared_store_through_rc() {
        let store = Rc::new(MemoryTokenStore::new());
        let other = Rc::clone(&store);
        other.set(&Credential::new("shared"));
        assert_eq!(store.get().map(Credential::into_inner), Some("shared".into()));
    }

    #[test]
    fn test_debug_hides_raw_value() {
        let cred = Credential::new("secret.value.here");
        let printed = format!("{:?}", cred);
        assert!(!printed.contains("secret"));
        assert_eq!(cred.bearer(), "Bearer secret.value.here");
    }

    /// 可切换写入是否失败的键值存储
    #[derive(Default)]
    struct FlakyStorage {
        items: RefCell<std::collections::HashMap<String, String>>,
        reject_writes: std::cell::Cell<bool>,
    }

    impl KeyValueStore for FlakyStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> bool {
            if self.reject_writes.get() {
                return false;
            }
            self.items.borrow_mut().insert(key.into(), value.into());
            true
        }

        fn delete(&self, key: &str) -> bool {
            self.items.borrow_mut().remove(key);
            true
        }
    }

    #[test]
    fn test_fallback_store_prefers_persistent_storage() {
        let storage = FlakyStorage::default();
        let memory = MemoryTokenStore::new();
        let store = FallbackTokenStore::new(&storage, &memory);

        store.set(&Credential::new("persisted"));
        assert_eq!(storage.get(TOKEN_STORAGE_KEY).as_deref(), Some("persisted"));
        assert_eq!(memory.get(), None);
        assert_eq!(store.get(), Some(Credential::new("persisted")));
    }

    #[test]
    fn test_rejected_write_is_readable_from_memory() {
        let storage = FlakyStorage::default();
        storage.set(TOKEN_STORAGE_KEY, "stale");
        storage.reject_writes.set(true);
        let memory = MemoryTokenStore::new();
        let store = FallbackTokenStore::new(&storage, &memory);

        store.set(&Credential::new("fresh"));
        // 刚写入的凭据可读，旧值已被删除
        assert_eq!(store.get(), Some(Credential::new("fresh")));
        assert_eq!(storage.get(TOKEN_STORAGE_KEY), None);

        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_later_successful_write_supersedes_memory() {
        let storage = FlakyStorage::default();
        storage.reject_writes.set(true);
        let memory = MemoryTokenStore::new();
        let store = FallbackTokenStore::new(&storage, &memory);

        store.set(&Credential::new("first"));
        storage.reject_writes.set(false);
        store.set(&Credential::new("second"));
        assert_eq!(memory.get(), None);
        assert_eq!(store.get(), Some(Credential::new("second")));
    }
}
