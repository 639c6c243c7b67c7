use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex, PoisonError, Weak,
};

use url::Url;

/// 앱을 연 URL과 함께 전달되는 옵션
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenUrlOptions {
    pub source_application: Option<String>,
    pub annotation: Option<String>,
}

/// 공급자 SDK가 리다이렉트 URL을 받아 로그인 흐름을 마치게 한다.
pub trait DeepLinkHandler: Send + Sync {
    /// URL을 처리했으면 `true`를 반환한다.
    fn open_url(&self, url: &Url, options: &OpenUrlOptions) -> bool;
}

/// 호스트 셸이 받은 URL을 등록된 공급자에게 전달한다.
///
/// 한 번에 하나의 공급자만 등록된다.
/// 등록은 `DeepLinkRegistration`이 드롭되거나 다른 공급자가 등록될 때 해제된다.
#[derive(Default)]
pub struct DeepLinkRouter {
    active: Mutex<Option<ActiveHandler>>,
    next_id: AtomicU64,
}

struct ActiveHandler {
    id: u64,
    handler: Arc<dyn DeepLinkHandler>,
}

impl DeepLinkRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이전 등록을 대체한다.
    pub fn register(self: &Arc<Self>, handler: Arc<dyn DeepLinkHandler>) -> DeepLinkRegistration {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        *self.active.lock().unwrap_or_else(PoisonError::into_inner) =
            Some(ActiveHandler { id, handler });

        DeepLinkRegistration {
            router: Arc::downgrade(self),
            id,
        }
    }

    pub fn has_handler(&self) -> bool {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    #[tracing::instrument(name = "Open deep link", skip_all, fields(url = %url))]
    pub fn open_url(&self, url: &Url, options: &OpenUrlOptions) -> bool {
        // 핸들러가 잠금을 다시 요청할 수 있으므로 호출 전에 잠금을 푼다.
        let handler = self
            .active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|active| Arc::clone(&active.handler));

        match handler {
            Some(handler) => handler.open_url(url, options),
            None => {
                tracing::warn!("No login provider is waiting for a deep link");
                false
            }
        }
    }

    fn unregister(&self, id: u64) {
        let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
        // 그 사이 다른 공급자가 등록했다면 그대로 둔다.
        if active.as_ref().is_some_and(|a| a.id == id) {
            *active = None;
        }
    }
}

#[must_use = "the handler is unregistered as soon as the registration is dropped"]
pub struct DeepLinkRegistration {
    router: Weak<DeepLinkRouter>,
    id: u64,
}

impl Drop for DeepLinkRegistration {
    fn drop(&mut self) {
        if let Some(router) = self.router.upgrade() {
            router.unregister(self.id);
        }
    }
}
