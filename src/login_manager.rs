use std::sync::{Arc, Mutex, PoisonError, Weak};

use tokio::sync::oneshot;
use tracing::field::display;
use url::Url;

use crate::{
    deep_link::{DeepLinkRegistration, DeepLinkRouter, OpenUrlOptions},
    domain::{FieldValidator, Profile},
    error::LoginError,
    providers::{LoginProvider, ProviderResolver, ProviderType},
    surface::PresentationSurface,
};

#[derive(Default)]
struct LoginState {
    provider_type: Option<ProviderType>,
    surface: Option<Weak<dyn PresentationSurface>>,
    // 마지막으로 찾은 공급자의 URL 핸들러 등록
    registration: Option<DeepLinkRegistration>,
}

/// 선택한 공급자로 로그인하고 결과 프로필을 검증해서 돌려준다.
///
/// UI는 한 번에 하나의 로그인만 허용하므로 로그인 매니저 하나에는 진행 중인 로그인이 최대 하나다.
pub struct LoginManager<R> {
    resolver: R,
    validator: FieldValidator,
    router: Arc<DeepLinkRouter>,
    state: Mutex<LoginState>,
}

impl<R> LoginManager<R>
where
    R: ProviderResolver,
{
    pub fn new(resolver: R, validator: FieldValidator, router: Arc<DeepLinkRouter>) -> Self {
        Self {
            resolver,
            validator,
            router,
            state: Mutex::new(LoginState::default()),
        }
    }

    pub fn set_provider_type(&self, provider_type: ProviderType) {
        self.lock_state().provider_type = Some(provider_type);
    }

    pub fn provider_type(&self) -> Option<ProviderType> {
        self.lock_state().provider_type
    }

    /// UI가 표면을 소유하므로 약한 참조만 저장한다.
    pub fn set_presentation_surface(&self, surface: &Arc<dyn PresentationSurface>) {
        self.lock_state().surface = Some(Arc::downgrade(surface));
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn deep_link_router(&self) -> &Arc<DeepLinkRouter> {
        &self.router
    }

    /// 호스트 셸이 받은 URL을 마지막으로 로그인한 공급자에게 전달한다.
    pub fn open_url(&self, url: &Url, options: &OpenUrlOptions) -> bool {
        self.router.open_url(url, options)
    }

    /// 로그인하고 검증한 프로필을 반환한다.
    ///
    /// 사용자가 로그인을 취소하면 `Ok(None)`을 반환한다.
    /// 공급자 오류는 검증을 거치지 않고 `LoginError::Provider`로 그대로 전달된다.
    #[tracing::instrument(
        name = "Social login",
        skip(self),
        fields(provider_type = tracing::field::Empty),
        err
    )]
    pub async fn login(&self) -> Result<Option<Profile>, LoginError> {
        let (provider_type, surface) = self.preconditions()?;
        tracing::Span::current().record("provider_type", display(provider_type));

        let provider = self
            .resolver
            .resolve(provider_type, surface)
            .map(Arc::new)
            .ok_or(LoginError::ProviderUnavailable(provider_type))?;

        // 로그인이 끝난 뒤에도 추가 권한 동의 같은 리다이렉트가 올 수 있다.
        // 다음 로그인이 대체할 때까지 등록을 유지한다.
        let registration = self.router.register(provider.clone());
        self.lock_state().registration = Some(registration);

        match provider.login().await {
            None => {
                tracing::info!("The user cancelled the login");
                Ok(None)
            }
            Some(Err(e)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "The login provider failed",
                );
                Err(LoginError::Provider(e))
            }
            Some(Ok(raw)) => Ok(Some(self.validator.validate(&raw))),
        }
    }

    /// 로그인이 끝나면 `completion`을 한 번 호출한다.
    /// 사용자가 로그인을 취소하면 호출하지 않는다.
    pub async fn login_with<F>(&self, completion: F)
    where
        F: FnOnce(Result<Profile, LoginError>),
    {
        if let Some(outcome) = self.login().await.transpose() {
            completion(outcome);
        }
    }

    /// 백그라운드에서 로그인하고 결과를 한 번만 보내는 채널을 반환한다.
    ///
    /// 사용자가 로그인을 취소하면 값을 보내지 않고 채널이 닫힌다.
    pub fn spawn_login(self: &Arc<Self>) -> oneshot::Receiver<Result<Profile, LoginError>>
    where
        R: 'static,
    {
        let (sender, receiver) = oneshot::channel();
        let manager = Arc::clone(self);
        tokio::spawn(async move {
            if let Some(outcome) = manager.login().await.transpose() {
                // 수신자가 이미 사라졌다면 결과를 버린다.
                let _ = sender.send(outcome);
            }
        });
        receiver
    }

    fn preconditions(&self) -> Result<(ProviderType, Arc<dyn PresentationSurface>), LoginError> {
        let state = self.lock_state();
        let provider_type = state.provider_type.ok_or(LoginError::ProviderTypeNotSet)?;
        let surface = state
            .surface
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or(LoginError::SurfaceUnavailable)?;
        Ok((provider_type, surface))
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, LoginState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
