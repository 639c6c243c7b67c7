use std::sync::Arc;

use url::Url;

use super::{LoginProvider, LoginResult};
use crate::{
    deep_link::{DeepLinkHandler, OpenUrlOptions},
    domain::Profile,
    settings::GoogleSettings,
    surface::PresentationSurface,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleConfiguration {
    pub client_id: String,
}

/// 구글 SDK가 돌려주는 사용자 정보
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoogleUser {
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub email: Option<String>,
}

/// 구글 로그인 SDK 중 이 크레이트가 사용하는 진입점
#[trait_variant::make(Send)]
pub trait GoogleSignInSdk {
    /// 이전 로그인 세션을 복원한다.
    async fn restore_previous_sign_in(&self) -> Result<Option<GoogleUser>, anyhow::Error>;

    fn sign_out(&self);

    /// 대화형 로그인을 시작한다.
    /// 사용자도 오류도 없으면 로그인이 취소된 것이다.
    async fn sign_in(
        &self,
        configuration: &GoogleConfiguration,
        presenting: &dyn PresentationSurface,
    ) -> Result<Option<GoogleUser>, anyhow::Error>;

    /// 추가 권한 동의 화면을 요청한다.
    /// 결과는 SDK가 따로 처리한다.
    fn request_scopes(&self, scopes: &[String], presenting: &dyn PresentationSurface);

    fn handle_url(&self, url: &Url) -> bool;
}

pub struct GoogleLoginProvider<S> {
    sdk: Arc<S>,
    configuration: GoogleConfiguration,
    extended_scopes: Vec<String>,
    surface: Arc<dyn PresentationSurface>,
}

impl<S> GoogleLoginProvider<S> {
    pub fn new(
        sdk: Arc<S>,
        settings: &GoogleSettings,
        surface: Arc<dyn PresentationSurface>,
    ) -> Self {
        Self {
            sdk,
            configuration: settings.configuration(),
            extended_scopes: settings.extended_scopes.clone(),
            surface,
        }
    }
}

impl<S> GoogleLoginProvider<S>
where
    S: GoogleSignInSdk + Send + Sync,
{
    async fn has_active_session(&self) -> bool {
        // 오류 없이 응답하면 세션이 남아 있는 것으로 본다.
        self.sdk.restore_previous_sign_in().await.is_ok()
    }
}

impl<S> LoginProvider for GoogleLoginProvider<S>
where
    S: GoogleSignInSdk + Send + Sync,
{
    #[tracing::instrument(name = "Google sign-in", skip_all, fields(surface = %self.surface.identifier()))]
    async fn login(&self) -> Option<LoginResult> {
        if self.has_active_session().await {
            tracing::debug!("Signing out the previous Google session");
            self.sdk.sign_out();
        }

        let user = match self
            .sdk
            .sign_in(&self.configuration, self.surface.as_ref())
            .await
        {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::info!("Google sign-in returned no user");
                return None;
            }
            Err(e) => return Some(Err(e)),
        };

        // 생일과 전화번호는 추가 동의 후에야 받을 수 있으므로 이번 로그인 결과에는 넣지 않는다.
        if !self.extended_scopes.is_empty() {
            self.sdk
                .request_scopes(&self.extended_scopes, self.surface.as_ref());
        }

        Some(Ok(Profile::new(
            user.given_name,
            user.family_name,
            user.email,
            None,
            None,
        )))
    }
}

impl<S> DeepLinkHandler for GoogleLoginProvider<S>
where
    S: GoogleSignInSdk + Send + Sync,
{
    fn open_url(&self, url: &Url, _: &OpenUrlOptions) -> bool {
        self.sdk.handle_url(url)
    }
}
