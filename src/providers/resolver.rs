use std::sync::Arc;

use url::Url;

use super::{
    FacebookLoginProvider, FacebookLoginSdk, GoogleLoginProvider, GoogleSignInSdk,
    LoginProvider, LoginResult, ProviderType,
};
use crate::{
    deep_link::{DeepLinkHandler, OpenUrlOptions},
    settings::{FacebookSettings, GoogleSettings},
    surface::PresentationSurface,
};

/// 선택한 `ProviderType`에 맞는 공급자를 만든다.
///
/// 테스트에서는 임의의 공급자를 돌려주는 구현으로 바꿔 끼울 수 있다.
pub trait ProviderResolver: Send + Sync {
    type Provider: LoginProvider + DeepLinkHandler + 'static;

    /// 공급자를 만들 수 없으면 `None`을 반환한다.
    fn resolve(
        &self,
        provider_type: ProviderType,
        surface: Arc<dyn PresentationSurface>,
    ) -> Option<Self::Provider>;
}

pub enum SocialLoginProvider<G, F> {
    Google(GoogleLoginProvider<G>),
    Facebook(FacebookLoginProvider<F>),
}

impl<G, F> SocialLoginProvider<G, F> {
    pub fn provider_type(&self) -> ProviderType {
        match self {
            SocialLoginProvider::Google(_) => ProviderType::Google,
            SocialLoginProvider::Facebook(_) => ProviderType::Facebook,
        }
    }
}

impl<G, F> LoginProvider for SocialLoginProvider<G, F>
where
    G: GoogleSignInSdk + Send + Sync,
    F: FacebookLoginSdk + Send + Sync,
{
    async fn login(&self) -> Option<LoginResult> {
        match self {
            SocialLoginProvider::Google(provider) => provider.login().await,
            SocialLoginProvider::Facebook(provider) => provider.login().await,
        }
    }
}

impl<G, F> DeepLinkHandler for SocialLoginProvider<G, F>
where
    G: GoogleSignInSdk + Send + Sync,
    F: FacebookLoginSdk + Send + Sync,
{
    fn open_url(&self, url: &Url, options: &OpenUrlOptions) -> bool {
        match self {
            SocialLoginProvider::Google(provider) => provider.open_url(url, options),
            SocialLoginProvider::Facebook(provider) => provider.open_url(url, options),
        }
    }
}

/// 호스트가 연결한 벤더 SDK로 구글/페이스북 공급자를 만든다.
/// SDK가 연결되지 않은 공급자는 만들 수 없다.
pub struct SocialProviderResolver<G, F> {
    google_sdk: Option<Arc<G>>,
    facebook_sdk: Option<Arc<F>>,
    google: GoogleSettings,
    facebook: FacebookSettings,
}

impl<G, F> SocialProviderResolver<G, F> {
    pub fn new(google: GoogleSettings, facebook: FacebookSettings) -> Self {
        Self {
            google_sdk: None,
            facebook_sdk: None,
            google,
            facebook,
        }
    }

    pub fn with_google(mut self, sdk: Arc<G>) -> Self {
        self.google_sdk = Some(sdk);
        self
    }

    pub fn with_facebook(mut self, sdk: Arc<F>) -> Self {
        self.facebook_sdk = Some(sdk);
        self
    }
}

impl<G, F> ProviderResolver for SocialProviderResolver<G, F>
where
    G: GoogleSignInSdk + Send + Sync + 'static,
    F: FacebookLoginSdk + Send + Sync + 'static,
{
    type Provider = SocialLoginProvider<G, F>;

    fn resolve(
        &self,
        provider_type: ProviderType,
        surface: Arc<dyn PresentationSurface>,
    ) -> Option<Self::Provider> {
        match provider_type {
            ProviderType::Google => self.google_sdk.as_ref().map(|sdk| {
                SocialLoginProvider::Google(GoogleLoginProvider::new(
                    Arc::clone(sdk),
                    &self.google,
                    surface,
                ))
            }),
            ProviderType::Facebook => self.facebook_sdk.as_ref().map(|sdk| {
                SocialLoginProvider::Facebook(FacebookLoginProvider::new(
                    Arc::clone(sdk),
                    &self.facebook,
                    surface,
                ))
            }),
        }
    }
}
