use std::sync::Arc;

use chrono::{DateTime, Utc};
use url::Url;

use super::{LoginProvider, LoginResult};
use crate::{
    deep_link::{DeepLinkHandler, OpenUrlOptions},
    domain::Profile,
    settings::FacebookSettings,
    surface::PresentationSurface,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacebookLoginResult {
    pub is_cancelled: bool,
    pub granted_permissions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacebookProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// 페이스북 로그인 SDK 중 이 크레이트가 사용하는 진입점
#[trait_variant::make(Send)]
pub trait FacebookLoginSdk {
    fn current_access_token(&self) -> Option<AccessToken>;

    fn log_out(&self);

    async fn log_in(
        &self,
        permissions: &[String],
        from: &dyn PresentationSurface,
    ) -> Result<FacebookLoginResult, anyhow::Error>;

    async fn load_current_profile(&self) -> Result<Option<FacebookProfile>, anyhow::Error>;

    fn handle_url(&self, url: &Url, options: &OpenUrlOptions) -> bool;
}

pub struct FacebookLoginProvider<S> {
    sdk: Arc<S>,
    permissions: Vec<String>,
    surface: Arc<dyn PresentationSurface>,
}

impl<S> FacebookLoginProvider<S> {
    pub fn new(
        sdk: Arc<S>,
        settings: &FacebookSettings,
        surface: Arc<dyn PresentationSurface>,
    ) -> Self {
        Self {
            sdk,
            permissions: settings.permissions.clone(),
            surface,
        }
    }
}

impl<S> FacebookLoginProvider<S> {
    fn declined_permissions<'a>(&'a self, result: &FacebookLoginResult) -> Vec<&'a str> {
        self.permissions
            .iter()
            .filter(|permission| !result.granted_permissions.contains(*permission))
            .map(String::as_str)
            .collect()
    }
}

impl<S> LoginProvider for FacebookLoginProvider<S>
where
    S: FacebookLoginSdk + Send + Sync,
{
    #[tracing::instrument(
        name = "Facebook login",
        skip_all,
        fields(surface = %self.surface.identifier(), permissions = ?self.permissions)
    )]
    async fn login(&self) -> Option<LoginResult> {
        // 유효한 토큰이 남아 있어도 항상 새로 로그인한다.
        if let Some(token) = self
            .sdk
            .current_access_token()
            .filter(|token| !token.is_expired())
        {
            tracing::debug!(
                user_id = %token.user_id,
                "Logging out the current Facebook access token"
            );
            self.sdk.log_out();
        }

        match self
            .sdk
            .log_in(&self.permissions, self.surface.as_ref())
            .await
        {
            Ok(result) if result.is_cancelled => {
                tracing::info!("The user cancelled the Facebook login");
                return None;
            }
            Ok(result) => {
                let declined = self.declined_permissions(&result);
                if !declined.is_empty() {
                    // 거절된 권한의 필드는 프로필에서 빠진다.
                    tracing::warn!(?declined, "The user declined some Facebook permissions");
                }
            }
            Err(e) => return Some(Err(e)),
        }

        let profile = match self.sdk.load_current_profile().await {
            Ok(profile) => profile.unwrap_or_default(),
            Err(e) => return Some(Err(e)),
        };

        Some(Ok(Profile::new(
            profile.first_name,
            profile.last_name,
            profile.email,
            None,
            None,
        )))
    }
}

impl<S> DeepLinkHandler for FacebookLoginProvider<S>
where
    S: FacebookLoginSdk + Send + Sync,
{
    fn open_url(&self, url: &Url, options: &OpenUrlOptions) -> bool {
        self.sdk.handle_url(url, options)
    }
}
