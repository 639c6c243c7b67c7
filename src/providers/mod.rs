mod facebook;
mod google;
mod resolver;

pub use facebook::{
    AccessToken, FacebookLoginProvider, FacebookLoginResult, FacebookLoginSdk, FacebookProfile,
};
pub use google::{GoogleConfiguration, GoogleLoginProvider, GoogleSignInSdk, GoogleUser};
pub use resolver::{ProviderResolver, SocialLoginProvider, SocialProviderResolver};

use crate::domain::Profile;

/// 공급자 로그인 결과
/// 성공하면 검증하기 전의 프로필을, 실패하면 공급자 SDK의 오류를 그대로 담는다.
pub type LoginResult = Result<Profile, anyhow::Error>;

/// 소셜 로그인 공급자
#[trait_variant::make(Send)]
pub trait LoginProvider {
    /// 공급자 SDK로 로그인한다.
    ///
    /// 사용자가 로그인을 취소하면 `None`을 반환한다.
    /// 취소는 오류가 아니다.
    async fn login(&self) -> Option<LoginResult>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    Google,
    Facebook,
}

impl ProviderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Google => "google",
            ProviderType::Facebook => "facebook",
        }
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderType {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "facebook" => Ok(Self::Facebook),
            other => Err(format!(
                "{} is not a supported login provider. Use either `google` or `facebook`.",
                other
            )),
        }
    }
}
