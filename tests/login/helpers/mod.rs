mod fake_sdk;
mod test_login;

use std::sync::Arc;

use social_sign_in::{
    providers::SocialProviderResolver,
    settings::{FacebookSettings, GoogleSettings},
};

pub use fake_provider::{FakeOutcome, FakeResolver};
pub use fake_sdk::{FacebookScript, GoogleScript, ScriptedFacebookSdk, ScriptedGoogleSdk};
pub use test_login::{TestLogin, TestSurface};

pub type ScriptedResolver = SocialProviderResolver<ScriptedGoogleSdk, ScriptedFacebookSdk>;

pub const TEST_CLIENT_ID: &str = "test-client-id";

// 공급자 SDK가 돌려주는 오류를 대신한다.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    #[error("Sample error")]
    Error,
}

/// 두 SDK가 모두 연결된 리졸버를 만든다.
pub fn scripted_resolver(
    google: &Arc<ScriptedGoogleSdk>,
    facebook: &Arc<ScriptedFacebookSdk>,
) -> ScriptedResolver {
    scripted_resolver_with(
        GoogleSettings {
            client_id: TEST_CLIENT_ID.to_string(),
            extended_scopes: Vec::new(),
        },
        google,
        facebook,
    )
}

pub fn scripted_resolver_with(
    google_settings: GoogleSettings,
    google: &Arc<ScriptedGoogleSdk>,
    facebook: &Arc<ScriptedFacebookSdk>,
) -> ScriptedResolver {
    SocialProviderResolver::new(google_settings, FacebookSettings::default())
        .with_google(Arc::clone(google))
        .with_facebook(Arc::clone(facebook))
}
