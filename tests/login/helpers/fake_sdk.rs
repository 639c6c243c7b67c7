use std::sync::Mutex;

use social_sign_in::{
    deep_link::OpenUrlOptions,
    providers::{
        AccessToken, FacebookLoginResult, FacebookLoginSdk, FacebookProfile, GoogleConfiguration,
        GoogleSignInSdk, GoogleUser,
    },
    surface::PresentationSurface,
};
use url::Url;

use super::SampleError;

#[derive(Clone)]
pub enum GoogleScript {
    SignedIn(GoogleUser),
    // 사용자도 오류도 돌려주지 않는다.
    Cancelled,
    Fails(SampleError),
}

/// 정해진 대로 응답하고 호출을 기록하는 구글 SDK
pub struct ScriptedGoogleSdk {
    pub has_previous_session: bool,
    pub sign_in: GoogleScript,
    calls: Mutex<Vec<String>>,
}

impl ScriptedGoogleSdk {
    pub fn new(sign_in: GoogleScript) -> Self {
        Self {
            has_previous_session: false,
            sign_in,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_previous_session(mut self) -> Self {
        self.has_previous_session = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

impl GoogleSignInSdk for ScriptedGoogleSdk {
    async fn restore_previous_sign_in(&self) -> Result<Option<GoogleUser>, anyhow::Error> {
        self.record("restore_previous_sign_in");
        if self.has_previous_session {
            Ok(Some(GoogleUser::default()))
        } else {
            Err(anyhow::anyhow!("The user has not signed in before."))
        }
    }

    fn sign_out(&self) {
        self.record("sign_out");
    }

    async fn sign_in(
        &self,
        configuration: &GoogleConfiguration,
        presenting: &dyn PresentationSurface,
    ) -> Result<Option<GoogleUser>, anyhow::Error> {
        self.record(format!(
            "sign_in:{}:{}",
            configuration.client_id,
            presenting.identifier()
        ));
        match &self.sign_in {
            GoogleScript::SignedIn(user) => Ok(Some(user.clone())),
            GoogleScript::Cancelled => Ok(None),
            GoogleScript::Fails(e) => Err(e.clone().into()),
        }
    }

    fn request_scopes(&self, scopes: &[String], _: &dyn PresentationSurface) {
        self.record(format!("request_scopes:{}", scopes.join(",")));
    }

    fn handle_url(&self, url: &Url) -> bool {
        self.record(format!("handle_url:{}", url));
        true
    }
}

#[derive(Clone)]
pub enum FacebookScript {
    LoggedIn(Option<FacebookProfile>),
    Cancelled,
    LogInFails(SampleError),
    ProfileFails(SampleError),
}

/// 정해진 대로 응답하고 호출을 기록하는 페이스북 SDK
pub struct ScriptedFacebookSdk {
    pub access_token: Option<AccessToken>,
    pub log_in: FacebookScript,
    // 사용자가 로그인 화면에서 거절하는 권한
    pub declined_permissions: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedFacebookSdk {
    pub fn new(log_in: FacebookScript) -> Self {
        Self {
            access_token: None,
            log_in,
            declined_permissions: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_access_token(mut self, access_token: AccessToken) -> Self {
        self.access_token = Some(access_token);
        self
    }

    pub fn declining(mut self, permission: &str) -> Self {
        self.declined_permissions.push(permission.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

impl FacebookLoginSdk for ScriptedFacebookSdk {
    fn current_access_token(&self) -> Option<AccessToken> {
        self.access_token.clone()
    }

    fn log_out(&self) {
        self.record("log_out");
    }

    async fn log_in(
        &self,
        permissions: &[String],
        from: &dyn PresentationSurface,
    ) -> Result<FacebookLoginResult, anyhow::Error> {
        self.record(format!(
            "log_in:{}:{}",
            permissions.join(","),
            from.identifier()
        ));
        match &self.log_in {
            FacebookScript::LogInFails(e) => Err(e.clone().into()),
            FacebookScript::Cancelled => Ok(FacebookLoginResult {
                is_cancelled: true,
                granted_permissions: Vec::new(),
            }),
            FacebookScript::LoggedIn(_) | FacebookScript::ProfileFails(_) => {
                Ok(FacebookLoginResult {
                    is_cancelled: false,
                    granted_permissions: permissions
                        .iter()
                        .filter(|permission| !self.declined_permissions.contains(*permission))
                        .cloned()
                        .collect(),
                })
            }
        }
    }

    async fn load_current_profile(&self) -> Result<Option<FacebookProfile>, anyhow::Error> {
        self.record("load_current_profile");
        match &self.log_in {
            FacebookScript::LoggedIn(profile) => Ok(profile.clone()),
            FacebookScript::ProfileFails(e) => Err(e.clone().into()),
            FacebookScript::Cancelled | FacebookScript::LogInFails(_) => Ok(None),
        }
    }

    fn handle_url(&self, url: &Url, options: &OpenUrlOptions) -> bool {
        self.record(format!(
            "handle_url:{}:{}",
            url,
            options.source_application.as_deref().unwrap_or("-")
        ));
        true
    }
}
