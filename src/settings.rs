use std::path::Path;

use serde_aux::prelude::deserialize_number_from_string;

use crate::{
    domain::{BirthDateRule, FieldValidator},
    providers::GoogleConfiguration,
};

#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationSettings,
    #[serde(default)]
    pub google: GoogleSettings,
    #[serde(default)]
    pub facebook: FacebookSettings,
    #[serde(default)]
    pub validation: ValidationSettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    pub name: String,
}

#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct GoogleSettings {
    pub client_id: String,
    // 생일, 전화번호처럼 로그인 후 따로 동의를 받아야 하는 권한
    #[serde(default)]
    pub extended_scopes: Vec<String>,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct FacebookSettings {
    pub permissions: Vec<String>,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ValidationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub birth_year_floor: i32,
    #[serde(default)]
    pub reject_unparsable_birth_date: bool,
}

/// 애플리케이션이 사용할 수 있는 런타임 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Settings {
    /// `./settings` 디렉터리에서 구성을 읽는다.
    /// 실행 환경은 `APP_ENVIRONMENT`로 정하고 지정되지 않았으면 `local`을 사용한다.
    pub fn get_settings() -> Result<Self, config::ConfigError> {
        let base_path = std::env::current_dir().map_err(|e| {
            config::ConfigError::Message(format!(
                "Failed to determine the current directory: {}",
                e
            ))
        })?;

        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or("local".into())
            .as_str()
            .try_into()
            .map_err(config::ConfigError::Message)?;

        Self::from_directory(base_path.join("settings"), environment)
    }

    pub fn from_directory(
        settings_directory: impl AsRef<Path>,
        environment: Environment,
    ) -> Result<Self, config::ConfigError> {
        Self::from_directory_with_overrides(
            settings_directory,
            environment,
            Self::environment_overrides(),
        )
    }

    /// 환경 변수로 설정을 덮어쓰는 소스
    ///
    /// `APP_VALIDATION__BIRTH_YEAR_FLOOR=2005` => `Settings.validation.birth_year_floor`
    /// 목록 설정은 쉼표로 나눈다.
    /// `APP_FACEBOOK__PERMISSIONS=public_profile,email` => `Settings.facebook.permissions`
    pub fn environment_overrides() -> config::Environment {
        config::Environment::with_prefix("APP")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("facebook.permissions")
            .with_list_parse_key("google.extended_scopes")
    }

    pub fn from_directory_with_overrides(
        settings_directory: impl AsRef<Path>,
        environment: Environment,
        overrides: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let settings_directory = settings_directory.as_ref();
        let environment_filename = format!("{}.json", environment.as_str());

        let settings = config::Config::builder()
            .add_source(config::File::from(settings_directory.join("base.json")))
            .add_source(
                config::File::from(settings_directory.join(environment_filename)).required(false),
            )
            .add_source(overrides)
            .build()?;
        settings.try_deserialize::<Settings>()
    }
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            name: "social-sign-in".to_string(),
        }
    }
}

impl GoogleSettings {
    pub fn configuration(&self) -> GoogleConfiguration {
        GoogleConfiguration {
            client_id: self.client_id.clone(),
        }
    }
}

impl Default for FacebookSettings {
    fn default() -> Self {
        Self {
            permissions: vec!["public_profile".to_string(), "email".to_string()],
        }
    }
}

impl ValidationSettings {
    pub fn birth_date_rule(&self) -> BirthDateRule {
        BirthDateRule {
            year_floor: self.birth_year_floor,
            reject_unparsable: self.reject_unparsable_birth_date,
        }
    }

    pub fn field_validator(&self) -> FieldValidator {
        FieldValidator::new(self.birth_date_rule())
    }
}

impl Default for ValidationSettings {
    fn default() -> Self {
        let rule = BirthDateRule::default();
        Self {
            birth_year_floor: rule.year_floor,
            reject_unparsable_birth_date: rule.reject_unparsable,
        }
    }
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<&str> for Environment {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
