use crate::{providers::ProviderType, utils::error_chain_fmt};

// 로그인 시도가 실패한 이유
// 필드 검증 실패는 여기에 포함되지 않는다.
// 검증에 실패한 필드는 프로필 안의 문구로 대체된다.
#[derive(thiserror::Error)]
pub enum LoginError {
    #[error("A login provider type must be selected before logging in.")]
    ProviderTypeNotSet,

    #[error("No presentation surface is available for the login provider.")]
    SurfaceUnavailable,

    #[error("The {0} login provider is not available.")]
    ProviderUnavailable(ProviderType),

    // 공급자 SDK의 오류를 그대로 전달한다.
    // 원래 오류는 `downcast_ref`로 꺼낼 수 있다.
    #[error(transparent)]
    Provider(anyhow::Error),
}

impl std::fmt::Debug for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

// 오류 관리를 편하게 하기 위한 래퍼 타입
// 호스트 바이너리가 설정, 입출력, JSON 오류를 한 번에 다룰 때 사용한다.
#[derive(thiserror::Error)]
pub enum SocialSignInError {
    #[error("Config Error")]
    ConfigError(#[from] config::ConfigError),

    #[error("IO Error")]
    IOError(#[from] std::io::Error),

    #[error("Json Error")]
    JsonError(#[from] serde_json::Error),
}

impl std::fmt::Debug for SocialSignInError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
