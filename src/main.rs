use social_sign_in::{
    error::SocialSignInError,
    host::sanitize_profile_json,
    settings::Settings,
    telemetry::{get_tracing_subscriber, init_tracing_subscriber},
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::level_filters::LevelFilter;

// 표준 입력으로 받은 가공 전 프로필(JSON)을 검증해서 표준 출력으로 내보낸다.
// `echo '{"name": "Name", "phoneNumber": "+9989 012 345 67"}' | cargo run`
#[tokio::main]
async fn main() -> Result<(), SocialSignInError> {
    // 표준 출력은 결과에 사용하므로 로그는 표준 에러로 보낸다.
    let tracing_subscriber = get_tracing_subscriber(LevelFilter::INFO, std::io::stderr);
    init_tracing_subscriber(tracing_subscriber);

    let settings = Settings::get_settings()?;
    tracing::info!(application = %settings.application.name, "Validating a raw profile");
    let validator = settings.validation.field_validator();

    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    let output = sanitize_profile_json(&validator, &input)?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(output.as_bytes()).await?;
    stdout.flush().await?;

    Ok(())
}
