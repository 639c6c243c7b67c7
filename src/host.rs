use crate::domain::{FieldValidator, Profile};

/// 가공 전 프로필(JSON)을 검증하고 정리된 프로필을 JSON으로 돌려준다.
///
/// 입력에 없는 필드는 출력에서도 `null`이다.
pub fn sanitize_profile_json(
    validator: &FieldValidator,
    input: &str,
) -> Result<String, serde_json::Error> {
    let raw: Profile = serde_json::from_str(input)?;
    let sanitized = validator.validate(&raw);
    tracing::debug!(?raw, ?sanitized, "Validated a raw profile");

    let mut output = serde_json::to_string_pretty(&sanitized)?;
    output.push('\n');
    Ok(output)
}
