use super::{
    BirthDate, BirthDateRule, FamilyName, FieldError, GivenName, PhoneNumber, Profile,
    ProfileEmail,
};

/// 공급자가 돌려준 프로필을 화면에 보여줄 수 있는 프로필로 바꾼다.
///
/// 필드마다 규칙을 따로 적용하므로 한 필드의 실패가 다른 필드에 영향을 주지 않는다.
/// 검증에 실패한 필드는 오류가 아니라 실패 사유 문구로 대체된다.
/// 비어 있거나 없는 필드는 결과에서도 없는 상태로 남는다.
#[derive(Debug, Clone, Default)]
pub struct FieldValidator {
    birth_date_rule: BirthDateRule,
}

impl FieldValidator {
    pub fn new(birth_date_rule: BirthDateRule) -> Self {
        Self { birth_date_rule }
    }

    pub fn validate(&self, raw: &Profile) -> Profile {
        Profile::new(
            self.name(raw.name()),
            self.surname(raw.surname()),
            self.email(raw.email()),
            self.birth_date(raw.birth_date()),
            self.phone_number(raw.phone_number()),
        )
    }

    pub fn name(&self, name: Option<&str>) -> Option<String> {
        sanitize("name", name, GivenName::try_from)
    }

    pub fn surname(&self, surname: Option<&str>) -> Option<String> {
        sanitize("surname", surname, FamilyName::try_from)
    }

    pub fn email(&self, email: Option<&str>) -> Option<String> {
        sanitize("email", email, ProfileEmail::try_from)
    }

    pub fn birth_date(&self, birth_date: Option<&str>) -> Option<String> {
        sanitize("birth_date", birth_date, |s| {
            BirthDate::parse(s, &self.birth_date_rule)
        })
    }

    pub fn phone_number(&self, phone_number: Option<&str>) -> Option<String> {
        sanitize("phone_number", phone_number, PhoneNumber::try_from)
    }
}

// 값 자체는 개인 정보이므로 로그에 남기지 않는다.
fn sanitize<T, F>(field: &'static str, value: Option<&str>, parse: F) -> Option<String>
where
    T: AsRef<str>,
    F: FnOnce(String) -> Result<T, FieldError>,
{
    let value = value.filter(|v| !v.is_empty())?;
    match parse(value.to_string()) {
        Ok(accepted) => Some(accepted.as_ref().to_string()),
        Err(e) => {
            tracing::debug!(field, error.message = %e, "Replacing an invalid profile field");
            Some(e.to_string())
        }
    }
}
