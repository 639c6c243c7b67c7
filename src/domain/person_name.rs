use super::FieldError;

/// 비어 있지 않고 ASCII 영문자와 숫자로만 이루어졌는지 확인한다.
/// 공백이나 ASCII가 아닌 문자(한글, 키릴 문자 등)가 하나라도 있으면 `false`다.
fn is_ascii_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

#[derive(Debug)]
pub struct GivenName(String);

impl TryFrom<String> for GivenName {
    type Error = FieldError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if is_ascii_alphanumeric(&s) {
            Ok(Self(s))
        } else {
            Err(FieldError::InvalidName)
        }
    }
}

impl AsRef<str> for GivenName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug)]
pub struct FamilyName(String);

impl TryFrom<String> for FamilyName {
    type Error = FieldError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if is_ascii_alphanumeric(&s) {
            Ok(Self(s))
        } else {
            Err(FieldError::InvalidSurname)
        }
    }
}

impl AsRef<str> for FamilyName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
