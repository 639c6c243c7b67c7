use std::sync::LazyLock;

use regex::Regex;

use super::FieldError;

// `local@domain.tld` 형태 전체와 일치해야 한다.
// 대소문자를 모두 문자 클래스에 넣었으므로 대소문자를 구분하지 않는다.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$").unwrap()
});

#[derive(Debug)]
pub struct ProfileEmail(String);

impl TryFrom<String> for ProfileEmail {
    type Error = FieldError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if EMAIL_REGEX.is_match(&s) {
            Ok(Self(s))
        } else {
            Err(FieldError::InvalidEmail)
        }
    }
}

impl AsRef<str> for ProfileEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
