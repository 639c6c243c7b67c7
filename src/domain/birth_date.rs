use chrono::{Datelike, NaiveDate};

use super::FieldError;

const BIRTH_DATE_FORMAT: &str = "%d.%m.%Y";

/// 생년월일 검증 규칙
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDateRule {
    /// 태어난 해가 이 값보다 커야 한다.
    pub year_floor: i32,
    /// `true`이면 `dd.MM.yyyy`로 읽을 수 없는 값을 거부한다.
    /// 기본값은 `false`로, 읽을 수 없는 값을 그대로 통과시킨다.
    pub reject_unparsable: bool,
}

impl Default for BirthDateRule {
    fn default() -> Self {
        Self {
            year_floor: 2003,
            reject_unparsable: false,
        }
    }
}

#[derive(Debug)]
pub struct BirthDate(String);

impl BirthDate {
    pub fn parse(s: String, rule: &BirthDateRule) -> Result<Self, FieldError> {
        match NaiveDate::parse_from_str(&s, BIRTH_DATE_FORMAT) {
            Ok(date) if date.year() > rule.year_floor => Ok(Self(s)),
            Ok(_) => Err(FieldError::BirthDateTooEarly(rule.year_floor)),
            Err(e) if rule.reject_unparsable => {
                tracing::debug!(error.message = %e, "Rejecting an unparsable birth date");
                Err(FieldError::UnparsableBirthDate)
            }
            Err(e) => {
                // 읽을 수 없는 날짜가 검증을 통과한다.
                // `validation.reject_unparsable_birth_date`로 거부할 수 있다.
                tracing::warn!(
                    error.message = %e,
                    "Passing through a birth date that is not in dd.MM.yyyy format"
                );
                Ok(Self(s))
            }
        }
    }
}

impl TryFrom<String> for BirthDate {
    type Error = FieldError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s, &BirthDateRule::default())
    }
}

impl AsRef<str> for BirthDate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
