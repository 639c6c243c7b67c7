use super::FieldError;

/// `+`와 숫자만으로 다시 쓴 전화번호
#[derive(Debug)]
pub struct PhoneNumber(String);

impl TryFrom<String> for PhoneNumber {
    type Error = FieldError;

    /// 입력에서 숫자만 뽑아 `+` 뒤에 붙인다.
    /// 아라비아-인도 숫자나 전각 숫자처럼 ASCII가 아닌 숫자도 원래 문자 그대로 남긴다.
    /// 숫자가 하나도 없으면 `Err(FieldError::InvalidPhoneNumber)`를 반환한다.
    fn try_from(s: String) -> Result<Self, Self::Error> {
        let digits: String = s.chars().filter(|c| is_whole_number(*c)).collect();
        if digits.is_empty() {
            Err(FieldError::InvalidPhoneNumber)
        } else {
            Ok(Self(format!("+{}", digits)))
        }
    }
}

// `½`, `¾` 같은 분수 문자는 숫자지만 정수 값이 아니다.
fn is_whole_number(c: char) -> bool {
    c.is_numeric()
        && !matches!(
            c,
            '\u{00BC}'..='\u{00BE}' | '\u{2150}'..='\u{215F}' | '\u{2189}'
        )
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
