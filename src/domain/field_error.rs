// 필드 검증 실패 사유
// `Display` 결과가 곧 화면에 대신 보여줄 문구다.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Invalid name format")]
    InvalidName,
    #[error("Invalid surname format")]
    InvalidSurname,
    #[error("Email is invalid")]
    InvalidEmail,
    #[error("Birthdate is sooner than {0}")]
    BirthDateTooEarly(i32),
    #[error("Birthdate is invalid")]
    UnparsableBirthDate,
    #[error("Phone number is invalid")]
    InvalidPhoneNumber,
}
