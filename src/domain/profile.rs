/// 로그인한 사용자의 프로필
///
/// 공급자가 돌려준 가공 전 프로필과 검증을 마친 프로필 모두 이 타입을 사용한다.
/// 필드는 모두 선택값이고 한 번 만들어진 뒤에는 바뀌지 않는다.
/// 검증은 기존 값을 고치지 않고 새 `Profile`을 만든다.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    name: Option<String>,
    surname: Option<String>,
    email: Option<String>,
    birth_date: Option<String>,
    phone_number: Option<String>,
}

impl Profile {
    pub fn new(
        name: Option<String>,
        surname: Option<String>,
        email: Option<String>,
        birth_date: Option<String>,
        phone_number: Option<String>,
    ) -> Self {
        Self {
            name,
            surname,
            email,
            birth_date,
            phone_number,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.birth_date = Some(birth_date.into());
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn surname(&self) -> Option<&str> {
        self.surname.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn birth_date(&self) -> Option<&str> {
        self.birth_date.as_deref()
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }
}
