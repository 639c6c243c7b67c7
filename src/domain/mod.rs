mod birth_date;
mod field_error;
mod field_validator;
mod person_name;
mod phone_number;
mod profile;
mod profile_email;

pub use birth_date::{BirthDate, BirthDateRule};
pub use field_error::FieldError;
pub use field_validator::FieldValidator;
pub use person_name::{FamilyName, GivenName};
pub use phone_number::PhoneNumber;
pub use profile::Profile;
pub use profile_email::ProfileEmail;
