use crate::ClientError;

use sf_core::ProfileDraft;

use std::str::FromStr;

/// Draft fields the user may change. The email is the identity key and is
/// not editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableField {
    FirstName,
    LastName,
    ContactNumber,
    Password,
}

impl EditableField {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditableField::FirstName => "firstName",
            EditableField::LastName => "lastName",
            EditableField::ContactNumber => "contactNumber",
            EditableField::Password => "password",
        }
    }

    /// Empty clears the optional fields
    pub(crate) fn apply(&self, draft: &mut ProfileDraft, value: &str) {
        let optional = || Some(value.to_string()).filter(|v| !v.is_empty());
        match self {
            EditableField::FirstName => draft.first_name = value.to_string(),
            EditableField::LastName => draft.last_name = value.to_string(),
            EditableField::ContactNumber => draft.contact_number = optional(),
            EditableField::Password => draft.password = optional(),
        }
    }
}

impl FromStr for EditableField {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "firstname" => Ok(EditableField::FirstName),
            "lastname" => Ok(EditableField::LastName),
            "contact" | "contactnumber" => Ok(EditableField::ContactNumber),
            "password" => Ok(EditableField::Password),
            _ => Err(ClientError::validation(
                format!("Unknown or read-only field: {}", s),
                Some(s),
            )),
        }
    }
}
