use crate::IdentityRecord;

use serde::{Deserialize, Serialize};

/// Identity record as exposed over HTTP (no credential hash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl From<IdentityRecord> for Profile {
    fn from(record: IdentityRecord) -> Self {
        record.to_profile()
    }
}
