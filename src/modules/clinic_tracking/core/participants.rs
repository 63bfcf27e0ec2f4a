// People and catalog entries a booking points at. Owned by other modules;
// clinic tracking only reads them to fill board rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildProfile {
    pub id: String,
    pub parent_id: String,
    pub first_name: String,
    pub nickname: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentProfile {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TherapistProfile {
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingLinks {
    pub child: Option<ChildProfile>,
    pub parent: Option<ParentProfile>,
    pub therapist: Option<TherapistProfile>,
    pub session_type_name: Option<String>,
    pub case_id: Option<String>,
}
