use serde::{Deserialize, Serialize};

use super::{required_str, MAX_GENDER, MAX_NAME};
use crate::errors::ApiResult;
use crate::models::people;

#[derive(Debug, Default, Deserialize)]
pub struct PeopleCreateReq {
    pub name: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug)]
pub struct NewPeople {
    pub name: String,
    pub gender: String,
}

impl PeopleCreateReq {
    pub fn validate(self) -> ApiResult<NewPeople> {
        Ok(NewPeople {
            name: required_str("name", self.name, MAX_NAME)?,
            gender: required_str("gender", self.gender, MAX_GENDER)?,
        })
    }
}

/// `GET /people/{id}` wraps the row under its kind.
#[derive(Debug, Serialize)]
pub struct PeopleDetail {
    pub people: people::Model,
}
