use serde::{Deserialize, Serialize};

use super::{required_str, MAX_EMAIL};
use crate::errors::{ApiError, ApiResult};
use crate::models::user;

#[derive(Debug, Default, Deserialize)]
pub struct UserCreateReq {
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

/// A validated user, password still in clear text.
#[derive(Debug)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

impl UserCreateReq {
    pub fn validate(self) -> ApiResult<NewUser> {
        let email = required_str("email", self.email, MAX_EMAIL)?;
        if !email.contains('@') {
            return Err(ApiError::Validation("email must contain '@'".into()));
        }
        let password = self
            .password
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| ApiError::missing("password"))?;

        Ok(NewUser {
            email,
            password,
            is_active: self.is_active.unwrap_or(true),
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserPublic {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

impl From<user::Model> for UserPublic {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            is_active: m.is_active,
        }
    }
}
