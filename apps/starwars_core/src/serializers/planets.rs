use serde::{Deserialize, Serialize};

use super::{required_str, MAX_CLIMATE, MAX_NAME};
use crate::errors::ApiResult;
use crate::models::planets;

#[derive(Debug, Default, Deserialize)]
pub struct PlanetsCreateReq {
    pub name: Option<String>,
    pub climate: Option<String>,
}

#[derive(Debug)]
pub struct NewPlanets {
    pub name: String,
    pub climate: String,
}

impl PlanetsCreateReq {
    pub fn validate(self) -> ApiResult<NewPlanets> {
        Ok(NewPlanets {
            name: required_str("name", self.name, MAX_NAME)?,
            climate: required_str("climate", self.climate, MAX_CLIMATE)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PlanetsDetail {
    pub planets: planets::Model,
}
