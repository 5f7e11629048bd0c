use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection,
    EntityTrait, IntoActiveModel, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::{error, info};

use crate::errors::{ApiError, ApiResult};
use crate::models::{
    favorite_people, favorite_planets, favorite_users, people, planets, user, Resource,
};
use crate::password::hash_password;
use crate::serializers::favorites::{NewFavoritePeople, NewFavoritePlanets, NewFavoriteUsers};
use crate::serializers::people::NewPeople;
use crate::serializers::planets::NewPlanets;
use crate::serializers::user::NewUser;

/// Owns every persistence side effect. Cloning shares the pool.
#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All rows, oldest first.
    pub async fn list<E: Resource>(&self) -> ApiResult<Vec<E::Model>> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
        Ok(query.all(&self.db).await?)
    }

    pub async fn get<E>(&self, id: i32) -> ApiResult<E::Model>
    where
        E: Resource,
        i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        E::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ApiError::not_found::<E>(id))
    }

    /// Removes the row and hands back what it held. Lookup and delete share
    /// one transaction; an absent id never reaches the delete.
    pub async fn delete<E>(&self, id: i32) -> ApiResult<E::Model>
    where
        E: Resource,
        i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        let txn = self.db.begin().await?;
        let Some(found) = E::find_by_id(id).one(&txn).await? else {
            return Err(ApiError::not_found::<E>(id));
        };
        E::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        info!(kind = E::KIND, id, "deleted");
        Ok(found)
    }

    pub async fn create<A>(&self, row: A) -> ApiResult<<A::Entity as EntityTrait>::Model>
    where
        A: ActiveModelTrait + ActiveModelBehavior + Send,
        A::Entity: Resource,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        let created = row.insert(&self.db).await?;
        info!(kind = <A::Entity as Resource>::KIND, "created");
        Ok(created)
    }

    /// Foreign-key check ahead of an insert.
    pub async fn require<E>(&self, field: &str, id: i32) -> ApiResult<()>
    where
        E: Resource,
        i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        match E::find_by_id(id).one(&self.db).await? {
            Some(_) => Ok(()),
            None => Err(ApiError::Validation(format!(
                "{field} {id} does not reference an existing {}",
                E::KIND
            ))),
        }
    }

    pub async fn create_user(&self, new: NewUser) -> ApiResult<user::Model> {
        if user::Entity::find()
            .filter(user::Column::Email.eq(&new.email))
            .one(&self.db)
            .await?
            .is_some()
        {
            return Err(ApiError::Conflict("email already exists".into()));
        }

        // argon2 is memory-hard; keep it off the async workers
        let password = new.password;
        let hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(anyhow::Error::from)
            .and_then(|hashed| hashed)
            .map_err(|e| {
                error!(error = %e, "password hashing failed");
                ApiError::Internal(e)
            })?;

        self.create(user::ActiveModel {
            id: NotSet,
            email: Set(new.email),
            password: Set(hash),
            is_active: Set(new.is_active),
        })
        .await
    }

    pub async fn create_people(&self, new: NewPeople) -> ApiResult<people::Model> {
        self.create(people::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            gender: Set(new.gender),
        })
        .await
    }

    pub async fn create_planets(&self, new: NewPlanets) -> ApiResult<planets::Model> {
        self.create(planets::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            climate: Set(new.climate),
        })
        .await
    }

    pub async fn create_favorite_users(
        &self,
        new: NewFavoriteUsers,
    ) -> ApiResult<favorite_users::Model> {
        self.require::<user::Entity>("users_id", new.users_id).await?;
        self.create(favorite_users::ActiveModel {
            id: NotSet,
            users_id: Set(new.users_id),
        })
        .await
    }

    pub async fn create_favorite_people(
        &self,
        new: NewFavoritePeople,
    ) -> ApiResult<favorite_people::Model> {
        self.require::<user::Entity>("users_id", new.users_id).await?;
        self.require::<people::Entity>("people_id", new.people_id).await?;
        self.create(favorite_people::ActiveModel {
            id: NotSet,
            users_id: Set(new.users_id),
            people_id: Set(new.people_id),
        })
        .await
    }

    pub async fn create_favorite_planets(
        &self,
        new: NewFavoritePlanets,
    ) -> ApiResult<favorite_planets::Model> {
        self.require::<user::Entity>("users_id", new.users_id).await?;
        self.require::<planets::Entity>("planets_id", new.planets_id).await?;
        self.create(favorite_planets::ActiveModel {
            id: NotSet,
            users_id: Set(new.users_id),
            planets_id: Set(new.planets_id),
        })
        .await
    }
}
