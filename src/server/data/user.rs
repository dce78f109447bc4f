use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::UserModel;

/// Queries for the `wamumbi_user` table
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(
        &self,
        auth_id: String,
        email: String,
        name: Option<String>,
    ) -> Result<UserModel, DbErr> {
        let now = Utc::now().naive_utc();

        let user = entity::wamumbi_user::ActiveModel {
            auth_id: ActiveValue::Set(auth_id),
            email: ActiveValue::Set(email),
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Updates the profile fields of an existing user
    pub async fn update_profile(
        &self,
        user: UserModel,
        email: String,
        name: Option<String>,
    ) -> Result<UserModel, DbErr> {
        let mut user: entity::wamumbi_user::ActiveModel = user.into();

        user.email = ActiveValue::Set(email);
        user.name = ActiveValue::Set(name);
        user.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        user.update(self.db).await
    }

    /// Retrieves a user by ID
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::WamumbiUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Finds a user by the ID issued by the hosted identity provider
    pub async fn find_by_auth_id(&self, auth_id: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::WamumbiUser::find()
            .filter(entity::wamumbi_user::Column::AuthId.eq(auth_id))
            .one(self.db)
            .await
    }

    /// Lists all users, oldest first
    pub async fn list(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::WamumbiUser::find()
            .order_by_asc(entity::wamumbi_user::Column::Id)
            .all(self.db)
            .await
    }
}
