use sea_orm::DatabaseConnection;

use crate::{
    model::user::{SyncUserInput, UserDto},
    server::{
        data::UserRepository,
        error::Error,
        model::db::UserModel,
        service::{optional_text, required_text},
    },
};

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            auth_id: user.auth_id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

/// Service for managing user accounts.
///
/// Users are created and updated from the profile reported by the hosted identity
/// provider; this service never handles credentials.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Lists every user.
    pub async fn list(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).list().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Creates the user for an identity provider ID, or refreshes its profile if it exists.
    pub async fn sync(&self, input: SyncUserInput) -> Result<UserDto, Error> {
        let auth_id = required_text("Auth ID", &input.auth_id)?;
        let email = required_text("Email", &input.email)?;
        if !email.contains('@') {
            return Err(Error::Validation(format!(
                "Email {:?} is not a valid address",
                email
            )));
        }
        let name = optional_text(input.name);

        let user_repo = UserRepository::new(self.db);
        let user = match user_repo.find_by_auth_id(&auth_id).await? {
            Some(user) => user_repo.update_profile(user, email, name).await?,
            None => user_repo.create(auth_id, email, name).await?,
        };

        Ok(user.into())
    }
}
