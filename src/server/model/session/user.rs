use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key holding the signed-in user's ID
pub const SESSION_USER_ID_KEY: &str = "wamumbi:user:id";

#[derive(Default, Deserialize, Serialize, Debug)]
/// Signed-in user's ID as stored in the session
pub struct SessionUserId(
    /// Decimal user ID
    pub String,
);

impl SessionUserId {
    /// Insert user ID into session
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get user ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session user id: {}", e))
                })
            })
            .transpose()
    }

    /// Remove user ID from session, returning it if one was present
    pub async fn remove(session: &Session) -> Result<Option<i32>, Error> {
        let user_id = Self::get(session).await?;

        if user_id.is_some() {
            session.remove::<SessionUserId>(SESSION_USER_ID_KEY).await?;
        }

        Ok(user_id)
    }
}

#[cfg(test)]
mod tests {
    use wamumbi_test_utils::prelude::*;

    use crate::server::model::session::user::{SessionUserId, SESSION_USER_ID_KEY};

    #[tokio::test]
    /// Expect Some when user ID is present in session
    async fn returns_inserted_user_id() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let user_id = 1;
        SessionUserId::insert(&test.session, user_id).await.unwrap();

        let result = SessionUserId::get(&test.session).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap(), Some(user_id));

        Ok(())
    }

    #[tokio::test]
    /// Expect None when no user ID is present in session
    async fn returns_none_without_user_id() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = SessionUserId::get(&test.session).await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_none());

        Ok(())
    }

    #[tokio::test]
    /// Expect parse error when user ID inserted into session is not an i32
    async fn fails_for_invalid_user_id() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        test.session
            .insert(SESSION_USER_ID_KEY, SessionUserId("invalid_id".to_string()))
            .await?;

        let result = SessionUserId::get(&test.session).await;

        assert!(result.is_err());

        Ok(())
    }

    #[tokio::test]
    /// Expect remove to return the user ID and clear it from session
    async fn removes_user_id() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        SessionUserId::insert(&test.session, 3).await.unwrap();

        let removed = SessionUserId::remove(&test.session).await.unwrap();

        assert_eq!(removed, Some(3));
        assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

        Ok(())
    }
}
