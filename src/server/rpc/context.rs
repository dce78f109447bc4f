use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::user::SessionUserId,
};

/// Request-scoped state passed to every procedure.
#[derive(Clone)]
pub struct RpcContext {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Session of the calling client
    pub session: Session,
    /// Signed-in user, if any
    pub user_id: Option<i32>,
}

impl RpcContext {
    /// Builds the context for a request, reading the signed-in user from the session.
    pub async fn from_session(db: DatabaseConnection, session: Session) -> Result<Self, Error> {
        let user_id = SessionUserId::get(&session).await?;

        Ok(Self {
            db,
            session,
            user_id,
        })
    }

    /// Signed-in user ID, or an error for procedures that require one
    pub fn require_user(&self) -> Result<i32, Error> {
        self.user_id
            .ok_or(Error::AuthError(AuthError::UserNotInSession))
    }
}
