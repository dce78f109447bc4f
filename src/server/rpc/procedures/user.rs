use dioxus_logger::tracing;

use crate::{
    model::{
        api::NoInput,
        user::{SignOutDto, SyncUserInput, UserDto, UserListDto},
    },
    server::{
        error::{auth::AuthError, rpc::RpcError, Error},
        model::session::user::SessionUserId,
        rpc::RpcContext,
        service::UserService,
    },
};

/// `user.me`
///
/// A session pointing at a user that no longer exists is cleared.
pub async fn me(ctx: RpcContext, _: NoInput) -> Result<UserDto, RpcError> {
    let user_id = ctx.require_user()?;

    match UserService::new(&ctx.db).get_user(user_id).await? {
        Some(user) => Ok(user),
        None => {
            SessionUserId::remove(&ctx.session).await?;

            tracing::debug!(
                "Session cleared for user ID {} with active session but was not found in database",
                user_id
            );

            Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)).into())
        }
    }
}

/// `user.list`
pub async fn list(ctx: RpcContext, _: NoInput) -> Result<UserListDto, RpcError> {
    let users = UserService::new(&ctx.db).list().await?;

    Ok(UserListDto { users })
}

/// `user.sync`
///
/// Called after the hosted identity provider signs a user in. Stores the profile and
/// remembers the user in a session with a freshly issued ID.
// TODO: verify the provider's session token before trusting `auth_id`, the input is
// currently taken at face value.
pub async fn sync(ctx: RpcContext, input: SyncUserInput) -> Result<UserDto, RpcError> {
    let user = UserService::new(&ctx.db).sync(input).await?;

    ctx.session.cycle_id().await.map_err(Error::from)?;
    SessionUserId::insert(&ctx.session, user.id).await?;

    Ok(user)
}

/// `user.signOut`
pub async fn sign_out(ctx: RpcContext, _: NoInput) -> Result<SignOutDto, RpcError> {
    let removed = SessionUserId::remove(&ctx.session).await?;

    Ok(SignOutDto {
        signed_out: removed.is_some(),
    })
}
