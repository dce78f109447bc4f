//! RPC procedure layer consumed by the web client.
//!
//! Procedures are named server functions with typed input and output, registered in an
//! [`RpcRouter`] and invoked over HTTP at `/api/trpc/{procedure}`. Queries are called with
//! `GET` and mutations with `POST`. The input and output types also provide the schemas
//! used to generate the API documentation.

/// Request-scoped procedure context
pub mod context;
/// Typed procedure definitions
pub mod procedure;
pub mod procedures;
/// Procedure registry and dispatch
pub mod router;

pub use context::RpcContext;
pub use procedure::{Procedure, ProcedureKind, ProcedureSchema};
pub use router::RpcRouter;

use procedures::{campaign, donation, user};

/// Builds the router holding every Wamumbi procedure.
pub fn app_router() -> RpcRouter {
    RpcRouter::new()
        .procedure(Procedure::query("campaign.list", campaign::list).summary("List campaigns"))
        .procedure(Procedure::query("campaign.byId", campaign::by_id).summary("Get a campaign"))
        .procedure(
            Procedure::mutation("campaign.create", campaign::create)
                .summary("Create a campaign"),
        )
        .procedure(
            Procedure::mutation("campaign.update", campaign::update)
                .summary("Update a campaign"),
        )
        .procedure(
            Procedure::mutation("campaign.delete", campaign::delete)
                .summary("Delete a campaign without donations"),
        )
        .procedure(Procedure::query("donation.list", donation::list).summary("List donations"))
        .procedure(
            Procedure::mutation("donation.create", donation::create)
                .summary("Donate to a campaign"),
        )
        .procedure(Procedure::query("user.me", user::me).summary("Get the signed-in user"))
        .procedure(Procedure::query("user.list", user::list).summary("List users"))
        .procedure(
            Procedure::mutation("user.sync", user::sync)
                .summary("Create or refresh the signed-in user's profile"),
        )
        .procedure(
            Procedure::mutation("user.signOut", user::sign_out)
                .summary("Forget the signed-in user"),
        )
}
