use axum::response::{IntoResponse, Redirect};

/// Page hosting the sign-in flow
pub const SIGN_IN_PATH: &str = "/sign-in";

/// Legacy login path, always sends the browser to the sign-in page.
///
/// Responds with `307 Temporary Redirect` and no body.
pub async fn login() -> impl IntoResponse {
    Redirect::temporary(SIGN_IN_PATH)
}
