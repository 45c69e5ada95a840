use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, identity::CurrentUser, session::user::SessionUserId},
};

/// Retrieves the caller from the session and then from the database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(CurrentUser)`: User found
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(
    state: &AppState,
    session: &Session,
) -> Result<CurrentUser, Error> {
    match get_optional_user_from_session(state, session).await? {
        Some(user) => Ok(user),
        None => Err(Error::AuthError(AuthError::UserNotInSession)),
    }
}

/// Same as [`get_user_from_session`] but treats an empty session as an anonymous caller
///
/// A session pointing at a deleted user is still an error, the session is cleared so the next
/// request is anonymous.
pub async fn get_optional_user_from_session(
    state: &AppState,
    session: &Session,
) -> Result<Option<CurrentUser>, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Ok(None);
    };

    let Some(user) = UserRepository::new(&state.db).get_by_id(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(Some(CurrentUser::from(user)))
}

/// Retrieves the caller and requires them to be on the administrator allow-list
///
/// # Returns
/// - `Ok(CurrentUser)`: Caller is an administrator
/// - `Err(Error::AuthError(AuthError::AdminRequired))`: Caller is not on the allow-list
/// - Other errors as for [`get_user_from_session`]
pub async fn get_admin_from_session(
    state: &AppState,
    session: &Session,
) -> Result<CurrentUser, Error> {
    let user = get_user_from_session(state, session).await?;
    state.admin.require_admin(&user)?;

    Ok(user)
}
