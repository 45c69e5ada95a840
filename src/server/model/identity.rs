/// The authenticated caller, as resolved from the session and the `rishta_user` table.
///
/// Username and email are lowercased once here so allow-list checks never have to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i32,
    pub username_lower: String,
    pub email_lower: String,
}

impl From<entity::rishta_user::Model> for CurrentUser {
    fn from(user: entity::rishta_user::Model) -> Self {
        Self {
            id: user.id,
            username_lower: user.username.to_lowercase(),
            email_lower: user.email.to_lowercase(),
        }
    }
}
