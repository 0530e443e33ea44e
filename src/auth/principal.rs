use crate::models::enums::Role;

/// Authenticated caller, inserted into request extensions by the auth
/// middleware after the session token has been verified.
#[derive(Clone, Copy, Debug)]
pub struct Principal {
    pub user_id: i32,
    pub role: Role,
}
