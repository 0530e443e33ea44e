mod common;

use canteen_backend::db::{RepositoryError, UserOperations};
use canteen_backend::models::enums::Role;
use canteen_backend::models::user::NewUser;

fn new_user(username: &str, role: Role) -> NewUser {
    NewUser {
        username: username.to_string(),
        phone: "9876543210".to_string(),
        role,
        email: None,
    }
}

#[actix_rt::test]
async fn create_and_fetch_user() {
    let pool = common::setup_pool();
    let user_ops = UserOperations::new(pool);

    let created = user_ops
        .create_user(new_user("ananya", Role::Student))
        .expect("create user");
    assert_eq!(created.role, Role::Student);

    let by_id = user_ops.get_user(created.user_id).expect("fetch by id");
    assert_eq!(by_id.username, "ananya");

    let by_name = user_ops
        .get_user_by_username("ananya")
        .expect("fetch by username");
    assert_eq!(by_name.user_id, created.user_id);
}

#[actix_rt::test]
async fn duplicate_usernames_are_rejected() {
    let pool = common::setup_pool();
    let user_ops = UserOperations::new(pool);

    user_ops
        .create_user(new_user("ravi", Role::Student))
        .expect("first user");
    let err = user_ops
        .create_user(new_user("ravi", Role::Staff))
        .expect_err("duplicate username");
    assert!(matches!(err, RepositoryError::ValidationError(_)));
}

#[actix_rt::test]
async fn missing_users_are_not_found() {
    let pool = common::setup_pool();
    let user_ops = UserOperations::new(pool);

    assert!(matches!(
        user_ops.get_user(999).expect_err("missing id"),
        RepositoryError::NotFound(_)
    ));
    assert!(matches!(
        user_ops
            .get_user_by_username("nobody")
            .expect_err("missing username"),
        RepositoryError::NotFound(_)
    ));
}
