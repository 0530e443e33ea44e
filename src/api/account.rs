use crate::auth::config::AuthConfig;
use crate::auth::session::issue_session_token;
use crate::db::UserOperations;
use crate::enums::common::{LoginReq, LoginResp, RegisterReq, RegisterResp};
use crate::models::enums::Role;
use crate::models::user::NewUser;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use log::{debug, error};

#[utoipa::path(
    tag = "Account",
    request_body = RegisterReq,
    responses(
        (status = 200, description = "Account created", body = RegisterResp),
        (status = 400, description = "Username already taken or invalid input", body = RegisterResp)
    ),
    summary = "Register a new account"
)]
#[post("/register")]
pub(super) async fn register(
    user_ops: web::Data<UserOperations>,
    req_data: web::Json<RegisterReq>,
) -> impl Responder {
    let req_data = req_data.into_inner();
    let new_user = NewUser {
        username: req_data.username,
        phone: req_data.phone,
        role: req_data.role.unwrap_or(Role::Student),
        email: req_data.email,
    };

    match user_ops.create_user(new_user) {
        Ok(user) => {
            debug!("register: created account '{}' ({})", user.username, user.role);
            HttpResponse::Ok().json(RegisterResp {
                status: "ok".to_string(),
                error: None,
            })
        }
        Err(e) => {
            error!("register: failed to create account: {}", e);
            HttpResponse::BadRequest().json(RegisterResp {
                status: "error".to_string(),
                error: Some(e.to_string()),
            })
        }
    }
}

/// Credential verification is handled upstream; this endpoint resolves the
/// account and issues the session token carrying its stored role.
#[utoipa::path(
    tag = "Account",
    request_body = LoginReq,
    responses(
        (status = 200, description = "Session token issued", body = LoginResp),
        (status = 400, description = "Unknown account", body = LoginResp)
    ),
    summary = "Authenticate and obtain a session token"
)]
#[post("/login")]
pub(super) async fn login(
    user_ops: web::Data<UserOperations>,
    auth_cfg: web::Data<AuthConfig>,
    req_data: web::Json<LoginReq>,
) -> impl Responder {
    let username = req_data.username.clone();
    match user_ops.get_user_by_username(&username) {
        Ok(user) => match issue_session_token(user.user_id, user.role, &auth_cfg) {
            Ok(token) => {
                debug!("login: issued session token for '{}' ({})", username, user.role);
                HttpResponse::Ok().json(LoginResp {
                    status: "ok".to_string(),
                    token: Some(token),
                    role: Some(user.role),
                    error: None,
                })
            }
            Err(e) => {
                error!("login: failed to issue session token for '{}': {}", username, e);
                HttpResponse::InternalServerError().json(LoginResp {
                    status: "error".to_string(),
                    token: None,
                    role: None,
                    error: Some(e.to_string()),
                })
            }
        },
        Err(e) => {
            error!("login: authentication failed for '{}': {}", username, e);
            HttpResponse::BadRequest().json(LoginResp {
                status: "error".to_string(),
                token: None,
                role: None,
                error: Some(e.to_string()),
            })
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.service(
        web::scope("/account")
            .app_data(web::Data::new(state.user_ops.clone()))
            .app_data(web::Data::new(state.auth_cfg.clone()))
            .service(register)
            .service(login),
    );
}
