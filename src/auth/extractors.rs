use crate::auth::principal::Principal;
use crate::models::enums::Role;
use actix_web::dev::Payload;
use actix_web::{
    error::{ErrorForbidden, ErrorUnauthorized},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures::future::{ready, Ready};

/// Any authenticated caller, role checked by the handler itself.
pub struct PrincipalExtractor(pub Principal);

impl FromRequest for PrincipalExtractor {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(p) = req.extensions().get::<Principal>() {
            return ready(Ok(PrincipalExtractor(*p)));
        }
        ready(Err(ErrorUnauthorized("authentication required")))
    }
}

fn principal_with_role(req: &HttpRequest, allowed: &[Role]) -> Result<Principal, Error> {
    let extensions = req.extensions();
    let Some(p) = extensions.get::<Principal>() else {
        return Err(ErrorUnauthorized("authentication required"));
    };
    if allowed.contains(&p.role) {
        Ok(*p)
    } else {
        Err(ErrorForbidden("forbidden"))
    }
}

pub struct StudentPrincipal {
    user_id: i32,
}

impl StudentPrincipal {
    pub fn user_id(&self) -> i32 {
        self.user_id
    }
}

impl FromRequest for StudentPrincipal {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            principal_with_role(req, &[Role::Student])
                .map(|p| StudentPrincipal { user_id: p.user_id }),
        )
    }
}

pub struct StaffPrincipal {
    user_id: i32,
}

impl StaffPrincipal {
    pub fn user_id(&self) -> i32 {
        self.user_id
    }
}

impl FromRequest for StaffPrincipal {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            principal_with_role(req, &[Role::Staff]).map(|p| StaffPrincipal { user_id: p.user_id }),
        )
    }
}

pub struct AdminPrincipal {
    pub user_id: i32,
}

impl FromRequest for AdminPrincipal {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            principal_with_role(req, &[Role::Admin]).map(|p| AdminPrincipal { user_id: p.user_id }),
        )
    }
}

/// Menu management is shared between staff and admin.
pub struct StaffOrAdminPrincipal {
    pub user_id: i32,
    pub role: Role,
}

impl FromRequest for StaffOrAdminPrincipal {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            principal_with_role(req, &[Role::Staff, Role::Admin]).map(|p| StaffOrAdminPrincipal {
                user_id: p.user_id,
                role: p.role,
            }),
        )
    }
}
