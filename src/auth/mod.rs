pub mod config;
pub mod extractors;
pub mod middleware;
pub mod principal;
pub mod session;

pub use config::AuthConfig;
pub use extractors::{AdminPrincipal, StaffOrAdminPrincipal, StaffPrincipal, StudentPrincipal};
pub use middleware::AuthLayer;
pub use principal::Principal;
