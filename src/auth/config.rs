const DEFAULT_ISSUER: &str = "canteen-backend";
const DEFAULT_EXPIRY_SECS: u64 = 43_200; // 12 hours

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub issuer: String,
    pub expiry_secs: u64,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        let secret = std::env::var("SESSION_JWT_SECRET").expect("SESSION_JWT_SECRET must be set");
        let issuer =
            std::env::var("SESSION_JWT_ISSUER").unwrap_or_else(|_| DEFAULT_ISSUER.to_string());
        let expiry_secs = std::env::var("SESSION_JWT_EXPIRY_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_EXPIRY_SECS);

        Self {
            secret,
            issuer,
            expiry_secs,
        }
    }
}
