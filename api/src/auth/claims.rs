use serde::{Deserialize, Serialize};

/// JWT payload carried by every bearer token: the user id (`sub`), expiry
/// and the effective admin capability baked in at issue time.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i64,
    pub exp: usize,
    pub admin: bool,
}

/// Verified caller identity, inserted into request extensions by the route
/// guards and read back by handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
