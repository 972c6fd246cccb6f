use rocket::request::{FromRequest, Outcome, Request};
use sha2::{Digest, Sha256};

/// Extracts the real client IP from the request.
/// Checks proxy headers in priority order (Cloudflare, nginx,
/// X-Forwarded-For) before falling back to the socket peer address.
pub struct ClientIp(pub String);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ClientIp {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let headers = request.headers();

        for header in ["CF-Connecting-IP", "True-Client-IP", "X-Real-IP"] {
            if let Some(ip) = headers.get_one(header) {
                let ip = ip.trim();
                if !ip.is_empty() {
                    return Outcome::Success(ClientIp(ip.to_string()));
                }
            }
        }

        // X-Forwarded-For: client, proxy1, proxy2 — take the first (leftmost)
        if let Some(forwarded) = headers.get_one("X-Forwarded-For") {
            if let Some(ip) = forwarded.split(',').next() {
                let ip = ip.trim();
                if !ip.is_empty() {
                    return Outcome::Success(ClientIp(ip.to_string()));
                }
            }
        }

        Outcome::Success(ClientIp(
            request
                .client_ip()
                .map(|addr| addr.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        ))
    }
}

/// Rate-limit keys store a hash of the client IP, never the raw address.
pub fn hash_ip(ip: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(ip.as_bytes());
    hex::encode(hasher.finalize())
}
