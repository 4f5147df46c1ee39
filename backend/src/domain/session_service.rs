use tracing::debug;
use uuid::Uuid;

/// Lifetime of the session cookie handed to clients, in seconds (7 days)
pub const SESSION_TTL_SECONDS: u64 = 7 * 24 * 3600;

/// Result of resolving the session token for one request
#[derive(Debug, Clone, PartialEq)]
pub struct EnsuredSession {
    pub token: String,
    /// True when the token was minted by this call and the boundary must
    /// hand it back to the client
    pub newly_issued: bool,
}

/// Issues and recognizes anonymous session tokens.
///
/// Any non-empty token presented by a client is taken at face value; there
/// is no server-side session table. A missing or empty token yields a fresh
/// UUID, and the boundary persists it client-side for [`SESSION_TTL_SECONDS`].
/// Whether a token is linked to a user record is a separate question answered
/// by the user service.
#[derive(Clone, Default)]
pub struct SessionService;

impl SessionService {
    pub fn new() -> Self {
        Self
    }

    /// Return the presented token unchanged, or mint a new one.
    ///
    /// Total over its input; this operation has no failure mode.
    pub fn ensure_session(&self, existing: Option<&str>) -> EnsuredSession {
        match existing {
            Some(token) if !token.is_empty() => EnsuredSession {
                token: token.to_string(),
                newly_issued: false,
            },
            _ => {
                let token = Uuid::new_v4().to_string();
                debug!("Minted new session token");
                EnsuredSession {
                    token,
                    newly_issued: true,
                }
            }
        }
    }
}
