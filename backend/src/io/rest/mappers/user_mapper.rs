use shared::{User, UserResponse};

/// Maps domain users to their wire shape; the session binding stays
/// server-side
pub struct UserMapper;

impl UserMapper {
    pub fn to_response(user: User) -> UserResponse {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
