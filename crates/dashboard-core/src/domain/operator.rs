/// Operator identity - the single privileged account permitted to mutate posts.
///
/// Built once at process start and never mutated; there is no registration
/// path and no persistence beyond process memory.
#[derive(Debug, Clone)]
pub struct Operator {
    pub username: String,
    pub password_hash: String,
}

impl Operator {
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            username,
            password_hash,
        }
    }
}
