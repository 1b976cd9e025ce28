//! User identity type for core messages.

/// User identity (id, username, names). `id` keys the usage counters.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Name to greet the user with: first name, else @username, else "there".
    pub fn display_name(&self) -> String {
        if let Some(name) = self.first_name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        match self.username.as_deref() {
            Some(u) if !u.is_empty() => format!("@{}", u),
            _ => "there".to_string(),
        }
    }
}
