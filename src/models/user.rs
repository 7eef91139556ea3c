use serde::{Deserialize, Serialize};

/// Account record returned by account creation and kept in the connected user context
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub display_name: String,
    pub email: String,
}
