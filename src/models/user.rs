// src/models/user.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Papel do usuário logado. Admin enxerga o board inteiro e pode transferir
// leads; vendedor só enxerga o que é dele.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Vendedor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_desserializa_em_minusculas() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "660e8400-e29b-41d4-a716-446655440000",
                "name": "Carlos",
                "email": "carlos@solar.com",
                "role": "vendedor"
            }"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Vendedor);
        assert!(!user.is_admin());
    }
}
