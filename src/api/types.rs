use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("{0}")]
    Service(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

/// Error body shape the pizza service returns on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Diner,
    Franchisee,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Diner => "diner",
            Role::Franchisee => "franchisee",
            Role::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<RoleAssignment>,
}

impl User {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|assignment| assignment.role == role)
    }

    /// Roles joined for table display, e.g. "diner, franchisee".
    pub fn role_text(&self) -> String {
        self.roles
            .iter()
            .map(|assignment| assignment.role.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FranchiseAdmin {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_revenue: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Franchise {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub admins: Vec<FranchiseAdmin>,
    #[serde(default)]
    pub stores: Vec<Store>,
}

impl Franchise {
    /// Admin names joined for table display.
    pub fn admin_text(&self) -> String {
        self.admins
            .iter()
            .map(|admin| admin.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FranchiseListResponse {
    #[serde(default)]
    pub franchises: Vec<Franchise>,
    #[serde(default)]
    pub more: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserListResponse {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub more: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateFranchiseRequest {
    pub name: String,
    pub admins: Vec<FranchiseAdminRef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FranchiseAdminRef {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_id: i64,
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub franchise_id: i64,
    pub store_id: i64,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: Option<i64>,
    pub franchise_id: i64,
    pub store_id: i64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistory {
    #[serde(default)]
    pub diner_id: Option<i64>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderReceipt {
    pub order: Order,
    pub jwt: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_roles_deserialize_and_join() {
        let user: User = serde_json::from_value(json!({
            "id": 3,
            "name": "Kai Chen",
            "email": "d@jwt.com",
            "roles": [{ "role": "diner" }, { "role": "franchisee", "objectId": 2 }]
        }))
        .unwrap();

        assert_eq!(user.id, Some(3));
        assert!(user.has_role(Role::Diner));
        assert!(!user.has_role(Role::Admin));
        assert_eq!(user.role_text(), "diner, franchisee");
    }

    #[test]
    fn user_without_id_or_roles_still_parses() {
        let user: User = serde_json::from_value(json!({
            "name": "ghost",
            "email": "ghost@jwt.com"
        }))
        .unwrap();

        assert_eq!(user.id, None);
        assert_eq!(user.role_text(), "");
    }

    #[test]
    fn unknown_role_is_forward_compatible() {
        let assignment: RoleAssignment =
            serde_json::from_value(json!({ "role": "owner" })).unwrap();
        assert_eq!(assignment.role, Role::Unknown);
    }

    #[test]
    fn franchise_list_parses_nested_stores() {
        let page: FranchiseListResponse = serde_json::from_value(json!({
            "franchises": [{
                "id": 2,
                "name": "LotaPizza",
                "admins": [{ "id": 4, "name": "pizza franchisee", "email": "f@jwt.com" }],
                "stores": [
                    { "id": 4, "name": "Lehi", "totalRevenue": 0.008 },
                    { "id": 5, "name": "Springville" }
                ]
            }],
            "more": true
        }))
        .unwrap();

        let franchise = &page.franchises[0];
        assert_eq!(franchise.name, "LotaPizza");
        assert_eq!(franchise.admin_text(), "pizza franchisee");
        assert_eq!(franchise.stores[0].total_revenue, Some(0.008));
        assert_eq!(franchise.stores[1].total_revenue, None);
        assert!(page.more);
    }

    #[test]
    fn empty_list_response_defaults() {
        let page: UserListResponse = serde_json::from_value(json!({})).unwrap();
        assert!(page.users.is_empty());
        assert!(!page.more);
    }
}
