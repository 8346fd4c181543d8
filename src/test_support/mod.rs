#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Franchise, FranchiseAdmin, Role, RoleAssignment, Store, User};
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn admin_user() -> User {
        User {
            id: Some(1),
            name: "常用名字".into(),
            email: "a@jwt.com".into(),
            roles: vec![RoleAssignment {
                role: Role::Admin,
                object_id: None,
            }],
        }
    }

    pub fn diner_user() -> User {
        User {
            id: Some(3),
            name: "Kai Chen".into(),
            email: "d@jwt.com".into(),
            roles: vec![RoleAssignment {
                role: Role::Diner,
                object_id: None,
            }],
        }
    }

    pub fn user_without_id() -> User {
        User {
            id: None,
            name: "ghost".into(),
            email: "ghost@jwt.com".into(),
            roles: vec![],
        }
    }

    pub fn lehi_store() -> Store {
        Store {
            id: Some(4),
            name: "Lehi".into(),
            total_revenue: Some(0.008),
        }
    }

    pub fn lota_pizza() -> Franchise {
        Franchise {
            id: Some(2),
            name: "LotaPizza".into(),
            admins: vec![FranchiseAdmin {
                id: Some(4),
                name: "pizza franchisee".into(),
                email: Some("f@jwt.com".into()),
            }],
            stores: vec![
                lehi_store(),
                Store {
                    id: Some(5),
                    name: "Springville".into(),
                    total_revenue: Some(0.019),
                },
            ],
        }
    }

    pub fn provide_auth(user: Option<User>) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let is_authenticated = user.is_some();
        let (auth, set_auth) = create_signal(AuthState {
            user,
            is_authenticated,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
