use crate::api::{CreateFranchiseRequest, FranchiseAdminRef};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateFranchiseFormState {
    pub name: String,
    pub admin_email: String,
}

impl CreateFranchiseFormState {
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.admin_email.trim().is_empty()
            && self.admin_email.contains('@')
    }

    pub fn to_request(&self) -> CreateFranchiseRequest {
        CreateFranchiseRequest {
            name: self.name.trim().to_string(),
            admins: vec![FranchiseAdminRef {
                email: self.admin_email.trim().to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_requires_name_and_admin_email() {
        let mut form = CreateFranchiseFormState::default();
        assert!(!form.is_valid());

        form.name = "PizzaCorp".into();
        assert!(!form.is_valid());

        form.admin_email = "not-an-email".into();
        assert!(!form.is_valid());

        form.admin_email = "f@jwt.com".into();
        assert!(form.is_valid());
    }

    #[test]
    fn request_carries_trimmed_fields() {
        let form = CreateFranchiseFormState {
            name: "  PizzaCorp  ".into(),
            admin_email: " f@jwt.com ".into(),
        };
        let request = form.to_request();
        assert_eq!(request.name, "PizzaCorp");
        assert_eq!(request.admins[0].email, "f@jwt.com");
    }
}
