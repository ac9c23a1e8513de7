//! DTOs for the adoption endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{AnimalRecord, NewCustomer};

/// Adoption submission: the pet and the adopting customer.
#[derive(Debug, Deserialize, Validate)]
pub struct AdoptionRequest {
    #[validate(range(min = 1))]
    pub pet_id: i64,

    #[validate(nested)]
    pub customer: CustomerForm,
}

/// Customer form fields. First name, last name and email are required.
#[derive(Debug, Deserialize, Validate)]
pub struct CustomerForm {
    #[validate(length(min = 1, max = 255, message = "First name is required"))]
    pub firstname: String,

    #[validate(length(min = 1, max = 255, message = "Last name is required"))]
    pub lastname: String,

    #[validate(length(max = 25))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email address"), length(max = 255))]
    pub email: String,

    #[validate(length(max = 255))]
    pub address: Option<String>,

    #[validate(length(max = 255))]
    pub city: Option<String>,

    #[validate(length(max = 255))]
    pub state: Option<String>,

    #[validate(length(max = 255))]
    pub zipcode: Option<String>,
}

impl From<CustomerForm> for NewCustomer {
    fn from(f: CustomerForm) -> Self {
        NewCustomer {
            firstname: f.firstname.trim().to_string(),
            lastname: f.lastname.trim().to_string(),
            phone: non_blank(f.phone),
            email: f.email.trim().to_string(),
            address: non_blank(f.address),
            city: non_blank(f.city),
            state: non_blank(f.state),
            zipcode: non_blank(f.zipcode),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Confirmation returned after a successful adoption.
#[derive(Debug, Serialize)]
pub struct AdoptionResponse {
    pub customer_id: String,
    pub message: String,
    pub animal: AnimalRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> AdoptionRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_request() {
        let req = request(json!({
            "pet_id": 42,
            "customer": {
                "firstname": "Bob",
                "lastname": "Builder",
                "email": "bob.builder@gmail.com"
            }
        }));

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_missing_names_and_bad_email_are_rejected() {
        let req = request(json!({
            "pet_id": 42,
            "customer": { "firstname": "", "lastname": "", "email": "not-an-email" }
        }));

        assert!(req.validate().is_err());

        let errors = req.customer.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("firstname"));
        assert!(fields.contains_key("lastname"));
        assert!(fields.contains_key("email"));
        assert!(!fields.contains_key("phone"));
    }

    #[test]
    fn test_non_positive_pet_id_is_rejected() {
        let req = request(json!({
            "pet_id": 0,
            "customer": { "firstname": "A", "lastname": "B", "email": "a@b.com" }
        }));

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_blank_optional_fields_become_none() {
        let form: CustomerForm = serde_json::from_value(json!({
            "firstname": " Bob ",
            "lastname": "Builder",
            "email": "bob@example.com",
            "phone": "   ",
            "city": "Springfield"
        }))
        .unwrap();

        let customer = NewCustomer::from(form);

        assert_eq!(customer.firstname, "Bob");
        assert!(customer.phone.is_none());
        assert_eq!(customer.city.as_deref(), Some("Springfield"));
        assert!(customer.zipcode.is_none());
    }
}
