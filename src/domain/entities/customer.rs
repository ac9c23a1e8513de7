//! Customer entity captured from the adoption form.

use chrono::{DateTime, Utc};

/// A customer record as stored in the `customers` table.
///
/// The `id` is assigned at submission time from the submission timestamp and
/// the email address. It is collision-resistant in practice, not guaranteed
/// unique; email is the real identity key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub phone: Option<String>,
    pub email: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
}

impl Customer {
    /// Builds the identifier for a submission: `<unix seconds>.<micros><email>`.
    pub fn submission_id(email: &str, submitted_at: DateTime<Utc>) -> String {
        format!(
            "{}.{:06}{}",
            submitted_at.timestamp(),
            submitted_at.timestamp_subsec_micros(),
            email
        )
    }
}

/// Form data for a customer that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub firstname: String,
    pub lastname: String,
    pub phone: Option<String>,
    pub email: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
}

impl NewCustomer {
    /// Assigns the submission identifier and produces the transient record.
    pub fn into_customer(self, submitted_at: DateTime<Utc>) -> Customer {
        Customer {
            id: Customer::submission_id(&self.email, submitted_at),
            firstname: self.firstname,
            lastname: self.lastname,
            phone: self.phone,
            email: self.email,
            address: self.address,
            city: self.city,
            state: self.state,
            zipcode: self.zipcode,
        }
    }
}
