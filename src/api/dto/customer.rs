//! DTOs for the customer listing.

use serde::Serialize;

use crate::domain::entities::Customer;

/// Individual customer information.
#[derive(Debug, Serialize)]
pub struct CustomerItem {
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

impl From<Customer> for CustomerItem {
    fn from(c: Customer) -> Self {
        CustomerItem {
            id: c.id,
            firstname: c.firstname,
            lastname: c.lastname,
            phone: c.phone,
            email: c.email,
            address: c.address,
            city: c.city,
            state: c.state,
            zipcode: c.zipcode,
        }
    }
}

/// Response containing every customer.
#[derive(Debug, Serialize)]
pub struct CustomerListResponse {
    pub total: usize,
    pub items: Vec<CustomerItem>,
}
