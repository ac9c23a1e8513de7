//! Adoption link between a pet and the customer who adopted it.

/// Row of the `adoptions` table.
///
/// `customer_id` is the authoritative customer identifier resolved at write
/// time, which may differ from the identifier of the submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adoption {
    pub pet_id: i64,
    pub customer_id: String,
}

impl Adoption {
    pub fn new(pet_id: i64, customer_id: String) -> Self {
        Self {
            pet_id,
            customer_id,
        }
    }
}
