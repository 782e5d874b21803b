//! Customer contact details collected alongside the cart.

use serde::Serialize;

/// Contact details for delivery. Notes are optional free text; the other
/// three fields are required before an order can be submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub notes: String,
}

/// Which contact field an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    Name,
    Phone,
    Address,
    Notes,
}

impl Customer {
    pub fn set_field(&mut self, field: CustomerField, value: String) {
        match field {
            CustomerField::Name => self.name = value,
            CustomerField::Phone => self.phone = value,
            CustomerField::Address => self.address = value,
            CustomerField::Notes => self.notes = value,
        }
    }

    /// A copy with surrounding whitespace stripped from every field, which
    /// is the form sent to the backend.
    pub fn trimmed(&self) -> Customer {
        Customer {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            notes: self.notes.trim().to_string(),
        }
    }

    /// True when name, phone, and address are all non-blank.
    pub fn has_contact_info(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.address.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_info_requires_name_phone_and_address() {
        let mut customer = Customer::default();
        assert!(!customer.has_contact_info());

        customer.set_field(CustomerField::Name, "Ada".to_string());
        customer.set_field(CustomerField::Phone, "555-0100".to_string());
        assert!(!customer.has_contact_info());

        customer.set_field(CustomerField::Address, "1 Loop Lane".to_string());
        assert!(customer.has_contact_info());

        // Notes never gate submission.
        customer.set_field(CustomerField::Notes, String::new());
        assert!(customer.has_contact_info());
    }

    #[test]
    fn test_whitespace_only_fields_do_not_count() {
        let mut customer = Customer::default();
        customer.set_field(CustomerField::Name, "  ".to_string());
        customer.set_field(CustomerField::Phone, "555-0100".to_string());
        customer.set_field(CustomerField::Address, "1 Loop Lane".to_string());
        assert!(!customer.has_contact_info());
    }

    #[test]
    fn test_trimmed_strips_every_field() {
        let mut customer = Customer::default();
        customer.set_field(CustomerField::Name, " Ada ".to_string());
        customer.set_field(CustomerField::Notes, "ring twice\n".to_string());
        let trimmed = customer.trimmed();
        assert_eq!(trimmed.name, "Ada");
        assert_eq!(trimmed.notes, "ring twice");
    }
}
