use serde::{Deserialize, Serialize};

use crate::error::BillError;

/// One product entry on a bill. Only constructible through [`LineItem::new`],
/// which enforces the field constraints, and immutable afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LineItem {
    name: String,
    quantity: u32,
    unit_price: f64,
}

impl LineItem {
    pub fn new(name: &str, quantity: u32, unit_price: f64) -> Result<Self, BillError> {
        if name.is_empty() {
            return Err(BillError::EmptyItemName);
        }
        if quantity == 0 {
            return Err(BillError::InvalidQuantity);
        }
        if unit_price <= 0.0 {
            return Err(BillError::InvalidPrice);
        }
        Ok(Self {
            name: name.to_string(),
            quantity,
            unit_price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Customer identity plus an append-only list of line items for one
/// transaction. No timestamp is stored; renders capture "now" themselves.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Bill {
    pub customer_name: String,
    pub phone_number: String,
    items: Vec<LineItem>,
}

impl Bill {
    pub fn new(customer_name: &str, phone_number: &str) -> Self {
        Self {
            customer_name: customer_name.to_string(),
            phone_number: phone_number.to_string(),
            items: Vec::new(),
        }
    }

    /// Appends a line item. On rejection the item list is untouched.
    pub fn add_item(&mut self, name: &str, quantity: u32, unit_price: f64) -> Result<(), BillError> {
        let item = LineItem::new(name, quantity, unit_price)?;
        self.items.push(item);
        Ok(())
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn grand_total(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Empties the item list and resets both identity fields. Idempotent.
    pub fn clear(&mut self) {
        self.customer_name.clear();
        self.phone_number.clear();
        self.items.clear();
    }

    /// Both identity fields must be non-empty before any render. The check is
    /// empty-string-only; surrounding whitespace is accepted as entered.
    pub fn validate_identity(&self) -> Result<(), BillError> {
        if self.customer_name.is_empty() || self.phone_number.is_empty() {
            return Err(BillError::MissingCustomer);
        }
        Ok(())
    }
}
