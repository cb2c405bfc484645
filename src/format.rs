//! Fixed-width text rendering of a bill: the on-screen preview table and the
//! line sequence the PDF renderer draws. Both go through the same row
//! composition so the two outputs never drift apart.

use chrono::{DateTime, Local};

use crate::error::BillError;
use crate::model::{Bill, LineItem};

const SEPARATOR_WIDTH: usize = 60;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

fn column_header() -> String {
    format!("{:<20} {:<7} {:<7} {:<7}", "Item", "Quantity", "Price", "Total")
}

fn item_row(item: &LineItem) -> String {
    format!(
        "{:<20} {:<7} {:<7} {:<7}",
        item.name(),
        item.quantity(),
        format!("{:.2}", item.unit_price()),
        format!("{:.2}", item.line_total()),
    )
}

fn body_lines(bill: &Bill, now: DateTime<Local>) -> Vec<String> {
    let mut lines = vec![
        format!("Customer Name: {}", bill.customer_name),
        format!("Phone Number: {}", bill.phone_number),
        format!("Date & Time: {}", now.format(TIMESTAMP_FORMAT)),
        String::new(),
        column_header(),
        separator(),
    ];
    for item in bill.items() {
        lines.push(item_row(item));
    }
    lines.push(separator());
    lines
}

/// Renders the preview shown after every successful mutation. Refused while
/// either identity field is empty.
pub fn preview(bill: &Bill, now: DateTime<Local>) -> Result<String, BillError> {
    bill.validate_identity()?;
    let mut lines = body_lines(bill, now);
    lines.push(format!("{:<30} {:.2}", "Total Price:", bill.grand_total()));
    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

/// The full line sequence for the printed document: preview body with a wider
/// total label, then a spacer and the shop's thank-you footer.
pub fn document_lines(
    bill: &Bill,
    footer: &str,
    now: DateTime<Local>,
) -> Result<Vec<String>, BillError> {
    bill.validate_identity()?;
    let mut lines = body_lines(bill, now);
    lines.push(format!("{:<40} {:.2}", "Total Price:", bill.grand_total()));
    lines.push(String::new());
    lines.push(footer.to_string());
    Ok(lines)
}
