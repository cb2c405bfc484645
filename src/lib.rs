//! Receipt-style bill generation for narrow thermal printers: an in-memory
//! bill model, a fixed-width text preview, a 58mm PDF renderer, and a
//! dispatcher that hands finished receipts to the OS default printer.

pub mod config;
pub mod error;
pub mod format;
pub mod metrics;
pub mod model;
pub mod pdf;
pub mod print;

pub use config::ShopProfile;
pub use error::BillError;
pub use model::{Bill, LineItem};
