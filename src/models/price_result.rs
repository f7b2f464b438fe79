use serde::{Deserialize, Serialize};

/// Outcome of a price estimate.
///
/// `total` is `None` whenever no price can be computed; `message` then tells
/// the guest why.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PriceResult {
    pub total: Option<f64>,
    pub message: String,
    pub nights: u32,
}

impl PriceResult {
    pub fn unpriced(message: &str) -> Self {
        Self {
            total: None,
            message: message.to_string(),
            nights: 0,
        }
    }

    pub fn is_priced(&self) -> bool {
        self.total.is_some()
    }
}
