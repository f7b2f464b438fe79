use serde::{Deserialize, Serialize};
use crate::models::stay_request::StayRequest;

/// State of the contact form after the guest hits "enquire".
///
/// Only the stay dates are carried over; name, email and message stay empty
/// for the guest to fill in.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ContactPrefill {
    pub name: String,
    pub email: String,
    pub message: String,
    pub checkin: String,
    pub checkout: String,
    pub stay: StayRequest,
}

impl ContactPrefill {
    pub fn from_stay(stay: &StayRequest) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            checkin: stay.checkin.clone(),
            checkout: stay.checkout.clone(),
            stay: stay.clone(),
        }
    }
}
