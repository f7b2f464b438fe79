pub mod contact_prefill;
pub mod price_result;
pub mod stay_request;
pub mod tariff;
