pub mod price_estimator;
pub mod quote_debouncer;
pub mod stay_form;
