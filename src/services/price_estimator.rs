use crate::models::price_result::PriceResult;
use crate::models::stay_request::StayRequest;
use crate::models::tariff::{cents_to_amount, format_cents, Tariff, CURRENCY_SYMBOL};

pub const EVENT_PRICING_MESSAGE: &str = "price on request (trade fair/special event)";
pub const MISSING_DATES_MESSAGE: &str = "please select arrival and departure dates";
pub const INVALID_RANGE_MESSAGE: &str = "departure must be after arrival";
pub const MINIMUM_STAY_MESSAGE: &str = "minimum 1 night";
pub const OUT_OF_RANGE_MESSAGE: &str = "stay too large for an online estimate, please enquire";

/// Largest cent amount an `f64` total still carries to the cent.
const MAX_EXACT_CENTS: u64 = (1 << 53) - 1;

/// Estimate the price of a stay with the house tariff.
pub fn estimate(request: &StayRequest) -> PriceResult {
    estimate_with(&Tariff::HOUSE, request)
}

/// Estimate the price of a stay.
///
/// Never fails: incomplete or inconsistent input comes back as a message with
/// no total, so this can run on every change of a half-filled form. Checks are
/// ordered; event pricing wins over everything else, including bad dates.
pub fn estimate_with(tariff: &Tariff, request: &StayRequest) -> PriceResult {
    if request.is_event {
        return PriceResult::unpriced(EVENT_PRICING_MESSAGE);
    }

    if !request.has_dates() {
        return PriceResult::unpriced(MISSING_DATES_MESSAGE);
    }

    let (checkin, checkout) = match (request.checkin_date(), request.checkout_date()) {
        (Some(checkin), Some(checkout)) if checkout > checkin => (checkin, checkout),
        _ => return PriceResult::unpriced(INVALID_RANGE_MESSAGE),
    };

    // Calendar dates only, so a DST switch inside the stay can't shift the count.
    let nights = match u32::try_from((checkout - checkin).whole_days()) {
        Ok(nights) if nights > 0 => nights,
        _ => return PriceResult::unpriced(MINIMUM_STAY_MESSAGE),
    };

    let total = match stay_total_cents(tariff, request, nights) {
        Some(total) if total <= MAX_EXACT_CENTS => total,
        _ => return PriceResult::unpriced(OUT_OF_RANGE_MESSAGE),
    };

    PriceResult {
        total: Some(cents_to_amount(total)),
        message: format!("estimated total: {}{}", CURRENCY_SYMBOL, format_cents(total)),
        nights,
    }
}

fn stay_total_cents(tariff: &Tariff, request: &StayRequest, nights: u32) -> Option<u64> {
    let nights_u64 = u64::from(nights);
    let persons = u64::from(request.persons);

    let mut total = tariff.nightly_rate(request.room_type).checked_mul(nights_u64)?;

    if request.breakfast {
        let breakfast = tariff
            .breakfast_per_person
            .checked_mul(persons)?
            .checked_mul(nights_u64)?;
        total = total.checked_add(breakfast)?;
    }

    if nights == 1 {
        total = total.checked_add(tariff.short_stay_surcharge_per_person.checked_mul(persons)?)?;
    }

    Some(total)
}
