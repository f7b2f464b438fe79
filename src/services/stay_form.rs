use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use crate::models::price_result::PriceResult;
use crate::models::stay_request::{RoomType, StayRequest};

/// A single edit made in the quote form.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldChange {
    Checkin(String),
    Checkout(String),
    Persons(u32),
    RoomType(RoomType),
    Breakfast(bool),
    IsEvent(bool),
}

/// The request a new visitor starts with.
pub fn default_request() -> StayRequest {
    StayRequest::starting_on(OffsetDateTime::now_utc().date())
}

/// Apply one form edit, keeping occupancy and room type in step: one person
/// books a single room, two persons a double room.
pub fn apply_change(request: &StayRequest, change: FieldChange) -> StayRequest {
    let mut next = request.clone();

    match change {
        FieldChange::Checkin(checkin) => next.checkin = checkin,
        FieldChange::Checkout(checkout) => next.checkout = checkout,
        FieldChange::Persons(persons) => {
            next.persons = persons;
            match persons {
                1 => next.room_type = RoomType::Single,
                2 => next.room_type = RoomType::Double,
                _ => {}
            }
        }
        FieldChange::RoomType(room_type) => {
            next.room_type = room_type;
            match room_type {
                RoomType::Single => next.persons = 1,
                RoomType::Double if request.persons < 2 => next.persons = 2,
                RoomType::Double => {}
            }
        }
        FieldChange::Breakfast(breakfast) => next.breakfast = breakfast,
        FieldChange::IsEvent(is_event) => next.is_event = is_event,
    }

    next
}

/// An enquiry may go out with a computed estimate or as an explicit event
/// pricing request, never for an unresolved request.
pub fn can_submit(request: &StayRequest, result: &PriceResult) -> bool {
    result.is_priced() || request.is_event
}

pub fn nights_phrase(nights: u32) -> String {
    if nights == 1 {
        "1 night".to_string()
    } else {
        format!("{} nights", nights)
    }
}

/// The line shown under the form.
pub fn summary(result: &PriceResult) -> String {
    if result.is_priced() {
        format!("{} for {}", result.message, nights_phrase(result.nights))
    } else {
        result.message.clone()
    }
}
