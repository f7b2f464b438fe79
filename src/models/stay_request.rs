use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

/// Room categories offered by the house.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomType {
    /// Single room (Einzelzimmer).
    #[serde(rename = "EZ")]
    Single,
    /// Double room (Doppelzimmer).
    #[serde(rename = "DZ")]
    Double,
}

/// The parameters a guest picks in the quote form.
///
/// Dates are kept as the raw `YYYY-MM-DD` strings the form sends, since an
/// unfinished form legitimately carries empty dates.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StayRequest {
    pub checkin: String,
    pub checkout: String,
    pub persons: u32,
    pub room_type: RoomType,
    pub breakfast: bool,
    pub is_event: bool,
}

impl StayRequest {
    /// A fresh form: arriving on `today`, departure not chosen yet, one person
    /// in a single room without extras.
    pub fn starting_on(today: Date) -> Self {
        Self {
            checkin: format_date(today),
            checkout: String::new(),
            persons: 1,
            room_type: RoomType::Single,
            breakfast: false,
            is_event: false,
        }
    }

    pub fn has_dates(&self) -> bool {
        !self.checkin.trim().is_empty() && !self.checkout.trim().is_empty()
    }

    pub fn checkin_date(&self) -> Option<Date> {
        parse_date(&self.checkin)
    }

    pub fn checkout_date(&self) -> Option<Date> {
        parse_date(&self.checkout)
    }
}

pub fn parse_date(value: &str) -> Option<Date> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).ok()
}

pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn deserializes_form_field_names() {
        let request: StayRequest = serde_json::from_str(
            r#"{"checkin":"2024-06-01","checkout":"2024-06-03","persons":2,"roomType":"DZ","breakfast":true,"isEvent":false}"#,
        ).unwrap();

        assert_eq!(request.room_type, RoomType::Double);
        assert_eq!(request.persons, 2);
        assert!(request.breakfast);
        assert_eq!(request.checkout_date(), Some(date!(2024 - 06 - 03)));
    }

    #[test]
    fn starting_request_uses_today_and_no_departure() {
        let request = StayRequest::starting_on(date!(2024 - 06 - 01));

        assert_eq!(request.checkin, "2024-06-01");
        assert_eq!(request.checkout, "");
        assert_eq!(request.persons, 1);
        assert_eq!(request.room_type, RoomType::Single);
        assert!(!request.has_dates());
    }

    #[test]
    fn rejects_malformed_dates() {
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date("01.06.2024"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date(" 2024-02-29 "), Some(date!(2024 - 02 - 29)));
    }
}
