use serde::Serialize;
use crate::models::stay_request::RoomType;

pub const CURRENCY_SYMBOL: &str = "€";

/// House prices, in euro cents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tariff {
    pub single_room_nightly: u64,
    pub double_room_nightly: u64,
    pub breakfast_per_person: u64,
    pub short_stay_surcharge_per_person: u64,
}

impl Tariff {
    pub const HOUSE: Tariff = Tariff {
        single_room_nightly: 54_00,
        double_room_nightly: 74_00,
        breakfast_per_person: 10_00,
        short_stay_surcharge_per_person: 8_00,
    };

    pub fn nightly_rate(&self, room_type: RoomType) -> u64 {
        match room_type {
            RoomType::Single => self.single_room_nightly,
            RoomType::Double => self.double_room_nightly,
        }
    }

    pub fn price_list(&self) -> Vec<PriceListItem> {
        vec![
            PriceListItem::new("Single room", "per night", self.single_room_nightly),
            PriceListItem::new("Double room", "per night", self.double_room_nightly),
            PriceListItem::new("Breakfast", "per person and night", self.breakfast_per_person),
            PriceListItem::new(
                "Short-stay surcharge",
                "per person, one-night stays only",
                self.short_stay_surcharge_per_person,
            ),
        ]
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Tariff::HOUSE
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PriceListItem {
    pub item: String,
    pub unit: String,
    pub amount: f64,
    pub display: String,
}

impl PriceListItem {
    fn new(item: &str, unit: &str, cents: u64) -> Self {
        Self {
            item: item.to_string(),
            unit: unit.to_string(),
            amount: cents_to_amount(cents),
            display: format!("{}{}", CURRENCY_SYMBOL, format_cents(cents)),
        }
    }
}

pub fn cents_to_amount(cents: u64) -> f64 {
    cents as f64 / 100.0
}

pub fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_cents(148_00), "148.00");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(cents_to_amount(282_00), 282.0);
        assert_eq!(cents_to_amount(12_34), 12.34);
    }

    #[test]
    fn price_list_matches_house_rates() {
        let list = Tariff::HOUSE.price_list();

        assert_eq!(list.len(), 4);
        assert_eq!(list[0].display, "€54.00");
        assert_eq!(list[1].amount, 74.0);
        assert_eq!(list[2].display, "€10.00");
    }
}
