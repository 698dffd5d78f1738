//! The breakfast-menu exercise: per-order and overall totals.

use crate::DrillError;

/// Item name and price in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    items: Vec<(String, u32)>,
}

impl Menu {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(|(name, cents)| (name.into(), cents)).collect(),
        }
    }

    pub fn breakfast() -> Self {
        Self::new([
            ("eggs", 199),
            ("bacon", 299),
            ("sausage", 250),
            ("hash browns", 199),
            ("pancakes", 449),
            ("toast", 149),
            ("coffee", 149),
            ("tea", 149),
            ("orange juice", 259),
            ("milk", 179),
        ])
    }

    pub fn price(&self, item: &str) -> Option<u32> {
        self.items.iter().find(|(name, _)| name == item).map(|(_, cents)| *cents)
    }
}

pub fn breakfast_orders() -> Vec<Vec<String>> {
    [
        &["coffee", "sausage", "toast", "eggs"][..],
        &["orange juice", "bacon", "bacon", "hash browns"],
        &["pancakes", "eggs", "tea", "milk", "toast", "bacon"],
    ]
    .iter()
    .map(|order| order.iter().map(|item| item.to_string()).collect())
    .collect()
}

/// Total of one order in cents. `order_number` is 1-based and only used in errors.
pub fn total_order(menu: &Menu, order_number: usize, order: &[String]) -> Result<u32, DrillError> {
    order.iter().try_fold(0, |total, item| {
        menu.price(item)
            .map(|cents| total + cents)
            .ok_or_else(|| DrillError::UnknownMenuItem {
                order: order_number,
                item: item.clone(),
            })
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Per-order totals in cents, in order.
    pub orders: Vec<u32>,
    pub total: u32,
}

impl Receipt {
    pub fn compute(menu: &Menu, orders: &[Vec<String>]) -> Result<Self, DrillError> {
        let orders = orders
            .iter()
            .enumerate()
            .map(|(i, order)| total_order(menu, i + 1, order))
            .collect::<Result<Vec<_>, _>>()?;
        let total = orders.iter().sum();

        Ok(Self { orders, total })
    }
}

/// Format cents as `$d.cc`.
pub fn format_cents(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn breakfast_receipt_totals() {
        let receipt = Receipt::compute(&Menu::breakfast(), &breakfast_orders()).unwrap();

        assert_eq!(receipt.orders, vec![747, 1056, 1424]);
        assert_eq!(receipt.total, 3227);
    }

    #[test]
    fn each_order_starts_from_zero() {
        let menu = Menu::breakfast();
        let orders = vec![order(&["coffee"]), order(&["coffee"])];

        let receipt = Receipt::compute(&menu, &orders).unwrap();
        assert_eq!(receipt.orders, vec![149, 149]);
        assert_eq!(receipt.total, 298);
    }

    #[test]
    fn unknown_item_is_reported_with_order_number() {
        let menu = Menu::breakfast();
        let orders = vec![order(&["eggs"]), order(&["pancakes", "eggstea"])];

        let err = Receipt::compute(&menu, &orders).unwrap_err();
        assert_eq!(err.to_string(), "'eggstea' is not on the menu (order #2)");
    }

    #[test]
    fn empty_order_totals_zero() {
        assert_eq!(total_order(&Menu::breakfast(), 1, &[]).unwrap(), 0);
    }

    #[test]
    fn cents_formatting() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(747), "$7.47");
        assert_eq!(format_cents(3227), "$32.27");
    }
}
