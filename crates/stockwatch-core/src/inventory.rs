//! Inventory snapshots and the stock-difference algorithm.

use std::collections::BTreeMap;

/// Product name to stock count, captured once per run.
pub type Inventory = BTreeMap<String, u64>;

/// Changed products keyed by name, in ascending name order.
pub type Changes = BTreeMap<String, StockChange>;

/// A single product's transition between two snapshots.
///
/// `None` means the product was absent from that snapshot, which is distinct
/// from a listed count of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockChange {
    pub previous: Option<u64>,
    pub current: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

impl StockChange {
    /// Direction of the change.
    ///
    /// A product that appeared counts as an increase and one that disappeared
    /// as a decrease, whatever its listed count was.
    #[must_use]
    pub fn direction(&self) -> Direction {
        match (self.previous, self.current) {
            (None, _) => Direction::Increase,
            (_, None) => Direction::Decrease,
            (Some(old), Some(new)) if old < new => Direction::Increase,
            (Some(_), Some(_)) => Direction::Decrease,
        }
    }
}

/// Compare two snapshots over the union of their product names.
///
/// Returns exactly the names whose count differs, including products that
/// appear in only one of the two snapshots.
#[must_use]
pub fn diff_inventory(previous: &Inventory, current: &Inventory) -> Changes {
    previous
        .keys()
        .chain(current.keys())
        .filter_map(|name| {
            let change = StockChange {
                previous: previous.get(name).copied(),
                current: current.get(name).copied(),
            };
            (change.previous != change.current).then(|| (name.clone(), change))
        })
        .collect()
}
