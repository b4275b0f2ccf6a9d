//! Player inventory.
//!
//! Quantities are exact decimals keyed by item name. A missing entry is a
//! quantity of zero; callers go through [`Inventory::amount`] rather than
//! treating absence as an error.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;

/// Items that can be held in the inventory.
///
/// The string form (`Display`, `FromStr`, serde) is the in-game item name.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemName {
    Axe,
    Wood,
    Pickaxe,
    Stone,
    #[strum(serialize = "Stone Pickaxe")]
    #[cfg_attr(feature = "serde", serde(rename = "Stone Pickaxe"))]
    StonePickaxe,
    Iron,
    #[strum(serialize = "Iron Pickaxe")]
    #[cfg_attr(feature = "serde", serde(rename = "Iron Pickaxe"))]
    IronPickaxe,
    Gold,
}

/// Item quantities keyed by in-game name.
///
/// Names this crate does not model are kept verbatim in a side map, so a
/// land snapshot survives a decode and re-encode without losing them. They
/// are not reachable through [`Inventory::amount`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "BTreeMap<String, Decimal>",
        into = "BTreeMap<String, Decimal>"
    )
)]
pub struct Inventory {
    items: BTreeMap<ItemName, Decimal>,
    other: BTreeMap<String, Decimal>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity held, or zero when the item has never been stored.
    pub fn amount(&self, item: ItemName) -> Decimal {
        self.items.get(&item).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn contains(&self, item: ItemName) -> bool {
        self.items.contains_key(&item)
    }

    pub fn set(&mut self, item: ItemName, amount: Decimal) {
        self.items.insert(item, amount);
    }

    /// Adds `amount` to the held quantity and returns the new total.
    pub fn add(&mut self, item: ItemName, amount: Decimal) -> Decimal {
        let total = self.amount(item) + amount;
        self.items.insert(item, total);
        total
    }

    /// Removes `amount` if enough is held and returns the remaining quantity.
    ///
    /// Returns `None` and leaves the inventory untouched when the held
    /// quantity is smaller than `amount`.
    pub fn deduct(&mut self, item: ItemName, amount: Decimal) -> Option<Decimal> {
        let held = self.amount(item);
        if held < amount {
            return None;
        }
        let remaining = held - amount;
        self.items.insert(item, remaining);
        Some(remaining)
    }

    /// Quantities held under names outside [`ItemName`].
    pub fn other_items(&self) -> impl Iterator<Item = (&str, Decimal)> + '_ {
        self.other.iter().map(|(name, amount)| (name.as_str(), *amount))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemName, Decimal)> + '_ {
        self.items.iter().map(|(item, amount)| (*item, *amount))
    }

    /// Number of modelled items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<(ItemName, Decimal)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (ItemName, Decimal)>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
            other: BTreeMap::new(),
        }
    }
}

impl From<BTreeMap<String, Decimal>> for Inventory {
    fn from(entries: BTreeMap<String, Decimal>) -> Self {
        let mut inventory = Self::new();
        for (name, amount) in entries {
            match ItemName::from_str(&name) {
                Ok(item) => {
                    inventory.items.insert(item, amount);
                }
                Err(_) => {
                    inventory.other.insert(name, amount);
                }
            }
        }
        inventory
    }
}

impl From<Inventory> for BTreeMap<String, Decimal> {
    fn from(inventory: Inventory) -> Self {
        let mut entries = inventory.other;
        entries.extend(
            inventory
                .items
                .into_iter()
                .map(|(item, amount)| (item.to_string(), amount)),
        );
        entries
    }
}
