//! Shopping cart state and its reducer.

use serde::{Deserialize, Deserializer, Serialize};

use shopwindow_catalog::Product;
use shopwindow_core::{ProductId, Reducer};

/// Cart line: product, quantity, unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    /// Display name, copied from the catalog when the product was added.
    pub name: String,
    pub quantity: i64,
    /// Unit price in the smallest currency unit, copied from the catalog
    /// when the product was added.
    pub unit_price: u64,
}

impl CartLine {
    /// Line subtotal: unit price times quantity.
    pub fn subtotal(&self) -> u64 {
        self.unit_price.saturating_mul(self.quantity.max(0) as u64)
    }
}

/// Shopping cart state.
///
/// A cart is an immutable value: the reducer returns a new cart and never
/// touches the one it was given, so callers holding the previous cart keep
/// observing its old contents.
///
/// Carts are only constructed through [`Cart::empty`] and the reducer; the
/// aggregate itself has no wire form ([`CartLine`] and [`CartAction`] carry
/// the serialized shapes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
    /// Increments by exactly one each time an action changes the contents.
    /// Actions that leave the cart as it was keep the revision, so the
    /// revision changes if and only if the contents did. Derivations cache
    /// on it (see `shopwindow_core::Memo`).
    revision: u64,
}

impl Cart {
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            revision: 0,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Cart total in the smallest currency unit.
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line.subtotal()))
    }

    fn with_added(&self, product: &Product) -> Self {
        let mut next = self.clone();
        match next.lines.iter_mut().find(|l| l.product_id == product.id) {
            // Saturated quantity cannot move: contents unchanged, revision kept.
            Some(line) if line.quantity == i64::MAX => return self.clone(),
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => next.lines.push(CartLine {
                product_id: product.id,
                name: product.name.clone(),
                quantity: 1,
                unit_price: product.price,
            }),
        }
        next.revision += 1;
        next
    }

    fn with_removed(&self, product_id: ProductId) -> Self {
        if self.line(product_id).is_none() {
            return self.clone();
        }
        let mut next = self.clone();
        next.lines.retain(|line| line.product_id != product_id);
        next.revision += 1;
        next
    }

    fn with_quantity(&self, product_id: ProductId, quantity: i64) -> Self {
        let clamped = quantity.max(1);
        let Some(index) = self
            .lines
            .iter()
            .position(|line| line.product_id == product_id)
        else {
            return self.clone();
        };
        if self.lines[index].quantity == clamped {
            return self.clone();
        }
        let mut next = self.clone();
        next.lines[index].quantity = clamped;
        next.revision += 1;
        next
    }

    fn cleared(&self) -> Self {
        if self.lines.is_empty() {
            return self.clone();
        }
        Self {
            lines: Vec::new(),
            revision: self.revision + 1,
        }
    }
}

/// Actions the cart reducer understands.
///
/// The wire form is adjacently tagged, e.g.
/// `{"type":"ADD_ITEM","payload":{...}}`. Tags outside the known set
/// deserialize as [`CartAction::Unknown`] instead of failing, and the
/// reducer ignores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Add one unit of the product, merging with an existing line.
    AddItem(Product),
    /// Drop the line for the product, wherever it sits.
    RemoveItem(ProductId),
    /// Set the line's quantity. Zero or negative requests clamp to one;
    /// removal goes through [`CartAction::RemoveItem`] instead.
    UpdateQuantity {
        #[serde(rename = "id")]
        product_id: ProductId,
        quantity: i64,
    },
    /// Empty the cart in one step.
    ClearCart,
    /// Any unrecognized tag. Applying it returns the cart unchanged.
    #[serde(other, deserialize_with = "ignore_payload")]
    Unknown,
}

/// `#[serde(other)]` alone rejects unknown tags that carry a `payload`;
/// discarding the payload here lets them land on [`CartAction::Unknown`].
fn ignore_payload<'de, D>(deserializer: D) -> Result<(), D::Error>
where
    D: Deserializer<'de>,
{
    serde::de::IgnoredAny::deserialize(deserializer)?;
    Ok(())
}

impl Reducer for Cart {
    type Action = CartAction;

    fn apply(&self, action: &CartAction) -> Self {
        match action {
            CartAction::AddItem(product) => self.with_added(product),
            CartAction::RemoveItem(product_id) => self.with_removed(*product_id),
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => self.with_quantity(*product_id, *quantity),
            CartAction::ClearCart => self.cleared(),
            CartAction::Unknown => self.clone(),
        }
    }
}
