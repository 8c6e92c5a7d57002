//! # Cart Snapshots
//!
//! The cart and its pure snapshot operations.
//!
//! ## Snapshot Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Snapshot Operations                             │
//! │                                                                         │
//! │  Current Cart (immutable)          New Cart (returned)                 │
//! │  ────────────────────────          ────────────────────                │
//! │                                                                         │
//! │  with_new_entry(product, stock) ──► entries + [product @ amount 1]     │
//! │                                                                         │
//! │  with_incremented(id, stock) ─────► entries, id amount + 1             │
//! │                                                                         │
//! │  with_amount(id, n, stock) ───────► entries, id amount = n             │
//! │                                                                         │
//! │  without(id) ─────────────────────► entries - [id]                     │
//! │                                                                         │
//! │  Every operation validates first and returns a WHOLLY NEW Cart.        │
//! │  On any error the caller still holds the untouched original.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Entry identifiers are unique within a cart
//! - Every entry amount is >= 1
//! - An entry amount never exceeds the Stock observed when it was last
//!   validated (best-effort; stock can change remotely afterwards)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CartError, CoreResult};
use crate::types::{Product, Stock};

// =============================================================================
// Cart Entry
// =============================================================================

/// A product entry in the cart.
///
/// The product metadata is frozen at the moment the entry is created:
/// if the catalog changes afterwards, the cart keeps displaying the data
/// the shopper actually added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    /// Frozen product metadata (id, title, price, image).
    #[serde(flatten)]
    pub product: Product,

    /// Quantity in the cart (always >= 1).
    pub amount: i64,

    /// When this entry was first added.
    pub added_at: DateTime<Utc>,
}

impl CartEntry {
    /// Creates a new entry at quantity 1, freezing the product metadata.
    pub fn new(product: Product) -> Self {
        CartEntry {
            product,
            amount: 1,
            added_at: Utc::now(),
        }
    }

    /// Product identifier of this entry.
    #[inline]
    pub fn product_id(&self) -> u64 {
        self.product.id
    }

    /// Line total (unit price x quantity) in cents.
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.product.price_cents * self.amount
    }
}

// =============================================================================
// Cart
// =============================================================================

/// An immutable snapshot of the shopper's cart.
///
/// Serializes as a plain JSON array of entries, which is what gets
/// persisted under the snapshot key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            entries: Vec::new(),
        }
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    /// Returns the entry for a product, if present.
    pub fn entry(&self, product_id: u64) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product_id() == product_id)
    }

    /// Returns true if the product has an entry in this cart.
    pub fn contains(&self, product_id: u64) -> bool {
        self.entry(product_id).is_some()
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cart has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total quantity across all entries.
    pub fn total_quantity(&self) -> i64 {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Subtotal across all entries, in cents.
    pub fn subtotal_cents(&self) -> i64 {
        self.entries.iter().map(|e| e.line_total_cents()).sum()
    }

    // =========================================================================
    // Snapshot Operations
    // =========================================================================

    /// Returns a new cart with `product` appended at quantity 1.
    ///
    /// ## Preconditions
    /// The product must not already have an entry; callers check with
    /// [`Cart::entry`] and use [`Cart::with_incremented`] instead when it
    /// does. At least one unit must be available.
    pub fn with_new_entry(&self, product: Product, stock: &Stock) -> CoreResult<Cart> {
        debug_assert!(!self.contains(product.id), "duplicate cart entry");

        if !stock.is_available() {
            return Err(CartError::OutOfStock {
                product_id: product.id,
            });
        }

        let mut entries = self.entries.clone();
        entries.push(CartEntry::new(product));
        Ok(Cart { entries })
    }

    /// Returns a new cart with the entry's quantity increased by 1.
    ///
    /// The increment is only allowed while the observed stock strictly
    /// exceeds the current amount, so the new amount never exceeds stock.
    pub fn with_incremented(&self, product_id: u64, stock: &Stock) -> CoreResult<Cart> {
        let entry = self
            .entry(product_id)
            .ok_or(CartError::NotInCart { product_id })?;

        if stock.amount <= entry.amount {
            return Err(CartError::InsufficientStock {
                product_id,
                available: stock.amount,
                requested: entry.amount + 1,
            });
        }

        Ok(self.map_entry(product_id, |e| e.amount += 1))
    }

    /// Returns a new cart with the entry's quantity set to exactly `amount`.
    ///
    /// This is a replacement, not an addition. Checks run in order:
    /// positive amount, observed stock covers it, entry exists.
    pub fn with_amount(&self, product_id: u64, amount: i64, stock: &Stock) -> CoreResult<Cart> {
        if amount < 1 {
            return Err(CartError::InvalidAmount { requested: amount });
        }

        if !stock.covers(amount) {
            return Err(CartError::InsufficientStock {
                product_id,
                available: stock.amount,
                requested: amount,
            });
        }

        if !self.contains(product_id) {
            return Err(CartError::NotInCart { product_id });
        }

        Ok(self.map_entry(product_id, |e| e.amount = amount))
    }

    /// Returns a new cart without the entry for `product_id`.
    pub fn without(&self, product_id: u64) -> CoreResult<Cart> {
        if !self.contains(product_id) {
            return Err(CartError::NotInCart { product_id });
        }

        let entries = self
            .entries
            .iter()
            .filter(|e| e.product_id() != product_id)
            .cloned()
            .collect();
        Ok(Cart { entries })
    }

    /// Clones the entries, applying `f` to the one matching `product_id`.
    fn map_entry<F>(&self, product_id: u64, f: F) -> Cart
    where
        F: FnOnce(&mut CartEntry),
    {
        let mut entries = self.entries.clone();
        if let Some(entry) = entries.iter_mut().find(|e| e.product_id() == product_id) {
            f(entry);
        }
        Cart { entries }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
