//! # Cart Session
//!
//! The cart state machine: one authoritative snapshot, three mutations.
//!
//! ## State Machine View
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Session Transitions                             │
//! │                                                                         │
//! │                 add_product(id)                                        │
//! │        ┌────────────────────────────────┐                              │
//! │        │                                ▼                              │
//! │  ┌───────────┐   update_product_amount  ┌───────────┐                  │
//! │  │  Cart S   │ ───────────────────────► │  Cart S'  │                  │
//! │  └───────────┘                          └───────────┘                  │
//! │        ▲        remove_product(id)           │                         │
//! │        └─────────────────────────────────────┘                         │
//! │                                                                         │
//! │  Each transition either fully commits (new snapshot in memory AND      │
//! │  written to the store) or fully no-ops (snapshot untouched, one        │
//! │  notification emitted). There are no observable intermediate states.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single Writer
//! The session locks the cart for the entire operation, including the
//! awaited inventory lookups. A stale-read race between validation and
//! commit is therefore impossible: whoever holds the lock sees the latest
//! snapshot and nobody else can commit underneath them.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::{SessionError, SessionResult};
use crate::notify::{Notifier, Severity};
use shoes_core::{Cart, CartError};
use shoes_inventory::{InventoryClient, InventoryError};
use shoes_storage::SnapshotStore;

/// Fixed key the serialized cart snapshot lives under.
pub const CART_SNAPSHOT_KEY: &str = "@RocketShoes:cart";

// =============================================================================
// User-Facing Messages
// =============================================================================

/// The messages the session hands to the notifier, one constant per
/// outcome so tests and UIs can match on them.
pub mod messages {
    /// Add succeeded (new entry or increment).
    pub const ADDED: &str = "Added to cart";

    /// Add of a product with zero remote stock.
    pub const OUT_OF_STOCK: &str = "Product is out of stock";

    /// Requested quantity exceeds the observed stock.
    pub const INSUFFICIENT_STOCK: &str = "Requested quantity exceeds available stock";

    /// Requested quantity is not a positive integer.
    pub const INVALID_AMOUNT: &str = "Invalid quantity";

    /// Generic add failure (inventory unreachable or undecodable).
    pub const ADD_FAILED: &str = "Failed to add product";

    /// Generic remove failure (entry not found).
    pub const REMOVE_FAILED: &str = "Failed to remove product";

    /// Generic quantity-change failure (entry not found or inventory error).
    pub const UPDATE_FAILED: &str = "Failed to change product quantity";
}

// =============================================================================
// CartSession
// =============================================================================

/// The operation a failure occurred in, for message selection.
#[derive(Debug, Clone, Copy)]
enum Op {
    Add,
    Remove,
    Update,
}

impl Op {
    /// The collapsed message for collaborator failures in this operation.
    fn generic_message(self) -> &'static str {
        match self {
            Op::Add => messages::ADD_FAILED,
            Op::Remove => messages::REMOVE_FAILED,
            Op::Update => messages::UPDATE_FAILED,
        }
    }
}

struct SessionInner {
    /// The single authoritative cart snapshot.
    cart: Mutex<Cart>,
    inventory: Arc<dyn InventoryClient>,
    store: Arc<dyn SnapshotStore>,
    notifier: Arc<dyn Notifier>,
}

/// The cart state machine.
///
/// Cheap to clone; all clones share the same snapshot and collaborators.
///
/// ## Usage
/// ```rust,ignore
/// let session = CartSession::hydrate(inventory, store, notifier);
///
/// session.add_product(1).await?;
/// session.update_product_amount(1, 3).await?;
/// let cart = session.cart().await;
/// ```
#[derive(Clone)]
pub struct CartSession {
    inner: Arc<SessionInner>,
}

impl CartSession {
    /// Creates a session, seeding the cart from the snapshot store.
    ///
    /// ## Hydration Rules
    /// - key absent: start with an empty cart
    /// - key present and decodable: restore that exact cart
    /// - key present but undecodable, or the read itself fails: start
    ///   with an empty cart and log a warning (treated like absence)
    pub fn hydrate(
        inventory: Arc<dyn InventoryClient>,
        store: Arc<dyn SnapshotStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let cart = match store.read(CART_SNAPSHOT_KEY) {
            Ok(Some(bytes)) => match serde_json::from_slice::<Cart>(&bytes) {
                Ok(cart) => {
                    info!(entries = cart.len(), "Restored cart snapshot");
                    cart
                }
                Err(e) => {
                    warn!(error = %e, "Persisted cart snapshot is corrupt, starting empty");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "Could not read cart snapshot, starting empty");
                Cart::new()
            }
        };

        CartSession {
            inner: Arc::new(SessionInner {
                cart: Mutex::new(cart),
                inventory,
                store,
                notifier,
            }),
        }
    }

    // =========================================================================
    // Read Accessor
    // =========================================================================

    /// Returns the current cart snapshot.
    ///
    /// Pure from the caller's perspective: no side effects, no failure
    /// mode, identical values across calls without intervening mutations.
    pub async fn cart(&self) -> Cart {
        self.inner.cart.lock().await.clone()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - product not yet in the cart: fetch metadata + stock; append a new
    ///   entry at amount 1 if at least one unit is available, otherwise
    ///   report out-of-stock
    /// - product already in the cart: fetch stock only; increment the
    ///   entry while stock strictly exceeds the current amount
    ///
    /// At most one commit and at most two inventory calls per invocation.
    pub async fn add_product(&self, product_id: u64) -> SessionResult<Cart> {
        debug!(product_id, "add_product");
        let mut cart = self.inner.cart.lock().await;

        let new_cart = if cart.contains(product_id) {
            let stock = self.fetch_stock(product_id, Op::Add).await?;
            self.check(cart.with_incremented(product_id, &stock), Op::Add)?
        } else {
            let product = self.fetch_product(product_id, Op::Add).await?;
            let stock = self.fetch_stock(product_id, Op::Add).await?;
            self.check(cart.with_new_entry(product, &stock), Op::Add)?
        };

        self.commit(&mut cart, new_cart);
        self.inner.notifier.notify(messages::ADDED, Severity::Info);
        Ok(cart.clone())
    }

    /// Removes a product's entry from the cart.
    ///
    /// Purely local: no inventory lookup. The only failure is a missing
    /// entry, which notifies and leaves the cart untouched.
    pub async fn remove_product(&self, product_id: u64) -> SessionResult<Cart> {
        debug!(product_id, "remove_product");
        let mut cart = self.inner.cart.lock().await;

        let new_cart = self.check(cart.without(product_id), Op::Remove)?;

        self.commit(&mut cart, new_cart);
        Ok(cart.clone())
    }

    /// Sets a product's quantity to exactly `amount` (replacement, not
    /// addition).
    ///
    /// ## Check Order (short-circuits on the first failure)
    /// 1. `amount >= 1` - rejected before any inventory call
    /// 2. observed stock covers `amount`
    /// 3. the entry exists
    pub async fn update_product_amount(&self, product_id: u64, amount: i64) -> SessionResult<Cart> {
        debug!(product_id, amount, "update_product_amount");
        let mut cart = self.inner.cart.lock().await;

        if amount < 1 {
            let err = CartError::InvalidAmount { requested: amount };
            self.notify_cart_error(&err, Op::Update);
            return Err(err.into());
        }

        let stock = self.fetch_stock(product_id, Op::Update).await?;
        let new_cart = self.check(cart.with_amount(product_id, amount, &stock), Op::Update)?;

        self.commit(&mut cart, new_cart);
        Ok(cart.clone())
    }

    /// Empties the cart and commits the empty snapshot.
    ///
    /// Used after checkout or an explicit "clear cart" action.
    pub async fn clear(&self) -> Cart {
        debug!("clear");
        let mut cart = self.inner.cart.lock().await;
        self.commit(&mut cart, Cart::new());
        cart.clone()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Fetches product metadata, collapsing failures to one notification.
    async fn fetch_product(
        &self,
        product_id: u64,
        op: Op,
    ) -> Result<shoes_core::Product, SessionError> {
        match self.inner.inventory.fetch_product(product_id).await {
            Ok(product) => Ok(product),
            Err(e) => Err(self.inventory_failure(e, op)),
        }
    }

    /// Fetches the stock count, collapsing failures to one notification.
    async fn fetch_stock(&self, product_id: u64, op: Op) -> Result<shoes_core::Stock, SessionError> {
        match self.inner.inventory.fetch_stock(product_id).await {
            Ok(stock) => Ok(stock),
            Err(e) => Err(self.inventory_failure(e, op)),
        }
    }

    /// Logs an inventory failure and emits the per-operation message.
    fn inventory_failure(&self, error: InventoryError, op: Op) -> SessionError {
        warn!(error = %error, "Inventory lookup failed");
        self.inner.notifier.notify(op.generic_message(), Severity::Error);
        error.into()
    }

    /// Unwraps a core validation result, notifying on rejection.
    fn check(&self, result: shoes_core::CoreResult<Cart>, op: Op) -> Result<Cart, SessionError> {
        result.map_err(|err| {
            self.notify_cart_error(&err, op);
            err.into()
        })
    }

    /// Picks the user-facing message for a validation error.
    fn notify_cart_error(&self, err: &CartError, op: Op) {
        let message = match err {
            CartError::OutOfStock { .. } => messages::OUT_OF_STOCK,
            CartError::InsufficientStock { .. } => messages::INSUFFICIENT_STOCK,
            CartError::InvalidAmount { .. } => messages::INVALID_AMOUNT,
            CartError::NotInCart { .. } => op.generic_message(),
        };
        self.inner.notifier.notify(message, Severity::Error);
    }

    /// The commit protocol: swap the in-memory snapshot, then persist it.
    ///
    /// Runs in the same synchronous continuation as the validation that
    /// produced `new_cart` - no await between swap and write. The write
    /// is best-effort: a storage failure leaves the in-memory commit
    /// standing and is only logged.
    fn commit(&self, current: &mut Cart, new_cart: Cart) {
        *current = new_cart;

        match serde_json::to_vec(&*current) {
            Ok(bytes) => {
                if let Err(e) = self.inner.store.write(CART_SNAPSHOT_KEY, &bytes) {
                    warn!(error = %e, "Cart snapshot write failed, in-memory cart stands");
                }
            }
            Err(e) => warn!(error = %e, "Cart snapshot encoding failed"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    use async_trait::async_trait;
    use shoes_core::{Product, Stock};
    use shoes_inventory::InventoryResult;
    use shoes_storage::{MemoryStore, StorageError, StorageResult};
    use url::Url;

    // -------------------------------------------------------------------------
    // Fakes
    // -------------------------------------------------------------------------

    /// Inventory with scripted stock counts, call counters and a failure
    /// switch.
    #[derive(Default)]
    struct ScriptedInventory {
        products: StdMutex<HashMap<u64, Product>>,
        stocks: StdMutex<HashMap<u64, i64>>,
        fail: AtomicBool,
        product_calls: AtomicUsize,
        stock_calls: AtomicUsize,
    }

    impl ScriptedInventory {
        fn with_product(self, product: Product, stock: i64) -> Self {
            self.stocks.lock().unwrap().insert(product.id, stock);
            self.products.lock().unwrap().insert(product.id, product);
            self
        }

        fn fail_next_calls(&self) {
            self.fail.store(true, Ordering::SeqCst);
        }

        fn scripted_error() -> InventoryError {
            InventoryError::Endpoint(Url::parse("not a url").unwrap_err())
        }
    }

    #[async_trait]
    impl InventoryClient for ScriptedInventory {
        async fn fetch_product(&self, product_id: u64) -> InventoryResult<Product> {
            self.product_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(Self::scripted_error());
            }
            self.products
                .lock()
                .unwrap()
                .get(&product_id)
                .cloned()
                .ok_or_else(Self::scripted_error)
        }

        async fn fetch_stock(&self, product_id: u64) -> InventoryResult<Stock> {
            self.stock_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(Self::scripted_error());
            }
            self.stocks
                .lock()
                .unwrap()
                .get(&product_id)
                .map(|&amount| Stock {
                    id: product_id,
                    amount,
                })
                .ok_or_else(Self::scripted_error)
        }
    }

    /// Notifier that records every message.
    #[derive(Default)]
    struct RecordingNotifier {
        events: StdMutex<Vec<(String, Severity)>>,
    }

    impl RecordingNotifier {
        fn events(&self) -> Vec<(String, Severity)> {
            self.events.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, severity: Severity) {
            self.events
                .lock()
                .unwrap()
                .push((message.to_string(), severity));
        }
    }

    /// Store that counts writes on top of a MemoryStore.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        writes: AtomicUsize,
    }

    impl CountingStore {
        fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }
    }

    impl SnapshotStore for CountingStore {
        fn read(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
            self.inner.read(key)
        }

        fn write(&self, key: &str, bytes: &[u8]) -> StorageResult<()> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.write(key, bytes)
        }
    }

    /// Store whose writes always fail.
    struct BrokenStore;

    impl SnapshotStore for BrokenStore {
        fn read(&self, _key: &str) -> StorageResult<Option<Vec<u8>>> {
            Ok(None)
        }

        fn write(&self, _key: &str, _bytes: &[u8]) -> StorageResult<()> {
            Err(StorageError::Io(std::io::Error::other("disk on fire")))
        }
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn product(id: u64) -> Product {
        Product {
            id,
            title: format!("Shoe {}", id),
            price_cents: 13990,
            image: format!("shoe-{}.jpg", id),
        }
    }

    struct Harness {
        session: CartSession,
        inventory: Arc<ScriptedInventory>,
        notifier: Arc<RecordingNotifier>,
        store: Arc<CountingStore>,
    }

    /// Builds a session over a scripted inventory and an optional
    /// pre-persisted cart (so the setup itself performs no writes).
    fn harness(inventory: ScriptedInventory, seeded: Option<&Cart>) -> Harness {
        let store = Arc::new(CountingStore::default());
        if let Some(cart) = seeded {
            let bytes = serde_json::to_vec(cart).unwrap();
            store.inner.write(CART_SNAPSHOT_KEY, &bytes).unwrap();
        }

        let inventory = Arc::new(inventory);
        let notifier = Arc::new(RecordingNotifier::default());
        let session = CartSession::hydrate(
            inventory.clone() as Arc<dyn InventoryClient>,
            store.clone() as Arc<dyn SnapshotStore>,
            notifier.clone() as Arc<dyn Notifier>,
        );

        Harness {
            session,
            inventory,
            notifier,
            store,
        }
    }

    /// A cart holding `product(id)` at the given amount, built through
    /// the pure operations so invariants hold.
    fn cart_with(id: u64, amount: i64) -> Cart {
        let mut cart = Cart::new()
            .with_new_entry(product(id), &Stock { id, amount: amount.max(1) })
            .unwrap();
        if amount > 1 {
            cart = cart
                .with_amount(id, amount, &Stock { id, amount })
                .unwrap();
        }
        cart
    }

    fn persisted_cart(store: &CountingStore) -> Cart {
        let bytes = store.read(CART_SNAPSHOT_KEY).unwrap().unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // -------------------------------------------------------------------------
    // add_product
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn add_new_product_creates_entry_and_persists() {
        let h = harness(
            ScriptedInventory::default().with_product(product(1), 5),
            None,
        );

        let cart = h.session.add_product(1).await.unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.entry(1).unwrap().amount, 1);
        assert_eq!(cart.entry(1).unwrap().product.title, "Shoe 1");

        // persisted snapshot matches the in-memory cart
        assert_eq!(persisted_cart(&h.store), cart);
        assert_eq!(h.store.write_count(), 1);

        // one metadata lookup + one stock lookup, one info notification
        assert_eq!(h.inventory.product_calls.load(Ordering::SeqCst), 1);
        assert_eq!(h.inventory.stock_calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            h.notifier.events(),
            vec![(messages::ADDED.to_string(), Severity::Info)]
        );
    }

    #[tokio::test]
    async fn add_existing_product_increments_with_stock_lookup_only() {
        let seeded = cart_with(1, 1);
        let h = harness(
            ScriptedInventory::default().with_product(product(1), 5),
            Some(&seeded),
        );

        let cart = h.session.add_product(1).await.unwrap();

        assert_eq!(cart.entry(1).unwrap().amount, 2);
        assert_eq!(h.inventory.product_calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.inventory.stock_calls.load(Ordering::SeqCst), 1);
        assert_eq!(persisted_cart(&h.store), cart);
    }

    #[tokio::test]
    async fn add_existing_product_at_stock_limit_is_rejected() {
        let seeded = cart_with(1, 2);
        let h = harness(
            ScriptedInventory::default().with_product(product(1), 2),
            Some(&seeded),
        );

        let err = h.session.add_product(1).await.unwrap_err();

        assert!(matches!(
            err.as_cart_error(),
            Some(CartError::InsufficientStock {
                available: 2,
                requested: 3,
                ..
            })
        ));
        assert_eq!(h.session.cart().await, seeded);
        assert_eq!(h.store.write_count(), 0);
        assert_eq!(
            h.notifier.events(),
            vec![(messages::INSUFFICIENT_STOCK.to_string(), Severity::Error)]
        );
    }

    #[tokio::test]
    async fn add_new_product_with_zero_stock_notifies_out_of_stock() {
        let h = harness(
            ScriptedInventory::default().with_product(product(1), 0),
            None,
        );

        let err = h.session.add_product(1).await.unwrap_err();

        assert!(matches!(
            err.as_cart_error(),
            Some(CartError::OutOfStock { product_id: 1 })
        ));
        assert!(h.session.cart().await.is_empty());
        assert_eq!(h.store.write_count(), 0);
        assert_eq!(
            h.notifier.events(),
            vec![(messages::OUT_OF_STOCK.to_string(), Severity::Error)]
        );
    }

    #[tokio::test]
    async fn add_product_inventory_failure_leaves_cart_untouched() {
        let seeded = cart_with(1, 1);
        let h = harness(
            ScriptedInventory::default().with_product(product(1), 5),
            Some(&seeded),
        );
        h.inventory.fail_next_calls();

        let before = h.session.cart().await;
        let err = h.session.add_product(1).await.unwrap_err();

        assert!(matches!(err, SessionError::Inventory(_)));
        assert_eq!(h.session.cart().await, before);
        assert_eq!(h.store.write_count(), 0);
        // exactly one error notification, collapsed to the generic message
        assert_eq!(
            h.notifier.events(),
            vec![(messages::ADD_FAILED.to_string(), Severity::Error)]
        );
    }

    // -------------------------------------------------------------------------
    // remove_product
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn remove_product_drops_entry_and_persists() {
        let seeded = cart_with(1, 2);
        let h = harness(ScriptedInventory::default(), Some(&seeded));

        let cart = h.session.remove_product(1).await.unwrap();

        assert!(cart.is_empty());
        assert_eq!(persisted_cart(&h.store), cart);
        // removal needs no inventory at all
        assert_eq!(h.inventory.stock_calls.load(Ordering::SeqCst), 0);
        assert!(h.notifier.events().is_empty());
    }

    #[tokio::test]
    async fn remove_missing_product_notifies_and_does_not_write() {
        let seeded = cart_with(1, 1);
        let h = harness(ScriptedInventory::default(), Some(&seeded));

        let err = h.session.remove_product(9).await.unwrap_err();

        assert!(matches!(
            err.as_cart_error(),
            Some(CartError::NotInCart { product_id: 9 })
        ));
        assert_eq!(h.session.cart().await, seeded);
        assert_eq!(h.store.write_count(), 0);
        assert_eq!(
            h.notifier.events(),
            vec![(messages::REMOVE_FAILED.to_string(), Severity::Error)]
        );
    }

    // -------------------------------------------------------------------------
    // update_product_amount
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn update_amount_below_one_skips_inventory_entirely() {
        let seeded = cart_with(1, 1);
        let h = harness(
            ScriptedInventory::default().with_product(product(1), 5),
            Some(&seeded),
        );

        let err = h.session.update_product_amount(1, 0).await.unwrap_err();

        assert!(matches!(
            err.as_cart_error(),
            Some(CartError::InvalidAmount { requested: 0 })
        ));
        assert_eq!(h.inventory.stock_calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.session.cart().await, seeded);
        assert_eq!(h.store.write_count(), 0);
        assert_eq!(
            h.notifier.events(),
            vec![(messages::INVALID_AMOUNT.to_string(), Severity::Error)]
        );
    }

    #[tokio::test]
    async fn update_amount_beyond_stock_is_rejected() {
        let seeded = cart_with(1, 1);
        let h = harness(
            ScriptedInventory::default().with_product(product(1), 3),
            Some(&seeded),
        );

        let err = h.session.update_product_amount(1, 10).await.unwrap_err();

        assert!(matches!(
            err.as_cart_error(),
            Some(CartError::InsufficientStock {
                available: 3,
                requested: 10,
                ..
            })
        ));
        assert_eq!(h.session.cart().await, seeded);
        assert_eq!(h.store.write_count(), 0);
        assert_eq!(
            h.notifier.events(),
            vec![(messages::INSUFFICIENT_STOCK.to_string(), Severity::Error)]
        );
    }

    #[tokio::test]
    async fn update_amount_replaces_rather_than_adds() {
        let seeded = cart_with(1, 1);
        let h = harness(
            ScriptedInventory::default().with_product(product(1), 5),
            Some(&seeded),
        );

        let cart = h.session.update_product_amount(1, 3).await.unwrap();

        assert_eq!(cart.entry(1).unwrap().amount, 3);
        assert_eq!(persisted_cart(&h.store), cart);
        // no success toast on quantity changes
        assert!(h.notifier.events().is_empty());
    }

    #[tokio::test]
    async fn update_amount_for_missing_entry_notifies_update_failed() {
        let h = harness(
            ScriptedInventory::default().with_product(product(9), 5),
            None,
        );

        let err = h.session.update_product_amount(9, 2).await.unwrap_err();

        assert!(matches!(
            err.as_cart_error(),
            Some(CartError::NotInCart { product_id: 9 })
        ));
        assert_eq!(h.store.write_count(), 0);
        assert_eq!(
            h.notifier.events(),
            vec![(messages::UPDATE_FAILED.to_string(), Severity::Error)]
        );
    }

    #[tokio::test]
    async fn update_amount_inventory_failure_leaves_cart_untouched() {
        let seeded = cart_with(1, 1);
        let h = harness(ScriptedInventory::default(), Some(&seeded));
        h.inventory.fail_next_calls();

        let err = h.session.update_product_amount(1, 2).await.unwrap_err();

        assert!(matches!(err, SessionError::Inventory(_)));
        assert_eq!(h.session.cart().await, seeded);
        assert_eq!(
            h.notifier.events(),
            vec![(messages::UPDATE_FAILED.to_string(), Severity::Error)]
        );
    }

    // -------------------------------------------------------------------------
    // Hydration & persistence
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn hydrate_restores_persisted_snapshot_exactly() {
        let seeded = cart_with(1, 3);
        let h = harness(ScriptedInventory::default(), Some(&seeded));

        assert_eq!(h.session.cart().await, seeded);
    }

    #[tokio::test]
    async fn hydrate_starts_empty_when_key_absent() {
        let h = harness(ScriptedInventory::default(), None);
        assert!(h.session.cart().await.is_empty());
    }

    #[tokio::test]
    async fn hydrate_ignores_corrupt_snapshot() {
        let store = Arc::new(CountingStore::default());
        store
            .inner
            .write(CART_SNAPSHOT_KEY, b"{ not json at all")
            .unwrap();

        let session = CartSession::hydrate(
            Arc::new(ScriptedInventory::default()),
            store,
            Arc::new(RecordingNotifier::default()),
        );

        assert!(session.cart().await.is_empty());
    }

    #[tokio::test]
    async fn commit_survives_store_write_failure() {
        let session = CartSession::hydrate(
            Arc::new(ScriptedInventory::default().with_product(product(1), 5)),
            Arc::new(BrokenStore),
            Arc::new(RecordingNotifier::default()),
        );

        // persistence is best-effort: the in-memory commit stands
        let cart = session.add_product(1).await.unwrap();
        assert_eq!(cart.entry(1).unwrap().amount, 1);
        assert_eq!(session.cart().await, cart);
    }

    // -------------------------------------------------------------------------
    // Accessor & clear
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn cart_accessor_is_idempotent() {
        let seeded = cart_with(1, 2);
        let h = harness(ScriptedInventory::default(), Some(&seeded));

        let first = h.session.cart().await;
        let second = h.session.cart().await;
        assert_eq!(first, second);
        assert_eq!(h.store.write_count(), 0);
    }

    #[tokio::test]
    async fn clear_commits_an_empty_snapshot() {
        let seeded = cart_with(1, 2);
        let h = harness(ScriptedInventory::default(), Some(&seeded));

        let cart = h.session.clear().await;

        assert!(cart.is_empty());
        assert!(persisted_cart(&h.store).is_empty());
        assert_eq!(h.store.write_count(), 1);
    }

    // -------------------------------------------------------------------------
    // Serialization of mutations
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn concurrent_adds_are_serialized() {
        let seeded = cart_with(1, 1);
        let h = harness(
            ScriptedInventory::default().with_product(product(1), 5),
            Some(&seeded),
        );

        // both tasks target the same product; the lock is held across the
        // stock fetch, so the increments cannot observe the same snapshot
        let (a, b) = tokio::join!(h.session.add_product(1), h.session.add_product(1));
        a.unwrap();
        b.unwrap();

        assert_eq!(h.session.cart().await.entry(1).unwrap().amount, 3);
        assert_eq!(h.store.write_count(), 2);
    }
}
