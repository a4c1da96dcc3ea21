pub mod catalog;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use catalog::registry::ProductCatalog;
use models::{
    basket::Basket,
    flavor::Flavor,
    product::ProductId,
    settings::Settings,
    view::{BasketListView, CountIndicator},
};
use services::{flavor_resolver::FlavorResolver, view_service::ViewService};
use storage::{basket_store::BasketStore, memory::MemoryStorage, port::StoragePort};

#[cfg(not(target_arch = "wasm32"))]
use storage::file::FileStorage;

use errors::CoreError;

/// Main entry point for the smoothie basket core library.
///
/// Bundles the persisted basket with the product catalog and the derived
/// views. All operations are synchronous and single-threaded; share the
/// basket between views with `Rc` and let observers hold a `Weak`.
#[must_use]
pub struct SmoothieBasket<P: StoragePort> {
    store: BasketStore<P>,
    catalog: ProductCatalog,
    flavor_resolver: FlavorResolver,
    view_service: ViewService,
}

impl<P: StoragePort> std::fmt::Debug for SmoothieBasket<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmoothieBasket")
            .field("key", &self.store.key())
            .field("items", &self.store.load().len())
            .field("catalog", &self.catalog.len())
            .field("observers", &self.store.notifier().observer_count())
            .finish()
    }
}

impl SmoothieBasket<MemoryStorage> {
    /// Basket kept in process memory with default settings.
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SmoothieBasket<FileStorage> {
    /// Basket persisted in a JSON key/value file on disk (native only, not WASM).
    pub fn open_file(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(FileStorage::new(path))
    }
}

impl<P: StoragePort> SmoothieBasket<P> {
    /// Basket over `port` with the default key and built-in catalog.
    pub fn new(port: P) -> Self {
        Self::build(BasketStore::new(port), ProductCatalog::with_defaults())
    }

    /// Basket over `port` configured by `settings`.
    pub fn with_settings(port: P, settings: Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        let catalog = match &settings.products {
            Some(products) => ProductCatalog::from_entries(products),
            None => ProductCatalog::with_defaults(),
        };
        Ok(Self::build(
            BasketStore::with_key(port, settings.storage_key),
            catalog,
        ))
    }

    fn build(store: BasketStore<P>, catalog: ProductCatalog) -> Self {
        Self {
            store,
            catalog,
            flavor_resolver: FlavorResolver::new(),
            view_service: ViewService::new(),
        }
    }

    // ── Basket ──────────────────────────────────────────────────────

    /// Current basket contents. A missing or corrupt persisted value is an
    /// empty basket.
    #[must_use]
    pub fn load(&self) -> Basket {
        self.store.load()
    }

    /// Add a product to the end of the basket, then notify observers.
    pub fn append(&self, id: impl Into<ProductId>) -> Result<(), CoreError> {
        self.store.append(id)
    }

    /// Empty the basket, then notify observers.
    pub fn clear(&self) -> Result<(), CoreError> {
        self.store.clear()
    }

    /// Register a view refresh callback, run after every append/clear.
    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn() -> Result<(), CoreError> + 'static,
    {
        self.store.subscribe(observer);
    }

    // ── Flavor ──────────────────────────────────────────────────────

    /// Flavor of the current basket. Recomputed on every call.
    #[must_use]
    pub fn flavor(&self) -> Flavor {
        self.flavor_resolver.resolve(&self.catalog, &self.store.load())
    }

    /// Flavor of an arbitrary basket against this catalog.
    #[must_use]
    pub fn resolve(&self, basket: &Basket) -> Flavor {
        self.flavor_resolver.resolve(&self.catalog, basket)
    }

    // ── Views ───────────────────────────────────────────────────────

    #[must_use]
    pub fn basket_list(&self) -> BasketListView {
        self.view_service
            .basket_list(&self.catalog, &self.store.load())
    }

    #[must_use]
    pub fn count_indicator(&self) -> CountIndicator {
        self.view_service.count_indicator(&self.store.load())
    }

    /// Preview text for the "blend to smoothie" option.
    #[must_use]
    pub fn smoothie_preview(&self, blend: bool) -> String {
        self.view_service.smoothie_preview(
            &self.flavor_resolver,
            &self.catalog,
            &self.store.load(),
            blend,
        )
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[must_use]
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn store(&self) -> &BasketStore<P> {
        &self.store
    }
}
