//! Configurator session.
//!
//! Owns everything one user session mutates: the selected basket, the placed
//! dividers, the placement gesture, an active resize drag and the selected
//! divider. Hosts drive it through the inbound methods and render from the
//! outbound accessors; every mutation is also reported to the registered
//! listeners.
//!
//! This module is split into submodules:
//! - `placement`: placement mode, start/end clicks, ghost preview
//! - `dividers`: selection, resize drag, removal
//! - `diagnostics`: bar and floor-tile lookup for hover debugging

mod diagnostics;
mod dividers;
mod placement;

use crate::bar_ids::SideBarMaps;
use crate::divider_store::DividerStore;
use crate::floor_grid::FloorTiles;
use crate::placement::PlacementEngine;
use crate::resize::ResizeController;
use crate::snap_grid::SnapGrid;
use crate::snap_map::SnapMapCache;
use basketkit_core::{
    dispatch, BasketType, Catalog, CatalogError, ConfiguratorEvent, ConfiguratorListener, Divider,
    DividerId, PlacementMode,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Serialisable view of the session for external export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationSnapshot {
    pub basket_id: String,
    pub dividers: Vec<Divider>,
}

impl ConfigurationSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

/// Handle returned by [`Configurator::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

/// Per-basket derived state, rebuilt on every basket swap.
struct BasketState {
    basket: BasketType,
    engine: PlacementEngine,
    bars: SideBarMaps,
    tiles: FloorTiles,
}

impl BasketState {
    fn build(basket: &BasketType, cache: &mut SnapMapCache) -> Self {
        let grid = SnapGrid::for_spec(&basket.spec);
        let static_map = cache.get_or_build(basket);
        let bars = SideBarMaps::for_spec(&basket.spec);
        let tiles = FloorTiles::with_bars(&basket.spec, &bars);
        Self {
            basket: basket.clone(),
            engine: PlacementEngine::new(basket, static_map, grid),
            bars,
            tiles,
        }
    }
}

pub struct Configurator {
    catalog: Catalog,
    cache: SnapMapCache,
    state: BasketState,
    store: DividerStore,
    resize: ResizeController,
    mode: Option<PlacementMode>,
    selected: Option<DividerId>,
    listeners: Vec<(ListenerHandle, Box<dyn ConfiguratorListener>)>,
    next_listener: u64,
}

impl Configurator {
    /// Starts a session on the catalog's first basket.
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        let first = catalog
            .default_basket()
            .map(|b| b.id.clone())
            .ok_or(CatalogError::EmptyCatalog)?;
        Self::with_basket(catalog, &first)
    }

    /// Starts a session on the given basket.
    pub fn with_basket(catalog: Catalog, basket_id: &str) -> Result<Self, CatalogError> {
        let mut cache = SnapMapCache::new();
        let state = BasketState::build(catalog.get(basket_id)?, &mut cache);
        info!("Configurator started with basket {}", basket_id);
        Ok(Self {
            catalog,
            cache,
            state,
            store: DividerStore::new(),
            resize: ResizeController::new(),
            mode: None,
            selected: None,
            listeners: Vec::new(),
            next_listener: 0,
        })
    }

    pub fn add_listener(&mut self, listener: Box<dyn ConfiguratorListener>) -> ListenerHandle {
        let handle = ListenerHandle(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((handle, listener));
        handle
    }

    pub fn remove_listener(&mut self, handle: ListenerHandle) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(h, _)| *h != handle);
        self.listeners.len() != before
    }

    fn emit(&mut self, event: ConfiguratorEvent) {
        debug!("Event: {}", event);
        for (_, listener) in self.listeners.iter_mut() {
            dispatch(listener.as_mut(), &event);
        }
    }

    /// Switches to another basket. Dividers, selection, placement mode and
    /// any drag are cleared.
    pub fn select_basket(&mut self, basket_id: &str) -> Result<(), CatalogError> {
        let basket = self.catalog.get(basket_id)?;
        self.state = BasketState::build(basket, &mut self.cache);
        self.store.clear();
        self.resize.cancel();
        self.after_divider_set_changed();
        self.deselect_all();
        info!("Basket selected: {}", basket_id);
        self.emit(ConfiguratorEvent::BasketSelected(basket_id.to_string()));
        Ok(())
    }

    /// Clears dividers, selection and mode. The basket is kept.
    pub fn reset(&mut self) {
        self.store.clear();
        self.resize.cancel();
        self.mode = None;
        self.after_divider_set_changed();
        self.clear_selected();
        info!("Configuration reset");
        self.emit(ConfiguratorEvent::Reset);
    }

    /// Recomputes the merged snap map. The placement gesture is dropped;
    /// the selected divider is left alone.
    fn after_divider_set_changed(&mut self) {
        self.state.engine.refresh(self.store.as_slice());
    }

    fn clear_selected(&mut self) {
        if self.selected.take().is_some() {
            self.emit(ConfiguratorEvent::SelectionChanged(None));
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn basket(&self) -> &BasketType {
        &self.state.basket
    }

    pub fn dividers(&self) -> &[Divider] {
        self.store.as_slice()
    }

    pub fn divider(&self, id: DividerId) -> Option<&Divider> {
        self.store.get(id)
    }

    pub fn snap_grid(&self) -> &SnapGrid {
        self.state.engine.grid()
    }

    pub fn placement_mode(&self) -> Option<PlacementMode> {
        self.mode
    }

    pub fn selected_divider(&self) -> Option<DividerId> {
        self.selected
    }

    /// True while a divider is selected; the host keeps the top view.
    pub fn is_camera_locked(&self) -> bool {
        self.selected.is_some()
    }

    pub fn snapshot(&self) -> ConfigurationSnapshot {
        ConfigurationSnapshot {
            basket_id: self.state.basket.id.clone(),
            dividers: self.store.as_slice().to_vec(),
        }
    }
}
