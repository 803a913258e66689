// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Map container: owner of the map instance and its lifecycle.
//!
//! Lifecycle: `Uninitialized -> Creating -> Ready -> Destroyed`. Creation
//! happens in [`MapContainer::mount`], readiness arrives with the engine's
//! `Load` event (drained by [`MapContainer::pump`], once per frame), and
//! [`MapContainer::unmount`] (also run on drop) tears everything down.
//!
//! Overlay selection and style changes are ignored until the map is ready.
//! A style swap discards every custom layer inside the engine, so the
//! container removes all overlay registrations first and clears the
//! selection. Overlays are not re-added until the engine has reported the new
//! style and one more tick has passed.

use log::{debug, info, warn};

use crate::engine::{MapEngine, MapEvent, StyleRef};
use crate::overlay::{clear_registration, OverlayKind, OverlayLayer};
use crate::style::{BaseStyle, StyleSwitcher};

/// Default map center longitude
pub const DEFAULT_CENTER_LON: f64 = -46.940_186;

/// Default map center latitude
pub const DEFAULT_CENTER_LAT: f64 = -19.582_844;

/// Default zoom level
pub const DEFAULT_ZOOM: f64 = 4.0;

/// Default overlay opacity
pub const DEFAULT_OVERLAY_OPACITY: f32 = 0.8;

/// Initial viewport and appearance of a new map instance
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub center_lon: f64,
    pub center_lat: f64,
    pub zoom: f64,
    pub style: StyleRef,
    /// Opacity applied to overlay layers (0.0 - 1.0)
    pub overlay_opacity: f32,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center_lon: DEFAULT_CENTER_LON,
            center_lat: DEFAULT_CENTER_LAT,
            zoom: DEFAULT_ZOOM,
            style: BaseStyle::default().style_ref(),
            overlay_opacity: DEFAULT_OVERLAY_OPACITY,
        }
    }
}

/// Map instance lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    /// Instance exists, waiting for its load event
    Creating,
    Ready,
    Destroyed,
}

/// Progress of the latest style swap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StyleSettle {
    Settled,
    /// Style swapped, engine has not reported it yet
    AwaitingStyleData,
    /// Style reported, overlays may be added on the next tick
    Settling,
}

/// Owns the map instance and mediates every overlay and style operation.
#[derive(Debug)]
pub struct MapContainer<E: MapEngine> {
    options: MapOptions,
    api_key: String,
    map: Option<E>,
    lifecycle: Lifecycle,
    selection: Option<OverlayKind>,
    active: Option<OverlayLayer>,
    settle: StyleSettle,
    switcher: StyleSwitcher,
}

impl<E: MapEngine> MapContainer<E> {
    /// Create an empty container. `api_key` is used for the overlay tile URLs.
    #[must_use]
    pub fn new(options: MapOptions, api_key: impl Into<String>) -> Self {
        let switcher = StyleSwitcher::for_style(&options.style);

        Self {
            options,
            api_key: api_key.into(),
            map: None,
            lifecycle: Lifecycle::Uninitialized,
            selection: None,
            active: None,
            settle: StyleSettle::Settled,
            switcher,
        }
    }

    /// Create the map instance if there is none yet.
    ///
    /// `create` returns `None` when there is nowhere to put the map; the
    /// container then stays unmounted and the next call tries again.
    pub fn mount<F>(&mut self, create: F)
    where
        F: FnOnce(&MapOptions) -> Option<E>,
    {
        if self.map.is_some() {
            return;
        }

        self.lifecycle = Lifecycle::Creating;
        match create(&self.options) {
            Some(map) => {
                info!(
                    "Created map at ({:.4}, {:.4}) zoom {} with style {}",
                    self.options.center_lat, self.options.center_lon, self.options.zoom, map.style()
                );
                self.switcher.sync(map.style());
                self.map = Some(map);
            }
            None => {
                debug!("Mount target unavailable, map not created");
                self.lifecycle = Lifecycle::Uninitialized;
            }
        }
    }

    /// Process engine events and advance deferred work by one tick.
    pub fn pump(&mut self) {
        let Some(map) = self.map.as_mut() else {
            return;
        };

        let was_settling = self.settle == StyleSettle::Settling;

        for event in map.poll_events() {
            match event {
                MapEvent::Load => {
                    if self.lifecycle == Lifecycle::Creating {
                        info!("Map ready");
                        self.lifecycle = Lifecycle::Ready;
                    }
                }
                MapEvent::StyleData(style) => {
                    debug!("Style {} loaded", style);
                    if self.settle == StyleSettle::AwaitingStyleData {
                        self.settle = StyleSettle::Settling;
                    }
                }
            }
        }

        if was_settling && self.settle == StyleSettle::Settling {
            self.settle = StyleSettle::Settled;
            self.mount_selection();
        }
    }

    /// Show overlay `kind`, replacing whatever overlay is active.
    pub fn select_overlay(&mut self, kind: OverlayKind) {
        if !self.is_ready() {
            debug!("Map not ready, ignoring {} selection", kind.display_name());
            return;
        }
        if self.selection == Some(kind) {
            return;
        }

        self.teardown_overlays();
        self.selection = Some(kind);

        if self.settle == StyleSettle::Settled {
            self.mount_selection();
        } else {
            debug!("Style still loading, deferring {} overlay", kind.display_name());
        }
    }

    /// Apply a new base style. All overlays are removed first and the
    /// selection is cleared; the user picks an overlay again afterwards.
    pub fn change_style(&mut self, style: StyleRef) {
        if !self.is_ready() {
            debug!("Map not ready, ignoring style {}", style);
            return;
        }

        self.teardown_overlays();
        self.selection = None;

        if let Some(map) = self.map.as_mut() {
            info!("Changing style {} -> {}", map.style(), style);
            self.switcher.sync(&style);
            map.set_style(style);
            self.settle = StyleSettle::AwaitingStyleData;
        }
    }

    /// Style switcher entry point: check `style` and apply it if it changed.
    pub fn choose_style(&mut self, style: BaseStyle) {
        let mut requested = None;
        self.switcher
            .choose(style, self.is_ready(), |style_ref| requested = Some(style_ref));

        if let Some(style_ref) = requested {
            self.change_style(style_ref);
        }
    }

    /// Remove the active overlay and destroy the map instance.
    pub fn unmount(&mut self) {
        if let Some(mut map) = self.map.take() {
            if let Some(mut active) = self.active.take() {
                if let Err(e) = active.unmount(&mut map) {
                    warn!("Failed to remove {} overlay: {}", active.kind().display_name(), e);
                }
            }
            drop(map);
            info!("Map destroyed");
        }

        self.active = None;
        self.selection = None;
        self.settle = StyleSettle::Settled;
        self.lifecycle = Lifecycle::Destroyed;
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Readiness flag
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    /// Currently selected overlay, `None` when no overlay is shown
    #[must_use]
    pub fn selection(&self) -> Option<OverlayKind> {
        self.selection
    }

    /// Whether a style swap is still in progress
    #[must_use]
    pub fn is_style_loading(&self) -> bool {
        self.settle != StyleSettle::Settled
    }

    #[must_use]
    pub fn style_switcher(&self) -> &StyleSwitcher {
        &self.switcher
    }

    #[must_use]
    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    #[must_use]
    pub fn map(&self) -> Option<&E> {
        self.map.as_ref()
    }

    /// Mutable access for drawing the map. Registry changes must go through
    /// the container.
    pub fn map_mut(&mut self) -> Option<&mut E> {
        self.map.as_mut()
    }

    fn mount_selection(&mut self) {
        let ready = self.is_ready();
        let (Some(kind), Some(map)) = (self.selection, self.map.as_mut()) else {
            return;
        };

        let mut overlay =
            OverlayLayer::new(kind, &self.api_key).with_opacity(self.options.overlay_opacity);
        if let Err(e) = overlay.mount(map, ready) {
            warn!("Failed to add {} overlay: {}", kind.display_name(), e);
        }
        self.active = Some(overlay);
    }

    fn teardown_overlays(&mut self) {
        let Some(map) = self.map.as_mut() else {
            return;
        };

        if let Some(mut active) = self.active.take() {
            if let Err(e) = active.unmount(map) {
                warn!("Failed to remove {} overlay: {}", active.kind().display_name(), e);
            }
        }

        for kind in OverlayKind::ALL {
            if let Err(e) = clear_registration(map, kind) {
                warn!("Failed to clear {} overlay: {}", kind.display_name(), e);
            }
        }
    }
}

impl<E: MapEngine> Drop for MapContainer<E> {
    fn drop(&mut self) {
        self.unmount();
    }
}
