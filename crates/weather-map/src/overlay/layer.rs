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

use log::{debug, info};

use super::OverlayKind;
use crate::engine::{MapEngine, MapError, RasterLayer, RasterSource};

/// Remove the layer and then the source registered for `kind`, skipping
/// whichever is absent. Returns whether anything was removed.
pub fn clear_registration<E>(map: &mut E, kind: OverlayKind) -> Result<bool, MapError>
where
    E: MapEngine + ?Sized,
{
    let mut removed = false;

    if map.has_layer(kind.layer_id()) {
        map.remove_layer(kind.layer_id())?;
        removed = true;
    }
    if map.has_source(kind.source_id()) {
        map.remove_source(kind.source_id())?;
        removed = true;
    }

    Ok(removed)
}

/// One weather overlay attached to (or detached from) a map.
///
/// The component does not hold on to the map; the owner passes it in for
/// every mount and unmount.
#[derive(Debug, Clone)]
pub struct OverlayLayer {
    kind: OverlayKind,
    source: RasterSource,
    opacity: f32,
    mounted: bool,
}

impl OverlayLayer {
    #[must_use]
    pub fn new(kind: OverlayKind, api_key: &str) -> Self {
        Self {
            kind,
            source: RasterSource::new(kind.tile_template(api_key)),
            opacity: 1.0,
            mounted: false,
        }
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn kind(&self) -> OverlayKind {
        self.kind
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Register the tile source and its raster layer. Does nothing before the
    /// map is ready; parts that are already registered are left alone.
    pub fn mount<E>(&mut self, map: &mut E, ready: bool) -> Result<(), MapError>
    where
        E: MapEngine + ?Sized,
    {
        if !ready {
            debug!("Map not ready, skipping {} overlay", self.kind.display_name());
            return Ok(());
        }

        let source_id = self.kind.source_id();
        let layer_id = self.kind.layer_id();

        if !map.has_source(source_id) {
            map.add_source(source_id, self.source.clone())?;
        }
        if !map.has_layer(layer_id) {
            map.add_layer(RasterLayer::new(layer_id, source_id).with_opacity(self.opacity))?;
        }

        if !self.mounted {
            info!("Mounted {} overlay", self.kind.display_name());
        }
        self.mounted = true;
        Ok(())
    }

    /// Remove the layer, then the source. Safe to call any number of times.
    pub fn unmount<E>(&mut self, map: &mut E) -> Result<(), MapError>
    where
        E: MapEngine + ?Sized,
    {
        let removed = clear_registration(map, self.kind)?;
        if self.mounted || removed {
            info!("Unmounted {} overlay", self.kind.display_name());
        }
        self.mounted = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{HeadlessMap, StyleRef};

    fn map() -> HeadlessMap {
        HeadlessMap::new(StyleRef::vendor("dark-v11"))
    }

    #[test]
    fn test_mount_registers_one_pair_per_kind() {
        for kind in OverlayKind::ALL {
            let mut map = map();
            let mut overlay = OverlayLayer::new(kind, "KEY");
            overlay.mount(&mut map, true).unwrap();

            assert!(overlay.is_mounted());
            assert_eq!(map.source_count(), 1);
            assert_eq!(map.layer_count(), 1);
            let layer = map.layer(kind.layer_id()).unwrap();
            assert_eq!(layer.source, kind.source_id());

            overlay.unmount(&mut map).unwrap();
            assert!(!overlay.is_mounted());
            assert_eq!(map.source_count(), 0);
            assert_eq!(map.layer_count(), 0);
        }
    }

    #[test]
    fn test_mount_before_ready_is_skipped() {
        let mut map = map();
        let mut overlay = OverlayLayer::new(OverlayKind::Clouds, "KEY");
        overlay.mount(&mut map, false).unwrap();

        assert!(!overlay.is_mounted());
        assert!(!map.has_source("clouds_source"));
        assert!(!map.has_layer("clouds_layer"));
    }

    #[test]
    fn test_mount_twice_keeps_single_registration() {
        let mut map = map();
        let mut overlay = OverlayLayer::new(OverlayKind::Wind, "KEY");
        overlay.mount(&mut map, true).unwrap();
        overlay.mount(&mut map, true).unwrap();

        assert_eq!(map.source_count(), 1);
        assert_eq!(map.layer_count(), 1);
    }

    #[test]
    fn test_two_components_of_same_kind_share_registration() {
        let mut map = map();
        OverlayLayer::new(OverlayKind::Temperature, "KEY")
            .mount(&mut map, true)
            .unwrap();
        OverlayLayer::new(OverlayKind::Temperature, "KEY")
            .mount(&mut map, true)
            .unwrap();

        assert_eq!(map.layer_count(), 1);
    }

    #[test]
    fn test_unmount_twice_is_harmless() {
        let mut map = map();
        let mut overlay = OverlayLayer::new(OverlayKind::Precipitation, "KEY");
        overlay.mount(&mut map, true).unwrap();
        overlay.unmount(&mut map).unwrap();
        overlay.unmount(&mut map).unwrap();
    }

    #[test]
    fn test_unmount_after_style_swap_is_harmless() {
        let mut map = map();
        let mut overlay = OverlayLayer::new(OverlayKind::Precipitation, "KEY");
        overlay.mount(&mut map, true).unwrap();

        map.set_style(StyleRef::vendor("light-v10"));
        overlay.unmount(&mut map).unwrap();
    }

    #[test]
    fn test_mount_restores_missing_layer() {
        let mut map = map();
        let mut overlay = OverlayLayer::new(OverlayKind::Clouds, "KEY");
        overlay.mount(&mut map, true).unwrap();
        map.remove_layer("clouds_layer").unwrap();

        overlay.mount(&mut map, true).unwrap();
        assert!(map.has_layer("clouds_layer"));
        assert_eq!(map.source_count(), 1);
    }

    #[test]
    fn test_layer_uses_configured_opacity() {
        let mut map = map();
        OverlayLayer::new(OverlayKind::Clouds, "KEY")
            .with_opacity(0.6)
            .mount(&mut map, true)
            .unwrap();

        let layer = map.layer("clouds_layer").unwrap();
        assert!((layer.opacity - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn test_source_points_at_tile_template() {
        let mut map = map();
        OverlayLayer::new(OverlayKind::Wind, "KEY")
            .mount(&mut map, true)
            .unwrap();

        let source = map.source("winds_source").unwrap();
        assert_eq!(
            source.tile_url(3, 1, 2).as_deref(),
            Some("https://tile.openweathermap.org/map/wind_new/3/1/2.png?appid=KEY")
        );
    }
}
