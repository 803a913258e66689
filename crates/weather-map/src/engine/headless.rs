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

//! Map engine without a renderer.

use std::collections::{HashMap, VecDeque};

use log::debug;

use super::{MapEngine, MapError, MapEvent, RasterLayer, RasterSource, StyleRef};

/// Registry-only map engine.
///
/// Keeps sources and layers exactly like a rendering engine would and fires
/// the same events, but draws nothing. Rendering engines wrap one of these
/// for their bookkeeping.
#[derive(Debug)]
pub struct HeadlessMap {
    style: StyleRef,
    sources: HashMap<String, RasterSource>,
    /// Layers in draw order (bottom first)
    layers: Vec<RasterLayer>,
    events: VecDeque<MapEvent>,
}

impl HeadlessMap {
    /// Create a map showing `style`. A [`MapEvent::Load`] is queued right away.
    #[must_use]
    pub fn new(style: StyleRef) -> Self {
        let mut events = VecDeque::new();
        events.push_back(MapEvent::Load);

        Self {
            style,
            sources: HashMap::new(),
            layers: Vec::new(),
            events,
        }
    }

    /// Layers in draw order
    #[must_use]
    pub fn layers(&self) -> &[RasterLayer] {
        &self.layers
    }

    #[must_use]
    pub fn layer(&self, id: &str) -> Option<&RasterLayer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    #[must_use]
    pub fn source(&self, id: &str) -> Option<&RasterSource> {
        self.sources.get(id)
    }

    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

impl MapEngine for HeadlessMap {
    fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    fn has_layer(&self, id: &str) -> bool {
        self.layer(id).is_some()
    }

    fn add_source(&mut self, id: &str, source: RasterSource) -> Result<(), MapError> {
        if self.has_source(id) {
            return Err(MapError::SourceExists(id.to_string()));
        }
        debug!("Adding source '{}'", id);
        self.sources.insert(id.to_string(), source);
        Ok(())
    }

    fn add_layer(&mut self, layer: RasterLayer) -> Result<(), MapError> {
        if self.has_layer(&layer.id) {
            return Err(MapError::LayerExists(layer.id));
        }
        if !self.has_source(&layer.source) {
            return Err(MapError::SourceNotFound(layer.source));
        }
        debug!("Adding layer '{}' (source '{}')", layer.id, layer.source);
        self.layers.push(layer);
        Ok(())
    }

    fn remove_layer(&mut self, id: &str) -> Result<(), MapError> {
        let pos = self
            .layers
            .iter()
            .position(|layer| layer.id == id)
            .ok_or_else(|| MapError::LayerNotFound(id.to_string()))?;
        debug!("Removing layer '{}'", id);
        self.layers.remove(pos);
        Ok(())
    }

    fn remove_source(&mut self, id: &str) -> Result<(), MapError> {
        if !self.has_source(id) {
            return Err(MapError::SourceNotFound(id.to_string()));
        }
        if let Some(layer) = self.layers.iter().find(|layer| layer.source == id) {
            return Err(MapError::SourceInUse {
                source_id: id.to_string(),
                layer_id: layer.id.clone(),
            });
        }
        debug!("Removing source '{}'", id);
        self.sources.remove(id);
        Ok(())
    }

    fn set_style(&mut self, style: StyleRef) {
        debug!(
            "Switching style {} -> {} (dropping {} layers, {} sources)",
            self.style,
            style,
            self.layers.len(),
            self.sources.len()
        );
        self.layers.clear();
        self.sources.clear();
        self.style = style.clone();
        self.events.push_back(MapEvent::StyleData(style));
    }

    fn style(&self) -> &StyleRef {
        &self.style
    }

    fn poll_events(&mut self) -> Vec<MapEvent> {
        self.events.drain(..).collect()
    }
}
