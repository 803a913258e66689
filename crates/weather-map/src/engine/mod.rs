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

//! Map engine abstraction.
//!
//! A map engine keeps a registry of tile sources and the raster layers that
//! draw them on top of a base style. The rules follow Mapbox GL: ids are
//! unique, a layer needs its source, a source cannot be removed while a layer
//! uses it, and swapping the base style throws every custom source and layer
//! away. Callers are expected to check for existence before adding or
//! removing anything; the engine itself reports violations as [`MapError`].

mod headless;

pub use headless::HeadlessMap;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors reported by a map engine when its registry rules are violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("source '{0}' already exists")]
    SourceExists(String),

    #[error("source '{0}' does not exist")]
    SourceNotFound(String),

    #[error("source '{source_id}' is still used by layer '{layer_id}'")]
    SourceInUse { source_id: String, layer_id: String },

    #[error("layer '{0}' already exists")]
    LayerExists(String),

    #[error("layer '{0}' does not exist")]
    LayerNotFound(String),
}

/// Errors produced when parsing a style reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleRefError {
    #[error("style reference must start with 'mapbox://styles/': {0}")]
    MissingScheme(String),

    #[error("style reference must name an owner and a style id: {0}")]
    InvalidPath(String),
}

/// Reference to a vendor base style, e.g. `mapbox://styles/mapbox/dark-v11`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleRef {
    owner: String,
    style_id: String,
}

impl StyleRef {
    /// URL prefix shared by all style references
    pub const SCHEME: &'static str = "mapbox://styles/";

    /// Owner of the built-in vendor styles
    pub const VENDOR: &'static str = "mapbox";

    #[must_use]
    pub fn new(owner: impl Into<String>, style_id: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            style_id: style_id.into(),
        }
    }

    /// Reference to one of the vendor's own styles
    #[must_use]
    pub fn vendor(style_id: impl Into<String>) -> Self {
        Self::new(Self::VENDOR, style_id)
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn style_id(&self) -> &str {
        &self.style_id
    }
}

impl fmt::Display for StyleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}/{}", Self::SCHEME, self.owner, self.style_id)
    }
}

impl FromStr for StyleRef {
    type Err = StyleRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s
            .strip_prefix(Self::SCHEME)
            .ok_or_else(|| StyleRefError::MissingScheme(s.to_string()))?;

        match path.split('/').collect::<Vec<_>>().as_slice() {
            [owner, style_id] if !owner.is_empty() && !style_id.is_empty() => {
                Ok(Self::new(*owner, *style_id))
            }
            _ => Err(StyleRefError::InvalidPath(s.to_string())),
        }
    }
}

/// Raster tile source definition
#[derive(Debug, Clone, PartialEq)]
pub struct RasterSource {
    /// URL templates containing `{z}`, `{x}` and `{y}` placeholders
    pub tiles: Vec<String>,
    /// Tile edge length in pixels
    pub tile_size: u32,
}

impl RasterSource {
    /// Default raster tile size in pixels
    pub const DEFAULT_TILE_SIZE: u32 = 256;

    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            tiles: vec![template.into()],
            tile_size: Self::DEFAULT_TILE_SIZE,
        }
    }

    /// Expand the first tile template for one grid cell.
    #[must_use]
    pub fn tile_url(&self, zoom: u8, x: u32, y: u32) -> Option<String> {
        self.tiles.first().map(|template| {
            template
                .replace("{z}", &zoom.to_string())
                .replace("{x}", &x.to_string())
                .replace("{y}", &y.to_string())
        })
    }
}

/// Raster layer drawing one source
#[derive(Debug, Clone, PartialEq)]
pub struct RasterLayer {
    pub id: String,
    pub source: String,
    /// Layer opacity (0.0 - 1.0)
    pub opacity: f32,
}

impl RasterLayer {
    #[must_use]
    pub fn new(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

/// Events fired by a map engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapEvent {
    /// Initial load finished; fired once per engine
    Load,
    /// A new base style finished loading
    StyleData(StyleRef),
}

/// Source and layer registry of a live map.
pub trait MapEngine {
    fn has_source(&self, id: &str) -> bool;

    fn has_layer(&self, id: &str) -> bool;

    fn add_source(&mut self, id: &str, source: RasterSource) -> Result<(), MapError>;

    /// Add a layer on top of all existing layers.
    fn add_layer(&mut self, layer: RasterLayer) -> Result<(), MapError>;

    fn remove_layer(&mut self, id: &str) -> Result<(), MapError>;

    fn remove_source(&mut self, id: &str) -> Result<(), MapError>;

    /// Swap the base style. All custom sources and layers are discarded and a
    /// [`MapEvent::StyleData`] is queued.
    fn set_style(&mut self, style: StyleRef);

    fn style(&self) -> &StyleRef;

    /// Drain pending events in the order they were fired.
    fn poll_events(&mut self) -> Vec<MapEvent>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_ref_display() {
        let style = StyleRef::vendor("dark-v11");
        assert_eq!(style.to_string(), "mapbox://styles/mapbox/dark-v11");
    }

    #[test]
    fn test_style_ref_parse() {
        let style: StyleRef = "mapbox://styles/someone/custom-style".parse().unwrap();
        assert_eq!(style.owner(), "someone");
        assert_eq!(style.style_id(), "custom-style");
    }

    #[test]
    fn test_style_ref_parse_rejects_other_schemes() {
        let err = "https://example.com/style.json".parse::<StyleRef>().unwrap_err();
        assert!(matches!(err, StyleRefError::MissingScheme(_)));
    }

    #[test]
    fn test_style_ref_parse_rejects_bad_paths() {
        for input in [
            "mapbox://styles/",
            "mapbox://styles/mapbox",
            "mapbox://styles/mapbox/",
            "mapbox://styles/mapbox/dark-v11/extra",
        ] {
            let err = input.parse::<StyleRef>().unwrap_err();
            assert!(matches!(err, StyleRefError::InvalidPath(_)), "{input}");
        }
    }

    #[test]
    fn test_tile_url_expansion() {
        let source = RasterSource::new("https://tiles.example/{z}/{x}/{y}.png?key=abc");
        assert_eq!(
            source.tile_url(4, 5, 9).as_deref(),
            Some("https://tiles.example/4/5/9.png?key=abc")
        );
        assert_eq!(source.tile_size, 256);
    }

    #[test]
    fn test_layer_opacity_is_clamped() {
        let layer = RasterLayer::new("a", "b").with_opacity(1.7);
        assert!((layer.opacity - 1.0).abs() < f32::EPSILON);
    }
}
