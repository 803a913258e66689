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

//! Weather map lifecycle library.
//!
//! This library owns everything about a weather map that does not involve
//! drawing pixels. It is split into layers that can be used on their own:
//!
//! - **Engine layer**: the [`MapEngine`] trait describing a map's source/layer
//!   registry, plus [`HeadlessMap`], a complete implementation without a renderer
//! - **Overlay layer**: the four OpenWeatherMap overlays, their identifiers,
//!   tile templates and legends, and [`OverlayLayer`] which attaches one to a map
//! - **Style layer**: the base style catalogue and the single-choice [`StyleSwitcher`]
//! - **Container layer**: [`MapContainer`], which owns the map instance and
//!   drives readiness, overlay selection and style changes
//!
//! # Quick Start
//!
//! ```
//! use weather_map::{BaseStyle, HeadlessMap, MapContainer, MapEngine, MapOptions, OverlayKind};
//!
//! let mut container = MapContainer::new(MapOptions::default(), "my-api-key");
//! container.mount(|options| Some(HeadlessMap::new(options.style.clone())));
//!
//! // The engine reports its initial load on the first tick.
//! container.pump();
//! assert!(container.is_ready());
//!
//! container.select_overlay(OverlayKind::Precipitation);
//! let map = container.map().unwrap();
//! assert!(map.has_source("precipitation_source"));
//! assert!(map.has_layer("precipitation_layer"));
//!
//! container.change_style(BaseStyle::Satellite.style_ref());
//! assert_eq!(container.selection(), None);
//! assert!(!container.map().unwrap().has_layer("precipitation_layer"));
//! ```

pub mod container;
pub mod engine;
pub mod overlay;
pub mod style;

pub use container::{Lifecycle, MapContainer, MapOptions};
pub use engine::{
    HeadlessMap, MapEngine, MapError, MapEvent, RasterLayer, RasterSource, StyleRef,
    StyleRefError,
};
pub use overlay::{Legend, OverlayKind, OverlayLayer};
pub use style::{BaseStyle, StyleSwitcher};
