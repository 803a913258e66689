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

//! Weather overlays.
//!
//! This module describes the OpenWeatherMap raster overlays (temperature,
//! precipitation, clouds and wind), the ids they register on a map, their
//! legends, and the component that attaches one to a map.

mod layer;
mod legend;

pub use layer::{clear_registration, OverlayLayer};
pub use legend::{GradientStop, Legend};

/// Tile URL prefix of the OpenWeatherMap weather layers
pub const TILE_BASE_URL: &str = "https://tile.openweathermap.org/map";

/// Available weather overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Temperature,
    Precipitation,
    Clouds,
    Wind,
}

impl OverlayKind {
    /// All overlays in button order
    pub const ALL: [OverlayKind; 4] = [
        OverlayKind::Temperature,
        OverlayKind::Precipitation,
        OverlayKind::Clouds,
        OverlayKind::Wind,
    ];

    /// Get the OpenWeatherMap layer name for URL construction
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OverlayKind::Temperature => "temp_new",
            OverlayKind::Precipitation => "precipitation_new",
            OverlayKind::Clouds => "clouds_new",
            OverlayKind::Wind => "wind_new",
        }
    }

    /// Get human-readable display name
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            OverlayKind::Temperature => "Temperature",
            OverlayKind::Precipitation => "Precipitation",
            OverlayKind::Clouds => "Clouds",
            OverlayKind::Wind => "Winds",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            OverlayKind::Temperature => "🌡",
            OverlayKind::Precipitation => "💧",
            OverlayKind::Clouds => "☁",
            OverlayKind::Wind => "🌬",
        }
    }

    /// Id of the tile source this overlay registers
    #[must_use]
    pub fn source_id(self) -> &'static str {
        match self {
            OverlayKind::Temperature => "temp_source",
            OverlayKind::Precipitation => "precipitation_source",
            OverlayKind::Clouds => "clouds_source",
            OverlayKind::Wind => "winds_source",
        }
    }

    /// Id of the raster layer this overlay registers
    #[must_use]
    pub fn layer_id(self) -> &'static str {
        match self {
            OverlayKind::Temperature => "temp_layer",
            OverlayKind::Precipitation => "precipitation_layer",
            OverlayKind::Clouds => "clouds_layer",
            OverlayKind::Wind => "winds_layer",
        }
    }

    /// Tile URL template with the API key filled in and `{z}/{x}/{y}` left open
    #[must_use]
    pub fn tile_template(self, api_key: &str) -> String {
        format!(
            "{}/{}/{{z}}/{{x}}/{{y}}.png?appid={}",
            TILE_BASE_URL,
            self.as_str(),
            api_key
        )
    }

    #[must_use]
    pub fn legend(self) -> &'static Legend {
        match self {
            OverlayKind::Temperature => &legend::TEMPERATURE,
            OverlayKind::Precipitation => &legend::PRECIPITATION,
            OverlayKind::Clouds => &legend::CLOUDS,
            OverlayKind::Wind => &legend::WIND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tile_template() {
        assert_eq!(
            OverlayKind::Precipitation.tile_template("KEY"),
            "https://tile.openweathermap.org/map/precipitation_new/{z}/{x}/{y}.png?appid=KEY"
        );
        assert_eq!(
            OverlayKind::Temperature.tile_template("KEY"),
            "https://tile.openweathermap.org/map/temp_new/{z}/{x}/{y}.png?appid=KEY"
        );
    }

    #[test]
    fn test_ids_are_unique_per_kind() {
        let sources: HashSet<_> = OverlayKind::ALL.iter().map(|k| k.source_id()).collect();
        let layers: HashSet<_> = OverlayKind::ALL.iter().map(|k| k.layer_id()).collect();
        assert_eq!(sources.len(), 4);
        assert_eq!(layers.len(), 4);
    }
}
