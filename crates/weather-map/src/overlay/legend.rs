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

//! Static legends for the weather overlays.
//!
//! Colors approximate the OpenWeatherMap palettes. Tick labels are spread
//! evenly under the gradient bar, they are not positioned by value.

/// One color stop of a horizontal gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the bar (0.0 - 1.0)
    pub offset: f32,
    /// Unmultiplied RGBA
    pub rgba: [u8; 4],
}

const fn stop(offset: f32, r: u8, g: u8, b: u8, a: u8) -> GradientStop {
    GradientStop {
        offset,
        rgba: [r, g, b, a],
    }
}

/// Gradient scale shown while an overlay is active
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Legend {
    /// Physical quantity and unit, e.g. "Clouds, %"
    pub title: &'static str,
    pub ticks: &'static [&'static str],
    /// Stops ordered by offset, first at 0.0 and last at 1.0
    pub stops: &'static [GradientStop],
    /// Draw an outline around the bar (for mostly transparent palettes)
    pub outlined: bool,
}

pub(super) static TEMPERATURE: Legend = Legend {
    title: "Temperature, °C",
    ticks: &["-40", "-20", "0", "20", "40"],
    stops: &[
        stop(0.0, 159, 85, 181, 255),
        stop(0.0875, 44, 106, 187, 255),
        stop(0.125, 82, 139, 213, 255),
        stop(0.1875, 103, 163, 222, 255),
        stop(0.25, 142, 202, 240, 255),
        stop(0.3125, 155, 213, 244, 255),
        stop(0.375, 172, 225, 253, 255),
        stop(0.4375, 194, 234, 255, 255),
        stop(0.5, 255, 255, 208, 255),
        stop(0.5625, 254, 248, 174, 255),
        stop(0.625, 254, 232, 146, 255),
        stop(0.6875, 254, 226, 112, 255),
        stop(0.75, 253, 212, 97, 255),
        stop(0.825, 244, 168, 94, 255),
        stop(0.875, 244, 129, 89, 255),
        stop(0.9375, 244, 104, 89, 255),
        stop(1.0, 244, 76, 73, 255),
    ],
    outlined: false,
};

pub(super) static PRECIPITATION: Legend = Legend {
    title: "Precipitation, mm/h",
    ticks: &["0", "1", "4", "6", "10", "14", "16", "24", "32", "60"],
    stops: &[
        stop(0.0, 253, 253, 255, 255),
        stop(0.1, 243, 241, 251, 255),
        stop(0.2, 225, 227, 248, 255),
        stop(0.3, 208, 212, 240, 255),
        stop(0.45, 176, 181, 230, 255),
        stop(0.6, 158, 158, 224, 255),
        stop(0.7, 140, 137, 216, 255),
        stop(0.8, 122, 118, 208, 255),
        stop(0.9, 106, 101, 200, 255),
        stop(1.0, 92, 87, 191, 255),
    ],
    outlined: false,
};

pub(super) static CLOUDS: Legend = Legend {
    title: "Clouds, %",
    ticks: &["0", "25", "50", "75", "100"],
    stops: &[
        stop(0.0, 247, 247, 255, 0),
        stop(0.1, 251, 247, 255, 0),
        stop(0.2, 244, 248, 255, 26),
        stop(0.3, 240, 249, 255, 51),
        stop(0.4, 221, 250, 255, 102),
        stop(0.5, 224, 224, 224, 230),
        stop(0.6, 224, 224, 224, 194),
        stop(0.7, 228, 228, 228, 230),
        stop(0.8, 232, 232, 232, 230),
        stop(0.9, 214, 213, 213, 255),
        stop(0.95, 210, 210, 210, 255),
        stop(1.0, 183, 183, 183, 255),
    ],
    outlined: true,
};

pub(super) static WIND: Legend = Legend {
    title: "Wind Speed, m/s",
    ticks: &["0", "2", "3", "6", "12", "25", "50", "100"],
    stops: &[
        stop(0.0, 255, 255, 255, 255),
        stop(0.1, 170, 128, 177, 112),
        stop(0.2, 170, 128, 177, 138),
        stop(0.3, 176, 128, 177, 181),
        stop(0.5, 170, 128, 177, 214),
        stop(0.7, 164, 123, 170, 255),
        stop(0.9, 146, 108, 199, 230),
        stop(1.0, 136, 98, 188, 230),
    ],
    outlined: false,
};

#[cfg(test)]
mod tests {
    use crate::overlay::OverlayKind;

    #[test]
    fn test_stops_span_the_bar_in_order() {
        for kind in OverlayKind::ALL {
            let stops = kind.legend().stops;
            assert!(stops.len() >= 2, "{kind:?}");
            assert!(stops.first().unwrap().offset.abs() < f32::EPSILON);
            assert!((stops.last().unwrap().offset - 1.0).abs() < f32::EPSILON);
            assert!(
                stops.windows(2).all(|w| w[0].offset < w[1].offset),
                "{kind:?} stops out of order"
            );
        }
    }

    #[test]
    fn test_tick_labels() {
        assert_eq!(
            OverlayKind::Temperature.legend().ticks,
            &["-40", "-20", "0", "20", "40"]
        );
        assert_eq!(OverlayKind::Precipitation.legend().ticks.len(), 10);
        assert_eq!(OverlayKind::Wind.legend().title, "Wind Speed, m/s");
    }
}
