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

//! Base style catalogue and the style switcher.

use log::debug;

use crate::engine::StyleRef;

/// Base map styles offered to the user, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BaseStyle {
    #[default]
    Dark,
    Satellite,
    Light,
    Streets,
    Outdoors,
}

impl BaseStyle {
    pub const ALL: [BaseStyle; 5] = [
        BaseStyle::Dark,
        BaseStyle::Satellite,
        BaseStyle::Light,
        BaseStyle::Streets,
        BaseStyle::Outdoors,
    ];

    /// Vendor style id
    #[must_use]
    pub fn style_id(self) -> &'static str {
        match self {
            BaseStyle::Dark => "dark-v11",
            BaseStyle::Satellite => "satellite-streets-v12",
            BaseStyle::Light => "light-v10",
            BaseStyle::Streets => "streets-v12",
            BaseStyle::Outdoors => "outdoors-v12",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BaseStyle::Dark => "Dark",
            BaseStyle::Satellite => "Satellite",
            BaseStyle::Light => "Light",
            BaseStyle::Streets => "Streets",
            BaseStyle::Outdoors => "Outdoors",
        }
    }

    #[must_use]
    pub fn style_ref(self) -> StyleRef {
        StyleRef::vendor(self.style_id())
    }

    /// Look up a style by its vendor id (e.g. "outdoors-v12")
    #[must_use]
    pub fn from_style_id(style_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.style_id() == style_id)
    }

    /// Match a full reference against the catalogue
    #[must_use]
    pub fn from_style_ref(style: &StyleRef) -> Option<Self> {
        if style.owner() != StyleRef::VENDOR {
            return None;
        }
        Self::from_style_id(style.style_id())
    }
}

/// Single-choice base style selector.
///
/// The switcher only tracks which option is checked. Applying the style to a
/// map and clearing overlays is the job of whoever receives the callback.
///
/// When the map shows a style outside the catalogue no option is checked,
/// so every option stays selectable.
#[derive(Debug, Clone)]
pub struct StyleSwitcher {
    selected: Option<BaseStyle>,
}

impl Default for StyleSwitcher {
    fn default() -> Self {
        Self::new(BaseStyle::default())
    }
}

impl StyleSwitcher {
    #[must_use]
    pub fn new(initial: BaseStyle) -> Self {
        Self {
            selected: Some(initial),
        }
    }

    /// Switcher matching whatever style the map starts with
    #[must_use]
    pub fn for_style(style: &StyleRef) -> Self {
        Self {
            selected: BaseStyle::from_style_ref(style),
        }
    }

    /// Checked option, `None` for a style outside the catalogue
    #[must_use]
    pub fn selected(&self) -> Option<BaseStyle> {
        self.selected
    }

    /// Whether the switcher shows anything at all
    #[must_use]
    pub fn is_visible(ready: bool) -> bool {
        ready
    }

    /// Check `style`. When the checked option changes, the full style reference
    /// is handed to `on_change`. Returns whether the callback ran.
    pub fn choose<F>(&mut self, style: BaseStyle, ready: bool, on_change: F) -> bool
    where
        F: FnOnce(StyleRef),
    {
        if !Self::is_visible(ready) {
            debug!("Map not ready, ignoring style selection {}", style.label());
            return false;
        }
        if self.selected == Some(style) {
            return false;
        }

        self.selected = Some(style);
        on_change(style.style_ref());
        true
    }

    /// Sync the checked option with a style applied from elsewhere.
    pub fn sync(&mut self, style: &StyleRef) {
        self.selected = BaseStyle::from_style_ref(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_references() {
        assert_eq!(
            BaseStyle::Satellite.style_ref().to_string(),
            "mapbox://styles/mapbox/satellite-streets-v12"
        );
        assert_eq!(
            BaseStyle::Light.style_ref().to_string(),
            "mapbox://styles/mapbox/light-v10"
        );
    }

    #[test]
    fn test_menu_order() {
        let labels: Vec<_> = BaseStyle::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Dark", "Satellite", "Light", "Streets", "Outdoors"]);
        assert_eq!(StyleSwitcher::default().selected(), Some(BaseStyle::Dark));
    }

    #[test]
    fn test_lookup_by_id_and_ref() {
        assert_eq!(BaseStyle::from_style_id("outdoors-v12"), Some(BaseStyle::Outdoors));
        assert_eq!(BaseStyle::from_style_id("navigation-day-v1"), None);
        assert_eq!(
            BaseStyle::from_style_ref(&StyleRef::new("someone", "dark-v11")),
            None
        );
    }

    #[test]
    fn test_choose_invokes_callback_with_reference() {
        let mut switcher = StyleSwitcher::default();
        let mut received = None;

        assert!(switcher.choose(BaseStyle::Streets, true, |style| received = Some(style)));
        assert_eq!(switcher.selected(), Some(BaseStyle::Streets));
        assert_eq!(
            received.map(|s| s.to_string()).as_deref(),
            Some("mapbox://styles/mapbox/streets-v12")
        );
    }

    #[test]
    fn test_choose_same_option_does_nothing() {
        let mut switcher = StyleSwitcher::new(BaseStyle::Light);
        let fired = switcher.choose(BaseStyle::Light, true, |_| panic!("should not fire"));
        assert!(!fired);
    }

    #[test]
    fn test_choose_before_ready_is_ignored() {
        let mut switcher = StyleSwitcher::default();
        let fired = switcher.choose(BaseStyle::Satellite, false, |_| panic!("should not fire"));
        assert!(!fired);
        assert_eq!(switcher.selected(), Some(BaseStyle::Dark));
    }

    #[test]
    fn test_sync_unknown_style_unchecks_everything() {
        let mut switcher = StyleSwitcher::default();
        switcher.sync(&BaseStyle::Outdoors.style_ref());
        assert_eq!(switcher.selected(), Some(BaseStyle::Outdoors));

        switcher.sync(&StyleRef::new("someone", "custom"));
        assert_eq!(switcher.selected(), None);
    }

    #[test]
    fn test_every_option_selectable_from_custom_style() {
        let mut switcher = StyleSwitcher::for_style(&StyleRef::new("someone", "custom"));
        assert_eq!(switcher.selected(), None);

        let mut received = None;
        assert!(switcher.choose(BaseStyle::Dark, true, |style| received = Some(style)));
        assert_eq!(received, Some(BaseStyle::Dark.style_ref()));
        assert_eq!(switcher.selected(), Some(BaseStyle::Dark));
    }
}
