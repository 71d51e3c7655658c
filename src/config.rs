//! Tunables for every page behavior.
//!
//! Defaults reproduce the stock look of the portfolio. A page may override any
//! subset of them with a JSON block:
//!
//! ```html
//! <script type="application/json" id="portfolio-config">
//!   { "scroll": { "back_to_top_after": 500 } }
//! </script>
//! ```

use serde::Deserialize;

use crate::util::clog;

/// Id of the optional JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub welcome: WelcomeConfig,
    pub divider: DividerConfig,
    pub reveal: RevealConfig,
    pub scroll: ScrollConfig,
    pub lightbox: LightboxConfig,
    pub parallax: ParallaxConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WelcomeConfig {
    /// sessionStorage key of the "already greeted" flag.
    pub session_key: String,
    pub title: String,
    pub message: String,
    pub dismiss_label: String,
}

impl Default for WelcomeConfig {
    fn default() -> Self {
        Self {
            session_key: "welcomeShown".to_string(),
            title: "Welcome!".to_string(),
            message: "Thanks for stopping by. Drag the divider, scroll around and click a project to take a closer look.".to_string(),
            dismiss_label: "Let's go".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DividerConfig {
    /// Closest the divider may get to the top or bottom of the viewport.
    pub edge_margin: f64,
}

impl Default for DividerConfig {
    fn default() -> Self {
        Self { edge_margin: 100.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub section_offset_px: f64,
    pub item_offset_px: f64,
    pub transition: String,
    /// Delay between consecutive list items of one section.
    pub stagger_ms: u32,
    /// Wait before items start animating after their styles are reset.
    pub item_kickoff_ms: u32,
    pub item_selector: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px".to_string(),
            section_offset_px: 30.0,
            item_offset_px: 20.0,
            transition: "all 0.6s ease-out".to_string(),
            stagger_ms: 100,
            item_kickoff_ms: 50,
            item_selector: "li, .project".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Back-to-top appears once scrollTop is strictly above this.
    pub back_to_top_after: f64,
    /// How far ahead of a section's top it already counts as current.
    pub nav_lookahead: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            back_to_top_after: 300.0,
            nav_lookahead: 200.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    pub image_selector: String,
    pub zoom_delay_ms: u32,
    pub clear_delay_ms: u32,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            image_selector: ".project-img".to_string(),
            zoom_delay_ms: 10,
            clear_delay_ms: 200,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub hero_factor: f64,
    pub left_factor: f64,
    pub right_factor: f64,
    /// Share of the hero height the hero may travel, before clamping.
    pub hero_travel_ratio: f64,
    pub min_hero_shift: f64,
    pub max_hero_shift: f64,
    pub fade_max_opacity: f64,
    pub blur_factor: f64,
    pub max_blur_px: f64,
    pub cloud_speeds: Vec<f64>,
    /// Used when `cloud_speeds` is empty or a cloud's speed is zero.
    pub fallback_cloud_speed: f64,
    pub cloud_drift: f64,
    pub section_max_shift: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            hero_factor: 0.18,
            left_factor: 0.45,
            right_factor: 0.25,
            hero_travel_ratio: 0.6,
            min_hero_shift: 120.0,
            max_hero_shift: 300.0,
            fade_max_opacity: 0.9,
            blur_factor: 0.04,
            max_blur_px: 8.0,
            cloud_speeds: vec![0.12, -0.08, 0.10, -0.06],
            fallback_cloud_speed: 0.08,
            cloud_drift: 0.02,
            section_max_shift: 30.0,
        }
    }
}

impl PortfolioConfig {
    /// Parses a (possibly partial) override document on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads overrides from the page, falling back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(cfg) => cfg,
                Err(e) => {
                    clog(&format!("config: ignoring #{}: {}", CONFIG_ELEMENT_ID, e));
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_behavior() {
        let cfg = PortfolioConfig::default();
        assert_eq!(cfg.welcome.session_key, "welcomeShown");
        assert_eq!(cfg.divider.edge_margin, 100.0);
        assert_eq!(cfg.reveal.threshold, 0.1);
        assert_eq!(cfg.reveal.root_margin, "0px 0px -100px 0px");
        assert_eq!(cfg.reveal.stagger_ms, 100);
        assert_eq!(cfg.scroll.back_to_top_after, 300.0);
        assert_eq!(cfg.scroll.nav_lookahead, 200.0);
        assert_eq!(cfg.lightbox.zoom_delay_ms, 10);
        assert_eq!(cfg.lightbox.clear_delay_ms, 200);
        assert_eq!(cfg.parallax.cloud_speeds, vec![0.12, -0.08, 0.10, -0.06]);
        assert_eq!(cfg.parallax.section_max_shift, 30.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = PortfolioConfig::from_json(
            r#"{ "scroll": { "back_to_top_after": 500 }, "parallax": { "cloud_speeds": [0.3] } }"#,
        )
        .unwrap();
        assert_eq!(cfg.scroll.back_to_top_after, 500.0);
        assert_eq!(cfg.scroll.nav_lookahead, 200.0);
        assert_eq!(cfg.parallax.cloud_speeds, vec![0.3]);
        assert_eq!(cfg.parallax.hero_factor, 0.18);
        assert_eq!(cfg.welcome, WelcomeConfig::default());
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(
            PortfolioConfig::from_json("{}").unwrap(),
            PortfolioConfig::default()
        );
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(PortfolioConfig::from_json("{ scroll: 1 }").is_err());
        assert!(PortfolioConfig::from_json(r#"{ "divider": { "edge_margin": "wide" } }"#).is_err());
    }
}
