//! Pure geometry behind the page effects.
//! Nothing in here touches the DOM; callers feed in measured numbers and write
//! the results back as styles.

use crate::config::ParallaxConfig;

/// `Math.round` semantics: halves go towards positive infinity.
pub fn js_round(v: f64) -> f64 {
    let r = v.round();
    // `f64::round` sends negative halves away from zero
    if v - r == 0.5 { r + 1.0 } else { r }
}

/// Hero height for a pointer at `client_y`, or `None` when the viewport is too
/// short to leave `margin` on both sides.
pub fn divider_height(client_y: f64, viewport_height: f64, margin: f64) -> Option<f64> {
    let min = margin;
    let max = viewport_height - margin;
    if max < min {
        return None;
    }
    Some(client_y.clamp(min, max))
}

/// Scroll progress as a percentage in `0..=100`.
pub fn scroll_progress_percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_top / range * 100.0).clamp(0.0, 100.0)
}

pub fn back_to_top_visible(scroll_top: f64, threshold: f64) -> bool {
    scroll_top > threshold
}

/// A section as seen by the navigation highlighter.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionAnchor {
    pub id: Option<String>,
    pub top: f64,
}

/// Last section (in document order) whose top minus `lookahead` is at or above
/// the scroll position. `None` also when that section carries no id.
pub fn current_section(sections: &[SectionAnchor], scroll_y: f64, lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.top - lookahead)
        .and_then(|s| s.id.as_deref())
}

/// Whether a nav link's href points at the section `current`.
/// Only `#id` fragments count; a bare `#` never lights up, even between sections.
pub fn link_targets(href: &str, current: Option<&str>) -> bool {
    match (href.strip_prefix('#'), current) {
        (Some(target), Some(id)) => !target.is_empty() && target == id,
        _ => false,
    }
}

/// Delay in seconds before the `index`th item of a revealed section animates.
pub fn stagger_delay_secs(index: usize, step_ms: u32) -> f64 {
    index as f64 * step_ms as f64 / 1000.0
}

/// Hero parallax values for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroParallax {
    pub max_shift: f64,
    pub hero_shift: f64,
    pub left_shift: f64,
    pub right_shift: f64,
    pub fade_opacity: f64,
    pub fade_blur_px: f64,
}

impl HeroParallax {
    pub fn compute(scroll_y: f64, hero_height: f64, cfg: &ParallaxConfig) -> Self {
        let max_shift = (hero_height * cfg.hero_travel_ratio)
            .min(cfg.max_hero_shift)
            .max(cfg.min_hero_shift);
        let hero_shift = (scroll_y * cfg.hero_factor).min(max_shift);
        let fade_opacity = if max_shift > 0.0 {
            (hero_shift / max_shift).min(1.0) * cfg.fade_max_opacity
        } else {
            0.0
        };
        Self {
            max_shift,
            hero_shift,
            left_shift: (hero_shift * cfg.left_factor).min(max_shift * cfg.left_factor),
            right_shift: (hero_shift * cfg.right_factor).min(max_shift * cfg.right_factor),
            fade_opacity,
            fade_blur_px: (hero_shift * cfg.blur_factor).min(cfg.max_blur_px),
        }
    }
}

/// Pixel offset of the `index`th cloud. Odd clouds drift upwards.
pub fn cloud_offset(index: usize, scroll_y: f64, cfg: &ParallaxConfig) -> (f64, f64) {
    let speed = match cfg.cloud_speeds.len() {
        0 => cfg.fallback_cloud_speed,
        n => cfg.cloud_speeds[index % n],
    };
    let speed = if speed == 0.0 { cfg.fallback_cloud_speed } else { speed };
    let direction = if index % 2 == 0 { 1.0 } else { -1.0 };
    (
        js_round(scroll_y * speed),
        js_round(scroll_y * cfg.cloud_drift * direction),
    )
}

/// How far a section has travelled through the viewport: 0 when its top sits
/// at the bottom edge, 1 once its bottom has left through the top edge.
pub fn section_progress(viewport_height: f64, rect_top: f64, rect_height: f64) -> f64 {
    let span = viewport_height + rect_height;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / span).clamp(0.0, 1.0)
}

/// Upward shift in px (zero or negative) for a non-hero section.
pub fn section_shift(viewport_height: f64, rect_top: f64, rect_height: f64, max_shift: f64) -> f64 {
    let shift = -js_round(section_progress(viewport_height, rect_top, rect_height) * max_shift);
    // keep -0 out of the style string
    if shift == 0.0 { 0.0 } else { shift }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn js_round_rounds_halves_up() {
        assert_eq!(js_round(2.5), 3.0);
        assert_eq!(js_round(-2.5), -2.0);
        assert_eq!(js_round(-2.6), -3.0);
        assert_eq!(js_round(0.49), 0.0);
        assert_eq!(js_round(0.49999999999999994), 0.0);
        assert_eq!(js_round(-0.5), 0.0);
        assert_eq!(js_round(4503599627370497.0), 4503599627370497.0);
    }

    #[test]
    fn divider_height_stays_inside_margins() {
        let vh = 900.0;
        for y in [-50.0, 0.0, 99.0, 100.0, 450.0, 800.0, 801.0, 5000.0] {
            let h = divider_height(y, vh, 100.0).unwrap();
            assert!((100.0..=800.0).contains(&h), "y={y} gave {h}");
        }
        assert_eq!(divider_height(450.0, vh, 100.0), Some(450.0));
        assert_eq!(divider_height(20.0, vh, 100.0), Some(100.0));
        assert_eq!(divider_height(880.0, vh, 100.0), Some(800.0));
    }

    #[test]
    fn divider_height_needs_room() {
        assert_eq!(divider_height(90.0, 150.0, 100.0), None);
        assert_eq!(divider_height(90.0, 200.0, 100.0), Some(100.0));
    }

    #[test]
    fn progress_spans_zero_to_hundred() {
        assert_eq!(scroll_progress_percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress_percent(2000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress_percent(500.0, 3000.0, 1000.0), 25.0);
        // overscroll bounce
        assert_eq!(scroll_progress_percent(2100.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress_percent(-20.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn progress_is_monotonic() {
        let mut last = -1.0;
        let mut top = 0.0;
        while top <= 2000.0 {
            let p = scroll_progress_percent(top, 3000.0, 1000.0);
            assert!(p >= last);
            last = p;
            top += 37.0;
        }
    }

    #[test]
    fn progress_without_scroll_range_is_zero() {
        assert_eq!(scroll_progress_percent(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress_percent(0.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn back_to_top_threshold_is_strict() {
        assert!(back_to_top_visible(301.0, 300.0));
        assert!(!back_to_top_visible(300.0, 300.0));
        assert!(!back_to_top_visible(299.0, 300.0));
    }

    fn sections() -> Vec<SectionAnchor> {
        vec![
            SectionAnchor { id: Some("hero".into()), top: 0.0 },
            SectionAnchor { id: Some("about".into()), top: 800.0 },
            SectionAnchor { id: None, top: 1400.0 },
            SectionAnchor { id: Some("projects".into()), top: 2000.0 },
        ]
    }

    #[test]
    fn current_section_uses_lookahead() {
        let s = sections();
        assert_eq!(current_section(&s, 0.0, 200.0), Some("hero"));
        assert_eq!(current_section(&s, 599.0, 200.0), Some("hero"));
        assert_eq!(current_section(&s, 600.0, 200.0), Some("about"));
        assert_eq!(current_section(&s, 1800.0, 200.0), Some("projects"));
    }

    #[test]
    fn unnamed_section_clears_current() {
        assert_eq!(current_section(&sections(), 1300.0, 200.0), None);
    }

    #[test]
    fn current_section_is_last_match_not_first() {
        // out of document order: the later entry still wins
        let s = vec![
            SectionAnchor { id: Some("b".into()), top: 500.0 },
            SectionAnchor { id: Some("a".into()), top: 0.0 },
        ];
        assert_eq!(current_section(&s, 1000.0, 200.0), Some("a"));
        assert_eq!(current_section(&[], 1000.0, 200.0), None);
    }

    #[test]
    fn link_matching() {
        assert!(link_targets("#about", Some("about")));
        assert!(!link_targets("#about", Some("projects")));
        assert!(!link_targets("#about", None));
        assert!(!link_targets("/about", Some("about")));
        // a bare "#" is a link to nothing, not to "no section"
        assert!(!link_targets("#", None));
        assert!(!link_targets("#", Some("")));
    }

    #[test]
    fn stagger_steps_by_tenth_of_a_second() {
        assert_eq!(stagger_delay_secs(0, 100), 0.0);
        assert!(close(stagger_delay_secs(3, 100), 0.3));
    }

    #[test]
    fn hero_parallax_at_top_is_neutral() {
        let p = HeroParallax::compute(0.0, 800.0, &ParallaxConfig::default());
        assert_eq!(p.hero_shift, 0.0);
        assert_eq!(p.left_shift, 0.0);
        assert_eq!(p.right_shift, 0.0);
        assert_eq!(p.fade_opacity, 0.0);
        assert_eq!(p.fade_blur_px, 0.0);
    }

    #[test]
    fn hero_parallax_tracks_scroll() {
        let p = HeroParallax::compute(100.0, 800.0, &ParallaxConfig::default());
        assert!(close(p.max_shift, 300.0));
        assert!(close(p.hero_shift, 18.0));
        assert!(close(p.left_shift, 8.1));
        assert!(close(p.right_shift, 4.5));
        assert!(close(p.fade_opacity, 0.054));
        assert!(close(p.fade_blur_px, 0.72));
    }

    #[test]
    fn hero_parallax_saturates() {
        let p = HeroParallax::compute(10_000.0, 800.0, &ParallaxConfig::default());
        assert!(close(p.hero_shift, 300.0));
        assert!(close(p.left_shift, 135.0));
        assert!(close(p.right_shift, 75.0));
        assert!(close(p.fade_opacity, 0.9));
        assert!(close(p.fade_blur_px, 8.0));
    }

    #[test]
    fn hero_travel_is_clamped_both_ways() {
        let cfg = ParallaxConfig::default();
        assert!(close(HeroParallax::compute(0.0, 100.0, &cfg).max_shift, 120.0));
        assert!(close(HeroParallax::compute(0.0, 300.0, &cfg).max_shift, 180.0));
        assert!(close(HeroParallax::compute(0.0, 2000.0, &cfg).max_shift, 300.0));
    }

    #[test]
    fn clouds_alternate_direction() {
        let cfg = ParallaxConfig::default();
        assert_eq!(cloud_offset(0, 100.0, &cfg), (12.0, 2.0));
        assert_eq!(cloud_offset(1, 100.0, &cfg), (-8.0, -2.0));
        assert_eq!(cloud_offset(2, 100.0, &cfg), (10.0, 2.0));
        assert_eq!(cloud_offset(3, 100.0, &cfg), (-6.0, -2.0));
        // speeds repeat every four clouds
        assert_eq!(cloud_offset(5, 100.0, &cfg), cloud_offset(1, 100.0, &cfg));
    }

    #[test]
    fn clouds_fall_back_without_speeds() {
        let cfg = ParallaxConfig {
            cloud_speeds: Vec::new(),
            ..ParallaxConfig::default()
        };
        assert_eq!(cloud_offset(2, 100.0, &cfg).0, 8.0);
    }

    #[test]
    fn zero_speed_cloud_still_drifts() {
        let cfg = ParallaxConfig {
            cloud_speeds: vec![0.0, 0.2],
            ..ParallaxConfig::default()
        };
        assert_eq!(cloud_offset(0, 100.0, &cfg).0, 8.0);
        assert_eq!(cloud_offset(1, 100.0, &cfg).0, 20.0);
    }

    #[test]
    fn section_shift_is_bounded() {
        let vh = 800.0;
        assert_eq!(section_shift(vh, 800.0, 400.0, 30.0), 0.0);
        assert_eq!(section_shift(vh, 2000.0, 400.0, 30.0), 0.0);
        assert_eq!(section_shift(vh, 200.0, 400.0, 30.0), -15.0);
        assert_eq!(section_shift(vh, -400.0, 400.0, 30.0), -30.0);
        assert_eq!(section_shift(vh, -5000.0, 400.0, 30.0), -30.0);
        let mut top = 1200.0;
        while top > -1200.0 {
            let s = section_shift(vh, top, 400.0, 30.0);
            assert!((-30.0..=0.0).contains(&s));
            top -= 13.0;
        }
    }

    #[test]
    fn section_progress_degenerate_span() {
        assert_eq!(section_progress(0.0, 0.0, 0.0), 0.0);
    }
}
