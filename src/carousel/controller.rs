//! Carousel Controller
//! Auto-advancing feature carousel: slide state, indicator sync, hover-driven
//! slide changes, hover-pause autoplay and the slide-0 chart redraw.

use crate::carousel::{FeatureRegion, SlideSet};
use crate::charts::{ChartRenderer, ChartStyle, ChartSurface, Series};
use crate::config::{CarouselConfig, SlideConfig, TimingConfig};
use crate::timing::{TimerHandle, TimerQueue};
use std::time::Duration;

/// Slide that carries the chart.
pub const CHART_SLIDE: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CarouselTask {
    Start,
    Autoplay,
    Redraw,
}

pub struct CarouselController {
    slides: SlideSet,
    content: Vec<SlideConfig>,
    features: Vec<FeatureRegion>,
    series: Option<Series>,
    style: ChartStyle,
    surface: Option<ChartSurface>,
    timers: TimerQueue<CarouselTask>,
    /// The one live autoplay interval, if any
    autoplay: Option<TimerHandle>,
    autoplay_period: Duration,
    redraw_delay: Duration,
    initial_delay: Duration,
    started: bool,
    /// Set once the start task has fired
    rendered: bool,
    /// Pending redraw scheduled by a surface resize
    resize_redraw: Option<TimerHandle>,
}

impl CarouselController {
    /// Returns `None` when there are no slides to manage.
    pub fn new(config: &CarouselConfig, timing: &TimingConfig) -> Option<Self> {
        let Some(slides) = SlideSet::new(config.slides.len()) else {
            tracing::debug!("Carousel has no slides, not wiring it");
            return None;
        };

        let features = config
            .features
            .iter()
            .map(|f| FeatureRegion::new(&f.title, &f.description, &f.feature))
            .collect();

        Some(Self {
            slides,
            content: config.slides.clone(),
            features,
            surface: config.chart.as_ref().map(|_| ChartSurface::default()),
            series: config.chart.clone(),
            style: ChartStyle::carousel(),
            timers: TimerQueue::new(),
            autoplay: None,
            autoplay_period: timing.autoplay(),
            redraw_delay: timing.redraw_delay(),
            initial_delay: timing.initial_delay(),
            started: false,
            rendered: false,
            resize_redraw: None,
        })
    }

    /// Page-load wiring: first chart render and autoplay after the initial
    /// delay. Only the first call has an effect.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.timers.set_timeout(self.initial_delay, CarouselTask::Start);
    }

    /// Activate slide `index` and restart the autoplay interval.
    pub fn go_to_slide(&mut self, index: usize) {
        if !self.slides.go_to(index) {
            tracing::warn!(index, len = self.slides.count(), "Ignoring out-of-range slide");
            return;
        }
        tracing::debug!(slide = index, "Carousel slide activated");

        if index == CHART_SLIDE {
            self.timers.set_timeout(self.redraw_delay, CarouselTask::Redraw);
        }
        self.reset_autoplay();
    }

    /// Indicator click. Unlike hover, clicking the active indicator still
    /// restarts the autoplay interval.
    pub fn click_indicator(&mut self, index: usize) {
        self.go_to_slide(index);
    }

    /// Pointer entered the feature description mapped to `slide`. No-op
    /// (autoplay untouched) when that slide is already showing.
    pub fn hover_feature(&mut self, slide: usize) {
        if slide == self.slides.current() {
            return;
        }
        self.go_to_slide(slide);
    }

    /// Pointer entered the carousel: pause autoplay.
    pub fn pointer_entered(&mut self) {
        self.stop_autoplay();
    }

    /// Pointer left the carousel: autoplay resumes with a full interval.
    pub fn pointer_left(&mut self) {
        self.start_autoplay();
    }

    /// The GUI gave the chart surface a new size, which wiped it. Redraws
    /// after the usual delay while the chart slide is showing; autoplay is
    /// left alone.
    pub fn surface_resized(&mut self) {
        if !self.rendered || self.slides.current() != CHART_SLIDE {
            return;
        }
        if let Some(handle) = self.resize_redraw.take() {
            self.timers.clear(handle);
        }
        self.resize_redraw = Some(
            self.timers
                .set_timeout(self.redraw_delay, CarouselTask::Redraw),
        );
    }

    pub fn poll(&mut self, now: Duration) {
        while let Some((handle, task)) = self.timers.pop_due(now) {
            match task {
                CarouselTask::Start => {
                    self.rendered = true;
                    self.render_chart();
                    self.start_autoplay();
                }
                CarouselTask::Autoplay => {
                    let next = self.slides.next_index();
                    tracing::debug!(at = ?self.timers.now(), slide = next, "Autoplay advance");
                    self.go_to_slide(next);
                }
                CarouselTask::Redraw => {
                    if self.resize_redraw == Some(handle) {
                        self.resize_redraw = None;
                    }
                    self.render_chart();
                }
            }
        }
        self.timers.advance_to(now);
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    pub fn current_slide(&self) -> usize {
        self.slides.current()
    }

    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    pub fn slide_content(&self) -> &[SlideConfig] {
        &self.content
    }

    pub fn features(&self) -> &[FeatureRegion] {
        &self.features
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some_and(|h| self.timers.is_pending(h))
    }

    pub fn surface(&self) -> Option<&ChartSurface> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut ChartSurface> {
        self.surface.as_mut()
    }

    fn render_chart(&mut self) {
        let Some(series) = &self.series else {
            return;
        };
        ChartRenderer::refresh(self.surface.as_mut(), series, &self.style, "carousel");
    }

    fn stop_autoplay(&mut self) {
        if let Some(handle) = self.autoplay.take() {
            self.timers.clear(handle);
        }
    }

    /// Always clears before creating, so at most one interval is live.
    fn start_autoplay(&mut self) {
        self.stop_autoplay();
        self.autoplay = Some(
            self.timers
                .set_interval(self.autoplay_period, CarouselTask::Autoplay),
        );
        tracing::debug!(intervals = self.timers.interval_count(), "Autoplay armed");
    }

    fn reset_autoplay(&mut self) {
        self.start_autoplay();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn carousel() -> CarouselController {
        let mut carousel =
            CarouselController::new(&CarouselConfig::default(), &TimingConfig::default()).unwrap();
        carousel.surface_mut().unwrap().resize(300, 180);
        carousel
    }

    fn started() -> CarouselController {
        let mut carousel = carousel();
        carousel.start();
        carousel.poll(ms(500));
        carousel
    }

    fn autoplay_timers(carousel: &CarouselController) -> usize {
        carousel.timers.interval_count()
    }

    #[test]
    fn test_empty_carousel_is_not_wired() {
        let mut config = CarouselConfig::default();
        config.slides.clear();
        assert!(CarouselController::new(&config, &TimingConfig::default()).is_none());
    }

    #[test]
    fn test_start_renders_chart_and_begins_autoplay() {
        let mut carousel = carousel();
        carousel.start();
        carousel.poll(ms(499));
        assert!(!carousel.is_autoplaying());
        assert!(carousel.surface().unwrap().is_blank());

        carousel.poll(ms(500));
        assert!(carousel.is_autoplaying());
        assert!(!carousel.surface().unwrap().is_blank());
    }

    #[test]
    fn test_every_index_leaves_one_active_slide() {
        let mut carousel = started();
        for i in 0..carousel.slides().count() {
            carousel.go_to_slide(i);
            let projection = carousel.slides().projection();
            assert_eq!(projection.iter().filter(|&&on| on).count(), 1);
            assert!(projection[i]);
            assert_eq!(carousel.current_slide(), i);
        }
    }

    #[test]
    fn test_exactly_one_autoplay_timer_after_transitions() {
        let mut carousel = started();
        carousel.go_to_slide(2);
        assert_eq!(autoplay_timers(&carousel), 1);
        carousel.click_indicator(2);
        assert_eq!(autoplay_timers(&carousel), 1);
        carousel.hover_feature(3);
        assert_eq!(autoplay_timers(&carousel), 1);
        carousel.pointer_left();
        carousel.pointer_left();
        assert_eq!(autoplay_timers(&carousel), 1);
        carousel.poll(ms(20_000));
        assert_eq!(autoplay_timers(&carousel), 1);
    }

    #[test]
    fn test_transition_before_start_keeps_single_timer() {
        let mut carousel = carousel();
        carousel.start();
        carousel.click_indicator(1);
        carousel.poll(ms(500));
        assert_eq!(autoplay_timers(&carousel), 1);
    }

    #[test]
    fn test_autoplay_visits_slides_in_order_and_wraps() {
        let mut carousel = started();
        assert_eq!(carousel.slides().count(), 4);

        let mut visited = Vec::new();
        for k in 1..=4 {
            carousel.poll(ms(500 + 4000 * k));
            visited.push(carousel.current_slide());
        }
        assert_eq!(visited, vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_hover_on_current_slide_is_noop() {
        let mut carousel = started();
        carousel.go_to_slide(2);
        let before = carousel.autoplay;

        carousel.poll(ms(1000));
        carousel.hover_feature(2);

        assert_eq!(carousel.current_slide(), 2);
        assert_eq!(carousel.autoplay, before);
        // Interval still anchored to the original transition at 500ms
        assert_eq!(carousel.next_deadline(), Some(ms(4500)));
    }

    #[test]
    fn test_hover_on_other_slide_transitions_and_resets() {
        let mut carousel = started();
        carousel.poll(ms(1000));
        let before = carousel.autoplay;

        carousel.hover_feature(3);

        assert_eq!(carousel.current_slide(), 3);
        assert_ne!(carousel.autoplay, before);
        assert_eq!(carousel.next_deadline(), Some(ms(5000)));
    }

    #[test]
    fn test_indicator_on_current_slide_still_resets_autoplay() {
        let mut carousel = started();
        carousel.poll(ms(3000));
        let before = carousel.autoplay;

        carousel.click_indicator(0);

        assert_eq!(carousel.current_slide(), 0);
        assert_ne!(carousel.autoplay, before);
        // Chart redraw at 3100, next autoplay tick at 7000
        assert_eq!(carousel.next_deadline(), Some(ms(3100)));
        carousel.poll(ms(3100));
        assert_eq!(carousel.next_deadline(), Some(ms(7000)));
    }

    #[test]
    fn test_hover_pauses_and_leave_restarts_full_interval() {
        let mut carousel = started();
        carousel.poll(ms(3000));

        carousel.pointer_entered();
        assert!(!carousel.is_autoplaying());
        carousel.poll(ms(20_000));
        assert_eq!(carousel.current_slide(), 0);

        carousel.pointer_left();
        assert!(carousel.is_autoplaying());
        carousel.poll(ms(23_999));
        assert_eq!(carousel.current_slide(), 0);
        carousel.poll(ms(24_000));
        assert_eq!(carousel.current_slide(), 1);
    }

    #[test]
    fn test_returning_to_chart_slide_redraws_after_delay() {
        let mut carousel = started();
        carousel.go_to_slide(1);
        carousel.surface_mut().unwrap().resize(0, 0);
        carousel.poll(ms(1000));

        carousel.go_to_slide(CHART_SLIDE);
        carousel.surface_mut().unwrap().resize(300, 180);
        assert!(carousel.surface().unwrap().is_blank());

        carousel.poll(ms(1100));
        assert!(!carousel.surface().unwrap().is_blank());
    }

    #[test]
    fn test_resize_on_chart_slide_redraws_without_touching_autoplay() {
        let mut carousel = started();
        let autoplay = carousel.autoplay;

        assert!(carousel.surface_mut().unwrap().resize(320, 180));
        carousel.surface_resized();
        assert!(carousel.surface().unwrap().is_blank());

        carousel.poll(ms(600));
        assert!(!carousel.surface().unwrap().is_blank());
        assert_eq!(carousel.autoplay, autoplay);
        assert_eq!(autoplay_timers(&carousel), 1);
    }

    #[test]
    fn test_resize_off_chart_slide_is_ignored() {
        let mut carousel = started();
        carousel.go_to_slide(2);
        let before = carousel.next_deadline();

        carousel.surface_resized();
        assert_eq!(carousel.next_deadline(), before);
        assert_eq!(carousel.resize_redraw, None);
    }

    #[test]
    fn test_out_of_range_and_unparsed_features_are_ignored() {
        let mut config = CarouselConfig::default();
        config.features[1].feature = "first".into();
        let mut carousel = CarouselController::new(&config, &TimingConfig::default()).unwrap();

        assert_eq!(carousel.features()[1].slide, None);
        carousel.go_to_slide(9);
        assert_eq!(carousel.current_slide(), 0);
        assert!(!carousel.is_autoplaying());
    }
}
