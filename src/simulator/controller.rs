//! Simulator Controller
//! Tabbed product-demo panel: tab switching, the dashboard sales chart and
//! the count-up animation on the stat boxes.

use crate::charts::{ChartRenderer, ChartStyle, ChartSurface, Series};
use crate::config::{SimulatorConfig, TimingConfig};
use crate::simulator::{StatCounter, TabSet};
use crate::timing::{TimerHandle, TimerQueue};
use std::time::Duration;

/// Tab whose activation redraws the sales chart.
pub const DASHBOARD_TAB: &str = "dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SimulatorTask {
    InitialRender,
    Redraw,
    StatTick(usize),
}

/// A stat box. `counter` is only present while it animates.
#[derive(Debug, Clone)]
pub struct StatEntry {
    pub label: String,
    text: String,
    counter: Option<StatCounter>,
    timer: Option<TimerHandle>,
}

impl StatEntry {
    pub fn text(&self) -> &str {
        &self.text
    }
}

pub struct SimulatorController {
    tabs: TabSet,
    titles: Vec<String>,
    stats: Vec<StatEntry>,
    series: Option<Series>,
    style: ChartStyle,
    surface: Option<ChartSurface>,
    timers: TimerQueue<SimulatorTask>,
    redraw_delay: Duration,
    initial_delay: Duration,
    stat_tick: Duration,
    stat_steps: u32,
    started: bool,
    /// Set once the initial render has fired
    rendered: bool,
    /// Pending redraw scheduled by a surface resize
    resize_redraw: Option<TimerHandle>,
}

impl SimulatorController {
    /// Returns `None` when there are no tabs to manage.
    pub fn new(config: &SimulatorConfig, timing: &TimingConfig) -> Option<Self> {
        let ids = config.tabs.iter().map(|t| t.id.clone()).collect();
        let initially_active = config.tabs.iter().find(|t| t.active).map(|t| t.id.as_str());
        let Some(tabs) = TabSet::new(ids, initially_active) else {
            tracing::debug!("Simulator has no tabs, not wiring it");
            return None;
        };

        let stats = config
            .stats
            .iter()
            .map(|s| StatEntry {
                label: s.label.clone(),
                text: s.value.clone(),
                counter: None,
                timer: None,
            })
            .collect();

        Some(Self {
            tabs,
            titles: config.tabs.iter().map(|t| t.title.clone()).collect(),
            stats,
            surface: config.chart.as_ref().map(|_| ChartSurface::default()),
            series: config.chart.clone(),
            style: ChartStyle::dashboard(),
            timers: TimerQueue::new(),
            redraw_delay: timing.redraw_delay(),
            initial_delay: timing.initial_delay(),
            stat_tick: timing.stat_tick(),
            stat_steps: timing.stat_steps,
            started: false,
            rendered: false,
            resize_redraw: None,
        })
    }

    /// Page-load wiring: first chart render after the initial delay and the
    /// stat animations right away. Only the first call has an effect.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.timers
            .set_timeout(self.initial_delay, SimulatorTask::InitialRender);
        self.animate_stats();
    }

    /// Switch to tab `id`. Selecting the dashboard schedules a chart redraw
    /// once the panel has been laid out.
    pub fn activate_tab(&mut self, id: &str) {
        if !self.tabs.activate(id) {
            tracing::warn!(tab = id, "Ignoring unknown simulator tab");
            return;
        }
        tracing::info!(tab = id, "Simulator tab activated");

        if id == DASHBOARD_TAB {
            self.timers.set_timeout(self.redraw_delay, SimulatorTask::Redraw);
        }
    }

    /// The GUI gave the chart surface a new size, which wiped it. Redraws
    /// after the usual delay while the dashboard is showing. Repeated
    /// resizes keep pushing the one pending redraw back.
    pub fn surface_resized(&mut self) {
        if !self.rendered || !self.tabs.is_active(DASHBOARD_TAB) {
            return;
        }
        if let Some(handle) = self.resize_redraw.take() {
            self.timers.clear(handle);
        }
        self.resize_redraw = Some(
            self.timers
                .set_timeout(self.redraw_delay, SimulatorTask::Redraw),
        );
    }

    /// Fire every timer due by `now`.
    pub fn poll(&mut self, now: Duration) {
        while let Some((handle, task)) = self.timers.pop_due(now) {
            match task {
                SimulatorTask::InitialRender => {
                    self.rendered = true;
                    self.render_chart();
                }
                SimulatorTask::Redraw => {
                    if self.resize_redraw == Some(handle) {
                        self.resize_redraw = None;
                    }
                    self.render_chart();
                }
                SimulatorTask::StatTick(idx) => self.tick_stat(idx, handle),
            }
        }
        self.timers.advance_to(now);
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    /// Tab ids paired with their display titles.
    pub fn tab_titles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tabs
            .ids()
            .iter()
            .zip(&self.titles)
            .map(|(id, title)| (id.as_str(), title.as_str()))
    }

    pub fn stats(&self) -> &[StatEntry] {
        &self.stats
    }

    pub fn surface(&self) -> Option<&ChartSurface> {
        self.surface.as_ref()
    }

    /// Mutable access for the GUI to size the surface to its layout box.
    pub fn surface_mut(&mut self) -> Option<&mut ChartSurface> {
        self.surface.as_mut()
    }

    fn render_chart(&mut self) {
        let Some(series) = &self.series else {
            return;
        };
        ChartRenderer::refresh(self.surface.as_mut(), series, &self.style, "sales");
    }

    fn animate_stats(&mut self) {
        for (idx, entry) in self.stats.iter_mut().enumerate() {
            let Some(counter) = StatCounter::parse(&entry.text, self.stat_steps) else {
                tracing::debug!(stat = %entry.label, "Stat is not numeric, leaving as is");
                continue;
            };
            tracing::debug!(
                stat = %entry.label,
                target = counter.target(),
                format = ?counter.format(),
                "Animating stat"
            );
            entry.counter = Some(counter);
            entry.timer = Some(
                self.timers
                    .set_interval(self.stat_tick, SimulatorTask::StatTick(idx)),
            );
        }
    }

    fn tick_stat(&mut self, idx: usize, handle: TimerHandle) {
        let Some(entry) = self.stats.get_mut(idx) else {
            self.timers.clear(handle);
            return;
        };
        let Some(counter) = entry.counter.as_mut() else {
            self.timers.clear(handle);
            return;
        };

        let frame = counter.advance();
        entry.text = frame.text;
        if frame.done {
            self.timers.clear(handle);
            entry.timer = None;
            entry.counter = None;
        }
    }
}
