use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace};

use crate::core::{ChartKind, ParsedSeriesData};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{Subscription, SurfaceEvent, SurfaceHost};
use crate::render::{ChartHandle, RenderingBackend, SurfaceId};

use super::{BuildOptions, ChartConfigBuilder};

/// What a debounced geometry change does to the active chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RebuildPolicy {
    /// Destroy the handle, rebuild the configuration, render a new handle.
    #[default]
    Rebuild,
    /// Ask the live handle to resize itself.
    ResizeInPlace,
}

/// Timing and trigger configuration of the render lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifecycleConfig {
    /// Intersection ratio the surface must reach before the first render.
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f64,
    /// Quiet period after the last geometry change before rebuilding.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub rebuild_policy: RebuildPolicy,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: default_visibility_threshold(),
            debounce_ms: default_debounce_ms(),
            rebuild_policy: RebuildPolicy::default(),
        }
    }
}

impl LifecycleConfig {
    #[must_use]
    pub fn with_visibility_threshold(mut self, threshold: f64) -> Self {
        self.visibility_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    #[must_use]
    pub fn with_rebuild_policy(mut self, policy: RebuildPolicy) -> Self {
        self.rebuild_policy = policy;
        self
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.visibility_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.visibility_threshold)
        {
            return Err(ChartError::InvalidData(
                "visibility threshold must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_visibility_threshold() -> f64 {
    0.5
}

fn default_debounce_ms() -> u64 {
    100
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleState {
    Uninitialized,
    AwaitingVisibility,
    Rendered,
    /// The first render failed. Terminal until teardown.
    Aborted,
}

/// Decides when a chart is rendered and when it is rebuilt.
///
/// The first render is lazy: it waits for the surface to cross the
/// visibility threshold once. Afterwards geometry changes open a debounce
/// window; the rebuild happens on the first [`poll`](Self::poll) after the
/// window elapsed without further changes. At most one backend handle exists
/// at a time and it is destroyed before its replacement is created.
///
/// Time is passed in explicitly as a monotonic offset so hosts can drive the
/// controller from any event loop.
pub struct RenderLifecycleController<B: RenderingBackend> {
    surface: SurfaceId,
    kind: ChartKind,
    parsed: ParsedSeriesData,
    options: BuildOptions,
    builder: ChartConfigBuilder,
    backend: B,
    config: LifecycleConfig,
    state: LifecycleState,
    handle: Option<B::Handle>,
    visibility_subscription: Option<Subscription>,
    geometry_subscription: Option<Subscription>,
    rebuild_deadline: Option<Duration>,
    render_cycles: usize,
    last_error: Option<ChartError>,
}

impl<B: RenderingBackend> RenderLifecycleController<B> {
    #[must_use]
    pub fn new(
        surface: SurfaceId,
        parsed: ParsedSeriesData,
        kind: ChartKind,
        options: BuildOptions,
        backend: B,
    ) -> Self {
        Self {
            surface,
            kind,
            parsed,
            options,
            builder: ChartConfigBuilder::default(),
            backend,
            config: LifecycleConfig::default(),
            state: LifecycleState::Uninitialized,
            handle: None,
            visibility_subscription: None,
            geometry_subscription: None,
            rebuild_deadline: None,
            render_cycles: 0,
            last_error: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: LifecycleConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_builder(mut self, builder: ChartConfigBuilder) -> Self {
        self.builder = builder;
        self
    }

    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    #[must_use]
    pub fn surface(&self) -> &SurfaceId {
        &self.surface
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn parsed(&self) -> &ParsedSeriesData {
        &self.parsed
    }

    #[must_use]
    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    #[must_use]
    pub fn handle(&self) -> Option<&B::Handle> {
        self.handle.as_ref()
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Deadline of the open debounce window, if any.
    #[must_use]
    pub fn pending_rebuild_deadline(&self) -> Option<Duration> {
        self.rebuild_deadline
    }

    /// Number of successful render cycles (initial render plus rebuilds).
    #[must_use]
    pub fn render_cycles(&self) -> usize {
        self.render_cycles
    }

    /// Error that aborted the most recent render or resize, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&ChartError> {
        self.last_error.as_ref()
    }

    /// Dispatches one host event. Returns `true` when a render cycle ran.
    pub fn handle_event<H: SurfaceHost>(
        &mut self,
        host: &mut H,
        event: SurfaceEvent,
        now: Duration,
    ) -> bool {
        match event {
            SurfaceEvent::LaidOut => {
                self.on_layout(host);
                false
            }
            SurfaceEvent::VisibilityChanged { ratio } => self.on_visibility(host, ratio),
            SurfaceEvent::GeometryChanged => {
                self.on_geometry_change(now);
                false
            }
            SurfaceEvent::Tick => self.poll(host, now),
        }
    }

    /// First layout finished: start watching for visibility.
    pub fn on_layout<H: SurfaceHost>(&mut self, host: &mut H) {
        if self.state != LifecycleState::Uninitialized {
            return;
        }
        self.visibility_subscription =
            Some(host.observe_visibility(&self.surface, self.config.visibility_threshold));
        self.state = LifecycleState::AwaitingVisibility;
        debug!(surface = %self.surface, "awaiting visibility");
    }

    /// Visibility observer callback.
    ///
    /// The first crossing cancels the observer and renders. If that render
    /// fails the controller moves to [`LifecycleState::Aborted`] and later
    /// visibility events are ignored.
    pub fn on_visibility<H: SurfaceHost>(&mut self, host: &mut H, ratio: f64) -> bool {
        if self.state != LifecycleState::AwaitingVisibility
            || ratio <= 0.0
            || ratio < self.config.visibility_threshold
        {
            return false;
        }
        if let Some(subscription) = self.visibility_subscription.take() {
            host.unobserve(subscription);
        }
        if !self.render_cycle(host) {
            self.state = LifecycleState::Aborted;
            return false;
        }
        self.state = LifecycleState::Rendered;
        if self.geometry_subscription.is_none() {
            self.geometry_subscription = Some(host.observe_geometry(&self.surface));
        }
        true
    }

    /// Geometry observer callback: opens or extends the debounce window.
    pub fn on_geometry_change(&mut self, now: Duration) {
        if self.state != LifecycleState::Rendered {
            return;
        }
        let deadline = now + self.config.debounce();
        trace!(
            surface = %self.surface,
            deadline = ?deadline,
            "geometry changed, debounce window reset"
        );
        self.rebuild_deadline = Some(deadline);
    }

    /// Runs the pending rebuild once its debounce window has elapsed.
    pub fn poll<H: SurfaceHost>(&mut self, host: &mut H, now: Duration) -> bool {
        match self.rebuild_deadline {
            Some(deadline) if now >= deadline => {
                self.rebuild_deadline = None;
                match self.config.rebuild_policy {
                    RebuildPolicy::Rebuild => self.render_cycle(host),
                    RebuildPolicy::ResizeInPlace => self.resize_in_place(host),
                }
            }
            _ => false,
        }
    }

    /// Disconnects every observer and destroys the active handle.
    pub fn teardown<H: SurfaceHost>(mut self, host: &mut H) {
        for subscription in [
            self.visibility_subscription.take(),
            self.geometry_subscription.take(),
        ]
        .into_iter()
        .flatten()
        {
            host.unobserve(subscription);
        }
        if let Some(handle) = self.handle.take() {
            handle.destroy();
        }
        debug!(surface = %self.surface, "chart torn down");
    }

    fn render_cycle<H: SurfaceHost>(&mut self, host: &H) -> bool {
        let outcome = self.try_render_cycle(host);
        self.record(outcome, "render cycle aborted")
    }

    fn try_render_cycle<H: SurfaceHost>(&mut self, host: &H) -> ChartResult<()> {
        self.ensure_surface(host)?;
        let configuration = self.builder.build(&self.parsed, self.kind, &self.options)?;

        if let Some(previous) = self.handle.take() {
            previous.destroy();
        }
        self.handle = Some(self.backend.render(&self.surface, &configuration)?);
        self.render_cycles += 1;
        debug!(
            surface = %self.surface,
            cycle = self.render_cycles,
            kind = self.kind.as_str(),
            "chart rendered"
        );
        Ok(())
    }

    fn resize_in_place<H: SurfaceHost>(&mut self, host: &H) -> bool {
        if self.handle.is_none() {
            return self.render_cycle(host);
        }
        let outcome = self
            .ensure_surface(host)
            .and_then(|()| match self.handle.as_mut() {
                Some(handle) => handle.resize(),
                None => Ok(()),
            });
        if outcome.is_ok() {
            trace!(surface = %self.surface, "chart resized in place");
        }
        self.record(outcome, "resize aborted")
    }

    fn ensure_surface<H: SurfaceHost>(&self, host: &H) -> ChartResult<()> {
        if host.surface_exists(&self.surface) {
            Ok(())
        } else {
            Err(ChartError::MissingSurface {
                surface_id: self.surface.to_string(),
            })
        }
    }

    fn record(&mut self, outcome: ChartResult<()>, context: &'static str) -> bool {
        match outcome {
            Ok(()) => {
                self.last_error = None;
                true
            }
            Err(err) => {
                error!(surface = %self.surface, error = %err, "{context}");
                self.last_error = Some(err);
                false
            }
        }
    }
}
