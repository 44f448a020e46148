//! Host-facing visual lifecycle.
//!
//! The host drives three entry points: construct once with a display
//! surface, call [`Visual::update`] on every data or view change, and call
//! [`Visual::enumerate_properties`] when populating its settings pane. All
//! calls are serialised by the host; nothing here suspends or blocks.

mod properties;
mod settings;

pub use properties::PropertyInstance;
pub use settings::{HTML_RISK_PROPERTY, HTML_SETTINGS_OBJECT, RiskSettings};

use tracing::debug;

use crate::application::render::{RenderOutcome, SafeHtmlRenderer};
use crate::config::VisualConfig;
use crate::domain::dataview::DataView;
use crate::infra::surface::RenderSurface;

/// Lifecycle contract the embedding host drives after construction.
pub trait Visual {
    /// Process one update cycle and report what happened to the display.
    fn update(&mut self, options: &UpdateOptions) -> RenderOutcome;

    /// Enumerate configurable instances for one of the host's format-pane
    /// objects.
    fn enumerate_properties(&self, object_name: &str) -> Vec<PropertyInstance>;
}

/// Notification hooks mirroring the host's rendering event service. The
/// visual brackets every update with these calls so the host can track
/// render health.
pub trait RenderEvents {
    fn rendering_started(&self);
    fn rendering_finished(&self);
}

/// Event sink for hosts without an event service.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEvents;

impl RenderEvents for NoEvents {
    fn rendering_started(&self) {}
    fn rendering_finished(&self) {}
}

/// Inputs for one update cycle.
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// Data views supplied by the host. The card binds a single scalar, so
    /// only the first view is consulted.
    pub data_views: Vec<DataView>,
}

impl UpdateOptions {
    pub fn new(data_views: Vec<DataView>) -> Self {
        Self { data_views }
    }
}

/// The HTML card visual: a [`SafeHtmlRenderer`] wired to the host lifecycle.
///
/// Settings are re-parsed from the data view on every update, so the gate
/// always reflects the latest format-pane state before content is touched.
pub struct HtmlCardVisual<S: RenderSurface, E: RenderEvents> {
    renderer: SafeHtmlRenderer<S>,
    events: E,
    settings: RiskSettings,
}

impl<S: RenderSurface, E: RenderEvents> HtmlCardVisual<S, E> {
    /// Construct the visual over the host-supplied surface. Called once per
    /// embedding; the warning region is showing when this returns.
    pub fn new(surface: S, config: &VisualConfig, events: E) -> Self {
        debug!("visual constructed");

        Self {
            renderer: SafeHtmlRenderer::new(surface, &config.warning_text),
            events,
            settings: RiskSettings::default(),
        }
    }

    pub fn renderer(&self) -> &SafeHtmlRenderer<S> {
        &self.renderer
    }

    /// Settings as of the most recent update.
    pub fn settings(&self) -> &RiskSettings {
        &self.settings
    }
}

impl<S: RenderSurface, E: RenderEvents> Visual for HtmlCardVisual<S, E> {
    fn update(&mut self, options: &UpdateOptions) -> RenderOutcome {
        self.events.rendering_started();
        debug!(data_views = options.data_views.len(), "visual update");

        let data_view = options.data_views.first();
        self.settings = data_view.map(RiskSettings::parse).unwrap_or_default();
        self.renderer.set_risk_accepted(self.settings.accept_html_risk);

        let outcome = self
            .renderer
            .render(data_view.and_then(DataView::single_value));

        self.events.rendering_finished();
        outcome
    }

    fn enumerate_properties(&self, object_name: &str) -> Vec<PropertyInstance> {
        properties::enumerate(object_name, &self.settings)
    }
}
