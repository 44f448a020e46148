//! Risk-gated rendering of host-supplied HTML fragments.
//!
//! The renderer is intentionally kept small and synchronous: it accepts one
//! raw value per call, produces a deterministic outcome, and surfaces
//! structured errors instead of raising. State changes are confined to the
//! two display regions it owns on its surface.

mod sanitizer;
mod types;

pub use sanitizer::{AmmoniaSanitizer, sanitize_service};
pub use types::{RenderError, RenderOutcome, RenderRequest, SanitizeError, SanitizeService};

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{
    dataview,
    error::DomainError,
    types::{BlockReason, Region},
};
use crate::infra::surface::RenderSurface;

/// Renders one host-supplied HTML fragment behind a risk-acceptance gate.
///
/// The renderer owns two mutually exclusive regions on its surface: an
/// advisory warning shown while the gate is closed, and the content region
/// receiving sanitised HTML once the user has opted in. Exactly one region
/// is visible at any time.
///
/// Failed calls never clear previously rendered content: when the gate is
/// open but the bound value is absent or not a scalar, the last good render
/// stays on the surface and the call reports [`RenderError::InvalidInput`].
pub struct SafeHtmlRenderer<S: RenderSurface> {
    surface: S,
    sanitizer: Arc<dyn SanitizeService>,
    risk_accepted: bool,
    visible: Region,
}

impl<S: RenderSurface> SafeHtmlRenderer<S> {
    /// Attach the warning and content regions to `surface`, using the shared
    /// Ammonia sanitiser. The warning is visible until the gate opens.
    pub fn new(surface: S, warning_text: &str) -> Self {
        Self::with_sanitizer(surface, warning_text, sanitize_service())
    }

    /// Same as [`SafeHtmlRenderer::new`] with an explicit sanitiser, for
    /// hosts that plug their own [`SanitizeService`].
    pub fn with_sanitizer(
        mut surface: S,
        warning_text: &str,
        sanitizer: Arc<dyn SanitizeService>,
    ) -> Self {
        surface.set_text(Region::Warning, warning_text);
        surface.set_visible(Region::Warning, true);
        surface.set_visible(Region::Content, false);

        Self {
            surface,
            sanitizer,
            risk_accepted: false,
            visible: Region::Warning,
        }
    }

    /// Move the gate. Pure state mutation; takes effect on the next
    /// [`SafeHtmlRenderer::render`] call.
    pub fn set_risk_accepted(&mut self, accepted: bool) {
        self.risk_accepted = accepted;
    }

    pub fn risk_accepted(&self) -> bool {
        self.risk_accepted
    }

    /// Region currently shown on the surface.
    pub fn visible_region(&self) -> Region {
        self.visible
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Run one render cycle against the current gate position.
    ///
    /// While the gate is closed the raw value is never inspected: sanitised
    /// HTML is not computed, regardless of content validity.
    pub fn render(&mut self, raw_content: Option<&Value>) -> RenderOutcome {
        if !self.risk_accepted {
            self.reveal(Region::Warning);
            debug!(reason = %BlockReason::RiskNotAccepted, "render blocked");
            return RenderOutcome::Blocked(BlockReason::RiskNotAccepted);
        }

        let raw = match raw_content.map(dataview::scalar_string).transpose() {
            Ok(Some(raw)) => raw,
            Ok(None) => return self.fail_preserving(DomainError::missing("data view value")),
            Err(err) => return self.fail_preserving(err),
        };

        match self.sanitizer.sanitize(&raw) {
            Ok(sanitized) => {
                self.reveal(Region::Content);
                self.surface.set_html(Region::Content, &sanitized);
                RenderOutcome::Rendered(sanitized)
            }
            Err(err) => {
                // Sanitiser faults surface as inline text, never to the host.
                warn!(error = %err, "sanitiser fault rendered as inline diagnostic");
                self.reveal(Region::Content);
                let diagnostic = format!("<div>{}</div>", ammonia::clean_text(&err.message));
                self.surface.set_html(Region::Content, &diagnostic);
                RenderOutcome::Failed(RenderError::Sanitisation {
                    message: err.message,
                })
            }
        }
    }

    /// Convenience for callers holding a full [`RenderRequest`].
    pub fn render_request(&mut self, request: &RenderRequest) -> RenderOutcome {
        self.set_risk_accepted(request.risk_accepted);
        self.render(request.raw_content.as_ref())
    }

    fn fail_preserving(&self, err: DomainError) -> RenderOutcome {
        debug!(error = %err, "render input invalid, previous content preserved");
        RenderOutcome::Failed(RenderError::InvalidInput {
            message: err.to_string(),
        })
    }

    fn reveal(&mut self, region: Region) {
        self.surface.set_visible(region, true);
        self.surface.set_visible(region.counterpart(), false);
        self.visible = region;
    }
}
