//! Vetrina is an embeddable "HTML card" visual. On every update the host
//! hands it a data-view snapshot carrying one scalar value; the visual
//! sanitises that value and renders it as HTML, but only once the user has
//! explicitly accepted the risk in the host's format settings. Until then an
//! advisory warning is shown instead of the content.
//!
//! The crate is host-agnostic: display goes through the
//! [`infra::surface::RenderSurface`] seam, update data arrives as
//! [`domain::dataview::DataView`] snapshots, and render notifications mirror
//! the host's event service via [`application::visual::RenderEvents`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
