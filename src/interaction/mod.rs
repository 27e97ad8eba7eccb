//! Host-side surface events and explicit observer subscriptions.
//!
//! The lifecycle controller never captures long-lived references to the host.
//! It registers observers through [`SurfaceHost`], keeps the returned
//! [`Subscription`] tokens, and hands them back to cancel.

mod document;

pub use document::InMemoryDocument;

use serde::{Deserialize, Serialize};

use crate::render::SurfaceId;

/// What an observer subscription watches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SubscriptionKind {
    /// One-shot viewport crossing past `threshold` (intersection ratio).
    Visibility { threshold: f64 },
    /// Container geometry changes.
    Geometry,
}

/// Token identifying one active observer registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: u64,
    pub kind: SubscriptionKind,
    pub surface: SurfaceId,
}

impl Subscription {
    #[must_use]
    pub fn new(id: u64, kind: SubscriptionKind, surface: SurfaceId) -> Self {
        Self { id, kind, surface }
    }
}

/// Events delivered by the host to a chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SurfaceEvent {
    /// First layout of the drawing surface finished.
    LaidOut,
    /// Visibility observer fired with the current intersection ratio.
    VisibilityChanged { ratio: f64 },
    /// Geometry observer fired.
    GeometryChanged,
    /// Timer tick; lets pending debounce windows elapse.
    Tick,
}

/// Observer registry and surface lookup provided by the host page.
pub trait SurfaceHost {
    fn surface_exists(&self, surface: &SurfaceId) -> bool;

    fn observe_visibility(&mut self, surface: &SurfaceId, threshold: f64) -> Subscription;

    fn observe_geometry(&mut self, surface: &SurfaceId) -> Subscription;

    fn unobserve(&mut self, subscription: Subscription);
}
