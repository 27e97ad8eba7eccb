use indexmap::IndexMap;
use tracing::trace;

use crate::api::{AccessibilityMarker, HostDocument};
use crate::core::TableElement;
use crate::error::{ChartError, ChartResult};
use crate::render::SurfaceId;

use super::{Subscription, SubscriptionKind, SurfaceHost};

/// Headless document used by tests and the command-line tool.
///
/// Tables are keyed by id in insertion order; surfaces remember the table
/// they were inserted after.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    tables: IndexMap<String, TableElement>,
    hidden: IndexMap<String, AccessibilityMarker>,
    surfaces: IndexMap<SurfaceId, String>,
    subscriptions: Vec<Subscription>,
    next_subscription_id: u64,
}

impl InMemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table; tables without an id are not addressable and are ignored.
    pub fn insert_table(&mut self, table: TableElement) {
        if let Some(id) = table.id.clone() {
            self.tables.insert(id, table);
        }
    }

    #[must_use]
    pub fn with_table(mut self, table: TableElement) -> Self {
        self.insert_table(table);
        self
    }

    #[must_use]
    pub fn accessibility(&self, table_id: &str) -> Option<&AccessibilityMarker> {
        self.hidden.get(table_id)
    }

    /// Table the surface was inserted after.
    #[must_use]
    pub fn surface_anchor(&self, surface: &SurfaceId) -> Option<&str> {
        self.surfaces.get(surface).map(String::as_str)
    }

    /// Detaches a surface, e.g. to model a host that removed it.
    pub fn remove_surface(&mut self, surface: &SurfaceId) -> bool {
        self.surfaces.shift_remove(surface).is_some()
    }

    #[must_use]
    pub fn active_subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    #[must_use]
    pub fn has_subscription(&self, surface: &SurfaceId, geometry: bool) -> bool {
        self.subscriptions.iter().any(|s| {
            &s.surface == surface && matches!(s.kind, SubscriptionKind::Geometry) == geometry
        })
    }

    fn subscribe(&mut self, surface: &SurfaceId, kind: SubscriptionKind) -> Subscription {
        self.next_subscription_id += 1;
        let subscription = Subscription::new(self.next_subscription_id, kind, surface.clone());
        trace!(surface = %surface, id = subscription.id, ?kind, "observer registered");
        self.subscriptions.push(subscription.clone());
        subscription
    }
}

impl HostDocument for InMemoryDocument {
    fn table(&self, table_id: &str) -> Option<&TableElement> {
        self.tables.get(table_id)
    }

    fn hide_table(&mut self, table_id: &str, marker: &AccessibilityMarker) {
        self.hidden.insert(table_id.to_owned(), *marker);
    }

    fn insert_surface_after(&mut self, table_id: &str, surface: &SurfaceId) -> ChartResult<()> {
        if !self.tables.contains_key(table_id) {
            return Err(ChartError::MissingSource {
                table_id: table_id.to_owned(),
            });
        }
        self.surfaces.insert(surface.clone(), table_id.to_owned());
        Ok(())
    }
}

impl SurfaceHost for InMemoryDocument {
    fn surface_exists(&self, surface: &SurfaceId) -> bool {
        self.surfaces.contains_key(surface)
    }

    fn observe_visibility(&mut self, surface: &SurfaceId, threshold: f64) -> Subscription {
        self.subscribe(surface, SubscriptionKind::Visibility { threshold })
    }

    fn observe_geometry(&mut self, surface: &SurfaceId) -> Subscription {
        self.subscribe(surface, SubscriptionKind::Geometry)
    }

    fn unobserve(&mut self, subscription: Subscription) {
        self.subscriptions.retain(|s| s.id != subscription.id);
    }
}
