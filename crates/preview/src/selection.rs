use catalog::{NONE_SENTINEL, ProductCatalog};
use serde::{Deserialize, Serialize};

/// Which of the two overlay selects a change came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OverlayKind {
    Design,
    Material,
}

/// The four select values as last reported by the controls. Empty string
/// means "nothing selected / placeholder".
///
/// Changing the manufacturer forcibly resets the model; beyond that reset
/// no cross-field consistency is enforced, matching the page behavior.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    pub manufacturer: String,
    pub model: String,
    pub design: String,
    pub material: String,
}

/// Snapshot of a completed selection, ready to hand to an order flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub manufacturer: String,
    pub model: String,
    pub design: Option<String>,
    pub material: Option<String>,
}

impl Selection {
    pub fn set_manufacturer(&mut self, value: &str) {
        self.manufacturer = value.to_string();
        self.model.clear();
    }

    pub fn set_model(&mut self, value: &str) {
        self.model = value.to_string();
    }

    pub fn set_overlay(&mut self, kind: OverlayKind, value: &str) {
        match kind {
            OverlayKind::Design => self.design = value.to_string(),
            OverlayKind::Material => self.material = value.to_string(),
        }
    }

    fn chosen_overlay(value: &str) -> Option<String> {
        if value.is_empty() || value == NONE_SENTINEL {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// A summary exists once manufacturer, model and at least one
    /// non-sentinel overlay are chosen, and the values are still catalog
    /// members.
    pub fn order_summary(&self, catalog: &ProductCatalog) -> Option<OrderSummary> {
        if !catalog.is_manufacturer(&self.manufacturer) {
            return None;
        }
        let models = catalog.models_for(&self.manufacturer).ok()?;
        if !models.iter().any(|m| m == &self.model) {
            return None;
        }
        let design = Self::chosen_overlay(&self.design);
        let material = Self::chosen_overlay(&self.material);
        if design.is_none() && material.is_none() {
            return None;
        }
        Some(OrderSummary {
            manufacturer: self.manufacturer.clone(),
            model: self.model.clone(),
            design,
            material,
        })
    }
}
