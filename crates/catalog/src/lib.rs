use serde::{Deserialize, Serialize};

/// Sentinel heading the design and material lists, meaning "no overlay".
pub const NONE_SENTINEL: &str = "None";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerEntry {
    pub name: String,
    /// Models in presentation order. Duplicates are preserved verbatim;
    /// the built-in data really does list "Galaxy A52" twice.
    pub models: Vec<String>,
}

/// Immutable product catalog: manufacturers with their model lines, plus
/// the design and material overlay identifiers.
///
/// Constructed once at startup and never mutated. Manufacturer order is
/// insertion order, not a re-sort, because the selects present entries in
/// exactly this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCatalog {
    manufacturers: Vec<ManufacturerEntry>,
    designs: Vec<String>,
    materials: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A non-empty manufacturer value that is not a catalog key. The
    /// select options are built from catalog keys, so this is an internal
    /// consistency error rather than a user-input error.
    UnknownManufacturer(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::UnknownManufacturer(name) => {
                write!(f, "unknown manufacturer: {name}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl ProductCatalog {
    /// The catalog shipped with the customizer page.
    pub fn builtin() -> Self {
        fn strings(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        let catalog = Self {
            manufacturers: vec![
                ManufacturerEntry {
                    name: "Apple".to_string(),
                    models: strings(&[
                        "iPhone SE",
                        "iPhone 12",
                        "iPhone 12 Pro",
                        "iPhone 13",
                        "iPhone 13 Pro",
                    ]),
                },
                ManufacturerEntry {
                    name: "Samsung".to_string(),
                    models: strings(&[
                        "Galaxy S21",
                        "Galaxy S21+",
                        "Galaxy Note 20",
                        "Galaxy A52",
                        "Galaxy A52",
                    ]),
                },
                ManufacturerEntry {
                    name: "Google".to_string(),
                    models: strings(&["Pixel 4", "Pixel 4a", "Pixel 5", "Pixel 5a", "Pixel 6"]),
                },
            ],
            designs: strings(&[NONE_SENTINEL, "Design1", "Design2", "Design3"]),
            materials: strings(&[
                NONE_SENTINEL,
                "Leder",
                "Stoff",
                "Holz",
                "Plexiglas",
                "Kork",
            ]),
        };
        debug_assert!(
            catalog.manufacturers.iter().all(|m| !m.models.is_empty()),
            "every manufacturer must carry at least one model"
        );
        catalog
    }

    pub fn manufacturers(&self) -> &[ManufacturerEntry] {
        &self.manufacturers
    }

    /// Model list for a manufacturer, in catalog order.
    pub fn models_for(&self, manufacturer: &str) -> Result<&[String], CatalogError> {
        self.manufacturers
            .iter()
            .find(|entry| entry.name == manufacturer)
            .map(|entry| entry.models.as_slice())
            .ok_or_else(|| CatalogError::UnknownManufacturer(manufacturer.to_string()))
    }

    pub fn designs(&self) -> &[String] {
        &self.designs
    }

    pub fn materials(&self) -> &[String] {
        &self.materials
    }

    pub fn is_manufacturer(&self, name: &str) -> bool {
        self.manufacturers.iter().any(|entry| entry.name == name)
    }

    pub fn is_design(&self, value: &str) -> bool {
        self.designs.iter().any(|d| d == value)
    }

    pub fn is_material(&self, value: &str) -> bool {
        self.materials.iter().any(|m| m == value)
    }
}
