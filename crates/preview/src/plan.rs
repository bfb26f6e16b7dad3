use catalog::NONE_SENTINEL;

/// Fixed asset path convention for overlay images. The selected value is
/// spliced in verbatim; only catalog identifiers reach this path under
/// normal operation.
pub const ASSET_BASE: &str = "/images/";
pub const ASSET_EXTENSION: &str = ".jpg";

/// What a design or material change does to the preview surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewCommand {
    /// Clear the whole surface back to transparent.
    Clear,
    /// Load the image at `url` and, once decoded, draw it stretched to
    /// the full canvas size at the origin (aspect ratio not preserved).
    Load { url: String },
}

pub fn asset_url(value: &str) -> String {
    format!("{ASSET_BASE}{value}{ASSET_EXTENSION}")
}

/// Maps an overlay select value to a surface command. The `"None"`
/// sentinel and the empty placeholder both clear; anything else loads.
pub fn plan_overlay(value: &str) -> PreviewCommand {
    if value.is_empty() || value == NONE_SENTINEL {
        PreviewCommand::Clear
    } else {
        PreviewCommand::Load {
            url: asset_url(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sentinel_and_empty_both_clear() {
        assert_eq!(plan_overlay("None"), PreviewCommand::Clear);
        assert_eq!(plan_overlay(""), PreviewCommand::Clear);
    }

    #[test]
    fn design_value_loads_its_asset() {
        assert_eq!(
            plan_overlay("Design2"),
            PreviewCommand::Load {
                url: "/images/Design2.jpg".to_string()
            }
        );
    }

    #[test]
    fn material_value_loads_its_asset() {
        assert_eq!(
            plan_overlay("Plexiglas"),
            PreviewCommand::Load {
                url: "/images/Plexiglas.jpg".to_string()
            }
        );
    }

    #[test]
    fn asset_url_is_case_sensitive_and_unescaped() {
        assert_eq!(asset_url("Holz"), "/images/Holz.jpg");
        assert_eq!(asset_url("holz"), "/images/holz.jpg");
        // No escaping is applied; only catalog values are expected here.
        assert_eq!(asset_url("Galaxy S21+"), "/images/Galaxy S21+.jpg");
    }

    #[test]
    fn design_reset_clears_regardless_of_material_state() {
        use crate::{OverlayKind, Selection};
        // Overlays overwrite rather than compose: returning the design to
        // the sentinel clears the shared surface, and the material draw is
        // not reasserted even though its selection is untouched.
        let mut selection = Selection::default();
        selection.set_overlay(OverlayKind::Material, "Leder");
        selection.set_overlay(OverlayKind::Design, "Design1");
        assert!(matches!(
            plan_overlay(&selection.design),
            PreviewCommand::Load { .. }
        ));
        selection.set_overlay(OverlayKind::Design, "None");
        assert_eq!(plan_overlay(&selection.design), PreviewCommand::Clear);
        assert_eq!(selection.material, "Leder");
    }

    #[test]
    fn every_builtin_overlay_value_plans_consistently() {
        let catalog = catalog::ProductCatalog::builtin();
        for value in catalog.designs().iter().chain(catalog.materials()) {
            match plan_overlay(value) {
                PreviewCommand::Clear => assert_eq!(value, catalog::NONE_SENTINEL),
                PreviewCommand::Load { url } => {
                    assert_eq!(url, format!("/images/{value}.jpg"));
                }
            }
        }
    }
}
