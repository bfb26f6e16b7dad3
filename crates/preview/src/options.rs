use catalog::{CatalogError, ProductCatalog};

/// One entry for a select control: the submitted value plus its display
/// text. For model options both are the model name; only the placeholder
/// differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The "nothing selected yet" entry heading every model list.
    pub fn model_placeholder() -> Self {
        Self::new("", "Select Model")
    }
}

/// Builds the full option list for the model select after a manufacturer
/// change. The caller replaces the select's options wholesale with the
/// result; repopulation is destructive, not an incremental diff.
///
/// An empty manufacturer yields just the placeholder. A non-empty value
/// absent from the catalog is an internal consistency error, since the
/// manufacturer select is itself populated from catalog keys.
pub fn model_options(
    catalog: &ProductCatalog,
    manufacturer: &str,
) -> Result<Vec<SelectOption>, CatalogError> {
    let mut options = vec![SelectOption::model_placeholder()];
    if manufacturer.is_empty() {
        return Ok(options);
    }
    for model in catalog.models_for(manufacturer)? {
        options.push(SelectOption::new(model.clone(), model.clone()));
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn empty_manufacturer_yields_placeholder_only() {
        let catalog = ProductCatalog::builtin();
        let options = model_options(&catalog, "").unwrap();
        assert_eq!(options, vec![SelectOption::model_placeholder()]);
        assert_eq!(options[0].label, "Select Model");
        assert_eq!(options[0].value, "");
    }

    #[test]
    fn apple_yields_placeholder_then_models_in_order() {
        let catalog = ProductCatalog::builtin();
        let options = model_options(&catalog, "Apple").unwrap();
        assert_eq!(
            values(&options),
            vec![
                "",
                "iPhone SE",
                "iPhone 12",
                "iPhone 12 Pro",
                "iPhone 13",
                "iPhone 13 Pro",
            ]
        );
    }

    #[test]
    fn samsung_keeps_the_duplicate_entry() {
        let catalog = ProductCatalog::builtin();
        let options = model_options(&catalog, "Samsung").unwrap();
        assert_eq!(options.len(), 6);
        assert_eq!(
            values(&options),
            vec![
                "",
                "Galaxy S21",
                "Galaxy S21+",
                "Galaxy Note 20",
                "Galaxy A52",
                "Galaxy A52",
            ]
        );
    }

    #[test]
    fn every_catalog_manufacturer_maps_to_placeholder_plus_models() {
        let catalog = ProductCatalog::builtin();
        for entry in catalog.manufacturers() {
            let options = model_options(&catalog, &entry.name).unwrap();
            assert_eq!(options.len(), entry.models.len() + 1);
            assert_eq!(options[0], SelectOption::model_placeholder());
            for (option, model) in options[1..].iter().zip(&entry.models) {
                assert_eq!(&option.value, model);
                assert_eq!(&option.label, model);
            }
        }
    }

    #[test]
    fn unknown_manufacturer_propagates_the_catalog_error() {
        let catalog = ProductCatalog::builtin();
        assert!(model_options(&catalog, "Fairphone").is_err());
    }

    #[test]
    fn option_labels_equal_values_for_models() {
        let catalog = ProductCatalog::builtin();
        let options = model_options(&catalog, "Google").unwrap();
        for option in &options[1..] {
            assert_eq!(option.value, option.label);
        }
    }
}
