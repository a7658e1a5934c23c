use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Chosen option per customization group, keyed by group name
pub type Customizations = BTreeMap<String, String>;

/// One priced choice inside a customization group
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationOption {
    /// Display name of the option (e.g., "Oat Milk")
    pub name: String,
    /// Amount added to the base price when selected; may be negative
    pub price_modifier: Decimal,
}

impl CustomizationOption {
    /// Creates a new CustomizationOption
    pub fn new(name: impl Into<String>, price_modifier: Decimal) -> Self {
        Self {
            name: name.into(),
            price_modifier,
        }
    }
}

/// A named set of mutually exclusive options (e.g., "Size")
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CustomizationGroup {
    pub name: String,
    pub options: Vec<CustomizationOption>,
}

impl CustomizationGroup {
    /// Creates a new CustomizationGroup
    pub fn new(name: impl Into<String>, options: Vec<CustomizationOption>) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    /// Looks up an option by name
    pub fn option(&self, name: &str) -> Option<&CustomizationOption> {
        self.options.iter().find(|o| o.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_option_lookup() {
        let group = CustomizationGroup::new(
            "Size",
            vec![
                CustomizationOption::new("Small", Decimal::ZERO),
                CustomizationOption::new("Large", Decimal::new(40, 0)),
            ],
        );

        assert_eq!(
            group.option("Large").map(|o| o.price_modifier),
            Some(Decimal::new(40, 0))
        );
        assert!(group.option("Venti").is_none());
    }
}
