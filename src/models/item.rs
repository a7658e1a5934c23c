use crate::core::error::Error;
use crate::models::{CustomizationGroup, Customizations};
use crate::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed set of menu sections
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Coffee,
    Tea,
    Pastries,
    Sandwiches,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Category; 4] = [
        Category::Coffee,
        Category::Tea,
        Category::Pastries,
        Category::Sandwiches,
    ];

    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Coffee => "Coffee",
            Category::Tea => "Tea",
            Category::Pastries => "Pastries",
            Category::Sandwiches => "Sandwiches",
        }
    }

    /// Parses a category name, ignoring case and surrounding whitespace
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Represents an entry of the cafe's menu
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique identifier for the item
    pub id: String,
    /// Name of the item
    pub name: String,
    /// Customer-facing description
    pub description: String,
    /// Base price before customizations
    pub price: Decimal,
    /// Menu section
    pub category: Category,
    /// Image reference shown next to the item
    pub image_url: String,
    /// Optional customization groups (e.g., size, milk)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customizations: Vec<CustomizationGroup>,
}

/// Placeholder image used when none is given
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/300x200.png";

impl MenuItem {
    /// Creates a new MenuItem with required fields
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            category,
            image_url: PLACEHOLDER_IMAGE.to_string(),
            customizations: Vec::new(),
        }
    }

    /// Sets the description of the item
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the image reference of the item
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Adds a customization group
    pub fn with_customization(mut self, group: CustomizationGroup) -> Self {
        self.customizations.push(group);
        self
    }

    /// Looks up a customization group by name
    pub fn customization(&self, name: &str) -> Option<&CustomizationGroup> {
        self.customizations.iter().find(|g| g.name == name)
    }

    /// Prices this item for a selection of customization options.
    ///
    /// Every selected group must belong to the item and every selected option
    /// must belong to its group. Groups left out of the selection contribute
    /// nothing to the price.
    pub fn price_with(&self, selections: &Customizations) -> Result<Decimal> {
        let mut price = self.price;
        for (group_name, option_name) in selections {
            let group = self.customization(group_name).ok_or_else(|| {
                Error::InvalidData(format!(
                    "{} has no customization group {}",
                    self.name, group_name
                ))
            })?;
            let option = group.option(option_name).ok_or_else(|| {
                Error::InvalidData(format!(
                    "{} is not an option of {} for {}",
                    option_name, group_name, self.name
                ))
            })?;
            price += option.price_modifier;
        }
        Ok(price)
    }

    /// Checks the fields the menu screen requires
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidData("Menu item name is required".into()));
        }
        if self.price.is_sign_negative() {
            return Err(Error::InvalidData(format!(
                "Price of {} cannot be negative",
                self.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CustomizationOption;

    fn latte() -> MenuItem {
        MenuItem::new("2", "Caramel Latte", Decimal::new(350, 0), Category::Coffee)
            .with_customization(CustomizationGroup::new(
                "Size",
                vec![
                    CustomizationOption::new("Small", Decimal::ZERO),
                    CustomizationOption::new("Large", Decimal::new(80, 0)),
                ],
            ))
            .with_customization(CustomizationGroup::new(
                "Milk",
                vec![
                    CustomizationOption::new("Whole Milk", Decimal::ZERO),
                    CustomizationOption::new("Oat Milk", Decimal::new(60, 0)),
                ],
            ))
    }

    #[test]
    fn test_menu_item_builder() {
        let item = MenuItem::new("1", "Classic Espresso", Decimal::new(250, 0), Category::Coffee)
            .with_description("A rich shot")
            .with_image_url("https://example.com/espresso.png");

        assert_eq!(item.id, "1");
        assert_eq!(item.description, "A rich shot");
        assert_eq!(item.image_url, "https://example.com/espresso.png");
        assert!(item.customizations.is_empty());
    }

    #[test]
    fn test_price_with_selections() {
        let item = latte();
        let mut selections = Customizations::new();
        assert_eq!(item.price_with(&selections).unwrap(), Decimal::new(350, 0));

        selections.insert("Size".into(), "Large".into());
        selections.insert("Milk".into(), "Oat Milk".into());
        assert_eq!(item.price_with(&selections).unwrap(), Decimal::new(490, 0));
    }

    #[test]
    fn test_price_with_unknown_option() {
        let item = latte();
        let mut selections = Customizations::new();
        selections.insert("Size".into(), "Venti".into());
        assert!(matches!(
            item.price_with(&selections),
            Err(Error::InvalidData(_))
        ));

        let mut selections = Customizations::new();
        selections.insert("Syrup".into(), "Vanilla".into());
        assert!(item.price_with(&selections).is_err());
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!(Category::from_str(" pastries "), Some(Category::Pastries));
        assert_eq!(Category::from_str("TEA"), Some(Category::Tea));
        assert_eq!(Category::from_str("Soup"), None);
    }

    #[test]
    fn test_validate() {
        assert!(latte().validate().is_ok());

        let unnamed = MenuItem::new("x", "  ", Decimal::ONE, Category::Tea);
        assert!(unnamed.validate().is_err());

        let negative = MenuItem::new("x", "Refund", Decimal::new(-1, 0), Category::Tea);
        assert!(negative.validate().is_err());
    }
}
