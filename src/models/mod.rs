mod cart_item;
mod customization;
mod item;
mod order;
mod order_item;

pub use cart_item::CartItem;
pub use customization::{CustomizationGroup, CustomizationOption, Customizations};
pub use item::{Category, MenuItem, PLACEHOLDER_IMAGE};
pub use order::Order;
pub use order_item::OrderItem;
