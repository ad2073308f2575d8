use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product category
///
/// A closed enumeration; every product belongs to exactly one member.
/// The wire form is the variant name (`"FOOD"`, `"TOOLS"`, ...) while the
/// database stores the lowercase value of the `product_category` enum type.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "product_category")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[default]
    #[sea_orm(string_value = "unknown")]
    Unknown,
    #[sea_orm(string_value = "cloths")]
    Cloths,
    #[sea_orm(string_value = "food")]
    Food,
    #[sea_orm(string_value = "housewares")]
    Housewares,
    #[sea_orm(string_value = "automotive")]
    Automotive,
    #[sea_orm(string_value = "tools")]
    Tools,
}

/// Product entity - a single catalog item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by the storage layer on creation
    pub id: i32,
    /// Product name (free text, not unique)
    pub name: String,
    /// Product description
    pub description: String,
    /// Price in cents (for precision)
    pub price: i64,
    /// Whether the product is available for purchase
    pub available: bool,
    /// Product category
    pub category: Category,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in cents
    #[validate(range(min = 0))]
    pub price: i64,
    pub available: bool,
    #[serde(default)]
    pub category: Category,
}

/// DTO for updating an existing product
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price: Option<i64>,
    pub available: Option<bool>,
    pub category: Option<Category>,
}

/// Query filters for listing products
///
/// Every supplied field becomes one equality criterion; criteria are
/// combined with logical AND. An empty filter selects everything.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProductFilter {
    /// Exact-match product name
    pub name: Option<String>,
    /// Filter by category
    pub category: Option<Category>,
    /// Filter by availability
    pub available: Option<bool>,
}

impl Product {
    /// Build a product from its create DTO with a storage-assigned id
    pub fn new(id: i32, input: CreateProduct) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            available: input.available,
            category: input.category,
        }
    }

    /// Apply updates from UpdateProduct DTO
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
    }
}
