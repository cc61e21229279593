use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{
    CategoryId, ProductDescription, ProductName, ProductQuantity, TypeConstraintError,
};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{ProductListQuery, SortField, SortOrder};

/// A JSON scalar that may arrive either as a number or as text.
///
/// Browser forms commonly submit numbers as strings, so quantities and
/// identifiers accept both.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ScalarInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ScalarInput {
    /// `true` for text that is empty after trimming.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }

    /// The value as a whole number, if it is one.
    pub fn as_whole_number(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Float(value) => whole_f64(*value),
            Self::Text(text) => {
                let text = text.trim();
                text.parse::<i64>()
                    .ok()
                    .or_else(|| text.parse::<f64>().ok().and_then(whole_f64))
            }
        }
    }
}

fn whole_f64(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

impl Display for ScalarInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Body of a product creation request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductForm {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
    #[validate(required)]
    pub quantity: Option<ScalarInput>,
    #[validate(required, length(min = 1))]
    pub categories: Option<Vec<ScalarInput>>,
}

/// Creation request with every field present and well-formed.
///
/// Category references stay raw: they are checked one at a time against the
/// category store, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductPayload {
    pub name: ProductName,
    pub description: ProductDescription,
    pub quantity: ProductQuantity,
    pub categories: Vec<ScalarInput>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CreateProductFormError {
    #[error("Create product form is missing required fields: {0}")]
    MissingField(String),
    #[error("Create product form contains an invalid quantity: {0}")]
    InvalidQuantity(String),
}

impl From<ValidationErrors> for CreateProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::MissingField(value.to_string())
    }
}

impl From<TypeConstraintError> for CreateProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::MissingField(value.to_string())
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, CreateProductFormError> {
    value.ok_or_else(|| CreateProductFormError::MissingField(field.to_string()))
}

fn parse_quantity(value: &ScalarInput) -> Result<ProductQuantity, CreateProductFormError> {
    let invalid = || CreateProductFormError::InvalidQuantity(value.to_string());
    let whole = value.as_whole_number().ok_or_else(invalid)?;
    let whole = i32::try_from(whole).map_err(|_| invalid())?;
    ProductQuantity::new(whole).map_err(|_| invalid())
}

impl TryFrom<CreateProductForm> for CreateProductPayload {
    type Error = CreateProductFormError;

    fn try_from(value: CreateProductForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let name = ProductName::new(required(value.name, "name")?)?;
        let description = ProductDescription::new(required(value.description, "description")?)?;
        let quantity = required(value.quantity, "quantity")?;
        if quantity.is_blank() {
            return Err(CreateProductFormError::MissingField("quantity".to_string()));
        }
        let categories = required(value.categories, "categories")?;

        Ok(Self {
            name,
            description,
            quantity: parse_quantity(&quantity)?,
            categories,
        })
    }
}

/// Query string accepted by the product listing endpoint.
///
/// Every field is kept as raw text so that malformed values fall back to
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    /// Comma separated category identifiers.
    pub categories: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Reads the leading integer of `value` the way browsers' `parseInt` does:
/// surrounding whitespace and trailing garbage are ignored.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude = rest[..digits_len].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn positive_or(value: Option<&str>, default: usize) -> usize {
    value
        .and_then(parse_leading_int)
        .filter(|v| *v > 0)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

impl ProductListParams {
    /// Requested page, 1 when missing or not a positive number.
    pub fn page(&self) -> usize {
        positive_or(self.page.as_deref(), 1)
    }

    /// Requested page size, 10 when missing or not a positive number.
    pub fn limit(&self) -> usize {
        positive_or(self.limit.as_deref(), DEFAULT_ITEMS_PER_PAGE)
    }

    /// Category filter with malformed identifiers dropped. `None` when no
    /// category was asked for.
    pub fn category_ids(&self) -> Option<Vec<CategoryId>> {
        let raw = self.categories.as_deref()?;
        let tokens: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return None;
        }
        let mut ids = Vec::with_capacity(tokens.len());
        for token in tokens {
            match CategoryId::parse(token) {
                Ok(id) if !ids.contains(&id) => ids.push(id),
                Ok(_) => {}
                Err(_) => log::debug!("Ignoring malformed category filter {token:?}"),
            }
        }
        Some(ids)
    }

    pub fn into_query(self) -> ProductListQuery {
        let mut query = ProductListQuery::default()
            .sort(
                SortField::parse(self.sort_by.as_deref()),
                SortOrder::parse(self.sort_order.as_deref()),
            )
            .paginate(self.page(), self.limit());

        if let Some(categories) = self.category_ids() {
            query = query.categories(categories);
        }
        if let Some(search) = self.search {
            query = query.search(search);
        }
        query
    }
}
