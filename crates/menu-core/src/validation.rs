//! Write-side validation for menu item and category payloads.
//!
//! Menu item payloads arrive loosely typed so that presence, type, and
//! domain failures of every field can be reported in a single response.
//! Fields are always checked in the same order: `title`, `price`, `stock`,
//! `category_id`.

use std::fmt;

use menu_shared::constants::{MAX_TITLE_LENGTH, PRICE_DECIMAL_PLACES, PRICE_MAX_DIGITS};
use menu_shared::config::ValidationSettings;
use menu_shared::{EntityId, ValidationStrategy};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Category, MenuItem, NewMenuItem};

/// A single failing field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, code: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            code: code.to_string(),
            message: message.into(),
        }
    }

    fn required(field: &str) -> Self {
        Self::new(field, "required", "This field is required.")
    }
}

/// Ordered collection of field failures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn single(error: FieldError) -> Self {
        Self { errors: vec![error] }
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Converts `validator` derive output, ordering fields as listed in `field_order`.
    pub fn from_validator(errors: &validator::ValidationErrors, field_order: &[&str]) -> Self {
        let mut report = Self::default();
        let field_errors = errors.field_errors();
        let mut fields: Vec<_> = field_errors.iter().collect();
        fields.sort_by_key(|(name, _)| {
            let name: &str = name;
            field_order
                .iter()
                .position(|f| *f == name)
                .unwrap_or(field_order.len())
        });

        for (name, errs) in fields {
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", err.code));
                report.push(FieldError::new(name, &err.code, message));
            }
        }
        report
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Menu item write payload before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMenuItem {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub stock: Option<Value>,
    /// Accepted as an alternative spelling of `stock`.
    #[serde(default)]
    pub inventory: Option<Value>,
    #[serde(default)]
    pub category_id: Option<Value>,
}

impl RawMenuItem {
    /// Category id if the payload carries a well-formed one.
    pub fn category_id(&self) -> Option<EntityId> {
        self.category_id
            .as_ref()
            .and_then(|v| parse_integer(v).ok())
            .and_then(|id| EntityId::try_from(id).ok())
    }

    fn stock_value(&self) -> Option<&Value> {
        self.stock.as_ref().or(self.inventory.as_ref())
    }

    /// Fills every missing field from the stored record (partial update).
    pub fn merged_over(self, existing: &MenuItem) -> Self {
        let has_stock = self.stock.is_some() || self.inventory.is_some();
        Self {
            title: self
                .title
                .or_else(|| Some(Value::String(existing.title.clone()))),
            price: self
                .price
                .or_else(|| Some(Value::String(existing.price.to_string()))),
            stock: if has_stock {
                self.stock
            } else {
                Some(Value::from(existing.inventory))
            },
            inventory: self.inventory,
            category_id: self
                .category_id
                .or_else(|| Some(Value::from(existing.category_id()))),
        }
    }
}

/// Validates menu item payloads using the configured strategy
#[derive(Debug, Clone, Copy)]
pub struct MenuItemValidator {
    strategy: ValidationStrategy,
    min_price: Decimal,
}

impl MenuItemValidator {
    pub fn new(settings: ValidationSettings) -> Self {
        Self {
            strategy: settings.strategy,
            min_price: settings.min_price,
        }
    }

    pub fn strategy(&self) -> ValidationStrategy {
        self.strategy
    }

    /// Validates `raw`. `category` is the record the payload's `category_id`
    /// resolved to, if any.
    pub fn validate(
        &self,
        raw: &RawMenuItem,
        category: Option<&Category>,
    ) -> Result<NewMenuItem, ValidationReport> {
        let mut report = ValidationReport::default();

        let title = record(&mut report, check_title(raw.title.as_ref()));
        if self.should_stop(&report) {
            return Err(report);
        }

        let price = record(&mut report, check_price(raw.price.as_ref(), self.min_price));
        if self.should_stop(&report) {
            return Err(report);
        }

        let inventory = record(&mut report, check_stock(raw.stock_value()));
        if self.should_stop(&report) {
            return Err(report);
        }

        let category_id = record(
            &mut report,
            check_category(raw.category_id.as_ref(), category),
        );

        match (title, price, inventory, category_id) {
            (Some(title), Some(price), Some(inventory), Some(category_id)) if report.is_empty() => {
                Ok(NewMenuItem {
                    title,
                    price,
                    inventory,
                    category_id,
                })
            }
            _ => Err(report),
        }
    }

    fn should_stop(&self, report: &ValidationReport) -> bool {
        self.strategy == ValidationStrategy::FailFast && !report.is_empty()
    }
}

fn record<T>(report: &mut ValidationReport, result: Result<T, FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            report.push(error);
            None
        }
    }
}

fn check_title(value: Option<&Value>) -> Result<String, FieldError> {
    let title = match value {
        None => return Err(FieldError::required("title")),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => return Err(FieldError::new("title", "invalid", "Not a valid string.")),
    };

    if title.is_empty() {
        return Err(FieldError::new("title", "blank", "This field may not be blank."));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(FieldError::new(
            "title",
            "max_length",
            format!("Ensure this field has no more than {MAX_TITLE_LENGTH} characters."),
        ));
    }
    Ok(title)
}

fn check_price(value: Option<&Value>, min_price: Decimal) -> Result<Decimal, FieldError> {
    let value = value.ok_or_else(|| FieldError::required("price"))?;
    let price = parse_decimal(value)
        .ok_or_else(|| FieldError::new("price", "invalid", "A valid number is required."))?;

    let normalized = price.normalize();
    if normalized.scale() > PRICE_DECIMAL_PLACES {
        return Err(FieldError::new(
            "price",
            "max_decimal_places",
            format!("Ensure that there are no more than {PRICE_DECIMAL_PLACES} decimal places."),
        ));
    }
    let max_whole = Decimal::from(10_i64.pow(PRICE_MAX_DIGITS - PRICE_DECIMAL_PLACES));
    if normalized.abs() >= max_whole {
        return Err(FieldError::new(
            "price",
            "max_digits",
            format!("Ensure that there are no more than {PRICE_MAX_DIGITS} digits in total."),
        ));
    }
    if price < min_price {
        return Err(FieldError::new(
            "price",
            "min_value",
            format!("Ensure this value is greater than or equal to {min_price}."),
        ));
    }
    Ok(price.round_dp(PRICE_DECIMAL_PLACES))
}

fn check_stock(value: Option<&Value>) -> Result<i32, FieldError> {
    let value = value.ok_or_else(|| FieldError::required("stock"))?;
    let stock = parse_integer(value)
        .map_err(|_| FieldError::new("stock", "invalid", "A valid integer is required."))?;

    if stock < 0 {
        return Err(FieldError::new(
            "stock",
            "min_value",
            "Ensure this value is greater than or equal to 0.",
        ));
    }
    i32::try_from(stock).map_err(|_| {
        FieldError::new(
            "stock",
            "max_value",
            format!("Ensure this value is less than or equal to {}.", i32::MAX),
        )
    })
}

fn check_category(
    value: Option<&Value>,
    category: Option<&Category>,
) -> Result<EntityId, FieldError> {
    let value = value.ok_or_else(|| FieldError::required("category_id"))?;
    let id = parse_integer(value)
        .ok()
        .and_then(|id| EntityId::try_from(id).ok())
        .ok_or_else(|| FieldError::new("category_id", "invalid", "A valid integer is required."))?;

    match category {
        Some(category) if category.id == id => Ok(id),
        _ => Err(FieldError::new(
            "category_id",
            "does_not_exist",
            format!("Invalid pk \"{id}\" - object does not exist."),
        )),
    }
}

fn parse_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => n.to_string().parse().ok(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_integer(value: &Value) -> Result<i64, ()> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .ok_or(()),
        Value::String(s) => s.trim().parse().map_err(|_| ()),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lunch() -> Category {
        Category {
            id: 1,
            slug: "lunch".to_string(),
            title: "Lunch".to_string(),
        }
    }

    fn raw(value: Value) -> RawMenuItem {
        serde_json::from_value(value).unwrap()
    }

    fn validator(strategy: ValidationStrategy) -> MenuItemValidator {
        MenuItemValidator::new(ValidationSettings {
            strategy,
            min_price: Decimal::new(200, 2),
        })
    }

    #[test]
    fn test_valid_payload() {
        let payload = raw(json!({"title": "Bruschetta", "price": "5.50", "stock": 20, "category_id": 1}));
        let item = validator(ValidationStrategy::CollectAll)
            .validate(&payload, Some(&lunch()))
            .unwrap();
        assert_eq!(item.title, "Bruschetta");
        assert_eq!(item.price, Decimal::new(550, 2));
        assert_eq!(item.inventory, 20);
        assert_eq!(item.category_id, 1);
    }

    #[test]
    fn test_inventory_alias_and_numeric_price() {
        let payload = raw(json!({"title": "Pasta", "price": 12.5, "inventory": "3", "category_id": "1"}));
        let item = validator(ValidationStrategy::CollectAll)
            .validate(&payload, Some(&lunch()))
            .unwrap();
        assert_eq!(item.price, Decimal::new(1250, 2));
        assert_eq!(item.inventory, 3);
    }

    #[test]
    fn test_collect_all_reports_price_and_stock_together() {
        let payload = raw(json!({"title": "Soup", "price": "1.00", "stock": -1, "category_id": 1}));
        let report = validator(ValidationStrategy::CollectAll)
            .validate(&payload, Some(&lunch()))
            .unwrap_err();
        let fields: Vec<&str> = report.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["price", "stock"]);
        assert_eq!(report.errors()[0].code, "min_value");
        assert_eq!(report.errors()[1].code, "min_value");
    }

    #[test]
    fn test_fail_fast_reports_first_failure_only() {
        let payload = raw(json!({"title": "Soup", "price": "1.00", "stock": -1, "category_id": 1}));
        let report = validator(ValidationStrategy::FailFast)
            .validate(&payload, Some(&lunch()))
            .unwrap_err();
        assert_eq!(report.len(), 1);
        assert!(report.has_field("price"));
    }

    #[test]
    fn test_missing_fields_are_required() {
        let report = validator(ValidationStrategy::CollectAll)
            .validate(&RawMenuItem::default(), None)
            .unwrap_err();
        assert_eq!(report.len(), 4);
        assert!(report.errors().iter().all(|e| e.code == "required"));
    }

    #[test]
    fn test_price_shape_rules() {
        let v = validator(ValidationStrategy::CollectAll);
        let too_precise = raw(json!({"title": "A", "price": "5.555", "stock": 1, "category_id": 1}));
        let report = v.validate(&too_precise, Some(&lunch())).unwrap_err();
        assert_eq!(report.errors()[0].code, "max_decimal_places");

        let too_large = raw(json!({"title": "A", "price": "10000", "stock": 1, "category_id": 1}));
        let report = v.validate(&too_large, Some(&lunch())).unwrap_err();
        assert_eq!(report.errors()[0].code, "max_digits");

        let not_a_number = raw(json!({"title": "A", "price": "cheap", "stock": 1, "category_id": 1}));
        let report = v.validate(&not_a_number, Some(&lunch())).unwrap_err();
        assert_eq!(report.errors()[0].code, "invalid");
    }

    #[test]
    fn test_unknown_category() {
        let payload = raw(json!({"title": "A", "price": "5", "stock": 1, "category_id": 9}));
        let report = validator(ValidationStrategy::CollectAll)
            .validate(&payload, None)
            .unwrap_err();
        assert_eq!(report.errors()[0].field, "category_id");
        assert_eq!(report.errors()[0].code, "does_not_exist");
    }

    #[test]
    fn test_merged_over_keeps_stored_values() {
        let existing = MenuItem {
            id: 4,
            title: "Lemon Cake".to_string(),
            price: Decimal::new(650, 2),
            inventory: 7,
            category: lunch(),
        };
        let merged = raw(json!({"price": "7.00"})).merged_over(&existing);
        let item = validator(ValidationStrategy::CollectAll)
            .validate(&merged, Some(&lunch()))
            .unwrap();
        assert_eq!(item.title, "Lemon Cake");
        assert_eq!(item.price, Decimal::new(700, 2));
        assert_eq!(item.inventory, 7);
        assert_eq!(item.category_id, 1);
    }
}
