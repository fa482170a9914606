//! Field validation for product records.
//!
//! Runs before any store mutation. All violations are collected so the
//! caller can report every offending field at once.

use super::{CreateProductInput, FieldError, Product, UpdateProductInput};

pub const NAME_REQUIRED: &str = "The Name field is required.";
pub const BRAND_REQUIRED: &str = "The Brand field is required.";
pub const PRICE_REQUIRED: &str = "The Price field is required.";
pub const PRICE_NOT_POSITIVE: &str = "Price cannot be equal or less than 0";

/// Validated field values, ready to become a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub name: String,
    pub brand: String,
    pub price: i32,
}

fn check_text(errors: &mut Vec<FieldError>, field: &str, value: Option<&str>, message: &str) {
    if value.is_none_or(|v| v.trim().is_empty()) {
        errors.push(FieldError::new(field, message));
    }
}

fn check_price(errors: &mut Vec<FieldError>, price: Option<i32>) {
    match price {
        None => errors.push(FieldError::new("price", PRICE_REQUIRED)),
        Some(p) if p <= 0 => errors.push(FieldError::new("price", PRICE_NOT_POSITIVE)),
        Some(_) => {}
    }
}

/// Validate raw fields, returning every violation.
pub fn validate_fields(
    name: Option<&str>,
    brand: Option<&str>,
    price: Option<i32>,
) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    check_text(&mut errors, "name", name, NAME_REQUIRED);
    check_text(&mut errors, "brand", brand, BRAND_REQUIRED);
    check_price(&mut errors, price);

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate a create request and extract its fields.
pub fn validate_new_product(input: &CreateProductInput) -> Result<ProductFields, Vec<FieldError>> {
    validate_fields(input.name.as_deref(), input.brand.as_deref(), input.price)?;

    match (&input.name, &input.brand, input.price) {
        (Some(name), Some(brand), Some(price)) => Ok(ProductFields {
            name: name.clone(),
            brand: brand.clone(),
            price,
        }),
        // validate_fields already rejected any missing field
        _ => Err(Vec::new()),
    }
}

/// Validate a complete record (used on the merged result of an update).
pub fn validate_product(product: &Product) -> Result<(), Vec<FieldError>> {
    validate_fields(Some(&product.name), Some(&product.brand), Some(product.price))
}

/// Check only the fields an update actually supplies.
///
/// Used by the web client before sending a partial update; the service
/// still validates the merged record.
pub fn validate_changes(input: &UpdateProductInput) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if input.name.is_some() {
        check_text(&mut errors, "name", input.name.as_deref(), NAME_REQUIRED);
    }
    if input.brand.is_some() {
        check_text(&mut errors, "brand", input.brand.as_deref(), BRAND_REQUIRED);
    }
    if input.price.is_some() {
        check_price(&mut errors, input.price);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input(name: Option<&str>, brand: Option<&str>, price: Option<i32>) -> CreateProductInput {
        CreateProductInput {
            name: name.map(str::to_string),
            brand: brand.map(str::to_string),
            price,
        }
    }

    #[test]
    fn accepts_valid_product() {
        let fields = validate_new_product(&input(Some("ThinkPad T14"), Some("Lenovo"), Some(1299)))
            .expect("valid");
        assert_eq!(fields.name, "ThinkPad T14");
        assert_eq!(fields.brand, "Lenovo");
        assert_eq!(fields.price, 1299);
    }

    #[test]
    fn zero_price_is_rejected_with_message() {
        let errors = validate_new_product(&input(Some("R440"), Some("Dell"), Some(0))).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("price", PRICE_NOT_POSITIVE)]);
    }

    #[test]
    fn negative_price_is_rejected() {
        let errors = validate_new_product(&input(Some("R440"), Some("Dell"), Some(-5))).unwrap_err();
        assert_eq!(errors[0].field, "price");
    }

    #[test]
    fn reports_every_missing_field() {
        let errors = validate_new_product(&input(None, Some("   "), None)).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "brand", "price"]);
        assert_eq!(errors[2].message, PRICE_REQUIRED);
    }

    #[test]
    fn empty_name_is_rejected() {
        let errors = validate_new_product(&input(Some(""), Some("HP"), Some(10))).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("name", NAME_REQUIRED)]);
    }

    #[test]
    fn changes_check_ignores_omitted_fields() {
        assert!(validate_changes(&UpdateProductInput::default()).is_ok());

        let errors = validate_changes(&UpdateProductInput {
            brand: Some(" ".into()),
            price: Some(0),
            ..Default::default()
        })
        .unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["brand", "price"]);
    }

    proptest! {
        #[test]
        fn any_positive_price_with_text_is_valid(
            name in "[A-Za-z0-9][A-Za-z0-9 ]{0,30}",
            brand in "[A-Za-z][A-Za-z ]{0,15}",
            price in 1..=i32::MAX,
        ) {
            let fields = validate_new_product(&input(Some(&name), Some(&brand), Some(price))).unwrap();
            prop_assert_eq!(fields.price, price);
            prop_assert_eq!(fields.name, name);
        }

        #[test]
        fn any_non_positive_price_is_invalid(price in i32::MIN..=0) {
            let errors = validate_new_product(&input(Some("x"), Some("y"), Some(price))).unwrap_err();
            prop_assert_eq!(errors.len(), 1);
            prop_assert_eq!(errors[0].message.as_str(), PRICE_NOT_POSITIVE);
        }
    }
}
