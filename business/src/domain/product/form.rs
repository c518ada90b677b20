use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::Zero;
use uuid::Uuid;

use super::errors::{FieldError, ProductError};

pub const FIELD_NAME: &str = "name";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_CATEGORY_ID: &str = "category_id";

/// Prices are stored as `NUMERIC(12, 2)`.
const PRICE_SCALE: i64 = 2;
const PRICE_INTEGER_DIGITS: u32 = 10;

/// Raw product fields as submitted by the admin form.
///
/// Every required field is optional here so that a missing value and an
/// empty one fail the same way.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: Option<String>,
    pub price: Option<String>,
    pub details: Option<String>,
    pub category_id: Option<String>,
}

/// Product fields that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: BigDecimal,
    pub details: Option<String>,
    pub category_id: Uuid,
}

impl ProductForm {
    /// Validates every field, collecting all failures into one error.
    pub fn validate(self) -> Result<ProductFields, ProductError> {
        let mut errors = Vec::new();

        let name = match non_blank(self.name) {
            Some(name) => Some(name),
            None => {
                errors.push(FieldError::new(FIELD_NAME, "product.name_required"));
                None
            }
        };

        let price = match non_blank(self.price) {
            None => {
                errors.push(FieldError::new(FIELD_PRICE, "product.price_required"));
                None
            }
            Some(raw) => match BigDecimal::from_str(&raw)
                .map(|p| p.with_scale_round(PRICE_SCALE, RoundingMode::HalfUp))
            {
                Ok(price) if price < BigDecimal::zero() => {
                    errors.push(FieldError::new(FIELD_PRICE, "product.price_negative"));
                    None
                }
                Ok(price) if price >= price_ceiling() => {
                    errors.push(FieldError::new(FIELD_PRICE, "product.price_too_large"));
                    None
                }
                Ok(price) => Some(price),
                Err(_) => {
                    errors.push(FieldError::new(FIELD_PRICE, "product.price_invalid"));
                    None
                }
            },
        };

        let category_id = match non_blank(self.category_id) {
            None => {
                errors.push(FieldError::new(
                    FIELD_CATEGORY_ID,
                    "product.category_required",
                ));
                None
            }
            Some(raw) => match Uuid::parse_str(&raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.push(FieldError::new(
                        FIELD_CATEGORY_ID,
                        "product.category_invalid",
                    ));
                    None
                }
            },
        };

        match (name, price, category_id) {
            (Some(name), Some(price), Some(category_id)) if errors.is_empty() => {
                Ok(ProductFields {
                    name,
                    price,
                    details: non_blank(self.details),
                    category_id,
                })
            }
            _ => Err(ProductError::Validation(errors)),
        }
    }
}

/// Smallest price with more integer digits than the column holds.
fn price_ceiling() -> BigDecimal {
    BigDecimal::from(10u64.pow(PRICE_INTEGER_DIGITS))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProductForm {
        ProductForm {
            name: Some("Masala Chai".to_string()),
            price: Some("249.00".to_string()),
            details: Some("Loose leaf, 250g".to_string()),
            category_id: Some("0190f4a8-7a55-7b1c-9d2e-3f4a5b6c7d8e".to_string()),
        }
    }

    fn codes(err: ProductError) -> Vec<&'static str> {
        err.field_errors().iter().map(|e| e.code).collect()
    }

    #[test]
    fn should_accept_form_when_all_required_fields_present() {
        let fields = valid_form().validate().unwrap();

        assert_eq!(fields.name, "Masala Chai");
        assert_eq!(fields.price, BigDecimal::from_str("249.00").unwrap());
        assert_eq!(fields.details.as_deref(), Some("Loose leaf, 250g"));
    }

    #[test]
    fn should_collect_every_missing_field_when_form_is_empty() {
        let err = ProductForm::default().validate().unwrap_err();

        assert_eq!(
            codes(err),
            vec![
                "product.name_required",
                "product.price_required",
                "product.category_required"
            ]
        );
    }

    #[test]
    fn should_treat_whitespace_name_as_missing() {
        let form = ProductForm {
            name: Some("   ".to_string()),
            ..valid_form()
        };

        let err = form.validate().unwrap_err();

        assert_eq!(err.field_errors(), &[FieldError::new(FIELD_NAME, "product.name_required")]);
    }

    #[test]
    fn should_reject_negative_price() {
        let form = ProductForm {
            price: Some("-1".to_string()),
            ..valid_form()
        };

        assert_eq!(codes(form.validate().unwrap_err()), vec!["product.price_negative"]);
    }

    #[test]
    fn should_accept_zero_price() {
        let form = ProductForm {
            price: Some("0".to_string()),
            ..valid_form()
        };

        assert!(form.validate().is_ok());
    }

    #[test]
    fn should_reject_price_when_exceeding_column_precision() {
        let form = ProductForm {
            price: Some("10000000000".to_string()),
            ..valid_form()
        };

        assert_eq!(codes(form.validate().unwrap_err()), vec!["product.price_too_large"]);
    }

    #[test]
    fn should_accept_largest_price_the_column_holds() {
        let form = ProductForm {
            price: Some("9999999999.99".to_string()),
            ..valid_form()
        };

        assert!(form.validate().is_ok());
    }

    #[test]
    fn should_reject_price_when_rounding_reaches_ceiling() {
        let form = ProductForm {
            price: Some("9999999999.995".to_string()),
            ..valid_form()
        };

        assert_eq!(codes(form.validate().unwrap_err()), vec!["product.price_too_large"]);
    }

    #[test]
    fn should_round_price_to_two_decimals() {
        let form = ProductForm {
            price: Some("12.345".to_string()),
            ..valid_form()
        };

        let fields = form.validate().unwrap();

        assert_eq!(fields.price, BigDecimal::from_str("12.35").unwrap());
        assert_eq!(fields.price.to_plain_string(), "12.35");
    }

    #[test]
    fn should_reject_price_when_not_a_number() {
        let form = ProductForm {
            price: Some("twelve".to_string()),
            ..valid_form()
        };

        assert_eq!(codes(form.validate().unwrap_err()), vec!["product.price_invalid"]);
    }

    #[test]
    fn should_reject_category_when_not_a_uuid() {
        let form = ProductForm {
            category_id: Some("7".to_string()),
            ..valid_form()
        };

        assert_eq!(codes(form.validate().unwrap_err()), vec!["product.category_invalid"]);
    }

    #[test]
    fn should_drop_blank_details() {
        let form = ProductForm {
            details: Some("  ".to_string()),
            ..valid_form()
        };

        assert!(form.validate().unwrap().details.is_none());
    }
}
