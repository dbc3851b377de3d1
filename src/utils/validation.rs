use crate::utils::error::{Field, MenuError, Result, ValidationError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 必填欄位：空字串或只有空白都視為缺少
pub fn validate_required(field: Field, value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

/// 將價格文字解析為有限且非負的數字
pub fn parse_price(raw: &str) -> std::result::Result<f64, ValidationError> {
    validate_required(Field::Price, raw)?;

    let price: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidPrice(raw.to_string()))?;

    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidPrice(raw.to_string()));
    }

    // -0.0 is accepted by the comparison above; store it as plain zero
    Ok(price + 0.0)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MenuError::config(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.iter().any(|a| a.eq_ignore_ascii_case(value)) {
        return Err(MenuError::config(
            field_name,
            format!("'{}' is not one of: {}", value, allowed.join(", ")),
        ));
    }
    Ok(())
}
