//! Form field constraints, checked client-side before anything reaches
//! the backend. Each function returns the message to show inline.

pub fn document_number(value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.len() < 6 {
        return Err("Document number must be at least 6 digits".to_string());
    }
    if value.len() > 12 {
        return Err("Document number cannot exceed 12 digits".to_string());
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err("Document number must contain only digits".to_string());
    }
    Ok(())
}

pub fn login_password(value: &str) -> Result<(), String> {
    if value.len() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    Ok(())
}

pub fn new_password(value: &str) -> Result<(), String> {
    if value.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    Ok(())
}

pub fn full_name(value: &str) -> Result<(), String> {
    if value.trim().len() < 3 {
        return Err("Name must be at least 3 characters".to_string());
    }
    Ok(())
}

pub fn email(value: &str) -> Result<(), String> {
    let value = value.trim();
    let valid = value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if valid {
        Ok(())
    } else {
        Err("Invalid email address".to_string())
    }
}

pub fn phone_number(value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.len() < 7 {
        return Err("Phone number must be at least 7 digits".to_string());
    }
    if value.len() > 10 {
        return Err("Phone number cannot exceed 10 digits".to_string());
    }
    Ok(())
}

pub fn concept(value: &str) -> Result<(), String> {
    if value.trim().len() < 3 {
        return Err("Concept must be at least 3 characters".to_string());
    }
    Ok(())
}

const MAX_AMOUNT: f64 = 999_999_999_999.0;

pub fn amount(value: f64) -> Result<(), String> {
    if !(value > 0.0) {
        return Err("Amount must be positive".to_string());
    }
    if value > MAX_AMOUNT {
        return Err("Amount is too large".to_string());
    }
    Ok(())
}

/// Parse a form input into a validated amount.
pub fn parse_amount(raw: &str) -> Result<f64, String> {
    let parsed = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| "Amount must be a number".to_string())?;
    amount(parsed)?;
    Ok(parsed)
}

pub fn taxable_year(year: i32) -> Result<(), String> {
    if (2000..=2100).contains(&year) {
        Ok(())
    } else {
        Err("Year must be between 2000 and 2100".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_numbers() {
        assert!(document_number("10203040").is_ok());
        assert!(document_number("  10203040  ").is_ok());
        assert!(document_number("12345").is_err());
        assert!(document_number("1234567890123").is_err());
        assert!(document_number("12345a").is_err());
    }

    #[test]
    fn passwords() {
        assert!(login_password("secret").is_ok());
        assert!(login_password("short").is_err());
        assert!(new_password("12345678").is_ok());
        assert!(new_password("1234567").is_err());
    }

    #[test]
    fn emails() {
        assert!(email("ana@example.com").is_ok());
        assert!(email("ana@example").is_err());
        assert!(email("@example.com").is_err());
        assert!(email("not-an-email").is_err());
    }

    #[test]
    fn amounts() {
        assert_eq!(parse_amount("350000000").unwrap(), 350_000_000.0);
        assert_eq!(parse_amount(" 12.5 ").unwrap(), 12.5);
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-10").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("9999999999999").is_err());
    }

    #[test]
    fn years() {
        assert!(taxable_year(2024).is_ok());
        assert!(taxable_year(1999).is_err());
        assert!(taxable_year(2101).is_err());
    }
}
