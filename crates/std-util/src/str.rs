//! Identifier case conversion.

use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

pub fn upper_snake_case(src: &str) -> String {
    src.to_shouty_snake_case()
}

pub fn camel_case(src: &str) -> String {
    src.to_lower_camel_case()
}

pub fn upper_camel_case(src: &str) -> String {
    src.to_upper_camel_case()
}

/// ASCII case-insensitive equality, the comparison used for identifier
/// lookups.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_member_names() {
        assert_eq!(snake_case("CustomerId"), "customer_id");
        assert_eq!(upper_snake_case("CustomerId"), "CUSTOMER_ID");
        assert_eq!(camel_case("CustomerId"), "customerId");
        assert_eq!(upper_camel_case("customer_id"), "CustomerId");
    }

    #[test]
    fn compares_ignoring_case() {
        assert!(eq_ignore_case("OrderDate", "orderdate"));
        assert!(!eq_ignore_case("OrderDate", "OrderDates"));
    }
}
