use chrono::{TimeZone, Utc};

use super::{LogicalType, ScalarValue, Timestamp};

#[test]
fn logical_type_parses_case_insensitively() {
    assert_eq!("INTEGER".parse::<LogicalType>(), Ok(LogicalType::Integer));
    assert_eq!("Integer".parse::<LogicalType>(), Ok(LogicalType::Integer));
    assert_eq!("varchar".parse::<LogicalType>(), Ok(LogicalType::String));
    assert_eq!(" bigdecimal ".parse::<LogicalType>(), Ok(LogicalType::BigDecimal));
    assert!("geometry".parse::<LogicalType>().is_err());
    assert!("".parse::<LogicalType>().is_err());
}

#[test]
fn aliases_resolve_to_their_types() {
    for (alias, ty) in LogicalType::ALIASES {
        assert_eq!(LogicalType::from_name(alias), Some(ty));
        assert_eq!(LogicalType::from_name(&alias.to_uppercase()), Some(ty));
    }
}

#[test]
fn logical_type_names_roundtrip() {
    for ty in LogicalType::ALL {
        assert_eq!(ty.as_str().parse::<LogicalType>(), Ok(ty));
        assert_eq!(ty.to_string(), ty.as_str());
    }
}

#[test]
fn type_name_reports_runtime_variant() {
    assert_eq!(ScalarValue::from("x").type_name(), "String");
    assert_eq!(ScalarValue::Integer(1).type_name(), "Integer");
    assert_eq!(ScalarValue::Char(65).type_name(), "Character");
    assert_eq!(ScalarValue::Null.type_name(), "Null");
}

#[test]
fn option_converts_to_null() {
    assert_eq!(ScalarValue::from(None::<i32>), ScalarValue::Null);
    assert_eq!(ScalarValue::from(Some(3)), ScalarValue::Integer(3));
}

#[test]
fn timestamp_keeps_nanos_through_chrono() {
    let dt = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap()
        + chrono::Duration::nanoseconds(123_456_789);
    let ts = Timestamp::from_datetime(&dt);

    assert_eq!(ts.nanos, 123_456_789);
    assert_eq!(ts.millis % 1000, 123);
    assert_eq!(ts.to_datetime(), Some(dt));
}

#[test]
fn timestamp_rejects_negative_nanos() {
    assert_eq!(Timestamp::new(0, -1).to_datetime(), None);
}
