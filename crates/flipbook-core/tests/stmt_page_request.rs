use flipbook_core::stmt::{PageRequest, Params, Value};

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

#[test]
fn detects_i64_values() {
    let mut params = Params::new();
    params.insert("page", 3i64).insert("size", 5i64);

    let request = PageRequest::from_params(&params).unwrap();
    assert_eq!(request.page(), 3);
    assert_eq!(request.size(), 5);
}

#[test]
fn detects_i32_values() {
    let mut params = Params::new();
    params.insert("page", 2i32).insert("size", 10i32);

    let request = PageRequest::from_params(&params).unwrap();
    assert_eq!(request.page(), 2);
    assert_eq!(request.size(), 10);
}

#[test]
fn extra_keys_are_ignored() {
    let mut params = Params::new();
    params
        .insert("name", "zl")
        .insert("page", 1i64)
        .insert("age", 21i64)
        .insert("size", 2i64);

    assert!(PageRequest::from_params(&params).is_some());
}

// ---------------------------------------------------------------------------
// Missing keys
// ---------------------------------------------------------------------------

#[test]
fn empty_bag() {
    assert_eq!(PageRequest::from_params(&Params::new()), None);
}

#[test]
fn page_without_size() {
    let mut params = Params::new();
    params.insert("page", 1i64);

    assert_eq!(PageRequest::from_params(&params), None);
}

#[test]
fn size_without_page() {
    let mut params = Params::new();
    params.insert("size", 10i64);

    assert_eq!(PageRequest::from_params(&params), None);
}

// ---------------------------------------------------------------------------
// Wrong-typed values
// ---------------------------------------------------------------------------

#[test]
fn string_page_is_not_pagination() {
    let mut params = Params::new();
    params.insert("page", "1").insert("size", 10i64);

    assert_eq!(PageRequest::from_params(&params), None);
}

#[test]
fn bool_size_is_not_pagination() {
    let mut params = Params::new();
    params.insert("page", 1i64).insert("size", true);

    assert_eq!(PageRequest::from_params(&params), None);
}

#[test]
fn null_values_are_not_pagination() {
    let mut params = Params::new();
    params.insert("page", Value::Null).insert("size", Value::Null);

    assert_eq!(PageRequest::from_params(&params), None);
}

// ---------------------------------------------------------------------------
// Non-positive values fail closed
// ---------------------------------------------------------------------------

#[test]
fn zero_page() {
    assert_eq!(PageRequest::new(0, 10), None);
}

#[test]
fn zero_size() {
    assert_eq!(PageRequest::new(1, 0), None);
}

#[test]
fn negative_page() {
    assert_eq!(PageRequest::new(-3, 10), None);
}

#[test]
fn negative_size() {
    assert_eq!(PageRequest::new(1, -5), None);
}

#[test]
fn non_positive_params_fail_closed() {
    let mut params = Params::new();
    params.insert("page", 0i64).insert("size", -5i64);

    assert_eq!(PageRequest::from_params(&params), None);
}
