use hjson_core::{Array, Object, Value};

fn parse(json: &str) -> Value {
    serde_json::from_str(json).expect("valid JSON")
}

/// Assert that a document survives parse → write byte for byte.
fn assert_verbatim(json: &str) {
    let value = parse(json);
    let written = serde_json::to_string(&value).expect("serialize failed");
    assert_eq!(written, json, "document changed on the way through");
}

// ============================================================================
// Deserialization
// ============================================================================

#[test]
fn deserialize_primitives() {
    assert_eq!(parse("null"), Value::Null);
    assert_eq!(parse("true"), Value::from(true));
    assert_eq!(parse("42"), Value::from(42));
    assert_eq!(parse("-7"), Value::from(-7));
    assert_eq!(parse(r#""hi""#), Value::from("hi"));
    assert_eq!(parse("2.5").as_double(), Ok(2.5));
}

#[test]
fn deserialize_keeps_duplicate_members() {
    let value = parse(r#"{"a":1,"a":2}"#);
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.get_int("a", 0), Ok(2));
    let all: Vec<i32> = obj.iter().map(|m| m.value().as_int().unwrap()).collect();
    assert_eq!(all, [1, 2]);
}

#[test]
fn deserialize_nested() {
    let value = parse(r#"{"list":[1,{"k":null}],"o":{}}"#);
    let obj = value.as_object().unwrap();
    let list = obj.get("list").unwrap().as_array().unwrap();
    assert_eq!(list.len(), 2);
    let inner = list.get(1).unwrap().as_object().unwrap();
    assert!(inner.get("k").unwrap().is_null());
    assert!(obj.get("o").unwrap().as_object().unwrap().is_empty());
}

#[test]
fn deserialize_typed_containers() {
    let obj: Object = serde_json::from_str(r#"{"b":1,"a":2}"#).unwrap();
    assert_eq!(obj.names().iter().collect::<Vec<_>>(), ["b", "a"]);

    let arr: Array = serde_json::from_str("[true,false]").unwrap();
    assert_eq!(arr.len(), 2);

    assert!(serde_json::from_str::<Object>("[1]").is_err());
    assert!(serde_json::from_str::<Array>("{}").is_err());
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn serialize_writes_members_in_stored_order() {
    let mut obj = Object::new();
    obj.add("z", 1).add("a", "s").add("z", false);
    let json = serde_json::to_string(&obj).unwrap();
    assert_eq!(json, r#"{"z":1,"a":"s","z":false}"#);
}

#[test]
fn serialize_numbers_by_shape() {
    let mut arr = Array::new();
    arr.add(Value::number("-3").unwrap())
        .add(Value::number("18446744073709551615").unwrap())
        .add(Value::number("0.5").unwrap())
        .add(Value::number("1e2").unwrap());
    let json = serde_json::to_string(&arr).unwrap();
    assert_eq!(json, "[-3,18446744073709551615,0.5,100.0]");
}

#[test]
fn whole_floats_stay_floats() {
    let ones = parse("[1.0]");
    assert_eq!(ones.as_array().unwrap().get(0), Ok(&Value::number("1.0").unwrap()));
    assert_eq!(serde_json::to_string(&ones).unwrap(), "[1.0]");

    // Exponent form comes back in the writer's float spelling, still non-integral.
    let hundred = parse("[1e2]");
    let element = hundred.as_array().unwrap().get(0).unwrap();
    assert!(!element.as_number().unwrap().is_integral());
    assert_eq!(serde_json::to_string(&hundred).unwrap(), "[100.0]");
}

#[test]
fn float_literals_survive_round_trip() {
    for literal in ["1.0", "-0.0", "100.0", "0.25", "6.02e23"] {
        let value = Value::number(literal).unwrap();
        let json = serde_json::to_string(&value).unwrap();
        let back = parse(&json);
        assert_eq!(
            back.as_double(),
            value.as_double(),
            "{literal} changed magnitude via {json}"
        );
        assert!(!back.as_number().unwrap().is_integral(), "{literal} became an integer");
    }
    let one = Value::number("1.0").unwrap();
    assert_eq!(parse(&serde_json::to_string(&one).unwrap()), one);
}

#[test]
fn serialize_rejects_unrepresentable_number() {
    let value = Value::number("1e400").unwrap();
    assert!(serde_json::to_string(&value).is_err());
}

#[test]
fn round_trip_fidelity() {
    assert_verbatim(r#"{"x":true,"x":"y"}"#);
    assert_verbatim(r#"[1,"two",null,{"a":[],"a":{}}]"#);
    assert_verbatim(r#"{"outer":{"k":1,"k":2,"k":3},"tail":0.25}"#);
}
