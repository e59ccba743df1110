//! An enumeration of a subset of JSON values:
//! natural numbers, arrays, and objects whose keys are always `a0`, `a1`, ...

use {
    feat::{
        leaf::Naturals,
        list::{List, list_of},
        product,
        sum::Sum,
    },
    num_bigint::BigUint,
    serde_json::{Map, Value},
    std::sync::Arc,
};

/// Every JSON value built from natural numbers, arrays and objects.
/// A natural `n` has size `n + 1`;
/// an array or object of `k` values has size `2 + k + (sum of their sizes)`.
#[inline]
#[must_use]
pub fn json() -> Arc<Sum<Value>> {
    Sum::recursive(|this| {
        let arrays = list_of(this);
        Sum::empty()
            .with(product::map(Naturals, Value::from))
            .with(product::map(Arc::clone(&arrays), |list| {
                Value::Array(list.to_vec())
            }))
            .with(product::map(arrays, |list| Value::Object(object(&list))))
    })
}

/// Key each value by its position: `a0`, `a1`, ...
#[inline]
#[must_use]
pub fn object(values: &List<Value>) -> Map<String, Value> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| (format!("a{i}"), value.clone()))
        .collect()
}

/// How deeply arrays and objects are nested: 0 for a number.
#[inline]
#[must_use]
pub fn depth(value: &Value) -> usize {
    let deepest = match *value {
        Value::Array(ref values) => values.iter().map(depth).max(),
        Value::Object(ref map) => map.values().map(depth).max(),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => return 0,
    };
    deepest.map_or(1, |d| d + 1)
}

/// Parse an index either in decimal (`1218021838232770`)
/// or as a power (`10^100`).
/// # Errors
/// If neither form matches.
#[inline]
pub fn parse_index(s: &str) -> Result<BigUint, String> {
    let parse = |digits: &str| {
        digits
            .trim()
            .parse::<BigUint>()
            .map_err(|e| format!("invalid index {digits:?}: {e}"))
    };
    if let Some((base, exponent)) = s.split_once('^') {
        let exponent = exponent
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid exponent {exponent:?}: {e}"))?;
        Ok(parse(base)?.pow(exponent))
    } else {
        parse(s)
    }
}

#[cfg(test)]
mod test {
    use {
        super::*,
        feat::{count::Count as _, enumerate::Enumerate as _, flat},
        serde_json::json,
    };

    #[test]
    fn small_cardinalities() {
        let json = json();
        let cards: Vec<BigUint> = (0..12).map(|size| json.card(size)).collect();
        let expected: Vec<BigUint> = [0_u16, 1, 3, 1, 3, 7, 5, 19, 39, 53, 167, 327]
            .into_iter()
            .map(BigUint::from)
            .collect();
        let () = pretty_assertions::assert_eq!(expected, cards);
    }

    #[test]
    fn all_of_size_five() {
        let values: Result<Vec<Value>, _> = feat::enumerate::all(&*json(), 5).collect();
        let () = pretty_assertions::assert_eq!(
            Ok(vec![
                json!(4),
                json!([1]),
                json!([[]]),
                json!([{}]),
                json!({"a0": 1}),
                json!({"a0": []}),
                json!({"a0": {}}),
            ]),
            values,
        );
    }

    #[test]
    fn size_two_hundred() {
        let json = json();
        let () = pretty_assertions::assert_eq!(
            parse_index(
                "1078474562980192614193465731209863221082022392834478479450202095699553658407"
            ),
            Ok(json.card(200)),
        );
    }

    #[test]
    fn index_into_large_sizes() {
        let json = json();
        let () = pretty_assertions::assert_eq!(
            Ok(json!({"a0": {"a0": 1, "a1": 0, "a2": 0}})),
            json.index(12, BigUint::from(600_u16)),
        );
        let () = pretty_assertions::assert_eq!(
            Ok(json!([
                1,
                {"a0": {"a0": 0, "a1": [], "a2": [], "a3": 0, "a4": [{}]}, "a1": 0, "a2": {"a0": {}}},
                {"a0": {}},
                0,
                0,
                {},
                0
            ])),
            json.index(50, BigUint::from(12_345_678_901_234_567_u64)),
        );
    }

    #[test]
    fn flat_indices() {
        let json = json();
        let flat: Result<Vec<Value>, _> = (0..6_u8)
            .map(|i| flat::ix(&*json, BigUint::from(i)))
            .collect();
        let () = pretty_assertions::assert_eq!(
            Ok(vec![json!(0), json!(1), json!([]), json!({}), json!(2), json!(3)]),
            flat,
        );
    }

    #[test]
    fn flat_index_ten_to_the_thirty() {
        let expected: Value = serde_json::from_str(
            r#"[{"a0": 0, "a1": {"a0": {}, "a1": {"a0": 1, "a1": 1, "a2": 0, "a3": 0, "a4": 1, "a5": {"a0": {"a0": 0, "a1": 5, "a2": 1, "a3": 1, "a4": {"a0": 3, "a1": 0}, "a5": 2, "a6": {"a0": []}}}}, "a2": 4}, "a2": {"a0": 0, "a1": {}}}]"#,
        )
        .unwrap();
        let () = pretty_assertions::assert_eq!(
            Ok(expected),
            flat::ix(&*json(), parse_index("10^30").unwrap()),
        );
    }

    #[test]
    fn object_keys_print_in_position_order() {
        let values: List<Value> = (0..11_u8).map(Value::from).collect();
        let expected = format!(
            "{{{}}}",
            (0..11)
                .map(|i| format!("\"a{i}\":{i}"))
                .collect::<Vec<_>>()
                .join(",")
        );
        let () = pretty_assertions::assert_eq!(
            expected,
            serde_json::to_string(&Value::Object(object(&values))).unwrap(),
        );
    }

    #[test]
    fn depths() {
        let () = pretty_assertions::assert_eq!(0, depth(&json!(3)));
        let () = pretty_assertions::assert_eq!(1, depth(&json!([])));
        let () = pretty_assertions::assert_eq!(3, depth(&json!({"a0": [0, [1]]})));
    }

    #[test]
    fn parse_powers() {
        let () = pretty_assertions::assert_eq!(Ok(BigUint::from(1_000_u16)), parse_index("10^3"));
        let () = pretty_assertions::assert_eq!(Ok(BigUint::from(42_u8)), parse_index("42"));
        let () = pretty_assertions::assert_eq!(true, parse_index("ten").is_err());
    }
}
