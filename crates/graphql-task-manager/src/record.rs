/// Identifier of a record that already exists on the server.
pub type RecordId = i64;

/// The identifier slot of a record, as far as queue membership is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier {
    /// The record was never saved: it gets created.
    Absent,
    Numeric(RecordId),
    /// Present but not a number. Such records are neither updated nor removed.
    Invalid,
}

/// A row of an edited list.
pub trait FormRecord: Clone {
    fn identifier(&self) -> Identifier;

    /// Whether any field other than the identifier changed since `initial`.
    fn differs_from(&self, initial: &Self) -> bool;
}

/// A JSON object row, identified by its `"id"` key.
pub type JsonRecord = serde_json::Map<String, serde_json::Value>;

const ID_KEY: &str = "id";

impl FormRecord for JsonRecord {
    fn identifier(&self) -> Identifier {
        match self.get(ID_KEY) {
            None => Identifier::Absent,
            Some(serde_json::Value::Number(number)) => number
                .as_i64()
                .or_else(|| {
                    number
                        .as_f64()
                        .filter(|value| value.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(value))
                        .map(|value| value as i64)
                })
                .map_or(Identifier::Invalid, Identifier::Numeric),
            Some(_) => Identifier::Invalid,
        }
    }

    // Only the keys of the initial row are compared, added keys do not count as a change.
    fn differs_from(&self, initial: &Self) -> bool {
        initial
            .iter()
            .filter(|(key, _)| key.as_str() != ID_KEY)
            .any(|(key, value)| !self.get(key).is_some_and(|current| same_value(current, value)))
    }
}

// `1` and `1.0` are the same value.
fn same_value(left: &serde_json::Value, right: &serde_json::Value) -> bool {
    use serde_json::Value;

    match (left, right) {
        (Value::Number(left), Value::Number(right)) => same_number(left, right),
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len() && left.iter().zip(right).all(|(left, right)| same_value(left, right))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(key, left)| right.get(key).is_some_and(|right| same_value(left, right)))
        }
        _ => left == right,
    }
}

fn same_number(left: &serde_json::Number, right: &serde_json::Number) -> bool {
    if let (Some(left), Some(right)) = (left.as_i64(), right.as_i64()) {
        return left == right;
    }
    if let (Some(left), Some(right)) = (left.as_u64(), right.as_u64()) {
        return left == right;
    }
    left.as_f64() == right.as_f64()
}
