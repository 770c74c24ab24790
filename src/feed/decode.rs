use serde_json::Value;

use crate::*;

const ELEMENT_COUNT: &str = "element_count";
const NEAR_EARTH_OBJECTS: &str = "near_earth_objects";

/// The top of a feed response, reduced to what the scan needs: the
/// advertised object count and the raw object nodes for one day.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedEnvelope {
    pub element_count: i64,
    pub objects: Vec<Value>,
}

// fractional counts truncate, non-numbers count as zero
fn count(value: &Value) -> i64 {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|n| n as i64))
        .unwrap_or(0)
}

pub fn decode(data: &[u8], date: &str) -> Result<FeedEnvelope> {
    let mut root: Value = serde_json::from_slice(data)?;
    let root = root.as_object_mut().ok_or(Error::NotObject)?;
    let element_count = root.get(ELEMENT_COUNT).map_or(0, count);
    if element_count < 1 {
        return Ok(FeedEnvelope { element_count, objects: Vec::new() });
    }
    let objects = match root.remove(NEAR_EARTH_OBJECTS) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Object(mut days)) => match days.remove(date) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(objects)) => objects,
            Some(_) => {
                return Err(Error::Shape {
                    field: format!("{}.{}", NEAR_EARTH_OBJECTS, date),
                    expected: "an array",
                })
            }
        },
        Some(_) => {
            return Err(Error::Shape {
                field: NEAR_EARTH_OBJECTS.to_string(),
                expected: "an object",
            })
        }
    };
    if objects.is_empty() {
        return Err(Error::Missing {
            expected: element_count,
            date: date.to_string(),
        });
    }
    Ok(FeedEnvelope { element_count, objects })
}
