// feed-shaped JSON for tests

use serde_json::{json, Value};

pub fn neo(id: &str, diameter: f64, au: &str) -> Value {
    json!({
        "id": id,
        "name": format!("({})", id),
        "estimated_diameter": {
            "kilometers": {
                "estimated_diameter_min": diameter / 2.0,
                "estimated_diameter_max": diameter
            }
        },
        "is_potentially_hazardous_asteroid": false,
        "close_approach_data": [
            {
                "close_approach_date": "2024-03-01",
                "miss_distance": {
                    "astronomical": au,
                    "kilometers": "1000"
                },
                "orbiting_body": "Earth"
            }
        ]
    })
}

pub fn feed(date: &str, element_count: i64, objects: Vec<Value>) -> Value {
    let mut days = serde_json::Map::new();
    days.insert(date.to_string(), Value::Array(objects));
    json!({
        "links": { "self": "http://localhost/feed" },
        "element_count": element_count,
        "near_earth_objects": days
    })
}

pub fn bytes(feed: &Value) -> Vec<u8> {
    serde_json::to_vec(feed).unwrap()
}
