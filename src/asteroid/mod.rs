// one near-earth object from the daily feed

use serde_json::Value;
use std::cmp::Ordering;
use std::convert::TryFrom;
use thiserror::Error;

mod parse;

const ESTIMATED_DIAMETER: &str = "estimated_diameter";
const KILOMETERS: &str = "kilometers";
const ESTIMATED_DIAMETER_MAX: &str = "estimated_diameter_max";
const CLOSE_APPROACH_DATA: &str = "close_approach_data";
const MISS_DISTANCE: &str = "miss_distance";
const ASTRONOMICAL: &str = "astronomical";

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("error deserializing estimated_diameter field: {0}")]
    Diameter(Cause),
    #[error("error deserializing miss_distance field under close_approach_data: {0}")]
    MissDistance(Cause),
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum Cause {
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("{0} is not an object")]
    NotObject(&'static str),
    #[error("{0} is not an array")]
    NotArray(&'static str),
    #[error("{0} is not a string")]
    NotString(&'static str),
    #[error("value is not a number")]
    NotNumber,
    #[error("cannot parse decimal {0:?}")]
    Decimal(String),
    #[error("value {0} is negative")]
    Negative(f64),
    #[error("value is not finite")]
    NotFinite,
}

/// A successfully parsed object: the upper estimate of its diameter in
/// kilometres and the miss distance of its first close approach in AU.
///
/// The raw JSON node is kept only so the record can be printed.
#[derive(Clone, Debug, PartialEq)]
pub struct Asteroid {
    diameter: f64,
    distance: f64,
    raw: Value,
}

impl Asteroid {
    pub fn max_estimated_diameter_km(&self) -> f64 {
        self.diameter
    }
    pub fn distance_to_earth_au(&self) -> f64 {
        self.distance
    }
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl TryFrom<&Value> for Asteroid {
    type Error = ParseError;

    fn try_from(node: &Value) -> Result<Asteroid, ParseError> {
        let diameter = diameter(node).map_err(ParseError::Diameter)?;
        let distance = distance(node).map_err(ParseError::MissDistance)?;
        Ok(Asteroid { diameter, distance, raw: node.clone() })
    }
}

impl std::fmt::Display for Asteroid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::pretty::format(Some(&self.raw)))
    }
}

pub fn parse_record(node: &Value) -> Result<Asteroid, ParseError> {
    Asteroid::try_from(node)
}

pub fn by_size(a: &Asteroid, b: &Asteroid) -> Ordering {
    a.diameter.total_cmp(&b.diameter)
}

pub fn by_distance(a: &Asteroid, b: &Asteroid) -> Ordering {
    a.distance.total_cmp(&b.distance)
}

////////////////////////////////////////////////////////////////////////

// `parent` names the node being indexed, for error reporting
fn member<'a>(
    node: &'a Value,
    parent: &'static str,
    key: &'static str,
) -> Result<&'a Value, Cause> {
    node.as_object()
        .ok_or(Cause::NotObject(parent))?
        .get(key)
        .ok_or(Cause::Missing(key))
}

fn checked(value: f64) -> Result<f64, Cause> {
    if !value.is_finite() {
        Err(Cause::NotFinite)
    } else if value < 0.0 {
        Err(Cause::Negative(value))
    } else {
        Ok(value)
    }
}

fn diameter(node: &Value) -> Result<f64, Cause> {
    let sizes = member(node, "object", ESTIMATED_DIAMETER)?;
    let km = member(sizes, ESTIMATED_DIAMETER, KILOMETERS)?;
    let max = member(km, KILOMETERS, ESTIMATED_DIAMETER_MAX)?;
    checked(max.as_f64().ok_or(Cause::NotNumber)?)
}

fn distance(node: &Value) -> Result<f64, Cause> {
    let approaches = member(node, "object", CLOSE_APPROACH_DATA)?
        .as_array()
        .ok_or(Cause::NotArray(CLOSE_APPROACH_DATA))?;
    // no close approach on record leaves the distance at zero
    let first = match approaches.first() {
        Some(first) => first,
        None => return Ok(0.0),
    };
    let miss = member(first, CLOSE_APPROACH_DATA, MISS_DISTANCE)?;
    let au = member(miss, MISS_DISTANCE, ASTRONOMICAL)?
        .as_str()
        .ok_or(Cause::NotString(ASTRONOMICAL))?;
    checked(parse::decimal(au)?)
}
