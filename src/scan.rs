// pick the day's stand-out objects in one pass over the feed

use serde_json::Value;
use std::cmp::Ordering;
use std::convert::TryFrom;

use crate::asteroid::{by_distance, by_size};
use crate::*;

/// An object that could not be parsed and was left out of the scan.
#[derive(Clone, Debug, PartialEq)]
pub struct Skipped {
    pub index: usize,
    pub error: ParseError,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scan {
    pub biggest: Asteroid,
    /// Whichever object has the greatest miss distance; the report
    /// labels it the closest.
    pub closest: Asteroid,
    pub parsed: usize,
    pub skipped: Vec<Skipped>,
}

/// Seed with the first node, then fold in the rest. Only a strictly
/// greater value replaces a pick, so on a tie the earlier object stays.
///
/// The first node has to parse: there is nothing else to seed with.
pub fn scan(nodes: &[Value]) -> Result<Option<Scan>> {
    let (first, rest) = match nodes.split_first() {
        Some(split) => split,
        None => return Ok(None),
    };
    let seed = Asteroid::try_from(first).map_err(|err| {
        tracing::debug!("unusable seed object: {}", first);
        Error::Seed(err)
    })?;
    let init = Scan {
        biggest: seed.clone(),
        closest: seed,
        parsed: 1,
        skipped: Vec::new(),
    };
    let scan = rest
        .iter()
        .enumerate()
        .fold(init, |acc, (i, node)| acc.next(i + 1, node));
    Ok(Some(scan))
}

impl Scan {
    fn next(mut self, index: usize, node: &Value) -> Scan {
        let neo = match Asteroid::try_from(node) {
            Ok(neo) => neo,
            Err(error) => {
                tracing::warn!("skipping object {}: {}. JSON object: {}", index, error, node);
                self.skipped.push(Skipped { index, error });
                return self;
            }
        };
        self.parsed += 1;
        if by_size(&self.biggest, &neo) == Ordering::Less {
            self.biggest = neo.clone();
        }
        if by_distance(&self.closest, &neo) == Ordering::Less {
            self.closest = neo;
        }
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixture::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn id(neo: &Asteroid) -> &str {
        neo.raw()["id"].as_str().unwrap()
    }

    #[test]
    fn test() {
        let nodes = vec![
            neo("a", 0.1, "0.30"),
            neo("b", 0.5, "0.10"),
            neo("c", 0.2, "0.45"),
        ];
        let scan = scan(&nodes).unwrap().unwrap();
        assert_eq!(scan.biggest.max_estimated_diameter_km(), 0.5);
        assert_eq!(id(&scan.biggest), "b");
        // greater miss distance is what gets picked
        assert_eq!(id(&scan.closest), "c");
        assert_eq!(scan.parsed, 3);
        assert!(scan.skipped.is_empty());
    }

    #[test]
    fn skip_bad_object() {
        let mut bad = neo("b", 9.0, "9.0");
        bad["estimated_diameter"] = json!("huge");
        let nodes = vec![neo("a", 0.1, "0.3"), bad, neo("c", 0.2, "0.1")];
        let scan = scan(&nodes).unwrap().unwrap();
        assert_eq!(scan.parsed, 2);
        assert_eq!(scan.skipped.len(), 1);
        assert_eq!(scan.skipped[0].index, 1);
        assert!(matches!(scan.skipped[0].error, ParseError::Diameter(_)));
        assert_eq!(id(&scan.biggest), "c");
        assert_eq!(id(&scan.closest), "a");
    }

    #[test]
    fn ties_keep_first() {
        let nodes = vec![
            neo("a", 0.4, "0.2"),
            neo("b", 0.4, "0.2"),
            neo("c", 0.1, "0.2"),
        ];
        let scan = scan(&nodes).unwrap().unwrap();
        assert_eq!(id(&scan.biggest), "a");
        assert_eq!(id(&scan.closest), "a");
    }

    #[test]
    fn bad_seed() {
        let nodes = vec![json!({}), neo("b", 0.4, "0.2")];
        let err = scan(&nodes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parsing);
        assert!(matches!(err, Error::Seed(ParseError::Diameter(_))));
    }

    #[test]
    fn nothing() {
        assert_eq!(scan(&[]).unwrap(), None);
    }

    fn nodes() -> impl Strategy<Value = Vec<Value>> {
        let good = (0.0..100.0f64, 0.0..1.0f64)
            .prop_map(|(d, au)| neo("x", d, &au.to_string()));
        let bad = prop_oneof![
            Just(json!({})),
            Just(json!(null)),
            Just(json!({ "estimated_diameter": { "kilometers": {
                "estimated_diameter_max": 1e9 } } })),
        ];
        (good.clone(), prop::collection::vec(prop_oneof![4 => good, 1 => bad], 0..40))
            .prop_map(|(first, mut rest)| {
                rest.insert(0, first);
                rest
            })
    }

    proptest! {
        #[test]
        fn prop_picks_dominate(nodes in nodes()) {
            let scan = scan(&nodes).unwrap().unwrap();
            let parsed: Vec<Asteroid> = nodes
                .iter()
                .filter_map(|node| Asteroid::try_from(node).ok())
                .collect();
            prop_assert_eq!(scan.parsed, parsed.len());
            prop_assert_eq!(scan.skipped.len(), nodes.len() - parsed.len());
            for neo in &parsed {
                prop_assert!(scan.biggest.max_estimated_diameter_km()
                    >= neo.max_estimated_diameter_km());
                prop_assert!(scan.closest.distance_to_earth_au()
                    >= neo.distance_to_earth_au());
            }
        }

        #[test]
        fn prop_idempotent(nodes in nodes()) {
            prop_assert_eq!(scan(&nodes).unwrap(), scan(&nodes).unwrap());
        }
    }
}
