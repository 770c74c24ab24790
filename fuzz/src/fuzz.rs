#![no_main]
use libfuzzer_sys::fuzz_target;
use neoscan::asteroid::parse_record;
use neoscan::feed::decode;
use neoscan::scan::scan;
use neoscan::{Error, ErrorKind};

const DAY: &str = "2024-03-01";

fn fuzz_feed(data: &[u8]) {
    let envelope = match decode(data, DAY) {
        Ok(envelope) => envelope,
        Err(err) if err.kind() == ErrorKind::Decode => return,
        Err(err) => panic!("\ninput {:?}\nerror {}\n", data, err),
    };
    if envelope.element_count < 1 {
        return;
    }
    let picked = match scan(&envelope.objects) {
        Ok(Some(picked)) => picked,
        Ok(None) => panic!("decoded {} with no objects", envelope.element_count),
        Err(Error::Seed(_)) => return,
        Err(err) => panic!("\ninput {:?}\nerror {}\n", data, err),
    };
    assert_eq!(picked.parsed + picked.skipped.len(), envelope.objects.len());
    for node in &envelope.objects {
        if let Ok(neo) = parse_record(node) {
            assert!(picked.biggest.max_estimated_diameter_km() >= neo.max_estimated_diameter_km());
            assert!(picked.closest.distance_to_earth_au() >= neo.distance_to_earth_au());
        }
    }
}

// arbitrary JSON as one object node
fn fuzz_record(data: &[u8]) {
    let node: serde_json::Value = match serde_json::from_slice(data) {
        Ok(node) => node,
        Err(_) => return,
    };
    if let Ok(neo) = parse_record(&node) {
        assert!(neo.max_estimated_diameter_km() >= 0.0);
        assert!(neo.distance_to_earth_au() >= 0.0);
        assert_eq!(parse_record(&node), Ok(neo));
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 1 {
        return;
    }
    let rest = &data[1..];
    match data[0] {
        0 => fuzz_feed(rest),
        1 => fuzz_record(rest),
        _ => (),
    }
});
