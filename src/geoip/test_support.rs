//! In-memory MaxMind databases for geoip tests.
//!
//! Builds an IPv4 database with a single search-tree node: addresses in
//! `0.0.0.0/1` map to `{"country": {"iso_code": <code>}}`, everything in
//! `128.0.0.0/1` has no record.

const METADATA_MARKER: &[u8] = b"\xAB\xCD\xEFMaxMind.com";
const NODE_COUNT: u32 = 1;
const DATA_SEPARATOR_LEN: u32 = 16;

fn control(out: &mut Vec<u8>, type_id: u8, size: usize) {
    assert!(size < 29, "extended sizes are not needed here");
    if type_id <= 7 {
        out.push((type_id << 5) | size as u8);
    } else {
        out.push(size as u8);
        out.push(type_id - 7);
    }
}

fn string(out: &mut Vec<u8>, value: &str) {
    control(out, 2, value.len());
    out.extend_from_slice(value.as_bytes());
}

fn map(out: &mut Vec<u8>, entries: usize) {
    control(out, 7, entries);
}

fn unsigned(out: &mut Vec<u8>, type_id: u8, value: u64) {
    let bytes = value.to_be_bytes();
    let skip = bytes.iter().take_while(|b| **b == 0).count();
    control(out, type_id, bytes.len() - skip);
    out.extend_from_slice(&bytes[skip..]);
}

/// Returns a database answering `iso_code` for `0.0.0.0/1`.
pub fn country_db(iso_code: &str) -> Vec<u8> {
    let mut db = Vec::new();

    // 24-bit records: left points at data offset 0, right is "no data"
    let left = NODE_COUNT + DATA_SEPARATOR_LEN;
    db.extend_from_slice(&left.to_be_bytes()[1..]);
    db.extend_from_slice(&NODE_COUNT.to_be_bytes()[1..]);
    db.extend_from_slice(&[0u8; DATA_SEPARATOR_LEN as usize]);

    map(&mut db, 1);
    string(&mut db, "country");
    map(&mut db, 1);
    string(&mut db, "iso_code");
    string(&mut db, iso_code);

    db.extend_from_slice(METADATA_MARKER);
    map(&mut db, 9);
    string(&mut db, "binary_format_major_version");
    unsigned(&mut db, 5, 2);
    string(&mut db, "binary_format_minor_version");
    unsigned(&mut db, 5, 0);
    string(&mut db, "build_epoch");
    unsigned(&mut db, 9, 1_700_000_000);
    string(&mut db, "database_type");
    string(&mut db, "GeoLite2-Country");
    string(&mut db, "description");
    map(&mut db, 1);
    string(&mut db, "en");
    string(&mut db, "test country database");
    string(&mut db, "ip_version");
    unsigned(&mut db, 5, 4);
    string(&mut db, "languages");
    control(&mut db, 11, 1);
    string(&mut db, "en");
    string(&mut db, "node_count");
    unsigned(&mut db, 6, u64::from(NODE_COUNT));
    string(&mut db, "record_size");
    unsigned(&mut db, 5, 24);

    db
}
