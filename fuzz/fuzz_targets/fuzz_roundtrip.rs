#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shiguredo_http11_capture::{ResponseRecord, parse};

#[derive(Arbitrary, Debug)]
struct FuzzResponse {
    version: String,
    status_code: i64,
    status_string: String,
    headers: Vec<(String, String)>,
    body: Vec<Vec<u8>>,
}

fn is_valid_version(s: &str) -> bool {
    !s.is_empty() && !s.contains([' ', '\n'])
}

fn is_valid_header_name(s: &str) -> bool {
    !s.contains([':', '\n'])
}

fn is_valid_header_value(s: &str) -> bool {
    !s.contains('\n') && !s.starts_with([' ', '\t'])
}

fuzz_target!(|data: FuzzResponse| {
    if !is_valid_version(&data.version) || data.status_string.contains('\n') {
        return;
    }

    let mut record = ResponseRecord::new().status_line(
        &format!("HTTP/{}", data.version),
        data.status_code,
        &data.status_string,
    );
    for (name, value) in &data.headers {
        if is_valid_header_name(name) && is_valid_header_value(value) {
            record.add_header(name, value);
        }
    }
    record.push_line("");
    for line in data.body.iter().filter(|line| !line.contains(&b'\n')) {
        record.push_line(line);
    }

    let mut bytes = record.encode();
    bytes.push(b'\n');
    let parsed = parse(&bytes).unwrap();
    assert_eq!(parsed, record);
    assert_eq!(parsed.encode(), record.encode());
});
