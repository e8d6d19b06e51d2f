#![no_main]

use libfuzzer_sys::fuzz_target;
use shiguredo_http11_capture::parse;

fuzz_target!(|data: &[u8]| {
    let record = match parse(data) {
        Ok(record) => record,
        Err(failure) => {
            // 失敗するのはステータス行だけ
            assert!(!failure.record().has_status_line());
            assert!(failure.record().unparsed.is_empty());
            return;
        }
    };

    assert!(record.ordered_header_keys.len() >= record.headers.len());
    for key in &record.ordered_header_keys {
        assert!(record.headers.contains_key(key));
    }

    // 改行で終わらない最終行はエンコード後にヘッダー行として読まれうる
    if !data.ends_with(b"\n") {
        return;
    }

    // エンコード結果を再パースしても同じ値になる
    let mut bytes = record.encode();
    bytes.push(b'\n');
    let reparsed = parse(&bytes).unwrap();
    assert_eq!(reparsed.protocol_version, record.protocol_version);
    assert_eq!(reparsed.status_code, record.status_code);
    assert_eq!(reparsed.ordered_header_keys, record.ordered_header_keys);
    assert_eq!(reparsed.headers, record.headers);
    assert_eq!(reparsed.unparsed, record.unparsed);
});
