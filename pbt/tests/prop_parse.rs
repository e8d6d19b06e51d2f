//! パーサーのプロパティテスト (decoder)

use pbt::{
    binary_lines, body_line, body_lines, header_name, header_value, http_version,
    render_response, status_code, status_string, unique_headers,
};
use proptest::prelude::*;
use shiguredo_http11_capture::{
    Error, ParseLimits, ResponseParser, parse, parse_header_line, parse_lines, parse_status_line,
};

// ========================================
// 往復変換
// ========================================

proptest! {
    #[test]
    fn roundtrip(
        version in http_version(),
        code in status_code(),
        text in status_string(),
        headers in unique_headers(),
        body in body_lines(),
    ) {
        let input = render_response(&version, code, &text, &headers, &body);
        let record = parse(input.as_bytes()).unwrap();

        prop_assert_eq!(&record.protocol_version, &version);
        prop_assert_eq!(record.status_code, code);
        prop_assert_eq!(&record.status_string, &text);
        prop_assert_eq!(record.ordered_header_keys.len(), headers.len());
        for (name, value) in &headers {
            prop_assert_eq!(record.header_value(name), Some(value.as_str()));
        }
        prop_assert_eq!(record.unparsed.len(), body.len() + 1);
        prop_assert!(record.unparsed[0].is_empty());
        for (i, line) in body.iter().enumerate() {
            prop_assert_eq!(record.unparsed_str(i + 1), Some(line.as_str()));
        }

        prop_assert_eq!(record.to_http() + "\n", input);
    }
}

proptest! {
    #[test]
    fn binary_body_roundtrip(headers in unique_headers(), body in binary_lines()) {
        let mut input = render_response("HTTP/1.1", 200, "OK", &headers, &[]).into_bytes();
        for line in &body {
            input.extend_from_slice(line);
            input.push(b'\n');
        }
        let record = parse(&input).unwrap();

        prop_assert_eq!(record.ordered_header_keys.len(), headers.len());
        prop_assert!(record.unparsed[0].is_empty());
        prop_assert_eq!(&record.unparsed[1..], &body[..]);

        let mut encoded = record.encode();
        encoded.push(b'\n');
        prop_assert_eq!(encoded, input);
    }
}

// ========================================
// ステータス行
// ========================================

proptest! {
    #[test]
    fn status_line_fields(version in http_version(), code in status_code(), text in status_string()) {
        let line = format!("{} {} {}", version, code, text);
        let (consumed, status) = parse_status_line(line.as_bytes()).unwrap();
        prop_assert_eq!(consumed, line.len());
        prop_assert_eq!(status.version, version);
        prop_assert_eq!(status.status_code, code);
        prop_assert_eq!(status.status_string, text);
    }
}

proptest! {
    #[test]
    fn status_line_without_http_prefix_fails(
        prefix in "[A-GI-Za-z]{1,8}",
        code in status_code(),
        body in body_lines(),
    ) {
        let mut input = format!("{}/1.1 {} OK\n", prefix, code);
        for line in &body {
            input.push_str(line);
            input.push('\n');
        }
        let failure = parse(input.as_bytes()).unwrap_err();
        prop_assert!(
            matches!(failure.error(), Error::MalformedStatusLine { .. }),
            "unexpected error: {:?}",
            failure.error()
        );
        prop_assert!(!failure.record().has_status_line());
        prop_assert!(failure.record().headers.is_empty());
        prop_assert!(failure.record().unparsed.is_empty());
    }
}

// ========================================
// ヘッダー
// ========================================

proptest! {
    #[test]
    fn header_line_fields(name in header_name(), value in header_value(), rest in body_line()) {
        let input = format!("{}: {}\n{}", name, value, rest);
        let (consumed, (parsed_name, parsed_value)) = parse_header_line(input.as_bytes()).unwrap();
        prop_assert_eq!(consumed, input.len() - rest.len());
        prop_assert_eq!(parsed_name, name.as_str());
        prop_assert_eq!(parsed_value, value.as_str());
    }
}

proptest! {
    #[test]
    fn duplicate_headers_last_write_wins(
        name in header_name(),
        values in proptest::collection::vec(header_value(), 1..6),
    ) {
        let headers: Vec<(String, String)> =
            values.iter().map(|v| (name.clone(), v.clone())).collect();
        let input = render_response("HTTP/1.1", 200, "OK", &headers, &[]);
        let record = parse(input.as_bytes()).unwrap();

        prop_assert_eq!(record.ordered_header_keys.len(), values.len());
        prop_assert_eq!(record.headers.len(), 1);
        prop_assert_eq!(record.header_value(&name), values.last().map(String::as_str));
        prop_assert_eq!(record.header_count(&name), values.len());
    }
}

proptest! {
    #[test]
    fn header_invariants_hold(
        headers in proptest::collection::vec((header_name(), header_value()), 0..12),
    ) {
        let input = render_response("HTTP/1.1", 200, "OK", &headers, &[]);
        let record = parse(input.as_bytes()).unwrap();

        prop_assert!(record.ordered_header_keys.len() >= record.headers.len());
        for key in &record.ordered_header_keys {
            prop_assert!(record.headers.contains_key(key));
        }
    }
}

// ========================================
// 未解析行
// ========================================

proptest! {
    #[test]
    fn lines_are_verbatim(body in body_lines()) {
        let mut input = String::new();
        for line in &body {
            input.push_str(line);
            input.push('\n');
        }
        let (consumed, lines) = parse_lines(input.as_bytes());
        prop_assert_eq!(consumed, input.len());
        let body: Vec<Vec<u8>> = body.into_iter().map(String::into_bytes).collect();
        prop_assert_eq!(lines, body);
    }
}

// ========================================
// 制限
// ========================================

proptest! {
    #[test]
    fn header_limit(headers in unique_headers(), limit in 0usize..8) {
        let input = render_response("HTTP/1.1", 200, "OK", &headers, &[]);
        let parser = ResponseParser::with_limits(ParseLimits {
            max_headers_count: limit,
            ..ParseLimits::unlimited()
        });
        match parser.parse(input.as_bytes()) {
            Ok(record) => prop_assert!(headers.len() <= limit, "{:?}", record),
            Err(failure) => {
                prop_assert!(headers.len() > limit);
                prop_assert_eq!(
                    failure.error(),
                    &Error::TooManyHeaders { count: limit + 1, limit }
                );
                prop_assert_eq!(failure.record().ordered_header_keys.len(), limit);
            }
        }
    }
}

// 任意のバイト列でもパニックしない
proptest! {
    #[test]
    fn arbitrary_bytes(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        match parse(&data) {
            Ok(record) => prop_assert!(record.has_status_line()),
            Err(failure) => prop_assert!(!failure.record().has_status_line()),
        }
    }
}
