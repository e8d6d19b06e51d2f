#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shiguredo_http11_capture::{Error, ParseLimits, ResponseParser};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    max_input_size: u16,
    max_headers_count: u8,
    max_line_size: u16,
    data: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let limits = ParseLimits {
        max_input_size: input.max_input_size as usize,
        max_headers_count: input.max_headers_count as usize,
        max_line_size: input.max_line_size as usize,
    };
    let parser = ResponseParser::with_limits(limits.clone());

    match parser.parse(&input.data) {
        Ok(record) => {
            assert!(input.data.len() <= limits.max_input_size);
            assert!(record.ordered_header_keys.len() <= limits.max_headers_count);
            assert!(record.unparsed.iter().all(|l| l.len() <= limits.max_line_size));
        }
        Err(failure) => match failure.error() {
            Error::InputTooLarge { size, limit } => {
                assert!(size > limit);
                assert!(!failure.record().has_status_line());
            }
            Error::TooManyHeaders { count, limit } => {
                assert_eq!(*count, limit + 1);
                assert_eq!(failure.record().ordered_header_keys.len(), *limit);
            }
            Error::LineTooLong { size, limit } => assert!(size > limit),
            Error::MalformedStatusLine { .. } => {
                assert!(!failure.record().has_status_line());
            }
        },
    }
});
