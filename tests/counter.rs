use std::io::{self, BufRead, BufReader, Cursor, Read};

use tagcloud::{count_lines, count_reader, SeparatorSet, TagCloudError};

#[test]
fn counts_each_lowercase_word() {
    let seps = SeparatorSet::default();
    let map = count_lines(["the cat sat on the mat. The cat ran."], &seps);
    assert_eq!(map.get("the"), Some(3));
    assert_eq!(map.get("cat"), Some(2));
    for w in ["sat", "on", "mat", "ran"] {
        assert_eq!(map.get(w), Some(1), "{w}");
    }
    assert_eq!(map.len(), 6);
    assert_eq!(map.total(), 9);
}

#[test]
fn counts_span_lines() {
    let seps = SeparatorSet::default();
    let text = "Alpha beta\r\nBETA gamma\n\nalpha\n";
    let map = count_reader(Cursor::new(text), &seps).unwrap();
    assert_eq!(map.get("alpha"), Some(2));
    assert_eq!(map.get("beta"), Some(2));
    assert_eq!(map.get("gamma"), Some(1));
    assert_eq!(map.len(), 3);
}

#[test]
fn words_do_not_join_across_lines() {
    let seps = SeparatorSet::default();
    let map = count_reader(Cursor::new("tag\ncloud"), &seps).unwrap();
    assert_eq!(map.get("tag"), Some(1));
    assert_eq!(map.get("cloud"), Some(1));
    assert_eq!(map.get("tagcloud"), None);
}

#[test]
fn empty_input_gives_empty_map() {
    let seps = SeparatorSet::default();
    let map = count_reader(Cursor::new(""), &seps).unwrap();
    assert!(map.is_empty());
}

#[test]
fn invalid_utf8_is_input_error() {
    let seps = SeparatorSet::default();
    let bytes: &[u8] = b"fine line\n\xff\xfe broken\n";
    let err = count_reader(bytes, &seps).unwrap_err();
    assert!(matches!(err, TagCloudError::InputUnavailable { .. }));
}

struct FailingReader {
    served: bool,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served {
            return Err(io::Error::new(io::ErrorKind::Other, "disk went away"));
        }
        self.served = true;
        let data = b"partial words here\n";
        buf[..data.len()].copy_from_slice(data);
        Ok(data.len())
    }
}

#[test]
fn read_failure_returns_no_partial_map() {
    let seps = SeparatorSet::default();
    let reader: Box<dyn BufRead> = Box::new(BufReader::new(FailingReader { served: false }));
    match count_reader(reader, &seps) {
        Err(TagCloudError::InputUnavailable { source, .. }) => {
            assert_eq!(source.kind(), io::ErrorKind::Other);
        }
        other => panic!("expected input error, got {other:?}"),
    }
}
