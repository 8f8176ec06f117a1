//! End-to-end: write a CDX file to disk, read it back through the full
//! reader stack, and check both the records and the anomaly counters.

use std::fs::File;
use std::io::{BufReader, Write as _};

use tempfile::tempdir;

use cdxline_io::CdxReader;
use cdxline_types::{Column, Field};

const SAMPLE: &[u8] = b" CDX N b a m s k r M S V g\n\
org,example)/ 20040101000000 http://example.org/ text/html 200 AAAA - - 1043 45 crawl-0001.warc.gz\n\
org,example)/about 20040101000100 http://example.org/about text/html 301 BBBB http://example.org/about us - 512 1100 crawl-0001.warc.gz\r\n\
\n\
truncated line\n\
org,example)/dns 20040101000200 dns:example.org text/dns - CCCC - - 55 1650 crawl-0001.warc.gz\n";

#[test]
fn file_round_trip_with_anomalies() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("sample.cdx");
    File::create(&path)
        .and_then(|mut file| file.write_all(SAMPLE))
        .expect("write sample file");

    let file = File::open(&path).expect("reopen sample file");
    let mut cdx = CdxReader::new(BufReader::new(file));

    let first = cdx.next_record().expect("io").expect("first record");
    assert_eq!(first.get(Column::UrlKey), Field::Bytes(b"org,example)/"));
    assert_eq!(first.get(Column::StatusCode), Field::Bytes(b"200"));
    assert!(first.get(Column::Redirect).is_absent());

    // The second data line carries both anomalies at once: an embedded
    // space in the redirect URL and a CRLF terminator.
    let second = cdx.next_record().expect("io").expect("second record");
    assert_eq!(
        second.get(Column::Redirect),
        Field::Bytes(b"http://example.org/about us")
    );
    assert_eq!(second.get(Column::MetaTags), Field::Absent);
    assert_eq!(second.get(Column::CompressedSize), Field::Bytes(b"512"));
    assert_eq!(second.get(Column::Offset), Field::Bytes(b"1100"));
    assert_eq!(
        second.get(Column::Filename),
        Field::Bytes(b"crawl-0001.warc.gz")
    );

    let third = cdx.next_record().expect("io").expect("third record");
    assert_eq!(third.get(Column::MimeType), Field::Bytes(b"text/dns"));
    assert!(third.get(Column::StatusCode).is_absent());

    assert!(cdx.next_record().expect("io").is_none());

    let snap = cdx.sink().snapshot();
    assert_eq!(snap.records, 3);
    assert_eq!(snap.header_lines, 1);
    assert_eq!(snap.blank_lines, 1);
    assert_eq!(snap.short_records, 1);
    assert_eq!(snap.trailing_crs, 1);
    assert_eq!(snap.embedded_spaces, 1);
}

#[test]
fn records_copy_out_cleanly() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("copy.cdx");
    std::fs::write(&path, b"a b c d e f g h i j k\nl m n o p q r s t u v\n")
        .expect("write file");

    let file = File::open(&path).expect("open file");
    let mut cdx = CdxReader::new(BufReader::new(file));
    let mut filenames: Vec<Vec<u8>> = Vec::new();
    while let Some(record) = cdx.next_record().expect("io") {
        filenames.push(record.get(Column::Filename).or_placeholder().to_vec());
    }
    assert_eq!(filenames, vec![b"k".to_vec(), b"v".to_vec()]);
}
