use encoding_rs::Encoding;
use std::io::{BufReader, Read, Seek, SeekFrom};

/// Guesses the text encoding of a rewindable stream by feeding up to
/// `max_bytes` (default 1 MiB) into chardetng. Leaves the reader at an
/// unspecified position; callers rewind before decoding.
pub fn detect_encoding<R: Read + Seek>(
    rdr: &mut BufReader<R>,
    max_bytes: Option<usize>,
) -> std::io::Result<&'static Encoding> {
    const MAX_CHUNK_SIZE: usize = 1_048_576;
    let limit = max_bytes.unwrap_or(MAX_CHUNK_SIZE);

    rdr.seek(SeekFrom::Start(0))?;
    let mut buf = [0u8; 8192];
    let mut read = 0;
    let mut detector = chardetng::EncodingDetector::new();
    loop {
        let n = rdr.read(&mut buf)?;
        if n == 0 {
            detector.feed(&[], true);
            break;
        }
        read += n;
        let last = read >= limit;
        detector.feed(&buf[..n], last);
        if last {
            break;
        }
    }

    Ok(detector.guess(None, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn plain_ascii_decodes_cleanly_with_the_detected_encoding() {
        let mut rdr = BufReader::new(Cursor::new(b"Name,Qty\nalice,5\n".to_vec()));
        let encoding = detect_encoding(&mut rdr, None).unwrap();
        let (decoded, _, had_errors) = encoding.decode(b"Name,Qty\nalice,5\n");
        assert!(!had_errors);
        assert!(decoded.starts_with("Name,Qty"));
    }

    #[test]
    fn shift_jis_text_is_detected() {
        let text = "名前,数量\n東京駅,五\n大阪城,三\n京都御所,八\n名古屋港,二\n横浜中華街,九\n";
        let (encoded, _, _) = encoding_rs::SHIFT_JIS.encode(text);
        let mut rdr = BufReader::new(Cursor::new(encoded.into_owned()));
        let encoding = detect_encoding(&mut rdr, None).unwrap();
        assert_eq!(encoding, encoding_rs::SHIFT_JIS);
    }
}
