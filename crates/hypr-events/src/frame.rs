//! Splitting raw socket reads into `TAG>>payload` records

use tracing::trace;

/// Separator between the tag and the payload of a record
pub const SEPARATOR: &str = ">>";

/// One record from the event socket, before typed decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Wire tag, e.g. `openwindow`
    pub tag: String,
    /// Everything after the first `>>`, comma-separated fields
    pub payload: String,
}

impl RawRecord {
    /// Parse a single line. Returns `None` for lines the compositor sends as
    /// noise: no separator, an empty tag, or an empty (or lone comma) payload.
    pub fn parse(line: &str) -> Option<Self> {
        let (tag, payload) = line.split_once(SEPARATOR)?;

        if tag.is_empty() || payload.is_empty() || payload == "," {
            return None;
        }

        Some(Self {
            tag: tag.to_string(),
            payload: payload.to_string(),
        })
    }
}

/// Split one read's worth of bytes into records, in stream order
///
/// Invalid UTF-8 is replaced rather than rejected so a single bad byte in a
/// window title does not cost the rest of the chunk.
pub fn split_records(bytes: &[u8]) -> Vec<RawRecord> {
    let text = String::from_utf8_lossy(bytes);

    text.split('\n')
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let record = RawRecord::parse(line);
            if record.is_none() {
                trace!(line, "Dropping malformed event record");
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tag: &str, payload: &str) -> RawRecord {
        RawRecord {
            tag: tag.to_string(),
            payload: payload.to_string(),
        }
    }

    #[test]
    fn test_split_preserves_order() {
        let chunk = b"workspace>>1\n\
            openwindow>>80864f60,1,Alacritty,Alacritty\n\
            activewindow>>Alacritty,Alacritty\n";
        let records = split_records(chunk);

        assert_eq!(
            records,
            vec![
                record("workspace", "1"),
                record("openwindow", "80864f60,1,Alacritty,Alacritty"),
                record("activewindow", "Alacritty,Alacritty"),
            ]
        );
    }

    #[test]
    fn test_split_counts_well_formed_records() {
        let chunk: String = (0..50).map(|i| format!("workspace>>{}\n", i)).collect();
        let records = split_records(chunk.as_bytes());

        assert_eq!(records.len(), 50);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.payload, i.to_string());
        }
    }

    #[test]
    fn test_split_drops_empty_and_degenerate_records() {
        let chunk = b"\n>>1\nsubmap>>\nactivewindow>>,\nnoseparator\nworkspace>>2\n\n";
        let records = split_records(chunk);

        assert_eq!(records, vec![record("workspace", "2")]);
        assert!(records.iter().all(|r| !r.tag.is_empty() && !r.payload.is_empty()));
    }

    #[test]
    fn test_split_keeps_separator_inside_payload() {
        let records = split_records(b"activewindow>>kitty,a >> b\n");
        assert_eq!(records, vec![record("activewindow", "kitty,a >> b")]);
    }

    #[test]
    fn test_split_accepts_unterminated_last_line() {
        let records = split_records(b"workspace>>1\nworkspace>>2");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], record("workspace", "2"));
    }

    #[test]
    fn test_split_replaces_invalid_utf8() {
        let records = split_records(b"windowtitlev2>>abc,caf\xff\nworkspace>>3\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].payload, "abc,caf\u{FFFD}");
        assert_eq!(records[1], record("workspace", "3"));
    }

    #[test]
    fn test_split_empty_chunk_yields_nothing() {
        assert!(split_records(b"").is_empty());
        assert!(split_records(b"\n\n\n").is_empty());
    }

    #[test]
    fn test_parse_payload_with_leading_comma_is_kept() {
        // Only a lone comma is noise; an empty first field is meaningful
        assert_eq!(
            RawRecord::parse("activespecial>>,DP-1"),
            Some(record("activespecial", ",DP-1"))
        );
    }
}
