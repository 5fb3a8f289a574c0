// src/io/fastq.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use flate2::read::MultiGzDecoder;

#[derive(Debug, Clone)]
pub struct FastqRecord {
    pub header: String,
    pub sequence: String,
    pub plus: String,
    pub quality: String,
}

/// Open a FASTQ file for reading, handles gzipped files automatically
pub fn open_fastq(path: &str) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.ends_with(".gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Stream FASTQ records without loading the whole file into memory
pub fn stream_fastq_records<R: BufRead>(reader: R) -> impl Iterator<Item = FastqRecord> {
    FastqStreamParser {
        lines: reader.lines(),
    }
}

/// Iterator adaptor to handle streaming FASTQ parsing
pub struct FastqStreamParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    lines: I,
}

impl<I> FastqStreamParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    fn next_line(&mut self) -> Option<String> {
        match self.lines.next() {
            Some(Ok(line)) => Some(line),
            _ => None,
        }
    }
}

impl<I> Iterator for FastqStreamParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = FastqRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let header = self.next_line()?;
        let sequence = self.next_line()?;
        let plus = self.next_line()?;
        let quality = self.next_line()?;

        Some(FastqRecord {
            header,
            sequence,
            plus,
            quality,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_stream_fastq_records() {
        let data = "@read_1\nTCAGA\n+\nIIIII\n@read_2\nGATTA\n+\nIIIII\n";
        let records: Vec<FastqRecord> = stream_fastq_records(Cursor::new(data)).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header, "@read_1");
        assert_eq!(records[0].sequence, "TCAGA");
        assert_eq!(records[1].sequence, "GATTA");
    }

    #[test]
    fn test_truncated_record_is_dropped() {
        let data = "@read_1\nTCAGA\n+\nIIIII\n@read_2\nGATTA\n";
        let records: Vec<FastqRecord> = stream_fastq_records(Cursor::new(data)).collect();
        assert_eq!(records.len(), 1);
    }
}
