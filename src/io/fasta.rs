// src/io/fasta.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::graph::contig::Contig;

/// Sequence lines are wrapped at this width on output.
const LINE_WIDTH: usize = 80;

/// Open a FASTA file for reading, handles gzipped files automatically
pub fn open_fasta(path: &str) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.ends_with(".gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub enum ContigWriter {
    Plain(BufWriter<File>),
    Compressed(BufWriter<GzEncoder<File>>),
}

impl ContigWriter {
    pub fn new(path: &str) -> io::Result<Self> {
        let file = File::create(path)?;
        if path.ends_with(".gz") {
            let encoder = GzEncoder::new(file, Compression::default());
            Ok(ContigWriter::Compressed(BufWriter::new(encoder)))
        } else {
            Ok(ContigWriter::Plain(BufWriter::new(file)))
        }
    }

    fn inner(&mut self) -> &mut dyn Write {
        match self {
            ContigWriter::Plain(writer) => writer,
            ContigWriter::Compressed(writer) => writer,
        }
    }

    pub fn write_contig(&mut self, contig: &Contig, id: usize) -> io::Result<()> {
        let writer = self.inner();
        writeln!(writer, ">contig_{} len={}", id, contig.length)?;
        for chunk in contig.sequence.as_bytes().chunks(LINE_WIDTH) {
            writer.write_all(chunk)?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn finish(self) -> io::Result<()> {
        match self {
            ContigWriter::Plain(mut writer) => writer.flush(),
            ContigWriter::Compressed(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?;
                Ok(())
            }
        }
    }
}

/// Write all contigs to a FASTA file, numbered in emission order
pub fn save_contigs(contigs: &[Contig], path: &str) -> io::Result<()> {
    let mut writer = ContigWriter::new(path)?;
    for (id, contig) in contigs.iter().enumerate() {
        writer.write_contig(contig, id)?;
    }
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn contig(sequence: &str) -> Contig {
        Contig {
            length: sequence.len(),
            sequence: sequence.to_string(),
        }
    }

    #[test]
    fn test_save_contigs_headers_and_order() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let contigs = vec![contig("TCAGCGAT"), contig("ACAGCGAA")];

        save_contigs(&contigs, path).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(
            written,
            ">contig_0 len=8\nTCAGCGAT\n>contig_1 len=8\nACAGCGAA\n"
        );
    }

    #[test]
    fn test_sequences_wrap_at_80_columns() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let contigs = vec![contig(&"A".repeat(100))];

        save_contigs(&contigs, path).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], ">contig_0 len=100");
        assert_eq!(lines[1].len(), 80);
        assert_eq!(lines[2].len(), 20);
    }
}
