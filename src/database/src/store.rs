use cricket_core::SeasonSnapshot;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Persists snapshots as gzip-compressed JSON.
pub struct SnapshotStore;

impl SnapshotStore {
    pub fn write_to<W: Write>(snapshot: &SeasonSnapshot, writer: W) -> io::Result<()> {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        serde_json::to_writer(&mut encoder, snapshot)?;
        encoder.finish()?;
        Ok(())
    }

    pub fn read_from<R: Read>(reader: R) -> io::Result<SeasonSnapshot> {
        let decoder = GzDecoder::new(reader);
        Ok(serde_json::from_reader(decoder)?)
    }

    pub fn save(snapshot: &SeasonSnapshot, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        Self::write_to(snapshot, BufWriter::new(file))
    }

    pub fn load(path: &Path) -> io::Result<SeasonSnapshot> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }
}
