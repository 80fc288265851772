// src/store/flat_file.rs
//
// Flat-file entity store.
//
// RULES:
// - One store instance per backing file, shared through Arc
// - No cache: every call re-reads the file
// - Every mutation is read-all -> change in memory -> rewrite-all, done while
//   holding the store's write lock
// - Lines that fail to decode are skipped by queries and written back
//   untouched by mutations

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, warn};

use super::backing_file;
use super::entity_store::EntityStore;
use super::record::{FieldValue, Record};
use crate::codec::{DecodeError, RecordCodec};
use crate::error::{AppError, AppResult};

/// A stored line that could not be decoded
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based physical line number
    pub line_number: usize,
    /// Lossy UTF-8 rendering; the exact bytes stay in the file
    pub line: String,
    pub reason: DecodeError,
}

impl SkippedLine {
    pub fn into_error(self) -> AppError {
        AppError::Decode {
            line_number: self.line_number,
            line: self.line,
            reason: self.reason,
        }
    }
}

/// Result of a lenient load: what decoded, and what did not
#[derive(Debug, Clone)]
pub struct LoadedRecords<R> {
    pub records: Vec<R>,
    pub skipped: Vec<SkippedLine>,
}

enum Entry<R> {
    Decoded(R),
    /// Written back byte for byte on every rewrite
    Malformed { skipped: SkippedLine, raw: Vec<u8> },
}

impl<R: Record> Entry<R> {
    fn has_id(&self, id: &str) -> bool {
        matches!(self, Entry::Decoded(record) if record.id() == id)
    }
}

pub struct FlatFileStore<C: RecordCodec> {
    path: PathBuf,
    codec: C,
    write_lock: Mutex<()>,
}

impl<C: RecordCodec> FlatFileStore<C> {
    /// Bind `codec` to the file at `path`, creating it (empty) if absent.
    pub fn with_codec(path: impl Into<PathBuf>, codec: C) -> AppResult<Self> {
        let path = path.into();
        if backing_file::ensure_exists(&path)? {
            debug!("Created backing file {}", path.display());
        }

        Ok(Self {
            path,
            codec,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Decode everything, keeping malformed lines aside instead of failing.
    pub fn load(&self) -> AppResult<LoadedRecords<C::Record>> {
        let mut records = Vec::new();
        let mut skipped = Vec::new();

        for entry in self.read_entries()? {
            match entry {
                Entry::Decoded(record) => records.push(record),
                Entry::Malformed { skipped: line, .. } => skipped.push(line),
            }
        }

        Ok(LoadedRecords { records, skipped })
    }

    /// Decode everything, failing on the first malformed line.
    pub fn load_strict(&self) -> AppResult<Vec<C::Record>> {
        self.read_entries()?
            .into_iter()
            .map(|entry| match entry {
                Entry::Decoded(record) => Ok(record),
                Entry::Malformed { skipped, .. } => Err(skipped.into_error()),
            })
            .collect()
    }

    fn read_entries(&self) -> AppResult<Vec<Entry<C::Record>>> {
        let lines = backing_file::read_lines(&self.path)?;
        let mut entries = Vec::with_capacity(lines.len());

        for (index, raw) in lines.into_iter().enumerate() {
            let decoded = match std::str::from_utf8(&raw) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.codec.decode(line),
                Err(_) => Err(DecodeError::Invalid("invalid UTF-8".to_string())),
            };

            match decoded {
                Ok(record) => entries.push(Entry::Decoded(record)),
                Err(reason) => {
                    warn!(
                        "Skipping malformed line {} in {}: {}",
                        index + 1,
                        self.path.display(),
                        reason
                    );
                    let skipped = SkippedLine {
                        line_number: index + 1,
                        line: String::from_utf8_lossy(&raw).into_owned(),
                        reason,
                    };
                    entries.push(Entry::Malformed { skipped, raw });
                }
            }
        }

        Ok(entries)
    }

    fn write_entries(&self, entries: &[Entry<C::Record>]) -> AppResult<()> {
        let lines: Vec<Cow<'_, [u8]>> = entries
            .iter()
            .map(|entry| match entry {
                Entry::Decoded(record) => Cow::Owned(self.codec.encode(record).into_bytes()),
                Entry::Malformed { raw, .. } => Cow::Borrowed(raw.as_slice()),
            })
            .collect();

        backing_file::rewrite(&self.path, &lines)?;
        debug!("Rewrote {} ({} lines)", self.path.display(), lines.len());
        Ok(())
    }

    /// Serializes writers. A poisoned lock only means another writer
    /// panicked; the file itself is still whole, so carry on.
    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: RecordCodec> EntityStore<C::Record> for FlatFileStore<C> {
    fn save(&self, record: &C::Record) -> AppResult<()> {
        let _guard = self.lock();
        let mut entries = self.read_entries()?;
        entries.push(Entry::Decoded(record.clone()));
        self.write_entries(&entries)
    }

    fn insert(&self, record: &C::Record) -> AppResult<()> {
        let _guard = self.lock();
        let mut entries = self.read_entries()?;
        if entries.iter().any(|entry| entry.has_id(record.id())) {
            return Err(AppError::Duplicate(record.id().to_string()));
        }
        entries.push(Entry::Decoded(record.clone()));
        self.write_entries(&entries)
    }

    fn find_by_id(&self, id: &str) -> AppResult<Option<C::Record>> {
        Ok(self.find_all()?.into_iter().find(|record| record.id() == id))
    }

    fn find_all(&self) -> AppResult<Vec<C::Record>> {
        Ok(self.load()?.records)
    }

    fn find_by_property(
        &self,
        property: &str,
        value: &FieldValue,
    ) -> AppResult<Vec<C::Record>> {
        let property = property.trim().to_lowercase();
        self.find_by_predicate(&|record: &C::Record| record.matches_property(&property, value))
    }

    fn find_by_predicate(
        &self,
        predicate: &dyn Fn(&C::Record) -> bool,
    ) -> AppResult<Vec<C::Record>> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|record| predicate(record))
            .collect())
    }

    fn update(&self, record: &C::Record) -> AppResult<()> {
        let _guard = self.lock();
        let mut entries = self.read_entries()?;

        let position = entries
            .iter()
            .position(|entry| entry.has_id(record.id()))
            .ok_or(AppError::NotFound)?;
        entries[position] = Entry::Decoded(record.clone());

        self.write_entries(&entries)
    }

    fn delete(&self, id: &str) -> AppResult<usize> {
        let _guard = self.lock();
        let mut entries = self.read_entries()?;

        let before = entries.len();
        entries.retain(|entry| !entry.has_id(id));
        let removed = before - entries.len();
        if removed == 0 {
            return Err(AppError::NotFound);
        }

        self.write_entries(&entries)?;
        Ok(removed)
    }

    fn modify(
        &self,
        id: &str,
        mutation: &mut dyn FnMut(&mut C::Record) -> AppResult<()>,
    ) -> AppResult<C::Record> {
        let _guard = self.lock();
        let mut entries = self.read_entries()?;

        let record = entries
            .iter_mut()
            .find_map(|entry| match entry {
                Entry::Decoded(record) if record.id() == id => Some(record),
                _ => None,
            })
            .ok_or(AppError::NotFound)?;

        mutation(record)?;
        let updated = record.clone();

        self.write_entries(&entries)?;
        Ok(updated)
    }
}
