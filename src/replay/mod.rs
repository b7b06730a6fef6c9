//! The flat-file replay store: one game per line, indexed by byte offset on open for O(1)
//! random access, plus a batching iterator for streaming consumption.
//!
//! Grounded in `examples/original_source/hive/trajectory/game_dataloader.py`'s
//! `GameDataLoader`: build an index once, seek-and-read on `get`, and never let one malformed
//! record abort a batch — count and log it instead.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error as ThisError;

use crate::hive::notation::replay as replay_moves;
use crate::prelude::*;

#[derive(ThisError, Debug)]
/// I/O- and format-boundary errors raised by the replay store.
pub enum ReplayError
{
    #[error("failed to read the replay store")]
    Io(#[from] std::io::Error),
    #[error("record {0} is out of range (store has {1} records)")]
    OutOfRange(usize, usize),
    #[error("malformed replay record: {0}")]
    Malformed(#[from] Error),
}

#[derive(Clone, Debug)]
/// One parsed line of a replay store: `units;result;turn;move_1;...;move_n`.
pub struct GameRecord
{
    pub units:  GameTypeString,
    /// Free-form outcome text, as recorded by whatever produced the store.
    pub result: String,
    pub turn:   Turn,
    pub moves:  Vec<MoveString>,
}

impl std::str::FromStr for GameRecord
{
    type Err = Error;
    fn from_str(line: &str) -> std::result::Result<Self, Error>
    {
        let mut fields = line.split(';');

        let units = fields
            .next()
            .ok_or_else(|| Error::new(Kind::MalformedNotation, "replay record is missing its units field".into()))?
            .parse::<GameTypeString>()?;

        let result = fields
            .next()
            .ok_or_else(|| Error::new(Kind::MalformedNotation, "replay record is missing its result field".into()))?
            .to_owned();

        let turn_string = fields
            .next()
            .ok_or_else(|| Error::new(Kind::MalformedNotation, "replay record is missing its turn field".into()))?
            .parse::<TurnString>()?;
        let turn: Turn = turn_string.try_into()?;

        let moves = fields.map(|s| s.parse::<MoveString>()).collect::<Result<Vec<_>>>()?;

        Ok(GameRecord { units, result, turn, moves })
    }
}

impl std::fmt::Display for GameRecord
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let turn_string: TurnString = self.turn.into();
        write!(
            f,
            "{};{};{}{}{}",
            self.units,
            self.result,
            turn_string,
            if self.moves.is_empty() { "" } else { ";" },
            self.moves.iter().map(|mv| mv.as_ref()).collect::<Vec<_>>().join(";")
        )
    }
}

impl GameRecord
{
    /// Replays this record's moves from the initial position, checking the result against the
    /// record's own claimed turn.
    pub fn replay(&self) -> Result<Rc<GameState>>
    {
        let options = Options {
            expansions: self.units.clone().into(),
            ..Default::default()
        };
        replay_moves(&self.moves, options, Some(self.turn))
    }
}

/// A line-oriented replay file, indexed by byte offset for O(1) random access.
pub struct ReplayStore
{
    path:    PathBuf,
    offsets: Vec<u64>,
}

impl ReplayStore
{
    /// Opens `path` and builds its line-offset index.
    pub fn open(path: impl AsRef<Path>) -> std::result::Result<ReplayStore, ReplayError>
    {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        let mut reader = BufReader::new(file);

        let mut offsets = vec![];
        let mut pos = 0u64;
        let mut line = String::new();
        loop
        {
            offsets.push(pos);
            line.clear();
            let read = reader.read_line(&mut line)?;
            if read == 0
            {
                offsets.pop();
                break;
            }
            pos += read as u64;
        }

        Ok(ReplayStore { path, offsets })
    }

    /// The number of records in the store.
    pub fn len(&self) -> usize
    {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.offsets.is_empty()
    }

    /// Reads and parses the record at `index`, seeking directly to its byte offset.
    pub fn get(&self, index: usize) -> std::result::Result<GameRecord, ReplayError>
    {
        let &offset = self.offsets.get(index).ok_or(ReplayError::OutOfRange(index, self.offsets.len()))?;

        let mut file = File::open(&self.path)?;
        file.seek(SeekFrom::Start(offset))?;
        let mut reader = BufReader::new(file);
        let mut line = String::new();
        reader.read_line(&mut line)?;

        let record = line.trim_end_matches(['\n', '\r']).parse::<GameRecord>()?;
        Ok(record)
    }

    /// Iterates over the store in chunks of `batch_size` resolved [`GameState`]s, skipping
    /// (and logging) any record that fails to parse or replay rather than aborting.
    pub fn batches(&self, batch_size: usize) -> Batches<'_>
    {
        Batches { store: self, batch_size, next: 0 }
    }
}

/// Iterator over batch-sized chunks of a [`ReplayStore`], produced by [`ReplayStore::batches`].
pub struct Batches<'a>
{
    store:      &'a ReplayStore,
    batch_size: usize,
    next:       usize,
}

impl<'a> Iterator for Batches<'a>
{
    type Item = Vec<Rc<GameState>>;

    fn next(&mut self) -> Option<Self::Item>
    {
        if self.next >= self.store.len()
        {
            return None;
        }

        let end = (self.next + self.batch_size).min(self.store.len());
        let mut batch = Vec::with_capacity(end - self.next);
        let mut errors = 0usize;

        for i in self.next..end
        {
            let resolved = self.store.get(i).and_then(|record| record.replay().map_err(ReplayError::from));
            match resolved
            {
                | Ok(state) => batch.push(state),
                | Err(err) =>
                {
                    log::trace!("skipping malformed replay record {}: {}", i, err);
                    errors += 1;
                }
            }
        }

        if errors > 0
        {
            log::warn!("skipped {} malformed record(s) in batch starting at {}", errors, self.next);
        }

        self.next = end;
        Some(batch)
    }
}

#[cfg(test)]
mod tests
{
    use std::io::Write;

    use super::*;

    fn write_store(lines: &[&str]) -> PathBuf
    {
        let dir = std::env::temp_dir().join("hive_engine_replay_store_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("{}.txt", lines.len()));
        let mut file = File::create(&path).unwrap();
        for line in lines
        {
            writeln!(file, "{}", line).unwrap();
        }
        path
    }

    #[test]
    fn indexes_and_retrieves_every_line()
    {
        let path = write_store(&["Base;*;White[1];wS1", "Base;*;Black[1];wS1;bS1 wS1-"]);
        let store = ReplayStore::open(&path).unwrap();
        assert_eq!(store.len(), 2);

        let first = store.get(0).unwrap();
        assert_eq!(first.moves.len(), 1);

        let second = store.get(1).unwrap();
        assert_eq!(second.moves.len(), 2);
    }

    #[test]
    fn out_of_range_is_an_error()
    {
        let path = write_store(&["Base;*;White[1];wS1"]);
        let store = ReplayStore::open(&path).unwrap();
        assert!(matches!(store.get(5), Err(ReplayError::OutOfRange(5, 1))));
    }

    #[test]
    fn batches_skip_malformed_records_without_aborting()
    {
        let path = write_store(&["Base;*;White[1];wS1", "not a valid record", "Base;*;White[1];wS1"]);
        let store = ReplayStore::open(&path).unwrap();
        let batch = store.batches(10).next().unwrap();
        assert_eq!(batch.len(), 2);
    }
}
