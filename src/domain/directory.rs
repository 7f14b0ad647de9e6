use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use super::models::{Division, DivisionSnapshot, PlayerRecord};
use crate::errors::DirectoryError;

/// Read-only view over both division rankings.
///
/// Records are kept in combined order: the Open sequence followed by the
/// Women sequence, each in rank order. Tie-breaking relies on that order.
#[derive(Debug, Default)]
pub struct PlayerDirectory {
    records: Vec<PlayerRecord>,
    by_id: HashMap<i64, Vec<usize>>,
    by_name: HashMap<String, Vec<usize>>,
    distinct_names: Vec<String>,
}

impl PlayerDirectory {
    pub fn new(open: Vec<PlayerRecord>, women: Vec<PlayerRecord>) -> Result<Self, DirectoryError> {
        Self::validate_division(&open, Division::Open)?;
        Self::validate_division(&women, Division::Women)?;

        let mut records = open;
        records.extend(women);
        Ok(Self::index(records))
    }

    pub fn from_snapshot(snapshot: DivisionSnapshot) -> Result<Self, DirectoryError> {
        Self::new(snapshot.open, snapshot.women)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in combined order
    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    /// Records holding `player_id`, in combined order
    pub fn find_by_id(&self, player_id: i64) -> Vec<&PlayerRecord> {
        self.collect(self.by_id.get(&player_id))
    }

    /// Records whose stored name equals `name` exactly, in combined order
    pub fn find_by_name(&self, name: &str) -> Vec<&PlayerRecord> {
        self.collect(self.by_name.get(name))
    }

    /// Every stored name once, ordered by first appearance
    pub fn names(&self) -> &[String] {
        &self.distinct_names
    }

    fn collect(&self, positions: Option<&Vec<usize>>) -> Vec<&PlayerRecord> {
        positions
            .map(|idx| idx.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }

    fn validate_division(records: &[PlayerRecord], expected: Division) -> Result<(), DirectoryError> {
        let mut seen = HashSet::new();
        for record in records {
            if record.division != expected {
                return Err(DirectoryError::DivisionMismatch {
                    name: record.name.clone(),
                    expected,
                    found: record.division,
                });
            }
            if !seen.insert(record.player_id) {
                return Err(DirectoryError::DuplicatePlayerId {
                    division: expected,
                    player_id: record.player_id,
                });
            }
        }
        Ok(())
    }

    fn index(records: Vec<PlayerRecord>) -> Self {
        let mut by_id: HashMap<i64, Vec<usize>> = HashMap::new();
        let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();
        let mut distinct_names = Vec::new();

        for (idx, record) in records.iter().enumerate() {
            by_id.entry(record.player_id).or_default().push(idx);

            let positions = by_name.entry(record.name.clone()).or_default();
            if positions.is_empty() {
                distinct_names.push(record.name.clone());
            }
            positions.push(idx);
        }

        Self {
            records,
            by_id,
            by_name,
            distinct_names,
        }
    }
}

/// Marks every record whose id is ranked in both divisions
pub fn flag_cross_division(open: &mut [PlayerRecord], women: &mut [PlayerRecord]) -> usize {
    let open_ids: HashSet<i64> = open.iter().map(|p| p.player_id).collect();
    let women_ids: HashSet<i64> = women.iter().map(|p| p.player_id).collect();
    let both: HashSet<i64> = open_ids.intersection(&women_ids).copied().collect();

    for record in open.iter_mut().chain(women.iter_mut()) {
        record.exists_in_both_divisions = both.contains(&record.player_id);
    }

    both.len()
}

/// Directory handle that can be refreshed while requests are in flight.
///
/// Readers get a whole snapshot; a refresh replaces it in one step.
#[derive(Debug, Clone, Default)]
pub struct SharedDirectory {
    inner: Arc<RwLock<Arc<PlayerDirectory>>>,
}

impl SharedDirectory {
    pub fn new(directory: PlayerDirectory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(directory))),
        }
    }

    pub fn current(&self) -> Arc<PlayerDirectory> {
        match self.inner.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    pub fn replace(&self, directory: PlayerDirectory) {
        let fresh = Arc::new(directory);
        match self.inner.write() {
            Ok(mut guard) => *guard = fresh,
            Err(poisoned) => *poisoned.into_inner() = fresh,
        }
    }
}
