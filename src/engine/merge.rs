// src/engine/merge.rs
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::model::{Occurrence, Session, SessionKey};

/// Per-day input: 1-based period number → occurrences in that period.
pub type PeriodCells = BTreeMap<u32, Vec<Occurrence>>;

/// Merge vertically adjacent occurrences of the same course into sessions.
///
/// Walks periods `1..=period_count`. An occurrence extends the open session with
/// the same identity key when that session ended in the previous period; any
/// other occurrence opens a new session. Keys absent from a period are closed,
/// so a course that reappears after a gap becomes a second session.
///
/// Sessions come out in discovery order (by start period, then by position in
/// the cell); nothing is re-sorted.
pub fn build_sessions(per_period: &PeriodCells, period_count: u32) -> Vec<Session> {
    let mut sessions: Vec<Session> = Vec::new();
    let mut open: HashMap<SessionKey, usize> = HashMap::new();

    for p in 1..=period_count {
        let mut present: HashSet<SessionKey> = HashSet::new();

        for occ in per_period.get(&p).map(Vec::as_slice).unwrap_or(&[]) {
            let key = occ.key();
            if !present.insert(key.clone()) {
                continue; // same course twice in one cell
            }
            match open.get(&key) {
                Some(&ix) if sessions[ix].p_to + 1 == p => sessions[ix].p_to = p,
                _ => {
                    open.insert(key, sessions.len());
                    sessions.push(Session::open(p, occ));
                }
            }
        }

        open.retain(|k, _| present.contains(k));
    }

    sessions
}
