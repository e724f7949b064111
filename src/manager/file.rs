//! Position-addressed note manager over a whole-collection store.

use crate::domain::{Clock, Note, NotePatch, Query, by_title};
use crate::store::{NoteStore, StoreResult};
use log::{debug, info};

/// In-memory note collection backed by a [`NoteStore`].
///
/// The collection is loaded once on construction. Each mutating call
/// changes the in-memory list and then hands the complete list back to the
/// store; a failed save undoes the change. Notes are addressed by
/// zero-based position.
///
/// Not safe for concurrent use: two managers (or two processes) writing the
/// same backing file will overwrite each other's changes.
///
/// # Examples
///
/// ```
/// use jotter::domain::ManualClock;
/// use jotter::manager::NoteManager;
/// use jotter::store::MemoryStore;
///
/// let clock = ManualClock::starting_at("2024-01-15 10:30:00").unwrap();
/// let mut notes = NoteManager::new(MemoryStore::new(), clock).unwrap();
/// notes.add_note("Buy milk", "2% organic", Some("Errands"), vec![]).unwrap();
/// assert_eq!(notes.search_by_category("errands").len(), 1);
/// ```
pub struct NoteManager<S, C> {
    store: S,
    clock: C,
    notes: Vec<Note>,
    skipped: usize,
}

impl<S: NoteStore, C: Clock> NoteManager<S, C> {
    /// Loads the collection from `store`.
    ///
    /// Malformed records are skipped; see [`NoteManager::skipped_on_load`].
    pub fn new(store: S, clock: C) -> StoreResult<Self> {
        let report = store.load()?;
        if report.skipped > 0 {
            info!("{} malformed records skipped while loading", report.skipped);
        }
        Ok(Self {
            store,
            clock,
            notes: report.notes,
            skipped: report.skipped,
        })
    }

    /// Returns every note in insertion order.
    pub fn get_all_notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the note at `index`, or `None` when out of range.
    pub fn get_note(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Number of malformed records left out by the initial load.
    pub fn skipped_on_load(&self) -> usize {
        self.skipped
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Appends a new note and persists the collection.
    pub fn add_note(
        &mut self,
        title: &str,
        content: &str,
        category: Option<&str>,
        tags: Vec<String>,
    ) -> StoreResult<&Note> {
        let note = Note::new(title, content, category, tags, self.clock.now());
        self.notes.push(note);
        if let Err(e) = self.persist() {
            self.notes.pop();
            return Err(e);
        }

        let index = self.notes.len() - 1;
        debug!("added note #{}", index);
        Ok(&self.notes[index])
    }

    /// Applies `patch` to the note at `index` and persists.
    ///
    /// Returns `false` without touching anything when `index` is out of
    /// range. An empty patch still moves `updated_at` forward. If the save
    /// fails the note is restored to its previous state.
    pub fn update_note(&mut self, index: usize, patch: &NotePatch) -> StoreResult<bool> {
        let Some(note) = self.notes.get_mut(index) else {
            return Ok(false);
        };
        let previous = note.clone();
        note.apply(patch, self.clock.now_after(previous.updated_at()));

        if let Err(e) = self.persist() {
            self.notes[index] = previous;
            return Err(e);
        }

        debug!("updated note #{}", index);
        Ok(true)
    }

    /// Removes the note at `index` and persists.
    ///
    /// Returns `false` without touching anything when `index` is out of range.
    /// If the save fails the note is put back.
    pub fn delete_note(&mut self, index: usize) -> StoreResult<bool> {
        if index >= self.notes.len() {
            return Ok(false);
        }
        let removed = self.notes.remove(index);
        if let Err(e) = self.persist() {
            self.notes.insert(index, removed);
            return Err(e);
        }

        debug!("deleted note #{}", index);
        Ok(true)
    }

    /// Notes whose category equals `category`, ignoring case, sorted by title.
    pub fn search_by_category(&self, category: &str) -> Vec<&Note> {
        self.matching(&Query::Category(category.to_string()))
    }

    /// Notes carrying `tag`, ignoring case, sorted by title.
    pub fn search_by_tag(&self, tag: &str) -> Vec<&Note> {
        self.matching(&Query::Tag(tag.to_string()))
    }

    /// Notes whose title or content contains `keyword`, ignoring case, sorted by title.
    pub fn search_by_keyword(&self, keyword: &str) -> Vec<&Note> {
        self.matching(&Query::Keyword(keyword.to_string()))
    }

    /// Runs `query`, returning each match with its position, sorted by
    /// lowercase title. Equal titles keep storage order.
    pub fn search(&self, query: &Query) -> Vec<(usize, &Note)> {
        let mut hits: Vec<(usize, &Note)> = self
            .notes
            .iter()
            .enumerate()
            .filter(|(_, note)| query.matches(note))
            .collect();
        hits.sort_by(|(_, a), (_, b)| by_title(a, b));
        hits
    }

    fn matching(&self, query: &Query) -> Vec<&Note> {
        self.search(query).into_iter().map(|(_, note)| note).collect()
    }

    fn persist(&mut self) -> StoreResult<()> {
        self.store.save(&self.notes)
    }
}
