//! Page partitioner: the interactive state machine that closes logbook pages.
//!
//! Records start out unassigned. The operator selects a prefix of them
//! (selection always grows from the first unassigned row), closes it into a
//! numbered page, reviews the page totals, then continues with what is left.
//!
//! ```text
//! Empty ──load──▶ Browsing ──commit_page──▶ PageClosed
//!                    ▲                          │
//!                    └──────dismiss_review──────┘
//! ```
//!
//! Every operation is total. An operation whose precondition does not hold
//! leaves the state untouched and reports [`Outcome::Ignored`].

use civlog_types::{FlightRecord, Page, PageNumber, PageTotals, RecordId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::{page_totals, sum_totals};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing loaded, or every record discarded
    Empty,
    Browsing,
    /// Review of the page that was just closed; dismissed back to browsing
    PageClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Up / previous / left
    Backward,
    /// Down / next / right
    Forward,
}

/// Everything the operator can ask the partitioner to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Toggle the unassigned row at an absolute position
    ToggleSelect(usize),
    /// Toggle whichever row is highlighted
    ToggleHighlighted,
    CommitPage,
    DeletePage(PageNumber),
    MoveHighlight(Direction),
    ChangeWindow(Direction),
    /// Horizontal scroll of the table columns; purely presentational
    ScrollColumns(Direction),
    DismissReview,
    StartHere(RecordId),
    ResetSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Ignored,
    /// No state change; the presentation layer should scroll its columns
    ScrollColumns(Direction),
}

impl Outcome {
    fn from_changed(changed: bool) -> Self {
        if changed {
            Outcome::Changed
        } else {
            Outcome::Ignored
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, Outcome::Changed)
    }
}

/// One row of the visible window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibleRow {
    /// Absolute position among the unassigned records
    pub position: usize,
    pub selected: bool,
    pub highlighted: bool,
    pub record: FlightRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub number: PageNumber,
    pub records: usize,
    pub totals: PageTotals,
}

/// Owned, read-only view of the partitioner for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartitionSnapshot {
    pub phase: Phase,
    pub page_size: usize,
    pub window: usize,
    pub window_count: usize,
    pub unassigned: usize,
    pub rows: Vec<VisibleRow>,
    pub selected: Vec<usize>,
    pub highlight: Option<usize>,
    pub pages: Vec<PageSummary>,
    pub running: PageTotals,
    /// The page under review while in [`Phase::PageClosed`]
    pub review: Option<PageSummary>,
}

#[derive(Debug, Clone)]
pub struct PagePartitioner {
    unassigned: Vec<FlightRecord>,
    pages: Vec<Page>,
    selection: BTreeSet<usize>,
    highlight: Option<usize>,
    window: usize,
    page_size: usize,
    reviewing: Option<PageNumber>,
    /// Position of every record in the order it was loaded
    load_order: HashMap<RecordId, usize>,
}

impl PagePartitioner {
    /// Start browsing `records` in the given order. A `page_size` of zero is
    /// treated as one.
    pub fn new(records: Vec<FlightRecord>, page_size: usize) -> Self {
        let load_order = records
            .iter()
            .enumerate()
            .map(|(position, record)| (record.id, position))
            .collect();
        Self {
            unassigned: records,
            pages: Vec::new(),
            selection: BTreeSet::new(),
            highlight: None,
            window: 0,
            page_size: page_size.max(1),
            reviewing: None,
            load_order,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.reviewing.is_some() {
            Phase::PageClosed
        } else if self.unassigned.is_empty() && self.pages.is_empty() {
            Phase::Empty
        } else {
            Phase::Browsing
        }
    }

    pub fn unassigned(&self) -> &[FlightRecord] {
        &self.unassigned
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, number: PageNumber) -> Option<&Page> {
        self.pages.iter().find(|p| p.number == number)
    }

    /// Selected absolute positions, ascending
    pub fn selection(&self) -> impl Iterator<Item = usize> + '_ {
        self.selection.iter().copied()
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of visible windows over the unassigned records (at least one)
    pub fn window_count(&self) -> usize {
        self.unassigned.len().div_ceil(self.page_size).max(1)
    }

    fn window_bounds(&self) -> (usize, usize) {
        let start = (self.window * self.page_size).min(self.unassigned.len());
        let end = (start + self.page_size).min(self.unassigned.len());
        (start, end)
    }

    fn last_page_number(&self) -> Option<PageNumber> {
        self.pages.iter().map(|p| p.number).max()
    }

    fn reset_view(&mut self) {
        self.selection.clear();
        self.highlight = None;
        self.window = 0;
    }

    pub fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::ToggleSelect(position) => self.toggle_select(position),
            Action::ToggleHighlighted => match self.highlight {
                Some(position) => self.toggle_select(position),
                None => Outcome::Ignored,
            },
            Action::CommitPage => self.commit_page(),
            Action::DeletePage(number) => self.delete_page(number),
            Action::MoveHighlight(direction) => self.move_highlight(direction),
            Action::ChangeWindow(direction) => self.change_window(direction),
            Action::ScrollColumns(direction) => {
                if self.phase() == Phase::Browsing {
                    Outcome::ScrollColumns(direction)
                } else {
                    Outcome::Ignored
                }
            }
            Action::DismissReview => self.dismiss_review(),
            Action::StartHere(id) => self.start_here(id),
            Action::ResetSelection => self.reset_selection(),
        }
    }

    /// Deselect `position` if it is selected; otherwise select exactly the
    /// rows `0..=position`.
    pub fn toggle_select(&mut self, position: usize) -> Outcome {
        if self.phase() != Phase::Browsing || position >= self.unassigned.len() {
            return Outcome::Ignored;
        }

        if !self.selection.remove(&position) {
            self.selection = (0..=position).collect();
        }
        Outcome::Changed
    }

    /// Move the selected records, in their current order, into a new page
    /// numbered one past the highest existing page.
    pub fn commit_page(&mut self) -> Outcome {
        if self.phase() != Phase::Browsing || self.selection.is_empty() {
            return Outcome::Ignored;
        }

        let selection = std::mem::take(&mut self.selection);
        let mut records = Vec::with_capacity(selection.len());
        let mut remaining = Vec::with_capacity(self.unassigned.len() - selection.len());
        for (position, record) in std::mem::take(&mut self.unassigned).into_iter().enumerate() {
            if selection.contains(&position) {
                records.push(record);
            } else {
                remaining.push(record);
            }
        }
        self.unassigned = remaining;

        let number = self.last_page_number().map_or(1, |n| n + 1);
        log::info!("closed page {} with {} records", number, records.len());
        self.pages.push(Page::new(number, records));

        self.reset_view();
        self.reviewing = Some(number);
        Outcome::Changed
    }

    /// Discard the highest-numbered page. Its records are gone for good.
    pub fn delete_page(&mut self, number: PageNumber) -> Outcome {
        if self.phase() == Phase::PageClosed || self.last_page_number() != Some(number) {
            return Outcome::Ignored;
        }

        self.pages.retain(|p| p.number != number);
        log::info!("deleted page {}", number);
        Outcome::Changed
    }

    /// Move the cursor one row within the visible window. From no highlight,
    /// either direction lands on the window's first row.
    pub fn move_highlight(&mut self, direction: Direction) -> Outcome {
        let (start, end) = self.window_bounds();
        if self.phase() != Phase::Browsing || start == end {
            return Outcome::Ignored;
        }

        let next = match (self.highlight, direction) {
            (None, _) => start,
            (Some(current), Direction::Backward) => current.saturating_sub(1).max(start),
            (Some(current), Direction::Forward) => (current + 1).min(end - 1),
        };

        let changed = self.highlight != Some(next);
        self.highlight = Some(next);
        Outcome::from_changed(changed)
    }

    /// Show the previous or next window of `page_size` rows, clamped to the
    /// windows that exist. Clears the highlight.
    pub fn change_window(&mut self, direction: Direction) -> Outcome {
        if self.phase() != Phase::Browsing {
            return Outcome::Ignored;
        }

        let last = self.window_count() - 1;
        let next = match direction {
            Direction::Backward => self.window.saturating_sub(1),
            Direction::Forward => (self.window + 1).min(last),
        };

        let changed = next != self.window || self.highlight.is_some();
        self.window = next;
        self.highlight = None;
        Outcome::from_changed(changed)
    }

    pub fn dismiss_review(&mut self) -> Outcome {
        Outcome::from_changed(self.reviewing.take().is_some())
    }

    /// Replace every closed page with a single page 1 holding the unassigned
    /// rows up to and including `id`.
    ///
    /// Records of the replaced pages go back to the unassigned set, which is
    /// rebuilt in load order. Records of pages deleted earlier stay gone.
    pub fn start_here(&mut self, id: RecordId) -> Outcome {
        if self.phase() != Phase::Browsing {
            return Outcome::Ignored;
        }
        let Some(index) = self.unassigned.iter().position(|r| r.id == id) else {
            return Outcome::Ignored;
        };

        let records: Vec<FlightRecord> = self.unassigned.drain(..=index).collect();
        let replaced = std::mem::take(&mut self.pages);
        log::info!(
            "starting over at row {}: page 1 now holds {} records, {} earlier pages reopened",
            index + 1,
            records.len(),
            replaced.len()
        );

        let mut remaining: Vec<FlightRecord> =
            replaced.into_iter().flat_map(|page| page.records).collect();
        remaining.append(&mut self.unassigned);
        let order = &self.load_order;
        remaining.sort_by_key(|r| order.get(&r.id).copied().unwrap_or(usize::MAX));

        self.unassigned = remaining;
        self.pages = vec![Page::new(1, records)];

        self.reset_view();
        Outcome::Changed
    }

    pub fn reset_selection(&mut self) -> Outcome {
        if self.selection.is_empty() {
            return Outcome::Ignored;
        }
        self.selection.clear();
        Outcome::Changed
    }

    /// Totals over every closed page
    pub fn running_totals(&self) -> PageTotals {
        let totals: Vec<PageTotals> = self.pages.iter().map(|p| page_totals(&p.records)).collect();
        sum_totals(&totals)
    }

    fn summarize(page: &Page) -> PageSummary {
        PageSummary {
            number: page.number,
            records: page.len(),
            totals: page_totals(&page.records),
        }
    }

    pub fn snapshot(&self) -> PartitionSnapshot {
        let (start, end) = self.window_bounds();
        let rows = (start..end)
            .map(|position| VisibleRow {
                position,
                selected: self.selection.contains(&position),
                highlighted: self.highlight == Some(position),
                record: self.unassigned[position].clone(),
            })
            .collect();

        let pages: Vec<PageSummary> = self.pages.iter().map(Self::summarize).collect();
        let running: PageTotals = pages.iter().map(|p| &p.totals).sum();
        let review = self
            .reviewing
            .and_then(|number| pages.iter().find(|p| p.number == number).copied());

        PartitionSnapshot {
            phase: self.phase(),
            page_size: self.page_size,
            window: self.window,
            window_count: self.window_count(),
            unassigned: self.unassigned.len(),
            rows,
            selected: self.selection.iter().copied().collect(),
            highlight: self.highlight,
            pages,
            running,
            review,
        }
    }
}
