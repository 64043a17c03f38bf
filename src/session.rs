// src/session.rs
//
// The browser's application state, owned by whichever front end is running.
// Front ends translate host events into the methods below and read back
// what to draw; nothing here knows about egui or the terminal.

use std::time::{Duration, Instant};

use crate::{
    card::{self, Card},
    config::{consts::{PAGE_SIZE, SEARCH_DEBOUNCE_MS}, options::UiOptions},
    debounce::Debouncer,
    facets::{self, FilterOptions},
    filter::{self, FilterCriteria, FilteredView},
    loader::LoadError,
    modal::{self, Direction, ModalCommand, ModalDetail, Navigator, SwipeTracker},
    model::Dataset,
    pager::{self, Indicators, Pager},
};

/// Where the session ended up after the initial load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// The fetch failed; carries the cause. Nothing else is initialized.
    Failed(String),
    /// The fetch worked but held no records.
    Empty,
    Ready,
}

/// Scroll position of the card grid, in the host's logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub viewport: f32,
    pub content: f32,
}

impl ScrollMetrics {
    pub fn distance_to_bottom(&self) -> f32 {
        self.content - (self.offset + self.viewport)
    }
}

#[derive(Debug)]
pub struct Session {
    status: Status,
    dataset: Dataset,
    facets: FilterOptions,
    criteria: FilterCriteria,
    view: FilteredView,
    pager: Pager,
    modal: Navigator,
    search: Debouncer<String>,
    swipe: SwipeTracker,
    scroll_threshold: f32,
    generation: u64,
}

impl Session {
    /// Build the session from the outcome of the one-time load.
    pub fn from_load(result: Result<Dataset, LoadError>, ui: &UiOptions) -> Self {
        match result {
            Ok(ds) => Self::with_dataset(ds, ui),
            Err(e) => Self::blank(Status::Failed(e.to_string()), Dataset::default(), ui),
        }
    }

    pub fn with_dataset(ds: Dataset, ui: &UiOptions) -> Self {
        if ds.is_empty() {
            logw!("Session: No offerings data loaded");
            return Self::blank(Status::Empty, ds, ui);
        }

        let mut session = Self::blank(Status::Ready, ds, ui);
        session.facets = facets::derive_options(&session.dataset);
        session.view = FilteredView::all(&session.dataset);
        session.refresh_page();
        logf!("Session: Ready with {} offerings", session.dataset.len());
        session
    }

    fn blank(status: Status, dataset: Dataset, ui: &UiOptions) -> Self {
        Self {
            status,
            dataset,
            facets: FilterOptions::default(),
            criteria: FilterCriteria::default(),
            view: FilteredView::default(),
            pager: Pager::new(PAGE_SIZE),
            modal: Navigator::new(),
            search: Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS)),
            swipe: SwipeTracker::new(ui.swipe_min_distance),
            scroll_threshold: ui.scroll_threshold,
            generation: 0,
        }
    }

    /* ---------- read side ---------- */

    pub fn status(&self) -> &Status { &self.status }
    pub fn is_ready(&self) -> bool { self.status == Status::Ready }

    /// Filters, search and cards only come alive once the load succeeded.
    pub fn controls_active(&self) -> bool { self.is_ready() }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn facets(&self) -> &FilterOptions { &self.facets }
    pub fn criteria(&self) -> &FilterCriteria { &self.criteria }
    pub fn view(&self) -> &FilteredView { &self.view }
    pub fn view_len(&self) -> usize { self.view.len() }
    pub fn pager(&self) -> &Pager { &self.pager }
    pub fn indicators(&self) -> Indicators { self.pager.indicators() }
    pub fn modal_position(&self) -> Option<usize> { self.modal.position() }

    /// Bumped every time the filtered view is recomputed.
    pub fn generation(&self) -> u64 { self.generation }

    /// The clear-search control shows while an applied query is non-empty.
    pub fn clear_visible(&self) -> bool { !self.criteria.query.is_empty() }

    pub fn search_deadline(&self) -> Option<Instant> { self.search.deadline() }

    /// How long the host can stay idle before the pending search is due.
    /// Zero once overdue, None with nothing pending.
    pub fn wake_after(&self, now: Instant) -> Option<Duration> {
        self.search.deadline().map(|due| due.saturating_duration_since(now))
    }

    pub fn results_count(&self) -> String {
        pager::results_count(self.pager.cursor(), self.view.len(), self.dataset.len())
    }

    /// Cards for every materialized position, in view order.
    pub fn visible_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.pager.visible().filter_map(move |i| {
            self.view.get(&self.dataset, i).map(|o| Card { index: i, view: card::project(o) })
        })
    }

    pub fn modal_detail(&self) -> Option<(usize, ModalDetail)> {
        let p = self.modal.position()?;
        self.view.get(&self.dataset, p).map(|o| (p, modal::detail(o)))
    }

    /* ---------- filters ---------- */

    /// A keystroke in the search box. Runs after the quiet period.
    pub fn input_query(&mut self, text: &str, now: Instant) {
        if !self.is_ready() { return; }
        self.search.schedule(s!(text), now);
    }

    /// Fire the pending search once it is due. Returns true if it ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_ready() { return false; }
        match self.search.poll(now) {
            Some(q) => {
                self.criteria.query = q;
                self.apply_filters();
                true
            }
            None => false,
        }
    }

    /// Apply a query immediately, dropping anything still pending.
    pub fn set_query(&mut self, text: &str) {
        if !self.is_ready() { return; }
        self.search.cancel();
        self.criteria.query = s!(text);
        self.apply_filters();
    }

    pub fn clear_search(&mut self) {
        self.set_query("");
    }

    /// Selector changes use the latest typed text, even mid-debounce.
    pub fn select_country(&mut self, country: Option<String>) {
        if !self.is_ready() { return; }
        self.flush_search();
        self.criteria.country = country;
        self.apply_filters();
    }

    pub fn select_city(&mut self, city: Option<String>) {
        if !self.is_ready() { return; }
        self.flush_search();
        self.criteria.city = city;
        self.apply_filters();
    }

    fn flush_search(&mut self) {
        if let Some(q) = self.search.cancel() {
            self.criteria.query = q;
        }
    }

    /// Full re-derivation from the dataset. An open modal follows its record
    /// if it survived, clamps if not, and closes on an empty view.
    fn apply_filters(&mut self) {
        let open_row = self.modal.position().and_then(|p| self.view.row(p).map(|r| (p, r)));

        self.view = filter::apply(&self.dataset, &self.criteria);
        self.generation += 1;
        self.refresh_page();

        if let Some((old_pos, row)) = open_row {
            let len = self.view.len();
            let next = self.view.position_of(row)
                .or_else(|| (len > 0).then(|| old_pos.min(len - 1)));
            self.modal.retarget(next);
            logd!("Modal: View changed under open modal, {:?} → {:?}", old_pos, next);
        }

        logf!(
            "Filter: query={:?} country={:?} city={:?} → {} of {}",
            self.criteria.query, self.criteria.country, self.criteria.city,
            self.view.len(), self.dataset.len()
        );
    }

    fn refresh_page(&mut self) {
        self.pager.reset(&self.view);
        self.pager.load_more();
    }

    /* ---------- pagination ---------- */

    /// Materialize the next page, if any. Returns how many records were added.
    pub fn load_more(&mut self) -> usize {
        if !self.is_ready() || !self.pager.has_more() { return 0; }
        let added = self.pager.load_more().len();
        logd!("Pager: +{} ({} of {})", added, self.pager.cursor(), self.pager.len());
        added
    }

    /// Scroll poll. Cheap no-op once everything is shown.
    pub fn scrolled(&mut self, m: ScrollMetrics) -> usize {
        if !self.is_ready() || !self.pager.has_more() { return 0; }
        if m.distance_to_bottom() <= self.scroll_threshold {
            self.load_more()
        } else {
            0
        }
    }

    /* ---------- modal ---------- */

    pub fn open_card(&mut self, index: usize) -> bool {
        if !self.is_ready() { return false; }
        let opened = self.modal.open(index, self.view.len());
        if opened {
            logd!("Modal: Open at {}", index);
        }
        opened
    }

    pub fn close_modal(&mut self) {
        if self.modal.is_open() {
            logd!("Modal: Close");
        }
        self.modal.close();
    }

    pub fn navigate(&mut self, dir: Direction) -> Option<usize> {
        self.modal.navigate(dir, self.view.len())
    }

    pub fn modal_command(&mut self, cmd: ModalCommand) {
        if !self.modal.is_open() { return; }
        match cmd {
            ModalCommand::Prev => { self.navigate(Direction::Prev); }
            ModalCommand::Next => { self.navigate(Direction::Next); }
            ModalCommand::Close => self.close_modal(),
        }
    }

    pub fn swipe_begin(&mut self, x: f32) {
        if self.modal.is_open() {
            self.swipe.begin(x);
        }
    }

    pub fn swipe_end(&mut self, x: f32) -> Option<usize> {
        if !self.modal.is_open() { return None; }
        let dir = self.swipe.end(x)?;
        self.navigate(dir)
    }
}
