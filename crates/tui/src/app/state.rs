//! Core state container for the book list front-end.
//!
//! The `app` module exposes the [`App`] struct which bundles the view state,
//! the injected store capability and UI-specific caches.

use std::sync::mpsc::{Receiver, TryRecvError};

use booklist_catalog::{
	Book, BookActions, BookListView, BookState, Column, ColumnLayout, DEFAULT_COVER_HOST,
	SORT_OPTIONS, SortSelection, StoreEvent,
};
use ratatui::layout::Rect;
use throbber_widgets_tui::ThrobberState;

use super::results::ResultsState;
use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::Theme;

/// How the user left the book list.
///
/// Enter on a table row accepts with the book under the cursor. Esc and
/// Ctrl-C cancel with no selection. The search text is reported either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookListOutcome {
	/// Whether the user picked a row rather than cancelling.
	pub accepted: bool,
	/// The book under the cursor when the list was accepted.
	pub selection: Option<Book>,
	/// Search text at exit.
	pub query: String,
}

/// Control that receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	Search,
	Sort,
	Columns,
	Table,
}

impl Focus {
	const ORDER: [Focus; 4] = [Focus::Search, Focus::Sort, Focus::Columns, Focus::Table];

	fn position(self) -> usize {
		Self::ORDER
			.iter()
			.position(|focus| *focus == self)
			.unwrap_or(0)
	}

	#[must_use]
	pub fn next(self) -> Self {
		Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
	}

	#[must_use]
	pub fn previous(self) -> Self {
		Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
	}
}

/// Open/closed state of the sort option list.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SortMenu {
	pub open: bool,
	/// Option under the keyboard cursor while open.
	pub highlighted: usize,
}

/// Clickable regions recorded during the last draw.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitAreas {
	pub input: Rect,
	pub button: Rect,
	pub sort_control: Rect,
	pub sort_options: Vec<Rect>,
	pub checkboxes: Vec<(Rect, Column)>,
}

/// Aggregate state shared across the terminal UI.
///
/// The `App` owns the view state and keeps the last store snapshot it saw.
/// Searches leave through the injected [`BookActions`]; their results come
/// back as [`StoreEvent`]s.
pub struct App<'a> {
	pub(crate) view: BookListView,
	pub(crate) store: BookState,
	/// Text input widget for the search box.
	pub search_input: QueryInput<'a>,
	pub(crate) ui: UiLabels,
	pub(crate) theme: Theme,
	pub(crate) focus: Focus,
	pub(crate) sort_menu: SortMenu,
	/// Order index under the checklist cursor.
	pub(crate) column_cursor: usize,
	pub(crate) results: ResultsState,
	pub(crate) hits: HitAreas,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) cover_host: String,
	actions: Box<dyn BookActions>,
	store_events: Option<Receiver<StoreEvent>>,
}

impl<'a> App<'a> {
	/// Construct an [`App`] that dispatches searches through `actions`.
	pub fn new(actions: Box<dyn BookActions>, columns: ColumnLayout) -> Self {
		Self {
			view: BookListView::new(columns),
			store: BookState::default(),
			search_input: QueryInput::new(""),
			ui: UiLabels::default(),
			theme: Theme::default(),
			focus: Focus::default(),
			sort_menu: SortMenu::default(),
			column_cursor: 0,
			results: ResultsState::default(),
			hits: HitAreas::default(),
			throbber_state: ThrobberState::default(),
			cover_host: DEFAULT_COVER_HOST.to_string(),
			actions,
			store_events: None,
		}
	}

	/// Subscribe to the store's event stream.
	pub fn set_store_events(&mut self, events: Receiver<StoreEvent>) {
		self.store_events = Some(events);
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.ui = labels;
	}

	/// Host used to build cover thumbnail URLs.
	pub fn set_cover_host(&mut self, host: impl Into<String>) {
		self.cover_host = host.into();
	}

	/// Prefill the search box.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.search_input = QueryInput::new(query);
		self.sync_search_text();
	}

	#[must_use]
	pub fn view(&self) -> &BookListView {
		&self.view
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	/// Last store snapshot handed to the view.
	#[must_use]
	pub fn store_state(&self) -> &BookState {
		&self.store
	}

	/// Replace the store snapshot directly, bypassing the event stream.
	pub fn set_store_state(&mut self, state: BookState) {
		self.store = state;
		self.refresh_from_store();
	}

	/// Drain pending store events and hand the resulting snapshot to the view.
	pub(crate) fn pump_store_events(&mut self) {
		let Some(events) = self.store_events.as_ref() else {
			return;
		};

		let mut received = false;
		loop {
			match events.try_recv() {
				Ok(event) => {
					self.store.reduce(event);
					received = true;
				}
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					log::warn!("store event channel closed");
					self.store_events = None;
					break;
				}
			}
		}

		if received {
			self.refresh_from_store();
		}
	}

	fn refresh_from_store(&mut self) {
		self.view.receive(&self.store);
		self.results.ensure_selection(self.view.books().len());
	}

	pub(crate) fn sync_search_text(&mut self) {
		self.view.set_search_text(self.search_input.text());
	}

	/// Forward the search text to the store and reset the sort.
	pub(crate) fn submit_search(&mut self) {
		self.sync_search_text();
		log::debug!("submitting search {:?}", self.view.search_text());
		let id = self.view.submit_search(self.actions.as_ref());
		self.store.expect_request(id);
		self.results.ensure_selection(self.view.books().len());
		self.sort_menu = SortMenu::default();
	}

	pub(crate) fn select_sort(&mut self, selection: SortSelection) {
		self.view.select_sort(selection);
		self.results.ensure_selection(self.view.books().len());
	}

	/// Step through the sort options, wrapping at either end.
	pub(crate) fn cycle_sort(&mut self, forward: bool) {
		let len = SORT_OPTIONS.len();
		let current = self.view.sort().option_index().unwrap_or(0);
		let next = if forward {
			(current + 1) % len
		} else {
			(current + len - 1) % len
		};
		self.select_sort(SORT_OPTIONS[next].1.clone());
	}

	pub(crate) fn set_focus(&mut self, focus: Focus) {
		self.focus = focus;
		if focus != Focus::Sort {
			self.sort_menu.open = false;
		}
	}

	/// The book under the table cursor.
	pub(crate) fn current_selection(&self) -> Option<Book> {
		self.results
			.table_state
			.selected()
			.and_then(|index| self.view.books().get(index))
			.cloned()
	}

	pub(crate) fn outcome(&self, accepted: bool) -> BookListOutcome {
		BookListOutcome {
			accepted,
			selection: if accepted {
				self.current_selection()
			} else {
				None
			},
			query: self.search_input.text().to_string(),
		}
	}

	/// Issue the initial search once, when a query was prefilled.
	pub(crate) fn hydrate_initial_results(&mut self) {
		if !self.search_input.text().is_empty() {
			self.submit_search();
		}
	}
}
