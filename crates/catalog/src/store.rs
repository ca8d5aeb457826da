//! The book store: shared state, its reducer, and the fetch worker.
//!
//! The component never owns this state. It reads [`BookState`] snapshots and
//! dispatches searches through [`BookActions`]; how and when the fetch runs
//! is decided here.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use anyhow::Result;

use crate::book::Book;

/// Dispatch capability handed to the component.
pub trait BookActions {
	/// Start a search for `query` and return the id of the request.
	///
	/// Empty queries are forwarded as-is.
	fn fetch_book_details(&self, query: &str) -> u64;
}

/// Backend that resolves a search term into books.
pub trait BookSource: Send + 'static {
	fn search(&self, query: &str) -> Result<Vec<Book>>;
}

impl<F> BookSource for F
where
	F: Fn(&str) -> Result<Vec<Book>> + Send + 'static,
{
	fn search(&self, query: &str) -> Result<Vec<Book>> {
		self(query)
	}
}

/// Notifications emitted by the store worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
	FetchStarted { id: u64 },
	FetchSucceeded { id: u64, books: Vec<Book> },
	FetchFailed { id: u64, message: String },
}

impl StoreEvent {
	#[must_use]
	pub fn id(&self) -> u64 {
		match self {
			StoreEvent::FetchStarted { id }
			| StoreEvent::FetchSucceeded { id, .. }
			| StoreEvent::FetchFailed { id, .. } => *id,
		}
	}
}

/// Snapshot the component renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookState {
	pub books: Vec<Book>,
	pub loading: bool,
	/// Message of the most recent failed fetch. Never rendered.
	pub error: Option<String>,
	latest: u64,
}

impl BookState {
	/// A snapshot holding `books` with no request seen yet.
	#[must_use]
	pub fn snapshot(books: Vec<Book>, loading: bool) -> Self {
		Self {
			books,
			loading,
			..Self::default()
		}
	}

	/// Mark request `id` as dispatched so events of older requests are
	/// dropped even if they arrive before its `FetchStarted`.
	pub fn expect_request(&mut self, id: u64) {
		self.latest = self.latest.max(id);
	}

	/// Apply `event`, returning `true` when the books changed.
	///
	/// Events that belong to a request older than the latest one seen are
	/// dropped.
	pub fn reduce(&mut self, event: StoreEvent) -> bool {
		if event.id() < self.latest {
			log::debug!("dropping stale store event for request {}", event.id());
			return false;
		}
		self.latest = event.id();

		match event {
			StoreEvent::FetchStarted { .. } => {
				self.loading = true;
				self.error = None;
				false
			}
			StoreEvent::FetchSucceeded { books, .. } => {
				self.loading = false;
				self.books = books;
				true
			}
			StoreEvent::FetchFailed { message, .. } => {
				self.loading = false;
				self.error = Some(message);
				false
			}
		}
	}
}

#[derive(Debug)]
struct FetchRequest {
	id: u64,
	query: String,
}

/// Sending half of the store, cloned into whoever needs to dispatch.
#[derive(Debug, Clone)]
pub struct StoreHandle {
	requests: Sender<FetchRequest>,
	latest_id: Arc<AtomicU64>,
}

impl BookActions for StoreHandle {
	fn fetch_book_details(&self, query: &str) -> u64 {
		let id = self.latest_id.fetch_add(1, Ordering::AcqRel) + 1;
		let request = FetchRequest {
			id,
			query: query.to_string(),
		};
		if self.requests.send(request).is_err() {
			log::warn!("store worker has stopped; dropping search for {query:?}");
		}
		id
	}
}

/// Start the store worker around `source`.
///
/// The worker runs searches one at a time. Requests that queue up behind a
/// running search are collapsed to the newest. The worker exits once every
/// [`StoreHandle`] is dropped.
pub fn spawn<S: BookSource>(source: S) -> (StoreHandle, Receiver<StoreEvent>) {
	let (request_tx, request_rx) = mpsc::channel::<FetchRequest>();
	let (event_tx, event_rx) = mpsc::channel();
	let latest_id = Arc::new(AtomicU64::new(0));

	thread::spawn(move || {
		while let Ok(mut request) = request_rx.recv() {
			while let Ok(newer) = request_rx.try_recv() {
				request = newer;
			}

			if event_tx
				.send(StoreEvent::FetchStarted { id: request.id })
				.is_err()
			{
				break;
			}

			log::info!("fetching books for {:?} (request {})", request.query, request.id);
			let event = match source.search(&request.query) {
				Ok(books) => {
					log::info!("request {} returned {} books", request.id, books.len());
					StoreEvent::FetchSucceeded {
						id: request.id,
						books,
					}
				}
				Err(err) => {
					log::warn!("request {} failed: {err:#}", request.id);
					StoreEvent::FetchFailed {
						id: request.id,
						message: format!("{err:#}"),
					}
				}
			};

			if event_tx.send(event).is_err() {
				break;
			}
		}
	});

	let handle = StoreHandle {
		requests: request_tx,
		latest_id,
	};
	(handle, event_rx)
}
