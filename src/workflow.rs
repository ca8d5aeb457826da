use anyhow::{Context, Result};
use booklist::OpenLibraryClient;
use booklist_catalog::store;
use booklist_tui::{App, BookListOutcome};

use crate::settings::ResolvedConfig;

/// Wire the Open Library store to the terminal book list.
pub(crate) struct BookListWorkflow {
	settings: ResolvedConfig,
	client: OpenLibraryClient,
}

impl BookListWorkflow {
	pub(crate) fn from_config(settings: ResolvedConfig) -> Result<Self> {
		let client = OpenLibraryClient::new(
			&settings.api.base_url,
			settings.api.limit,
			settings.api.timeout,
		)
		.context("failed to build the Open Library client")?;
		log::info!(
			"searching {} (limit {})",
			client.search_url(),
			settings.api.limit
		);
		Ok(Self { settings, client })
	}

	pub(crate) fn run(self) -> Result<BookListOutcome> {
		let Self { settings, client } = self;
		let (handle, events) = store::spawn(client);

		let mut app = App::new(Box::new(handle), settings.columns);
		app.set_theme(settings.theme);
		app.set_cover_host(settings.api.cover_host);
		app.set_query(settings.initial_query);
		app.set_store_events(events);

		let outcome = booklist_tui::run(app)?;
		log::info!(
			"book list closed (accepted: {}, query: {:?})",
			outcome.accepted,
			outcome.query
		);
		Ok(outcome)
	}
}
