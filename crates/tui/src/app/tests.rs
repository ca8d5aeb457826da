use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;

use booklist_catalog::{
	Book, BookActions, BookState, Column, ColumnLayout, SortDirection, SortSelection, StoreEvent,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, Focus};

#[derive(Clone, Default)]
struct RecordingActions {
	queries: Rc<RefCell<Vec<String>>>,
}

impl BookActions for RecordingActions {
	fn fetch_book_details(&self, query: &str) -> u64 {
		let mut queries = self.queries.borrow_mut();
		queries.push(query.to_string());
		queries.len() as u64
	}
}

fn app_with_recorder() -> (App<'static>, RecordingActions) {
	let actions = RecordingActions::default();
	let app = App::new(Box::new(actions.clone()), ColumnLayout::default());
	(app, actions)
}

fn books() -> Vec<Book> {
	vec![
		Book::new("Emma", "1815").with_author("Jane Austen"),
		Book::new("Walden", "1854").with_cover("8231851"),
	]
}

fn loaded(books: Vec<Book>, loading: bool) -> BookState {
	BookState::snapshot(books, loading)
}

fn titles(app: &App<'_>) -> Vec<String> {
	app.view()
		.books()
		.iter()
		.map(|book| book.title.clone())
		.collect()
}

fn draw(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(120, 16)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	let buffer = terminal.backend().buffer();
	let mut text = String::new();
	for y in 0..buffer.area.height {
		for x in 0..buffer.area.width {
			text.push_str(buffer[(x, y)].symbol());
		}
		text.push('\n');
	}
	text
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind,
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		app.handle_key(key(KeyCode::Char(ch))).expect("key");
	}
}

#[test]
fn enter_submits_search_and_resets_sort() {
	let (mut app, actions) = app_with_recorder();
	app.select_sort(SortSelection::MostRecent);

	type_text(&mut app, "Gatsby");
	let outcome = app.handle_key(key(KeyCode::Enter)).expect("enter");

	assert!(outcome.is_none());
	assert_eq!(*actions.queries.borrow(), vec!["Gatsby".to_string()]);
	assert_eq!(app.view().sort(), &SortSelection::None);
	assert_eq!(app.view().search_text(), "Gatsby");
}

#[test]
fn search_button_click_submits_like_enter() {
	let (mut app, actions) = app_with_recorder();
	type_text(&mut app, "Dune");
	app.set_focus(Focus::Table);
	draw(&mut app);

	let button = app.hits.button;
	app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), button.x, button.y));

	assert_eq!(*actions.queries.borrow(), vec!["Dune".to_string()]);
	assert_eq!(app.focus(), Focus::Search);
}

#[test]
fn empty_search_is_forwarded() {
	let (mut app, actions) = app_with_recorder();
	app.handle_key(key(KeyCode::Enter)).expect("enter");
	assert_eq!(*actions.queries.borrow(), vec![String::new()]);
}

#[test]
fn loading_renders_spinner_instead_of_rows() {
	let (mut app, _) = app_with_recorder();
	app.set_store_state(loaded(books(), true));

	let screen = draw(&mut app);
	assert!(screen.contains("Searching"));
	assert!(!screen.contains("Emma"));

	app.set_store_state(loaded(books(), false));
	let screen = draw(&mut app);
	assert!(screen.contains("Emma"));
	assert!(screen.contains("Jane Austen"));
	assert!(screen.contains("2 books"));
}

#[test]
fn cover_cells_show_thumbnail_urls() {
	let (mut app, _) = app_with_recorder();
	app.set_cover_host("http://c.io");
	app.set_store_state(loaded(books(), false));

	let screen = draw(&mut app);
	assert!(screen.contains("http://c.io/b/id/8231851-S.jpg"));
}

#[test]
fn store_events_are_reduced_into_the_view() {
	let (mut app, _) = app_with_recorder();
	let (tx, rx) = mpsc::channel();
	app.set_store_events(rx);

	tx.send(StoreEvent::FetchStarted { id: 1 }).expect("send");
	app.pump_store_events();
	assert!(app.view().is_loading());

	tx.send(StoreEvent::FetchSucceeded { id: 1, books: books() })
		.expect("send");
	app.pump_store_events();
	assert!(!app.view().is_loading());
	assert_eq!(app.view().books().len(), 2);
	assert_eq!(app.results.table_state.selected(), Some(0));
}

#[test]
fn resubmitting_shows_unchanged_results_in_store_order() {
	let (mut app, _) = app_with_recorder();
	app.set_store_state(loaded(books(), false));
	let (tx, rx) = mpsc::channel();
	app.set_store_events(rx);

	app.select_sort(SortSelection::MostRecent);
	assert_eq!(titles(&app), vec!["Walden", "Emma"]);

	type_text(&mut app, "Austen");
	app.handle_key(key(KeyCode::Enter)).expect("enter");
	assert_eq!(titles(&app), vec!["Emma", "Walden"]);

	tx.send(StoreEvent::FetchStarted { id: 1 }).expect("send");
	tx.send(StoreEvent::FetchSucceeded { id: 1, books: books() })
		.expect("send");
	app.pump_store_events();

	assert_eq!(app.view().sort(), &SortSelection::None);
	assert_eq!(titles(&app), vec!["Emma", "Walden"]);
	let screen = draw(&mut app);
	let emma = screen.find("Emma").expect("Emma row");
	let walden = screen.find("Walden").expect("Walden row");
	assert!(emma < walden);
}

#[test]
fn results_of_an_older_search_are_dropped_after_resubmitting() {
	let (mut app, actions) = app_with_recorder();
	let (tx, rx) = mpsc::channel();
	app.set_store_events(rx);

	app.handle_key(key(KeyCode::Enter)).expect("enter");
	tx.send(StoreEvent::FetchStarted { id: 1 }).expect("send");
	app.pump_store_events();
	assert!(app.view().is_loading());

	type_text(&mut app, "Walden");
	app.handle_key(key(KeyCode::Enter)).expect("enter");
	assert_eq!(actions.queries.borrow().len(), 2);

	tx.send(StoreEvent::FetchSucceeded {
		id: 1,
		books: vec![Book::new("Stale", "")],
	})
	.expect("send");
	app.pump_store_events();
	assert!(app.view().is_loading());
	assert!(app.view().books().is_empty());

	tx.send(StoreEvent::FetchStarted { id: 2 }).expect("send");
	tx.send(StoreEvent::FetchSucceeded { id: 2, books: books() })
		.expect("send");
	app.pump_store_events();
	assert!(!app.view().is_loading());
	assert_eq!(titles(&app), vec!["Emma", "Walden"]);
}

#[test]
fn dragging_a_header_onto_another_swaps_columns() {
	let (mut app, _) = app_with_recorder();
	app.set_store_state(loaded(books(), false));
	draw(&mut app);

	let headers = app.results.areas.headers.clone();
	assert_eq!(headers.len(), 4);
	let (source, target) = (headers[0], headers[3]);

	app.handle_mouse(mouse(
		MouseEventKind::Down(MouseButton::Left),
		source.area.x,
		source.area.y,
	));
	assert_eq!(app.view().columns().drag_source(), Some(0));
	app.handle_mouse(mouse(
		MouseEventKind::Up(MouseButton::Left),
		target.area.x,
		target.area.y,
	));

	assert_eq!(
		app.view().columns().order(),
		&[
			Column::PublishDate,
			Column::Cover,
			Column::Author,
			Column::Title
		]
	);
	assert_eq!(app.view().columns().drag_source(), None);
}

#[test]
fn releasing_outside_the_headers_cancels_the_drag() {
	let (mut app, _) = app_with_recorder();
	draw(&mut app);

	let source = app.results.areas.headers[1];
	app.handle_mouse(mouse(
		MouseEventKind::Down(MouseButton::Left),
		source.area.x,
		source.area.y,
	));
	app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0));

	assert_eq!(app.view().columns().order(), &Column::ALL);
	assert_eq!(app.view().columns().drag_source(), None);
}

#[test]
fn hidden_columns_drop_out_of_the_header() {
	let (mut app, _) = app_with_recorder();
	app.handle_key(key(KeyCode::Tab)).expect("tab");
	app.handle_key(key(KeyCode::Tab)).expect("tab");
	assert_eq!(app.focus(), Focus::Columns);

	app.handle_key(key(KeyCode::Right)).expect("right");
	app.handle_key(key(KeyCode::Char(' '))).expect("space");
	assert!(!app.view().columns().is_visible(Column::Cover));

	draw(&mut app);
	let headers: Vec<Column> = app
		.results
		.areas
		.headers
		.iter()
		.map(|cell| cell.column)
		.collect();
	assert_eq!(headers, vec![Column::Title, Column::Author, Column::PublishDate]);
	assert_eq!(app.results.areas.headers[1].index, 2);
}

#[test]
fn keyboard_swap_moves_the_cursor_with_the_column() {
	let (mut app, _) = app_with_recorder();
	app.set_focus(Focus::Columns);

	app.handle_key(key(KeyCode::Char('>'))).expect("swap");
	assert_eq!(app.view().columns().order()[1], Column::Title);
	assert_eq!(app.column_cursor, 1);

	app.handle_key(key(KeyCode::Char('<'))).expect("swap");
	assert_eq!(app.view().columns().order(), &Column::ALL);
	assert_eq!(app.column_cursor, 0);
}

#[test]
fn sort_control_cycles_and_menu_selects() {
	let (mut app, _) = app_with_recorder();
	app.set_store_state(loaded(books(), false));
	app.set_focus(Focus::Sort);

	app.handle_key(key(KeyCode::Right)).expect("right");
	assert_eq!(app.view().sort(), &SortSelection::MostRecent);
	assert_eq!(app.view().books()[0].title, "Walden");

	draw(&mut app);
	let control = app.hits.sort_control;
	app.handle_mouse(mouse(
		MouseEventKind::Down(MouseButton::Left),
		control.x,
		control.y,
	));
	assert!(app.sort_menu.open);

	draw(&mut app);
	let option = app.hits.sort_options[3];
	app.handle_mouse(mouse(
		MouseEventKind::Down(MouseButton::Left),
		option.x,
		option.y,
	));
	assert!(!app.sort_menu.open);
	assert_eq!(
		app.view().sort(),
		&SortSelection::Title(SortDirection::Desc)
	);
	assert_eq!(app.view().books()[0].title, "Walden");
}

#[test]
fn escape_exits_and_table_enter_accepts() {
	let (mut app, _) = app_with_recorder();
	app.set_store_state(loaded(books(), false));

	app.set_focus(Focus::Table);
	app.handle_key(key(KeyCode::Down)).expect("down");
	let accepted = app
		.handle_key(key(KeyCode::Enter))
		.expect("enter")
		.expect("outcome");
	assert!(accepted.accepted);
	assert_eq!(
		accepted.selection.map(|book| book.title),
		Some("Walden".to_string())
	);

	let cancelled = app
		.handle_key(key(KeyCode::Esc))
		.expect("esc")
		.expect("outcome");
	assert!(!cancelled.accepted);
	assert_eq!(cancelled.selection, None);
}
