//! Showcase state: every input variant next to a user table.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use formgrid::prelude::*;
use formgrid::Theme;
use termdom::{Color, Edges, Size, Style};

use crate::users::{self, User};

const LOADING_BUTTON: &str = "demo-loading";
const LOADING_DEMO: Duration = Duration::from_secs(2);

/// Change events land here and are applied after dispatch, so the input
/// stays controlled by the app.
type Mailbox = Rc<RefCell<Option<String>>>;

struct Field {
    input: TextInput,
    changes: Mailbox,
}

impl Field {
    fn new(input: TextInput) -> Self {
        let changes = Mailbox::default();
        let sink = Rc::clone(&changes);
        let input = input.on_change(move |value| *sink.borrow_mut() = Some(value.to_string()));
        Self { input, changes }
    }

    /// Apply a pending change. Returns true if the value changed.
    fn sync(&mut self) -> bool {
        let Some(value) = self.changes.borrow_mut().take() else {
            return false;
        };
        self.input.set_value(value);
        true
    }
}

pub struct App {
    basic: Field,
    email: Field,
    password: Field,
    search: Field,
    showcase: Vec<Field>,
    grid: DataGrid<User>,
    users: Vec<User>,
    selected_names: Rc<RefCell<Vec<String>>>,
    loading_until: Option<Instant>,
    theme: Theme,
}

impl App {
    pub fn new() -> Self {
        let theme = Theme::default();
        let users = users::sample_users();

        let selected_names = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&selected_names);
        let grid = DataGrid::new(users::columns(theme))
            .with_id("users")
            .with_rows(users.clone())
            .selectable(true)
            .multi_select(true)
            .empty_message("No users found")
            .theme(theme)
            .on_selection_change(move |rows: &[&User]| {
                *sink.borrow_mut() = rows.iter().map(|user| user.name.clone()).collect();
            });

        let showcase = vec![
            TextInput::new()
                .with_id("size-small")
                .placeholder("Small")
                .size(InputSize::Small),
            TextInput::new()
                .with_id("size-medium")
                .placeholder("Medium (default)"),
            TextInput::new()
                .with_id("size-large")
                .placeholder("Large")
                .size(InputSize::Large),
            TextInput::new()
                .with_id("error-state")
                .label("Error State")
                .placeholder("Enter value...")
                .error("This field is required")
                .invalid(true),
            TextInput::new()
                .with_id("loading-state")
                .label("Loading State")
                .placeholder("Loading...")
                .loading(true),
            TextInput::new()
                .with_id("disabled-state")
                .label("Disabled State")
                .placeholder("Can't edit this")
                .with_value("Disabled value")
                .disabled(true),
        ];

        Self {
            basic: Field::new(
                TextInput::new()
                    .with_id("basic")
                    .label("Basic Input")
                    .placeholder("Enter some text...")
                    .helper_text("This is helper text"),
            ),
            email: Field::new(
                TextInput::new()
                    .with_id("email")
                    .label("Email Address")
                    .with_kind(InputKind::Email)
                    .placeholder("john@example.com")
                    .variant(Variant::Filled),
            ),
            password: Field::new(
                TextInput::new()
                    .with_id("password")
                    .label("Password")
                    .with_kind(InputKind::Password)
                    .placeholder("Enter your password")
                    .show_password_toggle(true)
                    .variant(Variant::Outlined),
            ),
            search: Field::new(
                TextInput::new()
                    .with_id("search")
                    .label("Search with Clear")
                    .placeholder("Search users...")
                    .show_clear_button(true)
                    .variant(Variant::Ghost),
            ),
            showcase: showcase.into_iter().map(Field::new).collect(),
            grid,
            users,
            selected_names,
            loading_until: None,
            theme,
        }
    }

    fn fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        [
            &mut self.basic,
            &mut self.email,
            &mut self.password,
            &mut self.search,
        ]
        .into_iter()
        .chain(self.showcase.iter_mut())
    }

    /// How long the event loop may block before the next [`App::tick`].
    pub fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        self.loading_until
            .map(|until| until.saturating_duration_since(now))
    }

    /// End the loading demo once its time is up.
    pub fn tick(&mut self, now: Instant) {
        if self.loading_until.is_some_and(|until| now >= until) {
            log::info!("[demo] loading finished");
            self.loading_until = None;
            self.grid.set_loading(false);
        }
    }

    fn start_loading(&mut self, now: Instant) {
        log::info!("[demo] loading for {LOADING_DEMO:?}");
        self.loading_until = Some(now + LOADING_DEMO);
        self.grid.set_loading(true);
    }

    pub fn handle(&mut self, event: &Event, now: Instant) {
        let on_loading_button = event.target() == Some(LOADING_BUTTON);
        let starts_loading = match event {
            Event::Click { .. } => on_loading_button,
            Event::Key { key, modifiers, .. } => {
                (modifiers.ctrl && *key == Key::Char('l'))
                    || (on_loading_button
                        && modifiers.none()
                        && matches!(key, Key::Enter | Key::Char(' ')))
            }
            _ => false,
        };
        if starts_loading {
            self.start_loading(now);
            return;
        }

        let mut handled = false;
        for field in self.fields_mut() {
            handled |= field.input.handle(event).is_handled();
        }
        if !handled {
            handled = self.grid.handle(event).is_handled();
        }
        if !handled {
            log::trace!("[demo] unhandled {event:?}");
        }

        if self.search.sync() {
            self.refilter();
        }
        for field in self.fields_mut() {
            field.sync();
        }
    }

    fn refilter(&mut self) {
        let query = self.search.input.value().to_lowercase();
        let rows: Vec<User> = self
            .users
            .iter()
            .filter(|user| user.matches(&query))
            .cloned()
            .collect();
        log::debug!("[demo] search {query:?} matched {} users", rows.len());
        if let Err(err) = self.grid.set_rows(rows) {
            log::warn!("[demo] rejected rows: {err}");
        }
    }

    pub fn element(&self) -> Element {
        let theme = self.theme;
        let heading = |text: &str| Element::text(text).style(Style::new().foreground(theme.primary).bold());

        let basic = Element::col()
            .gap(1)
            .width(Size::Fill)
            .child(heading("Basic Examples"))
            .children(
                [&self.basic, &self.email, &self.password, &self.search]
                    .into_iter()
                    .map(|field| field.input.element()),
            );

        let states = Element::col()
            .gap(1)
            .width(Size::Fill)
            .child(heading("States & Variants"))
            .children(self.showcase.iter().map(|field| field.input.element()));

        let names = self.selected_names.borrow();
        let mut table = Element::col()
            .child(
                Element::row()
                    .gap(2)
                    .child(heading("DataTable"))
                    .child(Element::text(format!("Selected: {}", names.len())))
                    .child(
                        Element::button("[ Demo Loading ]")
                            .id(LOADING_BUTTON)
                            .disabled(self.grid.is_loading())
                            .style_focused(Style::new().reversed()),
                    ),
            )
            .child(self.grid.element());
        if !names.is_empty() {
            table = table.child(
                Element::text(format!("Selected users: {}", names.join(", ")))
                    .style(Style::new().foreground(theme.text_muted)),
            );
        }

        Element::col()
            .width(Size::Fill)
            .padding(Edges::all(1))
            .gap(1)
            .style(Style::new().background(Color::oklch(0.15, 0.01, 250.0)).foreground(theme.text))
            .child(Element::text("formgrid").style(Style::new().bold()))
            .child(
                Element::text("Tab moves focus, Enter or Space activates, Ctrl+L shows loading, Ctrl+Q quits")
                    .style(Style::new().foreground(theme.text_muted)),
            )
            .child(Element::row().width(Size::Fill).gap(4).child(basic).child(states))
            .child(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(target: &str, key: Key) -> Event {
        Event::Key {
            target: Some(target.to_string()),
            key,
            modifiers: Modifiers::new(),
        }
    }

    #[test]
    fn typing_in_search_filters_the_table() {
        let mut app = App::new();
        let now = Instant::now();
        app.handle(&key("search", Key::Char('a')), now);
        app.handle(&key("search", Key::Char('l')), now);

        assert_eq!(app.search.input.value(), "al");
        let names: Vec<&str> = app.grid.rows().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Alice Brown"]);
    }

    #[test]
    fn search_without_matches_shows_empty_message() {
        let mut app = App::new();
        let now = Instant::now();
        app.handle(&key("search", Key::Char('z')), now);

        let root = app.element();
        assert!(termdom::element::find_by_text(&root, "No users found").is_some());
    }

    #[test]
    fn selection_updates_summary() {
        let mut app = App::new();
        let click = Event::Click {
            target: Some("users-row-0-select".to_string()),
            x: 0,
            y: 0,
            button: termdom::MouseButton::Left,
        };
        app.handle(&click, Instant::now());

        assert_eq!(*app.selected_names.borrow(), vec!["John Doe".to_string()]);
        let root = app.element();
        assert!(termdom::element::find_by_text(&root, "Selected: 1").is_some());
        assert!(termdom::element::find_by_text(&root, "Selected users: John Doe").is_some());
    }

    #[test]
    fn loading_demo_ends_after_timeout() {
        let mut app = App::new();
        let start = Instant::now();
        app.handle(&key(LOADING_BUTTON, Key::Enter), start);
        assert!(app.grid.is_loading());
        assert_eq!(app.poll_timeout(start), Some(LOADING_DEMO));

        app.tick(start + LOADING_DEMO);
        assert!(!app.grid.is_loading());
        assert_eq!(app.poll_timeout(start), None);
    }
}
