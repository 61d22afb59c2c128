mod app;
mod users;

use std::fs::File;
use std::time::Instant;

use simplelog::{Config, LevelFilter, WriteLogger};
use termdom::{Event, FocusState, Key, Terminal};

use app::App;

fn main() -> std::io::Result<()> {
    let log_file = File::create("formgrid-demo.log")?;
    if let Err(err) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
        eprintln!("logging disabled: {err}");
    }
    log::info!("formgrid demo starting");

    let mut term = Terminal::new()?;
    let mut focus = FocusState::new();
    let mut app = App::new();

    loop {
        let now = Instant::now();
        app.tick(now);

        // The grid disables its controls while loading
        if let Some(blur) = focus.revalidate(&app.element()) {
            app.handle(&blur, now);
        }

        let mut root = app.element();
        if let Some(id) = focus.focused() {
            root.mark_focused(id);
        }
        term.render(&root)?;

        let raw = term.poll(app.poll_timeout(now))?;
        let events = focus.process_events(&raw, &root, term.layout());
        for event in &events {
            if is_quit(event) {
                log::info!("formgrid demo exiting");
                return Ok(());
            }
            app.handle(event, Instant::now());
        }
    }
}

/// Ctrl+Q or Ctrl+C anywhere, or Escape with nothing focused.
fn is_quit(event: &Event) -> bool {
    match event {
        Event::Key {
            key: Key::Char('q' | 'c'),
            modifiers,
            ..
        } => modifiers.ctrl,
        Event::Key {
            target: None,
            key: Key::Escape,
            ..
        } => true,
        _ => false,
    }
}
