use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::chain::SignerSubmitter;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::wallet::LocalWallet;

pub fn run(config: Config, runtime: tokio::runtime::Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);

    let wallet = Arc::new(LocalWallet::new(&config));
    let submitter = Arc::new(SignerSubmitter::new(&config));
    let mut app = App::new(config, wallet, submitter, runtime, events.sender());
    app.startup();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(..)) => {}
            Ok(event) => app.on_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
