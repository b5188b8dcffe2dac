//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use lbacad_app::config;
use lbacad_app::handler::update;
use lbacad_app::message::Message;
use lbacad_app::rng::ThreadRandom;
use lbacad_app::signals;
use lbacad_app::state::{AppState, ExplainerTab};
use lbacad_core::prelude::*;
use lbacad_core::RandomSource;

use crate::{event, render};

/// Install a panic hook that restores the terminal before printing
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Run the explainer, optionally starting on a specific tab
pub async fn run(starting_tab: Option<ExplainerTab>) -> Result<()> {
    install_panic_hook();

    let settings = config::load_settings();
    let mut state = AppState::with_settings(settings);
    if let Some(tab) = starting_tab {
        state.select_tab(tab);
    }

    let mut terminal = ratatui::init();

    // Channel for out-of-band messages (signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);
    signals::spawn_signal_handler(msg_tx);

    let mut rng = ThreadRandom;
    let result = run_loop(&mut terminal, &mut state, msg_rx, &mut rng);

    ratatui::restore();
    info!("LB Academy exiting");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    rng: &mut dyn RandomSource,
) -> Result<()> {
    while !state.should_quit() {
        // Out-of-band messages first (signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, rng);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        // Terminal events (or a tick on timeout)
        if let Some(message) = event::poll()? {
            process_message(state, message, rng);
        }
    }

    Ok(())
}

/// Feed a message and any follow-ups through the update function
fn process_message(state: &mut AppState, message: Message, rng: &mut dyn RandomSource) {
    let mut next = Some(message);
    while let Some(msg) = next.take() {
        next = update(state, msg, rng).message;
    }
}
