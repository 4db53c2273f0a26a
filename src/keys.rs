use crate::app::{App, Screen};
use crate::state::app_state::StandingsFocus;
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;
    let mut outgoing: Vec<NetworkRequest> = Vec::new();

    match (guard.state.active_screen, key_event.code, key_event.modifiers) {
        // Quit — Ctrl-C everywhere; plain q only outside the search input.
        (_, Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // The search screen owns raw character input.
        (Screen::Search, code, modifiers) => {
            handle_search_key(&mut guard, code, modifiers, &mut outgoing);
        }

        (_, Char('q'), _) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        (_, Char('?'), _) => guard.update_screen(Screen::Help),
        (Screen::Help, KeyCode::Esc, _) => guard.exit_help(),

        // Combined standings/top-scorers screen
        (Screen::Standings, KeyCode::Tab, _) => guard.cycle_standings_focus(),
        (Screen::Standings, Char('t'), _) => guard.toggle_top_scorer_see_all(),
        (Screen::Standings, Char('s'), _) => guard.toggle_standings_see_all(),
        (Screen::Standings, Char('j') | KeyCode::Down, _) => {
            match guard.state.standings_focus {
                StandingsFocus::Table => guard.state.table.select_next(),
                StandingsFocus::Scorers => guard.state.scorers.select_next(),
            }
        }
        (Screen::Standings, Char('k') | KeyCode::Up, _) => {
            match guard.state.standings_focus {
                StandingsFocus::Table => guard.state.table.select_prev(),
                StandingsFocus::Scorers => guard.state.scorers.select_prev(),
            }
        }
        (Screen::Standings, Char('r'), _) => {
            if let Some(requests) = guard.reload_league() {
                outgoing.extend(requests);
            }
        }
        (Screen::Standings, KeyCode::Enter, _) => {
            let request = match guard.state.standings_focus {
                StandingsFocus::Table => guard.open_selected_team_fixtures(),
                StandingsFocus::Scorers => guard.open_selected_scorer(),
            };
            outgoing.extend(request);
        }
        (Screen::Standings, KeyCode::Esc, _) => guard.update_screen(Screen::Search),

        // Player statistics
        (Screen::Player, Char('j') | KeyCode::Down, _) => {
            guard.state.player.scroll_offset = guard.state.player.scroll_offset.saturating_add(1);
        }
        (Screen::Player, Char('k') | KeyCode::Up, _) => {
            guard.state.player.scroll_offset = guard.state.player.scroll_offset.saturating_sub(1);
        }
        (Screen::Player, KeyCode::Esc, _) => guard.update_screen(Screen::Standings),

        // Fixtures
        (Screen::Fixtures, Char('j') | KeyCode::Down, _) => guard.state.fixtures.select_next(),
        (Screen::Fixtures, Char('k') | KeyCode::Up, _) => guard.state.fixtures.select_prev(),
        (Screen::Fixtures, KeyCode::Esc, _) => guard.update_screen(Screen::Standings),

        // Global
        (_, Char('f'), _) => guard.toggle_full_screen(),
        (_, Char('"'), _) => guard.toggle_show_logs(),

        _ => {}
    }

    drop(guard);
    for request in outgoing {
        let _ = network_requests.send(request).await;
    }
}

fn handle_search_key(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    outgoing: &mut Vec<NetworkRequest>,
) {
    match (code, modifiers) {
        (Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            let mut text = app.state.search.input.clone();
            text.push(c);
            outgoing.extend(app.search_input_changed(text));
        }
        (KeyCode::Backspace, _) => {
            let mut text = app.state.search.input.clone();
            text.pop();
            outgoing.extend(app.search_input_changed(text));
        }
        (KeyCode::Esc, _) => {
            // Clears the query along with the cached results and prefix.
            app.state.search = Default::default();
        }
        (KeyCode::Tab, _) => outgoing.extend(app.toggle_search_scope()),
        (KeyCode::Down, _) => app.state.search.select_next(),
        (KeyCode::Up, _) => app.state.search.select_prev(),
        (KeyCode::Enter, _) => {
            if app.state.search.selected_league().is_some() {
                outgoing.extend(app.open_selected_league().into_iter().flatten());
            } else {
                outgoing.extend(app.open_selected_country());
            }
        }
        _ => {}
    }
}
