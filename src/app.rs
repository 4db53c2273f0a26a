use crate::state::app_settings::AppSettings;
use crate::state::app_state::{AppState, StandingsFocus};
use crate::state::messages::NetworkRequest;
use crate::state::search::SearchScope;
use football_api::{
    FixturesResult, League, PlayerResult, SearchResult, StandingsResult, TopScorersResult,
};

/// Upcoming fixtures requested per team; one terminal page's worth.
pub const UPCOMING_FIXTURES: u8 = 10;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Screen {
    #[default]
    Search,
    Standings,
    Player,
    Fixtures,
    Help,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new() -> Self {
        let settings = AppSettings::load();

        let mut state = AppState::default();
        state.season = settings.season;

        let app = Self { settings, state };

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        app
    }

    // -----------------------------------------------------------------------
    // Network response handlers — called from main_ui_loop
    // -----------------------------------------------------------------------

    pub fn on_search_finished(&mut self, result: SearchResult) {
        self.note_error(result == SearchResult::Error, "Search failed");
        self.state.search.on_result(result);
    }

    pub fn on_standings_loaded(&mut self, result: StandingsResult) {
        self.note_error(result == StandingsResult::Error, "Standings load failed");
        self.state.table.on_result(result);
        self.check_combined_loading();
    }

    pub fn on_top_scorers_loaded(&mut self, result: TopScorersResult) {
        self.note_error(result == TopScorersResult::Error, "Top scorers load failed");
        self.state.scorers.on_result(result);
        self.check_combined_loading();
    }

    pub fn on_player_loaded(&mut self, result: PlayerResult) {
        self.note_error(result == PlayerResult::Error, "Player load failed");
        self.state.player.on_result(result);
    }

    pub fn on_fixtures_loaded(&mut self, result: FixturesResult) {
        self.note_error(result == FixturesResult::Error, "Fixtures load failed");
        self.state.fixtures.on_result(result);
    }

    fn note_error(&mut self, failed: bool, message: &str) {
        self.state.last_error = failed.then(|| message.to_string());
    }

    /// Both lists load independently; the combined layout flags reset to
    /// the default mode once the slower of the two settles.
    fn check_combined_loading(&mut self) {
        if self.state.combined.loading
            && self.state.table.is_terminal()
            && self.state.scorers.is_terminal()
        {
            self.state.combined.on_loading_complete();
        }
    }

    // -----------------------------------------------------------------------
    // Screen management
    // -----------------------------------------------------------------------

    pub fn update_screen(&mut self, next: Screen) {
        if self.state.active_screen == next {
            return;
        }
        self.state.previous_screen = self.state.active_screen;
        self.state.active_screen = next;
    }

    pub fn exit_help(&mut self) {
        if self.state.active_screen == Screen::Help {
            self.state.active_screen = self.state.previous_screen;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    // -----------------------------------------------------------------------
    // Search screen
    // -----------------------------------------------------------------------

    pub fn search_input_changed(&mut self, text: String) -> Option<NetworkRequest> {
        self.state.search.on_input_changed(&text)
    }

    /// Flip between country and league search; a qualifying query already
    /// in the box is re-run against the new scope.
    pub fn toggle_search_scope(&mut self) -> Option<NetworkRequest> {
        let next = self.state.search.scope.other();
        self.state.search.set_scope(next);
        let input = self.state.search.input.clone();
        if input.is_empty() {
            return None;
        }
        self.state.search.on_input_changed(&input)
    }

    /// Enter on a country hops to league search seeded with that
    /// country's name.
    pub fn open_selected_country(&mut self) -> Option<NetworkRequest> {
        let name = self.state.search.selected_country()?.name.clone();
        self.state.search.set_scope(SearchScope::Leagues);
        self.state.search.on_input_changed(&name)
    }

    /// Enter on a league opens the combined standings screen and kicks
    /// off both loads.
    pub fn open_selected_league(&mut self) -> Option<[NetworkRequest; 2]> {
        let league = self.state.search.selected_league()?.clone();
        Some(self.load_league(league))
    }

    pub fn reload_league(&mut self) -> Option<[NetworkRequest; 2]> {
        let league = self.state.selected_league.clone()?;
        Some(self.load_league(league))
    }

    fn load_league(&mut self, league: League) -> [NetworkRequest; 2] {
        let season = self.state.season;
        self.state.table.start_loading();
        self.state.scorers.start_loading();
        self.state.combined.on_loading_started();
        self.state.standings_focus = StandingsFocus::Table;
        self.update_screen(Screen::Standings);
        let requests = [
            NetworkRequest::LoadStandings { league_id: league.id, season },
            NetworkRequest::LoadTopScorers { league_id: league.id, season },
        ];
        self.state.selected_league = Some(league);
        requests
    }

    // -----------------------------------------------------------------------
    // Standings screen
    // -----------------------------------------------------------------------

    pub fn toggle_top_scorer_see_all(&mut self) {
        self.state.combined.on_top_scorer_see_all();
        self.state.scorers.toggle_see_all();
    }

    pub fn toggle_standings_see_all(&mut self) {
        self.state.combined.on_standings_see_all();
    }

    pub fn cycle_standings_focus(&mut self) {
        self.state.standings_focus = self.state.standings_focus.other();
    }

    pub fn open_selected_scorer(&mut self) -> Option<NetworkRequest> {
        let scorer = self.state.scorers.selected_scorer()?.clone();
        self.state.player.start_loading();
        self.update_screen(Screen::Player);
        Some(NetworkRequest::LoadPlayer {
            player_id: scorer.player_id,
            season: self.state.season,
        })
    }

    pub fn open_selected_team_fixtures(&mut self) -> Option<NetworkRequest> {
        let row = self.state.table.selected_row()?.clone();
        self.state.fixtures.start_loading(row.team_name.clone());
        self.update_screen(Screen::Fixtures);
        Some(NetworkRequest::LoadFixtures {
            team_id: row.team_id,
            season: self.state.season,
            next: UPCOMING_FIXTURES,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_state::{ScorersViewState, TableViewState};
    use crate::state::search::SearchViewState;
    use football_api::{Country, StandingRow, TopScorer};

    fn app() -> App {
        let mut app = App::new();
        app.state.season = 2026;
        app
    }

    fn league(id: u32, name: &str) -> League {
        League { id, name: name.into(), ..Default::default() }
    }

    #[test]
    fn opening_a_league_dispatches_both_loads_concurrently() {
        let mut app = app();
        app.state.search.set_scope(SearchScope::Leagues);
        app.state.search.on_input_changed("pre");
        app.state
            .search
            .on_result(SearchResult::Leagues(vec![league(39, "Premier League")]));

        let [standings, scorers] = app.open_selected_league().unwrap();
        assert!(matches!(
            standings,
            NetworkRequest::LoadStandings { league_id: 39, season: 2026 }
        ));
        assert!(matches!(
            scorers,
            NetworkRequest::LoadTopScorers { league_id: 39, season: 2026 }
        ));
        assert_eq!(app.state.active_screen, Screen::Standings);
        assert_eq!(app.state.table.view, TableViewState::Loading);
        assert_eq!(app.state.scorers.view, ScorersViewState::Loading);
        assert!(app.state.combined.loading);
    }

    #[test]
    fn combined_flags_reset_once_both_loads_settle() {
        let mut app = app();
        app.state.selected_league = Some(league(39, "Premier League"));
        app.reload_league().unwrap();

        app.on_standings_loaded(StandingsResult::Loaded(vec![StandingRow::default()]));
        assert!(app.state.combined.loading, "still waiting on top scorers");

        app.on_top_scorers_loaded(TopScorersResult::Loaded(vec![TopScorer::default()]));
        assert!(!app.state.combined.loading);
        assert!(app.state.combined.combined_view);
    }

    #[test]
    fn standings_failure_runs_initial_loading_error() {
        let mut app = app();
        assert_eq!(app.state.table.view, TableViewState::Initial);

        app.state.selected_league = Some(league(3, "Serie A"));
        app.reload_league().unwrap();
        assert_eq!(app.state.table.view, TableViewState::Loading);

        app.on_standings_loaded(StandingsResult::Error);
        assert_eq!(app.state.table.view, TableViewState::Error);
        assert!(app.state.last_error.is_some());
    }

    #[test]
    fn selecting_a_country_seeds_a_league_search() {
        let mut app = app();
        app.state.search.on_input_changed("eng");
        app.state
            .search
            .on_result(SearchResult::Countries(vec![Country {
                name: "England".into(),
                ..Default::default()
            }]));

        let request = app.open_selected_country().unwrap();
        assert!(matches!(
            request,
            NetworkRequest::SearchLeagues { ref query } if query == "England"
        ));
        assert_eq!(app.state.search.view, SearchViewState::Loading);
    }

    #[test]
    fn scope_toggle_reruns_a_qualifying_query() {
        let mut app = app();
        app.state.search.on_input_changed("eng");
        let request = app.toggle_search_scope().unwrap();
        assert!(matches!(request, NetworkRequest::SearchLeagues { .. }));
    }
}
