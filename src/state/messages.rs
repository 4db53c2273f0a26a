use crate::state::network::LoadingState;
use crossterm::event::KeyEvent;
use football_api::{FixturesResult, PlayerResult, SearchResult, StandingsResult, TopScorersResult};

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    SearchCountries { query: String },
    SearchLeagues { query: String },
    LoadStandings { league_id: u32, season: u16 },
    LoadTopScorers { league_id: u32, season: u16 },
    LoadPlayer { player_id: u64, season: u16 },
    LoadFixtures { team_id: u32, season: u16, next: u8 },
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    SearchFinished { result: SearchResult },
    StandingsLoaded { result: StandingsResult },
    TopScorersLoaded { result: TopScorersResult },
    PlayerLoaded { result: PlayerResult },
    FixturesLoaded { result: FixturesResult },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
}
