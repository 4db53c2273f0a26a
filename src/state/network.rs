use crate::state::messages::{NetworkRequest, NetworkResponse};
use football_api::client::{ApiError, FootballApi};
use football_api::{client, FixturesResult, PlayerResult, SearchResult, StandingsResult, TopScorersResult};
use log::{debug, error};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

pub struct NetworkWorker {
    api: FootballApi,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    in_flight: Arc<AtomicUsize>,
}

impl NetworkWorker {
    pub fn new(
        api: FootballApi,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            api,
            requests,
            responses,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Each request runs on its own task so the standings and top-scorers
    /// loads for one screen proceed concurrently. Responses land on the
    /// channel in completion order — each screen holds a single state
    /// slot, so a slow earlier request can overwrite a faster later one.
    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            let api = self.api.clone();
            let responses = self.responses.clone();
            let in_flight = self.in_flight.clone();

            tokio::spawn(async move {
                start_loading(&responses, &in_flight).await;

                debug!("network request: {request:?}");
                let response = handle_request(&api, request).await;
                debug!("network request complete");

                stop_loading(&responses, &in_flight, !is_error(&response)).await;

                if let Err(e) = responses.send(response).await {
                    error!("Failed to send network response: {e}");
                }
            });
        }
    }
}

/// Repository-call-plus-mapping for one request. A transport/HTTP/decoding
/// failure is logged here and collapses into the domain Error variant; no
/// ApiError crosses into the state layer.
async fn handle_request(api: &FootballApi, request: NetworkRequest) -> NetworkResponse {
    match request {
        NetworkRequest::SearchCountries { query } => {
            let result = match api.search_countries(&query).await {
                Ok(response) => client::map_country_search(&response),
                Err(err) => search_error(err),
            };
            NetworkResponse::SearchFinished { result }
        }
        NetworkRequest::SearchLeagues { query } => {
            let result = match api.search_leagues(&query).await {
                Ok(response) => client::map_league_search(&response),
                Err(err) => search_error(err),
            };
            NetworkResponse::SearchFinished { result }
        }
        NetworkRequest::LoadStandings { league_id, season } => {
            let result = match api.standings(league_id, season).await {
                Ok(response) => client::map_standings(&response),
                Err(err) => {
                    error!("standings load failed: {err}");
                    StandingsResult::Error
                }
            };
            NetworkResponse::StandingsLoaded { result }
        }
        NetworkRequest::LoadTopScorers { league_id, season } => {
            let result = match api.top_scorers(league_id, season).await {
                Ok(response) => client::map_top_scorers(&response),
                Err(err) => {
                    error!("top scorers load failed: {err}");
                    TopScorersResult::Error
                }
            };
            NetworkResponse::TopScorersLoaded { result }
        }
        NetworkRequest::LoadPlayer { player_id, season } => {
            let result = match api.player(player_id, season).await {
                Ok(response) => client::map_player_statistics(&response),
                Err(err) => {
                    error!("player load failed: {err}");
                    PlayerResult::Error
                }
            };
            NetworkResponse::PlayerLoaded { result }
        }
        NetworkRequest::LoadFixtures { team_id, season, next } => {
            let result = match api.fixtures(team_id, season, next).await {
                Ok(response) => client::map_fixtures(&response),
                Err(err) => {
                    error!("fixtures load failed: {err}");
                    FixturesResult::Error
                }
            };
            NetworkResponse::FixturesLoaded { result }
        }
    }
}

fn search_error(err: ApiError) -> SearchResult {
    error!("search failed: {err}");
    SearchResult::Error
}

fn is_error(response: &NetworkResponse) -> bool {
    match response {
        NetworkResponse::LoadingStateChanged { .. } => false,
        NetworkResponse::SearchFinished { result } => *result == SearchResult::Error,
        NetworkResponse::StandingsLoaded { result } => *result == StandingsResult::Error,
        NetworkResponse::TopScorersLoaded { result } => *result == TopScorersResult::Error,
        NetworkResponse::PlayerLoaded { result } => *result == PlayerResult::Error,
        NetworkResponse::FixturesLoaded { result } => *result == FixturesResult::Error,
    }
}

/// First request in starts the spinner ticker; it runs until the last
/// concurrent request checks out.
async fn start_loading(
    responses: &mpsc::Sender<NetworkResponse>,
    in_flight: &Arc<AtomicUsize>,
) {
    if in_flight.fetch_add(1, Ordering::Relaxed) > 0 {
        return;
    }

    let mut loading_state = LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[0] };
    let _ = responses
        .send(NetworkResponse::LoadingStateChanged { loading_state })
        .await;

    let responses = responses.clone();
    let in_flight = in_flight.clone();

    tokio::spawn(async move {
        let mut spinner_index = 1;
        let mut interval = tokio::time::interval(Duration::from_millis(33));
        loop {
            interval.tick().await;
            if in_flight.load(Ordering::Relaxed) == 0 {
                break;
            }
            loading_state.spinner_char = SPINNER_CHARS[spinner_index];
            spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();
            let _ = responses
                .send(NetworkResponse::LoadingStateChanged { loading_state })
                .await;
        }
    });
}

async fn stop_loading(
    responses: &mpsc::Sender<NetworkResponse>,
    in_flight: &Arc<AtomicUsize>,
    is_ok: bool,
) {
    if in_flight.fetch_sub(1, Ordering::Relaxed) > 1 {
        return;
    }
    tokio::time::sleep(Duration::from_millis(15)).await;

    let spinner_char = if is_ok { ' ' } else { ERROR_CHAR };
    let _ = responses
        .send(NetworkResponse::LoadingStateChanged {
            loading_state: LoadingState { is_loading: false, spinner_char },
        })
        .await;
}
