use crate::apifootball::{
    CountriesResponse, CountryDto, FixtureEntryDto, FixturesResponse, LeaguesResponse,
    PlayerEntryDto, PlayersResponse, StandingsResponse, StatisticsDto, TeamStandingDto,
};
use crate::{
    CompetitionStats, Country, Fixture, FixtureSide, FixturesResult, League, PlayerInfo,
    PlayerProfile, PlayerResult, SearchResult, StandingRow, StandingsResult, TopScorer,
    TopScorersResult,
};
use chrono::DateTime;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const DEFAULT_HOST: &str = "v3.football.api-sports.io";

/// API key and host, attached to every request as the rapidapi header
/// pair the service expects.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub api_key: String,
}

impl ApiConfig {
    pub fn from_env() -> ApiResult<Self> {
        let api_key = std::env::var("FOOTUI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ApiError::Config("FOOTUI_API_KEY is not set".into()))?;
        let host = std::env::var("FOOTUI_API_HOST")
            .ok()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        Ok(Self { host, api_key })
    }
}

/// Football statistics client backed by the API-FOOTBALL v3 endpoints.
#[derive(Debug, Clone)]
pub struct FootballApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

#[derive(Debug)]
pub enum ApiError {
    Config(String),
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "Config error: {msg}"),
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
        }
    }
}

impl FootballApi {
    pub fn new(config: &ApiConfig) -> Self {
        let mut headers = HeaderMap::new();
        if let Ok(key) = HeaderValue::from_str(&config.api_key) {
            headers.insert("x-rapidapi-key", key);
        }
        if let Ok(host) = HeaderValue::from_str(&config.host) {
            headers.insert("x-rapidapi-host", host);
        }

        Self {
            client: Client::builder()
                .user_agent("footui/0.1 (terminal football viewer)")
                .default_headers(headers)
                .build()
                .unwrap_or_default(),
            base_url: format!("https://{}", config.host),
            timeout: Duration::from_secs(10),
        }
    }

    #[cfg(test)]
    fn set_base_url(&mut self, url: String) {
        self.base_url = url;
    }

    /// Search countries by name substring.
    pub async fn search_countries(&self, query: &str) -> ApiResult<CountriesResponse> {
        self.get("/countries", &[("search", query)]).await
    }

    /// Search leagues by name substring.
    pub async fn search_leagues(&self, query: &str) -> ApiResult<LeaguesResponse> {
        self.get("/leagues", &[("search", query)]).await
    }

    /// Fetch the league table for one league + season.
    pub async fn standings(&self, league_id: u32, season: u16) -> ApiResult<StandingsResponse> {
        self.get(
            "/standings",
            &[("league", &league_id.to_string()), ("season", &season.to_string())],
        )
        .await
    }

    /// Fetch the top goal scorers for one league + season.
    pub async fn top_scorers(&self, league_id: u32, season: u16) -> ApiResult<PlayersResponse> {
        self.get(
            "/players/topscorers",
            &[("league", &league_id.to_string()), ("season", &season.to_string())],
        )
        .await
    }

    /// Fetch one player's per-competition statistics for a season.
    pub async fn player(&self, player_id: u64, season: u16) -> ApiResult<PlayersResponse> {
        self.get(
            "/players",
            &[("id", &player_id.to_string()), ("season", &season.to_string())],
        )
        .await
    }

    /// Fetch a team's next `next` fixtures.
    pub async fn fixtures(
        &self,
        team_id: u32,
        season: u16,
        next: u8,
    ) -> ApiResult<FixturesResponse> {
        self.get(
            "/fixtures",
            &[
                ("team", &team_id.to_string()),
                ("season", &season.to_string()),
                ("next", &next.to_string()),
            ],
        )
        .await
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> ApiResult<T> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(params)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.clone()))?;

        response
            .error_for_status()
            .map_err(|e| ApiError::Api(e, url.clone()))?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e, url))
    }
}

// ---------------------------------------------------------------------------
// Mapping: API-FOOTBALL wire types → view data
// ---------------------------------------------------------------------------

/// An empty country list is a NoResults outcome, never an error.
pub fn map_country_search(response: &CountriesResponse) -> SearchResult {
    if response.response.is_empty() {
        return SearchResult::NoResults;
    }
    SearchResult::Countries(response.response.iter().map(map_country).collect())
}

pub fn map_league_search(response: &LeaguesResponse) -> SearchResult {
    if response.response.is_empty() {
        return SearchResult::NoResults;
    }
    SearchResult::Leagues(
        response
            .response
            .iter()
            .map(|entry| League {
                id: entry.league.id,
                name: entry.league.name.clone(),
                logo_url: entry.league.logo.clone(),
                country: map_country(&entry.country),
            })
            .collect(),
    )
}

fn map_country(dto: &CountryDto) -> Country {
    Country {
        name: dto.name.clone(),
        code: dto.code.clone().unwrap_or_default(),
        flag_url: dto.flag.clone().unwrap_or_default(),
    }
}

/// Group-stage competitions nest one table per group; only the first
/// group of the first league entry is surfaced.
pub fn map_standings(response: &StandingsResponse) -> StandingsResult {
    let rows = response
        .response
        .first()
        .and_then(|entry| entry.league.standings.first());
    match rows {
        Some(rows) if !rows.is_empty() => {
            StandingsResult::Loaded(rows.iter().map(map_standing_row).collect())
        }
        _ => StandingsResult::NoInformation,
    }
}

fn map_standing_row(dto: &TeamStandingDto) -> StandingRow {
    StandingRow {
        rank: dto.rank,
        team_id: dto.team.id,
        team_name: dto.team.name.clone(),
        logo_url: dto.team.logo.clone(),
        wins: dto.all.win,
        draws: dto.all.draw,
        losses: dto.all.lose,
        points: dto.points,
        description: dto.description.clone(),
    }
}

/// Missing player or statistics blocks default to zeroes/empty strings;
/// the source data is patchy enough that dropping whole rows would lose
/// real scorers.
pub fn map_top_scorers(response: &PlayersResponse) -> TopScorersResult {
    let scorers: Vec<TopScorer> = response.response.iter().map(map_top_scorer).collect();
    if scorers.is_empty() {
        return TopScorersResult::NoInformation;
    }
    TopScorersResult::Loaded(scorers)
}

fn map_top_scorer(entry: &PlayerEntryDto) -> TopScorer {
    let player = entry.player.as_ref();
    TopScorer {
        player_id: player.map(|p| p.id).unwrap_or_default(),
        first_name: player.map(|p| p.firstname.clone()).unwrap_or_default(),
        last_name: player.map(|p| p.lastname.clone()).unwrap_or_default(),
        goals: entry
            .statistics
            .as_ref()
            .and_then(|stats| stats.first())
            .and_then(|stats| stats.goals.total)
            .unwrap_or_default(),
        photo_url: player.map(|p| p.photo.clone()).unwrap_or_default(),
    }
}

pub fn map_player_statistics(response: &PlayersResponse) -> PlayerResult {
    let Some(entry) = response.response.first() else {
        return PlayerResult::NoInformation;
    };
    let stats = entry.statistics.as_deref().unwrap_or(&[]);
    let player = entry.player.clone().unwrap_or_default();

    let info = PlayerInfo {
        full_name: format!("{} {}", player.name, player.lastname),
        last_name: player.lastname.clone(),
        age: player.age,
        weight: player.weight.clone(),
        photo_url: player.photo.clone(),
        rating: stats
            .iter()
            .map(|s| rating_percent(s.games.rating.as_deref()))
            .max()
            .unwrap_or(0),
    };

    PlayerResult::Loaded(PlayerProfile {
        info,
        competitions: stats.iter().map(map_competition_stats).collect(),
    })
}

fn map_competition_stats(dto: &StatisticsDto) -> CompetitionStats {
    CompetitionStats {
        competition: dto.league.name.clone(),
        competition_logo_url: dto.league.logo.clone(),
        team: dto.team.name.clone(),
        team_logo_url: dto.team.logo.clone(),
        appearances: dto.games.appearences,
        shots: dto.shots.total.unwrap_or_default(),
        goals: dto.goals.total.unwrap_or_default(),
        assists: dto.goals.assists.unwrap_or_default(),
        passes: dto.passes.total.unwrap_or_default(),
        tackles: dto.tackles.total.unwrap_or_default(),
        dribbles_completed: dto.dribbles.success.unwrap_or_default(),
        duels_won: dto.duels.won.unwrap_or_default(),
        fouls: dto.fouls.committed.unwrap_or_default(),
        yellow_cards: dto.cards.yellow,
        red_cards: dto.cards.red,
    }
}

/// "7.5"-style match rating → 0–100 integer (rating × 10, truncated).
/// Done as decimal-string arithmetic: parsing "8.2" through f64 and
/// multiplying would truncate 81.999… down to 81. Unparsable input is 0.
fn rating_percent(rating: Option<&str>) -> u32 {
    let Some(raw) = rating else { return 0 };
    let (int_part, frac_part) = match raw.trim().split_once('.') {
        Some((i, f)) => (i, f),
        None => (raw.trim(), ""),
    };
    let Ok(whole) = int_part.parse::<u32>() else { return 0 };
    let tenths = match frac_part.chars().next() {
        None => 0,
        Some(c) => match c.to_digit(10) {
            Some(d) => d,
            None => return 0,
        },
    };
    whole * 10 + tenths
}

pub fn map_fixtures(response: &FixturesResponse) -> FixturesResult {
    if response.response.is_empty() {
        return FixturesResult::NoFixtures;
    }
    FixturesResult::Loaded(response.response.iter().map(map_fixture).collect())
}

fn map_fixture(entry: &FixtureEntryDto) -> Fixture {
    let (date, time) = split_kickoff(&entry.fixture.date);
    Fixture {
        id: entry.fixture.id,
        home: FixtureSide {
            team_id: entry.teams.home.id,
            team_name: entry.teams.home.name.clone(),
            logo_url: entry.teams.home.logo.clone(),
            goals: entry.goals.home.map(|g| g.to_string()).unwrap_or_default(),
        },
        away: FixtureSide {
            team_id: entry.teams.away.id,
            team_name: entry.teams.away.name.clone(),
            logo_url: entry.teams.away.logo.clone(),
            goals: entry.goals.away.map(|g| g.to_string()).unwrap_or_default(),
        },
        date,
        time,
        status: entry.fixture.status.long_name.clone(),
    }
}

fn split_kickoff(iso: &str) -> (String, String) {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => (
            dt.format("%Y-%m-%d").to_string(),
            dt.format("%H:%M").to_string(),
        ),
        Err(_) => (iso.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Rating arithmetic
    // -----------------------------------------------------------------------

    #[test]
    fn rating_percent_truncates_to_one_decimal_digit() {
        assert_eq!(rating_percent(Some("7.5")), 75);
        assert_eq!(rating_percent(Some("8.2")), 82);
        assert_eq!(rating_percent(Some("7.96")), 79);
        assert_eq!(rating_percent(Some("8")), 80);
    }

    #[test]
    fn rating_percent_defaults_to_zero_on_bad_input() {
        assert_eq!(rating_percent(None), 0);
        assert_eq!(rating_percent(Some("")), 0);
        assert_eq!(rating_percent(Some("abc")), 0);
        assert_eq!(rating_percent(Some("7.x")), 0);
    }

    // -----------------------------------------------------------------------
    // Search mapping
    // -----------------------------------------------------------------------

    #[test]
    fn empty_country_response_is_no_results_not_error() {
        let response: CountriesResponse = serde_json::from_str(r#"{"response": []}"#).unwrap();
        assert_eq!(map_country_search(&response), SearchResult::NoResults);
    }

    #[test]
    fn absent_country_code_and_flag_map_to_empty_strings() {
        let response: CountriesResponse = serde_json::from_str(
            r#"{"response": [
                {"name": "England", "code": "GB", "flag": "https://media.example/gb.svg"},
                {"name": "World", "code": null, "flag": null}
            ]}"#,
        )
        .unwrap();

        let SearchResult::Countries(countries) = map_country_search(&response) else {
            panic!("expected loaded countries");
        };
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].code, "GB");
        assert_eq!(countries[1].name, "World");
        assert_eq!(countries[1].code, "");
        assert_eq!(countries[1].flag_url, "");
    }

    #[test]
    fn league_search_maps_nested_country() {
        let response: LeaguesResponse = serde_json::from_str(
            r#"{"response": [{
                "league": {"id": 39, "name": "Premier League", "logo": "https://media.example/39.png"},
                "country": {"name": "England", "code": "GB", "flag": "https://media.example/gb.svg"}
            }]}"#,
        )
        .unwrap();

        let SearchResult::Leagues(leagues) = map_league_search(&response) else {
            panic!("expected loaded leagues");
        };
        assert_eq!(leagues[0].id, 39);
        assert_eq!(leagues[0].name, "Premier League");
        assert_eq!(leagues[0].country.name, "England");
    }

    #[test]
    fn empty_league_response_is_no_results() {
        let response: LeaguesResponse = serde_json::from_str(r#"{"response": []}"#).unwrap();
        assert_eq!(map_league_search(&response), SearchResult::NoResults);
    }

    // -----------------------------------------------------------------------
    // Standings mapping
    // -----------------------------------------------------------------------

    fn standings_fixture() -> StandingsResponse {
        serde_json::from_str(
            r#"{"response": [{
                "league": {
                    "id": 39, "name": "Premier League", "season": 2026,
                    "standings": [
                        [
                            {"rank": 1, "team": {"id": 50, "name": "Manchester City", "logo": "l50"},
                             "points": 45, "goalsDiff": 28, "description": "Promotion - Champions League",
                             "all": {"played": 18, "win": 14, "draw": 3, "lose": 1}},
                            {"rank": 2, "team": {"id": 42, "name": "Arsenal", "logo": "l42"},
                             "points": 43, "goalsDiff": 24, "description": null,
                             "all": {"played": 18, "win": 13, "draw": 4, "lose": 1}}
                        ],
                        [
                            {"rank": 1, "team": {"id": 99, "name": "Second Group FC", "logo": "l99"},
                             "points": 12, "goalsDiff": 0, "description": null,
                             "all": {"played": 6, "win": 4, "draw": 0, "lose": 2}}
                        ]
                    ]
                }
            }]}"#,
        )
        .unwrap()
    }

    #[test]
    fn standings_surface_only_the_first_group_of_the_first_league() {
        let StandingsResult::Loaded(rows) = map_standings(&standings_fixture()) else {
            panic!("expected loaded standings");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].team_name, "Manchester City");
        assert_eq!(rows[0].wins, 14);
        assert_eq!(rows[0].draws, 3);
        assert_eq!(rows[0].losses, 1);
        assert_eq!(rows[0].points, 45);
        assert_eq!(
            rows[0].description.as_deref(),
            Some("Promotion - Champions League")
        );
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].description, None);
    }

    #[test]
    fn empty_standings_response_is_no_information() {
        let response: StandingsResponse = serde_json::from_str(r#"{"response": []}"#).unwrap();
        assert_eq!(map_standings(&response), StandingsResult::NoInformation);
    }

    #[test]
    fn empty_standings_array_is_no_information() {
        let response: StandingsResponse = serde_json::from_str(
            r#"{"response": [{"league": {"id": 39, "name": "Premier League", "season": 2026, "standings": []}}]}"#,
        )
        .unwrap();
        assert_eq!(map_standings(&response), StandingsResult::NoInformation);
    }

    // -----------------------------------------------------------------------
    // Top scorers mapping
    // -----------------------------------------------------------------------

    #[test]
    fn scorer_without_statistics_defaults_to_zero_goals() {
        let response: PlayersResponse = serde_json::from_str(
            r#"{"response": [
                {"player": {"id": 1100, "firstname": "Erling", "lastname": "Haaland",
                            "photo": "p1100"},
                 "statistics": [{"goals": {"total": 21, "assists": 3}}]},
                {"player": {"id": 278, "firstname": "Mohamed", "lastname": "Salah",
                            "photo": "p278"},
                 "statistics": null}
            ]}"#,
        )
        .unwrap();

        let TopScorersResult::Loaded(scorers) = map_top_scorers(&response) else {
            panic!("expected loaded scorers");
        };
        assert_eq!(scorers[0].goals, 21);
        assert_eq!(scorers[0].full_name(), "Erling Haaland");
        assert_eq!(scorers[1].goals, 0);
        assert_eq!(scorers[1].player_id, 278);
    }

    #[test]
    fn empty_scorer_response_is_no_information() {
        let response: PlayersResponse = serde_json::from_str(r#"{"response": []}"#).unwrap();
        assert_eq!(map_top_scorers(&response), TopScorersResult::NoInformation);
    }

    // -----------------------------------------------------------------------
    // Player statistics mapping
    // -----------------------------------------------------------------------

    #[test]
    fn player_rating_is_best_competition_rating_times_ten() {
        let response: PlayersResponse = serde_json::from_str(
            r#"{"response": [{
                "player": {"id": 629, "name": "K. De Bruyne", "firstname": "Kevin",
                           "lastname": "De Bruyne", "age": 34, "weight": "70 kg",
                           "photo": "p629"},
                "statistics": [
                    {"league": {"id": 39, "name": "Premier League"},
                     "games": {"appearences": 18, "rating": "7.5"}},
                    {"league": {"id": 45, "name": "FA Cup"},
                     "games": {"appearences": 2, "rating": null}},
                    {"league": {"id": 2, "name": "UEFA Champions League"},
                     "games": {"appearences": 6, "rating": "8.2"}}
                ]
            }]}"#,
        )
        .unwrap();

        let PlayerResult::Loaded(profile) = map_player_statistics(&response) else {
            panic!("expected loaded profile");
        };
        assert_eq!(profile.info.rating, 82);
        assert_eq!(profile.info.full_name, "K. De Bruyne De Bruyne");
        assert_eq!(profile.competitions.len(), 3);
        assert_eq!(profile.competitions[0].competition, "Premier League");
        assert_eq!(profile.competitions[0].appearances, 18);
    }

    #[test]
    fn empty_player_response_is_no_information() {
        let response: PlayersResponse = serde_json::from_str(r#"{"response": []}"#).unwrap();
        assert_eq!(map_player_statistics(&response), PlayerResult::NoInformation);
    }

    // -----------------------------------------------------------------------
    // Fixtures mapping
    // -----------------------------------------------------------------------

    #[test]
    fn fixture_kickoff_splits_into_date_and_time() {
        let response: FixturesResponse = serde_json::from_str(
            r#"{"response": [{
                "fixture": {"id": 868130, "date": "2026-08-15T14:00:00+00:00",
                            "status": {"long": "Not Started", "short": "NS"}},
                "teams": {"home": {"id": 33, "name": "Manchester United", "logo": "l33"},
                          "away": {"id": 40, "name": "Liverpool", "logo": "l40"}},
                "goals": {"home": null, "away": null}
            }]}"#,
        )
        .unwrap();

        let FixturesResult::Loaded(fixtures) = map_fixtures(&response) else {
            panic!("expected loaded fixtures");
        };
        assert_eq!(fixtures[0].date, "2026-08-15");
        assert_eq!(fixtures[0].time, "14:00");
        assert_eq!(fixtures[0].status, "Not Started");
        assert_eq!(fixtures[0].home.goals, "");
        assert_eq!(fixtures[0].away.team_name, "Liverpool");
    }

    #[test]
    fn empty_fixture_response_is_no_fixtures() {
        let response: FixturesResponse = serde_json::from_str(r#"{"response": []}"#).unwrap();
        assert_eq!(map_fixtures(&response), FixturesResult::NoFixtures);
    }

    // -----------------------------------------------------------------------
    // Client behavior against a mock server
    // -----------------------------------------------------------------------

    fn test_client(base_url: String) -> FootballApi {
        let mut api = FootballApi::new(&ApiConfig {
            host: "mock.local".into(),
            api_key: "test-key".into(),
        });
        api.set_base_url(base_url);
        api
    }

    #[tokio::test]
    async fn search_countries_decodes_envelope_and_sends_key_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/countries")
            .match_query(mockito::Matcher::UrlEncoded("search".into(), "eng".into()))
            .match_header("x-rapidapi-key", "test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"response": [{"name": "England", "code": "GB", "flag": "f"}]}"#)
            .create_async()
            .await;

        let api = test_client(server.url());
        let response = api.search_countries("eng").await.unwrap();
        mock.assert_async().await;

        assert_eq!(response.response.len(), 1);
        assert_eq!(response.response[0].name, "England");
    }

    #[tokio::test]
    async fn http_error_status_becomes_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/standings")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let api = test_client(server.url());
        let err = api.standings(39, 2026).await.unwrap_err();
        assert!(matches!(err, ApiError::Api(..)), "got {err}");
    }

    #[tokio::test]
    async fn malformed_payload_becomes_parsing_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/players/topscorers")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{not json")
            .create_async()
            .await;

        let api = test_client(server.url());
        let err = api.top_scorers(39, 2026).await.unwrap_err();
        assert!(matches!(err, ApiError::Parsing(..)), "got {err}");
    }
}
