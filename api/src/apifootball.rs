/// Wire types for the API-FOOTBALL v3 REST API.
/// Every endpoint shares the `{"response": [...]}` envelope. Unknown
/// fields are ignored and missing ones decode to defaults, so a partial
/// upstream payload degrades to empty strings/zeroes instead of failing
/// the whole screen.
use serde::Deserialize;

// ---------------------------------------------------------------------------
// GET /countries?search=
// ---------------------------------------------------------------------------

#[derive(Deserialize, Default, Debug)]
pub struct CountriesResponse {
    #[serde(default)]
    pub response: Vec<CountryDto>,
}

#[derive(Deserialize, Default, Debug, Clone)]
pub struct CountryDto {
    #[serde(default)]
    pub name: String,
    pub code: Option<String>,
    pub flag: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /leagues?search=
// ---------------------------------------------------------------------------

#[derive(Deserialize, Default, Debug)]
pub struct LeaguesResponse {
    #[serde(default)]
    pub response: Vec<LeagueEntryDto>,
}

#[derive(Deserialize, Default, Debug)]
pub struct LeagueEntryDto {
    #[serde(default)]
    pub league: LeagueDto,
    #[serde(default)]
    pub country: CountryDto,
}

#[derive(Deserialize, Default, Debug, Clone)]
pub struct LeagueDto {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo: String,
}

// ---------------------------------------------------------------------------
// GET /standings?league=&season=
// ---------------------------------------------------------------------------

#[derive(Deserialize, Default, Debug)]
pub struct StandingsResponse {
    #[serde(default)]
    pub response: Vec<StandingsEntryDto>,
}

#[derive(Deserialize, Default, Debug)]
pub struct StandingsEntryDto {
    #[serde(default)]
    pub league: StandingsLeagueDto,
}

#[derive(Deserialize, Default, Debug)]
pub struct StandingsLeagueDto {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub season: u16,
    /// Group-stage competitions nest one table per group.
    #[serde(default)]
    pub standings: Vec<Vec<TeamStandingDto>>,
}

#[derive(Deserialize, Default, Debug)]
pub struct TeamStandingDto {
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub team: TeamDto,
    #[serde(default)]
    pub points: i32,
    #[serde(default, rename = "goalsDiff")]
    pub goals_diff: i32,
    /// Promotion/relegation note, e.g. "Promotion - Champions League".
    pub description: Option<String>,
    #[serde(default)]
    pub all: TeamRecordDto,
}

#[derive(Deserialize, Default, Debug, Clone)]
pub struct TeamDto {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo: String,
}

#[derive(Deserialize, Default, Debug)]
pub struct TeamRecordDto {
    #[serde(default)]
    pub played: u32,
    #[serde(default)]
    pub win: u32,
    #[serde(default)]
    pub draw: u32,
    #[serde(default)]
    pub lose: u32,
}

// ---------------------------------------------------------------------------
// GET /players?id=&season=  and  GET /players/topscorers?league=&season=
// (identical envelope: a player block plus one statistics block per
// competition the player appeared in that season)
// ---------------------------------------------------------------------------

#[derive(Deserialize, Default, Debug)]
pub struct PlayersResponse {
    #[serde(default)]
    pub response: Vec<PlayerEntryDto>,
}

#[derive(Deserialize, Default, Debug)]
pub struct PlayerEntryDto {
    pub player: Option<PlayerDto>,
    pub statistics: Option<Vec<StatisticsDto>>,
}

#[derive(Deserialize, Default, Debug, Clone)]
pub struct PlayerDto {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub age: u8,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub photo: String,
}

#[derive(Deserialize, Default, Debug)]
pub struct StatisticsDto {
    #[serde(default)]
    pub team: TeamDto,
    #[serde(default)]
    pub league: LeagueDto,
    #[serde(default)]
    pub games: GamesDto,
    #[serde(default)]
    pub shots: ShotsDto,
    #[serde(default)]
    pub goals: GoalsDto,
    #[serde(default)]
    pub passes: PassesDto,
    #[serde(default)]
    pub tackles: TacklesDto,
    #[serde(default)]
    pub dribbles: DribblesDto,
    #[serde(default)]
    pub duels: DuelsDto,
    #[serde(default)]
    pub fouls: FoulsDto,
    #[serde(default)]
    pub cards: CardsDto,
}

#[derive(Deserialize, Default, Debug)]
pub struct GamesDto {
    // upstream spelling
    #[serde(default)]
    pub appearences: u32,
    /// Decimal match rating as a string, e.g. "7.5"; null for keepers'
    /// cup appearances and other gaps in the source data.
    pub rating: Option<String>,
}

#[derive(Deserialize, Default, Debug)]
pub struct ShotsDto {
    pub total: Option<u32>,
    pub on: Option<u32>,
}

#[derive(Deserialize, Default, Debug)]
pub struct GoalsDto {
    pub total: Option<u32>,
    pub assists: Option<u32>,
}

#[derive(Deserialize, Default, Debug)]
pub struct PassesDto {
    pub total: Option<u32>,
}

#[derive(Deserialize, Default, Debug)]
pub struct TacklesDto {
    pub total: Option<u32>,
}

#[derive(Deserialize, Default, Debug)]
pub struct DribblesDto {
    pub success: Option<u32>,
}

#[derive(Deserialize, Default, Debug)]
pub struct DuelsDto {
    pub won: Option<u32>,
}

#[derive(Deserialize, Default, Debug)]
pub struct FoulsDto {
    pub committed: Option<u32>,
}

#[derive(Deserialize, Default, Debug)]
pub struct CardsDto {
    #[serde(default)]
    pub yellow: u32,
    #[serde(default)]
    pub red: u32,
}

// ---------------------------------------------------------------------------
// GET /fixtures?team=&season=&next=
// ---------------------------------------------------------------------------

#[derive(Deserialize, Default, Debug)]
pub struct FixturesResponse {
    #[serde(default)]
    pub response: Vec<FixtureEntryDto>,
}

#[derive(Deserialize, Default, Debug)]
pub struct FixtureEntryDto {
    #[serde(default)]
    pub fixture: FixtureDto,
    #[serde(default)]
    pub teams: FixtureTeamsDto,
    #[serde(default)]
    pub goals: FixtureGoalsDto,
}

#[derive(Deserialize, Default, Debug)]
pub struct FixtureDto {
    #[serde(default)]
    pub id: u64,
    /// ISO-8601 kickoff timestamp, e.g. "2026-08-15T14:00:00+00:00".
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: FixtureStatusDto,
}

#[derive(Deserialize, Default, Debug)]
pub struct FixtureStatusDto {
    #[serde(default, rename = "long")]
    pub long_name: String,
    #[serde(default, rename = "short")]
    pub short_name: String,
}

#[derive(Deserialize, Default, Debug)]
pub struct FixtureTeamsDto {
    #[serde(default)]
    pub home: TeamDto,
    #[serde(default)]
    pub away: TeamDto,
}

#[derive(Deserialize, Default, Debug)]
pub struct FixtureGoalsDto {
    pub home: Option<u32>,
    pub away: Option<u32>,
}
