pub mod apifootball;
pub mod client;

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the API-FOOTBALL wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Country {
    pub name: String,
    /// ISO-ish country code; empty when the source has none (e.g. "World").
    pub code: String,
    pub flag_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct League {
    pub id: u32,
    pub name: String,
    pub logo_url: String,
    pub country: Country,
}

/// One row of a league table, in source order. Rank comes from the API;
/// ties are never re-sorted locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandingRow {
    pub rank: u32,
    pub team_id: u32,
    pub team_name: String,
    pub logo_url: String,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: i32,
    /// Promotion/relegation note from the source table, when present.
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopScorer {
    pub player_id: u64,
    pub first_name: String,
    pub last_name: String,
    pub goals: u32,
    pub photo_url: String,
}

impl TopScorer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerProfile {
    pub info: PlayerInfo,
    /// One entry per competition the player appeared in this season.
    pub competitions: Vec<CompetitionStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerInfo {
    pub full_name: String,
    pub last_name: String,
    pub age: u8,
    pub weight: String,
    pub photo_url: String,
    /// 0–100 scale: best per-competition match rating × 10, truncated.
    pub rating: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompetitionStats {
    pub competition: String,
    pub competition_logo_url: String,
    pub team: String,
    pub team_logo_url: String,
    pub appearances: u32,
    pub shots: u32,
    pub goals: u32,
    pub assists: u32,
    pub passes: u32,
    pub tackles: u32,
    pub dribbles_completed: u32,
    pub duels_won: u32,
    pub fouls: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fixture {
    pub id: u64,
    pub home: FixtureSide,
    pub away: FixtureSide,
    /// Kickoff date "YYYY-MM-DD"; raw source string if it failed to parse.
    pub date: String,
    /// Kickoff time "HH:MM"; empty if the date failed to parse.
    pub time: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureSide {
    pub team_id: u32,
    pub team_name: String,
    pub logo_url: String,
    /// Display string; empty until the match has been played.
    pub goals: String,
}

// ---------------------------------------------------------------------------
// Request outcomes — one enum per screen-feeding operation
// ---------------------------------------------------------------------------

/// Outcome of a country or league search. An empty-but-successful payload
/// is NoResults, never Error; Error is reserved for transport/HTTP/decoding
/// failures observed at the request boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Countries(Vec<Country>),
    Leagues(Vec<League>),
    NoResults,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandingsResult {
    Loaded(Vec<StandingRow>),
    NoInformation,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopScorersResult {
    Loaded(Vec<TopScorer>),
    NoInformation,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerResult {
    Loaded(PlayerProfile),
    NoInformation,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixturesResult {
    Loaded(Vec<Fixture>),
    NoFixtures,
    Error,
}
