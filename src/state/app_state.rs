use crate::app::Screen;
use crate::state::search::SearchState;
use football_api::{
    Fixture, FixturesResult, League, PlayerProfile, PlayerResult, StandingRow, StandingsResult,
    TopScorer, TopScorersResult,
};

/// List length on the combined screen before "see all" expands it.
pub const SHORT_LIST_LEN: usize = 5;

// ---------------------------------------------------------------------------
// Combined standings/top-scorers layout flags
// ---------------------------------------------------------------------------

/// Display mode for the standings screen. `combined_view` is the default
/// mode; entering see-all for one list always leaves combined mode, and
/// leaving see-all returns to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinedViewState {
    pub loading: bool,
    pub combined_view: bool,
    pub top_scorer_see_all: bool,
    pub standings_see_all: bool,
    pub error: bool,
}

impl Default for CombinedViewState {
    fn default() -> Self {
        Self {
            loading: false,
            combined_view: true,
            top_scorer_see_all: false,
            standings_see_all: false,
            error: false,
        }
    }
}

impl CombinedViewState {
    pub fn on_top_scorer_see_all(&mut self) {
        let was_expanded = self.top_scorer_see_all;
        *self = Self {
            loading: false,
            combined_view: was_expanded,
            top_scorer_see_all: !was_expanded,
            standings_see_all: false,
            error: false,
        };
    }

    pub fn on_standings_see_all(&mut self) {
        let was_expanded = self.standings_see_all;
        *self = Self {
            loading: false,
            combined_view: was_expanded,
            top_scorer_see_all: false,
            standings_see_all: !was_expanded,
            error: false,
        };
    }

    pub fn on_loading_started(&mut self) {
        *self = Self { loading: true, ..Self::default() };
    }

    pub fn on_loading_complete(&mut self) {
        *self = Self::default();
    }
}

/// Which pane of the combined screen receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StandingsFocus {
    #[default]
    Table,
    Scorers,
}

impl StandingsFocus {
    pub fn other(&self) -> Self {
        match self {
            StandingsFocus::Table => StandingsFocus::Scorers,
            StandingsFocus::Scorers => StandingsFocus::Table,
        }
    }
}

// ---------------------------------------------------------------------------
// League table state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TableViewState {
    #[default]
    Initial,
    Loading,
    Error,
    NoInformation,
    Loaded(Vec<StandingRow>),
}

#[derive(Debug, Default)]
pub struct TableState {
    pub view: TableViewState,
    pub selected: usize,
}

impl TableState {
    pub fn start_loading(&mut self) {
        self.view = TableViewState::Loading;
        self.selected = 0;
    }

    pub fn on_result(&mut self, result: StandingsResult) {
        self.view = match result {
            StandingsResult::Loaded(rows) => TableViewState::Loaded(rows),
            StandingsResult::NoInformation => TableViewState::NoInformation,
            StandingsResult::Error => TableViewState::Error,
        };
    }

    /// The full table; truncation to the combined layout happens at draw
    /// time so expanding never refetches.
    pub fn rows(&self) -> &[StandingRow] {
        match &self.view {
            TableViewState::Loaded(rows) => rows,
            _ => &[],
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self.view, TableViewState::Initial | TableViewState::Loading)
    }

    pub fn select_next(&mut self) {
        let max = self.rows().len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_row(&self) -> Option<&StandingRow> {
        self.rows().get(self.selected)
    }
}

// ---------------------------------------------------------------------------
// Top goal scorers state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScorersViewState {
    #[default]
    Initial,
    Loading,
    Error,
    NoInformation,
    Loaded(Vec<TopScorer>),
}

#[derive(Debug, Default)]
pub struct ScorersState {
    pub view: ScorersViewState,
    pub selected: usize,
    see_all: bool,
    scorers: Vec<TopScorer>,
}

impl ScorersState {
    pub fn start_loading(&mut self) {
        self.view = ScorersViewState::Loading;
        self.see_all = false;
        self.selected = 0;
    }

    pub fn on_result(&mut self, result: TopScorersResult) {
        self.view = match result {
            TopScorersResult::Loaded(scorers) => {
                self.scorers = scorers;
                ScorersViewState::Loaded(self.visible().to_vec())
            }
            TopScorersResult::NoInformation => ScorersViewState::NoInformation,
            TopScorersResult::Error => ScorersViewState::Error,
        };
        self.selected = 0;
    }

    /// Flips see-all and re-emits the visible slice; the full list stays
    /// cached so expanding is instant.
    pub fn toggle_see_all(&mut self) {
        self.see_all = !self.see_all;
        self.view = ScorersViewState::Loaded(self.visible().to_vec());
        self.selected = 0;
    }

    fn visible(&self) -> &[TopScorer] {
        if self.see_all {
            &self.scorers
        } else {
            &self.scorers[..self.scorers.len().min(SHORT_LIST_LEN)]
        }
    }

    pub fn visible_scorers(&self) -> &[TopScorer] {
        match &self.view {
            ScorersViewState::Loaded(scorers) => scorers,
            _ => &[],
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self.view, ScorersViewState::Initial | ScorersViewState::Loading)
    }

    pub fn select_next(&mut self) {
        let max = self.visible_scorers().len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_scorer(&self) -> Option<&TopScorer> {
        self.visible_scorers().get(self.selected)
    }
}

// ---------------------------------------------------------------------------
// Player statistics state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlayerViewState {
    #[default]
    Initial,
    Loading,
    Error,
    NoInformation,
    Loaded(PlayerProfile),
}

#[derive(Debug, Default)]
pub struct PlayerState {
    pub view: PlayerViewState,
    pub scroll_offset: u16,
}

impl PlayerState {
    pub fn start_loading(&mut self) {
        self.view = PlayerViewState::Loading;
        self.scroll_offset = 0;
    }

    pub fn on_result(&mut self, result: PlayerResult) {
        self.view = match result {
            PlayerResult::Loaded(profile) => PlayerViewState::Loaded(profile),
            PlayerResult::NoInformation => PlayerViewState::NoInformation,
            PlayerResult::Error => PlayerViewState::Error,
        };
    }
}

// ---------------------------------------------------------------------------
// Fixtures state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FixturesViewState {
    #[default]
    Initial,
    Loading,
    Error,
    NoFixtures,
    Loaded(Vec<Fixture>),
}

#[derive(Debug, Default)]
pub struct FixturesState {
    pub view: FixturesViewState,
    pub selected: usize,
    /// Name of the team the fixtures were requested for, shown in the
    /// screen title.
    pub team_name: String,
}

impl FixturesState {
    pub fn start_loading(&mut self, team_name: String) {
        self.view = FixturesViewState::Loading;
        self.team_name = team_name;
        self.selected = 0;
    }

    pub fn on_result(&mut self, result: FixturesResult) {
        self.view = match result {
            FixturesResult::Loaded(fixtures) => FixturesViewState::Loaded(fixtures),
            FixturesResult::NoFixtures => FixturesViewState::NoFixtures,
            FixturesResult::Error => FixturesViewState::Error,
        };
    }

    pub fn fixtures(&self) -> &[Fixture] {
        match &self.view {
            FixturesViewState::Loaded(fixtures) => fixtures,
            _ => &[],
        }
    }

    pub fn select_next(&mut self) {
        let max = self.fixtures().len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct AppState {
    pub active_screen: Screen,
    pub previous_screen: Screen,
    pub show_logs: bool,
    pub last_error: Option<String>,
    pub season: u16,
    pub search: SearchState,
    pub selected_league: Option<League>,
    pub standings_focus: StandingsFocus,
    pub combined: CombinedViewState,
    pub table: TableState,
    pub scorers: ScorersState,
    pub player: PlayerState,
    pub fixtures: FixturesState,
}
