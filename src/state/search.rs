use crate::state::messages::NetworkRequest;
use football_api::{Country, League, SearchResult};

/// Queries shorter than this never reach the network.
pub const MIN_QUERY_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    Countries,
    Leagues,
}

impl SearchScope {
    pub fn label(&self) -> &'static str {
        match self {
            SearchScope::Countries => "Countries",
            SearchScope::Leagues => "Leagues",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            SearchScope::Countries => SearchScope::Leagues,
            SearchScope::Leagues => SearchScope::Countries,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchViewState {
    #[default]
    Initial,
    Loading,
    Error,
    NoResults,
    Countries(Vec<Country>),
    Leagues(Vec<League>),
}

/// Text-driven incremental search. A query of three or more characters
/// goes out over the network once; anything the user types that still
/// starts with the first three characters of that query is answered by
/// refiltering the cached result set locally.
#[derive(Debug, Default)]
pub struct SearchState {
    pub scope: SearchScope,
    pub input: String,
    pub view: SearchViewState,
    pub selected: usize,
    /// First three characters (lowercased) of the last query that
    /// triggered a network call.
    last_query_prefix: String,
    countries: Vec<Country>,
    leagues: Vec<League>,
}

impl SearchState {
    /// Decide what a text change means: a fresh network search, a cheap
    /// client-side refilter, or nothing at all. Returns the request to
    /// dispatch, if any; the view state is updated either way.
    pub fn on_input_changed(&mut self, text: &str) -> Option<NetworkRequest> {
        self.input = text.to_string();
        let lowered = text.to_lowercase();

        if text.chars().count() >= MIN_QUERY_LEN && !self.is_refinement(&lowered) {
            self.last_query_prefix = lowered.chars().take(MIN_QUERY_LEN).collect();
            self.view = SearchViewState::Loading;
            self.selected = 0;
            return Some(match self.scope {
                SearchScope::Countries => NetworkRequest::SearchCountries { query: text.to_string() },
                SearchScope::Leagues => NetworkRequest::SearchLeagues { query: text.to_string() },
            });
        }

        if self.has_cached_results() && self.is_refinement(&lowered) {
            // No Loading emission on the refilter path.
            self.view = self.filtered(&lowered);
            self.selected = 0;
        }
        None
    }

    pub fn on_result(&mut self, result: SearchResult) {
        self.selected = 0;
        self.view = match result {
            SearchResult::Countries(countries) => {
                self.countries = countries.clone();
                SearchViewState::Countries(countries)
            }
            SearchResult::Leagues(leagues) => {
                self.leagues = leagues.clone();
                SearchViewState::Leagues(leagues)
            }
            SearchResult::NoResults => SearchViewState::NoResults,
            SearchResult::Error => SearchViewState::Error,
        };
    }

    /// Switching between country and league search starts from scratch:
    /// the cached prefix and results belong to the other scope.
    pub fn set_scope(&mut self, scope: SearchScope) {
        if self.scope == scope {
            return;
        }
        self.scope = scope;
        self.last_query_prefix.clear();
        self.countries.clear();
        self.leagues.clear();
        self.view = SearchViewState::Initial;
        self.selected = 0;
    }

    fn is_refinement(&self, lowered: &str) -> bool {
        !self.last_query_prefix.is_empty() && lowered.starts_with(&self.last_query_prefix)
    }

    fn has_cached_results(&self) -> bool {
        match self.scope {
            SearchScope::Countries => !self.countries.is_empty(),
            SearchScope::Leagues => !self.leagues.is_empty(),
        }
    }

    fn filtered(&self, lowered: &str) -> SearchViewState {
        match self.scope {
            SearchScope::Countries => SearchViewState::Countries(
                self.countries
                    .iter()
                    .filter(|c| c.name.to_lowercase().contains(lowered))
                    .cloned()
                    .collect(),
            ),
            SearchScope::Leagues => SearchViewState::Leagues(
                self.leagues
                    .iter()
                    .filter(|l| {
                        l.name.to_lowercase().contains(lowered)
                            || l.country.name.to_lowercase().contains(lowered)
                    })
                    .cloned()
                    .collect(),
            ),
        }
    }

    // -----------------------------------------------------------------------
    // List selection helpers for the results pane
    // -----------------------------------------------------------------------

    pub fn result_count(&self) -> usize {
        match &self.view {
            SearchViewState::Countries(countries) => countries.len(),
            SearchViewState::Leagues(leagues) => leagues.len(),
            _ => 0,
        }
    }

    pub fn select_next(&mut self) {
        let max = self.result_count().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_country(&self) -> Option<&Country> {
        match &self.view {
            SearchViewState::Countries(countries) => countries.get(self.selected),
            _ => None,
        }
    }

    pub fn selected_league(&self) -> Option<&League> {
        match &self.view {
            SearchViewState::Leagues(leagues) => leagues.get(self.selected),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str) -> Country {
        Country { name: name.into(), code: "C".into(), flag_url: "url".into() }
    }

    fn league(name: &str, country_name: &str) -> League {
        League {
            id: 1,
            name: name.into(),
            logo_url: "url".into(),
            country: country(country_name),
        }
    }

    fn loaded_countries(state: &SearchState) -> &[Country] {
        match &state.view {
            SearchViewState::Countries(countries) => countries,
            other => panic!("expected countries, got {other:?}"),
        }
    }

    #[test]
    fn initial_state_is_default_view() {
        let state = SearchState::default();
        assert_eq!(state.view, SearchViewState::Initial);
        assert_eq!(state.result_count(), 0);
    }

    #[test]
    fn input_shorter_than_three_chars_never_searches() {
        let mut state = SearchState::default();
        assert!(state.on_input_changed("co").is_none());
        assert_eq!(state.view, SearchViewState::Initial);
    }

    #[test]
    fn three_char_input_searches_and_enters_loading() {
        let mut state = SearchState::default();
        let request = state.on_input_changed("eng");
        assert!(matches!(
            request,
            Some(NetworkRequest::SearchCountries { ref query }) if query == "eng"
        ));
        assert_eq!(state.view, SearchViewState::Loading);
    }

    #[test]
    fn league_scope_produces_league_requests() {
        let mut state = SearchState::default();
        state.set_scope(SearchScope::Leagues);
        let request = state.on_input_changed("premier");
        assert!(matches!(
            request,
            Some(NetworkRequest::SearchLeagues { ref query }) if query == "premier"
        ));
    }

    #[test]
    fn shrinking_back_through_the_same_prefix_searches_once() {
        let mut state = SearchState::default();
        let mut text = String::from("chars");
        let mut requests = 0;
        for _ in 0..5 {
            if state.on_input_changed(&text).is_some() {
                requests += 1;
            }
            text.pop();
        }
        assert_eq!(requests, 1);
    }

    #[test]
    fn each_distinct_query_searches_again() {
        let mut state = SearchState::default();
        let queries = ["first search", "second search", "third search", "fourth search", "fov"];
        let requests = queries
            .iter()
            .filter(|q| state.on_input_changed(q).is_some())
            .count();
        assert_eq!(requests, queries.len());
    }

    #[test]
    fn loading_then_loaded_after_successful_result() {
        let mut state = SearchState::default();
        state.on_input_changed("eng");
        assert_eq!(state.view, SearchViewState::Loading);

        state.on_result(SearchResult::Countries(vec![
            country("England"),
            country("English Amateur"),
            country("Engadin"),
        ]));
        assert_eq!(loaded_countries(&state).len(), 3);
    }

    #[test]
    fn loading_then_no_results() {
        let mut state = SearchState::default();
        state.on_input_changed("eng");
        state.on_result(SearchResult::NoResults);
        assert_eq!(state.view, SearchViewState::NoResults);
    }

    #[test]
    fn loading_then_error() {
        let mut state = SearchState::default();
        state.on_input_changed("eng");
        state.on_result(SearchResult::Error);
        assert_eq!(state.view, SearchViewState::Error);
    }

    #[test]
    fn refinement_filters_cached_results_without_a_network_call() {
        let mut state = SearchState::default();
        assert!(state.on_input_changed("port").is_some());
        state.on_result(SearchResult::Countries(vec![
            country("Elportinose"),
            country("Portugal"),
            country("Porto"),
            country("Vahporto Allegra"),
        ]));

        assert!(state.on_input_changed("porto").is_none());
        assert_eq!(loaded_countries(&state).len(), 2);

        assert!(state.on_input_changed("portu").is_none());
        assert_eq!(loaded_countries(&state).len(), 1);
        assert_eq!(loaded_countries(&state)[0].name, "Portugal");
    }

    #[test]
    fn refinement_never_passes_through_loading() {
        let mut state = SearchState::default();
        state.on_input_changed("eng");
        state.on_result(SearchResult::Countries(vec![country("England")]));

        state.on_input_changed("engl");
        // Straight to the filtered list, no Loading emission.
        assert_eq!(loaded_countries(&state), [country("England")]);
    }

    #[test]
    fn refinement_matching_is_case_insensitive() {
        let mut state = SearchState::default();
        state.on_input_changed("JAP");
        state.on_result(SearchResult::Countries(vec![country("Japan")]));

        assert!(state.on_input_changed("japa").is_none());
        assert_eq!(loaded_countries(&state).len(), 1);
    }

    #[test]
    fn refinement_with_no_matches_is_still_a_loaded_state() {
        let mut state = SearchState::default();
        state.on_input_changed("por");
        state.on_result(SearchResult::Countries(vec![country("Portugal")]));

        assert!(state.on_input_changed("porx").is_none());
        assert_eq!(loaded_countries(&state).len(), 0);
    }

    #[test]
    fn refinement_on_empty_cache_is_a_no_op() {
        let mut state = SearchState::default();
        state.on_input_changed("cha");
        state.on_result(SearchResult::NoResults);

        assert!(state.on_input_changed("char").is_none());
        assert_eq!(state.view, SearchViewState::NoResults);
    }

    #[test]
    fn new_prefix_after_cached_results_searches_again() {
        let mut state = SearchState::default();
        state.on_input_changed("por");
        state.on_result(SearchResult::Countries(vec![country("Portugal")]));

        let request = state.on_input_changed("ger");
        assert!(request.is_some());
        assert_eq!(state.view, SearchViewState::Loading);
    }

    #[test]
    fn league_refinement_also_matches_the_country_name() {
        let mut state = SearchState::default();
        state.set_scope(SearchScope::Leagues);
        state.on_input_changed("eng");
        state.on_result(SearchResult::Leagues(vec![
            league("Premier League", "England"),
            league("League One", "England"),
            league("Bundesliga", "Germany"),
        ]));

        assert!(state.on_input_changed("engl").is_none());
        match &state.view {
            SearchViewState::Leagues(leagues) => assert_eq!(leagues.len(), 2),
            other => panic!("expected leagues, got {other:?}"),
        }
    }

    #[test]
    fn switching_scope_resets_cache_and_view() {
        let mut state = SearchState::default();
        state.on_input_changed("eng");
        state.on_result(SearchResult::Countries(vec![country("England")]));

        state.set_scope(SearchScope::Leagues);
        assert_eq!(state.view, SearchViewState::Initial);
        // The old prefix must not suppress the first league search.
        assert!(state.on_input_changed("eng").is_some());
    }

    #[test]
    fn selection_stays_within_result_bounds() {
        let mut state = SearchState::default();
        state.on_input_changed("jap");
        state.on_result(SearchResult::Countries(vec![country("Japan"), country("Jamaica")]));

        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_country().unwrap().name, "Japan");
    }
}
