use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, Screen};
use crate::state::app_state::{
    FixturesViewState, PlayerViewState, ScorersViewState, StandingsFocus, TableViewState,
    SHORT_LIST_LEN,
};
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::state::search::{SearchViewState, MIN_QUERY_LEN};
use crate::ui::layout::LayoutAreas;
use football_api::{StandingRow, TopScorer};

static TABS: &[&str; 4] = &["Search", "Standings", "Player", "Fixtures"];

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    terminal
        .draw(|f| {
            layout.update(f.area(), app.settings.full_screen);

            if !app.settings.full_screen {
                draw_tabs(f, layout.tab_bar, app);
            }

            match app.state.active_screen {
                Screen::Search => draw_search(f, layout.main, app),
                Screen::Standings => draw_standings(f, layout.main, app),
                Screen::Player => draw_player(f, layout.main, app),
                Screen::Fixtures => draw_fixtures(f, layout.main, app),
                Screen::Help => draw_placeholder(
                    f,
                    layout.main,
                    "Keys: type=search  Tab=switch pane/scope  ↑/↓ or j/k=move  Enter=open\n\
                     s=standings see-all  t=top scorers see-all  r=reload  Esc=back\n\
                     \"=logs  f=full screen  q/Ctrl-C=quit",
                ),
            }

            if let Some(err) = app.state.last_error.as_deref() {
                let line = Rect::new(
                    layout.main.x + 2,
                    layout.main.y + layout.main.height.saturating_sub(2),
                    layout.main.width.saturating_sub(4),
                    1,
                );
                f.render_widget(Paragraph::new(err).style(Style::default().fg(Color::Red)), line);
            }

            draw_loading_spinner(f, f.area(), app, loading);

            if app.state.show_logs {
                draw_logs(f, f.area());
            }
        })
        .unwrap();
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let tab_index = match app.state.active_screen {
        Screen::Search => 0,
        Screen::Standings => 1,
        Screen::Player => 2,
        Screen::Fixtures => 3,
        Screen::Help => 0,
    };

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(tab_index)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

// ---------------------------------------------------------------------------
// Search screen
// ---------------------------------------------------------------------------

fn draw_search(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Search ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 5 {
        return;
    }

    let [input_area, results_area, legend] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let search = &app.state.search;
    let input_block =
        default_border(Color::DarkGray).title(format!(" {} ", search.scope.label()));
    let input_inner = input_block.inner(input_area);
    f.render_widget(input_block, input_area);
    f.render_widget(
        Paragraph::new(format!("> {}_", search.input)).style(Style::default().fg(Color::Yellow)),
        input_inner,
    );

    match &search.view {
        SearchViewState::Initial => {
            f.render_widget(
                Paragraph::new(format!(
                    "Type at least {MIN_QUERY_LEN} characters to search {}",
                    search.scope.label().to_lowercase()
                ))
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
                results_area,
            );
        }
        SearchViewState::Loading => {
            f.render_widget(
                Paragraph::new("Searching...")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center),
                results_area,
            );
        }
        SearchViewState::Error => {
            f.render_widget(
                Paragraph::new("Something went wrong. Adjust the query to retry.")
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center),
                results_area,
            );
        }
        SearchViewState::NoResults => {
            f.render_widget(
                Paragraph::new(format!("No results found for \"{}\"", search.input))
                    .style(Style::default().fg(Color::Gray))
                    .alignment(Alignment::Center),
                results_area,
            );
        }
        SearchViewState::Countries(countries) => {
            let entries: Vec<String> = countries
                .iter()
                .map(|c| {
                    if c.code.is_empty() {
                        c.name.clone()
                    } else {
                        format!("{} ({})", c.name, c.code)
                    }
                })
                .collect();
            draw_selectable_list(f, results_area, &entries, search.selected);
        }
        SearchViewState::Leagues(leagues) => {
            let entries: Vec<String> = leagues
                .iter()
                .map(|l| format!("{} — {}", l.name, l.country.name))
                .collect();
            draw_selectable_list(f, results_area, &entries, search.selected);
        }
    }

    f.render_widget(
        Paragraph::new(
            "Keys: type=search  Tab=scope  ↑/↓=select  Enter=open  Esc=clear  Ctrl-C=quit",
        )
        .style(Style::default().fg(Color::DarkGray)),
        legend,
    );
}

fn draw_selectable_list(f: &mut Frame, area: Rect, entries: &[String], selected: usize) {
    if area.height == 0 {
        return;
    }
    let (start, end) = scroll_window(entries.len(), selected, area.height as usize);
    let lines: Vec<Line> = entries[start..end]
        .iter()
        .enumerate()
        .map(|(offset, entry)| {
            let idx = start + offset;
            let marker = if idx == selected { '>' } else { ' ' };
            let style = if idx == selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(format!("{marker} {entry}"), style))
        })
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}

/// Window of `height` entries that keeps `selected` in view.
fn scroll_window(len: usize, selected: usize, height: usize) -> (usize, usize) {
    if height == 0 || len == 0 {
        return (0, 0);
    }
    let start = selected.saturating_sub(height - 1).min(len.saturating_sub(1));
    let end = (start + height).min(len);
    (start, end)
}

// ---------------------------------------------------------------------------
// Combined standings / top scorers screen
// ---------------------------------------------------------------------------

fn draw_standings(f: &mut Frame, area: Rect, app: &App) {
    let title = match app.state.selected_league.as_ref() {
        Some(league) => format!(" {} — {} ", league.name, app.state.season),
        None => " Standings ".to_string(),
    };
    let block = default_border(Color::White).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 3 {
        return;
    }

    let [legend, content] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);
    f.render_widget(
        Paragraph::new(
            "Keys: Tab=pane  j/k=move  Enter=open  s/t=see all  r=reload  Esc=back",
        )
        .style(Style::default().fg(Color::DarkGray)),
        legend,
    );

    let combined = &app.state.combined;
    if combined.standings_see_all {
        draw_table_pane(f, content, app, false);
    } else if combined.top_scorer_see_all {
        draw_scorers_pane(f, content, app, false);
    } else {
        // Combined mode: both lists, five rows each, loading independently.
        if content.width >= 96 {
            let [left, right] =
                Layout::horizontal([Constraint::Percentage(58), Constraint::Percentage(42)])
                    .areas(content);
            draw_table_pane(f, left, app, true);
            draw_scorers_pane(f, right, app, true);
        } else {
            let [top, bottom] =
                Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)]).areas(content);
            draw_table_pane(f, top, app, true);
            draw_scorers_pane(f, bottom, app, true);
        }
    }
}

fn pane_border(focused: bool) -> Color {
    if focused { Color::Yellow } else { Color::DarkGray }
}

fn draw_table_pane(f: &mut Frame, area: Rect, app: &App, truncated: bool) {
    let focused = app.state.standings_focus == StandingsFocus::Table;
    let block = default_border(pane_border(focused)).title(" League Table [s] ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &app.state.table.view {
        TableViewState::Initial => draw_pane_message(f, inner, "No league selected", Color::DarkGray),
        TableViewState::Loading => draw_pane_message(f, inner, "Loading standings...", Color::DarkGray),
        TableViewState::Error => {
            draw_pane_message(f, inner, "Could not load standings. Press r to retry.", Color::Red)
        }
        TableViewState::NoInformation => {
            draw_pane_message(f, inner, "No standings information for this league.", Color::Gray)
        }
        TableViewState::Loaded(rows) => {
            draw_table_rows(f, inner, rows, app.state.table.selected, truncated)
        }
    }
}

fn draw_table_rows(
    f: &mut Frame,
    area: Rect,
    rows: &[StandingRow],
    selected: usize,
    truncated: bool,
) {
    if area.height < 2 {
        return;
    }

    let mut lines = vec![Line::from(Span::styled(
        format!("{:>3} {:<24} {:>3} {:>3} {:>3} {:>5}", "#", "Team", "W", "D", "L", "Pts"),
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
    ))];

    let shown: &[StandingRow] = if truncated {
        &rows[..rows.len().min(SHORT_LIST_LEN)]
    } else {
        rows
    };
    let list_height = area.height.saturating_sub(2) as usize;
    let (start, end) = scroll_window(shown.len(), selected.min(shown.len().saturating_sub(1)), list_height);

    for (offset, row) in shown[start..end].iter().enumerate() {
        let idx = start + offset;
        let marker = if idx == selected { '>' } else { ' ' };
        let style = if idx == selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        let team: String = row.team_name.chars().take(24).collect();
        lines.push(Line::from(Span::styled(
            format!(
                "{marker}{:>2} {:<24} {:>3} {:>3} {:>3} {:>5}",
                row.rank, team, row.wins, row.draws, row.losses, row.points
            ),
            style,
        )));
    }

    if truncated && rows.len() > SHORT_LIST_LEN {
        lines.push(Line::from(Span::styled(
            format!("… {} more — press s to see all", rows.len() - SHORT_LIST_LEN),
            Style::default().fg(Color::DarkGray),
        )));
    } else if let Some(description) = rows.get(selected).and_then(|r| r.description.as_deref()) {
        lines.push(Line::from(Span::styled(
            description.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_scorers_pane(f: &mut Frame, area: Rect, app: &App, truncated: bool) {
    let focused = app.state.standings_focus == StandingsFocus::Scorers;
    let block = default_border(pane_border(focused)).title(" Top Goal Scorers [t] ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &app.state.scorers.view {
        ScorersViewState::Initial => draw_pane_message(f, inner, "No league selected", Color::DarkGray),
        ScorersViewState::Loading => {
            draw_pane_message(f, inner, "Loading top scorers...", Color::DarkGray)
        }
        ScorersViewState::Error => {
            draw_pane_message(f, inner, "Could not load top scorers. Press r to retry.", Color::Red)
        }
        ScorersViewState::NoInformation => {
            draw_pane_message(f, inner, "No top scorer information for this league.", Color::Gray)
        }
        ScorersViewState::Loaded(scorers) => {
            draw_scorer_rows(f, inner, scorers, app.state.scorers.selected, truncated)
        }
    }
}

fn draw_scorer_rows(
    f: &mut Frame,
    area: Rect,
    scorers: &[TopScorer],
    selected: usize,
    truncated: bool,
) {
    if area.height < 2 {
        return;
    }

    let mut lines = vec![Line::from(Span::styled(
        format!("{:<26} {:>5}", "Player", "Goals"),
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
    ))];

    // Combined layout shows at most five rows regardless of the state's
    // see-all flag.
    let shown: &[TopScorer] = if truncated {
        &scorers[..scorers.len().min(SHORT_LIST_LEN)]
    } else {
        scorers
    };
    let list_height = area.height.saturating_sub(1) as usize;
    let (start, end) = scroll_window(shown.len(), selected.min(shown.len().saturating_sub(1)), list_height);

    for (offset, scorer) in shown[start..end].iter().enumerate() {
        let idx = start + offset;
        let marker = if idx == selected { '>' } else { ' ' };
        let style = if idx == selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        let name: String = scorer.full_name().chars().take(26).collect();
        lines.push(Line::from(Span::styled(
            format!("{marker}{:<26} {:>5}", name, scorer.goals),
            style,
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_pane_message(f: &mut Frame, area: Rect, msg: &str, color: Color) {
    f.render_widget(
        Paragraph::new(msg)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        area,
    );
}

// ---------------------------------------------------------------------------
// Player statistics screen
// ---------------------------------------------------------------------------

fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Player Statistics ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let profile = match &app.state.player.view {
        PlayerViewState::Initial => {
            draw_pane_message(f, inner, "Select a top scorer and press Enter", Color::DarkGray);
            return;
        }
        PlayerViewState::Loading => {
            draw_pane_message(f, inner, "Loading player...", Color::DarkGray);
            return;
        }
        PlayerViewState::Error => {
            draw_pane_message(f, inner, "Could not load player statistics.", Color::Red);
            return;
        }
        PlayerViewState::NoInformation => {
            draw_pane_message(f, inner, "No statistics for this player this season.", Color::Gray);
            return;
        }
        PlayerViewState::Loaded(profile) => profile,
    };

    let mut lines = Vec::new();
    lines.push(Line::from(vec![
        Span::styled(
            profile.info.full_name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   age {}   {}", profile.info.age, profile.info.weight),
            Style::default().fg(Color::Gray),
        ),
    ]));

    let rating = profile.info.rating.min(100);
    let filled = (rating as usize) / 5;
    lines.push(Line::from(vec![
        Span::styled("Rating ", Style::default().fg(Color::Gray)),
        Span::styled(
            "█".repeat(filled) + &"░".repeat(20 - filled),
            Style::default().fg(rating_color(rating)),
        ),
        Span::styled(format!(" {rating}/100"), Style::default().fg(Color::Gray)),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        format!(
            "{:<22} {:<18} {:>3} {:>4} {:>4} {:>4} {:>5} {:>4} {:>3} {:>3}",
            "Competition", "Team", "App", "Gls", "Ast", "Sht", "Pass", "Tkl", "YC", "RC"
        ),
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
    )));

    let offset = app.state.player.scroll_offset as usize;
    let max_rows = inner.height.saturating_sub(lines.len() as u16 + 1) as usize;
    for stats in profile.competitions.iter().skip(offset).take(max_rows.max(1)) {
        let competition: String = stats.competition.chars().take(22).collect();
        let team: String = stats.team.chars().take(18).collect();
        lines.push(Line::from(format!(
            "{:<22} {:<18} {:>3} {:>4} {:>4} {:>4} {:>5} {:>4} {:>3} {:>3}",
            competition,
            team,
            stats.appearances,
            stats.goals,
            stats.assists,
            stats.shots,
            stats.passes,
            stats.tackles,
            stats.yellow_cards,
            stats.red_cards,
        )));
    }

    lines.push(Line::from(Span::styled(
        "j/k scroll  Esc back",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}

fn rating_color(rating: u32) -> Color {
    match rating {
        0..=49 => Color::Red,
        50..=69 => Color::Yellow,
        _ => Color::Green,
    }
}

// ---------------------------------------------------------------------------
// Fixtures screen
// ---------------------------------------------------------------------------

fn draw_fixtures(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.state.fixtures.team_name.is_empty() {
        " Fixtures ".to_string()
    } else {
        format!(" Upcoming — {} ", app.state.fixtures.team_name)
    };
    let block = default_border(Color::White).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let fixtures = match &app.state.fixtures.view {
        FixturesViewState::Initial => {
            draw_pane_message(f, inner, "Select a team in the league table", Color::DarkGray);
            return;
        }
        FixturesViewState::Loading => {
            draw_pane_message(f, inner, "Loading fixtures...", Color::DarkGray);
            return;
        }
        FixturesViewState::Error => {
            draw_pane_message(f, inner, "Could not load fixtures.", Color::Red);
            return;
        }
        FixturesViewState::NoFixtures => {
            draw_pane_message(f, inner, "No upcoming fixtures for this team.", Color::Gray);
            return;
        }
        FixturesViewState::Loaded(fixtures) => fixtures,
    };

    let mut lines = Vec::new();
    let list_height = inner.height.saturating_sub(1) as usize;
    let selected = app.state.fixtures.selected;
    let (start, end) = scroll_window(fixtures.len(), selected, list_height);

    for (offset, fixture) in fixtures[start..end].iter().enumerate() {
        let idx = start + offset;
        let marker = if idx == selected { '>' } else { ' ' };
        let style = if idx == selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        let score = if fixture.home.goals.is_empty() && fixture.away.goals.is_empty() {
            "vs".to_string()
        } else {
            format!("{} - {}", fixture.home.goals, fixture.away.goals)
        };
        lines.push(Line::from(Span::styled(
            format!(
                "{marker} {} {}  {:>22} {score} {:<22}  {}",
                fixture.date, fixture.time, fixture.home.team_name, fixture.away.team_name,
                fixture.status
            ),
            style,
        )));
    }

    lines.push(Line::from(Span::styled(
        "j/k move  Esc back",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}

// ---------------------------------------------------------------------------
// Chrome
// ---------------------------------------------------------------------------

fn draw_placeholder(f: &mut Frame, area: Rect, msg: &str) {
    let block = default_border(Color::DarkGray);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(msg)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        inner,
    );
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(11), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let height = (area.height / 2).max(8).min(area.height);
    let log_area = Rect::new(
        area.x,
        area.y + area.height.saturating_sub(height),
        area.width,
        height,
    );
    f.render_widget(Clear, log_area);
    let widget = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Gray));
    f.render_widget(widget, log_area);
}
