//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Row, Table},
    Frame,
};

use crate::{
    animation::AnimationManager,
    cell::{Cell, PLAYER_SYMBOL},
    direction::Position,
    grid::Grid,
    session::Session,
    types::{Ending, MainMenuItem, Screen},
    App,
};

/// Symbol drawn over cells on the exit search's current path.
const PATH_SYMBOL: char = '+';

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(frame, item, &app.settings.player_name),
        Screen::Instructions => instructions(frame),
        Screen::InGame => in_game(app, frame)?,
        Screen::Summary(ending) => summary(app, frame, ending)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the bordered, centered box holding a menu and returns one row per item.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, title: &str, items: u8) -> Rc<[Rect]> {
    let space = Layout::vertical([
        Constraint::Percentage(35),
        Constraint::Percentage(30),
        Constraint::Percentage(35),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(u16::from(items) + 2)])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(title.to_owned())
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); usize::from(items)]).split(inner_space)
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "Play", "Instructions" and "Quit". It
/// highlights the currently selected option and greets the player by name in the menu's title.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem, player_name: &str) {
    clear(frame);

    let title = format!("Welcome, {player_name}!");
    let inner_layout = init_menu(frame, &title, MainMenuItem::COUNT);

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let entries = [
        MainMenuItem::Play,
        MainMenuItem::Instructions,
        MainMenuItem::Quit,
    ];
    for (entry, area) in entries.into_iter().zip(inner_layout.iter()) {
        let style = if entry == item {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::styled(entry.label(), style).centered(), *area);
    }
}

/// Renders the panel explaining how to play.
pub(crate) fn instructions(frame: &mut Frame) {
    clear(frame);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let text = vec![
        Line::styled("How to play", bold),
        Line::raw(""),
        Line::from(vec![
            Span::raw("- Use "),
            Span::styled("W A S D", bold),
            Span::raw(" or the arrow keys to move"),
        ]),
        Line::from(vec![
            Span::raw("- Collect every "),
            Span::styled(Cell::Collectible.symbol().to_string(), Color::Yellow),
            Span::raw(" to earn points"),
        ]),
        Line::from(vec![
            Span::raw("- Walls ("),
            Span::styled(Cell::Wall.symbol().to_string(), Color::Green),
            Span::raw(") block your way"),
        ]),
        Line::from(vec![
            Span::raw("- Press "),
            Span::styled("E", bold),
            Span::raw(" to watch the solver look for an exit"),
        ]),
        Line::from(vec![
            Span::raw("- Press "),
            Span::styled("O", bold.fg(Color::Red)),
            Span::raw(" to leave the game"),
        ]),
    ];

    let [area] = Layout::vertical([Constraint::Length(9)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [area] = Layout::horizontal([Constraint::Length(52)])
        .flex(Flex::Center)
        .areas(area);

    let block = Block::bordered()
        .title("Instructions")
        .title_bottom("(h) return")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(Color::White))
            .block(block),
        area,
    );
}

/// Builds one styled line per maze row.
///
/// The player's marker is drawn over the cell at `player`, which is never stored in the grid
/// itself. Cells on the exit search's current path are drawn with [`PATH_SYMBOL`] and cells it
/// already explored are dimmed.
pub(crate) fn maze_lines(
    grid: &Grid,
    player: Position,
    animation: &AnimationManager,
) -> Vec<Line<'static>> {
    grid.iter_rows()
        .enumerate()
        .map(|(row, cells)| {
            let spans: Vec<Span<'static>> = cells
                .iter()
                .enumerate()
                .map(|(col, &cell)| {
                    cell_span(cell, Position::new(row, col), player, animation)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Styled symbol for a single maze cell, followed by a spacer.
fn cell_span(
    cell: Cell,
    pos: Position,
    player: Position,
    animation: &AnimationManager,
) -> Span<'static> {
    let (symbol, style) = if pos == player {
        (
            PLAYER_SYMBOL,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else if animation.is_on_path(pos) {
        // Stars stay visible under the path.
        let symbol = match cell {
            Cell::Collectible => cell.symbol(),
            Cell::Wall | Cell::Open => PATH_SYMBOL,
        };
        (symbol, Style::default().fg(Color::Red))
    } else {
        let color = match cell {
            Cell::Wall => Color::Green,
            Cell::Collectible => Color::Yellow,
            Cell::Open if animation.was_explored(pos) => Color::DarkGray,
            Cell::Open => Color::White,
        };
        (cell.symbol(), Style::default().fg(color))
    };

    Span::styled(format!("{symbol} "), style)
}

/// Text lines shown under the maze.
pub(crate) fn hud_lines(
    session: &Session,
    animation: &AnimationManager,
    notice: Option<&str>,
) -> Vec<Line<'static>> {
    let player = session.player();
    let mut lines = vec![
        Line::from(format!(
            "Player: {}  |  Score: {}  |  Stars: {}/{}",
            session.player_name(),
            player.score,
            player.collected,
            session.total_collectibles()
        )),
        Line::from("w/a/s/d to move | e exit hint | o to quit"),
    ];

    if animation.is_finished() {
        let hint = if animation.found_exit {
            let steps = animation.current_path.len().saturating_sub(1);
            Line::styled(format!("Exit found: {steps} steps away."), Color::Red)
        } else {
            Line::styled("No exit from here: you are walled in.", Color::Red)
        };
        lines.push(hint);
    } else if animation.is_active() {
        lines.push(Line::styled("Searching for an exit...", Color::Red));
    }

    if let Some(notice) = notice {
        lines.push(Line::styled(notice.to_owned(), Color::Yellow));
    }

    lines
}

/// Renders the in-game screen with the maze, the player and the HUD.
///
/// # Errors
///
/// This function may return errors if no session is running or the maze does not fit the numeric
/// types used by the layout.
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let session = app
        .session
        .as_ref()
        .ok_or_eyre("failed to retrieve the running session")?;
    let grid = session.grid();

    let maze = maze_lines(grid, session.player().position, &app.animation_manager);
    let hud = hud_lines(session, &app.animation_manager, app.notice.as_deref());

    let maze_height = u16::try_from(grid.rows())?;
    let maze_width = u16::try_from(grid.cols() * 2)?;
    let hud_height = u16::try_from(hud.len())?;

    // Maze and HUD stacked in the middle of the screen
    let overall_layout = Layout::vertical([
        Constraint::Length(maze_height),
        Constraint::Length(hud_height + 1),
    ])
    .flex(Flex::Center)
    .split(frame.area());

    let maze_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze area from layout")?;
    let hud_full_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get HUD area from layout")?;

    let maze_area = Layout::horizontal([Constraint::Length(maze_width)])
        .flex(Flex::Center)
        .split(maze_area)
        .first()
        .copied()
        .ok_or_eyre("failed to get centered maze area from horizontal layout")?;
    let hud_area = Layout::horizontal([Constraint::Length(maze_width.max(48))])
        .flex(Flex::Center)
        .split(hud_full_area)
        .first()
        .copied()
        .ok_or_eyre("failed to get centered HUD area from horizontal layout")?;

    frame.render_widget(Paragraph::new(maze), maze_area);

    let hud_block = Block::default()
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    frame.render_widget(Paragraph::new(hud).block(hud_block), hud_area);

    Ok(())
}

/// Renders the final summary of the session.
///
/// # Errors
///
/// This function may return errors if no session was played.
pub(crate) fn summary(app: &App, frame: &mut Frame, ending: Ending) -> Result<()> {
    clear(frame);

    let session = app
        .session
        .as_ref()
        .ok_or_eyre("failed to retrieve the finished session")?;
    let player = session.player();

    let [banner_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(6),
        Constraint::Length(2),
    ])
    .flex(Flex::Center)
    .areas(frame.area());

    if ending == Ending::Victory {
        frame.render_widget(
            Line::styled(
                "Congratulations! You collected every star!",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .centered(),
            banner_area,
        );
    }

    let rows = [
        Row::new(["Player".to_owned(), session.player_name().to_owned()]),
        Row::new(["Stars collected".to_owned(), player.collected.to_string()]),
        Row::new(["Final score".to_owned(), player.score.to_string()]),
    ];
    let table = Table::new(rows, [Constraint::Length(16), Constraint::Fill(1)])
        .header(
            Row::new(["Item", "Value"]).style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::bordered()
                .title("Final Result")
                .title_alignment(Alignment::Center)
                .style(Color::Yellow)
                .border_type(BorderType::Rounded),
        );

    let [table_area] = Layout::horizontal([Constraint::Length(40)])
        .flex(Flex::Center)
        .areas(table_area);
    frame.render_widget(table, table_area);

    frame.render_widget(
        Line::styled(
            "Thanks for playing! Press any key to exit.",
            Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )
        .centered(),
        footer_area,
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{config::Settings, solver};

    /// Creates a minimal test app for UI testing.
    fn create_test_app() -> App {
        App::new(Settings {
            seed: Some(3),
            ..Settings::new("Ana")
        })
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Creates a test grid for UI testing.
    fn create_test_grid() -> Grid {
        "#####\n#..*#\n#.#.#\n#####"
            .parse()
            .expect("fixture maze should parse")
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    fn draw_app(app: &App) -> Terminal<TestBackend> {
        let mut terminal = create_test_terminal();
        let result = terminal.draw(|frame| {
            draw(app, frame).expect("drawing should succeed in test");
        });
        assert!(result.is_ok(), "drawing should succeed");
        terminal
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_maze_lines_overlay_player() {
        let grid = create_test_grid();
        let lines = maze_lines(&grid, Position::new(1, 2), &AnimationManager::new());

        let text: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(
            text,
            vec!["# # # # # ", "# . P * # ", "# . # . # ", "# # # # # "]
        );
    }

    #[test]
    fn test_maze_lines_do_not_touch_grid() {
        let grid = create_test_grid();
        let before = grid.clone();
        let _ = maze_lines(&grid, Position::new(1, 1), &AnimationManager::new());

        assert_eq!(grid, before);
    }

    #[test]
    fn test_maze_lines_show_search_path() {
        let mut grid = create_test_grid();
        let gap = Position::new(3, 3);
        grid.set(gap, Cell::Open).expect("gap is inside");
        let mut animation = AnimationManager::new();
        animation.load(solver::trace_exit(&grid, Position::new(1, 1)));
        while !animation.is_finished() {
            animation.advance();
        }

        let lines = maze_lines(&grid, Position::new(1, 1), &animation);
        let text: Vec<String> = lines.iter().map(line_text).collect();

        assert!(animation.found_exit);
        assert_eq!(
            text,
            vec!["# # # # # ", "# P + * # ", "# . # + # ", "# # # + # "]
        );
    }

    #[test]
    fn test_maze_lines_keep_collectible_on_path() {
        let mut grid = create_test_grid();
        let gap = Position::new(3, 3);
        grid.set(gap, Cell::Open).expect("gap is inside");
        let mut animation = AnimationManager::new();
        animation.load(solver::trace_exit(&grid, Position::new(1, 1)));
        while !animation.is_finished() {
            animation.advance();
        }

        let lines = maze_lines(&grid, Position::new(1, 1), &animation);
        let star = lines.get(1).and_then(|line| line.spans.get(3));

        assert!(animation.is_on_path(Position::new(1, 3)));
        assert_eq!(
            star.map(|span| span.content.as_ref()),
            Some("* "),
            "a star on the path keeps its symbol"
        );
        assert_eq!(
            star.and_then(|span| span.style.fg),
            Some(Color::Red),
            "a star on the path takes the path colour"
        );
    }

    #[test]
    fn test_hud_lines() {
        let session = Session::from_grid("Ana".to_owned(), create_test_grid());
        let lines = hud_lines(&session, &AnimationManager::new(), Some("notice"));
        let text: Vec<String> = lines.iter().map(line_text).collect();

        assert_eq!(
            text.first().map(String::as_str),
            Some("Player: Ana  |  Score: 0  |  Stars: 0/1")
        );
        assert_eq!(text.last().map(String::as_str), Some("notice"));
    }

    #[test]
    fn test_hud_lines_report_missing_exit() {
        let session = Session::from_grid("Ana".to_owned(), create_test_grid());
        let mut animation = AnimationManager::new();
        animation.load(session.trace_exit_hint());
        while !animation.is_finished() {
            animation.advance();
        }

        let lines = hud_lines(&session, &animation, None);
        let text: Vec<String> = lines.iter().map(line_text).collect();

        assert_eq!(
            text.last().map(String::as_str),
            Some("No exit from here: you are walled in.")
        );
    }

    #[test]
    fn test_draw_main_menu() {
        let app = create_test_app();
        let terminal = draw_app(&app);

        let text = buffer_text(&terminal);
        assert!(text.contains("Welcome, Ana!"));
        assert!(text.contains("Instructions"));
    }

    #[test]
    fn test_draw_instructions() {
        let mut app = create_test_app();
        app.screen = Screen::Instructions;
        let terminal = draw_app(&app);

        assert!(buffer_text(&terminal).contains("How to play"));
    }

    #[test]
    fn test_draw_in_game() {
        let mut app = create_test_app();
        app.start_game().expect("game should start");
        let terminal = draw_app(&app);

        assert!(buffer_text(&terminal).contains("Player: Ana"));
    }

    #[test]
    fn test_draw_in_game_without_session_fails() {
        let mut app = create_test_app();
        app.screen = Screen::InGame;
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            assert!(
                in_game(&app, frame).is_err(),
                "in-game should fail without a session"
            );
        });

        assert!(
            result.is_ok(),
            "terminal drawing should succeed even if in_game fails"
        );
    }

    #[test]
    fn test_draw_summary_victory() {
        let mut app = create_test_app();
        app.session = Some(Session::from_grid("Ana".to_owned(), create_test_grid()));
        app.screen = Screen::Summary(Ending::Victory);
        let terminal = draw_app(&app);

        let text = buffer_text(&terminal);
        assert!(text.contains("Congratulations!"));
        assert!(text.contains("Final score"));
    }

    #[test]
    fn test_draw_summary_quit() {
        let mut app = create_test_app();
        app.session = Some(Session::from_grid("Ana".to_owned(), create_test_grid()));
        app.screen = Screen::Summary(Ending::Quit);
        let terminal = draw_app(&app);

        let text = buffer_text(&terminal);
        assert!(!text.contains("Congratulations!"));
        assert!(text.contains("Thanks for playing!"));
    }
}
