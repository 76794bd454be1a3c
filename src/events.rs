//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    animation::ANIMATION_FRAME_DELAY_MS,
    direction::Direction,
    types::{Command, MainMenuItem, Screen},
    App,
};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the handler of the current
/// screen. It uses a timeout to avoid blocking the UI, short enough to keep the exit search
/// animation moving.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(ANIMATION_FRAME_DELAY_MS))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code)?;
            }
        }
    }

    // Update animation if in-game
    if matches!(app.screen, Screen::InGame) {
        app.animation_manager.update();
    }

    Ok(())
}

/// Dispatches one key press according to the current screen.
///
/// # Errors
///
/// This function may return errors from starting a new game.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => handle_main_menu(app, item, code)?,
        Screen::Instructions => {
            if matches!(
                code,
                KeyCode::Char('h' | 'q') | KeyCode::Enter | KeyCode::Esc
            ) {
                app.screen = Screen::MainMenu(MainMenuItem::Instructions);
            }
        }
        Screen::InGame => {
            if let Some(command) = command_for(code) {
                app.handle_command(command);
            }
        }
        Screen::Summary(_) => app.exit = true,
    }

    Ok(())
}

/// Handles key presses on the main menu.
///
/// `j`/`k` (or the arrow keys) move the cursor and `l` (or Enter) selects the highlighted item.
/// The digits `1` and `2` and the letter `o` are shortcuts for the instructions, playing and
/// quitting.
fn handle_main_menu(app: &mut App, item: MainMenuItem, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => app.screen = Screen::MainMenu(item.next()),
        KeyCode::Char('k') | KeyCode::Up => app.screen = Screen::MainMenu(item.previous()),
        KeyCode::Char('l') | KeyCode::Enter => select(app, item)?,
        KeyCode::Char('1') => select(app, MainMenuItem::Instructions)?,
        KeyCode::Char('2') => select(app, MainMenuItem::Play)?,
        KeyCode::Char('o' | 'q') => app.exit = true,
        _ => {}
    }

    Ok(())
}

/// Performs the action behind a main menu item.
fn select(app: &mut App, item: MainMenuItem) -> Result<()> {
    match item {
        MainMenuItem::Play => app.start_game()?,
        MainMenuItem::Instructions => app.screen = Screen::Instructions,
        MainMenuItem::Quit => app.exit = true,
    }

    Ok(())
}

/// Maps an in-game key to a command.
///
/// `w`/`a`/`s`/`d` and the arrow keys move, `e` toggles the exit hint, and `o`, `q` or Esc leave
/// the maze. Every other key maps to nothing.
pub(crate) const fn command_for(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('w' | 'W') | KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Char('s' | 'S') | KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Char('a' | 'A') | KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Char('d' | 'D') | KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Char('e' | 'E') => Some(Command::Hint),
        KeyCode::Char('o' | 'O' | 'q' | 'Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
