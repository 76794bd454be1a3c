//! Type definitions and enums for the application state and navigation.

use crate::direction::Direction;

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen of the game.
    MainMenu(MainMenuItem),
    /// Panel explaining the controls.
    Instructions,
    /// In-game screen where the maze is displayed and played.
    InGame,
    /// Final screen summarizing the session.
    ///
    /// This variant carries how the session ended so the summary can congratulate the player when
    /// every star was collected.
    Summary(Ending),
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu. It is used to determine which items
/// can the user select in the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Play" menu option.
    Play,
    /// "Instructions" menu option.
    Instructions,
    /// "Quit" menu option.
    Quit,
}

impl MainMenuItem {
    /// Number of items in the main menu.
    pub(crate) const COUNT: u8 = 3;

    /// Returns the item below this one, staying on the last item.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::Play => Self::Instructions,
            Self::Instructions | Self::Quit => Self::Quit,
        }
    }

    /// Returns the item above this one, staying on the first item.
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::Quit => Self::Instructions,
            Self::Instructions | Self::Play => Self::Play,
        }
    }

    /// Label rendered in the menu.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Instructions => "Instructions",
            Self::Quit => "Quit",
        }
    }
}

/// How a session came to an end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Ending {
    /// Every collectible of the maze was picked up.
    Victory,
    /// The player left the maze before finishing it.
    Quit,
}

/// In-game command read from the keyboard.
///
/// Keys that do not map to a command are filtered out before anything reaches the movement rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Step in a direction.
    Move(Direction),
    /// Toggle the animated exit search.
    Hint,
    /// Leave the maze and show the summary.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_navigation() {
        assert_eq!(MainMenuItem::Play.next(), MainMenuItem::Instructions);
        assert_eq!(MainMenuItem::Instructions.next(), MainMenuItem::Quit);
        assert_eq!(MainMenuItem::Quit.next(), MainMenuItem::Quit);

        assert_eq!(MainMenuItem::Quit.previous(), MainMenuItem::Instructions);
        assert_eq!(MainMenuItem::Instructions.previous(), MainMenuItem::Play);
        assert_eq!(MainMenuItem::Play.previous(), MainMenuItem::Play);
    }

    #[test]
    fn test_main_menu_labels() {
        assert_eq!(MainMenuItem::Play.label(), "Play");
        assert_eq!(MainMenuItem::Instructions.label(), "Instructions");
        assert_eq!(MainMenuItem::Quit.label(), "Quit");
    }

    #[test]
    fn test_screen_variants() {
        let main_menu = Screen::MainMenu(MainMenuItem::Play);
        let summary = Screen::Summary(Ending::Victory);

        assert_eq!(main_menu, Screen::MainMenu(MainMenuItem::Play));
        assert_ne!(main_menu, Screen::InGame);
        assert_ne!(summary, Screen::Summary(Ending::Quit));
        assert_eq!(format!("{:?}", Screen::Instructions), "Instructions");
    }
}
