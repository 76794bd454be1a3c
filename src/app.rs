//! Core application state and logic for the maze game.

use color_eyre::eyre::Result;
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng as _};
use ratatui::DefaultTerminal;

use crate::{
    animation::AnimationManager,
    audio::AudioPlayer,
    config::Settings,
    error::AudioError,
    events,
    session::Session,
    types::{Command, Ending, MainMenuItem, Screen},
    ui,
};

/// Application state container for the maze game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// Settings the application was started with.
    pub(crate) settings: Settings,
    /// Random source handed to the maze generator.
    ///
    /// Seeded from the settings when a seed was given, so the same seed always yields the same
    /// maze.
    pub(crate) rng: StdRng,
    /// Game in progress, kept after it ends so the summary can show it.
    pub(crate) session: Option<Session>,
    /// Animation manager for the exit search visualization.
    pub(crate) animation_manager: AnimationManager,
    /// Background music, present only while it plays.
    pub(crate) audio: Option<AudioPlayer>,
    /// Message shown under the maze, such as the music being unavailable.
    pub(crate) notice: Option<String>,
}

impl App {
    /// Creates a new instance of the App structure on the main menu.
    pub fn new(settings: Settings) -> Self {
        let rng = settings
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

        Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::Play),
            settings,
            rng,
            session: None,
            animation_manager: AnimationManager::new(),
            audio: None,
            notice: None,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal
                .try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Generates a new maze and switches to the in-game screen.
    ///
    /// # Errors
    ///
    /// This function may return errors from maze generation.
    pub(crate) fn start_game(&mut self) -> Result<()> {
        let session = Session::new(
            self.settings.player_name.clone(),
            self.settings.difficulty,
            &mut self.rng,
        )?;

        self.session = Some(session);
        self.animation_manager.clear();
        self.start_music();
        self.screen = Screen::InGame;

        Ok(())
    }

    /// Starts the background music once, unless sound is disabled.
    ///
    /// A failure never reaches the game: it is logged and turned into a notice for the player.
    fn start_music(&mut self) {
        if self.audio.is_some() {
            return;
        }
        let Some(path) = self.settings.music.as_deref() else {
            return;
        };

        match AudioPlayer::play_looped(path) {
            Ok(player) => self.audio = Some(player),
            Err(err) => {
                warn!("music disabled: {err}");
                let notice = match err {
                    AudioError::Read { .. } => "Music file not found! Sound disabled.",
                    AudioError::Decode(_) | AudioError::Device(_) | AudioError::Play(_) => {
                        "Music could not be played. Sound disabled."
                    }
                };
                self.notice = Some(notice.to_owned());
            }
        }
    }

    /// Applies one in-game command to the session.
    pub(crate) fn handle_command(&mut self, command: Command) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match command {
            Command::Move(direction) => {
                if session.step(direction).is_accepted() {
                    // A hint computed from the previous cell no longer applies.
                    self.animation_manager.clear();
                }
                if session.is_complete() {
                    self.end_game(Ending::Victory);
                }
            }
            Command::Hint => {
                if self.animation_manager.is_active() {
                    self.animation_manager.clear();
                } else {
                    self.animation_manager.load(session.trace_exit_hint());
                }
            }
            Command::Quit => self.end_game(Ending::Quit),
        }
    }

    /// Stops the music and shows the summary.
    fn end_game(&mut self, ending: Ending) {
        if let Some(session) = &self.session {
            info!(
                "{} ended the game ({ending:?}) with {} points",
                session.player_name(),
                session.player().score
            );
        }
        if let Some(audio) = self.audio.take() {
            audio.stop();
        }
        self.animation_manager.clear();
        self.screen = Screen::Summary(ending);
    }
}
