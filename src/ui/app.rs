use std::io::{BufRead, Write};

use tracing::{info, warn};

use super::menu::{read_custom_params, render_menu, render_rules, MenuChoice};
use super::prompt::read_line;
use super::screen;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::game::{Notice, Session, SessionParams, Step, SymbolAlphabet};

/// Line-based front end: game-selection menu plus the per-session
/// read/step/render loop. Generic over its streams so it runs on a terminal
/// or on in-memory buffers.
pub struct App<R, W> {
    input: R,
    output: W,
    alphabet: SymbolAlphabet,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W, config: &AppConfig) -> Result<Self, AppError> {
        Ok(App {
            input,
            output,
            alphabet: config.symbols.alphabet()?,
            clear_screen: config.display.clear_screen,
        })
    }

    /// Main application loop: menu, then games, until the user quits or
    /// input ends.
    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            self.clear()?;
            render_menu(&mut self.output)?;

            let Some(line) = read_line(&mut self.input)? else {
                break;
            };

            let params = match MenuChoice::parse(&line) {
                Some(MenuChoice::Classic) => SessionParams::CLASSIC,
                Some(MenuChoice::Custom) => {
                    match read_custom_params(&mut self.input, &mut self.output, &self.alphabet)? {
                        Some(params) => params,
                        None => break,
                    }
                }
                Some(MenuChoice::Rules) => {
                    render_rules(&mut self.output, &self.alphabet)?;
                    if !self.pause()? {
                        break;
                    }
                    continue;
                }
                Some(MenuChoice::Quit) => break,
                None => {
                    writeln!(self.output, "Unknown option '{}'.", line.trim())?;
                    if !self.pause()? {
                        break;
                    }
                    continue;
                }
            };

            match self.play(params) {
                Ok(_) => {}
                Err(AppError::Session(err)) => {
                    warn!(%err, "could not start session");
                    writeln!(self.output, "Cannot start game: {err}")?;
                }
                Err(err) => return Err(err),
            }

            if !self.pause()? {
                break;
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Play one session to its end and return the terminal step.
    /// End of input is treated as `q`.
    pub fn play(&mut self, params: SessionParams) -> Result<Step, AppError> {
        let mut session = Session::new(params, &self.alphabet)?;
        let mut notice: Option<Notice> = None;

        loop {
            self.draw(&session)?;
            if let Some(notice) = notice.take() {
                writeln!(self.output, "{notice}")?;
            }
            write!(
                self.output,
                "{} - choose a column (1-{}), 'u' undo, 'help', 'q' quit: ",
                session.player_name(session.turn()),
                session.cols()
            )?;
            self.output.flush()?;

            let line = read_line(&mut self.input)?.unwrap_or_else(|| "q".to_string());

            match session.step(&line) {
                Step::Continue(next) => notice = next,
                Step::Won(player) => {
                    self.draw(&session)?;
                    writeln!(self.output, "{} wins!", session.player_name(player))?;
                    return Ok(Step::Won(player));
                }
                Step::Drawn => {
                    self.draw(&session)?;
                    writeln!(self.output, "Draw! The board is full.")?;
                    return Ok(Step::Drawn);
                }
                Step::Quit => {
                    info!(moves = session.move_count(), "left game");
                    writeln!(self.output, "Game abandoned.")?;
                    return Ok(Step::Quit);
                }
            }
        }
    }

    /// Consume the app and hand back its output stream
    pub fn into_output(self) -> W {
        self.output
    }

    fn draw(&mut self, session: &Session) -> Result<(), AppError> {
        self.clear()?;
        writeln!(
            self.output,
            "Connect {} | {}x{} | {} players",
            session.win_len(),
            session.rows(),
            session.cols(),
            session.n_players()
        )?;
        writeln!(self.output)?;
        write!(self.output, "{}", session.render_board())?;
        writeln!(self.output)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), AppError> {
        if self.clear_screen {
            screen::clear(&mut self.output)?;
        }
        Ok(())
    }

    /// Wait for Enter. `false` if input has ended.
    fn pause(&mut self) -> Result<bool, AppError> {
        write!(self.output, "Press Enter to continue...")?;
        self.output.flush()?;
        Ok(read_line(&mut self.input)?.is_some())
    }
}
