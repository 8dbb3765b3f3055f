//! Confirmation workflow
//!
//! Destructive execution requires two distinct confirmation strings at
//! two separate decision points, separated by the full discovery
//! phase. The machine is an explicit enum with a transition function
//! so the states and illegal transitions are testable without stdin.
//!
//! ```text
//! SelectMode ──"DRY"/empty──▶ AwaitRunConfirm(DryRun) ──any──▶ Running(DryRun) ──▶ Done(DryRun)
//!            ──"NUKE"──────▶ AwaitRunConfirm(Nuke) ──"YES I DO"──▶ Running(Nuke)
//!                                                                      │
//!                                        Done(Nuke) ◀──"NUKE"── AwaitNukeConfirm
//!
//! any unrecognized input ──▶ Aborted (terminal)
//! ```

use anyhow::{Context, Result};
use gh_sweep_config::Mode;
use std::io::Write;

/// Token selecting destructive mode at the first prompt
pub const NUKE_MODE_TOKEN: &str = "NUKE";

/// Token selecting dry-run mode explicitly (empty input also works)
pub const DRY_RUN_MODE_TOKEN: &str = "DRY";

/// Literal required to start a destructive run
pub const RUN_CONFIRMATION: &str = "YES I DO";

/// Literal required to actually delete, after discovery
pub const NUKE_CONFIRMATION: &str = "NUKE";

/// State of the confirmation workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Waiting for the mode token
    SelectMode,
    /// Mode chosen, waiting for the go-ahead to run discovery
    AwaitRunConfirm(Mode),
    /// Discovery phase (mode-independent)
    Running(Mode),
    /// Discovery done in Nuke mode, waiting for the final literal
    AwaitNukeConfirm,
    /// Terminal: run completed (deletion only in Nuke mode)
    Done(Mode),
    /// Terminal: a gate rejected its input; nothing was deleted
    Aborted,
}

impl Stage {
    /// Advance the machine with one line of user input
    ///
    /// `Running` advances without input once discovery completes;
    /// callers pass the empty string there. Terminal states absorb
    /// all input.
    pub fn advance(self, input: &str) -> Stage {
        match self {
            Stage::SelectMode => match input {
                "" | DRY_RUN_MODE_TOKEN => Stage::AwaitRunConfirm(Mode::DryRun),
                NUKE_MODE_TOKEN => Stage::AwaitRunConfirm(Mode::Nuke),
                _ => Stage::Aborted,
            },
            Stage::AwaitRunConfirm(Mode::DryRun) => Stage::Running(Mode::DryRun),
            Stage::AwaitRunConfirm(Mode::Nuke) => {
                if input == RUN_CONFIRMATION {
                    Stage::Running(Mode::Nuke)
                } else {
                    Stage::Aborted
                }
            }
            Stage::Running(Mode::DryRun) => Stage::Done(Mode::DryRun),
            Stage::Running(Mode::Nuke) => Stage::AwaitNukeConfirm,
            Stage::AwaitNukeConfirm => {
                if input == NUKE_CONFIRMATION {
                    Stage::Done(Mode::Nuke)
                } else {
                    Stage::Aborted
                }
            }
            terminal @ (Stage::Done(_) | Stage::Aborted) => terminal,
        }
    }

    /// Whether the machine can make no further progress
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Done(_) | Stage::Aborted)
    }
}

/// Line-oriented input oracle
///
/// The seam keeps the workflow testable; production uses `StdinPrompt`.
pub trait Prompt {
    /// Show `message` and read one line, without the trailing newline
    fn read_line(&mut self, message: &str) -> Result<String>;
}

/// Interactive prompt reading from stdin
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn read_line(&mut self, message: &str) -> Result<String> {
        print!("{}", message);
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        std::io::stdin()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

/// Drives the confirmation machine against a prompt
pub struct ConfirmationWorkflow<P: Prompt> {
    prompt: P,
    stage: Stage,
}

impl<P: Prompt> ConfirmationWorkflow<P> {
    pub fn new(prompt: P) -> Self {
        Self {
            prompt,
            stage: Stage::SelectMode,
        }
    }

    /// Current stage, for logging and assertions
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// First gate: read the mode token
    ///
    /// Returns the chosen mode, or None if the input was rejected.
    pub fn select_mode(&mut self) -> Result<Option<Mode>> {
        let input = self.prompt.read_line(&format!(
            "Mode? [{} = delete, {} or empty = dry run]: ",
            NUKE_MODE_TOKEN, DRY_RUN_MODE_TOKEN
        ))?;
        self.stage = self.stage.advance(&input);
        match self.stage {
            Stage::AwaitRunConfirm(mode) => Ok(Some(mode)),
            _ => Ok(None),
        }
    }

    /// Second gate: confirm starting the run
    ///
    /// Dry runs proceed on any input; destructive runs require the
    /// exact run-confirmation literal.
    pub fn confirm_run(&mut self) -> Result<bool> {
        let message = match self.stage {
            Stage::AwaitRunConfirm(Mode::Nuke) => format!(
                "This run can DELETE branches. Type '{}' to continue: ",
                RUN_CONFIRMATION
            ),
            _ => "Press enter to start discovery: ".to_string(),
        };
        let input = self.prompt.read_line(&message)?;
        self.stage = self.stage.advance(&input);
        Ok(matches!(self.stage, Stage::Running(_)))
    }

    /// Mark discovery as finished and advance past `Running`
    pub fn discovery_finished(&mut self) {
        self.stage = self.stage.advance("");
    }

    /// Final gate, Nuke mode only: confirm the deletion itself
    pub fn confirm_nuke(&mut self, candidate_count: usize) -> Result<bool> {
        let input = self.prompt.read_line(&format!(
            "About to delete {} branches. Type '{}' to proceed: ",
            candidate_count, NUKE_CONFIRMATION
        ))?;
        self.stage = self.stage.advance(&input);
        Ok(matches!(self.stage, Stage::Done(Mode::Nuke)))
    }
}
