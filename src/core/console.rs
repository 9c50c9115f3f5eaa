//! Console - the read / interpret / execute / render loop
//!
//! A [`Console`] owns the session's [`Catalog`]. The parser only ever sees a
//! shared borrow of it and the engine the exclusive one, one line at a time.

use crate::core::config::ConsoleConfig;
use crate::core::engine::{execute, Outcome};
use crate::core::error::Result;
use crate::core::parser::interpret;
use crate::core::presenter::Presenter;
use crate::core::store::Catalog;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const BANNER: &str =
    "starlog: a catalog of galaxies, stars, planets and moons. Type 'help' for commands.";

/// One interactive session
#[derive(Debug, Default)]
pub struct Console {
    catalog: Catalog,
    presenter: Presenter,
    config: ConsoleConfig,
}

impl Console {
    pub fn new(config: ConsoleConfig) -> Self {
        let presenter = Presenter::new()
            .with_theme(config.theme)
            .with_format(config.format);
        Self {
            catalog: Catalog::new(),
            presenter,
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Interpret and execute a single line
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let command = interpret(line, &self.catalog);
        execute(command, &mut self.catalog)
    }

    /// Read lines until `exit` or end of input
    ///
    /// Lines are decoded lossily, so bytes that are not UTF-8 reach the parser
    /// as replacement characters and fail like any other bad command.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        info!("console started");
        if self.config.banner {
            writeln!(output, "{}", BANNER)?;
        }

        let mut buf = Vec::new();
        let mut lines_read = 0usize;
        loop {
            if !self.config.prompt.is_empty() {
                write!(output, "{}", self.config.prompt)?;
                output.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                break;
            }
            lines_read += 1;

            let line = String::from_utf8_lossy(&buf);
            let outcome = self.handle_line(line.trim_end_matches(['\n', '\r']));
            if let Some(text) = self.presenter.render(&outcome.report)? {
                writeln!(output, "{}", text)?;
            }
            if outcome.is_exit() {
                break;
            }
        }

        output.flush()?;
        info!(lines = lines_read, bodies = self.catalog.len(), "console stopped");
        Ok(())
    }
}
