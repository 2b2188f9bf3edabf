//! Line-based prompting
//!
//! Reads answers from any `BufRead` and writes prompts to any `Write`, so
//! the menu can be driven by stdin/stdout or by a script in tests.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::error::{CipherError, CipherResult};

/// Prompts the user and reads their answers
pub struct Prompter<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Write a line of output
    pub fn say(&mut self, text: &str) -> CipherResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Clear the terminal, unless disabled in settings
    pub fn clear_screen(&mut self) -> CipherResult<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Prompt for a string input
    ///
    /// Returns [`CipherError::InputClosed`] once the input is exhausted.
    pub fn prompt_string(&mut self, prompt: &str) -> CipherResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Err(CipherError::InputClosed);
        }

        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Show numbered options and return the zero-based index chosen
    pub fn option_selection(&mut self, prompt: &str, options: &[&str]) -> CipherResult<usize> {
        let mut selection = format!("{}\n", prompt);
        for (index, option) in options.iter().enumerate() {
            selection.push_str(&format!("({}) {}\n", index + 1, option));
        }
        selection.push_str("\n> ");

        loop {
            let answer = self.prompt_string(&selection)?;
            match answer.trim().parse::<usize>() {
                Ok(choice) if (1..=options.len()).contains(&choice) => return Ok(choice - 1),
                Ok(_) => continue,
                Err(_) => self.say("\nInvalid input. Must be a number.")?,
            }
        }
    }

    /// Prompt until the answer parses, showing why a rejected answer failed
    pub fn prompt_parsed<T>(&mut self, prompt: &str) -> CipherResult<T>
    where
        T: FromStr<Err = CipherError>,
    {
        loop {
            let answer = self.prompt_string(prompt)?;
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(e) if e.is_invalid_parameter() => self.say(&format!("\n{}", e))?,
                Err(e) => return Err(e),
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
