//! Interactive prompt capability

use async_trait::async_trait;
use chainsetup_utils::{prompt_error, SetupError, SetupResult};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

/// What the workflow needs from an interactive surface
#[async_trait]
pub trait Prompter: Send {
    /// Show `choices` and return the index the operator picked
    async fn select_one(&mut self, message: &str, choices: &[String]) -> SetupResult<usize>;

    /// Ask for a line of free text, returned without surrounding whitespace
    async fn input_text(&mut self, message: &str) -> SetupResult<String>;

    /// Show an informational line to the operator
    fn notify(&mut self, message: &str);
}

/// Numbered-menu prompter over a line reader and a writer
pub struct TerminalPrompter<R, W> {
    lines: Lines<R>,
    out: W,
}

impl TerminalPrompter<BufReader<Stdin>, std::io::Stdout> {
    /// Prompter bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), std::io::stdout())
    }
}

impl<R, W> TerminalPrompter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    pub fn new(reader: R, out: W) -> Self {
        Self {
            lines: reader.lines(),
            out,
        }
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    async fn read_line(&mut self) -> SetupResult<String> {
        match self.lines.next_line().await? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(SetupError::InputClosed),
        }
    }

    fn write_line(&mut self, line: &str) {
        // Nothing useful to do when the terminal is gone.
        let _ = writeln!(self.out, "{}", line);
        let _ = self.out.flush();
    }

    fn write_inline(&mut self, text: &str) {
        let _ = write!(self.out, "{}", text);
        let _ = self.out.flush();
    }
}

#[async_trait]
impl<R, W> Prompter for TerminalPrompter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn select_one(&mut self, message: &str, choices: &[String]) -> SetupResult<usize> {
        if choices.is_empty() {
            return Err(prompt_error!("no choices for: {}", message));
        }

        self.write_line(&format!("? {}", message));
        for (i, choice) in choices.iter().enumerate() {
            self.write_line(&format!("  {}) {}", i + 1, choice));
        }

        loop {
            self.write_inline(&format!("Select [1-{}]: ", choices.len()));
            let input = self.read_line().await?;

            match input.parse::<usize>() {
                Ok(n) if (1..=choices.len()).contains(&n) => return Ok(n - 1),
                _ => self.write_line(&format!(
                    "Please enter a number between 1 and {}",
                    choices.len()
                )),
            }
        }
    }

    async fn input_text(&mut self, message: &str) -> SetupResult<String> {
        self.write_inline(&format!("? {} ", message));
        self.read_line().await
    }

    fn notify(&mut self, message: &str) {
        self.write_line(message);
    }
}
