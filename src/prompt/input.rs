use std::io::{self, BufRead, BufReader, ErrorKind, IsTerminal, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use inquire::{InquireError, Text};

use super::{LineSource, Reply};
use crate::term;

/// Line editor prompts via inquire (needs a TTY).
pub struct TerminalInput;

impl LineSource for TerminalInput {
    fn read_line(&mut self, message: &str) -> io::Result<Reply> {
        match Text::new(message).prompt() {
            Ok(line) => Ok(Reply::Line(line)),
            Err(InquireError::OperationInterrupted | InquireError::OperationCanceled) => {
                Ok(Reply::Interrupted)
            }
            Err(InquireError::IO(e)) => Err(e),
            Err(e) => Err(io::Error::other(e)),
        }
    }
}

enum Event {
    Line(String),
    Eof,
    Failed(io::Error),
    Interrupted,
}

/// Plain line reads, for piped input.
///
/// Lines are read on a helper thread so that an interrupt can end a
/// blocked read. End of input counts as an interrupt too.
pub struct StdinInput {
    events: Receiver<Event>,
    sender: Sender<Event>,
    closed: bool,
}

/// Cancels the pending (or next) read of a [`StdinInput`].
#[derive(Clone)]
pub struct Interrupter(Sender<Event>);

impl Interrupter {
    pub fn interrupt(&self) {
        let _ = self.0.send(Event::Interrupted);
    }
}

impl StdinInput {
    pub fn new<R: BufRead + Send + 'static>(reader: R) -> Self {
        let (sender, events) = mpsc::channel();
        let lines = sender.clone();
        thread::spawn(move || pump(reader, lines));
        Self { events, sender, closed: false }
    }

    pub fn interrupter(&self) -> Interrupter {
        Interrupter(self.sender.clone())
    }
}

fn pump<R: BufRead>(mut reader: R, lines: Sender<Event>) {
    loop {
        let mut line = String::new();
        let event = match reader.read_line(&mut line) {
            Ok(0) => Event::Eof,
            Ok(_) => Event::Line(line.trim_end_matches(['\n', '\r']).to_string()),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => Event::Failed(e),
        };
        let last = !matches!(event, Event::Line(_));
        if lines.send(event).is_err() || last {
            return;
        }
    }
}

impl LineSource for StdinInput {
    fn read_line(&mut self, message: &str) -> io::Result<Reply> {
        if self.closed {
            return Ok(Reply::Interrupted);
        }

        let mut out = io::stdout();
        write!(out, "{} ", term::bold(message))?;
        out.flush()?;

        match self.events.recv() {
            Ok(Event::Line(line)) => Ok(Reply::Line(line)),
            Ok(Event::Failed(e)) => {
                self.closed = true;
                Err(e)
            }
            Ok(Event::Eof | Event::Interrupted) | Err(_) => {
                self.closed = true;
                Ok(Reply::Interrupted)
            }
        }
    }
}

/// Turn Ctrl-C into an interrupt of `input` instead of killing the process.
pub fn forward_ctrl_c(interrupter: Interrupter) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    thread::Builder::new()
        .name("ctrl-c".into())
        .spawn(move || {
            runtime.block_on(async {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::debug!("ctrl-c received");
                    interrupter.interrupt();
                }
            })
        })?;
    Ok(())
}

/// inquire when stdin is a terminal, plain reads otherwise.
pub fn default_source() -> Box<dyn LineSource> {
    if io::stdin().is_terminal() {
        return Box::new(TerminalInput);
    }

    let input = StdinInput::new(BufReader::new(io::stdin()));
    if let Err(e) = forward_ctrl_c(input.interrupter()) {
        tracing::debug!(error = %e, "ctrl-c forwarding unavailable");
    }
    Box::new(input)
}
