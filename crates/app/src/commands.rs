//! Scripted control over stdin
//!
//! Each input line is one JSON `PaintCommand`, for example
//! `{"type":"SetTool","data":{"tool":"Brush"}}`. Lines are parsed on a
//! reader thread and handed to the frame loop through a channel, so the loop
//! never blocks on input.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use sketchpad_ipc::PaintCommand;
use tracing::{debug, warn};

/// Start reading commands from stdin
pub fn spawn_stdin_reader() -> Receiver<PaintCommand> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        read_commands(std::io::stdin().lock(), &sender);
        debug!("Command input closed");
    });
    receiver
}

/// Forward every valid command line from `reader` until it ends or the
/// receiving side is gone
pub fn read_commands(reader: impl BufRead, sender: &Sender<PaintCommand>) {
    for line in reader.lines() {
        let Ok(line) = line else {
            break;
        };
        if let Some(command) = parse_line(&line) {
            if sender.send(command).is_err() {
                break;
            }
        }
    }
}

/// Parse one command line; blank lines are skipped, bad ones logged
pub fn parse_line(line: &str) -> Option<PaintCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match PaintCommand::from_json(line) {
        Ok(command) => Some(command),
        Err(err) => {
            warn!("Ignoring command {:?}: {}", line, err);
            None
        }
    }
}
