//! The serialized session event stream.
//!
//! Stdin command lines, rendering-backend signals and the search
//! settle poll all funnel into one mpsc channel drained here, so no
//! two session mutations ever interleave.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::audio::ClockEvent;
use crate::catalog::TrackId;
use crate::session::Session;

/// One unit of work for the session thread.
enum Event {
    Clock(ClockEvent),
    Line(String),
}

pub fn run(
    session: &mut Session,
    clock_rx: Receiver<ClockEvent>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (tx, rx) = mpsc::channel::<Event>();

    // Forward backend signals onto the single session stream.
    let clock_forward = tx.clone();
    thread::spawn(move || {
        for event in clock_rx {
            if clock_forward.send(Event::Clock(event)).is_err() {
                break;
            }
        }
    });

    spawn_stdin_reader(tx);

    println!(
        "rondo: {} tracks loaded; type `help` for commands",
        session.catalog().tracks().len()
    );

    loop {
        match rx.recv_timeout(Duration::from_millis(200)) {
            Ok(Event::Clock(event)) => session.handle_clock(event),
            Ok(Event::Line(line)) => {
                if !handle_line(session, line.trim()) {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                // Periodic work: complete a due search lookup.
                session.poll(Instant::now());
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

fn spawn_stdin_reader(tx: Sender<Event>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(Event::Line(line)).is_err() {
                break;
            }
        }
    });
}

/// Dispatch one command line. Returns false when the user asked to
/// quit.
fn handle_line(session: &mut Session, line: &str) -> bool {
    let (cmd, rest) = match line.split_once(' ') {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    match cmd {
        "" => {}
        "help" => print_help(),
        "list" => {
            for t in session.catalog().tracks() {
                println!("{:>4}  {} - {} [{}]", t.id.0, t.artist, t.title, t.genre);
            }
        }
        "play" => match parse_id(rest) {
            Some(id) => {
                if !session.play_id(id) {
                    println!("unknown track id: {rest}");
                }
            }
            None => println!("usage: play <id>"),
        },
        "pause" => session.pause(),
        "toggle" => session.toggle_play_pause(),
        "seek" => match rest.parse::<f64>() {
            Ok(t) => session.seek_to(t),
            Err(_) => println!("usage: seek <seconds>"),
        },
        "vol" => match rest.parse::<f32>() {
            Ok(v) => session.set_volume_level(v),
            Err(_) => println!("usage: vol <0.0..1.0>"),
        },
        "next" => session.skip_to_next(),
        "prev" => session.skip_to_previous(),
        "add" => match parse_id(rest) {
            Some(id) => {
                if !session.enqueue_id(id) {
                    println!("unknown track id: {rest}");
                }
            }
            None => println!("usage: add <id>"),
        },
        "queue" => {
            for t in session.queue().iter() {
                println!("{:>4}  {} - {}", t.id.0, t.artist, t.title);
            }
        }
        "clearq" => session.clear_queue(),
        "shuffle" => {
            let on = !session.playback().shuffled;
            session.set_shuffled(on);
            println!("shuffle {}", if on { "on" } else { "off" });
        }
        "repeat" => {
            let on = !session.playback().repeated;
            session.set_repeated(on);
            println!("repeat {}", if on { "on" } else { "off" });
        }
        "search" => {
            session.search(rest);
        }
        "results" => {
            if session.is_searching() {
                println!("(searching...)");
            }
            for t in session.search_results() {
                println!("{:>4}  {} - {}", t.id.0, t.artist, t.title);
            }
        }
        "status" => print_status(session),
        "quit" | "q" => return false,
        other => println!("unknown command: {other} (try `help`)"),
    }
    true
}

fn parse_id(s: &str) -> Option<TrackId> {
    s.parse::<u64>().ok().map(TrackId)
}

fn print_status(session: &Session) {
    let state = session.playback();
    match &state.current {
        Some(t) => println!(
            "{:?}  {} - {}  {:.0}/{:.0}s  vol {:.2}  shuffle {}  repeat {}  queued {}",
            state.phase,
            t.artist,
            t.title,
            state.current_time,
            state.duration,
            state.volume,
            state.shuffled,
            state.repeated,
            session.queue().len(),
        ),
        None => println!("nothing playing"),
    }
}

fn print_help() {
    println!("commands:");
    println!("  list                 show the catalog");
    println!("  play <id>            play a track");
    println!("  pause | toggle       pause / play-pause");
    println!("  seek <secs>          jump to a position");
    println!("  vol <0..1>           set volume");
    println!("  next | prev          skip forward / restart");
    println!("  add <id> | queue | clearq");
    println!("  shuffle | repeat     toggle flags");
    println!("  search <text> | results");
    println!("  status | quit");
}
