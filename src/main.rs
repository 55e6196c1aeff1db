use log::{debug, info};
use station_repair::game::{GameController, SessionState, FAREWELL};
use station_repair::input::LineInput;
use std::io::{self, Write};

fn main() {
    // Initialize logging (RUST_LOG=debug for a full command trace)
    env_logger::init();

    // World setup is the only fatal error path: the core itself never
    // terminates the process, so a malformed graph is reported here and
    // the session never starts.
    let mut game = match GameController::new() {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Error: could not set up the station: {e}");
            std::process::exit(1);
        }
    };

    // Only prompt when a human is on the other end; piped or scripted
    // input gets clean, prompt-free output.
    let interactive = atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout);
    debug!("session start (interactive={interactive})");

    println!("{}", game.opening());

    let mut input = LineInput::new();
    loop {
        if interactive {
            print!("\nWhat would you like to do? ");
            let _ = io::stdout().flush();
        }

        // EOF or an interrupted read ends the session cleanly.
        let line = match input.read_line() {
            Ok(line) => line,
            Err(reason) => {
                debug!("input ended: {reason}");
                println!("\n{FAREWELL}");
                break;
            }
        };

        let turn = game.process_input(&line);
        println!("\n{}", turn.feedback);

        match turn.state {
            SessionState::Continue => {}
            SessionState::Won => {
                info!("session ended with a win");
                break;
            }
            SessionState::Quit => {
                debug!("session ended by quit");
                break;
            }
        }
    }
}
