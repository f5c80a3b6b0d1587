use log::{debug, info};
use std::env;
use std::io;
use termtour::input::InputStream;
use termtour::output::OutputStream;
use termtour::session::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    // Display help information on request. Exit with success status
    // since the user is requesting help, not encountering an error.
    if args.iter().skip(1).any(|a| a == "--help" || a == "-h") {
        println!("termtour - guided tour of console stream input and output");
        println!();
        println!("Usage: {}", args[0]);
        println!();
        println!("The program walks through a fixed sequence of input/output");
        println!("demonstrations on stdin and stdout: raw character output,");
        println!("bounded string writes, float precision/width/fill formatting,");
        println!("token and line input, and numeric extraction. Each step waits");
        println!("for enter before moving on.");
        println!();
        println!("Set RUST_LOG=debug for read/write tracing.");
        return Ok(());
    }

    if !atty::is(atty::Stream::Stdin) {
        debug!("stdin is not a terminal; pacing gates will consume scripted lines");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        InputStream::new(stdin.lock()),
        OutputStream::new(stdout.lock()),
    );

    debug!("starting console session");
    if let Err(e) = session.run() {
        eprintln!("\nError during session: {e}");
        std::process::exit(1);
    }
    info!("session complete");
    Ok(())
}
