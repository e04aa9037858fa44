use std::io::{self, BufRead, Write};

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use th_engine::{GameConfig, Preset, Session};
use tracing::warn;

const MENU: &str = "(B)uy something at the shop.
(S)ell something at the shop.
(E)xplore surrounding terrain.
(M)ove on to a different town.
(L)ook for trouble!
(H)unt for treasure
(D)ig for gold.
Give up the hunt and e(X)it.";

pub fn run(name: Option<&str>, mode: Option<&str>) -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    println!("Welcome to {}!", "TREASURE HUNTER".cyan());
    println!("Going hunting for the big treasure, eh?");

    let name = match name {
        Some(name) => name.to_string(),
        None => prompt(&mut reader, "What's your name, Hunter? ")?
            .ok_or("stdin closed before the hunt began")?,
    };
    let mode = match mode {
        Some(mode) => mode.to_string(),
        None => prompt(&mut reader, "Hard mode? (e/n/h): ")?.unwrap_or_default(),
    };
    let preset = mode.parse::<Preset>().unwrap_or_else(|e| {
        warn!(%e, "falling back to normal mode");
        Preset::Normal
    });

    let config = GameConfig::default()
        .with_name(&name)
        .map_err(|e| e.to_string())?
        .with_preset(preset);
    let mut session = Session::start(&config, StdRng::from_os_rng());

    let mut news = session.last_report().to_string();
    while !session.is_over() {
        println!();
        println!("{news}");
        println!("***");
        println!("{}", session.status());
        println!();
        println!("{MENU}");
        println!();

        let Some(input) = prompt(&mut reader, "What's your next move? ")? else {
            break; // EOF
        };
        if input.trim().is_empty() {
            continue;
        }

        match session.dispatch(&input) {
            Ok(report) => news = report,
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    }

    if session.is_over() {
        println!("{news}");
    }
    println!("game over");
    Ok(())
}

/// Print a prompt and read one line. Returns `None` at end of input.
fn prompt(reader: &mut impl BufRead, text: &str) -> Result<Option<String>, String> {
    print!("{text}");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim().to_string())),
        Err(e) => Err(e.to_string()),
    }
}
