// steptty: a terminal animator for stepping through basic language constructs

mod constructs;
mod highlight;
mod playback;
mod trace;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use constructs::{Comparison, ConstructParams, ConstructSpec};
use playback::Playback;
use ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <construct> [options]", program_name);
    eprintln!();
    eprintln!("Constructs:");
    eprintln!("  for       --bound N              counting for loop (default bound 4)");
    eprintln!("  for-each  ITEM [ITEM ...]        for...of loop (default apple banana cherry)");
    eprintln!("  do-while  --start N --end N      do-while loop (defaults 2 and 5)");
    eprintln!("  if-else   --a N --b N --op OP    two-branch if/else (defaults 5, 3, >)");
    eprintln!("  else-if   --a N --b N --op OP    if/else-if/else chain (defaults 3, 3, >)");
    eprintln!();
    eprintln!("OP is one of: > < === !== >= <=");
    eprintln!("Values that fail to parse fall back to 0 rather than aborting.");
    eprintln!();
    eprintln!("Keys inside the TUI: →/n step, space autoplay, r reset, q quit.");
}

/// Find the value following `flag`, if any
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|index| args.get(index + 1))
        .map(String::as_str)
}

/// Parse an integer flag. A missing flag uses the demo default; a value
/// that fails to parse falls back to 0 so bad input never aborts.
fn int_flag(args: &[String], flag: &str, default: i64) -> i64 {
    match flag_value(args, flag) {
        Some(raw) => raw.parse().unwrap_or(0),
        None => default,
    }
}

fn op_flag(args: &[String], default: Comparison) -> Comparison {
    flag_value(args, "--op")
        .and_then(Comparison::from_symbol)
        .unwrap_or(default)
}

/// Build the trace parameters for `spec` from the remaining arguments
fn params_for(spec: &ConstructSpec, args: &[String]) -> ConstructParams {
    match spec.name {
        "for" => ConstructParams::ForLoop {
            bound: int_flag(args, "--bound", 4),
        },
        "for-each" => {
            let items: Vec<String> = args
                .iter()
                .filter(|arg| !arg.starts_with("--"))
                .cloned()
                .collect();
            let items = if items.is_empty() {
                vec![
                    "apple".to_string(),
                    "banana".to_string(),
                    "cherry".to_string(),
                ]
            } else {
                items
            };
            ConstructParams::ForEach { items }
        }
        "do-while" => ConstructParams::DoWhile {
            start: int_flag(args, "--start", 2),
            end: int_flag(args, "--end", 5),
        },
        "if-else" => ConstructParams::IfElse {
            a: int_flag(args, "--a", 5),
            b: int_flag(args, "--b", 3),
            op: op_flag(args, Comparison::Greater),
        },
        _ => ConstructParams::ElseIfChain {
            a: int_flag(args, "--a", 3),
            b: int_flag(args, "--b", 3),
            op: op_flag(args, Comparison::Greater),
        },
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("steptty")
        .to_string();

    if args.len() < 2 {
        eprintln!("Error: No construct given");
        eprintln!();
        print_usage(&program_name);
        std::process::exit(1);
    }

    let construct_name = &args[1];
    let spec = match constructs::find(construct_name) {
        Some(spec) => spec,
        None => {
            let names: Vec<&str> = constructs::all().iter().map(|s| s.name).collect();
            eprintln!(
                "Error: Unknown construct '{}' (available: {})",
                construct_name,
                names.join(", ")
            );
            eprintln!();
            print_usage(&program_name);
            std::process::exit(1);
        }
    };

    let params = params_for(spec, &args[2..]);
    eprintln!("Animating '{}' with {:?}", spec.name, params);

    let playback = Playback::with_params(spec, params);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(playback);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
