use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::TableArgs;
use crate::render;

pub async fn run(args: &TableArgs) -> Result<(), String> {
    let mut table = super::open_table(args)?;
    let ctx = super::context(args);

    println!("  {} #{}", "Table open in".bold(), ctx.channel_name);
    println!("  Try '2d20', 'm add 1', 'pool' or 'game'. Type 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        match table.process(&ctx, input).await {
            Ok(response) => println!("{}\n", render::response(&response)),
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    Ok(())
}
