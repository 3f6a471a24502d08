use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use rockpaper::cli::Args;
use rockpaper::*;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.verbose);
    let ref mut terminal = args.terminal();
    let session = Session::try_from(args.rules(terminal)?.as_str())?;
    if args.dump {
        println!("{}", serde_json::to_string_pretty(&session)?);
        return Ok(());
    }
    log::debug!("{:<32}\n{}", "component flags", session.registry());
    log::debug!("{:<32}\n{}", "outcome table", session.outcomes());
    println!("\nGame Rules:\n{}\n", session.rules());
    loop {
        let round = session
            .play(terminal)
            .context("broken game configuration")?;
        println!("\n{}", banner(&round.choices(), '-'));
        let message = round.result.to_string();
        let framed = banner(&message, '=');
        match round.result {
            RoundResult::Win(_) => println!("{}", framed.green().bold()),
            RoundResult::Lose(_) => println!("{}", framed.red().bold()),
            RoundResult::Draw => println!("{}", framed.yellow()),
        }
        if !terminal.again()? {
            break;
        }
    }
    Ok(())
}
