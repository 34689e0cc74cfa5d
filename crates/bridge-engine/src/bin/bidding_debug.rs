use bridge_core::io::{parse_call, parse_hand, parse_position};
use bridge_core::{Auction, Position};
use bridge_engine::advise_with_trace;
use clap::Parser;
use std::process::ExitCode;

/// Print every rule the engine consults for one decision.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The user's hand, e.g. "10 5 3 3 2"
    #[arg(long)]
    hand: String,

    /// The user's seat
    #[arg(long, default_value = "s")]
    user: String,

    /// Who called first
    #[arg(long, default_value = "n")]
    dealer: String,

    /// Calls made so far, e.g. "1nt p"
    #[arg(default_value = "")]
    calls: String,
}

fn build_auction(user: Position, dealer: Position, calls: &str) -> Result<Auction, String> {
    let mut auction = Auction::new(user, dealer);
    for token in calls.split_whitespace() {
        let call = parse_call(token).map_err(|e| format!("{}: {}", token, e))?;
        auction
            .add_call(call)
            .map_err(|e| format!("{}: {}", token, e))?;
    }
    Ok(auction)
}

fn run(args: &Args) -> Result<(), String> {
    let hand = parse_hand(&args.hand).map_err(|e| e.to_string())?;
    let user = parse_position(&args.user).map_err(|e| e.to_string())?;
    let dealer = parse_position(&args.dealer).map_err(|e| e.to_string())?;
    let auction = build_auction(user, dealer, &args.calls)?;

    println!("Hand: {}", hand);
    println!("Mode: {}", auction.mode());
    if !auction.is_users_turn() {
        println!("Note: it is {}'s turn, not {}'s", auction.turn(), user);
    }

    let Some(advice) = advise_with_trace(&auction, &hand) else {
        println!("No programmed help in this phase.");
        return Ok(());
    };

    println!();
    println!("{:<3} | {:<36} | {:<40} | Matched", "Idx", "Table", "Rule");
    println!("{:-<3}-+-{:-<36}-+-{:-<40}-+--------", "", "", "");
    for (idx, step) in advice.steps.iter().enumerate() {
        println!(
            "{:<3} | {:<36} | {:<40} | {}",
            idx + 1,
            step.table,
            step.rule,
            if step.matched { "yes" } else { "" }
        );
    }

    let feedback = &advice.feedback;
    println!();
    println!("Call: {} ({:?})", feedback.call.spoken(), feedback.kind);
    for (label, text) in [
        ("Partner has", &feedback.partner_info),
        ("Then", &feedback.next_call_hint),
        ("Requirement", &feedback.extra_requirement),
        ("Reason", &feedback.rationale),
    ] {
        if let Some(text) = text {
            println!("{}: {}", label, text);
        }
    }
    if let Some(interference) = feedback.interference {
        println!("{}", interference.describe());
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
