use crate::render::Renderer;
use anyhow::Result;
use bridge_core::io::{parse_call, parse_hand, parse_position, ParseError};
use bridge_core::{Auction, BiddingMode, Hand, Position};
use bridge_engine::advise_with_trace;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Word that abandons the hand in progress.
pub const BREAK: &str = "break";

/// The user's seat, whose turn it is to deal, and every auction played so far.
#[derive(Debug, Clone)]
pub struct Session {
    user: Position,
    dealer: Position,
    history: Vec<Auction>,
}

impl Session {
    pub fn new(user: Position, dealer: Position) -> Self {
        Self {
            user,
            dealer,
            history: Vec::new(),
        }
    }

    pub fn user(&self) -> Position {
        self.user
    }

    /// Dealer of the hand about to be played.
    pub fn dealer(&self) -> Position {
        self.dealer
    }

    /// Completed or abandoned auctions, oldest first.
    pub fn history(&self) -> &[Auction] {
        &self.history
    }

    /// Stores the finished auction and moves the deal clockwise.
    fn record(&mut self, auction: Auction) {
        debug!(calls = auction.history().len(), "hand recorded");
        self.history.push(auction);
        self.dealer = self.dealer.next();
    }
}

enum Input<T> {
    Value(T),
    Break,
    Eof,
}

enum HandEnd {
    Done,
    Eof,
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    renderer: Renderer,
    trace: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, renderer: Renderer, trace: bool) -> Self {
        Self {
            input,
            output,
            renderer,
            trace,
        }
    }

    /// Plays hands until the input runs out.
    pub fn run(&mut self, user: Option<Position>, dealer: Option<Position>) -> Result<Session> {
        let user = match user {
            Some(position) => position,
            None => match self.ask_position("Your position: ")? {
                Some(position) => position,
                None => return Ok(Session::new(Position::South, Position::North)),
            },
        };
        let dealer = match dealer {
            Some(position) => position,
            None => match self.ask_position("First player to bid: ")? {
                Some(position) => position,
                None => return Ok(Session::new(user, Position::North)),
            },
        };

        info!(%user, %dealer, "session started");
        let mut session = Session::new(user, dealer);
        loop {
            let mut auction = Auction::new(session.user(), session.dealer());
            let end = self.play_hand(&mut auction)?;
            if auction.history().is_empty() && matches!(end, HandEnd::Eof) {
                break;
            }
            session.record(auction);
            if matches!(end, HandEnd::Eof) {
                break;
            }
            self.renderer.new_hand(&mut self.output)?;
        }
        self.output.flush()?;
        Ok(session)
    }

    fn play_hand(&mut self, auction: &mut Auction) -> Result<HandEnd> {
        let hand = match self.ask("Your hand: ", "Invalid hand", parse_hand)? {
            Input::Value(hand) => hand,
            Input::Break => return Ok(HandEnd::Done),
            Input::Eof => return Ok(HandEnd::Eof),
        };

        while !auction.is_finished() {
            let seat = auction.turn();
            let prompt = if auction.is_users_turn() {
                let mode = auction.mode();
                if !mode.is_assisted() {
                    self.renderer.cant_help(&mut self.output)?;
                    return Ok(HandEnd::Done);
                }
                self.show_advice(auction, &hand)?;
                if matches!(mode, BiddingMode::Responding | BiddingMode::OpenersRebid) {
                    return Ok(HandEnd::Done);
                }
                "Your bid: ".to_string()
            } else if seat == auction.partner() {
                "Partner's bid: ".to_string()
            } else {
                format!("{} bid: ", seat)
            };

            match self.enter_call(auction, &prompt)? {
                Input::Value(()) => {}
                Input::Break => return Ok(HandEnd::Done),
                Input::Eof => return Ok(HandEnd::Eof),
            }
        }
        Ok(HandEnd::Done)
    }

    fn show_advice(&mut self, auction: &Auction, hand: &Hand) -> Result<()> {
        if let Some(advice) = advise_with_trace(auction, hand) {
            self.renderer.advice(&mut self.output, &advice, self.trace)?;
        }
        Ok(())
    }

    /// Reads calls for the seat on turn until one is legal.
    fn enter_call(&mut self, auction: &mut Auction, prompt: &str) -> Result<Input<()>> {
        loop {
            let call = match self.ask(prompt, "Invalid bid", parse_call)? {
                Input::Value(call) => call,
                Input::Break => return Ok(Input::Break),
                Input::Eof => return Ok(Input::Eof),
            };
            match auction.add_call(call) {
                Ok(()) => return Ok(Input::Value(())),
                Err(e) => self.renderer.user_error(&mut self.output, "Illegal call", e)?,
            }
        }
    }

    fn ask_position(&mut self, prompt: &str) -> Result<Option<Position>> {
        loop {
            match self.ask(prompt, "Invalid player position", parse_position)? {
                Input::Value(position) => return Ok(Some(position)),
                Input::Break => {
                    self.renderer
                        .user_error(&mut self.output, "Invalid player position", ParseError::Position)?;
                }
                Input::Eof => return Ok(None),
            }
        }
    }

    /// Writes a prompt where the user sees it. JSON mode keeps stdout machine
    /// readable, so prompts go to stderr there.
    fn prompt(&mut self, text: &str) -> Result<()> {
        if self.renderer.is_json() {
            let mut stderr = std::io::stderr().lock();
            write!(stderr, "{}", text)?;
            stderr.flush()?;
        } else {
            write!(self.output, "{}", text)?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Prompts until `parse` accepts the line. Blank lines are ignored.
    fn ask<T>(
        &mut self,
        prompt: &str,
        error: &str,
        parse: fn(&str) -> Result<T, ParseError>,
    ) -> Result<Input<T>> {
        loop {
            self.prompt(prompt)?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                self.prompt("\n")?;
                return Ok(Input::Eof);
            }
            let line = line.trim().to_ascii_lowercase();
            if line.is_empty() {
                continue;
            }
            if line == BREAK {
                return Ok(Input::Break);
            }
            match parse(&line) {
                Ok(value) => return Ok(Input::Value(value)),
                Err(e) => self.renderer.user_error(&mut self.output, error, e)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_core::{Call, Strain};
    use std::io::Cursor;

    fn play(user: Position, dealer: Position, script: &str) -> (Session, String) {
        play_with(Renderer::new(false, false), user, dealer, script)
    }

    fn play_with(
        renderer: Renderer,
        user: Position,
        dealer: Position,
        script: &str,
    ) -> (Session, String) {
        let mut out = Vec::new();
        let session = {
            let mut shell = Shell::new(Cursor::new(script.to_string()), &mut out, renderer, false);
            shell.run(Some(user), Some(dealer)).unwrap()
        };
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_opening_advice_then_bidding_continues() {
        let (session, out) = play(Position::South, Position::South, "16 4 4 3 2\n1nt\n");
        assert!(out.contains("Bid 1 NT"));
        assert!(out.contains("Reason: 15-18 HCP, balanced hand."));
        // After our 1NT, West is asked for a call before input runs out.
        assert!(out.contains("West bid: "));
        assert_eq!(session.history().len(), 1);
        assert_eq!(
            session.history()[0].history()[0].call,
            Call::Bid {
                level: 1,
                strain: Strain::NoTrump
            }
        );
    }

    #[test]
    fn test_response_ends_the_hand() {
        let (session, out) = play(Position::South, Position::North, "5 6 3 2 2\n1nt\np\n");
        assert!(out.contains("Partner's bid: "));
        assert!(out.contains("East bid: "));
        assert!(out.contains("Bid 2 Hearts then Pass"));
        assert!(out.contains("New hand"));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.dealer(), Position::East);
    }

    #[test]
    fn test_cant_help_after_opponents_open() {
        let (_, out) = play(Position::South, Position::East, "12 4 3 3 3\n1s\n");
        assert!(out.contains("We can't help you anymore."));
    }

    #[test]
    fn test_break_abandons_hand() {
        let (session, out) = play(Position::South, Position::North, "10 4 3 3 3\nbreak\n");
        assert!(out.contains("New hand"));
        assert_eq!(session.history().len(), 1);
        assert!(session.history()[0].history().is_empty());
        assert_eq!(session.dealer(), Position::East);
    }

    #[test]
    fn test_bad_input_reprompts() {
        let (_, out) = play(
            Position::South,
            Position::North,
            "10 4 3 3\n10 4 3 3 2\n10 4 3 3 3\n1s\n1c\n2c\n",
        );
        assert!(out.contains("Invalid hand"));
        assert!(out.contains("expected 13"));
        assert!(out.contains("Illegal call"));
        assert!(out.contains("1C is not higher than 1S"));
        assert_eq!(out.matches("East bid: ").count(), 2);
    }

    #[test]
    fn test_json_mode_writes_only_json() {
        let (session, out) = play_with(
            Renderer::new(false, true),
            Position::South,
            Position::North,
            "10 4 3 3\n5 6 3 2 2\n1nt\np\n12 4 3 3 3\n",
        );
        // The second hand never sees a call, so only the first is kept.
        assert_eq!(session.history().len(), 1);
        assert!(!out.contains("bid: "));
        assert!(!out.contains("Your hand: "));
        let values: Vec<serde_json::Value> = out
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(values[0]["error"], "Invalid hand");
        assert!(values.iter().any(|v| v["next_call_hint"] == "Pass"));
        assert!(values.iter().any(|v| v["notice"] == "New hand"));
    }

    #[test]
    fn test_asks_for_seats() {
        let mut out = Vec::new();
        let session = Shell::new(
            Cursor::new("x\nn\ns\n".to_string()),
            &mut out,
            Renderer::new(false, false),
            false,
        )
        .run(None, None)
        .unwrap();
        assert_eq!(session.user(), Position::North);
        assert_eq!(session.dealer(), Position::South);
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Invalid player position"));
    }
}
