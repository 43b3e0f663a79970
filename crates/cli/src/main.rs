use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tabletalk_core::{
    Event, EventBus, GameSession, PlayerId, SessionError, TurnPhase, WheelLevel, WheelTier,
};
use tabletalk_data::{load_content, load_rules};

mod persistence;

use persistence::{default_names_path, load_names_file, save_names_file};

const DEFAULT_SEED: u64 = 0x7AB1E;
const SPIN_TICK_MS: u64 = 100;

#[derive(Debug, Clone)]
struct CliOptions {
    seed: u64,
    assets: PathBuf,
    show_help: bool,
}

fn parse_cli_options(args: &[String]) -> Result<CliOptions, String> {
    let mut seed = DEFAULT_SEED;
    let mut assets = PathBuf::from("assets");
    let mut show_help = false;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed: {value}"))?;
            }
            "--assets" => {
                assets = PathBuf::from(iter.next().ok_or("--assets needs a value")?);
            }
            "--help" | "-h" => show_help = true,
            other => return Err(format!("unknown option: {other}")),
        }
    }
    Ok(CliOptions {
        seed,
        assets,
        show_help,
    })
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_cli_options(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            std::process::exit(2);
        }
    };
    if options.show_help {
        print_usage();
        return;
    }
    if let Err(err) = run(options) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(options: CliOptions) -> Result<(), String> {
    let content = load_content(&options.assets).map_err(|err| format!("{err:#}"))?;
    let rules = load_rules(&options.assets).map_err(|err| format!("{err:#}"))?;
    let mut session = GameSession::new(content, rules, options.seed);
    let mut events = EventBus::default();

    restore_names(&mut session, &mut events);
    for _ in events.drain() {}

    println!("tabletalk (seed {})", session.seed());
    print_help();
    print_status(&session);

    let mut last_tick = Instant::now();
    loop {
        print!("{}", prompt_text(&session));
        io::stdout().flush().map_err(|err| err.to_string())?;
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => return Err(err.to_string()),
        }
        let elapsed = last_tick.elapsed().as_millis() as u64;
        last_tick = Instant::now();
        session.advance(elapsed, &mut events);

        let input = line.trim();
        if input.is_empty() {
            render_events(&mut events, &session);
            continue;
        }
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();
        match cmd {
            "help" | "h" | "?" => print_help(),
            "quit" | "exit" | "q" => break,
            "status" | "s" => print_status(&session),
            "scores" => print_scores(&session),
            "draw" | "d" => match session.draw(&mut events) {
                Ok(card) => println!("\"{}\"", card.text),
                Err(err) => print_rejection(&err),
            },
            "count" | "c" => {
                if let Err(err) = session.count(&mut events) {
                    print_rejection(&err);
                }
            }
            "skip" | "k" => {
                if let Err(err) = session.skip(&mut events) {
                    print_rejection(&err);
                }
            }
            "wheel" | "w" => match parse_level(&args) {
                Some(level) => match session.open_wheel(level, &mut events) {
                    Ok(tier) => print_tier(tier),
                    Err(err) => print_rejection(&err),
                },
                None => println!("usage: wheel <1|2|3>"),
            },
            "close" => {
                if let Err(err) = session.close_wheel(&mut events) {
                    print_rejection(&err);
                }
            }
            "spin" | "sp" => match session.spin(&mut events) {
                Ok(_) => {
                    render_events(&mut events, &session);
                    run_spin_animation(&mut session, &mut events);
                    last_tick = Instant::now();
                }
                Err(err) => print_rejection(&err),
            },
            "name" | "n" => handle_rename(&mut session, &mut events, &args),
            other => println!("unknown command: {other} (try help)"),
        }
        render_events(&mut events, &session);
    }
    Ok(())
}

fn restore_names(session: &mut GameSession, events: &mut EventBus) {
    let Some(path) = default_names_path() else {
        return;
    };
    if !path.exists() {
        return;
    }
    match load_names_file(&path) {
        Ok(saved) => {
            if let Some(name) = saved.player_one.as_deref() {
                let _ = session.rename_player(PlayerId::One, name, events);
            }
            if let Some(name) = saved.player_two.as_deref() {
                let _ = session.rename_player(PlayerId::Two, name, events);
            }
        }
        Err(err) => eprintln!("names file ignored: {err}"),
    }
}

fn handle_rename(session: &mut GameSession, events: &mut EventBus, args: &[&str]) {
    let Some((first, rest)) = args.split_first() else {
        println!("usage: name <1|2> <new name>");
        return;
    };
    let Some(player) = first.parse().ok().and_then(PlayerId::from_number) else {
        println!("usage: name <1|2> <new name>");
        return;
    };
    let name = rest.join(" ");
    match session.rename_player(player, &name, events) {
        Ok(()) => persist_names(session),
        Err(err) => print_rejection(&err),
    }
}

fn persist_names(session: &GameSession) {
    let Some(path) = default_names_path() else {
        return;
    };
    let result = save_names_file(
        Some(session.player_name(PlayerId::One)),
        Some(session.player_name(PlayerId::Two)),
        &path,
    );
    if let Err(err) = result {
        eprintln!("could not save names: {err}");
    }
}

fn run_spin_animation(session: &mut GameSession, events: &mut EventBus) {
    while session.is_spinning() {
        std::thread::sleep(Duration::from_millis(SPIN_TICK_MS));
        session.advance(SPIN_TICK_MS, events);
    }
}

fn parse_level(args: &[&str]) -> Option<WheelLevel> {
    args.first()
        .and_then(|value| value.parse().ok())
        .and_then(WheelLevel::from_number)
}

fn prompt_text(session: &GameSession) -> String {
    let deck = session.deck_remaining();
    let name = session.player_name(session.active_player());
    match session.phase() {
        TurnPhase::AwaitingDraw => format!("[deck {deck}] {name} > "),
        TurnPhase::AwaitingDecision => format!("[deck {deck}] {name} (count/skip) > "),
    }
}

fn render_events(events: &mut EventBus, session: &GameSession) {
    for event in events.drain() {
        match event {
            Event::CardDrawn {
                id,
                category,
                remaining,
            } => println!(
                "card #{} [{}], {} left in the deck",
                id.0,
                category.label(),
                remaining
            ),
            Event::DeckExhausted => println!("the deck is out of questions"),
            Event::CardCounted {
                player,
                score,
                reached_goal,
            } => {
                println!(
                    "{} counts it: {}/{}",
                    session.player_name(player),
                    score,
                    session.goal_score()
                );
                if reached_goal {
                    println!("{} filled their meter!", session.player_name(player));
                }
            }
            Event::CardSkipped { player } => {
                println!("{} skips", session.player_name(player));
            }
            Event::TurnPassed { to } => println!("turn: {}", session.player_name(to)),
            Event::WheelOpened { level } => {
                println!("mystery wheel level {} is open", level.number());
            }
            Event::WheelClosed { level } => {
                println!("wheel level {} closed", level.number());
            }
            Event::SpinStarted {
                level,
                final_rotation,
                ..
            } => println!(
                "spinning the level {} wheel... ({:.0} deg)",
                level.number(),
                final_rotation
            ),
            Event::SpinRevealed {
                level,
                player,
                prompt,
                score,
            } => {
                println!("L{} mystery: \"{}\"", level.number(), prompt);
                println!(
                    "{} now at {}/{}",
                    session.player_name(player),
                    score,
                    session.goal_score()
                );
            }
            Event::PlayerRenamed { player, name } => {
                println!("player {} is now {}", player.number(), name);
            }
            Event::TimerWarning { seconds_left } => {
                println!("{seconds_left} seconds left to answer");
            }
            Event::TimerExpired => println!("time's up"),
        }
    }
}

fn print_rejection(err: &SessionError) {
    println!("{err}");
}

fn print_tier(tier: &WheelTier) {
    println!(
        "level {} wheel: {} mystery slices, a spin costs {} point(s)",
        tier.level.number(),
        tier.prompts.len(),
        tier.level.cost()
    );
}

fn print_scores(session: &GameSession) {
    for player in PlayerId::BOTH {
        println!(
            "{}: {}/{}",
            session.player_name(player),
            session.score(player),
            session.goal_score()
        );
    }
}

fn print_status(session: &GameSession) {
    println!("deck: {} cards left", session.deck_remaining());
    print_scores(session);
    println!(
        "turn: {}",
        session.player_name(session.active_player())
    );
    if session.phase() == TurnPhase::AwaitingDecision {
        println!("a drawn card is waiting for count or skip");
    }
    if let Some(level) = session.open_tier() {
        println!("wheel level {} is open", level.number());
    }
    if let Some(seconds) = session.seconds_left() {
        println!("answer timer: {seconds}s");
    }
    let affordable: Vec<String> = WheelLevel::ALL
        .iter()
        .filter(|level| session.can_afford(**level))
        .map(|level| level.number().to_string())
        .collect();
    if affordable.is_empty() {
        println!("no wheel affordable yet");
    } else {
        println!("wheels affordable: {}", affordable.join(", "));
    }
}

fn print_usage() {
    println!("usage: tabletalk-cli [--seed <n>] [--assets <dir>]");
}

fn print_help() {
    println!("commands:");
    println!("  draw | d             draw the next question card");
    println!("  count | c            count the drawn card for a point");
    println!("  skip | k             skip the drawn card");
    println!("  wheel <1|2|3> | w    open a mystery wheel");
    println!("  spin | sp            spin the open wheel");
    println!("  close                close the open wheel");
    println!("  name <1|2> <text>    rename a player");
    println!("  status | s           show the board");
    println!("  scores               show both meters");
    println!("  help | h | ?         this list");
    println!("  quit | exit          leave the game");
}
