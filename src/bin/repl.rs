use std::io::{self, Write};

use account_reputation::profile::{MemoryFetcher, ProfileData};
use account_reputation::resolver::ReputationResolver;
use account_reputation::store::ReputationStore;
use account_reputation::types::{now_timestamp, AccountId, SECS_PER_DAY};
use account_reputation::verify::VerificationController;

/// Interactive driver for the reputation engine. Profiles are scripted
/// into a MemoryFetcher, so the whole resolve/verify cycle can be walked
/// through without a network or a host page.
struct App {
    fetcher: MemoryFetcher,
    resolver: ReputationResolver,
    controller: VerificationController,
}

impl App {
    fn new() -> Self {
        let store = ReputationStore::open(".reputation");
        App {
            fetcher: MemoryFetcher::new(),
            resolver: ReputationResolver::new(store.clone()),
            controller: VerificationController::new(store),
        }
    }

    /// seed <handle> <age_days> <gap_hours> <posts>
    fn cmd_seed(&mut self, handle: &str, age_days: &str, gap_hours: &str, posts: &str) {
        let (age_days, gap_hours, posts) = match (
            age_days.parse::<i64>(),
            gap_hours.parse::<i64>(),
            posts.parse::<usize>(),
        ) {
            (Ok(a), Ok(g), Ok(p)) => (a, g, p),
            _ => {
                eprintln!("seed wants numeric age_days gap_hours posts");
                return;
            }
        };

        let now_secs = now_timestamp().millis() / 1000;
        let creation_ts = now_secs - age_days * SECS_PER_DAY;
        let recent_post_ts: Vec<i64> = (0..posts.min(10) as i64)
            .map(|i| now_secs - i * gap_hours * 3600)
            .collect();

        self.fetcher.stage_profile(
            AccountId::from_url(handle),
            ProfileData {
                creation_ts,
                recent_post_ts,
            },
        );
        println!("seeded {}", handle);
    }

    fn cmd_fail(&mut self, handle: &str) {
        self.fetcher.stage_failure(AccountId::from_url(handle));
        println!("{} will fail to fetch", handle);
    }

    fn cmd_resolve(&mut self, handle: &str) {
        let id = AccountId::from_url(handle);
        let decision = self.resolver.resolve(&id, &mut self.fetcher);
        let style = decision.style();
        println!(
            "{} -> {:?} [{} {}px] fetches={}",
            handle,
            decision.label(),
            style.color.to_hex(),
            style.font_size_px,
            self.fetcher.calls(&id),
        );
    }

    fn cmd_verify(&mut self, handle: &str) {
        let id = AccountId::from_url(handle);
        let decision = self.controller.toggle_verification(&id);
        println!("{} -> {:?}", handle, decision.label());
    }

    fn cmd_show(&self, handle: &str) {
        let id = AccountId::from_url(handle);
        match self.resolver.store().get(&id) {
            Some(record) => println!("{} -> {:?}", handle, record),
            None => println!("{} -> no record", handle),
        }
    }

    fn dispatch(&mut self, line: &str) -> bool {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => return false,
            ["help"] => print_help(),
            ["seed", handle, age, gap, posts] => self.cmd_seed(handle, age, gap, posts),
            ["fail", handle] => self.cmd_fail(handle),
            ["resolve", handle] => self.cmd_resolve(handle),
            ["verify", handle] => self.cmd_verify(handle),
            ["show", handle] => self.cmd_show(handle),
            _ => eprintln!("unrecognized command (try: help)"),
        }
        true
    }
}

fn print_help() {
    println!("commands:");
    println!("  seed <handle> <age_days> <gap_hours> <posts>   stage a profile");
    println!("  fail <handle>                                  stage a fetch failure");
    println!("  resolve <handle>                               run one resolution");
    println!("  verify <handle>                                toggle the user override");
    println!("  show <handle>                                  dump the stored record");
    println!("  quit");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut app = App::new();
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                if !app.dispatch(line.trim()) {
                    break;
                }
            }
            Err(e) => {
                eprintln!("stdin error: {}", e);
                break;
            }
        }
    }
}
