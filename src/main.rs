#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, AiPlayer, Board, CliPlayer, GameEngine, GameStatus, InMemoryTransport, Player,
    PlayerNode, Role, TcpTransport, Transport,
};

#[cfg(feature = "std")]
use std::net::{Ipv4Addr, SocketAddr};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::net::TcpListener;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Two-player sea battle over TCP", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum PlayerType {
    Human,
    Ai,
}

#[derive(clap::Args, Debug)]
#[cfg(feature = "std")]
struct PeerOptions {
    #[arg(long, help = "Seed for the fleet layout (e.g., --seed 12345); random if omitted")]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = PlayerType::Human)]
    player: PlayerType,
    #[arg(long, help = "Abort if a single send or receive takes longer (seconds)")]
    timeout: Option<u64>,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Wait for the opponent to connect; the opponent shoots first.
    Server {
        #[arg(long)]
        port: u16,
        #[command(flatten)]
        opts: PeerOptions,
    },
    /// Connect to a waiting opponent and shoot first.
    Client {
        #[arg(long, help = "Opponent address, e.g. 127.0.0.1:3333")]
        connect: SocketAddr,
        #[command(flatten)]
        opts: PeerOptions,
    },
    /// Watch two AI players fight on this machine.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Server { port, opts } => {
            let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)).await?;
            println!("Waiting for connection on port {}...", port);
            let (stream, addr) = listener.accept().await?;
            println!("Player connected from {}", addr);
            let mut transport = TcpTransport::new(stream);
            transport.set_timeout(opts.timeout.map(Duration::from_secs));
            play(Role::Server, &opts, Box::new(transport)).await?;
        }
        Commands::Client { connect, opts } => {
            println!("Connecting to {}...", connect);
            let mut transport = TcpTransport::connect(connect).await?;
            transport.set_timeout(opts.timeout.map(Duration::from_secs));
            println!("Connected successfully!");
            play(Role::Client, &opts, Box::new(transport)).await?;
        }
        Commands::Local { seed } => {
            println!("Starting local AI vs AI game...");
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng1 = seeded_rng(seed);
            let mut rng2 = seeded_rng(seed.map(|s| s.wrapping_add(1)));
            let engine1 = GameEngine::new(Board::random(&mut rng1));
            let engine2 = GameEngine::new(Board::random(&mut rng2));

            let (t1, t2) = InMemoryTransport::pair();
            let mut node1 = PlayerNode::new(Box::new(AiPlayer::new(rng1)), engine1, Box::new(t1))
                .with_view(std::io::stdout());
            let mut node2 = PlayerNode::new(Box::new(AiPlayer::new(rng2)), engine2, Box::new(t2));

            let (status, _) = tokio::try_join!(node1.run(Role::Client), node2.run(Role::Server))?;
            announce(status);
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
async fn play(role: Role, opts: &PeerOptions, transport: Box<dyn Transport>) -> anyhow::Result<()> {
    if let Some(s) = opts.seed {
        println!("Using fixed seed: {} (layout will be reproducible)", s);
    }
    let mut rng = seeded_rng(opts.seed);
    let engine = GameEngine::new(Board::random(&mut rng));
    let player: Box<dyn Player> = match opts.player {
        PlayerType::Human => Box::new(CliPlayer::new()),
        PlayerType::Ai => {
            println!("AI player selected.");
            Box::new(AiPlayer::new(rng))
        }
    };

    let mut node = PlayerNode::new(player, engine, transport).with_view(std::io::stdout());
    let status = node.run(role).await.map_err(|e| {
        log::error!("game aborted: {:#}", e);
        e
    })?;
    announce(status);
    Ok(())
}

#[cfg(feature = "std")]
fn announce(status: GameStatus) {
    match status {
        GameStatus::Won => println!("\n🎉 VICTORY! You have sunk the whole enemy fleet."),
        GameStatus::Lost => println!("\n💀 DEFEAT. All your ships have been destroyed."),
        GameStatus::InProgress => {}
    }
}
