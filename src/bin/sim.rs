use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{AiPlayer, Board, GameEngine, GameStatus, InMemoryTransport, PlayerNode, Role};
use serde::Serialize;

#[derive(Serialize)]
struct PlayerReport {
    status: GameStatus,
    shots: usize,
}

#[derive(Serialize)]
struct SimReport {
    player1: PlayerReport,
    player2: PlayerReport,
    winner: Option<&'static str>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let e1 = GameEngine::new(Board::random(&mut rng1));
    let e2 = GameEngine::new(Board::random(&mut rng2));

    let (t1, t2) = InMemoryTransport::pair();

    // player1 connects, so it fires first
    let f1 = async move {
        let mut node = PlayerNode::new(Box::new(AiPlayer::new(rng1)), e1, Box::new(t1));
        let status = node.run(Role::Client).await?;
        Ok::<PlayerReport, anyhow::Error>(PlayerReport {
            status,
            shots: node.shots_fired(),
        })
    };

    let f2 = async move {
        let mut node = PlayerNode::new(Box::new(AiPlayer::new(rng2)), e2, Box::new(t2));
        let status = node.run(Role::Server).await?;
        Ok::<PlayerReport, anyhow::Error>(PlayerReport {
            status,
            shots: node.shots_fired(),
        })
    };

    let (player1, player2) = tokio::try_join!(f1, f2)?;

    let winner = match (player1.status, player2.status) {
        (GameStatus::Won, GameStatus::Lost) => Some("player1"),
        (GameStatus::Lost, GameStatus::Won) => Some("player2"),
        _ => None,
    };

    let report = SimReport {
        player1,
        player2,
        winner,
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
