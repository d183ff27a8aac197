use rand::{rngs::SmallRng, SeedableRng};
use seabattle::ai::{calc_pdf, choose_target, sample_pdf, Pdf};
use seabattle::{Board, Cell, Move};

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

fn at(pdf: &Pdf, m: Move) -> f64 {
    let (r, c) = m.index();
    pdf[r][c]
}

#[test]
fn test_pdf_on_fresh_shadow_is_normalized() {
    let pdf = calc_pdf(&Board::shadow());
    let total: f64 = pdf.iter().flat_map(|row| row.iter()).sum();
    assert!((total - 1.0).abs() < 1e-9);
    // the centre is covered by more placements than a corner
    assert!(at(&pdf, mv("E5")) > at(&pdf, mv("A1")));
    assert!(Move::all().all(|m| at(&pdf, m) > 0.0));
}

#[test]
fn test_pdf_chases_a_hit() {
    let mut shadow = Board::shadow();
    shadow.mark_hit(mv("E5"));
    let pdf = calc_pdf(&shadow);

    assert_eq!(at(&pdf, mv("E5")), 0.0);
    for s in ["D4", "F4", "D6", "F6"] {
        assert_eq!(at(&pdf, mv(s)), 0.0, "{}", s);
    }

    let best = Move::all()
        .max_by(|&a, &b| at(&pdf, a).total_cmp(&at(&pdf, b)))
        .unwrap();
    assert!(
        ["E4", "E6", "D5", "F5"].contains(&best.to_string().as_str()),
        "best target {}",
        best
    );
}

#[test]
fn test_sample_empty_pdf_is_none() {
    let mut rng = SmallRng::seed_from_u64(0);
    let pdf = [[0.0; 9]; 9];
    assert_eq!(sample_pdf(&pdf, 0.5, &mut rng), None);
}

#[test]
fn test_sample_single_cell_pdf() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut pdf = [[0.0; 9]; 9];
    pdf[3][7] = 1.0;
    for _ in 0..20 {
        assert_eq!(sample_pdf(&pdf, 0.5, &mut rng), Move::new(3, 7));
    }
}

#[test]
fn test_no_target_left_on_explored_shadow() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut shadow = Board::shadow();
    for m in Move::all() {
        shadow.mark_miss(m);
    }
    assert_eq!(choose_target(&shadow, &mut rng), None);
}

#[test]
fn test_ai_never_repeats_and_finishes() {
    for seed in 0..5u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut own = Board::from_seed(seed + 1000);
        let mut shadow = Board::shadow();

        let mut shots = 0;
        while !own.is_loser() {
            let target = choose_target(&shadow, &mut rng).expect("ran out of targets");
            assert_eq!(shadow.cell(target), Cell::Unknown, "seed {} repeated {}", seed, target);
            let result = own.shoot(target);
            shadow.apply(target, result);
            shots += 1;
            assert!(shots <= 81);
        }
        assert!(shadow.is_loser());
    }
}
