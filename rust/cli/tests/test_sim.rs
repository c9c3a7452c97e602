use tilemerge_cli::{run, simulate_game};

fn run_cli(args: &[&str]) -> (i32, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args, &mut out, &mut err);
    (code, String::from_utf8_lossy(&out).into_owned())
}

#[test]
fn sim_prints_each_game_and_summary() {
    let (code, out) = run_cli(&[
        "tilemerge",
        "sim",
        "--games",
        "2",
        "--seed",
        "10",
        "--max-moves",
        "5000",
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("Game 1: seed=10"));
    assert!(out.contains("Game 2: seed=11"));
    assert!(out.contains("Summary: "));
}

#[test]
fn sim_output_matches_single_game_simulation() {
    let (_, out) = run_cli(&[
        "tilemerge",
        "sim",
        "--games",
        "1",
        "--seed",
        "33",
        "--max-moves",
        "400",
    ]);
    let r = simulate_game(33, 400);
    assert!(out.contains(&format!(
        "score={} highest={}",
        r.score, r.highest_tile
    )));
}

#[test]
fn sim_rejects_zero_max_moves_flag() {
    let (code, out) = run_cli(&["tilemerge", "sim", "--max-moves", "0"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
}

#[test]
fn rng_prints_sample_for_seed() {
    let (code, first) = run_cli(&["tilemerge", "rng", "--seed", "2", "--spawns", "3"]);
    assert_eq!(code, 0);
    assert!(first.starts_with("Spawn sample (seed=2): ["));
    let (_, second) = run_cli(&["tilemerge", "rng", "--seed", "2", "--spawns", "3"]);
    assert_eq!(first, second);
}
