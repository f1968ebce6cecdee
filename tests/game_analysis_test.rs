//! End-to-end tests: configure dice, play, read results and analyze them.

use dicegame::defs::{d4, d6};
use dicegame::print::PrintExt;
use dicegame::util::distinct_orderings;
use dicegame::{Analyzer, Count, Die, DieLike, ErrorKind, Form, Game};
use num::BigUint;
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A die that replays a fixed sequence, for scripted tables.
#[derive(Debug, Clone)]
struct Scripted {
    faces: Vec<i32>,
    outcomes: Vec<i32>,
}

impl DieLike for Scripted {
    type Face = i32;

    fn faces(&self) -> &[i32] {
        &self.faces
    }

    fn roll_rng<G>(&self, n: usize, _rng: &mut G) -> Vec<i32>
    where
        G: rand::RngCore,
    {
        self.outcomes.iter().copied().cycle().take(n).collect()
    }
}

fn scripted(outcomes: &[i32]) -> Scripted {
    Scripted {
        faces: (1..=6).collect(),
        outcomes: outcomes.to_vec(),
    }
}

#[test]
fn test_two_dice_four_rolls_scenario() {
    let mut game = Game::new(vec![scripted(&[1, 2, 3, 4]), scripted(&[1, 3, 2, 4])]).unwrap();
    game.play(4).unwrap();

    let wide = game.wide().unwrap();
    assert_eq!(wide.rows(), vec![vec![1, 1], vec![2, 3], vec![3, 2], vec![4, 4]]);

    let analyzer = Analyzer::new(&game).unwrap();
    assert_eq!(analyzer.jackpot_count(), 2);
    assert_eq!(
        analyzer.combination_counts().into_iter().collect::<Vec<_>>(),
        vec![(vec![1, 1], 1), (vec![2, 3], 2), (vec![4, 4], 1)]
    );
    assert_eq!(
        analyzer.permutation_counts().into_iter().collect::<Vec<_>>(),
        vec![
            (vec![1, 1], 1),
            (vec![2, 3], 2),
            (vec![3, 2], 2),
            (vec![4, 4], 1)
        ]
    );
    assert_eq!(analyzer.face_counts_per_roll(&2).unwrap(), vec![0, 1, 1, 0]);
    assert_eq!(
        analyzer.face_counts_per_roll(&7).unwrap_err().kind(),
        ErrorKind::Lookup
    );
}

#[test]
fn test_results_forms_by_name() {
    let mut game = Game::new(vec![d4(), d4(), d4()]).unwrap();
    assert_eq!(
        game.results("wide".parse().unwrap()).unwrap_err().kind(),
        ErrorKind::State
    );
    assert_eq!("long".parse::<Form>().unwrap_err().kind(), ErrorKind::Config);

    game.play_rng(7, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
    let narrow = game
        .results("narrow".parse().unwrap())
        .unwrap()
        .into_narrow()
        .unwrap();
    assert_eq!(narrow.len(), 21);
    for roll in 0..7 {
        for die in 0..3 {
            assert_eq!(
                narrow.iter().filter(|r| r.roll == roll && r.die == die).count(),
                1
            );
        }
    }
}

#[test]
fn test_returned_tables_are_copies() {
    let mut game = Game::new(vec![d6(), d6()]).unwrap();
    game.play_rng(4, &mut ChaCha8Rng::seed_from_u64(6)).unwrap();
    let analyzer = Analyzer::new(&game).unwrap();

    let mut copy = game.wide().unwrap().rows();
    copy[0][0] = 99;
    assert!(game.wide().unwrap().iter().flatten().all(|x| *x != 99));
    assert!(analyzer.table().iter().flatten().all(|x| *x != 99));
}

#[test]
fn test_weighted_coins() {
    let fair = Die::uniform(["H", "T"]).unwrap();
    let mut unfair = fair.clone();
    unfair.change_weight(&"H", 5).unwrap();

    let mut game = Game::new(vec![fair, unfair.clone(), unfair]).unwrap();
    game.play_rng(1_000, &mut ChaCha8Rng::seed_from_u64(2024)).unwrap();
    let analyzer = Analyzer::new(&game).unwrap();

    let combos = analyzer.combination_counts();
    assert_eq!(combos.values().sum::<Count>(), 1_000);
    assert!(combos.len() <= 4);
    assert!(analyzer.jackpot_count() > 0);

    let expected = analyzer
        .table()
        .iter()
        .map(distinct_orderings)
        .fold(BigUint::ZERO, |acc, x| acc + x);
    let total = analyzer.permutation_counts().values().sum::<Count>();
    assert_eq!(BigUint::from(total), expected);

    assert!(combos.table().contains("(H, H, H)") || combos.table().contains("(T, T, T)"));
}

#[test]
fn test_analysis_on_every_play_size() {
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let mut game = Game::new(vec![d6(), d6()]).unwrap();
    for rolls in [1, 2, 10, 100] {
        game.play_rng(rolls, &mut rng).unwrap();
        let wide = game.results(Form::Wide).unwrap().into_wide().unwrap();
        assert_eq!(wide.shape(), (rolls, 2));

        let analyzer = Analyzer::new(&game).unwrap();
        assert!(analyzer.jackpot_count() <= rolls);
        assert_eq!(analyzer.combination_counts().values().sum::<Count>(), rolls);
        assert_eq!(analyzer.face_counts().len(), rolls);
    }
}
