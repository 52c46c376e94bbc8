use super::*;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn tier(level: u8) -> Tier {
    Tier::new(level).unwrap()
}

#[test]
fn test_tier_range() {
    assert_eq!(Tier::new(0), Err(LevelError::OutOfRange(0)));
    assert_eq!(Tier::new(11), Err(LevelError::OutOfRange(11)));
    assert_eq!(Tier::all().count(), 10);
    assert_eq!("7".parse::<Tier>(), Ok(tier(7)));
    assert!(matches!("x".parse::<Tier>(), Err(LevelError::NotANumber(_))));
}

#[test]
fn test_depth_by_tier() {
    let depths: Vec<u8> = Tier::all().map(Tier::depth).collect();
    assert_eq!(depths, vec![1, 1, 1, 2, 2, 2, 2, 3, 3, 3]);
}

#[test]
fn test_mistake_probability_formula() {
    for t in Tier::all() {
        let expected = f64::from(10 - t.get()) / 15.0;
        assert_eq!(t.mistake_probability(), expected);
    }
    assert_eq!(Tier::MAX.mistake_probability(), 0.0);
    assert_eq!(Tier::MIN.mistake_probability(), 0.6);
}

#[test]
fn test_profiles_line_up_with_tiers() {
    for t in Tier::all() {
        assert_eq!(t.profile().level, t.get());
        assert_eq!(t.to_string(), format!("Vision {}", t.get()));
    }
    assert_eq!(Tier::MAX.profile().description, "Champion – Near-perfect");
}

#[test]
fn test_tier_serde() {
    let t: Tier = serde_json::from_str("4").unwrap();
    assert_eq!(t, tier(4));
    assert_eq!(serde_json::to_string(&t).unwrap(), "4");
    assert!(serde_json::from_str::<Tier>("12").is_err());
}

#[test]
fn test_top_tier_never_plays_random() {
    // Even a draw of exactly 0.0 is not below a zero probability
    assert_eq!(
        plan(Tier::MAX, &mut StepRng::new(0, 0)),
        Plan::Search { depth: 3 }
    );
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..1_000 {
        assert_eq!(plan(Tier::MAX, &mut rng), Plan::Search { depth: 3 });
    }
}

#[test]
fn test_low_draws_make_every_other_tier_random() {
    assert_eq!(
        plan(Tier::MIN, &mut StepRng::new(0, 0)),
        Plan::Random(RandomReason::Beginner)
    );
    for t in (2..=9).map(tier) {
        assert_eq!(
            plan(t, &mut StepRng::new(0, 0)),
            Plan::Random(RandomReason::Mistake)
        );
    }
}

#[test]
fn test_high_draws_always_search() {
    for t in Tier::all() {
        assert_eq!(
            plan(t, &mut StepRng::new(u64::MAX, 0)),
            Plan::Search { depth: t.depth() }
        );
    }
}

#[test]
fn test_beginner_mostly_random() {
    let mut rng = StdRng::seed_from_u64(2024);
    let samples = 10_000;
    let random = (0..samples)
        .filter(|_| matches!(plan(Tier::MIN, &mut rng), Plan::Random(_)))
        .count();
    // 0.8 + 0.2 * 0.6 = 0.92 expected
    let rate = random as f64 / samples as f64;
    assert!(rate >= 0.8, "rate {rate}");
    assert!(rate < 0.95, "rate {rate}");
}

#[test]
fn test_mistake_rate_tracks_probability() {
    let mut rng = StdRng::seed_from_u64(7);
    let samples = 10_000;
    let t = tier(4);
    let random = (0..samples)
        .filter(|_| plan(t, &mut rng) == Plan::Random(RandomReason::Mistake))
        .count();
    let rate = random as f64 / samples as f64;
    assert!((rate - 0.4).abs() < 0.03, "rate {rate}");
}
