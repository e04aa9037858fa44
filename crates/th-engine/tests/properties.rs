//! Randomized properties of town events over arbitrary seeds.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use th_core::{Hunter, Item, Shop, Terrain};
use th_engine::{Dig, GameConfig, Preset, Session, SessionState, Toughness, Town};

fn toughness_strategy() -> impl Strategy<Value = Toughness> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(tough, easy, test)| Toughness {
        tough,
        easy,
        test,
    })
}

fn terrain_strategy() -> impl Strategy<Value = Terrain> {
    prop::sample::select(Terrain::all().to_vec())
}

proptest! {
    #[test]
    fn sword_never_loses_gold(
        seed in any::<u64>(),
        gold in 0u32..50,
        toughness in toughness_strategy(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut town = Town::with_terrain(Shop::new(0.5), Terrain::Plains, toughness);
        town.arrive(Hunter::new("ada", gold).with_kit([Item::Sword]));
        for _ in 0..20 {
            town.look_for_trouble(&mut rng).unwrap();
        }
        prop_assert!(town.hunter().unwrap().gold() >= gold);
        prop_assert!(!town.lost());
    }

    #[test]
    fn blocked_crossing_leaves_kit_alone(
        seed in any::<u64>(),
        terrain in terrain_strategy(),
        toughness in toughness_strategy(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let needed = terrain.needed_item();
        let kit: Vec<Item> = Item::all().iter().copied().filter(|i| *i != needed).collect();
        let mut town = Town::with_terrain(Shop::new(0.5), terrain, toughness);
        town.arrive(Hunter::new("ada", 20).with_kit(kit.clone()));

        let crossing = town.leave_town(&mut rng).unwrap();
        prop_assert!(!crossing.crossed());
        prop_assert_eq!(town.hunter().unwrap().kit(), kit.as_slice());
    }

    #[test]
    fn crossing_loses_at_most_the_needed_item(
        seed in any::<u64>(),
        terrain in terrain_strategy(),
        toughness in toughness_strategy(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut town = Town::with_terrain(Shop::new(0.5), terrain, toughness);
        town.arrive(Hunter::new("ada", 20).with_kit(Item::all().iter().copied()));
        let before = town.hunter().unwrap().kit().len();

        let crossing = town.leave_town(&mut rng).unwrap();
        prop_assert!(crossing.crossed());
        let hunter = town.hunter().unwrap();
        let after = hunter.kit().len();
        prop_assert!(after == before || after + 1 == before);
        if toughness.easy {
            prop_assert_eq!(after, before);
        }
        for item in Item::all() {
            if *item != terrain.needed_item() {
                prop_assert!(hunter.has_item(*item));
            }
        }
    }

    #[test]
    fn second_dig_is_always_a_no_op(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut town = Town::with_terrain(Shop::new(0.5), Terrain::Marsh, Toughness::default());
        town.arrive(Hunter::new("ada", 20).with_kit([Item::Shovel]));
        town.dig_for_gold(&mut rng).unwrap();
        let gold = town.hunter().unwrap().gold();
        for _ in 0..5 {
            prop_assert_eq!(town.dig_for_gold(&mut rng).unwrap(), Dig::AlreadyDug);
        }
        prop_assert_eq!(town.hunter().unwrap().gold(), gold);
    }

    #[test]
    fn finished_sessions_ignore_input(seed in any::<u64>(), token in "[bselmhdx]") {
        let rng = StdRng::seed_from_u64(seed);
        let mut session = Session::start(&GameConfig::default(), rng);
        session.dispatch("x").unwrap();
        prop_assert_eq!(session.state(), SessionState::Quit);
        let gold = session.hunter().unwrap().gold();
        prop_assert!(session.dispatch(&token).is_err());
        prop_assert_eq!(session.hunter().unwrap().gold(), gold);
    }
}

#[test]
fn forced_lose_games_end_in_a_loss() {
    // Forced-lose towns always brawl and the hunter never wins.
    for seed in 0..50 {
        let rng = StdRng::seed_from_u64(seed);
        let config = GameConfig::default().with_preset(Preset::ForcedLose);
        let mut session = Session::start(&config, rng);
        let mut turns = 0;
        while !session.is_over() {
            session.dispatch("l").unwrap();
            turns += 1;
            assert!(turns <= 10, "seed {seed} survived too long");
        }
        assert_eq!(session.state(), SessionState::Lost);
        assert_eq!(session.hunter().unwrap().gold(), 0);
    }
}
