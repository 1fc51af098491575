//! Property tests for the coin table ranking and favorites toggle.

use coin_vault::{
    CoinRecord, FavoriteSet, SortDirection, SortKey, SortSpec, analysis::sort_value, rank_coins,
    toggle_favorite,
};
use proptest::prelude::*;
use std::collections::HashMap;

const NAMES: [&str; 6] = ["Bitcoin", "Ethereum", "Solana", "Dogecoin", "Cardano", "Tether"];

/// Coarse values so equal sort keys (ties) show up often.
fn arb_coins() -> impl Strategy<Value = Vec<CoinRecord>> {
    prop::collection::vec(
        (
            0usize..NAMES.len(),
            prop::option::of(1u32..6),
            0u8..5,
            -3i8..3,
            prop::option::of(0u8..4),
        ),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, rank, price, change, volume))| {
                let name = NAMES[name];
                let mut coin = CoinRecord::new(&format!("coin-{i}"), name, &name[..3], price as f64);
                coin.market_cap_rank = rank;
                coin.price_change_percentage_24h = change as f64;
                coin.total_volume = volume.map(|v| v as f64 * 1e9);
                coin
            })
            .collect()
    })
}

fn arb_sort() -> impl Strategy<Value = SortSpec> {
    (
        prop_oneof![
            Just(SortKey::Rank),
            Just(SortKey::Price),
            Just(SortKey::Change),
            Just(SortKey::Volume)
        ],
        prop_oneof![Just(SortDirection::Ascending), Just(SortDirection::Descending)],
    )
        .prop_map(|(key, direction)| SortSpec::new(key, direction))
}

fn arb_search() -> impl Strategy<Value = String> {
    prop_oneof![Just(""), Just("coin"), Just("ETH"), Just("o"), Just("xyz")].prop_map(String::from)
}

/// Favorites drawn from the coins themselves, by a bit mask.
fn favorites_of(coins: &[CoinRecord], mask: u32) -> FavoriteSet {
    FavoriteSet::from_snapshots(
        coins
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << (i % 32)) != 0)
            .map(|(_, c)| c.clone())
            .collect(),
    )
}

proptest! {
    #[test]
    fn prop_ranking_is_idempotent(
        coins in arb_coins(),
        sort in arb_sort(),
        search in arb_search(),
        favorites_only in any::<bool>(),
        mask in any::<u32>(),
    ) {
        let favorites = favorites_of(&coins, mask);
        let once = rank_coins(&coins, &search, sort, favorites_only, &favorites);
        let twice = rank_coins(&once, &search, sort, favorites_only, &favorites);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_sort_is_ordered_and_stable(coins in arb_coins(), sort in arb_sort()) {
        let input_pos: HashMap<&str, usize> =
            coins.iter().enumerate().map(|(i, c)| (c.id.as_str(), i)).collect();
        let ranked = rank_coins(&coins, "", sort, false, &FavoriteSet::new());
        prop_assert_eq!(ranked.len(), coins.len());

        for pair in ranked.windows(2) {
            let (a, b) = (sort_value(&pair[0], sort.key), sort_value(&pair[1], sort.key));
            match sort.direction {
                SortDirection::Ascending => prop_assert!(a <= b),
                SortDirection::Descending => prop_assert!(a >= b),
            }
            if a == b {
                prop_assert!(input_pos[pair[0].id.as_str()] < input_pos[pair[1].id.as_str()]);
            }
        }
    }

    #[test]
    fn prop_filters_only_drop_non_matching(
        coins in arb_coins(),
        search in arb_search(),
        mask in any::<u32>(),
    ) {
        let favorites = favorites_of(&coins, mask);
        let ranked = rank_coins(&coins, &search, SortSpec::default(), true, &favorites);
        for coin in &ranked {
            prop_assert!(favorites.contains(&coin.id));
            prop_assert!(coin.matches_search(&search));
        }
        let expected = coins
            .iter()
            .filter(|c| favorites.contains(&c.id) && c.matches_search(&search))
            .count();
        prop_assert_eq!(ranked.len(), expected);
    }

    #[test]
    fn prop_toggle_twice_restores_favorites(coins in arb_coins(), mask in any::<u32>(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!coins.is_empty());
        let favorites = favorites_of(&coins, mask);
        let coin = pick.get(&coins);
        let toggled = toggle_favorite(&favorites, coin);
        prop_assert_ne!(toggled.contains(&coin.id), favorites.contains(&coin.id));
        prop_assert_eq!(toggle_favorite(&toggled, coin), favorites);
    }
}

#[test]
fn rank_ascending_puts_lower_rank_first() {
    let mut a = CoinRecord::new("a", "Alpha", "A", 10.0);
    a.market_cap_rank = Some(2);
    let mut b = CoinRecord::new("b", "Beta", "B", 5.0);
    b.market_cap_rank = Some(1);

    let ranked = rank_coins(&[a, b], "", SortSpec::default(), false, &FavoriteSet::new());
    let ids: Vec<&str> = ranked.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
}

#[test]
fn favorites_only_without_favorites_is_empty() {
    let coins = [CoinRecord::new("btc", "Bitcoin", "BTC", 1.0)];
    assert!(rank_coins(&coins, "", SortSpec::default(), true, &FavoriteSet::new()).is_empty());
}

#[test]
fn unknown_sort_input_is_rejected() {
    assert!(SortKey::parse("marketcap").is_err());
    assert!(SortDirection::parse("sideways").is_err());
    assert_eq!(SortKey::parse("Volume"), Ok(SortKey::Volume));
}
