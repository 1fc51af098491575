use std::cmp::Ordering;

use crate::{
    domain::{CoinRecord, SortDirection, SortKey, SortSpec},
    models::FavoriteSet,
};

/// Visible coins for the table: sorted by `sort`, then filtered by search term and favorites.
///
/// The sort is stable, so coins with equal keys keep their input order in either direction,
/// and filtering after sorting keeps the sorted order of the survivors.
pub fn rank_coins(
    coins: &[CoinRecord],
    search: &str,
    sort: SortSpec,
    favorites_only: bool,
    favorites: &FavoriteSet,
) -> Vec<CoinRecord> {
    let mut sorted: Vec<&CoinRecord> = coins.iter().collect();
    sorted.sort_by(|a, b| compare(a, b, sort));

    sorted
        .into_iter()
        .filter(|coin| coin.matches_search(search))
        .filter(|coin| !favorites_only || favorites.contains(&coin.id))
        .cloned()
        .collect()
}

/// Star or unstar `coin`. Removes by id when present, otherwise appends a full snapshot.
pub fn toggle_favorite(favorites: &FavoriteSet, coin: &CoinRecord) -> FavoriteSet {
    let mut snapshots: Vec<CoinRecord> = favorites.iter().cloned().collect();
    if favorites.contains(&coin.id) {
        snapshots.retain(|f| f.id != coin.id);
    } else {
        snapshots.push(coin.clone());
    }
    FavoriteSet::from_snapshots(snapshots)
}

/// Numeric value a coin sorts by. Missing rank sorts after every ranked coin; missing volume counts as zero.
pub fn sort_value(coin: &CoinRecord, key: SortKey) -> f64 {
    match key {
        SortKey::Rank => coin.rank_or_unranked() as f64,
        SortKey::Price => coin.current_price,
        SortKey::Change => coin.price_change_percentage_24h,
        SortKey::Volume => coin.volume_or_zero(),
    }
}

fn compare(a: &CoinRecord, b: &CoinRecord, sort: SortSpec) -> Ordering {
    let (a, b) = (sort_value(a, sort.key), sort_value(b, sort.key));
    let ordering = match sort.direction {
        SortDirection::Ascending => a.partial_cmp(&b),
        SortDirection::Descending => b.partial_cmp(&a),
    };
    ordering.unwrap_or(Ordering::Equal)
}
