// Domain types and value objects
mod coin;
mod price_point;
mod sort_spec;

pub use coin::{CoinRecord, UNRANKED};
pub use price_point::{PricePoint, prices_of};
pub use sort_spec::{SortDirection, SortKey, SortSpec};
