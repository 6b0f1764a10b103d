pub mod records;
pub mod theme;
pub mod utils;

pub use records::{print_list, print_overview, Tabular};
pub use utils::{format_date, format_relative_time, mask_secret, parse_timestamp, truncate};
