mod franchise_table;
mod user_table;

pub use franchise_table::FranchiseTable;
pub use user_table::UserTable;
