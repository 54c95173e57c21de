//! Command implementations.

pub mod init_config;
pub mod list;
pub mod parse_year;
pub mod report;
pub mod show;

pub use self::init_config::execute_init_config;
pub use self::list::execute_list;
pub use self::parse_year::execute_parse_year;
pub use self::report::execute_report;
pub use self::show::execute_show;
