pub mod export;
pub mod facilities;
pub mod finder;
pub mod help;
pub mod map;
