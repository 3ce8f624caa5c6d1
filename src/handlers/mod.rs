pub mod circuits;
pub mod race;
pub mod season;
pub mod standings;
