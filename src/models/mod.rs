pub mod envelope;
pub mod player;
