pub mod errors;
pub mod db;
pub mod category;
pub mod game;
pub mod clue;
pub mod game_definition;
pub mod game_definition_clue;

#[cfg(test)]
mod tests;
