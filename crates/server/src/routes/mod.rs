pub mod ai_move;
pub mod health;
pub mod help;
