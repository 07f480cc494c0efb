pub mod background;
pub mod cli;
pub mod controller;
pub mod events;
pub mod io;
pub mod page;
pub mod state;
pub mod terminal;

#[cfg(test)]
mod tests;
