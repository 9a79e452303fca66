pub mod app;
mod entry_states;
