/// Nature Sounds command-line front-end
pub mod config;
pub mod credentials;
pub mod player;
pub mod sink;
