// Application layer: turns parsed commands into snippet calls.

pub mod commands;
