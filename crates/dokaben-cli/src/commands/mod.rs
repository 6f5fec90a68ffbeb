pub mod config_ops;
pub mod flick_ops;
pub mod replay_ops;
