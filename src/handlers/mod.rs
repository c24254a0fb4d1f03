pub mod danmaku;

pub use danmaku::execute_command_danmaku;
