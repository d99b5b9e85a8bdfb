pub mod commit_list;
pub mod debug_console;
