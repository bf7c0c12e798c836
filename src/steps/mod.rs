//! Individual stages of processing one input: read, print, confirm, write.

pub mod confirm;
pub mod input;
pub mod print;
pub mod write;

pub use confirm::{confirm, confirm_on_terminal};
pub use input::{get_input_text, read_input_file_list, read_stdin, STDIN_PATH};
pub use print::{diff, diff_size, print_result, DiffSize};
pub use write::write_result;
