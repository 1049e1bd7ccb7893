use std::io;

use chess_quiz::quiz::shell;

fn main() -> io::Result<()> {
    shell::run_stdio_loop()
}
