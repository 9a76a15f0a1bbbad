/// Whether a mode handled the invocation or left it to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliModeResult {
    Finish,
    NothingToDo,
}
