/// Errors returned by board operations.
///
/// None of these are fatal: the board is left untouched and the caller
/// decides whether to re-prompt, retry or give up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid coordinate ({x}, {y}) on a {dimension}x{dimension} board")]
    InvalidCoordinate { x: i32, y: i32, dimension: usize },

    #[error("invalid move: cell ({x}, {y}) is already occupied")]
    InvalidMove { x: i32, y: i32 },

    #[error("invalid dimension {0}: must be between 2 and 5")]
    InvalidDimension(i32),

    #[error("corrupt board encoding {0:#x}")]
    CorruptEncoding(u64),
}
