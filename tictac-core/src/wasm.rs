//! WASM bindings for tictac-core
//!
//! Provides a JavaScript-friendly API over a refereed variable-size board.

use wasm_bindgen::prelude::*;

use crate::{Board, Outcome, PackedBoard, Phase, Player, Session};

/// WASM-friendly wrapper around a `Session<Board>`
#[wasm_bindgen]
pub struct WasmBoard {
    inner: Session<Board>,
}

#[wasm_bindgen]
impl WasmBoard {
    /// Create a new empty `dimension` x `dimension` board
    #[wasm_bindgen(constructor)]
    pub fn new(dimension: i32) -> Result<WasmBoard, JsError> {
        let board = Board::new(dimension)?;
        Ok(WasmBoard { inner: Session::new(board) })
    }

    /// Create board from u64 encoding
    #[wasm_bindgen(js_name = fromBits)]
    pub fn from_bits(bits: u64) -> Result<WasmBoard, JsError> {
        let board = Board::from_bits(bits)?;
        Ok(WasmBoard { inner: Session::new(board) })
    }

    /// Get u64 encoding of board
    #[wasm_bindgen(js_name = toBits)]
    pub fn to_bits(&self) -> u64 {
        self.inner.board().to_bits()
    }

    pub fn dimension(&self) -> usize {
        self.inner.board().dimension()
    }

    /// Mark at (x, y): 0 (empty), 1 (A) or 2 (B)
    pub fn get(&self, x: i32, y: i32) -> Result<u8, JsError> {
        Ok(self.inner.board().get(x, y)? as u8)
    }

    /// Current player (1 or 2)
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        self.inner.board().current_player() as u8
    }

    /// Place the current player's mark. Returns true if the move was accepted.
    pub fn play(&mut self, x: i32, y: i32) -> bool {
        self.inner.play(x, y).is_ok()
    }

    /// Check for winner. Returns 0 (none), 1 (A), or 2 (B)
    pub fn winner(&self) -> u8 {
        self.inner.board().winner() as u8
    }

    /// Get winning line as flat array [x, y, x, y, ...]
    /// Returns empty array if no winner
    #[wasm_bindgen(js_name = winningLine)]
    pub fn winning_line(&self) -> Vec<u8> {
        let board = self.inner.board();
        match board.winning_line() {
            Some((line, _)) => line
                .cells(board.dimension())
                .flat_map(|(x, y)| [x as u8, y as u8])
                .collect(),
            None => vec![],
        }
    }

    /// Check if game is over (winner or full board)
    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        matches!(self.inner.phase(), Phase::Finished(_))
    }

    /// Get game result: "ongoing", "player_a_wins", "player_b_wins", or "draw"
    pub fn result(&self) -> String {
        match self.inner.outcome() {
            None => "ongoing",
            Some(Outcome::Winner(Player::A)) => "player_a_wins",
            Some(Outcome::Winner(Player::B)) => "player_b_wins",
            Some(Outcome::Draw) => "draw",
        }
        .to_string()
    }

    /// Text grid, same as the terminal front end prints
    pub fn render(&self) -> String {
        self.inner.board().render()
    }

    /// Empty cells as a JSON array of [x, y] pairs
    #[wasm_bindgen(js_name = emptyCells)]
    pub fn empty_cells(&self) -> Result<JsValue, JsError> {
        let cells = self.inner.board().empty_cells();
        Ok(serde_wasm_bindgen::to_value(&cells)?)
    }

    /// Clone the board
    #[wasm_bindgen(js_name = clone)]
    pub fn clone_board(&self) -> WasmBoard {
        WasmBoard { inner: self.inner }
    }
}

impl Default for WasmBoard {
    fn default() -> Self {
        WasmBoard { inner: Session::new(Board::default()) }
    }
}

