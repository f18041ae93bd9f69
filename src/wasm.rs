use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::types::CODE_NONE;

/// JS-facing handle around the rules engine. One instance per canvas.
#[wasm_bindgen]
pub struct WasmGame {
    inner: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { inner: Game::new() }
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Feeds one click to the engine and returns the serialized
    /// `MoveOutcome`. Out-of-range coordinates from a malformed event
    /// come back as `Rejected`, never a panic.
    pub fn apply_move(&mut self, row: u8, col: u8) -> Result<JsValue, JsValue> {
        let outcome = self.inner.apply_move_if_valid(row, col);
        serde_wasm_bindgen::to_value(&outcome).map_err(JsValue::from)
    }

    /// Full snapshot for the renderer: board codes, counts, turn and
    /// pass/game-over flags.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.to_game_view()).map_err(JsValue::from)
    }

    /// Legal target squares for the color to move.
    pub fn legal_moves(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.legal_moves()).map_err(JsValue::from)
    }

    /// Cell code at `(row, col)`: 0=empty, 1=black, 2=white.
    /// Out-of-range reads as empty.
    pub fn cell_at(&self, row: u8, col: u8) -> u8 {
        self.inner
            .cell(row, col)
            .map(|color| color.code())
            .unwrap_or(CODE_NONE)
    }

    pub fn current_player(&self) -> u8 {
        self.inner.turn().code()
    }

    pub fn is_game_over(&self) -> bool {
        self.inner.result().is_some()
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
