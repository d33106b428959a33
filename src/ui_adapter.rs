//! Converts engine projections into the JSON payload shape expected by the
//! web client (camelCase keys, one entry per blank widget).

use serde_json::{json, Value};

use crate::puzzle_engine::models::Phase;
use crate::puzzle_engine::render::{BlankView, RenderModel};
use crate::puzzle_engine::PuzzleEngine;

/// Build one blank-widget entry. `isActive` marks the next slot to fill so
/// the client can highlight it.
fn blank_entry(view: &BlankView) -> Value {
    json!({
        "id": view.id,
        "text": view.text,
        "isFilled": view.filled,
        "isActive": view.active,
    })
}

/// Build the full frame payload for the client from a render model.
pub fn frame_payload(model: &RenderModel) -> Value {
    let blanks: Vec<Value> = model.blanks.iter().map(blank_entry).collect();
    json!({
        "code": model.code,
        "previousCode": model.previous_code,
        "hint": model.hint,
        "blanks": blanks,
        "wordBank": model.word_bank,
    })
}

/// Full client state: the frame payload plus drill progress fields.
pub fn session_payload(engine: &PuzzleEngine) -> Value {
    let model = engine.render_model();
    let blanks: Vec<Value> = model.blanks.iter().map(blank_entry).collect();
    json!({
        "code": model.code,
        "previousCode": model.previous_code,
        "hint": model.hint,
        "blanks": blanks,
        "wordBank": model.word_bank,
        "lineIndex": engine.current_line_index(),
        "finished": engine.phase() == Phase::Finished,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle_engine::PuzzleCatalog;

    #[test]
    fn frame_payload_matches_client_shape() {
        let engine = PuzzleEngine::new(PuzzleCatalog::has_duplicate_drill(), Some(1));
        let payload = session_payload(&engine);

        assert_eq!(payload["lineIndex"], 0);
        assert_eq!(payload["finished"], false);
        assert_eq!(payload["previousCode"], "");
        assert!(payload["code"].as_str().unwrap().contains("___"));

        let blanks = payload["blanks"].as_array().unwrap();
        assert_eq!(blanks.len(), 2);
        assert_eq!(blanks[0]["id"], 0);
        assert_eq!(blanks[0]["isActive"], true);
        assert_eq!(blanks[1]["isActive"], false);

        let bank = payload["wordBank"].as_array().unwrap();
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn filled_blank_shows_its_word() {
        let mut engine = PuzzleEngine::new(PuzzleCatalog::has_duplicate_drill(), Some(1));
        engine.select_word("seen");
        let payload = frame_payload(&engine.render_model());
        let blanks = payload["blanks"].as_array().unwrap();
        assert_eq!(blanks[0]["text"], "seen");
        assert_eq!(blanks[0]["isFilled"], true);
        assert_eq!(blanks[1]["isActive"], true);
    }
}
