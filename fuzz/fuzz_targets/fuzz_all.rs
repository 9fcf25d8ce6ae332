#![no_main]
use libfuzzer_sys::fuzz_target;
use sheetgrid::{A1Range, CellRef};

fuzz_target!(|data: &[u8]| {
    let text = match std::str::from_utf8(data) {
        Ok(text) => text,
        Err(_) => return,
    };
    // malformed input must come back as an error, never a panic
    if let Ok(cell) = text.parse::<CellRef>() {
        // accepted references render and re-parse to the same position
        let rendered = cell.to_string();
        let reparsed: CellRef = rendered.parse().expect("rendered cell must parse");
        assert_eq!(cell, reparsed);
    }
    if let Ok(range) = text.parse::<A1Range>() {
        assert!(range.start.row <= range.end.row);
        assert!(range.start.col <= range.end.col);
        let _ = range.get_size();
        let rendered = range.to_string();
        let reparsed: A1Range = rendered.parse().expect("rendered range must parse");
        assert_eq!((range.start, range.end), (reparsed.start, reparsed.end));
    }
});
