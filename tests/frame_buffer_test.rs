use tui_snake::core::assets::{DECORATIONS, FLOOR};
use tui_snake::core::{cell_size, BoardDims, MapGenerator, RandomEngine};
use tui_snake::term::FrameBuffer;

#[test]
fn capacity_matches_formatted_length() {
    let s = cell_size();
    for (columns, rows) in [(1, 1), (4, 3), (32, 8), (75, 20)] {
        let dims = BoardDims::new(columns, rows).unwrap();
        let mut fb = FrameBuffer::allocate(dims, s).unwrap();
        fb.format(&vec![FLOOR; dims.board_width() * dims.board_height()]);

        let expected = (columns * s + 4) * (rows * s + 2);
        assert_eq!(FrameBuffer::capacity(dims, s), Some(expected));
        assert_eq!(fb.len(), expected, "{columns}x{rows}");
    }
}

#[test]
fn every_row_is_crlf_terminated() {
    let dims = BoardDims::new(5, 2).unwrap();
    let floor = MapGenerator::default().decorate_floor(dims, &mut RandomEngine::with_seed(11));
    let mut fb = FrameBuffer::allocate(dims, cell_size()).unwrap();
    fb.format(&floor);

    let line_len = dims.board_width() + 4;
    let lines: Vec<&[u8]> = fb.as_bytes().chunks(line_len).collect();
    assert_eq!(lines.len(), dims.board_height() + 2);
    for line in &lines {
        assert!(line.ends_with(b"\r\n"));
    }
    assert_eq!(lines[0][0], b'/');
    assert_eq!(lines[lines.len() - 1][0], b'\\');
}

#[test]
fn interior_glyphs_come_from_the_floor() {
    let dims = BoardDims::new(30, 10).unwrap();
    let floor = MapGenerator::new(0, 50).decorate_floor(dims, &mut RandomEngine::with_seed(5));
    assert!(floor.iter().all(|g| *g == FLOOR || DECORATIONS.contains(g)));
    assert!(floor.iter().any(|g| *g != FLOOR));

    let mut fb = FrameBuffer::allocate(dims, cell_size()).unwrap();
    fb.format(&floor);
    for y in 0..dims.board_height() {
        for x in 0..dims.board_width() {
            assert_eq!(fb.interior_glyph(x, y), floor[y * dims.board_width() + x]);
        }
    }
}
