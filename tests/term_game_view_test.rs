use blockfall::core::{pieces, GameSnapshot, GameState};
use blockfall::term::{color_rgb, AnchorY, FrameBuffer, GameView, Viewport};
use blockfall::types::{Color, GameStatus};

fn started_with_t() -> GameState {
    let mut game = GameState::new(1);
    game.add_block_factory(pieces::t_piece);
    game.start_game();
    game
}

fn text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Screen position of a board cell in a 22x22 viewport (frame at the origin)
fn cell_xy(row: u16, column: u16) -> (u16, u16) {
    (1 + column * 2, 1 + row - 2)
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // visible board = 10*2 by 20*1 => 20x20, plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.board[21][0] = Some(Color::Cyan);
    snap.status = GameStatus::Running;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let (x, y) = cell_xy(21, 0);
    assert_eq!((x, y), (1, 20));
    for dx in 0..2 {
        let glyph = fb.get(x + dx, y).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, color_rgb(Color::Cyan));
    }
    // Empty neighbours keep the grid dot.
    assert_eq!(fb.get(x + 2, y).unwrap().ch, '·');
}

#[test]
fn term_view_skips_hidden_rows() {
    let mut snap = GameSnapshot::default();
    snap.status = GameStatus::Running;
    for row in snap.board.iter_mut().take(2) {
        row.fill(Some(Color::Red));
    }
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(!text(&fb).contains('█'));
}

#[test]
fn term_view_draws_ghost_and_active_piece() {
    let mut game = started_with_t();
    for _ in 0..5 {
        game.apply_gravity();
    }
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));

    // Active T at row 5: nub at (5, 4), bar on row 6.
    let (x, y) = cell_xy(5, 4);
    let active = fb.get(x, y).unwrap();
    assert_eq!(active.ch, '█');
    assert_eq!(active.style.fg, color_rgb(Color::Purple));
    let (x, y) = cell_xy(6, 3);
    assert_eq!(fb.get(x, y).unwrap().ch, '█');

    // Ghost lands on the floor.
    let (x, y) = cell_xy(21, 5);
    assert_eq!(fb.get(x, y).unwrap().ch, '░');
    let (x, y) = cell_xy(20, 4);
    assert_eq!(fb.get(x + 1, y).unwrap().ch, '░');
}

#[test]
fn term_view_side_panel_shows_score_pieces_and_next() {
    let mut game = started_with_t();
    game.hard_drop();
    let snap = game.snapshot();

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(60, 24));

    let panel_x = (60 - 22) / 2 + 22 + 2;
    let header: String = fb.row_text(0).chars().skip(panel_x as usize).collect();
    assert_eq!(header.trim_end(), "SCORE");
    assert_eq!(fb.get(panel_x, 1).unwrap().ch, '0');
    assert!(fb.row_text(3).contains("PIECES"));
    assert_eq!(fb.get(panel_x, 4).unwrap().ch, '1');
    assert!(fb.row_text(6).contains("NEXT"));

    // Next T preview: nub above the middle of a three-wide bar.
    let nub = fb.get(panel_x + 2, 7).unwrap();
    assert_eq!(nub.ch, '█');
    assert_eq!(nub.style.fg, color_rgb(Color::Purple));
    assert_eq!(fb.get(panel_x, 7).unwrap().ch, ' ');
    for dx in 0..6 {
        assert_eq!(fb.get(panel_x + dx, 8).unwrap().ch, '█');
    }
}

#[test]
fn term_view_game_over_overlay() {
    let mut game = GameState::new(3);
    game.add_block_factory(pieces::o_piece);
    game.start_game();
    while game.is_running() {
        game.hard_drop();
    }
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(60, 24));
    let screen = text(&fb);
    assert!(screen.contains("GAME OVER"));
    assert!(screen.contains("press N"));
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let game = started_with_t();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(1, 1);
    view.render_into(&game.snapshot(), Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
    assert_eq!(fb, view.render(&game.snapshot(), Viewport::new(40, 24)));
}
