//! Pieces module - the seven standard tetrominoes
//!
//! Shapes follow the Super Rotation System spawn orientations and the
//! clockwise sequence North, East, South, West. Reference: https://tetris.wiki/SRS
//!
//! Each table entry is a `(column, row)` offset inside the piece's square grid.
//! I and O live in a 4x4 grid, the rest in 3x3.

use crate::piece::Piece;
use crate::rotation::{MinoOffset, Rotation};
use crate::types::{PieceKind, MINOS_PER_PIECE, ROTATIONS_PER_PIECE};

/// Constructor for a freshly spawned piece
///
/// The game keeps a list of these and picks one uniformly at random for every
/// new piece. Any `fn() -> Piece` works, so tests can register a single
/// deterministic shape.
pub type BlockFactory = fn() -> Piece;

/// Raw rotation table: 4 orientations of 4 offsets each
pub type ShapeTable = [[MinoOffset; MINOS_PER_PIECE]; ROTATIONS_PER_PIECE];

const I_SHAPES: ShapeTable = [
    // - - - -
    // X X X X
    // - - - -
    // - - - -
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
    [(0, 2), (1, 2), (2, 2), (3, 2)],
    [(1, 0), (1, 1), (1, 2), (1, 3)],
];

const J_SHAPES: ShapeTable = [
    // X - -
    // X X X
    // - - -
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (1, 2), (0, 2)],
];

const L_SHAPES: ShapeTable = [
    // - - X
    // X X X
    // - - -
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

// Same shape in every orientation.
const O_SHAPE: [MinoOffset; MINOS_PER_PIECE] = [(1, 0), (2, 0), (1, 1), (2, 1)];
const O_SHAPES: ShapeTable = [O_SHAPE; ROTATIONS_PER_PIECE];

const S_SHAPES: ShapeTable = [
    // - X X
    // X X -
    // - - -
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
    [(1, 1), (2, 1), (0, 2), (1, 2)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const T_SHAPES: ShapeTable = [
    // - X -
    // X X X
    // - - -
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_SHAPES: ShapeTable = [
    // X X -
    // - X X
    // - - -
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

/// Rotation table for a piece kind
pub fn shape_table(kind: PieceKind) -> &'static ShapeTable {
    match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::Z => &Z_SHAPES,
    }
}

/// Build a piece of the given kind at the spawn position
pub fn create(kind: PieceKind) -> Piece {
    let size = kind.size();
    let table = shape_table(kind);
    let rotations = [
        Rotation::new(size, &table[0]),
        Rotation::new(size, &table[1]),
        Rotation::new(size, &table[2]),
        Rotation::new(size, &table[3]),
    ];
    Piece::new(kind.color(), size, rotations)
}

pub fn i_piece() -> Piece {
    create(PieceKind::I)
}

pub fn j_piece() -> Piece {
    create(PieceKind::J)
}

pub fn l_piece() -> Piece {
    create(PieceKind::L)
}

pub fn o_piece() -> Piece {
    create(PieceKind::O)
}

pub fn s_piece() -> Piece {
    create(PieceKind::S)
}

pub fn t_piece() -> Piece {
    create(PieceKind::T)
}

pub fn z_piece() -> Piece {
    create(PieceKind::Z)
}

/// Factory for a piece kind
pub fn factory(kind: PieceKind) -> BlockFactory {
    match kind {
        PieceKind::I => i_piece,
        PieceKind::J => j_piece,
        PieceKind::L => l_piece,
        PieceKind::O => o_piece,
        PieceKind::S => s_piece,
        PieceKind::T => t_piece,
        PieceKind::Z => z_piece,
    }
}

/// The seven standard factories in catalog order (I, J, L, O, S, T, Z)
pub fn standard_factories() -> [BlockFactory; 7] {
    PieceKind::ALL.map(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, SPAWN_COLUMN, SPAWN_ROW};

    #[test]
    fn test_every_table_builds() {
        for kind in PieceKind::ALL {
            let piece = create(kind);
            assert_eq!(piece.size(), kind.size());
            assert_eq!(piece.color(), kind.color());
            assert_eq!(piece.position(), (SPAWN_ROW, SPAWN_COLUMN));
        }
    }

    #[test]
    fn test_factory_matches_kind() {
        assert_eq!(factory(PieceKind::T)().color(), Color::Purple);
        assert_eq!(factory(PieceKind::I)().size(), 4);
        assert_eq!(factory(PieceKind::O)().size(), 4);
        assert_eq!(factory(PieceKind::Z)().size(), 3);
    }

    #[test]
    fn test_o_piece_repeats_one_rotation() {
        let o = o_piece();
        let first = o.rotations()[0];
        assert!(o.rotations().iter().all(|r| *r == first));
    }

    #[test]
    fn test_standard_factories_cover_all_colors() {
        let colors: Vec<Color> = standard_factories().iter().map(|f| f().color()).collect();
        assert_eq!(
            colors,
            vec![
                Color::Cyan,
                Color::Blue,
                Color::Orange,
                Color::Yellow,
                Color::Green,
                Color::Purple,
                Color::Red,
            ]
        );
    }
}
