use gridchess::{
    Board, CastlingError, CastlingSide, Color, Config, Coord, MoveError, Piece, PieceId,
};
use test_case::test_case;

fn c(row: u8, column: u8) -> Coord {
    Coord::new(row, column)
}

fn board(layout: &str) -> Board {
    Board::from_layout(Config::STANDARD, layout).unwrap()
}

fn lone(color: Color, piece: Piece, at: Coord) -> (Board, PieceId) {
    let mut b = Board::default();
    let id = b.create_piece(color, piece, at).unwrap();
    (b, id)
}

#[test]
fn bishop_on_empty_board() {
    let (mut b, _) = lone(Color::White, Piece::Bishop, c(4, 4));
    assert!(b.is_legal_move(c(4, 4), c(6, 6)));
    b.create_piece(Color::Black, Piece::Pawn, c(5, 5)).unwrap();
    assert!(!b.is_legal_move(c(4, 4), c(6, 6)));
    b.create_piece(Color::White, Piece::Pawn, c(5, 5)).unwrap();
    assert!(!b.is_legal_move(c(4, 4), c(6, 6)));
}

#[test_case(Piece::Bishop, c(4, 4), c(1, 1), true; "bishop diagonal")]
#[test_case(Piece::Bishop, c(4, 4), c(4, 1), false; "bishop straight")]
#[test_case(Piece::Rook, c(4, 4), c(4, 0), true; "rook row")]
#[test_case(Piece::Rook, c(4, 4), c(0, 4), true; "rook column")]
#[test_case(Piece::Rook, c(4, 4), c(5, 5), false; "rook diagonal")]
#[test_case(Piece::Queen, c(4, 4), c(7, 7), true; "queen diagonal")]
#[test_case(Piece::Queen, c(4, 4), c(4, 7), true; "queen row")]
#[test_case(Piece::Queen, c(4, 4), c(6, 5), false; "queen knight jump")]
#[test_case(Piece::Knight, c(4, 4), c(6, 5), true; "knight long")]
#[test_case(Piece::Knight, c(4, 4), c(3, 2), true; "knight wide")]
#[test_case(Piece::Knight, c(4, 4), c(6, 6), false; "knight diagonal")]
#[test_case(Piece::King, c(4, 4), c(3, 3), true; "king step")]
#[test_case(Piece::King, c(4, 4), c(4, 6), false; "king off castling row")]
#[test_case(Piece::Pawn, c(4, 4), c(3, 4), true; "pawn step")]
#[test_case(Piece::Pawn, c(4, 4), c(5, 4), false; "pawn backwards")]
#[test_case(Piece::Pawn, c(4, 4), c(2, 4), false; "pawn double off start row")]
#[test_case(Piece::Pawn, c(6, 4), c(4, 4), true; "pawn double from start row")]
fn shape_on_empty_board(piece: Piece, src: Coord, dst: Coord, legal: bool) {
    let (b, _) = lone(Color::White, piece, src);
    assert_eq!(b.is_legal_move(src, dst), legal);
}

#[test_case(Color::White, c(6, 3), c(5, 3); "white")]
#[test_case(Color::Black, c(1, 3), c(2, 3); "black")]
fn pawn_double_step_blocked(color: Color, start: Coord, ahead: Coord) {
    let (mut b, _) = lone(color, Piece::Pawn, start);
    let two = Coord::new(2 * ahead.row() - start.row(), start.column());
    assert!(b.is_legal_move(start, ahead));
    assert!(b.is_legal_move(start, two));

    b.create_piece(color.inv(), Piece::Knight, ahead).unwrap();
    assert_eq!(b.get(two), None);
    assert_eq!(b.validate_move(start, two), Err(MoveError::NotReachable(two)));
    assert_eq!(b.validate_move(start, ahead), Err(MoveError::NotReachable(ahead)));
}

#[test]
fn check_must_be_resolved() {
    // Black king on 0,4, white bishop checks it from 3,7
    let b = board("4k3/p1r5/8/7B/8/8/8/4K3");
    assert!(b.is_king_in_check(Color::Black));
    assert!(!b.is_king_in_check(Color::White));

    // Shape-legal, but doesn't help
    assert_eq!(b.validate_move(c(1, 0), c(2, 0)), Err(MoveError::ExposesKing));
    assert_eq!(b.validate_move(c(1, 2), c(2, 2)), Err(MoveError::ExposesKing));
    assert_eq!(b.validate_move(c(1, 2), c(1, 6)), Err(MoveError::ExposesKing));
    assert_eq!(b.validate_move(c(0, 4), c(1, 5)), Err(MoveError::ExposesKing));

    // Blocking the diagonal
    assert!(b.is_legal_move(c(1, 2), c(1, 5)));
    // Stepping away
    assert!(b.is_legal_move(c(0, 4), c(0, 3)));
    assert!(b.is_legal_move(c(0, 4), c(1, 4)));
}

#[test]
fn check_blocked_by_jump() {
    let b = board("4k3/8/8/4n2B/8/8/8/4K3");
    assert!(b.is_king_in_check(Color::Black));
    assert!(b.is_legal_move(c(3, 4), c(2, 6)));
    assert!(b.is_legal_move(c(3, 4), c(1, 5)));
    assert_eq!(b.validate_move(c(3, 4), c(1, 3)), Err(MoveError::ExposesKing));
}

#[test]
fn castling_accepted() {
    let mut b = board("4k3/8/8/8/8/8/8/R3K2R");
    let king = b.king(Color::White).unwrap();
    let rook = b.get(c(7, 7)).unwrap();

    let report = b.try_apply_move(c(7, 4), c(7, 6)).unwrap();
    assert_eq!(report.castling, Some(CastlingSide::Right));

    let king = b.piece(king.id).unwrap();
    let rook = b.piece(rook.id).unwrap();
    assert_eq!(king.coord, c(7, 6));
    assert_eq!(rook.coord, c(7, 5));
    assert!(king.moved);
    assert!(rook.moved);
    assert_eq!(b.get(c(7, 4)), None);
    assert_eq!(b.get(c(7, 7)), None);
    assert!(b.is_consistent());
}

#[test_case(
    "4k3/8/8/8/8/8/8/R3KB1R", &[], c(7, 6),
    CastlingError::PathBlocked(c(7, 5));
    "bishop in the way"
)]
#[test_case(
    "4k3/8/8/8/8/8/8/Rn2K2R", &[], c(7, 2),
    CastlingError::PathBlocked(c(7, 1));
    "knight next to rook"
)]
#[test_case(
    "4k3/8/8/8/8/8/5r2/R3K2R", &[], c(7, 6),
    CastlingError::SquareAttacked(c(7, 5));
    "rook covers transit"
)]
#[test_case(
    "4k3/8/8/8/2b5/8/8/R3K2R", &[], c(7, 6),
    CastlingError::SquareAttacked(c(7, 5));
    "bishop covers transit"
)]
#[test_case(
    "4k3/8/8/8/8/8/4n3/R3K2R", &[], c(7, 6),
    CastlingError::SquareAttacked(c(7, 6));
    "knight covers destination"
)]
#[test_case(
    "4k3/8/8/8/8/8/8/R3K2r", &[], c(7, 6),
    CastlingError::NoRook(c(7, 7));
    "enemy rook in corner"
)]
#[test_case(
    "4k3/p7/8/8/8/8/8/R3K2R",
    &[((7, 4), (7, 3)), ((1, 0), (2, 0)), ((7, 3), (7, 4)), ((2, 0), (3, 0))],
    c(7, 6),
    CastlingError::KingMoved;
    "king stepped out and back"
)]
fn castling_rejected(
    layout: &str,
    moves: &[((u8, u8), (u8, u8))],
    dst: Coord,
    err: CastlingError,
) {
    let mut b = board(layout);
    for &((sr, sc), (dr, dc)) in moves {
        assert!(b.apply_move(c(sr, sc), c(dr, dc)));
    }
    let before = b.clone();
    assert_eq!(
        b.try_apply_move(c(7, 4), dst),
        Err(MoveError::Castling(err))
    );
    assert_eq!(b, before);
}

#[test]
fn castling_after_rook_moved() {
    let mut b = board("4k3/p7/8/8/8/8/8/R3K2R");
    assert!(b.apply_move(c(7, 7), c(6, 7)));
    assert!(b.apply_move(c(1, 0), c(2, 0)));
    assert!(b.apply_move(c(6, 7), c(7, 7)));
    assert!(b.apply_move(c(2, 0), c(3, 0)));
    assert!(b.get(c(7, 7)).unwrap().moved);

    let before = b.clone();
    assert_eq!(
        b.try_apply_move(c(7, 4), c(7, 6)),
        Err(MoveError::Castling(CastlingError::RookMoved(c(7, 7))))
    );
    assert_eq!(b, before);
    assert!(b.apply_move(c(7, 4), c(7, 2)));
}

#[test]
fn castling_with_replaced_rook() {
    let mut b = board("4k2r/8/8/8/8/8/8/R3K2R");
    assert!(b.apply_move(c(7, 0), c(6, 0)));
    // Black rook takes the white one in its corner
    assert!(b.apply_move(c(0, 7), c(7, 7)));
    assert!(!b.castling().has(Color::White, CastlingSide::Right));

    let rook = b.create_piece(Color::White, Piece::Rook, c(7, 7)).unwrap();
    assert!(!b.piece(rook).unwrap().moved);
    assert!(!b.king(Color::White).unwrap().moved);
    assert_eq!(b.validate_move(c(7, 4), c(7, 6)), Ok(()));

    let report = b.try_apply_move(c(7, 4), c(7, 6)).unwrap();
    assert_eq!(report.castling, Some(CastlingSide::Right));
    assert_eq!(b.piece(rook).unwrap().coord, c(7, 5));
    assert_eq!(b.king(Color::White).unwrap().coord, c(7, 6));
    assert!(b.is_consistent());
}

#[test]
fn capture_removes_piece() {
    let mut b = board("4k3/8/8/3p4/4P3/8/8/4K3");
    let victim = b.get(c(3, 3)).unwrap();
    let pawn = b.get(c(4, 4)).unwrap();
    let report = b.try_apply_move(c(4, 4), c(3, 3)).unwrap();
    assert_eq!(report.captured, Some(victim));
    assert_eq!(b.piece(victim.id), None);
    assert_eq!(b.get(c(3, 3)).map(|p| p.id), Some(pawn.id));
    assert_eq!(b.pieces().filter(|p| p.id == victim.id).count(), 0);
    assert_eq!(b.len(), 3);
}

#[test]
fn turns_alternate() {
    let mut b = Board::initial();
    let moves = [
        ((6, 4), (4, 4)),
        ((1, 4), (3, 4)),
        ((7, 6), (5, 5)),
        ((0, 1), (2, 2)),
        ((7, 5), (4, 2)),
    ];
    let mut side = Color::White;
    for ((sr, sc), (dr, dc)) in moves {
        assert_eq!(b.side(), side);
        // The other side cannot move out of turn
        let other = b.pieces().find(|p| p.color != side && p.piece == Piece::Pawn).unwrap();
        let step = Coord::new(
            (i16::from(other.coord.row()) + if side == Color::White { 1 } else { -1 }) as u8,
            other.coord.column(),
        );
        assert_eq!(
            b.try_apply_move(other.coord, step),
            Err(MoveError::WrongTurn(other.coord))
        );
        assert!(b.apply_move(c(sr, sc), c(dr, dc)));
        side = side.inv();
    }
    assert_eq!(b.side(), Color::Black);
}
