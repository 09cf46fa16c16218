//! Shared fixtures for the report integration tests.

use eval_core::Sq;

/// A condensed but grammar-faithful engine report for one middlegame
/// position, exercising every section the parser understands. Section
/// labels reproduce the engine's spelling, "matetial", "Trheats",
/// "Threads" and "atacked" included.
pub const SAMPLE_REPORT: &str = r#"Patched engine build 2024
info string eval trace enabled
Begin position analysis.
Material:
White matetial:
 Pawns: 5
 Bishops: 2
 Bishops pair:true
 Knight: 1
 Rooks: 2
 Queens: 1
Black matetial:
 Pawns: 5
 Bishops: 1
 Bishops pair:false
 Knight: 2
 Rooks: 2
 Queens: 1

Pawn structure:
Pawn structure of White:
Pawn of a2 square:
    Cannot be supported by our pawns
    Is a backward pawn: false
Pawn of e5 square:
    The pawn is free to advance
    Is a backward pawn: false
Pawn of f2 square:
    The pawn is supported by other pawns
    Is a backward pawn: false
Pawn of g2 square:
    The pawn is supported by other pawns
    Is a backward pawn: false
Pawn of h2 square:
    The pawn is supported by other pawns
    Is a backward pawn: false
Pawn structure of Black:
Pawn of a7 square:
    The pawn is supported by other pawns
    Is a backward pawn: false
Pawn of b7 square:
    The pawn is supported by other pawns
    Is a backward pawn: false
Pawn of c5 square:
    Cannot be supported by our pawns
    Is a backward pawn: true
Pawn of g6 square:
    The pawn is supported by other pawns
    Is a backward pawn: false
Pawn of h5 square:
    The pawn is supported by other pawns
    Is a backward pawn: false

Pieces activity:
White Bishop of square c1:
    Squares controlled by the Bishop: D2, E3, F4, G5
    The Bishop can move to: 4 squares
    The Bishop is 2 squares far from our king
    Pawns on the same bishop color squared: 2
    Number of enemy pawns x-rayed: 1
    The bishop is on a long diagonal and can see both center squares.
White Rook of square a1:
    Squares controlled by the Rook: A2, B1, C1
    The Rook can move to: 3 squares
    The rook is on (semi-)open column.
Black Queen of square d8:
    Squares controlled by the Queen: D7, D6, E7
    The Queen can move to: 5 squares
    Exists pin in or discover attack over de queen.
Black Knight of square f6:
    The Knight can move to: 6 squares
    The Knight is 3 squares far from our king

NNUE piece values:
White Bishop of c1: 0.52
White Rook of a1: 1.27
Black Queen of d8: 2.71

King safety:
White King safety:
    Squares attacked at King flank: F2, G2, H2
    Squares attacked twice at King flank: G2
    Squares defended at King flank: F2, G2, H2, G1
    Knight checks availables: E2
    Queen checks availables: H4, E1
Black King safety:
    Squares attacked at King flank: F7, G7
    Squares defended at King flank: F7, G7, H7

Space:
Space of White:
    Squares behind or at our pawns: C2, D2, E2, C3, D3, E3
Space of Black:
    Squares behind or at our pawns: C6, D6, E6, D7

Trheats:
Threads of White:
    Enemies atacked by knights: C5, D8
    Enemies atacked by rooks: A7
    Squares where our pawns can push on the next move:E6, F3
Threads of Black:
    Enemies atacked by Bishops: F2
    Enemies atacked by Queens: D2
    Enemies atacked by king: G2

Passed pawns of White:
Passed pawn of e5 square:
    Is at 3 squares of promotion
    The king enemy is at 4 squares of distance of it
    Is not blocked and free to advance

Passed pawns of Black:
Passed pawn of c5 square:
    Is at 4 squares of promotion
    The king enemy is at 2 squares of distance of it
    Is blocked and can not advance

End position analysis.
Total evaluation: +0.48 (white side)
"#;

pub fn sq(name: &str) -> Sq {
    Sq::parse(name).unwrap()
}

pub fn sqs(names: &[&str]) -> Vec<Sq> {
    names.iter().map(|n| sq(n)).collect()
}
