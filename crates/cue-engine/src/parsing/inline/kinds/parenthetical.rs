/// Parenthetical asides. Only recognized inside cue directions.
pub struct Parenthetical;

impl Parenthetical {
    pub const OPEN: u8 = b'(';
    pub const CLOSE: u8 = b')';
}
