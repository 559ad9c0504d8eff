pub struct Emphasis;

impl Emphasis {
    pub const MARKER: u8 = b'*';
    pub const STRONG: &'static [u8; 2] = b"**";
}
