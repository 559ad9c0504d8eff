pub struct Reference;

impl Reference {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
}
