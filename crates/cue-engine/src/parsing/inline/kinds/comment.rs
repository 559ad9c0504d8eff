/// A comment swallows the rest of the text it starts in. Comments never
/// nest and nothing after the marker is tokenized.
pub struct Comment;

impl Comment {
    pub const MARKER: &'static [u8; 2] = b"//";
}
