use std::collections::BTreeMap;

use rustc_serialize::{Decodable, Decoder, Encodable, Encoder};

/// A stored post. `text` is the only required field; callers may attach any
/// number of additional string-valued fields at creation time. Posts carry
/// no identity and no timestamps.
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    text: String,
    extras: BTreeMap<String, String>,
}

// Equivalent to the former `RustcEncodable`/`RustcDecodable` derives, which
// are no longer supported by the compiler.
impl Encodable for Post {
    fn encode<S: Encoder>(&self, s: &mut S) -> Result<(), S::Error> {
        s.emit_struct("Post", 2, |s| {
            s.emit_struct_field("text", 0, |s| self.text.encode(s))?;
            s.emit_struct_field("extras", 1, |s| self.extras.encode(s))
        })
    }
}

impl Decodable for Post {
    fn decode<D: Decoder>(d: &mut D) -> Result<Post, D::Error> {
        d.read_struct("Post", 2, |d| {
            Ok(Post {
                text: d.read_struct_field("text", 0, Decodable::decode)?,
                extras: d.read_struct_field("extras", 1, Decodable::decode)?,
            })
        })
    }
}

impl Post {
    pub fn new(text: &str) -> Post {
        Post {
            text: text.to_string(),
            extras: BTreeMap::new(),
        }
    }

    /// Attach an arbitrary extra field. Re-using a key overwrites the
    /// previous value.
    pub fn with_extra(mut self, key: &str, value: &str) -> Post {
        self.extras.insert(key.to_string(), value.to_string());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(|value| value.as_str())
    }
}
