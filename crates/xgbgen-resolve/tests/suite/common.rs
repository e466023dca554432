use xgbgen_resolve::{resolve_imports, MemorySource};
use xgbgen_syntax::{parse_document, Document};

pub const XPROTO: &str = r#"<xcb header="xproto">
  <xidtype name="WINDOW" />
  <xidtype name="PIXMAP" />
  <xidunion name="DRAWABLE"><type>WINDOW</type><type>PIXMAP</type></xidunion>
  <typedef oldname="CARD32" newname="TIMESTAMP" />
  <typedef oldname="CARD8" newname="KEYCODE" />
  <struct name="POINT">
    <field type="INT16" name="x" />
    <field type="INT16" name="y" />
  </struct>
  <union name="ClientMessageData">
    <list type="CARD8" name="data8"><value>20</value></list>
  </union>
  <enum name="EventMask">
    <item name="NoEvent"><value>0</value></item>
    <item name="KeyPress"><bit>0</bit></item>
  </enum>
</xcb>"#;

/// Parses `text` and binds its imports from `imports` (name, text) pairs.
pub fn resolved(text: &str, imports: &[(&str, &str)]) -> Document {
    let mut source = MemorySource::new();
    for (name, body) in imports {
        source.insert(*name, *body);
    }
    let mut doc = parse_document(text).expect("test document parses");
    resolve_imports(&mut doc, &source).expect("test imports resolve");
    doc
}
